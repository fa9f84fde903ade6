use std::{fmt, future::Future, pin::Pin, sync::Arc};

use crate::{
    error::LookupError,
    model::{TempUnit, WeatherRecord},
    provider::WeatherProvider,
    state::{Phase, PresentationState},
    surface::{Control, Region, RenderSurface},
};

type LookupFuture = Pin<Box<dyn Future<Output = Result<WeatherRecord, LookupError>> + Send>>;

/// A lookup that has been started but not yet applied to the view.
///
/// Nothing cancels it: once resolved, its outcome is handed to
/// [`ViewController::finish`], and whichever outcome is finished last is
/// what the view shows.
pub struct PendingLookup {
    city: String,
    future: LookupFuture,
}

impl PendingLookup {
    pub fn city(&self) -> &str {
        &self.city
    }

    pub async fn resolve(self) -> LookupOutcome {
        LookupOutcome {
            result: self.future.await,
            city: self.city,
        }
    }
}

impl fmt::Debug for PendingLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingLookup").field("city", &self.city).finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LookupOutcome {
    pub city: String,
    pub result: Result<WeatherRecord, LookupError>,
}

/// Drives search, preset selection and unit toggling against a provider,
/// and renders the result on a surface.
#[derive(Debug)]
pub struct ViewController<S> {
    provider: Arc<dyn WeatherProvider>,
    surface: S,
    state: PresentationState,
    phase: Phase,
}

impl<S: RenderSurface> ViewController<S> {
    pub fn new(provider: Arc<dyn WeatherProvider>, surface: S, unit: TempUnit) -> Self {
        Self {
            provider,
            surface,
            state: PresentationState::new(unit),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Search for the startup city, as if it had been picked by the user.
    pub async fn initialize(&mut self, default_city: &str) {
        self.select_preset(default_city).await;
    }

    /// Fill the input with a preset city and search for it.
    pub async fn select_preset(&mut self, city: &str) {
        self.surface.set_text(Region::CityInput, city);
        self.search(city).await;
    }

    /// Submit `input` and wait for the lookup to settle.
    /// Blank input is ignored.
    pub async fn search(&mut self, input: &str) {
        if let Some(pending) = self.begin_search(input) {
            let outcome = pending.resolve().await;
            self.finish(outcome);
        }
    }

    /// Enter `Loading` and start a lookup for the trimmed input.
    ///
    /// Returns `None` without touching the view when the input is blank.
    pub fn begin_search(&mut self, input: &str) -> Option<PendingLookup> {
        let city = input.trim();
        if city.is_empty() {
            tracing::debug!("ignoring blank search");
            return None;
        }

        tracing::info!(city, "looking up weather");
        self.hide_displays();
        self.surface.set_visible(Region::Loading, true);
        self.surface.set_disabled(Control::Search, true);
        self.phase = Phase::Loading;

        let provider = Arc::clone(&self.provider);
        let owned = city.to_string();
        let future: LookupFuture = Box::pin(async move { provider.get_weather(&owned).await });

        Some(PendingLookup {
            city: city.to_string(),
            future,
        })
    }

    /// Apply a settled lookup to the state and the view.
    pub fn finish(&mut self, outcome: LookupOutcome) {
        match outcome.result {
            Ok(record) => self.display(record),
            Err(err) => {
                tracing::debug!(city = %outcome.city, error = %err, "lookup failed");
                self.hide_displays();
                self.surface.set_visible(Region::Error, true);
                self.phase = Phase::Error;
            }
        }
        self.surface.set_disabled(Control::Search, false);
    }

    /// Flip between Celsius and Fahrenheit, re-rendering only the temperature.
    pub fn toggle_unit(&mut self) -> TempUnit {
        self.state.unit = self.state.unit.toggle();
        self.render_temperature();
        self.state.unit
    }

    fn display(&mut self, record: WeatherRecord) {
        let theme = record.condition.theme();

        self.surface.set_text(Region::Icon, record.condition.icon());
        self.surface.set_text(Region::Location, &record.location_label());
        self.surface.set_text(Region::Condition, record.condition.as_str());
        self.surface.set_text(Region::Humidity, &record.humidity_label());
        self.surface.set_text(Region::WindSpeed, &record.wind_label());

        self.state.current = Some(record);
        self.render_temperature();

        self.surface.set_theme(theme);
        self.surface.set_visible(Region::Loading, false);
        self.surface.set_visible(Region::Card, true);
        self.phase = Phase::Displaying;
    }

    fn render_temperature(&mut self) {
        if let Some(label) = self.state.temperature_label() {
            self.surface.set_text(Region::Temperature, &label);
        }
    }

    fn hide_displays(&mut self) {
        self.surface.set_visible(Region::Card, false);
        self.surface.set_visible(Region::Error, false);
        self.surface.set_visible(Region::Loading, false);
    }
}
