use crate::model::{TempUnit, WeatherRecord};

/// What the view currently shows.
///
/// `current` is replaced wholesale on each successful lookup; `unit` only
/// affects how the record's temperature is rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresentationState {
    pub current: Option<WeatherRecord>,
    pub unit: TempUnit,
}

impl PresentationState {
    pub fn new(unit: TempUnit) -> Self {
        Self { current: None, unit }
    }

    /// Temperature text for the current record, if any.
    pub fn temperature_label(&self) -> Option<String> {
        self.current
            .as_ref()
            .map(|record| self.unit.format(record.temperature_c))
    }
}

/// Lifecycle of the view. Any phase may move back to `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Displaying,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WeatherCatalog;

    #[test]
    fn temperature_label_follows_unit() {
        let mut state = PresentationState::default();
        assert_eq!(state.temperature_label(), None);

        state.current = WeatherCatalog::builtin().lookup("Moscow").cloned();
        assert_eq!(state.temperature_label().as_deref(), Some("-5°C"));

        state.unit = state.unit.toggle();
        assert_eq!(state.temperature_label().as_deref(), Some("23°F"));
    }
}
