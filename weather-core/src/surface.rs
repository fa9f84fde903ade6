//! Rendering surface the controller draws on.
//!
//! The controller never touches a concrete UI toolkit; it only needs the four
//! capabilities of [`RenderSurface`].

use std::collections::HashMap;

use crate::model::Theme;

/// Named display regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Text field holding the city being searched.
    CityInput,
    Icon,
    Location,
    Temperature,
    Condition,
    Humidity,
    WindSpeed,
    /// Container of the record fields above.
    Card,
    Loading,
    Error,
}

/// Interactive controls that can be disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Search,
}

pub trait RenderSurface {
    fn set_text(&mut self, region: Region, value: &str);
    fn set_visible(&mut self, region: Region, visible: bool);
    /// Replace whatever theme is active with `theme`.
    fn set_theme(&mut self, theme: Theme);
    fn set_disabled(&mut self, control: Control, disabled: bool);
}

/// One call made on a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Text(Region, String),
    Visible(Region, bool),
    Theme(Theme),
    Disabled(Control, bool),
}

/// Headless surface keeping the latest value of every region plus a log of
/// all calls in order.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    texts: HashMap<Region, String>,
    visible: HashMap<Region, bool>,
    disabled: HashMap<Control, bool>,
    theme: Option<Theme>,
    calls: Vec<SurfaceCall>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, region: Region) -> Option<&str> {
        self.texts.get(&region).map(String::as_str)
    }

    /// Regions are hidden until shown.
    pub fn is_visible(&self, region: Region) -> bool {
        self.visible.get(&region).copied().unwrap_or(false)
    }

    pub fn is_disabled(&self, control: Control) -> bool {
        self.disabled.get(&control).copied().unwrap_or(false)
    }

    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Drain the call log, keeping the current view.
    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }
}

impl RenderSurface for MemorySurface {
    fn set_text(&mut self, region: Region, value: &str) {
        self.texts.insert(region, value.to_string());
        self.calls.push(SurfaceCall::Text(region, value.to_string()));
    }

    fn set_visible(&mut self, region: Region, visible: bool) {
        self.visible.insert(region, visible);
        self.calls.push(SurfaceCall::Visible(region, visible));
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
        self.calls.push(SurfaceCall::Theme(theme));
    }

    fn set_disabled(&mut self, control: Control, disabled: bool) {
        self.disabled.insert(control, disabled);
        self.calls.push(SurfaceCall::Disabled(control, disabled));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_latest_values_and_log() {
        let mut surface = MemorySurface::new();
        assert!(!surface.is_visible(Region::Card));

        surface.set_text(Region::Temperature, "18°C");
        surface.set_text(Region::Temperature, "64°F");
        surface.set_visible(Region::Card, true);
        surface.set_theme(Theme::Cloudy);
        surface.set_theme(Theme::Rainy);

        assert_eq!(surface.text(Region::Temperature), Some("64°F"));
        assert!(surface.is_visible(Region::Card));
        assert_eq!(surface.theme(), Some(Theme::Rainy));
        assert_eq!(surface.calls().len(), 5);

        let drained = surface.take_calls();
        assert_eq!(drained[0], SurfaceCall::Text(Region::Temperature, "18°C".into()));
        assert!(surface.calls().is_empty());
        assert_eq!(surface.text(Region::Temperature), Some("64°F"));
    }
}
