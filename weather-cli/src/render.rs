use weather_core::{Control, MemorySurface, Region};

pub const ERROR_MESSAGE: &str = "City not found. Please try another city.";

/// Text form of whatever the surface currently shows.
pub fn view_text(surface: &MemorySurface) -> String {
    let mut out = String::new();

    if surface.is_visible(Region::Loading) {
        out.push_str("Loading weather...\n");
    }

    if surface.is_visible(Region::Error) {
        out.push_str(ERROR_MESSAGE);
        out.push('\n');
    }

    if surface.is_visible(Region::Card) {
        let text = |region| surface.text(region).unwrap_or("-");
        let theme = surface.theme().map(|t| t.id()).unwrap_or_default();

        out.push_str(&format!("{}  {}  [{}]\n", text(Region::Icon), text(Region::Location), theme));
        out.push_str(&format!(
            "   {}  {}\n",
            text(Region::Temperature),
            text(Region::Condition)
        ));
        out.push_str(&format!(
            "   Humidity {}   Wind {}\n",
            text(Region::Humidity),
            text(Region::WindSpeed)
        ));
    }

    out
}

pub fn print_view(surface: &MemorySurface) {
    print!("{}", view_text(surface));
}

pub fn search_enabled(surface: &MemorySurface) -> bool {
    !surface.is_disabled(Control::Search)
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::{RenderSurface, Theme};

    #[test]
    fn renders_card() {
        let mut surface = MemorySurface::new();
        surface.set_text(Region::Icon, "☁️");
        surface.set_text(Region::Location, "London, UK");
        surface.set_text(Region::Temperature, "18°C");
        surface.set_text(Region::Condition, "Cloudy");
        surface.set_text(Region::Humidity, "72%");
        surface.set_text(Region::WindSpeed, "12 km/h");
        surface.set_theme(Theme::Cloudy);
        surface.set_visible(Region::Card, true);

        let text = view_text(&surface);
        assert!(text.starts_with("☁️  London, UK  [theme-cloudy]"));
        assert!(text.contains("18°C  Cloudy"));
        assert!(text.contains("Humidity 72%   Wind 12 km/h"));
        assert!(!text.contains(ERROR_MESSAGE));
    }

    #[test]
    fn renders_loading_and_error() {
        let mut surface = MemorySurface::new();
        assert!(view_text(&surface).is_empty());

        surface.set_visible(Region::Loading, true);
        surface.set_disabled(Control::Search, true);
        assert_eq!(view_text(&surface), "Loading weather...\n");
        assert!(!search_enabled(&surface));

        surface.set_visible(Region::Loading, false);
        surface.set_visible(Region::Error, true);
        surface.set_disabled(Control::Search, false);
        assert_eq!(view_text(&surface), format!("{ERROR_MESSAGE}\n"));
        assert!(search_enabled(&surface));
    }
}
