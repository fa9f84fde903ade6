use anyhow::{Context, anyhow, bail};
use clap::{Parser, Subcommand};
use inquire::{CustomType, InquireError, Select, Text};
use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};
use weather_core::{
    Config, LookupError, MemorySurface, Phase, Region, RenderSurface, TempUnit, ViewController,
};

use crate::render;

type Controller = ViewController<MemorySurface>;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather lookup widget")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Defaults to `interactive`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search interactively: presets, free text and unit toggle.
    Interactive,

    /// Show weather for a single city.
    Show {
        /// City name, matched exactly.
        city: String,

        /// Temperature unit: c or f. Defaults to the configured unit.
        #[arg(long)]
        unit: Option<TempUnit>,

        /// Print the record as JSON instead of a card.
        #[arg(long)]
        json: bool,
    },

    /// List the cities in the catalog.
    Cities,

    /// Edit the configuration file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let command = self.command.unwrap_or(Command::Interactive);
        let config = load_config(self.config.as_deref(), &command)?;

        match command {
            Command::Interactive => interactive(&config).await,
            Command::Show { city, unit, json } => show(&config, &city, unit, json).await,
            Command::Cities => {
                let catalog = config.catalog()?;
                for city in catalog.cities() {
                    if let Some(record) = catalog.lookup(city) {
                        println!(
                            "{:<12} {:<10} {:>4}  {}",
                            record.city,
                            record.country,
                            TempUnit::Celsius.format(record.temperature_c),
                            record.condition
                        );
                    }
                }
                Ok(())
            }
            Command::Configure => configure(config, self.config),
        }
    }
}

/// Load the config for `command`. `configure` starts from defaults when the
/// file is unreadable, since it is the way to repair it.
fn load_config(path: Option<&Path>, command: &Command) -> anyhow::Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    match (loaded, command) {
        (Ok(config), _) => Ok(config),
        (Err(err), Command::Configure) => {
            tracing::warn!(error = %format!("{err:#}"), "ignoring unreadable config");
            Ok(Config::default())
        }
        (Err(err), _) => Err(err),
    }
}

fn controller(config: &Config, unit: TempUnit) -> anyhow::Result<Controller> {
    let provider = Arc::new(config.provider()?);
    Ok(ViewController::new(provider, MemorySurface::new(), unit))
}

async fn show(
    config: &Config,
    city: &str,
    unit: Option<TempUnit>,
    json: bool,
) -> anyhow::Result<()> {
    if city.trim().is_empty() {
        bail!("City name must not be empty");
    }

    let unit = unit.unwrap_or_else(|| config.default_unit());
    let mut controller = controller(config, unit)?;
    controller.search(city).await;

    if controller.phase() == Phase::Error {
        bail!("{}: '{city}'", LookupError::CityNotFound);
    }

    if json {
        let record = controller
            .state()
            .current
            .as_ref()
            .ok_or_else(|| anyhow!("No record displayed"))?;
        println!(
            "{}",
            serde_json::to_string_pretty(record).context("Failed to serialize record")?
        );
    } else {
        render::print_view(controller.surface());
    }

    Ok(())
}

/// Menu entries of the interactive loop.
enum MenuItem {
    Preset(String),
    Search,
    ToggleUnit(TempUnit),
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuItem::Preset(city) => write!(f, "{city}"),
            MenuItem::Search => f.write_str("Search for a city..."),
            MenuItem::ToggleUnit(current) => {
                write!(f, "Switch to {}", current.toggle().symbol())
            }
            MenuItem::Quit => f.write_str("Quit"),
        }
    }
}

async fn interactive(config: &Config) -> anyhow::Result<()> {
    let mut controller = controller(config, config.default_unit())?;

    pick_preset(&mut controller, config.default_city()).await;

    loop {
        let mut items = Vec::new();
        if render::search_enabled(controller.surface()) {
            items.extend(config.presets().into_iter().map(MenuItem::Preset));
            items.push(MenuItem::Search);
        }
        items.push(MenuItem::ToggleUnit(controller.state().unit));
        items.push(MenuItem::Quit);

        let choice = match Select::new("Weather", items).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read menu choice"),
        };

        match choice {
            MenuItem::Preset(city) => pick_preset(&mut controller, &city).await,
            MenuItem::Search => {
                let current = controller.surface().text(Region::CityInput).unwrap_or("");
                let input = match Text::new("City:").with_initial_value(current).prompt() {
                    Ok(input) => input,
                    Err(InquireError::OperationCanceled) => continue,
                    Err(InquireError::OperationInterrupted) => break,
                    Err(err) => return Err(err).context("Failed to read city name"),
                };
                controller.surface_mut().set_text(Region::CityInput, &input);
                search(&mut controller, &input).await;
            }
            MenuItem::ToggleUnit(_) => {
                controller.toggle_unit();
                render::print_view(controller.surface());
            }
            MenuItem::Quit => break,
        }
    }

    Ok(())
}

async fn pick_preset(controller: &mut Controller, city: &str) {
    controller.surface_mut().set_text(Region::CityInput, city);
    search(controller, city).await;
}

/// Like [`ViewController::search`], but prints the loading view while the
/// lookup is pending.
async fn search(controller: &mut Controller, input: &str) {
    let Some(pending) = controller.begin_search(input) else {
        return;
    };
    render::print_view(controller.surface());

    let outcome = pending.resolve().await;
    controller.finish(outcome);
    render::print_view(controller.surface());
}

fn configure(mut config: Config, path: Option<PathBuf>) -> anyhow::Result<()> {
    config.default_city = Some(
        Text::new("Default city:")
            .with_default(config.default_city())
            .prompt()?,
    );

    let units = vec![TempUnit::Celsius, TempUnit::Fahrenheit];
    let start = usize::from(config.default_unit() == TempUnit::Fahrenheit);
    let unit = Select::new("Default unit:", units)
        .with_starting_cursor(start)
        .prompt()?;
    config.default_unit = Some(unit);

    let latency: u64 = CustomType::new("Simulated latency (ms):")
        .with_default(config.latency().as_millis() as u64)
        .with_error_message("Please enter a whole number of milliseconds")
        .prompt()?;
    config.latency_ms = Some(latency);

    let catalog = Text::new("Extra catalog file (leave empty for none):")
        .with_initial_value(
            &config
                .catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        )
        .prompt()?;
    config.catalog_path = match catalog.trim() {
        "" => None,
        path => Some(PathBuf::from(path)),
    };
    config.catalog().context("Catalog file is not usable")?;

    let saved = match path {
        Some(path) => {
            config.save_to(&path)?;
            path
        }
        None => config.save()?,
    };
    println!("Configuration saved to {}", saved.display());

    Ok(())
}
