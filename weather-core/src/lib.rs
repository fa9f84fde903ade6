//! Core library for the `weather` lookup widget.
//!
//! This crate defines:
//! - The immutable city catalog and its records
//! - Celsius/Fahrenheit conversion
//! - An asynchronous lookup service with simulated latency
//! - The view controller and the rendering surface it draws on
//! - Configuration handling
//!
//! It is used by `weather-cli`, but any front end implementing
//! [`RenderSurface`] can drive a [`ViewController`].

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod provider;
pub mod state;
pub mod surface;
pub mod units;

pub use catalog::WeatherCatalog;
pub use config::Config;
pub use controller::{LookupOutcome, PendingLookup, ViewController};
pub use error::{CatalogError, LookupError};
pub use model::{Condition, TempUnit, Theme, WeatherRecord};
pub use provider::{CatalogProvider, WeatherProvider};
pub use state::{Phase, PresentationState};
pub use surface::{Control, MemorySurface, Region, RenderSurface};
