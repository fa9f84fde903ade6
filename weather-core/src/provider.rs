use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::LookupError, model::WeatherRecord};

pub mod catalog;

pub use catalog::CatalogProvider;

/// Asynchronous city lookup.
///
/// A call always settles exactly once: there is no retry, timeout or
/// cancellation on top of whatever latency the implementation has.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, city: &str) -> Result<WeatherRecord, LookupError>;
}
