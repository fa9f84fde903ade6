use async_trait::async_trait;
use std::time::Duration;

use crate::{catalog::WeatherCatalog, error::LookupError, model::WeatherRecord};

use super::WeatherProvider;

/// Latency the widget simulates for every lookup.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Serves records from an in-memory catalog after a fixed delay,
/// standing in for a real network call.
#[derive(Debug, Clone)]
pub struct CatalogProvider {
    catalog: WeatherCatalog,
    latency: Duration,
}

impl CatalogProvider {
    pub fn new(catalog: WeatherCatalog) -> Self {
        Self::with_latency(catalog, DEFAULT_LATENCY)
    }

    pub fn with_latency(catalog: WeatherCatalog, latency: Duration) -> Self {
        Self { catalog, latency }
    }

    pub fn catalog(&self) -> &WeatherCatalog {
        &self.catalog
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl WeatherProvider for CatalogProvider {
    async fn get_weather(&self, city: &str) -> Result<WeatherRecord, LookupError> {
        tokio::time::sleep(self.latency).await;

        match self.catalog.lookup(city) {
            Some(record) => Ok(record.clone()),
            None => {
                tracing::debug!(city, "city not found in catalog");
                Err(LookupError::CityNotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io,
        sync::{Arc, Mutex},
    };
    use tokio::time::Instant;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn resolves_every_catalog_city_with_matching_record() {
        let provider = CatalogProvider::new(WeatherCatalog::builtin());

        for city in provider.catalog().cities() {
            let record = provider.get_weather(city).await.unwrap();
            assert_eq!(record.city, city);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_city_is_not_found() {
        let provider = CatalogProvider::new(WeatherCatalog::builtin());

        let err = provider.get_weather("Atlantis").await.unwrap_err();
        assert_eq!(err, LookupError::CityNotFound);
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_simulated_latency() {
        let provider = CatalogProvider::new(WeatherCatalog::builtin());
        let started = Instant::now();

        provider.get_weather("Paris").await.unwrap();

        assert!(started.elapsed() >= DEFAULT_LATENCY);
    }

    #[tokio::test(start_paused = true)]
    async fn not_found_also_waits() {
        let provider =
            CatalogProvider::with_latency(WeatherCatalog::builtin(), Duration::from_millis(250));
        let started = Instant::now();

        assert!(provider.get_weather("Atlantis").await.is_err());
        assert!(started.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn not_found_is_silent_at_warn_level() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let provider =
            CatalogProvider::with_latency(WeatherCatalog::builtin(), Duration::from_millis(1));
        assert!(provider.get_weather("Atlantis").await.is_err());
        tracing::warn!("end of lookup");

        let text = logs.text();
        assert!(text.contains("end of lookup"));
        assert!(!text.contains("Atlantis"));
    }
}
