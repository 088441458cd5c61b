use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::{
    config::WeatherSettings,
    model::{WeatherRequest, WeatherReport},
};

use super::WeatherProvider;

/// Offline provider that reports the same conditions for every city.
#[derive(Debug, Clone)]
pub struct MockWeatherProvider {
    settings: WeatherSettings,
}

impl MockWeatherProvider {
    pub fn new(settings: WeatherSettings) -> Self {
        Self { settings }
    }
}

impl Default for MockWeatherProvider {
    fn default() -> Self {
        Self::new(WeatherSettings::default())
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherReport> {
        debug!(city = %request.city, "serving mock weather");

        Ok(WeatherReport {
            provider: "mock".to_string(),
            city: request.city.clone(),
            condition: self.settings.condition.clone(),
            temperature_c: self.settings.temperature_c,
        })
    }
}
