use crate::{
    Config, WeatherReport, WeatherRequest, error::ToolError, provider::mock::MockWeatherProvider,
};
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};

pub mod mock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderId {
    #[default]
    Mock,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Mock => "mock",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::Mock]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = ToolError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "mock" => Ok(ProviderId::Mock),
            _ => Err(ToolError::UnknownProvider(value.to_string())),
        }
    }
}

/// Source of weather reports. The dispatcher and output layer only see this trait.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, request: &WeatherRequest) -> anyhow::Result<WeatherReport>;
}

/// Construct a provider from config and explicit ProviderId.
pub fn provider_from_config(id: ProviderId, config: &Config) -> Box<dyn WeatherProvider> {
    match id {
        ProviderId::Mock => Box::new(MockWeatherProvider::new(config.weather.clone())),
    }
}

/// Construct the default provider from config, using `default_provider` field.
pub fn default_provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    provider_from_config(config.default_provider, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeatherSettings;

    #[test]
    fn provider_id_as_str_roundtrip() {
        for id in ProviderId::all() {
            let s = id.as_str();
            let parsed = ProviderId::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn provider_id_is_case_insensitive() {
        assert_eq!(ProviderId::try_from("MOCK"), Ok(ProviderId::Mock));
    }

    #[test]
    fn unknown_provider_error() {
        let err = ProviderId::try_from("openweather").unwrap_err();
        assert!(err.to_string().contains("Unknown provider"));
    }

    #[tokio::test]
    async fn default_provider_from_config_uses_weather_settings() {
        let mut cfg = Config::default();
        cfg.weather = WeatherSettings { condition: "rainy".into(), temperature_c: 9.0 };

        let provider = default_provider_from_config(&cfg);
        let report = provider.get_weather(&WeatherRequest::new("Oslo")).await.unwrap();

        assert_eq!(report.provider, "mock");
        assert_eq!(report.condition, "rainy");
        assert_eq!(report.temperature_c, 9.0);
    }
}
