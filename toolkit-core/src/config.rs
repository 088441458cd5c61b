use crate::provider::ProviderId;

/// Values the mock weather provider reports.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSettings {
    pub condition: String,
    pub temperature_c: f64,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self { condition: "sunny".to_string(), temperature_c: 25.0 }
    }
}

/// In-process configuration. There is no config file; defaults live here and
/// command-line flags override them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub default_provider: ProviderId,
    pub weather: WeatherSettings,
}

impl Config {
    pub fn default_provider_id(&self) -> ProviderId {
        self.default_provider
    }

    pub fn set_default_provider(&mut self, id: ProviderId) {
        self.default_provider = id;
    }

    /// Convenience helper: override the default provider when one is given.
    pub fn with_provider(mut self, id: Option<ProviderId>) -> Self {
        if let Some(id) = id {
            self.set_default_provider(id);
        }
        self
    }
}
