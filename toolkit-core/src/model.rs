use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub city: String,
}

impl WeatherRequest {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub provider: String,
    pub city: String,
    pub condition: String,
    pub temperature_c: f64,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The current weather in {} is {} with a temperature of {}°C.",
            self.city, self.condition, self.temperature_c
        )
    }
}
