//! Weather data models

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current conditions at the detected city.
///
/// Derived fresh on every request; never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub description: String,
    pub temperature_c: f64,
    pub humidity_percent: u8,
    pub wind_speed_mps: f64,
}

impl fmt::Display for WeatherSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Temp: {}°C, Humidité: {}%, Vent: {} m/s",
            self.description, self.temperature_c, self.humidity_percent, self.wind_speed_mps
        )
    }
}

/// One summarized forecast day, reduced from the 3-hourly payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastEntry {
    pub date: NaiveDate,
    pub description: String,
    pub temperature_c: f64,
    pub humidity_percent: u8,
    pub wind_speed_mps: f64,
}

impl fmt::Display for ForecastEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "📅 {} : {}, {:.0}°C, humidité {}%, vent {:.1} m/s",
            self.date,
            self.description,
            self.temperature_c,
            self.humidity_percent,
            self.wind_speed_mps
        )
    }
}
