//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap API for current conditions and the
//! 3-hourly forecast, reduced here to one summary entry per day.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::error::ExternalError;
use shared::{ForecastEntry, WeatherSnapshot};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// Number of 3-hourly slots requested (5 days of coverage)
const FORECAST_SLOTS: u32 = 40;

/// Daily entries kept after per-day deduplication
pub const FORECAST_DAYS: usize = 5;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    weather: Vec<OwmWeather>,
    main: OwmMain,
    wind: OwmWind,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

/// OpenWeatherMap API response for the 3-hourly forecast
#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    list: Vec<OwmForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    main: OwmMain,
    weather: Vec<OwmWeather>,
    wind: OwmWind,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current conditions for a city
    pub async fn current(&self, city: &str) -> Result<WeatherSnapshot, ExternalError> {
        let url = format!("{}/weather", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city.trim()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "fr"),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ExternalError::Upstream { status, message });
        }

        let data: OwmCurrentResponse = response.json().await?;

        Ok(convert_current_response(data))
    }

    /// Fetch the 3-hourly forecast and reduce it to daily summaries
    pub async fn forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, ExternalError> {
        let url = format!("{}/forecast", self.base_url);
        let slots = FORECAST_SLOTS.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city.trim()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "fr"),
                ("cnt", slots.as_str()),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ExternalError::Upstream { status, message });
        }

        let data: OwmForecastResponse = response.json().await?;
        let entries = data.list.into_iter().map(convert_forecast_item).collect();

        Ok(summarize_daily(entries))
    }
}

/// Convert the OpenWeatherMap current response to our format
fn convert_current_response(data: OwmCurrentResponse) -> WeatherSnapshot {
    WeatherSnapshot {
        description: capitalize(
            &data
                .weather
                .first()
                .map(|w| w.description.clone())
                .unwrap_or_default(),
        ),
        temperature_c: data.main.temp,
        humidity_percent: data.main.humidity,
        wind_speed_mps: data.wind.speed,
    }
}

/// Convert one 3-hourly slot to a forecast entry
fn convert_forecast_item(item: OwmForecastItem) -> ForecastEntry {
    ForecastEntry {
        date: DateTime::from_timestamp(item.dt, 0)
            .unwrap_or_else(Utc::now)
            .date_naive(),
        description: capitalize(
            &item
                .weather
                .first()
                .map(|w| w.description.clone())
                .unwrap_or_default(),
        ),
        temperature_c: item.main.temp,
        humidity_percent: item.main.humidity,
        wind_speed_mps: item.wind.speed,
    }
}

/// Keep the first entry per distinct day, in first-seen order, capped at
/// [`FORECAST_DAYS`].
pub fn summarize_daily(entries: Vec<ForecastEntry>) -> Vec<ForecastEntry> {
    let mut seen_days = HashSet::new();
    let mut daily = Vec::with_capacity(FORECAST_DAYS);

    for entry in entries {
        if seen_days.insert(entry.date) {
            daily.push(entry);
            if daily.len() >= FORECAST_DAYS {
                break;
            }
        }
    }

    daily
}

/// Uppercase the first character, as the API returns lowercase descriptions
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
