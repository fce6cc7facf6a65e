//! IP geolocation client
//!
//! Resolves the server's outbound IP to a "City,CC" identifier via the
//! ip-api.com JSON endpoint. Single attempt, short timeout, no retries;
//! the fallback city is applied by the caller.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::ExternalError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// IP geolocation client
#[derive(Clone)]
pub struct GeoClient {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    city: Option<String>,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
}

impl GeoClient {
    /// Create a new GeoClient for the given lookup endpoint
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Resolve the server's city as "City,CC"
    pub async fn detect_city(&self) -> Result<String, ExternalError> {
        let response = self
            .client
            .get(&self.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ExternalError::Upstream { status, message });
        }

        let data: IpApiResponse = response.json().await?;

        match (data.city, data.country_code) {
            (Some(city), Some(country_code)) => Ok(format!("{city},{country_code}")),
            _ => Err(ExternalError::Decode(
                "champs city/countryCode absents".to_string(),
            )),
        }
    }
}
