//! Assistant Agricole Madagascar - Backend
//!
//! A small server-rendered web assistant for Malagasy farmers: it detects
//! the server's city, fetches current weather and a 5-day forecast, feeds
//! that context into a hosted language model and shows the reply next to
//! the forecast.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod render;
pub mod routes;
pub mod services;

pub use config::Config;

use external::{CompletionClient, GeoClient, WeatherClient};
use services::{AssistantService, ConversationStore, InMemoryHistory};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub geo: GeoClient,
    pub weather: WeatherClient,
    pub assistant: AssistantService,
    pub history: Arc<dyn ConversationStore>,
    pub pages: Arc<handlebars::Handlebars<'static>>,
}

/// Build the shared application state from configuration
pub fn build_state(config: Config) -> anyhow::Result<AppState> {
    let config = Arc::new(config);

    let llm = CompletionClient::new(
        config.llm.api_key.clone(),
        config.llm.api_endpoint.clone(),
        config.llm.model.clone(),
    );

    Ok(AppState {
        geo: GeoClient::new(config.geo.endpoint.clone()),
        weather: WeatherClient::new(
            config.weather.api_key.clone(),
            config.weather.api_endpoint.clone(),
        ),
        assistant: AssistantService::new(llm),
        history: Arc::new(InMemoryHistory::new()),
        pages: Arc::new(render::page_registry()?),
        config,
    })
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    routes::app_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
