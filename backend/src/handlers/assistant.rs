//! HTTP handlers for the assistant page
//!
//! One route, two methods: GET renders the current state, POST submits a
//! question and/or switches the display language. External failures are
//! replaced here by their user-visible fallback text; a dead weather
//! service never blocks question answering.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use shared::{ChatTurn, Language};

use crate::error::AppResult;
use crate::render::{PageContext, PAGE_TEMPLATE_NAME};
use crate::AppState;

const FORECAST_TITLE: &str = "Prévision météo 5 jours";
const FORECAST_PLACEHOLDER: &str = "Prévision indisponible";

/// Form body for `POST /`
#[derive(Debug, Deserialize)]
pub struct AssistantForm {
    /// The agricultural question; absent or blank on a language toggle
    pub message: Option<String>,

    /// Display language for this request
    #[serde(default)]
    pub lang: Language,
}

/// `GET /` — render the current state
pub async fn show_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    respond(state, Language::default(), None).await
}

/// `POST /` — submit a question and/or switch language
pub async fn submit_message(
    State(state): State<AppState>,
    Form(form): Form<AssistantForm>,
) -> AppResult<Html<String>> {
    respond(state, form.lang, form.message).await
}

async fn respond(
    state: AppState,
    lang: Language,
    message: Option<String>,
) -> AppResult<Html<String>> {
    let city = match state.geo.detect_city().await {
        Ok(city) => city,
        Err(err) => {
            tracing::warn!("city detection failed, using fallback: {err}");
            state.config.geo.fallback_city.clone()
        }
    };

    let weather_line = match state.weather.current(&city).await {
        Ok(snapshot) => snapshot.to_string(),
        Err(err) => {
            tracing::warn!("current weather fetch failed: {err}");
            format!("Erreur météo actuelle : {err}")
        }
    };

    let forecast_lines: Vec<String> = match state.weather.forecast(&city).await {
        Ok(entries) => entries.iter().map(ToString::to_string).collect(),
        Err(err) => {
            tracing::warn!("forecast fetch failed: {err}");
            vec![FORECAST_PLACEHOLDER.to_string()]
        }
    };

    // A blank message is a state refresh or a language toggle, not a question
    if let Some(question) = message.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        let reply = state
            .assistant
            .answer(question, &city, &weather_line, lang)
            .await;

        state.history.append(ChatTurn {
            question: question.to_string(),
            reply,
        });
    }

    let weather_display = state.assistant.translate(&weather_line, lang).await;
    let forecast_title = state.assistant.translate(FORECAST_TITLE, lang).await;

    let context = PageContext::new(
        lang,
        weather_display,
        forecast_title,
        forecast_lines,
        state.history.list(),
    );

    let page = state.pages.render(PAGE_TEMPLATE_NAME, &context)?;
    Ok(Html(page))
}
