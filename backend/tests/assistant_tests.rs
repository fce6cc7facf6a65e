//! End-to-end tests for the assistant page
//!
//! Drive the full router with the three upstream services mocked, covering
//! the degraded-but-available fallback policy for each of them.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use agri_assistant_backend::config::{Config, GeoConfig, LlmConfig, ServerConfig, WeatherConfig};
use agri_assistant_backend::services::ConversationStore;
use agri_assistant_backend::{build_state, create_app};

struct TestApp {
    app: Router,
    history: Arc<dyn ConversationStore>,
    geo: MockServer,
    weather: MockServer,
    llm: MockServer,
}

async fn spawn_app() -> TestApp {
    let geo = MockServer::start().await;
    let weather = MockServer::start().await;
    let llm = MockServer::start().await;

    let config = Config {
        environment: "test".to_string(),
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        geo: GeoConfig {
            endpoint: geo.uri(),
            fallback_city: "Antananarivo,MG".to_string(),
        },
        weather: WeatherConfig {
            api_endpoint: weather.uri(),
            api_key: "test-key".to_string(),
        },
        llm: LlmConfig {
            api_endpoint: llm.uri(),
            api_key: "test-token".to_string(),
            model: "openai/gpt-oss-20b:together".to_string(),
        },
    };

    let state = build_state(config).expect("state should build");
    let history = state.history.clone();

    TestApp {
        app: create_app(state),
        history,
        geo,
        weather,
        llm,
    }
}

async fn mount_geo_ok(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "city": "Antananarivo",
            "countryCode": "MG"
        })))
        .mount(server)
        .await;
}

fn forecast_slot(day: u32, hour: u32, desc: &str) -> serde_json::Value {
    let dt = NaiveDate::from_ymd_opt(2026, 8, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp();
    serde_json::json!({
        "dt": dt,
        "main": { "temp": 22.0, "humidity": 70 },
        "weather": [{ "description": desc }],
        "wind": { "speed": 2.5 }
    })
}

async fn mount_weather_ok(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Antananarivo,MG"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "weather": [{ "description": "ciel dégagé" }],
            "main": { "temp": 25.0, "humidity": 60 },
            "wind": { "speed": 3.0 }
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Antananarivo,MG"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "list": [
                forecast_slot(6, 9, "pluie légère"),
                forecast_slot(6, 12, "pluie modérée"),
                forecast_slot(7, 9, "ciel dégagé"),
            ]
        })))
        .mount(server)
        .await;
}

async fn mount_weather_down(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}

async fn mount_llm_reply(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [
                { "message": { "role": "assistant", "content": content } }
            ]
        })))
        .mount(server)
        .await;
}

async fn get_page(app: Router) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    read_response(response).await
}

async fn post_form(app: Router, form_body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    read_response(response).await
}

async fn read_response(response: axum::response::Response) -> (StatusCode, String) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn question_round_trip_renders_weather_and_records_history() {
    let t = spawn_app().await;
    mount_geo_ok(&t.geo).await;
    mount_weather_ok(&t.weather).await;
    mount_llm_reply(&t.llm, "🌱 Plantez...").await;

    let (status, body) =
        post_form(t.app.clone(), "message=Comment+planter+des+carottes+%3F&lang=fr").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Ciel dégagé, Temp: 25°C, Humidité: 60%, Vent: 3 m/s"));
    assert!(body.contains("🌱 Plantez..."));
    assert!(body.contains("📅 2026-08-06"));

    let history = t.history.list();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].question, "Comment planter des carottes ?");
    assert_eq!(history[0].reply, "🌱 Plantez...");
}

#[tokio::test]
async fn blank_question_invokes_no_completion_and_records_nothing() {
    let t = spawn_app().await;
    mount_geo_ok(&t.geo).await;
    mount_weather_ok(&t.weather).await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&t.llm)
        .await;

    let (status, _) = post_form(t.app.clone(), "message=++&lang=fr").await;

    assert_eq!(status, StatusCode::OK);
    assert!(t.history.list().is_empty());
}

#[tokio::test]
async fn geolocation_failure_falls_back_to_the_configured_city() {
    let t = spawn_app().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&t.geo)
        .await;

    // The weather mocks only answer for the fallback city, so a rendered
    // weather line proves which identifier was used.
    mount_weather_ok(&t.weather).await;

    let (status, body) = get_page(t.app.clone()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Ciel dégagé, Temp: 25°C, Humidité: 60%, Vent: 3 m/s"));
}

#[tokio::test]
async fn weather_failure_still_answers_the_question() {
    let t = spawn_app().await;
    mount_geo_ok(&t.geo).await;
    mount_weather_down(&t.weather).await;
    mount_llm_reply(&t.llm, "🌾 Semez quand même.").await;

    let (status, body) = post_form(t.app.clone(), "message=Quand+semer+%3F&lang=fr").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Erreur météo actuelle"));
    assert!(body.contains("Prévision indisponible"));
    assert!(body.contains("🌾 Semez quand même."));
    assert_eq!(t.history.list().len(), 1);
}

#[tokio::test]
async fn completion_failure_records_the_error_reply() {
    let t = spawn_app().await;
    mount_geo_ok(&t.geo).await;
    mount_weather_ok(&t.weather).await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&t.llm)
        .await;

    let (status, body) = post_form(t.app.clone(), "message=Quand+semer+%3F&lang=fr").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("réponse 500 du service distant"));

    let history = t.history.list();
    assert_eq!(history.len(), 1);
    assert!(history[0].reply.contains("Erreur lors de l'appel au modèle"));
    assert!(history[0].reply.contains("boom"));
}

#[tokio::test]
async fn malagasy_mode_translates_displayed_text() {
    let t = spawn_app().await;
    mount_geo_ok(&t.geo).await;
    mount_weather_ok(&t.weather).await;
    mount_llm_reply(&t.llm, "Vinavina toetrandro").await;

    let (status, body) = post_form(t.app.clone(), "lang=mg").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Vinavina toetrandro"));
    // The toggle now offers French
    assert!(body.contains(">FR</button>"));
    assert!(t.history.list().is_empty());
}

#[tokio::test]
async fn plain_get_renders_the_french_page() {
    let t = spawn_app().await;
    mount_geo_ok(&t.geo).await;
    mount_weather_ok(&t.weather).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&t.llm)
        .await;

    let (status, body) = get_page(t.app.clone()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Assistant Agricole Madagascar"));
    assert!(body.contains("Prévision météo 5 jours"));
    assert!(body.contains(">MG</button>"));
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let t = spawn_app().await;

    let response = t
        .app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let (status, body) = read_response(response).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"status\":\"healthy\""));
}
