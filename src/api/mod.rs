use axum::{
    Router,
    extract::{
        Json, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::core::{
    CurrencyFormat, ProjectionError, ProjectionReport, RawProjectionInput, ValidationMode,
    build_report,
};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub currency: CurrencyFormat,
}

type SharedConfig = Arc<ServerConfig>;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

// Accepts a JSON number, numeric text or null; unparsable text becomes `NaN`
// and is left to the validation policy. A JSON number literal outside the f64
// range is a malformed payload: serde_json rejects it before this runs.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrText::Number(v)) => v,
        Some(NumberOrText::Text(text)) => text.trim().parse::<f64>().unwrap_or(f64::NAN),
        None => f64::NAN,
    })
}

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectPayload {
    #[serde(deserialize_with = "lenient_number")]
    initial_amount: f64,
    #[serde(deserialize_with = "lenient_number")]
    years: f64,
    #[serde(deserialize_with = "lenient_number")]
    inflation_rate: f64,
    #[serde(deserialize_with = "lenient_number")]
    investment_return: f64,
    strict: Option<bool>,
}

impl Default for ProjectPayload {
    fn default() -> Self {
        let raw = RawProjectionInput::default();
        Self {
            initial_amount: raw.initial_amount,
            years: raw.years,
            inflation_rate: raw.inflation_rate_percent,
            investment_return: raw.investment_return_percent,
            strict: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ApiRequest {
    raw: RawProjectionInput,
    mode: ValidationMode,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn create_router(config: ServerConfig) -> Router {
    let state: SharedConfig = Arc::new(config);
    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route(
            "/api/project",
            get(project_get_handler).post(project_post_handler),
        )
        .fallback(not_found_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_http_server(host: &str, port: u16, config: ServerConfig) -> std::io::Result<()> {
    let addr = format!("{host}:{port}")
        .parse::<SocketAddr>()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let app = create_router(config);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("inflation gap calculator listening on http://{addr}");
    tracing::info!("local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn project_get_handler(
    State(config): State<SharedConfig>,
    payload: Result<Query<ProjectPayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => project_handler_impl(&config, payload),
        Err(rejection) => error_response(StatusCode::BAD_REQUEST, &rejection.body_text()),
    }
}

async fn project_post_handler(
    State(config): State<SharedConfig>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(payload)) => project_handler_impl(&config, payload),
        Err(rejection) => error_response(StatusCode::BAD_REQUEST, &rejection.body_text()),
    }
}

fn project_handler_impl(config: &ServerConfig, payload: ProjectPayload) -> Response {
    let request = api_request_from_payload(payload);
    match build_project_response(&request, &config.currency) {
        Ok(response) => {
            tracing::debug!(
                years = response.input.years,
                final_invested = response.summary.final_invested,
                final_uninvested = response.summary.final_uninvested,
                "projection computed"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            tracing::debug!(error = %err, "projection rejected");
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
    }
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ApiRequest, String> {
    let payload = serde_json::from_str::<ProjectPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    Ok(api_request_from_payload(payload))
}

fn api_request_from_payload(payload: ProjectPayload) -> ApiRequest {
    let mode = if payload.strict.unwrap_or(false) {
        ValidationMode::Strict
    } else {
        ValidationMode::Lenient
    };

    ApiRequest {
        raw: RawProjectionInput {
            initial_amount: payload.initial_amount,
            years: payload.years,
            inflation_rate_percent: payload.inflation_rate,
            investment_return_percent: payload.investment_return,
        },
        mode,
    }
}

fn build_project_response(
    request: &ApiRequest,
    currency: &CurrencyFormat,
) -> Result<ProjectionReport, ProjectionError> {
    build_report(&request.raw, request.mode, currency)
}
