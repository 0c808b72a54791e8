use crate::agent::TravelAssistant;
use crate::llm::chat::ChatError;
use crate::models::chat::Conversation;
use std::sync::Arc;
use axum::{
    routing::{ get, post },
    Router,
    Json,
    extract::{ State, rejection::JsonRejection },
    response::{ IntoResponse, Response },
    http::StatusCode,
};
use serde::{ Deserialize, Serialize };
use tower_http::cors::{ Any, CorsLayer };
use log::{ info, warn };

#[derive(Deserialize, Debug)]
pub struct ChatRequest {
    pub question: String,
    /// Absent and `null` both mean an empty history.
    #[serde(default)]
    pub history: Option<Conversation>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ChatResponse {
    pub answer: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

#[derive(Debug)]
pub struct ApiError {
    status_code: StatusCode,
    message: String,
    upstream_status: Option<StatusCode>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            message: message.into(),
            upstream_status: None,
        }
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        Self {
            status_code: StatusCode::BAD_GATEWAY,
            message: err.to_string(),
            upstream_status: err.status(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            status: self.upstream_status.map(|s| s.as_u16()),
        };
        (self.status_code, Json(body)).into_response()
    }
}

#[derive(Clone)]
struct AppState {
    assistant: Arc<TravelAssistant>,
}

pub fn router(assistant: Arc<TravelAssistant>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(AppState { assistant })
}

async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        warn!("Rejected /chat body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    if req.question.trim().is_empty() {
        return Err(ApiError::bad_request("question must not be empty"));
    }

    let history = req.history.unwrap_or_default();
    info!("POST /chat with {} history message(s)", history.len());

    let exchange = state.assistant.ask(&history, &req.question).await?;
    Ok(Json(ChatResponse { answer: exchange.answer }))
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
