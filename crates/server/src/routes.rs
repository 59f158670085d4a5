use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, MethodRouter},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::{warn, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::{Health, Message};

use crate::openapi::ApiDoc;

pub mod doctors;
pub mod patients;
pub mod state;

pub use state::ServerState;

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Greeting", body = crate::openapi::MessageDoc)))]
pub async fn root() -> Json<Message> {
    Json(Message::new("Hello World"))
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses(
        (status = 200, description = "Store reachable", body = crate::openapi::HealthResponse),
        (status = 503, description = "Store unreachable", body = crate::openapi::HealthResponse)
    )
)]
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<Health>) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(Health { status: "ok" })),
        Err(e) => {
            warn!(err = %e, "health check: database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health { status: "unavailable" }))
        }
    }
}

/// Register a collection route both with and without the trailing slash.
fn collection(router: Router<ServerState>, path: &str, methods: MethodRouter<ServerState>) -> Router<ServerState> {
    router.route(path, methods.clone()).route(&format!("{path}/"), methods)
}

/// Build the full application router: records, health and API docs
pub fn build_router(state: ServerState, cors: CorsLayer, request_timeout: Duration) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health));

    let doctor_routes = collection(Router::new(), "/doctors", get(doctors::list).post(doctors::create))
        .route("/doctors/:id", get(doctors::get).put(doctors::update).delete(doctors::delete));

    let patient_routes = collection(Router::new(), "/patients", get(patients::list).post(patients::create))
        .route("/patients/:id", get(patients::get).put(patients::update).delete(patients::delete));

    // Compose
    public
        .merge(doctor_routes)
        .merge(patient_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
