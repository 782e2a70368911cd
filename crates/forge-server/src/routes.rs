//! HTTP routes
//!
//! - `GET /`: liveness banner
//! - `GET /api/health`: health probe
//! - `POST /api/generate`: run the pipeline for `{"idea": "..."}`
//!
//! Errors are `{"detail": "..."}` with the matching status code.

use forge_core::{ForgeError, GenerateRequest, Pipeline};
use serde_json::json;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::error;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

pub const SERVICE_NAME: &str = "promptforge-backend";

/// Largest accepted request body
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

/// All routes, with CORS and request tracing applied
pub fn routes(
    pipeline: Arc<Pipeline>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone + Send + Sync + 'static {
    let root = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::json(&json!({ "status": "PromptForge API is running" })));

    let health = warp::path!("api" / "health")
        .and(warp::get())
        .map(|| warp::reply::json(&json!({ "ok": true, "service": SERVICE_NAME })));

    let generate = warp::path!("api" / "generate")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json::<GenerateRequest>())
        .and(with_pipeline(pipeline))
        .and_then(generate);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"]);

    root.or(health)
        .or(generate)
        .recover(handle_rejection)
        .with(cors)
        .with(warp::trace::request())
}

fn with_pipeline(
    pipeline: Arc<Pipeline>,
) -> impl Filter<Extract = (Arc<Pipeline>,), Error = Infallible> + Clone {
    warp::any().map(move || pipeline.clone())
}

/// Run the pipeline on its own task so a dropped connection does not
/// cancel in-flight provider calls.
async fn generate(
    request: GenerateRequest,
    pipeline: Arc<Pipeline>,
) -> Result<Response, Infallible> {
    let task = tokio::spawn(async move { pipeline.run(&request.idea).await });

    let reply = match task.await {
        Ok(Ok(response)) => warp::reply::json(&response).into_response(),
        Ok(Err(err)) => forge_error(&err),
        Err(join) => {
            error!(error = %join, "Pipeline task failed");
            detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    };
    Ok(reply)
}

fn forge_error(err: &ForgeError) -> Response {
    if !err.is_client_error() {
        error!(error = %err, "Request failed");
    }
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    detail(status, &err.to_string())
}

fn detail(status: StatusCode, message: &str) -> Response {
    warp::reply::with_status(warp::reply::json(&json!({ "detail": message })), status)
        .into_response()
}

async fn handle_rejection(rejection: Rejection) -> Result<Response, Infallible> {
    let reply = if rejection.is_not_found() {
        detail(StatusCode::NOT_FOUND, "Not Found")
    } else if let Some(err) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        detail(StatusCode::UNPROCESSABLE_ENTITY, &err.to_string())
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        detail(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        detail(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    } else {
        error!(rejection = ?rejection, "Unhandled rejection");
        detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };
    Ok(reply)
}
