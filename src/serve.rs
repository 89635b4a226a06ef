//! HTTP mode: analyse once, then serve the same snapshot on every request.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use axum::Router;
use axum::routing::get;

use crate::error::{ContribError, Result};
use crate::report::{Snapshot, html, json};

async fn index_handler(State(snapshot): State<Arc<Snapshot>>) -> Html<String> {
    Html(html::render(&snapshot))
}

async fn json_handler(
    State(snapshot): State<Arc<Snapshot>>,
) -> std::result::Result<impl IntoResponse, (StatusCode, String)> {
    let body = json::render(&snapshot)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

pub fn router(snapshot: Arc<Snapshot>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/report.json", get(json_handler))
        .with_state(snapshot)
}

/// Bind `host:port` and serve until the process is killed.
pub fn serve(snapshot: Snapshot, host: &str, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let app = router(Arc::new(snapshot));
    let addr = format!("{host}:{port}");

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        log::info!("serving report on http://{addr}/");
        axum::serve(listener, app).await?;
        Ok::<(), ContribError>(())
    })
}
