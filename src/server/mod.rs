//! HTTP server exposing the webhook stages.
//!
//! One POST route per conversation stage plus a health probe. Handlers take
//! the raw body rather than a typed JSON extractor: the conversation engine
//! treats any non-200 answer as a dead webhook, so even an unreadable body
//! must come back 200 with an apology message instead of a rejection.

use crate::dialogflow::{WebhookRequest, WebhookResponse};
use crate::webhooks::{self, BookFittingWebhook, FindDressWebhook, SelectDressWebhook};
use anyhow::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;

/// Shared handler state for the webhook routes.
#[derive(Clone)]
pub struct AppState {
    pub find: Arc<FindDressWebhook>,
    pub select: Arc<SelectDressWebhook>,
    pub book: Arc<BookFittingWebhook>,
}

#[derive(Debug, Clone, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Build the webhook router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhooks/find-dress", post(find_dress))
        .route("/webhooks/select-dress", post(select_dress))
        .route("/webhooks/book-fitting", post(book_fitting))
        .with_state(state)
}

/// Run the webhook server until it is shut down.
///
/// # Arguments
/// * `port` - Port to listen on, bound on every interface
/// * `state` - The configured webhook handlers
///
/// # Returns
/// An error if the listener cannot bind or the server fails fatally
pub async fn run_server(port: u16, state: AppState) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Webhook server listening on {}", addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn find_dress(State(state): State<AppState>, body: Bytes) -> Json<WebhookResponse> {
    match parse_request(&body, "find-dress") {
        Ok(request) => Json(state.find.handle(&request).await),
        Err(()) => Json(WebhookResponse::text(webhooks::find::APOLOGY_TEXT)),
    }
}

async fn select_dress(State(state): State<AppState>, body: Bytes) -> Json<WebhookResponse> {
    match parse_request(&body, "select-dress") {
        Ok(request) => Json(state.select.handle(&request).await),
        Err(()) => Json(WebhookResponse::text(webhooks::select::APOLOGY_TEXT)),
    }
}

async fn book_fitting(State(state): State<AppState>, body: Bytes) -> Json<WebhookResponse> {
    match parse_request(&body, "book-fitting") {
        Ok(request) => Json(state.book.handle(&request).await),
        Err(()) => Json(WebhookResponse::text(webhooks::book::APOLOGY_TEXT)),
    }
}

fn parse_request(body: &Bytes, stage: &str) -> Result<WebhookRequest, ()> {
    serde_json::from_slice::<WebhookRequest>(body).map_err(|e| {
        tracing::error!("{}: unreadable request body: {}", stage, e);
    })
}
