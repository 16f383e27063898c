//! Bridal Fulfillment - webhook fulfillment backend for a bridal boutique's booking assistant.
//!
//! This library implements the three conversation stages behind the boutique's
//! Dialogflow CX agent: searching the dress catalog, resolving the shopper's
//! picks from the numbered list, and writing the fitting appointment to
//! Firestore. Each stage is a stateless webhook; conversation state rides in
//! the session parameters echoed back to the agent.
//!
//! # Architecture
//!
//! - **models**: Data structures for dresses and fitting bookings
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the Firestore REST API
//! - **dialogflow**: Webhook request/response wire types
//! - **domain**: Validated appointment dates, times, and dress slugs
//! - **matching**: Catalog filtering by type, size, and price
//! - **selection**: Ordinal resolution against the previously shown list
//! - **webhooks**: The three conversation-stage handlers
//! - **server**: Axum HTTP surface exposing the webhook routes

pub mod client;
pub mod config;
pub mod dialogflow;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;
pub mod selection;
pub mod server;
pub mod webhooks;

pub use client::FirestoreClient;
pub use config::Config;
pub use dialogflow::{WebhookRequest, WebhookResponse};
pub use error::{ConfigError, StoreError};
pub use matching::SearchCriteria;
pub use models::{Booking, Dress, DressSummary};
pub use server::AppState;
pub use webhooks::{BookFittingWebhook, FindDressWebhook, SelectDressWebhook};
