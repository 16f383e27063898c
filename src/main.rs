//! Bridal Fulfillment - Main entry point
//!
//! This is the main executable for the bridal boutique's fulfillment backend. It
//! wires the Firestore-backed repositories into the three webhook stages and
//! serves them over HTTP for the Dialogflow CX agent.

use anyhow::Result;
use bridal_fulfillment::client::{AsyncFirestoreClient, AsyncFirestoreClientImpl};
use bridal_fulfillment::repositories::{
    BookingRepository, DressRepository, FirestoreBookingRepository, FirestoreDressRepository,
};
use bridal_fulfillment::{
    AppState, BookFittingWebhook, Config, FindDressWebhook, FirestoreClient, SelectDressWebhook,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter; a
    // failure here is printed by anyhow on exit.
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded successfully");
    info!(
        "Starting bridal fulfillment backend for project: {}",
        config.firestore_project_id
    );

    // Initialize Firestore client
    let sync_client = FirestoreClient::new(&config);
    let client = Arc::new(AsyncFirestoreClientImpl::new(sync_client)) as Arc<dyn AsyncFirestoreClient>;

    // Initialize repositories
    let dress_repo = Arc::new(FirestoreDressRepository::new(
        client.clone(),
        config.dress_collection.clone(),
    )) as Arc<dyn DressRepository>;
    let booking_repo = Arc::new(FirestoreBookingRepository::new(
        client.clone(),
        config.booking_collection.clone(),
    )) as Arc<dyn BookingRepository>;

    // Create the webhook handlers
    let state = AppState {
        find: Arc::new(FindDressWebhook::new(dress_repo)),
        select: Arc::new(SelectDressWebhook::new()),
        book: Arc::new(BookFittingWebhook::new(booking_repo)),
    };

    info!(
        "Webhook handlers initialized (catalog: {}, bookings: {})",
        config.dress_collection, config.booking_collection
    );

    // Run the server (this will block until the server exits)
    bridal_fulfillment::server::run_server(config.port, state).await?;

    info!("Bridal fulfillment backend shutdown complete");
    Ok(())
}
