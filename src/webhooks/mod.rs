//! Webhook stage handlers.
//!
//! Each conversation stage (search, selection, booking) is one handler with
//! the same outer contract: read the session block, do the work, and degrade
//! to a stage-specific apology text on any internal failure. The transport
//! always answers HTTP 200; errors live in the spoken message, never in the
//! status code, so the conversation keeps moving.

pub mod book;
pub mod find;
pub mod select;

pub use book::BookFittingWebhook;
pub use find::FindDressWebhook;
pub use select::SelectDressWebhook;

use crate::models::DressSummary;

/// Subtitle shown under a dress card: price line, then description.
pub(crate) fn price_subtitle(dress: &DressSummary) -> String {
    format!("Price: ${}\n{}", dress.price, dress.description)
}
