//! Dress selection webhook.
//!
//! Resolves the card numbers the customer picked against the match list the
//! search stage stashed in the session. This stage never touches the store;
//! everything it needs rides in on the round-tripped parameters.

use crate::dialogflow::{Card, CardElement, Message, SessionInfo, WebhookRequest, WebhookResponse};
use crate::error::StoreResult;
use crate::models::DressSummary;
use crate::selection;
use crate::webhooks::find::MATCHING_DRESSES_PARAM;
use crate::webhooks::price_subtitle;

/// Session parameter carrying the customer's chosen dresses.
pub(crate) const SELECTED_DRESSES_PARAM: &str = "selectedDresses";

const STALE_SESSION_TEXT: &str =
    "Sorry, I couldn't find the dresses you previously viewed. Please search again!";
const INVALID_SELECTION_TEXT: &str =
    "Those numbers don't match any dresses in the list, please try again!";
pub(crate) const APOLOGY_TEXT: &str =
    "Sorry, something went wrong while selecting the dress(es).";

/// Handler for the dress selection stage.
pub struct SelectDressWebhook;

impl SelectDressWebhook {
    /// Create a new SelectDressWebhook.
    pub fn new() -> Self {
        Self
    }

    /// Handle one webhook call.
    ///
    /// Never fails outward: any internal error degrades to the stage's
    /// apology text so the agent always has something to say.
    pub async fn handle(&self, request: &WebhookRequest) -> WebhookResponse {
        let session = match &request.session_info {
            Some(session) => session,
            None => {
                tracing::error!("select-dress: request has no sessionInfo block");
                return WebhookResponse::text(APOLOGY_TEXT);
            }
        };

        tracing::info!("select-dress: invoked for session {}", session.session);
        tracing::debug!("select-dress: parameters {:?}", session.parameters);

        match self.try_handle(session) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    "select-dress: failed for session {}: {}",
                    session.session,
                    e
                );
                WebhookResponse::text(APOLOGY_TEXT)
            }
        }
    }

    fn try_handle(&self, session: &SessionInfo) -> StoreResult<WebhookResponse> {
        let params = session.params();

        let candidates = match params.raw(MATCHING_DRESSES_PARAM) {
            Some(value) => {
                serde_json::from_value::<Vec<DressSummary>>(value.clone()).unwrap_or_default()
            }
            None => Vec::new(),
        };
        if candidates.is_empty() {
            tracing::info!("select-dress: no candidate list in session");
            return Ok(WebhookResponse::text(STALE_SESSION_TEXT));
        }

        let ordinals = selection::selected_ordinals(&params);
        let selected = selection::resolve_ordinals(&candidates, &ordinals);
        if selected.is_empty() {
            tracing::info!(
                "select-dress: none of {:?} resolve against {} candidates",
                ordinals,
                candidates.len()
            );
            return Ok(WebhookResponse::text(INVALID_SELECTION_TEXT));
        }

        tracing::info!(
            "select-dress: resolved {} of {} picks",
            selected.len(),
            ordinals.len()
        );

        let cards = selected.iter().map(selected_card).collect();
        let names = selected
            .iter()
            .map(|dress| format!("\"{}\"", dress.name))
            .collect::<Vec<_>>()
            .join(", ");
        let summary = format!(
            "You selected: {}. Would you like to proceed with booking, or view more dresses?",
            names
        );

        let mut parameters = session.parameters.clone();
        parameters.insert(
            SELECTED_DRESSES_PARAM.to_string(),
            serde_json::to_value(&selected)?,
        );

        // Cards first, then the summary text, matching the search stage's
        // visual-then-spoken order
        Ok(
            WebhookResponse::with_messages(vec![Message::rich(cards), Message::text(summary)])
                .with_parameters(parameters),
        )
    }
}

impl Default for SelectDressWebhook {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the confirmation card for one selected dress: photo plus an info
/// block without numbering or buttons.
fn selected_card(dress: &DressSummary) -> Card {
    vec![
        CardElement::image(&dress.image_url, &dress.name),
        CardElement::info(&dress.name, price_subtitle(dress)),
    ]
}
