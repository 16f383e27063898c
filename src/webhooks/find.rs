//! Dress search webhook.
//!
//! Reads the customer's criteria from session parameters, scans the catalog,
//! and answers with one rich card per match. The match list is also written
//! back into the session so the selection stage can resolve card numbers
//! later without touching the store again.

use crate::dialogflow::{
    Button, Card, CardElement, Message, SessionInfo, WebhookRequest, WebhookResponse,
};
use crate::error::StoreResult;
use crate::matching::{self, SearchCriteria};
use crate::repositories::DressRepository;
use crate::webhooks::price_subtitle;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Session parameter carrying the current match list.
pub(crate) const MATCHING_DRESSES_PARAM: &str = "matchingDresses";

/// Session parameter flagging whether the last search found anything.
const HAS_DRESSES_PARAM: &str = "hasDresses";

/// Event raised when a customer taps a card's select button.
const SELECT_EVENT: &str = "select-dress";

const NO_MATCHES_TEXT: &str =
    "I couldn’t find any dresses matching your criteria. Would you like to adjust your search?";
const MISSING_CRITERIA_TEXT: &str =
    "I need to know the dress type and size before I can search. What are you looking for?";
pub(crate) const APOLOGY_TEXT: &str = "Sorry, something went wrong while fetching the dresses.";

/// Handler for the dress search stage.
pub struct FindDressWebhook {
    dresses: Arc<dyn DressRepository>,
}

impl FindDressWebhook {
    /// Create a new FindDressWebhook reading from the given repository.
    pub fn new(dresses: Arc<dyn DressRepository>) -> Self {
        Self { dresses }
    }

    /// Handle one webhook call.
    ///
    /// Never fails outward: any internal error degrades to the stage's
    /// apology text so the agent always has something to say.
    pub async fn handle(&self, request: &WebhookRequest) -> WebhookResponse {
        let session = match &request.session_info {
            Some(session) => session,
            None => {
                tracing::error!("find-dress: request has no sessionInfo block");
                return WebhookResponse::text(APOLOGY_TEXT);
            }
        };

        tracing::info!("find-dress: invoked for session {}", session.session);
        tracing::debug!("find-dress: parameters {:?}", session.parameters);

        match self.try_handle(session).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("find-dress: failed for session {}: {}", session.session, e);
                WebhookResponse::text(APOLOGY_TEXT)
            }
        }
    }

    async fn try_handle(&self, session: &SessionInfo) -> StoreResult<WebhookResponse> {
        let params = session.params();

        let criteria = match SearchCriteria::from_params(&params) {
            Ok(criteria) => criteria,
            Err(missing) => {
                tracing::info!("find-dress: incomplete criteria, missing {}", missing);
                return Ok(WebhookResponse::text(MISSING_CRITERIA_TEXT));
            }
        };

        let catalog = self.dresses.list_all().await?;
        let matches = matching::matching_summaries(&catalog, &criteria);
        tracing::info!(
            "find-dress: {} of {} dresses match type={} size={}",
            matches.len(),
            catalog.len(),
            criteria.dress_type,
            criteria.size
        );

        let messages = if matches.is_empty() {
            vec![Message::text(NO_MATCHES_TEXT)]
        } else {
            let cards = matches
                .iter()
                .enumerate()
                .map(|(index, dress)| dress_card(dress, index + 1))
                .collect();
            vec![Message::rich(cards)]
        };

        // The match list is re-emitted even when empty so a stale list from
        // an earlier search can never leak into the selection stage
        let mut parameters = session.parameters.clone();
        parameters.insert(
            MATCHING_DRESSES_PARAM.to_string(),
            serde_json::to_value(&matches)?,
        );
        parameters.insert(
            HAS_DRESSES_PARAM.to_string(),
            Value::Bool(!matches.is_empty()),
        );

        Ok(WebhookResponse::with_messages(messages).with_parameters(parameters))
    }
}

/// Build the two-element card for one match: photo, then a numbered info
/// block with a select button that fires the next stage.
fn dress_card(dress: &crate::models::DressSummary, position: usize) -> Card {
    let mut event_parameters = Map::new();
    event_parameters.insert("selectedNumber".to_string(), Value::from(position));

    vec![
        CardElement::image(&dress.image_url, &dress.name),
        CardElement::info_with_buttons(
            format!("{} {}", keycap(position), dress.name),
            price_subtitle(dress),
            vec![Button::event(
                "Select this Dress",
                SELECT_EVENT,
                event_parameters,
            )],
        ),
    ]
}

/// Render a position as its keycap emoji, e.g. 3 as "3️⃣".
fn keycap(position: usize) -> String {
    format!("{}\u{fe0f}\u{20e3}", position)
}
