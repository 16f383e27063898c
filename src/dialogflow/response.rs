//! Outbound webhook response types.
//!
//! Responses carry two things: fulfillment messages (plain text or Messenger
//! rich content) and the session parameters to merge back into the
//! conversation. The serialized shape must match the wire contract exactly,
//! so every struct here pins its field names.

use serde::Serialize;
use serde_json::{Map, Value};

/// A fulfillment webhook response.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookResponse {
    /// Parameter updates, omitted entirely when a stage changes nothing
    #[serde(rename = "sessionInfo", skip_serializing_if = "Option::is_none")]
    pub session_info: Option<ResponseSessionInfo>,

    /// Messages for the agent to render, in order
    pub fulfillment_response: FulfillmentResponse,
}

/// The parameter-update block of a response.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseSessionInfo {
    /// Full replacement set of session parameters
    pub parameters: Map<String, Value>,
}

/// The message block of a response.
#[derive(Debug, Clone, Serialize)]
pub struct FulfillmentResponse {
    pub messages: Vec<Message>,
}

/// One fulfillment message.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Message {
    /// Plain text spoken by the agent
    Text { text: TextBlock },

    /// Messenger rich content payload
    Rich { payload: RichPayload },
}

/// Wire shape for a text message: `{"text": {"text": ["..."]}}`.
#[derive(Debug, Clone, Serialize)]
pub struct TextBlock {
    pub text: Vec<String>,
}

/// Wire shape for rich content: a list of cards, each a list of elements.
#[derive(Debug, Clone, Serialize)]
pub struct RichPayload {
    #[serde(rename = "richContent")]
    pub rich_content: Vec<Card>,
}

/// One rendered card, top to bottom.
pub type Card = Vec<CardElement>;

/// An element inside a rich content card.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum CardElement {
    /// Product photo
    #[serde(rename = "image")]
    Image {
        #[serde(rename = "rawUrl")]
        raw_url: String,
        #[serde(rename = "accessibilityText")]
        accessibility_text: String,
    },

    /// Title/subtitle block with optional action buttons
    #[serde(rename = "info")]
    Info {
        title: String,
        subtitle: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        buttons: Option<Vec<Button>>,
    },
}

/// A button that fires an agent event when tapped.
#[derive(Debug, Clone, Serialize)]
pub struct Button {
    pub text: String,
    pub event: EventTrigger,
}

/// The event a button raises back into the conversation.
#[derive(Debug, Clone, Serialize)]
pub struct EventTrigger {
    pub name: String,

    /// Always empty: the agent resolves the language itself
    #[serde(rename = "languageCode")]
    pub language_code: String,

    /// Parameters merged into the session when the event fires
    pub parameters: Map<String, Value>,
}

impl WebhookResponse {
    /// Response with a single text message and no parameter changes.
    pub fn text(message: impl Into<String>) -> Self {
        Self::with_messages(vec![Message::text(message)])
    }

    /// Response with the given messages and no parameter changes.
    pub fn with_messages(messages: Vec<Message>) -> Self {
        WebhookResponse {
            session_info: None,
            fulfillment_response: FulfillmentResponse { messages },
        }
    }

    /// Attach the full replacement parameter set.
    pub fn with_parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.session_info = Some(ResponseSessionInfo { parameters });
        self
    }
}

impl Message {
    /// A plain text message.
    pub fn text(message: impl Into<String>) -> Self {
        Message::Text {
            text: TextBlock {
                text: vec![message.into()],
            },
        }
    }

    /// A rich content message holding the given cards.
    pub fn rich(cards: Vec<Card>) -> Self {
        Message::Rich {
            payload: RichPayload {
                rich_content: cards,
            },
        }
    }
}

impl CardElement {
    /// An image element.
    pub fn image(raw_url: impl Into<String>, accessibility_text: impl Into<String>) -> Self {
        CardElement::Image {
            raw_url: raw_url.into(),
            accessibility_text: accessibility_text.into(),
        }
    }

    /// An info element without buttons.
    pub fn info(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        CardElement::Info {
            title: title.into(),
            subtitle: subtitle.into(),
            buttons: None,
        }
    }

    /// An info element with action buttons.
    pub fn info_with_buttons(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        buttons: Vec<Button>,
    ) -> Self {
        CardElement::Info {
            title: title.into(),
            subtitle: subtitle.into(),
            buttons: Some(buttons),
        }
    }
}

impl Button {
    /// A button that raises `event_name` with the given parameters.
    pub fn event(
        text: impl Into<String>,
        event_name: impl Into<String>,
        parameters: Map<String, Value>,
    ) -> Self {
        Button {
            text: text.into(),
            event: EventTrigger {
                name: event_name.into(),
                language_code: String::new(),
                parameters,
            },
        }
    }
}
