//! Wire types for the Dialogflow CX webhook contract.
//!
//! Requests arrive with a `sessionInfo` block carrying the accumulated
//! session parameters; responses hand back fulfillment messages plus any
//! parameter updates. Field naming follows the wire exactly, which mixes
//! camelCase (`sessionInfo`) and snake_case (`fulfillment_response`).

pub mod request;
pub mod response;

pub use request::{Params, SessionInfo, WebhookRequest};
pub use response::{
    Button, Card, CardElement, EventTrigger, FulfillmentResponse, Message, ResponseSessionInfo,
    WebhookResponse,
};
