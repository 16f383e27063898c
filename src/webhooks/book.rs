//! Fitting booking webhook.
//!
//! Gathers customer and appointment details from the session, validates that
//! everything needed is present, and writes the booking document. This is
//! the only stage that writes to the store.

use crate::dialogflow::{SessionInfo, WebhookRequest, WebhookResponse};
use crate::domain::{AppointmentDate, AppointmentTime};
use crate::error::StoreResult;
use crate::matching::DRESS_SIZE_PARAMS;
use crate::models::booking::APPOINTMENT_DURATION_MINUTES;
use crate::models::{Booking, BookingAppointment, BookingCustomer, BookingDress, DressSummary};
use crate::repositories::BookingRepository;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Session parameter receiving the new booking's document id.
const BOOKING_ID_PARAM: &str = "bookingId";

/// Session parameter flagging that the conversation reached a booking.
const BOOKING_COMPLETE_PARAM: &str = "bookingComplete";

const CUSTOMER_NAME_PARAMS: &[&str] = &["customer_name", "customerName", "name"];
const CUSTOMER_EMAIL_PARAMS: &[&str] = &["customer_email", "customerEmail", "email"];
const CUSTOMER_PHONE_PARAMS: &[&str] = &["customer_phone", "customerPhone", "phone"];
const APPOINTMENT_DATE_PARAMS: &[&str] = &["appointment_date", "appointmentDate", "date"];
const APPOINTMENT_TIME_PARAMS: &[&str] = &["appointment_time", "appointmentTime", "time"];
const SELECTED_DRESSES_PARAMS: &[&str] = &["selectedDresses", "selecteddresses"];

pub(crate) const APOLOGY_TEXT: &str =
    "Sorry, something went wrong while booking your appointment.";

/// Handler for the booking stage.
pub struct BookFittingWebhook {
    bookings: Arc<dyn BookingRepository>,
}

impl BookFittingWebhook {
    /// Create a new BookFittingWebhook writing to the given repository.
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    /// Handle one webhook call.
    ///
    /// Never fails outward: any internal error degrades to the stage's
    /// apology text so the agent always has something to say.
    pub async fn handle(&self, request: &WebhookRequest) -> WebhookResponse {
        let session = match &request.session_info {
            Some(session) => session,
            None => {
                tracing::error!("book-fitting: request has no sessionInfo block");
                return WebhookResponse::text(APOLOGY_TEXT);
            }
        };

        tracing::info!("book-fitting: invoked for session {}", session.session);
        tracing::debug!("book-fitting: parameters {:?}", session.parameters);

        match self.try_handle(session).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    "book-fitting: failed for session {}: {}",
                    session.session,
                    e
                );
                WebhookResponse::text(APOLOGY_TEXT)
            }
        }
    }

    async fn try_handle(&self, session: &SessionInfo) -> StoreResult<WebhookResponse> {
        let details = match BookingDetails::from_params(session) {
            Ok(details) => details,
            Err(missing) => {
                tracing::info!("book-fitting: details incomplete, missing {}", missing);
                return Ok(WebhookResponse::text(missing.to_prompt()));
            }
        };

        let customer_name = details.name.clone();
        let date_display = details.date.display();
        let time_display = details.time.display();

        let booking = details.into_booking(session.session.clone(), Utc::now());
        let booking_id = self.bookings.create(&booking).await?;
        tracing::info!(
            "book-fitting: stored booking {} ({} dresses, total {})",
            booking_id,
            booking.dresses.len(),
            booking.total_price
        );

        let confirmation = format!(
            "Thank you {}! Your fitting is booked for {} at {}. We look forward to seeing you!",
            customer_name, date_display, time_display
        );

        let mut parameters = session.parameters.clone();
        parameters.insert(BOOKING_ID_PARAM.to_string(), Value::String(booking_id));
        parameters.insert(BOOKING_COMPLETE_PARAM.to_string(), Value::Bool(true));

        Ok(WebhookResponse::text(confirmation).with_parameters(parameters))
    }
}

/// Everything the booking needs, validated and normalized.
#[derive(Debug)]
struct BookingDetails {
    name: String,
    email: String,
    phone: Option<String>,
    date: AppointmentDate,
    time: AppointmentTime,
    dresses: Vec<DressSummary>,
    size: Option<u32>,
}

/// Required details the session does not have yet.
#[derive(Debug, PartialEq)]
struct MissingDetails(Vec<&'static str>);

impl MissingDetails {
    /// The correction prompt naming each missing detail.
    fn to_prompt(&self) -> String {
        format!(
            "I still need a few details before I can book your fitting: {}. Could you share them?",
            self.0.join(", ")
        )
    }
}

impl fmt::Display for MissingDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

impl BookingDetails {
    /// Read and validate booking details from session parameters.
    ///
    /// Reports every missing detail at once so the customer is asked one
    /// combined question instead of one per turn. The dress size is
    /// optional: it is stamped onto booking entries when the search stage
    /// captured one, and simply omitted otherwise.
    fn from_params(session: &SessionInfo) -> Result<Self, MissingDetails> {
        let params = session.params();

        let name = params.string(CUSTOMER_NAME_PARAMS);
        let email = params.string(CUSTOMER_EMAIL_PARAMS);
        let phone = params.string(CUSTOMER_PHONE_PARAMS);
        let date = params
            .first(APPOINTMENT_DATE_PARAMS)
            .and_then(AppointmentDate::from_value);
        let time = params
            .first(APPOINTMENT_TIME_PARAMS)
            .and_then(AppointmentTime::from_value);
        let dresses = params
            .first(SELECTED_DRESSES_PARAMS)
            .map(|value| serde_json::from_value::<Vec<DressSummary>>(value.clone()).unwrap_or_default())
            .unwrap_or_default();
        let size = params
            .integer(DRESS_SIZE_PARAMS)
            .and_then(|value| u32::try_from(value).ok());

        let mut missing = Vec::new();
        if name.is_none() {
            missing.push("your name");
        }
        if email.is_none() {
            missing.push("your email");
        }
        if date.is_none() {
            missing.push("the appointment date");
        }
        if time.is_none() {
            missing.push("the appointment time");
        }
        if dresses.is_empty() {
            missing.push("the dresses you'd like to try");
        }

        match (name, email, date, time) {
            (Some(name), Some(email), Some(date), Some(time)) if missing.is_empty() => Ok(Self {
                name,
                email,
                phone,
                date,
                time,
                dresses,
                size,
            }),
            _ => Err(MissingDetails(missing)),
        }
    }

    /// Turn the validated details into a persistable booking.
    fn into_booking(self, session: String, created_at: DateTime<Utc>) -> Booking {
        let dresses = self
            .dresses
            .iter()
            .map(|summary| BookingDress::from_summary(summary, self.size))
            .collect();

        Booking::new(
            BookingCustomer {
                name: self.name,
                email: self.email,
                phone: self.phone,
            },
            BookingAppointment {
                date: self.date.iso(),
                time: self.time.display(),
                duration_minutes: APPOINTMENT_DURATION_MINUTES,
            },
            dresses,
            session,
            created_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn session_with(parameters: Value) -> SessionInfo {
        serde_json::from_value(json!({
            "session": "projects/p/sessions/s",
            "parameters": parameters
        }))
        .unwrap()
    }

    fn complete_parameters() -> Value {
        json!({
            "customer_name": "Jane Doe",
            "customer_email": "jane@example.com",
            "appointment_date": {"year": 2025, "month": 11, "day": 8},
            "appointment_time": {"hours": 14, "minutes": 30},
            "selectedDresses": [
                {"name": "Elegant Ballgown", "price": 1200.0,
                 "description": "A stunning ballgown",
                 "image_url": "https://example.com/b.jpg"}
            ],
            "dress_size": 10
        })
    }

    #[test]
    fn test_details_from_complete_parameters() {
        let session = session_with(complete_parameters());
        let details = BookingDetails::from_params(&session).unwrap();

        assert_eq!(details.name, "Jane Doe");
        assert_eq!(details.email, "jane@example.com");
        assert_eq!(details.phone, None);
        assert_eq!(details.date.iso(), "2025-11-08");
        assert_eq!(details.time.display(), "2:30 PM");
        assert_eq!(details.dresses.len(), 1);
        assert_eq!(details.size, Some(10));
    }

    #[test]
    fn test_details_report_all_missing_at_once() {
        let session = session_with(json!({"customer_name": "Jane Doe"}));
        let err = BookingDetails::from_params(&session).unwrap_err();

        assert_eq!(
            err.0,
            vec![
                "your email",
                "the appointment date",
                "the appointment time",
                "the dresses you'd like to try"
            ]
        );
        assert!(err.to_prompt().contains("your email, the appointment date"));
    }

    #[test]
    fn test_details_garbage_date_counts_as_missing() {
        let mut parameters = complete_parameters();
        parameters["appointment_date"] = json!("whenever");
        let session = session_with(parameters);

        let err = BookingDetails::from_params(&session).unwrap_err();
        assert_eq!(err.0, vec!["the appointment date"]);
    }

    #[test]
    fn test_into_booking_stamps_size_and_slug() {
        let session = session_with(complete_parameters());
        let details = BookingDetails::from_params(&session).unwrap();
        let booking = details.into_booking(
            "projects/p/sessions/s".to_string(),
            Utc.with_ymd_and_hms(2025, 8, 25, 9, 0, 0).unwrap(),
        );

        assert_eq!(booking.appointment.date, "2025-11-08");
        assert_eq!(booking.appointment.time, "2:30 PM");
        assert_eq!(booking.appointment.duration_minutes, 60);
        assert_eq!(booking.dresses[0].id, "elegant-ballgown");
        assert_eq!(booking.dresses[0].size, Some(10));
        assert_eq!(booking.total_price, 1200.0);
        assert_eq!(booking.session, "projects/p/sessions/s");
    }
}
