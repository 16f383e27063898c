//! Booking model for fitting appointments.

use crate::models::DressSummary;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Every fitting is booked for a fixed one-hour slot.
pub const APPOINTMENT_DURATION_MINUTES: u32 = 60;

/// Customer contact details captured during the booking conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingCustomer {
    /// Customer's full name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Contact phone number, when the customer offered one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// The agreed fitting slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingAppointment {
    /// Appointment date in ISO form, e.g. "2025-11-08"
    pub date: String,

    /// Appointment time in display form, e.g. "2:30 PM"
    pub time: String,

    /// Slot length in minutes
    pub duration_minutes: u32,
}

/// A dress attached to a booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingDress {
    /// Slug derived from the dress name, e.g. "elegant-ballgown"
    pub id: String,

    /// Display name
    pub name: String,

    /// Price in the boutique's currency
    pub price: f64,

    /// Product photo URL
    pub image_url: String,

    /// Requested size, when the search stage captured one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl BookingDress {
    /// Build a booking entry from the summary carried in session parameters.
    pub fn from_summary(summary: &DressSummary, size: Option<u32>) -> Self {
        BookingDress {
            id: crate::domain::DressSlug::from_name(&summary.name).into_inner(),
            name: summary.name.clone(),
            price: summary.price,
            image_url: summary.image_url.clone(),
            size,
        }
    }
}

/// A fitting booking as written to the booking collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    /// Who the fitting is for
    pub customer: BookingCustomer,

    /// When the fitting happens
    pub appointment: BookingAppointment,

    /// Dresses the customer wants to try
    pub dresses: Vec<BookingDress>,

    /// Sum of the attached dress prices
    pub total_price: f64,

    /// Conversation session the booking came from
    pub session: String,

    /// Booking lifecycle state; new bookings start "confirmed"
    pub status: String,

    /// Creation timestamp in RFC 3339 form
    pub created_at: String,
}

impl Booking {
    /// Assemble a new booking, computing the total price from the dresses.
    pub fn new(
        customer: BookingCustomer,
        appointment: BookingAppointment,
        dresses: Vec<BookingDress>,
        session: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        let total_price = dresses.iter().map(|dress| dress.price).sum();
        Booking {
            customer,
            appointment,
            dresses,
            total_price,
            session,
            status: "confirmed".to_string(),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_summary(name: &str, price: f64) -> DressSummary {
        DressSummary {
            name: name.to_string(),
            price,
            description: "A lovely dress".to_string(),
            image_url: format!("https://example.com/{}.jpg", price),
        }
    }

    #[test]
    fn test_booking_totals_dress_prices() {
        let dresses = vec![
            BookingDress::from_summary(&sample_summary("Elegant Ballgown", 1200.0), Some(10)),
            BookingDress::from_summary(&sample_summary("Lace Mermaid", 950.5), Some(10)),
        ];
        let booking = Booking::new(
            BookingCustomer {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: None,
            },
            BookingAppointment {
                date: "2025-11-08".to_string(),
                time: "2:30 PM".to_string(),
                duration_minutes: APPOINTMENT_DURATION_MINUTES,
            },
            dresses,
            "projects/p/sessions/abc".to_string(),
            Utc.with_ymd_and_hms(2025, 8, 25, 9, 30, 0).unwrap(),
        );

        assert_eq!(booking.total_price, 2150.5);
        assert_eq!(booking.status, "confirmed");
        assert_eq!(booking.created_at, "2025-08-25T09:30:00Z");
    }

    #[test]
    fn test_booking_dress_slug_id() {
        let entry = BookingDress::from_summary(&sample_summary("Elegant Ballgown", 1200.0), None);
        assert_eq!(entry.id, "elegant-ballgown");
        assert_eq!(entry.size, None);
    }

    #[test]
    fn test_optional_fields_omitted_from_json() {
        let booking = Booking::new(
            BookingCustomer {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: None,
            },
            BookingAppointment {
                date: "2025-11-08".to_string(),
                time: "10:00 AM".to_string(),
                duration_minutes: APPOINTMENT_DURATION_MINUTES,
            },
            vec![BookingDress::from_summary(
                &sample_summary("Simple Sheath", 800.0),
                None,
            )],
            "session-1".to_string(),
            Utc.with_ymd_and_hms(2025, 8, 25, 12, 0, 0).unwrap(),
        );

        let value = serde_json::to_value(&booking).unwrap();
        assert!(value["customer"].get("phone").is_none());
        assert!(value["dresses"][0].get("size").is_none());
        assert_eq!(value["appointment"]["duration_minutes"], 60);
    }

    #[test]
    fn test_phone_serialized_when_present() {
        let customer = BookingCustomer {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: Some("555-0123".to_string()),
        };

        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(value["phone"], "555-0123");
    }
}
