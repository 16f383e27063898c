//! Data models for the boutique's catalog and bookings.
//!
//! This module contains the data structures representing catalog dresses, the
//! trimmed summaries carried through the conversation, and fitting bookings.

pub mod booking;
pub mod dress;

pub use booking::{Booking, BookingAppointment, BookingCustomer, BookingDress};
pub use dress::{Dress, DressSummary};
