//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like dress
//! slugs and appointment slots. These value objects normalize the loose
//! shapes arriving in session parameters into one canonical form before
//! anything gets persisted or spoken back to the customer.

pub mod appointment;
pub mod slug;

pub use appointment::{AppointmentDate, AppointmentTime};
pub use slug::DressSlug;
