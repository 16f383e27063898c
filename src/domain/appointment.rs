//! Appointment date and time value objects.
//!
//! The conversation engine hands dates and times over in whichever shape the
//! customer's phrasing produced: a structured `{year, month, day}` object, a
//! `{hours, minutes}` object, or a plain string. These types normalize all of
//! those into one canonical value with separate storage and display forms.

use chrono::NaiveDate;
use serde_json::{Map, Value};

/// A fitting appointment date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppointmentDate(NaiveDate);

impl AppointmentDate {
    /// Normalize a session parameter value into a date.
    ///
    /// Accepts the structured `{year, month, day}` object (fields may arrive
    /// as floats) or an ISO-ish string such as "2025-11-08" or
    /// "2025-11-08T14:30:00Z". Anything else, including impossible calendar
    /// dates, yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => {
                let year = i32::try_from(int_field(map, "year")?).ok()?;
                let month = u32::try_from(int_field(map, "month")?).ok()?;
                let day = u32::try_from(int_field(map, "day")?).ok()?;
                NaiveDate::from_ymd_opt(year, month, day).map(Self)
            }
            Value::String(text) => Self::from_iso(text),
            _ => None,
        }
    }

    fn from_iso(text: &str) -> Option<Self> {
        let date_part = text.trim().split(['T', ' ']).next()?;
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .ok()
            .map(Self)
    }

    /// Storage form, e.g. "2025-11-08".
    pub fn iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Spoken form, e.g. "November 8, 2025".
    pub fn display(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }
}

/// A fitting appointment time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentTime {
    /// Structured clock time from the conversation engine
    Clock { hours: u32, minutes: u32 },

    /// Free-text time the customer typed, passed through as-is
    Preformatted(String),
}

impl AppointmentTime {
    /// Normalize a session parameter value into a time.
    ///
    /// Accepts the structured `{hours, minutes}` object (24-hour clock,
    /// minutes optional) or a non-empty string. Out-of-range clock values
    /// yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => {
                let hours = int_field(map, "hours")?;
                let minutes = if map.contains_key("minutes") {
                    int_field(map, "minutes")?
                } else {
                    0
                };
                if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
                    return None;
                }
                Some(AppointmentTime::Clock {
                    hours: hours as u32,
                    minutes: minutes as u32,
                })
            }
            Value::String(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(AppointmentTime::Preformatted(trimmed.to_string()))
                }
            }
            _ => None,
        }
    }

    /// Spoken 12-hour form, e.g. "2:30 PM"; preformatted strings pass through.
    pub fn display(&self) -> String {
        match self {
            AppointmentTime::Clock { hours, minutes } => {
                let suffix = if *hours < 12 { "AM" } else { "PM" };
                let display_hours = match hours % 12 {
                    0 => 12,
                    h => h,
                };
                format!("{}:{:02} {}", display_hours, minutes, suffix)
            }
            AppointmentTime::Preformatted(text) => text.clone(),
        }
    }
}

/// Read an integral field from a parameter object.
///
/// The conversation engine serializes every number as a float, so 2025.0 is
/// accepted for a year; values with a fractional part are rejected.
fn int_field(map: &Map<String, Value>, key: &str) -> Option<i64> {
    match map.get(key)? {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Some(int)
            } else {
                let float = number.as_f64()?;
                if float.is_finite() && float.fract() == 0.0 {
                    Some(float as i64)
                } else {
                    None
                }
            }
        }
        _ => None,
    }
}
