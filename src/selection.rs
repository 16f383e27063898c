//! Ordinal resolution for the dress selection stage.
//!
//! Customers pick dresses by the 1-based numbers shown on the search cards,
//! either by tapping a card button (one number) or by typing ("2 and 5").
//! This module turns whatever shape those picks arrive in into concrete
//! entries from the candidate list.

use crate::dialogflow::request::integer_from_value;
use crate::dialogflow::Params;
use crate::models::DressSummary;
use serde_json::Value;

const SELECTED_NUMBERS_PARAMS: &[&str] = &["selectedNumbers", "selectednumbers"];
const SELECTED_NUMBER_PARAMS: &[&str] = &["selectedNumber", "selectednumber"];

/// Read the customer's picks from session parameters.
///
/// The plural spelling wins over the singular one; a bare scalar is treated
/// as a one-element list. Entries that fail integer coercion are dropped,
/// so "2 and a half" contributes nothing.
pub fn selected_ordinals(params: &Params<'_>) -> Vec<i64> {
    let value = params
        .first(SELECTED_NUMBERS_PARAMS)
        .or_else(|| params.first(SELECTED_NUMBER_PARAMS));

    match value {
        Some(Value::Array(entries)) => entries.iter().filter_map(integer_from_value).collect(),
        Some(single) => integer_from_value(single).into_iter().collect(),
        None => Vec::new(),
    }
}

/// Resolve 1-based ordinals against the candidate list.
///
/// Out-of-range ordinals are skipped rather than treated as errors; the
/// result keeps the customer's pick order, duplicates included.
pub fn resolve_ordinals(candidates: &[DressSummary], ordinals: &[i64]) -> Vec<DressSummary> {
    let mut selected = Vec::new();
    for ordinal in ordinals {
        if *ordinal >= 1 && (*ordinal as usize) <= candidates.len() {
            selected.push(candidates[(*ordinal - 1) as usize].clone());
        }
    }
    selected
}
