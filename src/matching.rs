//! Catalog matching for the dress search stage.
//!
//! The catalog is small enough to scan in full, so matching is a single pass
//! over every document with one conjunctive predicate per dress.

use crate::dialogflow::Params;
use crate::models::{Dress, DressSummary};
use std::fmt;

const DRESS_TYPE_PARAMS: &[&str] = &["dress_type", "dressType", "dresstype"];
pub(crate) const DRESS_SIZE_PARAMS: &[&str] = &["dress_size", "dressSize", "dresssize"];
const MIN_PRICE_PARAMS: &[&str] = &["dress_min_price", "dressMinPrice", "min_price"];
const MAX_PRICE_PARAMS: &[&str] = &["dress_max_price", "dressMaxPrice", "max_price"];

/// What the customer asked for, normalized from session parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    /// Requested silhouette, lowercased for comparison
    pub dress_type: String,

    /// Requested size
    pub size: u32,

    /// Lower price bound, inclusive; 0 when the customer gave none
    pub min_price: f64,

    /// Upper price bound, inclusive; unbounded when the customer gave none
    pub max_price: f64,
}

/// Criteria the customer still has to provide before a search can run.
#[derive(Debug, PartialEq)]
pub struct MissingCriteria {
    pub missing: Vec<&'static str>,
}

impl fmt::Display for MissingCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.missing.join(", "))
    }
}

impl SearchCriteria {
    /// Read search criteria out of session parameters.
    ///
    /// Type and size are required; price bounds default to an open range.
    /// Values that fail coercion count as absent, so a size of "huge" reads
    /// the same as no size at all.
    pub fn from_params(params: &Params<'_>) -> Result<Self, MissingCriteria> {
        let dress_type = params.string(DRESS_TYPE_PARAMS);
        let size = params
            .integer(DRESS_SIZE_PARAMS)
            .and_then(|value| u32::try_from(value).ok());

        match (dress_type, size) {
            (Some(dress_type), Some(size)) => Ok(SearchCriteria {
                dress_type: dress_type.to_lowercase(),
                size,
                min_price: params.number(MIN_PRICE_PARAMS).unwrap_or(0.0),
                max_price: params.number(MAX_PRICE_PARAMS).unwrap_or(f64::INFINITY),
            }),
            (dress_type, size) => {
                let mut missing = Vec::new();
                if dress_type.is_none() {
                    missing.push("dress type");
                }
                if size.is_none() {
                    missing.push("dress size");
                }
                Err(MissingCriteria { missing })
            }
        }
    }

    /// Whether a catalog dress satisfies every criterion.
    ///
    /// Type comparison is case-insensitive; both price bounds are inclusive;
    /// out-of-stock dresses never match.
    pub fn matches(&self, dress: &Dress) -> bool {
        dress.in_stock
            && dress.price >= self.min_price
            && dress.price <= self.max_price
            && dress.dress_type.to_lowercase() == self.dress_type
            && dress.size_available.contains(&self.size)
    }
}

/// Scan the catalog and summarize every match, preserving catalog order.
pub fn matching_summaries(catalog: &[Dress], criteria: &SearchCriteria) -> Vec<DressSummary> {
    catalog
        .iter()
        .filter(|dress| criteria.matches(dress))
        .map(DressSummary::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn dress(name: &str, dress_type: &str, price: f64, sizes: &[u32], in_stock: bool) -> Dress {
        Dress {
            name: name.to_string(),
            price,
            description: format!("{} description", name),
            image_url: format!("https://example.com/{}.jpg", name),
            dress_type: dress_type.to_string(),
            size_available: sizes.to_vec(),
            in_stock,
        }
    }

    fn params_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got: {:?}", other),
        }
    }

    fn criteria(dress_type: &str, size: u32, min: f64, max: f64) -> SearchCriteria {
        SearchCriteria {
            dress_type: dress_type.to_string(),
            size,
            min_price: min,
            max_price: max,
        }
    }

    #[test]
    fn test_from_params_full_criteria() {
        let values = params_map(json!({
            "dress_type": "Ballgown",
            "dress_size": 10.0,
            "dress_min_price": 500,
            "dress_max_price": "2000"
        }));
        let result = SearchCriteria::from_params(&Params::new(&values)).unwrap();

        assert_eq!(result.dress_type, "ballgown");
        assert_eq!(result.size, 10);
        assert_eq!(result.min_price, 500.0);
        assert_eq!(result.max_price, 2000.0);
    }

    #[test]
    fn test_from_params_defaults_price_bounds() {
        let values = params_map(json!({"dressType": "sheath", "dressSize": 8}));
        let result = SearchCriteria::from_params(&Params::new(&values)).unwrap();

        assert_eq!(result.min_price, 0.0);
        assert_eq!(result.max_price, f64::INFINITY);
    }

    #[test]
    fn test_from_params_reports_missing() {
        let values = params_map(json!({"dress_min_price": 500}));
        let err = SearchCriteria::from_params(&Params::new(&values)).unwrap_err();
        assert_eq!(err.missing, vec!["dress type", "dress size"]);

        let values = params_map(json!({"dress_type": "mermaid"}));
        let err = SearchCriteria::from_params(&Params::new(&values)).unwrap_err();
        assert_eq!(err.missing, vec!["dress size"]);
        assert_eq!(err.to_string(), "dress size");
    }

    #[test]
    fn test_from_params_uncoercible_size_counts_as_missing() {
        let values = params_map(json!({"dress_type": "mermaid", "dress_size": "huge"}));
        let err = SearchCriteria::from_params(&Params::new(&values)).unwrap_err();
        assert_eq!(err.missing, vec!["dress size"]);

        // Negative sizes cannot be real sizes either
        let values = params_map(json!({"dress_type": "mermaid", "dress_size": -4}));
        assert!(SearchCriteria::from_params(&Params::new(&values)).is_err());
    }

    #[test]
    fn test_matches_requires_every_criterion() {
        let candidate = dress("Elegant Ballgown", "ballgown", 1200.0, &[4, 6, 8, 10], true);

        assert!(criteria("ballgown", 10, 500.0, 2000.0).matches(&candidate));
        assert!(!criteria("mermaid", 10, 500.0, 2000.0).matches(&candidate));
        assert!(!criteria("ballgown", 12, 500.0, 2000.0).matches(&candidate));
        assert!(!criteria("ballgown", 10, 1500.0, 2000.0).matches(&candidate));
        assert!(!criteria("ballgown", 10, 500.0, 1000.0).matches(&candidate));
    }

    #[test]
    fn test_matches_excludes_out_of_stock() {
        let candidate = dress("Sold Out Gown", "ballgown", 1200.0, &[10], false);
        assert!(!criteria("ballgown", 10, 0.0, f64::INFINITY).matches(&candidate));
    }

    #[test]
    fn test_matches_type_case_insensitive() {
        let candidate = dress("Shouty Gown", "BALLGOWN", 800.0, &[10], true);
        assert!(criteria("ballgown", 10, 0.0, f64::INFINITY).matches(&candidate));
    }

    #[test]
    fn test_matches_price_bounds_inclusive() {
        let candidate = dress("Boundary Gown", "sheath", 500.0, &[8], true);
        assert!(criteria("sheath", 8, 500.0, 500.0).matches(&candidate));
    }

    #[test]
    fn test_matching_summaries_preserves_order() {
        let catalog = vec![
            dress("First", "ballgown", 900.0, &[10], true),
            dress("Skipped", "mermaid", 900.0, &[10], true),
            dress("Second", "ballgown", 1100.0, &[10], true),
        ];
        let found = matching_summaries(&catalog, &criteria("ballgown", 10, 0.0, f64::INFINITY));

        let names: Vec<&str> = found.iter().map(|summary| summary.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_matching_summaries_empty_catalog() {
        let found = matching_summaries(&[], &criteria("ballgown", 10, 0.0, f64::INFINITY));
        assert!(found.is_empty());
    }
}
