//! Dress models for the boutique catalog.

use serde::{Deserialize, Serialize};

/// A dress document from the catalog collection.
///
/// Documents are stored with free-form fields, so every field defaults when
/// absent; a dress missing its `in_stock` flag simply never matches a search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Dress {
    /// Display name, e.g. "Elegant Ballgown"
    pub name: String,

    /// Price in the boutique's currency
    pub price: f64,

    /// Short marketing description
    pub description: String,

    /// Product photo URL
    pub image_url: String,

    /// Silhouette category, e.g. "ballgown", "mermaid"
    #[serde(rename = "type")]
    pub dress_type: String,

    /// Sizes the boutique can fit
    pub size_available: Vec<u32>,

    /// Whether the dress can currently be offered
    pub in_stock: bool,
}

/// The trimmed view of a dress that rides along in session parameters.
///
/// Only the fields the conversation needs survive the search stage; inventory
/// details like sizes and stock never leave the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DressSummary {
    /// Display name
    pub name: String,

    /// Price in the boutique's currency
    pub price: f64,

    /// Short marketing description
    pub description: String,

    /// Product photo URL
    pub image_url: String,
}

impl From<&Dress> for DressSummary {
    fn from(dress: &Dress) -> Self {
        DressSummary {
            name: dress.name.clone(),
            price: dress.price,
            description: dress.description.clone(),
            image_url: dress.image_url.clone(),
        }
    }
}
