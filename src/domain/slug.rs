//! DressSlug value object.

use std::fmt;

/// A URL-safe identifier derived from a dress display name.
///
/// Booking records key their dress entries by slug rather than display name,
/// so "Elegant Ballgown" and "elegant  ballgown " land on the same id.
///
/// # Example
///
/// ```
/// use bridal_fulfillment::domain::DressSlug;
///
/// let slug = DressSlug::from_name("Elegant Ballgown");
/// assert_eq!(slug.as_str(), "elegant-ballgown");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DressSlug(String);

impl DressSlug {
    /// Derive a slug from a display name.
    ///
    /// Lowercases the name and collapses every run of whitespace into a
    /// single hyphen; leading and trailing whitespace is dropped.
    pub fn from_name(name: &str) -> Self {
        let lowered = name.to_lowercase();
        let slug = lowered.split_whitespace().collect::<Vec<_>>().join("-");
        Self(slug)
    }

    /// Get the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DressSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_basic() {
        let slug = DressSlug::from_name("Elegant Ballgown");
        assert_eq!(slug.as_str(), "elegant-ballgown");
    }

    #[test]
    fn test_slug_collapses_whitespace() {
        assert_eq!(
            DressSlug::from_name("  Lace   Mermaid\tGown ").as_str(),
            "lace-mermaid-gown"
        );
    }

    #[test]
    fn test_slug_already_normalized() {
        assert_eq!(DressSlug::from_name("sheath").as_str(), "sheath");
    }

    #[test]
    fn test_slug_empty_name() {
        assert_eq!(DressSlug::from_name("   ").as_str(), "");
    }

    #[test]
    fn test_slug_display() {
        let slug = DressSlug::from_name("A Line");
        assert_eq!(format!("{}", slug), "a-line");
    }
}
