//! URL mapping entity.

/// A stored mapping from a short alias to its destination URL.
///
/// Mappings are immutable once created; they can only be deleted.
/// `id` is the store's insertion-order surrogate key and is never exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl UrlMapping {
    /// Creates a new mapping instance.
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_mapping_creation() {
        let mapping = UrlMapping::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
        );

        assert_eq!(mapping.id, 1);
        assert_eq!(mapping.alias, "abc123");
        assert_eq!(mapping.url, "https://example.com");
    }
}
