//! Culture set: the supported language tags and the process default.
//!
//! The set is constructed once at startup and injected wherever a culture
//! decision is made. It is immutable afterwards, so request handling never
//! needs synchronization around it.

use anyhow::{bail, Result};

/// The ordered set of supported culture tags plus the designated default.
///
/// Tags are short ISO 639-1 codes (e.g., "tr", "en"). Matching is
/// case-sensitive everywhere: "TR" is not a supported tag.
#[derive(Debug, Clone)]
pub struct CultureSet {
    tags: Vec<&'static str>,
    default_tag: &'static str,
}

impl CultureSet {
    /// Build a culture set from explicit tags and a default.
    ///
    /// # Returns
    /// * `Ok(CultureSet)` if the default is a member of `tags`
    /// * `Err` otherwise (a configuration error, caught at startup)
    pub fn new(tags: Vec<&'static str>, default_tag: &'static str) -> Result<Self> {
        if tags.is_empty() {
            bail!("Culture set must contain at least one tag");
        }
        if !tags.contains(&default_tag) {
            bail!("Default culture '{}' is not in the supported set", default_tag);
        }
        Ok(Self { tags, default_tag })
    }

    /// The supported tags, in declaration order.
    pub fn tags(&self) -> &[&'static str] {
        &self.tags
    }

    /// The default culture tag. Always a member of the set.
    pub fn default_tag(&self) -> &'static str {
        self.default_tag
    }

    /// Check whether a tag is supported (case-sensitive).
    pub fn is_supported(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }

    /// Normalize an arbitrary requested tag to a supported one.
    ///
    /// Returns the matching supported tag, or the default if the request is
    /// unknown. Never fails: invalid input is silently substituted.
    pub fn validate_or_default(&self, requested: &str) -> &'static str {
        self.tags
            .iter()
            .copied()
            .find(|t| *t == requested)
            .unwrap_or(self.default_tag)
    }
}

/// The site's culture contract: Turkish (default), English, German, French.
///
/// These tags are an external contract shared with the language-switch links
/// in rendered pages and must not change silently.
impl Default for CultureSet {
    fn default() -> Self {
        Self {
            tags: vec!["tr", "en", "de", "fr"],
            default_tag: "tr",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Construction Tests ====================

    #[test]
    fn test_default_set_contract() {
        let cultures = CultureSet::default();
        assert_eq!(cultures.tags(), &["tr", "en", "de", "fr"]);
        assert_eq!(cultures.default_tag(), "tr");
    }

    #[test]
    fn test_new_valid() {
        let cultures = CultureSet::new(vec!["en", "es"], "en").expect("Should succeed");
        assert_eq!(cultures.default_tag(), "en");
        assert!(cultures.is_supported("es"));
    }

    #[test]
    fn test_new_default_not_member() {
        let result = CultureSet::new(vec!["en", "es"], "fr");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_empty_set() {
        let result = CultureSet::new(vec![], "en");
        assert!(result.is_err());
    }

    // ==================== Membership Tests ====================

    #[test]
    fn test_is_supported_members() {
        let cultures = CultureSet::default();
        for tag in ["tr", "en", "de", "fr"] {
            assert!(cultures.is_supported(tag), "{tag} should be supported");
        }
    }

    #[test]
    fn test_is_supported_unknown() {
        let cultures = CultureSet::default();
        assert!(!cultures.is_supported("xx"));
        assert!(!cultures.is_supported(""));
        assert!(!cultures.is_supported("zh-CN"));
    }

    #[test]
    fn test_is_supported_case_sensitive() {
        let cultures = CultureSet::default();
        assert!(!cultures.is_supported("TR"));
        assert!(!cultures.is_supported("En"));
    }

    // ==================== Normalization Tests ====================

    #[test]
    fn test_validate_or_default_passes_members_through() {
        let cultures = CultureSet::default();
        assert_eq!(cultures.validate_or_default("de"), "de");
        assert_eq!(cultures.validate_or_default("fr"), "fr");
    }

    #[test]
    fn test_validate_or_default_substitutes_default() {
        let cultures = CultureSet::default();
        assert_eq!(cultures.validate_or_default("xx"), "tr");
        assert_eq!(cultures.validate_or_default(""), "tr");
        assert_eq!(cultures.validate_or_default("en-US"), "tr");
    }
}
