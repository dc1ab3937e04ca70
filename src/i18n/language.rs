//! Language type: validated language representation.
//!
//! A `Language` can only be constructed for a code the registry knows and
//! has enabled, so the rest of the crate never handles raw language
//! strings.

use crate::i18n::strings::{self, Translation};
use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "no", "en")
    code: &'static str,
}

impl Language {
    pub const NORWEGIAN: Language = Language { code: "no" };
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is known and the language is enabled
    /// * `Err` otherwise
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The canonical (default) language: the one the store falls back to
    /// when no preference has been persisted.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a properly constructed Language.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// The translation table for this language.
    pub fn strings(&self) -> &'static Translation {
        strings::translations(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_norwegian_constant() {
        let norwegian = Language::NORWEGIAN;
        assert_eq!(norwegian.code(), "no");
        assert_eq!(norwegian.name(), "Norwegian");
        assert_eq!(norwegian.native_name(), "Norsk");
        assert!(norwegian.is_canonical());
    }

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(!english.is_canonical());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_norwegian() {
        let language = Language::from_code("no").expect("Should succeed");
        assert_eq!(language, Language::NORWEGIAN);
    }

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language, Language::ENGLISH);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("sv");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    // ==================== canonical Tests ====================

    #[test]
    fn test_canonical_returns_norwegian() {
        let canonical = Language::canonical();
        assert_eq!(canonical, Language::NORWEGIAN);
        assert!(canonical.is_canonical());
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_language_equality() {
        let lang1 = Language::ENGLISH;
        let lang2 = Language::from_code("en").unwrap();
        assert_eq!(lang1, lang2);
    }

    #[test]
    fn test_language_copy() {
        let lang1 = Language::NORWEGIAN;
        let lang2 = lang1;
        assert_eq!(lang1, lang2);
    }

    #[test]
    fn test_language_debug() {
        let debug = format!("{:?}", Language::ENGLISH);
        assert!(debug.contains("en"));
    }

    // ==================== Strings Access Tests ====================

    #[test]
    fn test_strings_access() {
        assert_eq!(Language::NORWEGIAN.strings().nav.home, "Hjem");
        assert_eq!(Language::ENGLISH.strings().nav.home, "Home");
    }
}
