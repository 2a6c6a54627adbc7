//! Language table

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// A language code and the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Short code, e.g. `en`
    pub code: String,
    /// Human readable label, e.g. `English`
    pub label: String,
}

impl Language {
    /// Build a language from string slices.
    #[must_use]
    pub fn new(code: &str, label: &str) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
        }
    }
}

/// Validated, ordered list of languages with unique codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCatalog {
    languages: Vec<Language>,
}

impl LanguageCatalog {
    /// Validate and wrap a list of languages.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or a code repeats.
    pub fn new(languages: Vec<Language>) -> Result<Self, CatalogError> {
        if languages.is_empty() {
            return Err(CatalogError::NoLanguages);
        }
        for (idx, lang) in languages.iter().enumerate() {
            if languages[..idx].iter().any(|l| l.code == lang.code) {
                return Err(CatalogError::DuplicateLanguage(lang.code.clone()));
            }
        }
        Ok(Self { languages })
    }

    /// The stock language list shipped with the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            languages: builtin_languages(),
        }
    }

    /// Languages in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    /// Languages as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Language] {
        &self.languages
    }

    /// Whether `code` is in the list.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l.code == code)
    }

    /// Display label for `code`.
    #[must_use]
    pub fn label(&self, code: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|l| l.code == code)
            .map(|l| l.label.as_str())
    }

    /// Number of languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Always false for a validated catalog; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

pub(crate) fn builtin_languages() -> Vec<Language> {
    [
        ("en", "English"),
        ("hi", "Hindi"),
        ("bn", "Bengali"),
        ("ta", "Tamil"),
        ("te", "Telugu"),
        ("mr", "Marathi"),
        ("ur", "Urdu"),
        ("es", "Spanish"),
        ("fr", "French"),
        ("de", "German"),
        ("ar", "Arabic"),
        ("zh", "Chinese"),
        ("ja", "Japanese"),
    ]
    .into_iter()
    .map(|(code, label)| Language::new(code, label))
    .collect()
}
