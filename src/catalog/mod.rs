//! Static provider, model and language tables
//!
//! Catalogs are validated once when they are built and never change
//! afterwards. The form controller and the screen only ever read them.

mod languages;
mod providers;

pub use languages::{Language, LanguageCatalog};
pub use providers::{ProviderCatalog, ProviderEntry};

pub(crate) use languages::builtin_languages;
pub(crate) use providers::builtin_entries;

use thiserror::Error;

/// Reasons a catalog fails validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The provider table has no entries
    #[error("provider catalog is empty")]
    NoProviders,
    /// A provider name appears more than once
    #[error("provider {0:?} is listed more than once")]
    DuplicateProvider(String),
    /// A provider lists no models
    #[error("provider {0:?} has no models")]
    NoModels(String),
    /// A model name appears twice under the same provider
    #[error("model {model:?} is listed more than once for provider {provider:?}")]
    DuplicateModel {
        /// Provider owning the duplicate
        provider: String,
        /// Repeated model name
        model: String,
    },
    /// The language list has no entries
    #[error("language catalog is empty")]
    NoLanguages,
    /// A language code appears more than once
    #[error("language code {0:?} is listed more than once")]
    DuplicateLanguage(String),
    /// A default language is not in the language list
    #[error("default language {0:?} is not in the language catalog")]
    UnknownDefaultLanguage(String),
}

/// Everything the form needs to know about what can be selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    providers: ProviderCatalog,
    languages: LanguageCatalog,
    default_input_language: String,
    default_output_language: String,
}

impl Catalog {
    /// Bundle the two tables with the languages a fresh form starts with.
    ///
    /// # Errors
    ///
    /// Returns an error if either default language is missing from `languages`.
    pub fn new(
        providers: ProviderCatalog,
        languages: LanguageCatalog,
        default_input_language: &str,
        default_output_language: &str,
    ) -> Result<Self, CatalogError> {
        for code in [default_input_language, default_output_language] {
            if !languages.contains(code) {
                return Err(CatalogError::UnknownDefaultLanguage(code.to_string()));
            }
        }

        Ok(Self {
            providers,
            languages,
            default_input_language: default_input_language.to_string(),
            default_output_language: default_output_language.to_string(),
        })
    }

    /// Built-in tables with English to Hindi as the starting pair.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            providers: ProviderCatalog::builtin(),
            languages: LanguageCatalog::builtin(),
            default_input_language: "en".to_string(),
            default_output_language: "hi".to_string(),
        }
    }

    /// Provider/model table.
    #[must_use]
    pub const fn providers(&self) -> &ProviderCatalog {
        &self.providers
    }

    /// Language table.
    #[must_use]
    pub const fn languages(&self) -> &LanguageCatalog {
        &self.languages
    }

    /// Language a fresh form translates from.
    #[must_use]
    pub fn default_input_language(&self) -> &str {
        &self.default_input_language
    }

    /// Language a fresh form translates to.
    #[must_use]
    pub fn default_output_language(&self) -> &str {
        &self.default_output_language
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
