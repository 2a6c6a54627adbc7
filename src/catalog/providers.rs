//! Provider and model table

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// One provider and the models it offers, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEntry {
    /// Provider display name, also used as its key
    pub name: String,
    /// Model names; the first one is the provider's default
    pub models: Vec<String>,
}

impl ProviderEntry {
    /// Build an entry from string slices.
    #[must_use]
    pub fn new(name: &str, models: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            models: models.iter().map(|&m| m.to_string()).collect(),
        }
    }
}

/// Validated, ordered mapping from provider name to its models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCatalog {
    entries: Vec<ProviderEntry>,
}

impl ProviderCatalog {
    /// Validate and wrap a list of provider entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, a provider name repeats, a
    /// provider has no models, or a model name repeats within a provider.
    pub fn new(entries: Vec<ProviderEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::NoProviders);
        }

        for (idx, entry) in entries.iter().enumerate() {
            if entries[..idx].iter().any(|e| e.name == entry.name) {
                return Err(CatalogError::DuplicateProvider(entry.name.clone()));
            }
            if entry.models.is_empty() {
                return Err(CatalogError::NoModels(entry.name.clone()));
            }
            for (model_idx, model) in entry.models.iter().enumerate() {
                if entry.models[..model_idx].contains(model) {
                    return Err(CatalogError::DuplicateModel {
                        provider: entry.name.clone(),
                        model: model.clone(),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    /// The stock provider table shipped with the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
        }
    }

    /// All entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[ProviderEntry] {
        &self.entries
    }

    /// Provider names in display order.
    pub fn providers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Models offered by `provider`, or `None` if it is not in the table.
    #[must_use]
    pub fn models(&self, provider: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.name == provider)
            .map(|e| e.models.as_slice())
    }

    /// Whether `provider` is in the table.
    #[must_use]
    pub fn contains_provider(&self, provider: &str) -> bool {
        self.models(provider).is_some()
    }

    /// Whether `model` is offered by `provider`.
    #[must_use]
    pub fn contains_model(&self, provider: &str, model: &str) -> bool {
        self.models(provider)
            .is_some_and(|models| models.iter().any(|m| m == model))
    }

    /// First provider in the table.
    #[must_use]
    pub fn default_provider(&self) -> &ProviderEntry {
        // Non-empty by construction.
        &self.entries[0]
    }

    /// First model of `provider`.
    #[must_use]
    pub fn default_model(&self, provider: &str) -> Option<&str> {
        self.models(provider)
            .and_then(|models| models.first())
            .map(String::as_str)
    }

    /// Number of providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a validated catalog; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ProviderCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

pub(crate) fn builtin_entries() -> Vec<ProviderEntry> {
    vec![
        ProviderEntry::new("OpenAI", &["GPT-4", "GPT-3.5 Turbo"]),
        ProviderEntry::new("Anthropic", &["Sonnet 4", "Opus 4"]),
        ProviderEntry::new("Google", &["Gemini 2.5 Pro", "Gemini 2.5 Flash"]),
        ProviderEntry::new("Meta", &["Llama 3.1 70B", "Llama 3.1 8B"]),
    ]
}
