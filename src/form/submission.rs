//! Submission snapshot

use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable payload assembled from the form when the user submits.
///
/// Owns copies of every field, so later edits to the form never change a
/// submission that has already been built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    provider: String,
    model: String,
    text: String,
    from_language: String,
    to_language: String,
}

impl Submission {
    pub(crate) const fn new(
        provider: String,
        model: String,
        text: String,
        from_language: String,
        to_language: String,
    ) -> Self {
        Self {
            provider,
            model,
            text,
            from_language,
            to_language,
        }
    }

    /// Provider the request is addressed to.
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Model under the provider.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Text to translate, verbatim (empty for a voice submission with no text).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Source language code.
    #[must_use]
    pub fn from_language(&self) -> &str {
        &self.from_language
    }

    /// Target language code.
    #[must_use]
    pub fn to_language(&self) -> &str {
        &self.to_language
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {}->{} ({} chars)",
            self.provider,
            self.model,
            self.from_language,
            self.to_language,
            self.text.chars().count()
        )
    }
}
