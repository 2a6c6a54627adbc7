//! Translation form state and the operations that keep it consistent
//!
//! [`TranslationForm`] is the only way to change a [`FormState`]. Every
//! operation either applies fully or leaves the state untouched, and the
//! selected model always belongs to the selected provider.

mod dispatch;
mod submission;

pub use dispatch::{DispatchError, DispatchReceipt, Dispatcher, LogDispatcher};
pub use submission::Submission;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::Catalog;

/// How the user supplies the text to translate
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Typed text
    #[default]
    Text,
    /// Recorded speech
    Voice,
}

impl InputMode {
    /// Label shown in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Voice => "Voice",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Text => Self::Voice,
            Self::Voice => Self::Text,
        }
    }
}

/// Caller contract violations and submission failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Provider is not in the catalog
    #[error("unknown provider {0:?}")]
    UnknownProvider(String),
    /// Model is not offered by the selected provider
    #[error("model {model:?} is not offered by {provider:?}")]
    UnknownModel {
        /// Currently selected provider
        provider: String,
        /// Rejected model
        model: String,
    },
    /// Language code is not in the catalog
    #[error("unknown language code {0:?}")]
    UnknownLanguage(String),
    /// Text mode with nothing but whitespace typed
    #[error("nothing to translate")]
    NotSubmittable,
    /// The dispatcher refused the submission
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Current selections of the translation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    selected_provider: String,
    selected_model: String,
    input_text: String,
    input_language: String,
    output_language: String,
    input_mode: InputMode,
}

impl FormState {
    fn defaults(catalog: &Catalog) -> Self {
        let provider = catalog.providers().default_provider();
        Self {
            selected_provider: provider.name.clone(),
            selected_model: provider.models[0].clone(),
            input_text: String::new(),
            input_language: catalog.default_input_language().to_string(),
            output_language: catalog.default_output_language().to_string(),
            input_mode: InputMode::Text,
        }
    }

    /// Selected provider name.
    #[must_use]
    pub fn selected_provider(&self) -> &str {
        &self.selected_provider
    }

    /// Selected model name, always one of the selected provider's models.
    #[must_use]
    pub fn selected_model(&self) -> &str {
        &self.selected_model
    }

    /// Text typed so far.
    #[must_use]
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// Source language code.
    #[must_use]
    pub fn input_language(&self) -> &str {
        &self.input_language
    }

    /// Target language code.
    #[must_use]
    pub fn output_language(&self) -> &str {
        &self.output_language
    }

    /// Active input mode.
    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        self.input_mode
    }
}

/// Owner of the form state for one open screen.
#[derive(Debug, Clone)]
pub struct TranslationForm {
    catalog: Catalog,
    state: FormState,
}

impl TranslationForm {
    /// Open a form with the catalog's defaults selected.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let state = FormState::defaults(&catalog);
        Self { catalog, state }
    }

    /// Read-only view of the current selections.
    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Tables the form selects from.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Models offered by the selected provider.
    #[must_use]
    pub fn models(&self) -> &[String] {
        self.catalog
            .providers()
            .models(&self.state.selected_provider)
            .unwrap_or_default()
    }

    /// Select a provider and reset the model to that provider's first model.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownProvider`] if `provider` is not in the
    /// catalog. The state is left unchanged.
    pub fn set_provider(&mut self, provider: &str) -> Result<(), FormError> {
        let Some(model) = self.catalog.providers().default_model(provider) else {
            warn!(provider, "Rejected unknown provider");
            return Err(FormError::UnknownProvider(provider.to_string()));
        };

        self.state.selected_provider = provider.to_string();
        self.state.selected_model = model.to_string();
        debug!(provider, model, "Provider selected");
        Ok(())
    }

    /// Select one of the current provider's models.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownModel`] if the selected provider does not
    /// offer `model`. The state is left unchanged.
    pub fn set_model(&mut self, model: &str) -> Result<(), FormError> {
        let provider = &self.state.selected_provider;
        if !self.catalog.providers().contains_model(provider, model) {
            warn!(provider = provider.as_str(), model, "Rejected unknown model");
            return Err(FormError::UnknownModel {
                provider: provider.clone(),
                model: model.to_string(),
            });
        }

        self.state.selected_model = model.to_string();
        debug!(model, "Model selected");
        Ok(())
    }

    /// Replace the input text verbatim.
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.state.input_text = text.into();
    }

    /// Empty the input text.
    pub fn clear_input_text(&mut self) {
        self.state.input_text.clear();
    }

    /// Whether a clear control should be offered.
    #[must_use]
    pub fn can_clear_input_text(&self) -> bool {
        !self.state.input_text.is_empty()
    }

    /// Set the language to translate from.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownLanguage`] if `code` is not in the catalog.
    pub fn set_input_language(&mut self, code: &str) -> Result<(), FormError> {
        self.check_language(code)?;
        self.state.input_language = code.to_string();
        debug!(code, "Input language selected");
        Ok(())
    }

    /// Set the language to translate to.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownLanguage`] if `code` is not in the catalog.
    pub fn set_output_language(&mut self, code: &str) -> Result<(), FormError> {
        self.check_language(code)?;
        self.state.output_language = code.to_string();
        debug!(code, "Output language selected");
        Ok(())
    }

    fn check_language(&self, code: &str) -> Result<(), FormError> {
        if self.catalog.languages().contains(code) {
            Ok(())
        } else {
            warn!(code, "Rejected unknown language");
            Err(FormError::UnknownLanguage(code.to_string()))
        }
    }

    /// Exchange the input and output languages.
    pub fn swap_languages(&mut self) {
        std::mem::swap(
            &mut self.state.input_language,
            &mut self.state.output_language,
        );
        debug!(
            from = self.state.input_language.as_str(),
            to = self.state.output_language.as_str(),
            "Languages swapped"
        );
    }

    /// Switch between text and voice input. The typed text is kept.
    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.state.input_mode = mode;
    }

    /// Flip to the other input mode.
    pub fn toggle_input_mode(&mut self) {
        self.set_input_mode(self.state.input_mode.toggled());
    }

    /// Whether the submit action is available.
    ///
    /// Voice input can always be submitted. Text input needs at least one
    /// non-whitespace character.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        match self.state.input_mode {
            InputMode::Voice => true,
            InputMode::Text => !self.state.input_text.trim().is_empty(),
        }
    }

    /// Snapshot the form as a request payload.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotSubmittable`] when [`Self::can_submit`] is false.
    pub fn build_submission(&self) -> Result<Submission, FormError> {
        if !self.can_submit() {
            return Err(FormError::NotSubmittable);
        }

        Ok(Submission::new(
            self.state.selected_provider.clone(),
            self.state.selected_model.clone(),
            self.state.input_text.clone(),
            self.state.input_language.clone(),
            self.state.output_language.clone(),
        ))
    }

    /// Build a submission and hand it to `dispatcher`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotSubmittable`] when the form cannot be
    /// submitted, or [`FormError::Dispatch`] when the dispatcher refuses it.
    pub fn submit(
        &self,
        dispatcher: &mut dyn Dispatcher,
    ) -> Result<(Submission, DispatchReceipt), FormError> {
        let submission = self.build_submission()?;
        let receipt = dispatcher.dispatch(&submission)?;
        Ok((submission, receipt))
    }
}

impl Default for TranslationForm {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
