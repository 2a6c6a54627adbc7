//! Screen state: focus, modals and the text buffer around one form
//!
//! The [`App`] owns the [`TranslationForm`] for the lifetime of the screen.
//! Everything the user changes goes through the form's operations; the
//! app only tracks presentation concerns such as focus and open pickers.

mod actions;
mod event;
mod input;
mod picker;

pub use event::{Event, Handler};
pub use input::InputState;
pub use picker::{PickerKind, PickerOption, PickerState};

use crate::config::Config;
use crate::form::{InputMode, LogDispatcher, TranslationForm};

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// Provider selector
    #[default]
    Provider,
    /// Model selector
    Model,
    /// Source language selector
    FromLanguage,
    /// Swap button
    Swap,
    /// Target language selector
    ToLanguage,
    /// Text/voice toggle
    InputMode,
    /// Text area (skipped in voice mode)
    Text,
    /// Submit button
    Submit,
}

impl Field {
    /// All fields in tab order
    pub const ALL: &'static [Self] = &[
        Self::Provider,
        Self::Model,
        Self::FromLanguage,
        Self::Swap,
        Self::ToLanguage,
        Self::InputMode,
        Self::Text,
        Self::Submit,
    ];

    /// Picker opened by this field, if it is a selector
    #[must_use]
    pub const fn picker(self) -> Option<PickerKind> {
        match self {
            Self::Provider => Some(PickerKind::Provider),
            Self::Model => Some(PickerKind::Model),
            Self::FromLanguage => Some(PickerKind::InputLanguage),
            Self::ToLanguage => Some(PickerKind::OutputLanguage),
            Self::Swap | Self::InputMode | Self::Text | Self::Submit => None,
        }
    }
}

/// What the screen is currently showing on top of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Form only
    #[default]
    Normal,
    /// A picker modal is open
    Picker(PickerKind),
    /// Help overlay
    Help,
}

/// One-line message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Informational message
    Info(String),
    /// Something went wrong
    Error(String),
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Form being edited
    pub form: TranslationForm,

    /// Focused control
    pub focus: Field,

    /// Current overlay
    pub mode: Mode,

    /// Text field buffer and cursor
    pub input: InputState,

    /// Picker modal state
    pub picker: PickerState,

    /// Last status or error message
    pub status: Option<StatusMessage>,

    /// Where submissions go
    pub dispatcher: LogDispatcher,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application around a fresh form
    #[must_use]
    pub fn new(config: Config, form: TranslationForm) -> Self {
        let mut input = InputState::new();
        input.set(form.state().input_text().to_string());
        Self {
            config,
            form,
            focus: Field::default(),
            mode: Mode::Normal,
            input,
            picker: PickerState::new(),
            status: None,
            dispatcher: LogDispatcher::new(),
            should_quit: false,
        }
    }

    /// Whether keystrokes currently edit the text field
    #[must_use]
    pub fn is_editing_text(&self) -> bool {
        self.mode == Mode::Normal
            && self.focus == Field::Text
            && self.form.state().input_mode() == InputMode::Text
    }

    /// Whether `field` can receive focus right now
    #[must_use]
    pub fn is_focusable(&self, field: Field) -> bool {
        field != Field::Text || self.form.state().input_mode() == InputMode::Text
    }

    /// Enter a mode
    pub const fn enter_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Return to the form
    pub fn exit_mode(&mut self) {
        if matches!(self.mode, Mode::Picker(_)) {
            self.picker.clear();
        }
        self.mode = Mode::Normal;
    }

    /// Show an informational message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Info(message.into()));
    }

    /// Show an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Error(message.into()));
    }

    /// Whether the two languages are the same (shown as a hint, never blocked)
    #[must_use]
    pub fn languages_match(&self) -> bool {
        let state = self.form.state();
        state.input_language() == state.output_language()
    }
}
