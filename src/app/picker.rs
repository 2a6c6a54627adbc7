//! Picker state: choosing one entry from a catalog list with a filter

use crate::catalog::Catalog;
use crate::form::FormState;

/// Which form field a picker edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    /// Provider list
    Provider,
    /// Models of the selected provider
    Model,
    /// Source language
    InputLanguage,
    /// Target language
    OutputLanguage,
}

impl PickerKind {
    /// Modal title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Provider => " Provider ",
            Self::Model => " Model ",
            Self::InputLanguage => " Translate From ",
            Self::OutputLanguage => " Translate To ",
        }
    }
}

/// One selectable row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    /// Value handed to the form when confirmed
    pub value: String,
    /// Text shown in the list
    pub label: String,
}

/// State for the open picker modal
#[derive(Debug, Default)]
pub struct PickerState {
    /// All options for the current picker
    pub options: Vec<PickerOption>,

    /// Value selected in the form when the picker opened
    pub current: String,

    /// Current filter text
    pub filter: String,

    /// Currently selected index in filtered list
    pub selected: usize,
}

impl PickerState {
    /// Create an empty picker state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: Vec::new(),
            current: String::new(),
            filter: String::new(),
            selected: 0,
        }
    }

    /// Fill the picker for `kind` with the current selection highlighted
    pub fn start(&mut self, kind: PickerKind, catalog: &Catalog, state: &FormState) {
        let (options, current): (Vec<PickerOption>, &str) = match kind {
            PickerKind::Provider => (
                catalog
                    .providers()
                    .providers()
                    .map(|name| PickerOption {
                        value: name.to_string(),
                        label: name.to_string(),
                    })
                    .collect(),
                state.selected_provider(),
            ),
            PickerKind::Model => (
                catalog
                    .providers()
                    .models(state.selected_provider())
                    .unwrap_or_default()
                    .iter()
                    .map(|model| PickerOption {
                        value: model.clone(),
                        label: model.clone(),
                    })
                    .collect(),
                state.selected_model(),
            ),
            PickerKind::InputLanguage | PickerKind::OutputLanguage => (
                catalog
                    .languages()
                    .iter()
                    .map(|lang| PickerOption {
                        value: lang.code.clone(),
                        label: format!("{} ({})", lang.label, lang.code),
                    })
                    .collect(),
                if kind == PickerKind::InputLanguage {
                    state.input_language()
                } else {
                    state.output_language()
                },
            ),
        };

        self.options = options;
        self.current = current.to_string();
        self.filter.clear();
        self.selected = self
            .options
            .iter()
            .position(|o| o.value == self.current)
            .unwrap_or(0);
    }

    /// Get filtered options based on current filter
    #[must_use]
    pub fn filtered(&self) -> Vec<&PickerOption> {
        let filter_lower = self.filter.to_lowercase();
        self.options
            .iter()
            .filter(|o| filter_lower.is_empty() || o.label.to_lowercase().contains(&filter_lower))
            .collect()
    }

    /// Select next item in filtered list
    pub fn select_next(&mut self) {
        let count = self.filtered().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    /// Select previous item in filtered list
    pub fn select_prev(&mut self) {
        let count = self.filtered().len();
        if count > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// Value of the highlighted option
    #[must_use]
    pub fn selected_value(&self) -> Option<&str> {
        self.filtered()
            .get(self.selected)
            .map(|o| o.value.as_str())
    }

    /// Handle character input in filter
    pub fn handle_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.selected = 0;
    }

    /// Handle backspace in filter
    pub fn handle_filter_backspace(&mut self) {
        self.filter.pop();
        self.selected = 0;
    }

    /// Clear all picker state
    pub fn clear(&mut self) {
        self.options.clear();
        self.current.clear();
        self.filter.clear();
        self.selected = 0;
    }
}
