//! Translating user gestures into form operations

use tracing::debug;

use super::{App, Field, Mode, PickerKind};
use crate::config::Action;

impl App {
    /// Run a key-bound action in normal mode
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::NextField => self.focus_next(),
            Action::PrevField => self.focus_prev(),
            Action::Activate => self.activate_focused(),
            Action::Swap => self.form.swap_languages(),
            Action::ToggleMode => self.toggle_input_mode(),
            Action::Submit => self.submit(),
            Action::ClearText => self.clear_text(),
            Action::Help => self.enter_mode(Mode::Help),
            Action::Quit => self.should_quit = true,
            Action::Cancel => {
                if self.focus == Field::Text {
                    self.focus = Field::Submit;
                } else {
                    self.should_quit = true;
                }
            }
        }
    }

    /// Move focus forward, skipping fields that are not focusable
    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    /// Move focus backward, skipping fields that are not focusable
    pub fn focus_prev(&mut self) {
        self.step_focus(Field::ALL.len() - 1);
    }

    fn step_focus(&mut self, step: usize) {
        let count = Field::ALL.len();
        let mut idx = Field::ALL
            .iter()
            .position(|&f| f == self.focus)
            .unwrap_or(0);
        for _ in 0..count {
            idx = (idx + step) % count;
            if self.is_focusable(Field::ALL[idx]) {
                self.focus = Field::ALL[idx];
                return;
            }
        }
    }

    /// Press the focused control
    pub fn activate_focused(&mut self) {
        if let Some(kind) = self.focus.picker() {
            self.open_picker(kind);
            return;
        }
        match self.focus {
            Field::Swap => self.form.swap_languages(),
            Field::InputMode => self.toggle_input_mode(),
            Field::Submit | Field::Text => self.submit(),
            Field::Provider | Field::Model | Field::FromLanguage | Field::ToLanguage => {}
        }
    }

    /// Open the picker for `kind`
    pub fn open_picker(&mut self, kind: PickerKind) {
        self.picker.start(kind, self.form.catalog(), self.form.state());
        self.enter_mode(Mode::Picker(kind));
    }

    /// Apply the highlighted picker entry to the form and close the picker
    pub fn confirm_picker(&mut self) {
        let Mode::Picker(kind) = self.mode else {
            return;
        };
        let Some(value) = self.picker.selected_value().map(str::to_string) else {
            return;
        };

        let result = match kind {
            PickerKind::Provider => self.form.set_provider(&value),
            PickerKind::Model => self.form.set_model(&value),
            PickerKind::InputLanguage => self.form.set_input_language(&value),
            PickerKind::OutputLanguage => self.form.set_output_language(&value),
        };
        if let Err(e) = result {
            self.set_error(e.to_string());
        }
        self.exit_mode();
    }

    /// Flip text/voice and move focus off the text field when it disappears
    pub fn toggle_input_mode(&mut self) {
        self.form.toggle_input_mode();
        if !self.is_focusable(self.focus) {
            self.focus = Field::Submit;
        }
    }

    /// Insert a character into the text field
    pub fn handle_char(&mut self, c: char) {
        if self.is_editing_text() {
            self.input.insert_char(c);
            self.sync_text();
        }
    }

    /// Backspace in the text field
    pub fn handle_backspace(&mut self) {
        if self.is_editing_text() {
            self.input.backspace();
            self.sync_text();
        }
    }

    /// Delete in the text field
    pub fn handle_delete(&mut self) {
        if self.is_editing_text() {
            self.input.delete();
            self.sync_text();
        }
    }

    /// Empty the text field; does nothing when it is already empty
    pub fn clear_text(&mut self) {
        if self.form.can_clear_input_text() {
            self.form.clear_input_text();
            self.input.clear();
        }
    }

    fn sync_text(&mut self) {
        self.form.set_input_text(self.input.buffer.as_str());
    }

    /// Send the form to the dispatcher if it can be submitted
    ///
    /// A disabled submit is silently ignored.
    pub fn submit(&mut self) {
        if !self.form.can_submit() {
            debug!("Submit ignored: nothing to translate");
            return;
        }

        match self.form.submit(&mut self.dispatcher) {
            Ok((submission, receipt)) => {
                self.set_status(format!("Request #{} sent: {submission}", receipt.sequence));
            }
            Err(e) => self.set_error(format!("Failed to submit: {e}")),
        }
    }
}
