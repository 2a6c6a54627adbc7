//! Mode-specific key handling

use ratatui::crossterm::event::{KeyCode, KeyModifiers};

use crate::app::{App, Mode};

/// Handle a key event based on the current mode
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match app.mode {
        Mode::Help => app.exit_mode(),
        Mode::Picker(_) => handle_picker_mode(app, code),
        Mode::Normal => {
            if app.is_editing_text() && handle_text_input(app, code, modifiers) {
                return;
            }
            if let Some(action) = app.config.keys.get_action(code, modifiers) {
                app.handle_action(action);
            }
        }
    }
}

fn handle_picker_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter => app.confirm_picker(),
        KeyCode::Esc => app.exit_mode(),
        KeyCode::Up => app.picker.select_prev(),
        KeyCode::Down => app.picker.select_next(),
        KeyCode::Char(c) => app.picker.handle_filter_char(c),
        KeyCode::Backspace => app.picker.handle_filter_backspace(),
        _ => {}
    }
}

/// Editing keys for the text field. Returns false for keys that should fall
/// through to the key bindings (navigation, Ctrl shortcuts, Esc).
fn handle_text_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return false;
    }

    match code {
        KeyCode::Char(c) => app.handle_char(c),
        KeyCode::Backspace => app.handle_backspace(),
        KeyCode::Delete => app.handle_delete(),
        KeyCode::Left => app.input.cursor_left(),
        KeyCode::Right => app.input.cursor_right(),
        KeyCode::Home => app.input.cursor_home(),
        KeyCode::End => app.input.cursor_end(),
        KeyCode::Enter => app.submit(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Field, PickerKind};
    use crate::config::Config;
    use crate::form::{InputMode, TranslationForm};

    fn app() -> App {
        App::new(Config::default(), TranslationForm::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, code, KeyModifiers::NONE);
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_tab_moves_focus() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Field::Model);
        handle_key_event(&mut app, KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(app.focus, Field::Provider);
    }

    #[test]
    fn test_enter_opens_and_confirms_picker() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Picker(PickerKind::Provider));

        type_str(&mut app, "meta");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.form.state().selected_provider(), "Meta");
        assert_eq!(app.form.state().selected_model(), "Llama 3.1 70B");
    }

    #[test]
    fn test_picker_keys_do_not_trigger_bindings() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        // 'q' and 's' filter the list instead of quitting or swapping
        type_str(&mut app, "qs");
        assert!(!app.should_quit);
        assert_eq!(app.form.state().input_language(), "en");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_swap_and_mode_shortcuts() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.form.state().input_language(), "hi");

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.form.state().input_mode(), InputMode::Voice);
    }

    #[test]
    fn test_text_field_captures_letters() {
        let mut app = app();
        app.focus = Field::Text;
        type_str(&mut app, "qsm?");
        assert_eq!(app.form.state().input_text(), "qsm?");
        assert!(!app.should_quit);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_enter_in_text_field_submits() {
        let mut app = app();
        app.focus = Field::Text;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.dispatcher.sent(), 0);

        type_str(&mut app, "hello");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.dispatcher.sent(), 1);
    }

    #[test]
    fn test_ctrl_shortcuts_in_text_field() {
        let mut app = app();
        app.focus = Field::Text;
        type_str(&mut app, "hello");

        handle_key_event(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(app.dispatcher.sent(), 1);

        handle_key_event(&mut app, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(app.form.state().input_text(), "");
    }

    #[test]
    fn test_cursor_keys_edit_in_place() {
        let mut app = app();
        app.focus = Field::Text;
        type_str(&mut app, "ac");
        press(&mut app, KeyCode::Left);
        type_str(&mut app, "b");
        assert_eq!(app.form.state().input_text(), "abc");
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.form.state().input_text(), "bc");
    }

    #[test]
    fn test_help_dismissed_by_any_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, Mode::Help);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_q_quits_outside_text() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
