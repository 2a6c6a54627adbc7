use super::*;
use crate::config::{Action, Config};
use crate::form::TranslationForm;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

fn create_test_app() -> App {
    App::new(Config::default(), TranslationForm::default())
}

fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            result.push_str(buf[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}

fn draw(app: &App) -> Result<String, Box<dyn std::error::Error>> {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|frame| render(frame, app))?;
    Ok(buffer_to_string(terminal.backend().buffer()))
}

#[test]
fn test_render_initial_form() -> Result<(), Box<dyn std::error::Error>> {
    let content = draw(&create_test_app())?;

    assert!(content.contains("Provider"));
    assert!(content.contains("OpenAI"));
    assert!(content.contains("GPT-4"));
    assert!(content.contains("English (en)"));
    assert!(content.contains("Hindi (hi)"));
    assert!(content.contains("(•) Text"));
    assert!(content.contains("Type text to translate"));
    assert!(content.contains("nothing to translate"));
    assert!(content.contains("[Ctrl+s]translate"));
    Ok(())
}

#[test]
fn test_render_text_enables_submit() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.focus = Field::Text;
    for c in "namaste".chars() {
        app.handle_char(c);
    }

    let content = draw(&app)?;
    assert!(content.contains("namaste"));
    assert!(!content.contains("nothing to translate"));
    assert!(content.contains("Ctrl+u clear"));
    Ok(())
}

#[test]
fn test_render_voice_mode() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.handle_action(Action::ToggleMode);

    let content = draw(&app)?;
    assert!(content.contains("(•) Voice"));
    assert!(content.contains("Voice input selected"));
    assert!(!content.contains("nothing to translate"));
    Ok(())
}

#[test]
fn test_render_same_language_hint() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    assert!(!draw(&app)?.contains("same language"));

    app.form.set_output_language("en")?;
    assert!(draw(&app)?.contains("same language"));
    Ok(())
}

#[test]
fn test_render_provider_picker() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.handle_action(Action::Activate);
    assert_eq!(app.mode, Mode::Picker(crate::app::PickerKind::Provider));

    let content = draw(&app)?;
    assert!(content.contains("Current: OpenAI"));
    assert!(content.contains("Anthropic"));
    assert!(content.contains("Meta"));
    assert!(content.contains("Enter confirm"));
    Ok(())
}

#[test]
fn test_render_picker_no_matches() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.handle_action(Action::Activate);
    for c in "zzz".chars() {
        app.picker.handle_filter_char(c);
    }

    let content = draw(&app)?;
    assert!(content.contains("Filter: zzz_"));
    assert!(content.contains("No matches"));
    Ok(())
}

#[test]
fn test_render_help_overlay() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.handle_action(Action::Help);

    let content = draw(&app)?;
    assert!(content.contains("Help"));
    assert!(content.contains("Swap languages"));
    assert!(content.contains("Press any key to close"));
    Ok(())
}

#[test]
fn test_render_status_messages() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    app.set_error("Unknown model");
    assert!(draw(&app)?.contains("Error: Unknown model"));

    app.set_status("Request #1 sent");
    let content = draw(&app)?;
    assert!(content.contains("Request #1 sent"));
    assert!(!content.contains("Error:"));
    Ok(())
}

#[test]
fn test_render_small_terminal() -> Result<(), Box<dyn std::error::Error>> {
    let backend = TestBackend::new(20, 6);
    let mut terminal = Terminal::new(backend)?;
    let mut app = create_test_app();
    app.handle_action(Action::Help);

    terminal.draw(|frame| render(frame, &app))?;
    Ok(())
}
