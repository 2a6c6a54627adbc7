//! Integration tests for TUI rendering
//!
//! Uses ratatui's `TestBackend` to drive the screen with key events and
//! check what ends up in the buffer.

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use tarjuman::app::{Field, Mode};
use tarjuman::catalog::{Language, ProviderEntry};
use tarjuman::tui::{handle_key_event, render};
use tarjuman::{App, Config, InputMode, TranslationForm};

fn create_test_app() -> App {
    App::new(Config::default(), TranslationForm::default())
}

fn press(app: &mut App, code: KeyCode) {
    handle_key_event(app, code, KeyModifiers::NONE);
}

fn draw(app: &App) -> Result<String, Box<dyn std::error::Error>> {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|frame| render(frame, app))?;
    Ok(buffer_to_string(terminal.backend().buffer()))
}

// =============================================================================
// Full keyboard flows
// =============================================================================

#[test]
fn test_pick_provider_then_type_and_submit() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();

    // Provider picker: filter down to Anthropic
    press(&mut app, KeyCode::Enter);
    for c in "anth".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.form.state().selected_model(), "Sonnet 4");

    let content = draw(&app)?;
    assert!(content.contains("Anthropic"));
    assert!(content.contains("Sonnet 4"));
    assert!(content.contains("nothing to translate"));

    // Jump to the text field and type
    while app.focus != Field::Text {
        press(&mut app, KeyCode::Tab);
    }
    for c in "Hello world".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    assert!(app.form.can_submit());
    assert!(!draw(&app)?.contains("nothing to translate"));

    press(&mut app, KeyCode::Enter);
    let content = draw(&app)?;
    assert!(content.contains("Request #1 sent: Anthropic/Sonnet 4 en->hi (11 chars)"));
    Ok(())
}

#[test]
fn test_model_picker_lists_only_current_provider() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Field::Model);
    press(&mut app, KeyCode::Enter);

    let content = draw(&app)?;
    assert!(content.contains("GPT-3.5 Turbo"));
    assert!(!content.contains("Sonnet 4"));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.form.state().selected_model(), "GPT-3.5 Turbo");
    Ok(())
}

#[test]
fn test_swap_updates_language_rows() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('s'));

    let content = draw(&app)?;
    let from_row = content
        .lines()
        .find(|line| line.contains("From"))
        .ok_or("missing From row")?;
    let to_row = content
        .lines()
        .find(|line| line.contains("To "))
        .ok_or("missing To row")?;
    assert!(from_row.contains("Hindi (hi)"));
    assert!(to_row.contains("English (en)"));
    Ok(())
}

#[test]
fn test_voice_mode_skips_text_and_enables_submit() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.form.state().input_mode(), InputMode::Voice);

    let content = draw(&app)?;
    assert!(content.contains("Voice input selected"));
    assert!(!content.contains("nothing to translate"));

    for _ in 0..Field::ALL.len() {
        assert_ne!(app.focus, Field::Text);
        press(&mut app, KeyCode::Tab);
    }
    Ok(())
}

#[test]
fn test_help_overlay_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.mode, Mode::Help);
    assert!(draw(&app)?.contains("Toggle text/voice"));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, Mode::Normal);
    assert!(!app.should_quit);
    assert!(!draw(&app)?.contains("Toggle text/voice"));
    Ok(())
}

#[test]
fn test_custom_catalog_renders() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config {
        providers: vec![ProviderEntry::new("Local", &["tiny"])],
        languages: vec![Language::new("en", "English"), Language::new("fr", "French")],
        default_output_language: "fr".to_string(),
        ..Config::default()
    };
    let form = TranslationForm::new(config.catalog()?);
    let app = App::new(config, form);

    let content = draw(&app)?;
    assert!(content.contains("Local"));
    assert!(content.contains("tiny"));
    assert!(content.contains("French (fr)"));
    Ok(())
}

// =============================================================================
// Helper functions
// =============================================================================

fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            let cell = &buf[(x, y)];
            result.push_str(cell.symbol());
        }
        result.push('\n');
    }
    result
}
