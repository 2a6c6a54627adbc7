//! Tarjuman - Translation request form for the terminal
//!
//! Tarjuman lets you pick a provider and model, choose source and target
//! languages, type text (or switch to voice), and hand a validated
//! translation request to a dispatcher.

pub mod app;
pub mod catalog;
pub mod config;
pub mod form;
pub mod paths;
pub mod tui;

pub use app::App;
pub use catalog::Catalog;
pub use config::Config;
pub use form::{InputMode, Submission, TranslationForm};
