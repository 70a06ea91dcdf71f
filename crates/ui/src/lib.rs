//! Terminal renderer for the quiz.

pub mod app;
pub mod intent;
pub mod theme;
pub mod views;

pub use app::{Reply, TerminalApp};
pub use intent::{Intent, IntentError};
pub use theme::Theme;
