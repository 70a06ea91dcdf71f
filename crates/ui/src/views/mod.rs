//! Text rendering of the service views.
//!
//! Every function returns a `String` so screens can be asserted on directly.

mod questions;
mod results;
mod start;
mod stats;

pub use questions::render_questions;
pub use results::render_results;
pub use start::render_start;
pub use stats::render_stats;

use quiz_core::Phase;
use services::QuizService;

use crate::theme::Theme;

const PROGRESS_BAR_WIDTH: usize = 20;

pub(crate) fn answer_label(value: bool) -> &'static str {
    if value { "Vrai" } else { "Faux" }
}

/// `[#####...............]` for a 0..=100 percentage.
pub(crate) fn progress_bar(percent: f64) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((clamped / 100.0) * PROGRESS_BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        ".".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

/// Full screen for the current phase: stats banner, then the phase content.
#[must_use]
pub fn render_screen(service: &QuizService, theme: &Theme) -> String {
    let mut out = render_stats(&service.stats_view(), theme);
    let body = match service.phase() {
        Phase::Idle => render_start(&service.start_screen_view(), theme),
        Phase::InSession => match service.session_view() {
            Some(view) => render_questions(&view, theme),
            None => render_start(&service.start_screen_view(), theme),
        },
        Phase::ShowingResults => render_results(&service.results_view(), service.settings(), theme),
    };
    out.push_str(&body);
    out
}

#[must_use]
pub fn render_help() -> String {
    [
        "Commandes :",
        "  start, s          commencer ou continuer le quiz",
        "  <n> v | <n> f     répondre Vrai ou Faux à la question n",
        "  valider           valider mes réponses",
        "  resultats         voir mes résultats",
        "  reset             réinitialiser toute la progression",
        "  aide              afficher cette aide",
        "  quitter           quitter",
        "",
    ]
    .join("\n")
}
