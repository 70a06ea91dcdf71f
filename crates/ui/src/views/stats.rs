use services::StatsView;

use super::progress_bar;
use crate::theme::Theme;

/// Lifetime banner; empty until the first session has been submitted.
#[must_use]
pub fn render_stats(view: &StatsView, theme: &Theme) -> String {
    if !view.is_visible() {
        return String::new();
    }
    let score = format!(
        "Score total cumulé : {} / {} ({}%)",
        view.total_score, view.total_answered, view.cumulative_percent
    );
    let game = format!("Partie {}/{}", view.sessions_played, view.max_sessions);
    format!(
        "{}    {}\n{} / {} questions répondues\n{}\n\n",
        theme.title(&score),
        theme.accent(&game),
        view.used_questions,
        view.total_questions,
        progress_bar(view.completion_percent),
    )
}
