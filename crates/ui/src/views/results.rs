use quiz_core::QuizSettings;
use services::{CorrectionItem, ResultsView};

use super::answer_label;
use crate::theme::Theme;

fn render_correction(item: &CorrectionItem, theme: &Theme) -> String {
    let icon = if item.is_correct {
        theme.success("[OK]")
    } else {
        theme.danger("[X]")
    };
    let yours = item.user_answer.map_or("-", answer_label);
    format!(
        "{icon} {}\n     Ta réponse : {yours}  |  Bonne réponse : {}\n     {}\n",
        theme.title(&item.text),
        answer_label(item.correct_answer),
        theme.muted(&item.explanation),
    )
}

#[must_use]
pub fn render_results(view: &ResultsView, settings: QuizSettings, theme: &Theme) -> String {
    let mut out = String::new();

    let banner = match view.last_result {
        Some(last) => theme.verdict(
            &format!(
                "Partie {} : {} / {} ({}%)",
                view.sessions_played, last.correct, last.total, last.percentage
            ),
            last.is_passing(),
        ),
        None => theme.title("Résultats"),
    };
    out.push_str(&format!("{banner}\n\n"));

    if !view.corrections.is_empty() {
        out.push_str(&format!("{}\n", theme.title("Correction complète")));
        for item in &view.corrections {
            out.push_str(&render_correction(item, theme));
        }
        out.push('\n');
    }

    if !view.history.is_empty() {
        out.push_str(&format!("{}\n", theme.title("Historique des parties")));
        for game in &view.history {
            let score = format!("{}/{} ({}%)", game.correct, game.total, game.percentage);
            out.push_str(&format!(
                "  Partie {}  {}\n",
                game.session_number,
                theme.verdict(&score, game.is_passing())
            ));
        }
        out.push('\n');
    }

    if let Some(final_score) = view.final_score {
        out.push_str(&format!(
            "{}\nVous avez répondu aux {} questions !\nScore final : {} / {} ({}%)\n\n",
            theme.success("Félicitations !"),
            final_score.answered,
            final_score.score,
            final_score.answered,
            final_score.percent,
        ));
    }

    if view.can_play_more && !view.is_complete() {
        out.push_str(&format!(
            "> {}\n",
            theme.accent(&format!(
                "start : rejouer ({} nouvelles questions)",
                settings.session_size()
            ))
        ));
    }
    out.push_str(&format!("> {}\n", theme.muted("reset : réinitialiser tout")));
    out
}
