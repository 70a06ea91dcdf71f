use services::{StartAction, StartScreenView};

use crate::theme::Theme;

#[must_use]
pub fn render_start(view: &StartScreenView, theme: &Theme) -> String {
    let (headline, sub) = if view.has_progress {
        (
            "Bienvenue de retour !".to_owned(),
            format!(
                "Votre progression est sauvegardée ({}/{} questions).",
                view.used_questions, view.total_questions
            ),
        )
    } else {
        (
            "Prêt à commencer ?".to_owned(),
            format!(
                "Testez vos connaissances avec {} questions !",
                view.session_size
            ),
        )
    };
    let action = match view.primary_action() {
        StartAction::Begin => "start : commencer le quiz",
        StartAction::Continue => "start : continuer",
        StartAction::ViewResults => "resultats : voir mes résultats",
    };

    let mut out = format!("{}\n{}\n\n> {}\n", theme.title(&headline), sub, theme.accent(action));
    if view.has_progress {
        out.push_str(&format!("> {}\n", theme.muted("reset : réinitialiser tout")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(has_progress: bool, can_continue: bool) -> StartScreenView {
        StartScreenView {
            has_progress,
            can_continue,
            used_questions: if has_progress { 10 } else { 0 },
            total_questions: 20,
            session_size: 5,
        }
    }

    #[test]
    fn fresh_player_is_invited_to_begin() {
        let out = render_start(&view(false, true), &Theme::plain());
        assert!(out.contains("Prêt à commencer ?"));
        assert!(out.contains("avec 5 questions"));
        assert!(out.contains("commencer le quiz"));
        assert!(!out.contains("réinitialiser"));
    }

    #[test]
    fn returning_player_sees_saved_progress() {
        let out = render_start(&view(true, true), &Theme::plain());
        assert!(out.contains("Bienvenue de retour !"));
        assert!(out.contains("(10/20 questions)"));
        assert!(out.contains("continuer"));
        assert!(out.contains("réinitialiser tout"));

        let done = render_start(&view(true, false), &Theme::plain());
        assert!(done.contains("voir mes résultats"));
    }
}
