use services::SessionView;

use super::answer_label;
use crate::theme::Theme;

#[must_use]
pub fn render_questions(view: &SessionView, theme: &Theme) -> String {
    let total = view.cards.len();
    let mut out = String::new();
    for card in &view.cards {
        let title = format!("Question {} / {}", card.position + 1, total);
        let choice = |value: bool| {
            let label = answer_label(value);
            if card.selected == Some(value) {
                theme.accent(&format!("[x] {label}"))
            } else {
                format!("[ ] {label}")
            }
        };
        out.push_str(&format!(
            "{}\n{}\n  {}   {}\n\n",
            theme.title(&title),
            card.text,
            choice(true),
            choice(false),
        ));
    }

    let status = format!("{} / {} réponses", view.progress.answered, view.progress.total);
    if view.can_submit {
        out.push_str(&format!("{status}\n> {}\n", theme.success("valider : valider mes réponses")));
    } else {
        out.push_str(&format!(
            "{status}\n> {}\n",
            theme.muted("valider : disponible quand toutes les questions ont une réponse")
        ));
    }
    out
}
