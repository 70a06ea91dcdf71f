//! Presentation-agnostic snapshots of the quiz state.
//!
//! These are intentionally **not** UI view-models: no pre-formatted strings
//! and no localisation. The renderer decides how to show numbers and labels.

use quiz_core::model::{QuestionBank, SessionProgress, SessionResult};
use quiz_core::{QuizSettings, QuizState};

/// Lifetime statistics banner.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    pub total_score: u32,
    pub total_answered: u32,
    pub cumulative_percent: u32,
    pub sessions_played: u32,
    pub max_sessions: usize,
    pub used_questions: usize,
    pub total_questions: usize,
    pub completion_percent: f64,
}

impl StatsView {
    #[must_use]
    pub fn from_state(state: &QuizState, bank: &QuestionBank, settings: QuizSettings) -> Self {
        let progress = state.progress();
        Self {
            total_score: progress.total_score(),
            total_answered: progress.total_answered(),
            cumulative_percent: progress.cumulative_percentage(),
            sessions_played: progress.sessions_played(),
            max_sessions: bank.max_sessions(settings.session_size()),
            used_questions: progress.used().len(),
            total_questions: bank.len(),
            completion_percent: progress.completion_percent(bank.len()),
        }
    }

    /// The banner is only shown once a session has been played.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.sessions_played > 0
    }
}

/// What the start screen's primary action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartAction {
    Begin,
    Continue,
    ViewResults,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartScreenView {
    pub has_progress: bool,
    pub can_continue: bool,
    pub used_questions: usize,
    pub total_questions: usize,
    pub session_size: usize,
}

impl StartScreenView {
    #[must_use]
    pub fn from_state(state: &QuizState, bank: &QuestionBank, settings: QuizSettings) -> Self {
        Self {
            has_progress: state.progress().has_progress(),
            can_continue: !state.is_exhausted(bank),
            used_questions: state.progress().used().len(),
            total_questions: bank.len(),
            session_size: settings.session_size(),
        }
    }

    #[must_use]
    pub fn primary_action(&self) -> StartAction {
        match (self.has_progress, self.can_continue) {
            (false, _) => StartAction::Begin,
            (true, true) => StartAction::Continue,
            (true, false) => StartAction::ViewResults,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCardView {
    pub position: usize,
    pub text: String,
    pub selected: Option<bool>,
}

/// Question list of the active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub cards: Vec<QuestionCardView>,
    pub progress: SessionProgress,
    pub can_submit: bool,
}

impl SessionView {
    /// Returns `None` when there is no session to answer.
    #[must_use]
    pub fn from_state(state: &QuizState, bank: &QuestionBank) -> Option<Self> {
        let session = state.session().filter(|s| !s.is_completed())?;
        let cards = session
            .questions()
            .iter()
            .enumerate()
            .filter_map(|(position, index)| {
                bank.get(*index).map(|question| QuestionCardView {
                    position,
                    text: question.text().to_owned(),
                    selected: session.answer_at(position),
                })
            })
            .collect();
        Some(Self {
            cards,
            progress: session.progress(),
            can_submit: session.all_answered(),
        })
    }
}

/// One line of the correction list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionItem {
    pub text: String,
    pub user_answer: Option<bool>,
    pub correct_answer: bool,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub score: u32,
    pub answered: u32,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub last_result: Option<SessionResult>,
    pub sessions_played: u32,
    pub corrections: Vec<CorrectionItem>,
    pub history: Vec<SessionResult>,
    pub can_play_more: bool,
    /// Set once every question has been answered and results are on screen.
    pub final_score: Option<FinalScore>,
}

impl ResultsView {
    #[must_use]
    pub fn from_state(state: &QuizState, bank: &QuestionBank) -> Self {
        let progress = state.progress();
        let corrections = state
            .session()
            .filter(|s| s.is_completed())
            .map(|session| {
                session
                    .questions()
                    .iter()
                    .zip(session.answers())
                    .filter_map(|(index, answer)| {
                        bank.get(*index).map(|question| CorrectionItem {
                            text: question.text().to_owned(),
                            user_answer: *answer,
                            correct_answer: question.is_true(),
                            is_correct: answer.is_some_and(|value| question.is_correct(value)),
                            explanation: question.explanation().to_owned(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let exhausted = state.is_exhausted(bank);
        let final_score = (exhausted && state.is_showing_results()).then(|| FinalScore {
            score: progress.total_score(),
            answered: progress.total_answered(),
            percent: progress.cumulative_percentage(),
        });

        Self {
            last_result: progress.last_result().copied(),
            sessions_played: progress.sessions_played(),
            corrections,
            history: progress.history().to_vec(),
            can_play_more: !exhausted,
            final_score,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.final_score.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Question;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank() -> QuestionBank {
        QuestionBank::new(vec![
            Question::new("a", true, "ea").unwrap(),
            Question::new("b", false, "eb").unwrap(),
        ])
        .unwrap()
    }

    fn settings() -> QuizSettings {
        QuizSettings::new(2).unwrap()
    }

    #[test]
    fn start_screen_actions_follow_progress() {
        let bank = bank();
        let fresh = StartScreenView::from_state(&QuizState::new(), &bank, settings());
        assert_eq!(fresh.primary_action(), StartAction::Begin);

        let mut rng = StdRng::seed_from_u64(5);
        let state = QuizState::new()
            .start_session(&bank, settings(), &mut rng)
            .answer(0, true)
            .unwrap()
            .answer(1, true)
            .unwrap();
        let (state, _) = state.submit(&bank).unwrap();
        let done = StartScreenView::from_state(&state, &bank, settings());
        assert_eq!(done.primary_action(), StartAction::ViewResults);
    }

    #[test]
    fn session_view_tracks_answers_and_submit_gate() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(5);
        let state = QuizState::new().start_session(&bank, settings(), &mut rng);
        let view = SessionView::from_state(&state, &bank).unwrap();
        assert_eq!(view.cards.len(), 2);
        assert!(!view.can_submit);

        let state = state.answer(1, false).unwrap();
        let view = SessionView::from_state(&state, &bank).unwrap();
        assert_eq!(view.cards[1].selected, Some(false));
        assert_eq!(view.progress.answered, 1);

        let state = state.answer(0, false).unwrap();
        assert!(SessionView::from_state(&state, &bank).unwrap().can_submit);
        assert!(SessionView::from_state(&QuizState::new(), &bank).is_none());
    }

    #[test]
    fn results_list_corrections_and_final_score() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(5);
        let state = QuizState::new().start_session(&bank, settings(), &mut rng);
        let session = state.session().unwrap().clone();
        // Answer "true" everywhere: only the true statement is right.
        let state = state.answer(0, true).unwrap().answer(1, true).unwrap();
        let (state, result) = state.submit(&bank).unwrap();
        assert_eq!(result.correct, 1);

        let view = ResultsView::from_state(&state, &bank);
        assert_eq!(view.last_result, Some(result));
        assert_eq!(view.corrections.len(), 2);
        for (item, index) in view.corrections.iter().zip(session.questions()) {
            let question = bank.get(*index).unwrap();
            assert_eq!(item.text, question.text());
            assert_eq!(item.is_correct, question.is_true());
            assert_eq!(item.user_answer, Some(true));
        }
        assert!(!view.can_play_more);
        assert_eq!(
            view.final_score,
            Some(FinalScore {
                score: 1,
                answered: 2,
                percent: 50
            })
        );

        let stats = StatsView::from_state(&state, &bank, settings());
        assert!(stats.is_visible());
        assert_eq!(stats.max_sessions, 1);
        assert!((stats.completion_percent - 100.0).abs() < f64::EPSILON);
    }
}
