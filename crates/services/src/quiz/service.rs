use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use quiz_core::model::{Progress, QuestionBank, Session, SessionResult};
use quiz_core::{Phase, QuizSettings, QuizState};
use storage::ProgressStore;

use super::view::{ResultsView, SessionView, StartScreenView, StatsView};
use crate::error::QuizServiceError;

/// What happened when the player asked for a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started { questions: usize },
    /// No unused question is left; the summary is shown instead.
    Exhausted,
}

/// Single owner of the quiz state.
///
/// The renderer dispatches intents through this service and redraws from the
/// views it exposes. Each intent replaces the whole state; persistence is
/// best-effort and never fails an intent.
pub struct QuizService {
    state: QuizState,
    bank: Arc<QuestionBank>,
    settings: QuizSettings,
    store: ProgressStore,
    rng: StdRng,
}

impl QuizService {
    /// Service over empty progress.
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, settings: QuizSettings, store: ProgressStore) -> Self {
        Self {
            state: QuizState::new(),
            bank,
            settings,
            store,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Service resuming whatever valid progress the store holds.
    ///
    /// Absent, unreadable or corrupt snapshots start a fresh quiz.
    pub async fn restore(
        bank: Arc<QuestionBank>,
        settings: QuizSettings,
        store: ProgressStore,
    ) -> Self {
        let mut service = Self::new(bank, settings, store);
        if let Some(progress) = service.store.load(service.bank.len()).await {
            info!(
                sessions = progress.sessions_played(),
                used = progress.used().len(),
                "resuming saved progress"
            );
            service.state = QuizState::restored(progress);
        }
        service
    }

    /// Use a deterministic draw order.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        self.state.progress()
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.state.session()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    /// Draw a new session, or switch to the summary when nothing is left.
    pub fn start_session(&mut self) -> StartOutcome {
        let next = self
            .state
            .start_session(&self.bank, self.settings, &mut self.rng);
        let outcome = match next.session() {
            Some(session) => StartOutcome::Started {
                questions: session.len(),
            },
            None => StartOutcome::Exhausted,
        };
        debug!(?outcome, "start session");
        self.state = next;
        outcome
    }

    /// Record an answer for the question at `position` (0-based).
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if no session is active or the
    /// position is out of range; the state is left unchanged.
    pub fn answer(&mut self, position: usize, value: bool) -> Result<(), QuizServiceError> {
        self.state = self.state.answer(position, value)?;
        Ok(())
    }

    /// Grade the active session, fold it into progress and persist.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the session is incomplete or there
    /// is nothing to submit; progress is left unchanged.
    pub async fn submit(&mut self) -> Result<SessionResult, QuizServiceError> {
        let (next, result) = self.state.submit(&self.bank)?;
        info!(
            session = result.session_number,
            correct = result.correct,
            total = result.total,
            percentage = result.percentage,
            "session submitted"
        );
        self.state = next;
        self.store.save(self.state.progress()).await;
        Ok(result)
    }

    /// Show the results/summary screen without starting a session.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` while an unsubmitted session is
    /// active; the session and its answers are kept.
    pub fn show_results(&mut self) -> Result<(), QuizServiceError> {
        self.state = self.state.show_results()?;
        Ok(())
    }

    /// Forget all progress and delete the saved snapshot.
    pub async fn reset_all(&mut self) {
        self.state = quiz_core::quiz::reset_all();
        self.store.clear().await;
        info!("progress reset");
    }

    #[must_use]
    pub fn stats_view(&self) -> StatsView {
        StatsView::from_state(&self.state, &self.bank, self.settings)
    }

    #[must_use]
    pub fn start_screen_view(&self) -> StartScreenView {
        StartScreenView::from_state(&self.state, &self.bank, self.settings)
    }

    #[must_use]
    pub fn session_view(&self) -> Option<SessionView> {
        SessionView::from_state(&self.state, &self.bank)
    }

    #[must_use]
    pub fn results_view(&self) -> ResultsView {
        ResultsView::from_state(&self.state, &self.bank)
    }
}

impl std::fmt::Debug for QuizService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizService")
            .field("phase", &self.state.phase())
            .field("sessions_played", &self.state.progress().sessions_played())
            .field("questions", &self.bank.len())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::QuizError;
    use quiz_core::model::SessionError;
    use storage::InMemoryRepository;

    fn service() -> QuizService {
        QuizService::new(
            Arc::new(QuestionBank::fablab()),
            QuizSettings::default(),
            ProgressStore::new(Arc::new(InMemoryRepository::new())),
        )
        .with_seed(17)
    }

    #[test]
    fn phases_follow_intents() {
        let mut svc = service();
        assert_eq!(svc.phase(), Phase::Idle);

        assert_eq!(svc.start_session(), StartOutcome::Started { questions: 5 });
        assert_eq!(svc.phase(), Phase::InSession);

        svc.answer(0, true).unwrap();
        assert_eq!(svc.session().unwrap().answer_at(0), Some(true));

        assert!(matches!(
            svc.show_results(),
            Err(QuizServiceError::Quiz(QuizError::SessionInProgress))
        ));
        assert_eq!(svc.phase(), Phase::InSession);
        assert_eq!(svc.session().unwrap().answer_at(0), Some(true));
    }

    #[test]
    fn bad_answer_leaves_state_untouched() {
        let mut svc = service();
        svc.start_session();
        let before = svc.state().clone();

        let err = svc.answer(9, true).unwrap_err();
        assert!(matches!(
            err,
            QuizServiceError::Quiz(QuizError::Session(SessionError::PositionOutOfRange { .. }))
        ));
        assert_eq!(svc.state(), &before);
    }

    #[tokio::test]
    async fn premature_submit_is_refused() {
        let mut svc = service();
        svc.start_session();
        let err = svc.submit().await.unwrap_err();
        assert!(matches!(
            err,
            QuizServiceError::Quiz(QuizError::Session(SessionError::Incomplete { unanswered: 5 }))
        ));
        assert_eq!(svc.progress(), &Progress::empty());
    }
}
