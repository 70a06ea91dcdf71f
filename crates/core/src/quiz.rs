//! Pure session/progress transitions.
//!
//! Every function takes the current state by reference and returns the next
//! one; nothing here performs I/O or mutates its inputs.

use rand::Rng;
use thiserror::Error;

use crate::model::{Progress, QuestionBank, Session, SessionError, SessionResult};
use crate::shuffle;

//
// ─── SETTINGS ─────────────────────────────────────────────────────────────────
//

pub const DEFAULT_SESSION_SIZE: usize = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("session size must be at least 1")]
    ZeroSessionSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    session_size: usize,
}

impl QuizSettings {
    /// # Errors
    ///
    /// Returns `SettingsError::ZeroSessionSize` if `session_size` is 0.
    pub fn new(session_size: usize) -> Result<Self, SettingsError> {
        if session_size == 0 {
            return Err(SettingsError::ZeroSessionSize);
        }
        Ok(Self { session_size })
    }

    #[must_use]
    pub fn session_size(&self) -> usize {
        self.session_size
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            session_size: DEFAULT_SESSION_SIZE,
        }
    }
}

//
// ─── TRANSITIONS ──────────────────────────────────────────────────────────────
//

/// Result of drawing a new session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draw {
    Session(Session),
    /// Every question of the bank has been used since the last reset.
    Exhausted,
}

/// Draw `min(session_size, available)` unused questions into a fresh session.
pub fn start_session<R: Rng + ?Sized>(
    progress: &Progress,
    bank: &QuestionBank,
    settings: QuizSettings,
    rng: &mut R,
) -> Draw {
    let available = progress.available(bank.len());
    if available.is_empty() {
        return Draw::Exhausted;
    }
    let picked = shuffle::draw(available, settings.session_size(), rng);
    Draw::Session(Session::new(picked))
}

/// Record `value` at `position`, leaving every other answer untouched.
///
/// # Errors
///
/// See [`Session::with_answer`].
pub fn answer(session: &Session, position: usize, value: bool) -> Result<Session, SessionError> {
    session.with_answer(position, value)
}

#[must_use]
pub fn all_answered(session: &Session) -> bool {
    session.all_answered()
}

/// Grade a fully answered session and fold it into `progress`.
///
/// Returns the new progress, the completed session (kept for the correction
/// view) and the result appended to the history.
///
/// # Errors
///
/// Returns `SessionError::Incomplete` if any position is unanswered.
/// Returns `SessionError::AlreadyCompleted` if the session was already submitted.
/// Returns `SessionError::UnknownQuestion` if the session refers outside `bank`.
pub fn submit(
    progress: &Progress,
    session: &Session,
    bank: &QuestionBank,
) -> Result<(Progress, Session, SessionResult), SessionError> {
    if session.is_completed() {
        return Err(SessionError::AlreadyCompleted);
    }
    if !session.all_answered() {
        return Err(SessionError::Incomplete {
            unanswered: session.len() - session.answered_count(),
        });
    }

    let mut correct = 0_u32;
    for (index, answer) in session.questions().iter().zip(session.answers()) {
        let question = bank
            .get(*index)
            .ok_or(SessionError::UnknownQuestion(*index))?;
        if answer.is_some_and(|value| question.is_correct(value)) {
            correct += 1;
        }
    }
    let total = u32::try_from(session.len()).unwrap_or(u32::MAX);

    let (next, result) = progress.with_session(session.questions(), correct, total);
    Ok((next, session.clone().into_completed(), result))
}

//
// ─── STATE CONTAINER ──────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no active session")]
    NoActiveSession,
    #[error("a session is in progress; submit it first")]
    SessionInProgress,
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Observable phase, derived from the state rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InSession,
    ShowingResults,
}

/// Whole quiz state: lifetime progress plus the current or last session.
///
/// Transitions return a new `QuizState`; on error the caller keeps the one
/// it already has.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizState {
    progress: Progress,
    session: Option<Session>,
    show_results: bool,
}

impl QuizState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle state over restored progress.
    #[must_use]
    pub fn restored(progress: Progress) -> Self {
        Self {
            progress,
            session: None,
            show_results: false,
        }
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_showing_results(&self) -> bool {
        self.show_results
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.show_results {
            Phase::ShowingResults
        } else if self.session.is_some() {
            Phase::InSession
        } else {
            Phase::Idle
        }
    }

    /// Whether every question of `bank` has been used.
    #[must_use]
    pub fn is_exhausted(&self, bank: &QuestionBank) -> bool {
        self.progress.used().len() >= bank.len()
    }

    /// Start a new session, discarding any unfinished one.
    ///
    /// When the pool is exhausted the returned state has no session and shows
    /// the results/summary screen.
    #[must_use]
    pub fn start_session<R: Rng + ?Sized>(
        &self,
        bank: &QuestionBank,
        settings: QuizSettings,
        rng: &mut R,
    ) -> Self {
        match start_session(&self.progress, bank, settings, rng) {
            Draw::Session(session) => Self {
                progress: self.progress.clone(),
                session: Some(session),
                show_results: false,
            },
            Draw::Exhausted => Self {
                progress: self.progress.clone(),
                session: None,
                show_results: true,
            },
        }
    }

    /// # Errors
    ///
    /// Returns `QuizError::NoActiveSession` outside of a session, or the
    /// underlying `SessionError`.
    pub fn answer(&self, position: usize, value: bool) -> Result<Self, QuizError> {
        let session = self.active_session()?;
        let session = answer(session, position, value)?;
        Ok(Self {
            progress: self.progress.clone(),
            session: Some(session),
            show_results: false,
        })
    }

    /// # Errors
    ///
    /// Returns `QuizError::NoActiveSession` outside of a session, or the
    /// underlying `SessionError` (notably `SessionError::Incomplete`).
    pub fn submit(&self, bank: &QuestionBank) -> Result<(Self, SessionResult), QuizError> {
        let session = self.active_session()?;
        let (progress, session, result) = submit(&self.progress, session, bank)?;
        Ok((
            Self {
                progress,
                session: Some(session),
                show_results: true,
            },
            result,
        ))
    }

    /// Switch to the results screen without starting a session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::SessionInProgress` while an unsubmitted session is
    /// active; its answers are kept.
    pub fn show_results(&self) -> Result<Self, QuizError> {
        if self.session.as_ref().is_some_and(|s| !s.is_completed()) {
            return Err(QuizError::SessionInProgress);
        }
        Ok(Self {
            progress: self.progress.clone(),
            session: self.session.clone(),
            show_results: true,
        })
    }

    /// Discard everything: empty progress, no session.
    #[must_use]
    pub fn reset() -> Self {
        Self::new()
    }

    fn active_session(&self) -> Result<&Session, QuizError> {
        match &self.session {
            Some(session) if !self.show_results => Ok(session),
            _ => Err(QuizError::NoActiveSession),
        }
    }
}

/// Brand-new empty state. Deleting the persisted snapshot is the caller's job.
#[must_use]
pub fn reset_all() -> QuizState {
    QuizState::reset()
}
