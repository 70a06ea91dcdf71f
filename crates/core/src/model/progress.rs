use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::QuestionIndex;

/// Percentage at or above which a session counts as a success.
pub const PASSING_PERCENTAGE: u32 = 80;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("question {0} is recorded as used more than once")]
    DuplicateIndex(QuestionIndex),

    #[error("question {index} is outside a bank of {len} questions")]
    IndexOutOfRange { index: QuestionIndex, len: usize },
}

/// `round(100 * correct / total)`, ties away from zero.
///
/// Returns 0 when `total` is 0.
#[must_use]
pub fn percentage(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let correct = u64::from(correct);
    let total = u64::from(total);
    let rounded = (200 * correct + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

//
// ─── SESSION RESULT ───────────────────────────────────────────────────────────
//

/// Outcome of one submitted session, appended once to the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    pub session_number: u32,
    pub correct: u32,
    pub total: u32,
    pub percentage: u32,
}

impl SessionResult {
    #[must_use]
    pub fn new(session_number: u32, correct: u32, total: u32) -> Self {
        Self {
            session_number,
            correct,
            total,
            percentage: percentage(correct, total),
        }
    }

    #[must_use]
    pub fn is_passing(&self) -> bool {
        self.percentage >= PASSING_PERCENTAGE
    }
}

//
// ─── PROGRESS ─────────────────────────────────────────────────────────────────
//

/// Lifetime aggregate across all submitted sessions.
///
/// `used` never holds duplicates and only grows until a full reset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Progress {
    used: Vec<QuestionIndex>,
    total_score: u32,
    total_answered: u32,
    sessions_played: u32,
    history: Vec<SessionResult>,
}

impl Progress {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rehydrate progress from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::DuplicateIndex` if an index appears twice.
    /// Returns `ProgressError::IndexOutOfRange` if an index is not below `question_count`.
    pub fn from_persisted(
        used: Vec<QuestionIndex>,
        total_score: u32,
        total_answered: u32,
        sessions_played: u32,
        history: Vec<SessionResult>,
        question_count: usize,
    ) -> Result<Self, ProgressError> {
        let mut seen = HashSet::with_capacity(used.len());
        for index in &used {
            if index.value() >= question_count {
                return Err(ProgressError::IndexOutOfRange {
                    index: *index,
                    len: question_count,
                });
            }
            if !seen.insert(*index) {
                return Err(ProgressError::DuplicateIndex(*index));
            }
        }

        Ok(Self {
            used,
            total_score,
            total_answered,
            sessions_played,
            history,
        })
    }

    #[must_use]
    pub fn used(&self) -> &[QuestionIndex] {
        &self.used
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    #[must_use]
    pub fn total_answered(&self) -> u32 {
        self.total_answered
    }

    #[must_use]
    pub fn sessions_played(&self) -> u32 {
        self.sessions_played
    }

    #[must_use]
    pub fn history(&self) -> &[SessionResult] {
        &self.history
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&SessionResult> {
        self.history.last()
    }

    /// Whether anything worth resuming has been recorded.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        !self.used.is_empty() || self.sessions_played > 0
    }

    /// Indices in `[0, question_count)` not yet used, in bank order.
    #[must_use]
    pub fn available(&self, question_count: usize) -> Vec<QuestionIndex> {
        let used: HashSet<_> = self.used.iter().copied().collect();
        (0..question_count)
            .map(QuestionIndex::new)
            .filter(|index| !used.contains(index))
            .collect()
    }

    /// Rounded lifetime score percentage.
    #[must_use]
    pub fn cumulative_percentage(&self) -> u32 {
        percentage(self.total_score, self.total_answered)
    }

    /// Share of the bank already used, in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn completion_percent(&self, question_count: usize) -> f64 {
        if question_count == 0 {
            return 0.0;
        }
        (self.used.len() as f64 / question_count as f64) * 100.0
    }

    /// Fold a graded session into the aggregate, returning the new progress
    /// and the result that was appended.
    pub(crate) fn with_session(
        &self,
        questions: &[QuestionIndex],
        correct: u32,
        total: u32,
    ) -> (Self, SessionResult) {
        let result = SessionResult::new(self.sessions_played.saturating_add(1), correct, total);

        let mut used = self.used.clone();
        used.extend(questions.iter().filter(|q| !self.used.contains(q)));
        let mut history = self.history.clone();
        history.push(result);

        let next = Self {
            used,
            total_score: self.total_score.saturating_add(correct),
            total_answered: self.total_answered.saturating_add(total),
            sessions_played: result.session_number,
            history,
        };
        (next, result)
    }
}
