use thiserror::Error;

use crate::model::ids::QuestionIndex;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("answer position {position} is out of range for a session of {len} questions")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("session incomplete: {unanswered} question(s) still unanswered")]
    Incomplete { unanswered: usize },

    #[error("session already completed")]
    AlreadyCompleted,

    #[error("question {0} is not part of the question bank")]
    UnknownQuestion(QuestionIndex),
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// One round of questions drawn from the bank, with the answers given so far.
///
/// `answers` is index-aligned with `questions`; `None` marks a position the
/// player has not answered yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    questions: Vec<QuestionIndex>,
    answers: Vec<Option<bool>>,
    completed: bool,
}

impl Session {
    /// Start a session over the given questions with every answer unset.
    #[must_use]
    pub fn new(questions: Vec<QuestionIndex>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions,
            answers,
            completed: false,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionIndex] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<bool>] {
        &self.answers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Answer recorded at `position`, if any.
    #[must_use]
    pub fn answer_at(&self, position: usize) -> Option<bool> {
        self.answers.get(position).copied().flatten()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// True iff no position holds the unanswered sentinel.
    #[must_use]
    pub fn all_answered(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let answered = self.answered_count();
        SessionProgress {
            total: self.len(),
            answered,
            remaining: self.len().saturating_sub(answered),
            is_complete: self.completed,
        }
    }

    /// Return a copy of this session with `value` recorded at `position`.
    ///
    /// Every other position is left untouched. Changing an earlier answer is
    /// allowed until the session is submitted.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::PositionOutOfRange` for a position outside the session.
    /// Returns `SessionError::AlreadyCompleted` once the session has been submitted.
    pub fn with_answer(&self, position: usize, value: bool) -> Result<Self, SessionError> {
        if self.completed {
            return Err(SessionError::AlreadyCompleted);
        }
        if position >= self.answers.len() {
            return Err(SessionError::PositionOutOfRange {
                position,
                len: self.answers.len(),
            });
        }
        let mut answers = self.answers.clone();
        answers[position] = Some(value);
        Ok(Self {
            questions: self.questions.clone(),
            answers,
            completed: false,
        })
    }

    pub(crate) fn into_completed(self) -> Self {
        Self {
            completed: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_of(n: usize) -> Session {
        Session::new((0..n).map(QuestionIndex::new).collect())
    }

    #[test]
    fn new_session_has_aligned_unset_answers() {
        let session = session_of(5);
        assert_eq!(session.answers().len(), session.questions().len());
        assert!(session.answers().iter().all(Option::is_none));
        assert!(!session.all_answered());
        assert!(!session.is_completed());
    }

    #[test]
    fn answering_touches_only_one_position() {
        let before = session_of(4);
        let after = before.with_answer(2, false).unwrap();

        assert_eq!(after.answer_at(2), Some(false));
        for i in [0, 1, 3] {
            assert_eq!(after.answers()[i], before.answers()[i]);
        }
        assert_eq!(after.questions(), before.questions());
        // Input session untouched.
        assert_eq!(before.answer_at(2), None);
    }

    #[test]
    fn answers_can_be_changed_before_submit() {
        let session = session_of(1).with_answer(0, true).unwrap();
        let session = session.with_answer(0, false).unwrap();
        assert_eq!(session.answer_at(0), Some(false));
    }

    #[test]
    fn out_of_range_position_is_rejected() {
        let err = session_of(3).with_answer(3, true).unwrap_err();
        assert_eq!(err, SessionError::PositionOutOfRange { position: 3, len: 3 });
    }

    #[test]
    fn completed_session_rejects_answers() {
        let session = session_of(1).with_answer(0, true).unwrap().into_completed();
        assert_eq!(
            session.with_answer(0, false).unwrap_err(),
            SessionError::AlreadyCompleted
        );
    }

    #[test]
    fn progress_counts_answers() {
        let session = session_of(3).with_answer(1, true).unwrap();
        assert_eq!(
            session.progress(),
            SessionProgress {
                total: 3,
                answered: 1,
                remaining: 2,
                is_complete: false,
            }
        );
    }
}
