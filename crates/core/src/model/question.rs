use thiserror::Error;

use crate::model::ids::QuestionIndex;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("question bank must contain at least one question")]
    Empty,
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single true/false statement with the explanation shown after answering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    is_true: bool,
    explanation: String,
}

impl Question {
    /// Build a question record.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if `text` is blank.
    pub fn new(
        text: impl Into<String>,
        is_true: bool,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        Ok(Self {
            text,
            is_true,
            explanation: explanation.into(),
        })
    }

    /// Record from compiled-in data, checked by the bank tests.
    pub(crate) fn from_static(text: &str, is_true: bool, explanation: &str) -> Self {
        Self {
            text: text.to_owned(),
            is_true,
            explanation: explanation.to_owned(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The correct answer for this statement.
    #[must_use]
    pub fn is_true(&self) -> bool {
        self.is_true
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Whether `answer` matches the correct answer.
    #[must_use]
    pub fn is_correct(&self, answer: bool) -> bool {
        self.is_true == answer
    }
}

//
// ─── QUESTION BANK ────────────────────────────────────────────────────────────
//

/// Fixed, ordered collection of questions.
///
/// A bank never changes after construction; sessions and progress refer to
/// its entries by `QuestionIndex`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from an ordered list of questions.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }
        Ok(Self { questions })
    }

    /// Bank built from compiled-in data that is known to be non-empty.
    pub(crate) fn from_trusted(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Total number of questions (`T`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: QuestionIndex) -> Option<&Question> {
        self.questions.get(index.value())
    }

    /// Whether `index` lies in `[0, T)`.
    #[must_use]
    pub fn contains(&self, index: QuestionIndex) -> bool {
        index.value() < self.questions.len()
    }

    /// Every index of the bank in order.
    pub fn indices(&self) -> impl Iterator<Item = QuestionIndex> + use<> {
        (0..self.questions.len()).map(QuestionIndex::new)
    }

    /// Number of sessions needed to go through the whole bank.
    ///
    /// Returns 0 for a zero `session_size`.
    #[must_use]
    pub fn max_sessions(&self, session_size: usize) -> usize {
        if session_size == 0 {
            return 0;
        }
        self.questions.len().div_ceil(session_size)
    }
}
