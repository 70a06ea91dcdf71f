use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a question inside the question bank.
///
/// Indices are stable for the lifetime of a bank, so they are what the
/// progress snapshot records as "used".
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct QuestionIndex(usize);

impl QuestionIndex {
    /// Creates a new `QuestionIndex`
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying position
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for QuestionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionIndex({})", self.0)
    }
}

impl fmt::Display for QuestionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for QuestionIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_raw_position() {
        assert_eq!(QuestionIndex::new(7).to_string(), "7");
        assert_eq!(QuestionIndex::from(7), QuestionIndex::new(7));
    }

    #[test]
    fn ordering_follows_bank_position() {
        let mut ids = vec![QuestionIndex::new(3), QuestionIndex::new(1), QuestionIndex::new(2)];
        ids.sort();
        assert_eq!(
            ids,
            vec![QuestionIndex::new(1), QuestionIndex::new(2), QuestionIndex::new(3)]
        );
    }
}
