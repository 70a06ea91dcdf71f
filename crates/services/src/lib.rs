#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use error::QuizServiceError;
pub use quiz::{
    CorrectionItem, FinalScore, QuestionCardView, QuizService, ResultsView, SessionView,
    StartAction, StartOutcome, StartScreenView, StatsView,
};
