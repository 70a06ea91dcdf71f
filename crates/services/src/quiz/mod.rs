mod service;
mod view;

// Public API of the quiz subsystem.
pub use service::{QuizService, StartOutcome};
pub use view::{
    CorrectionItem, FinalScore, QuestionCardView, ResultsView, SessionView, StartAction,
    StartScreenView, StatsView,
};
