mod ids;
mod progress;
mod question;
mod session;

pub use ids::QuestionIndex;
pub use progress::{PASSING_PERCENTAGE, Progress, ProgressError, SessionResult, percentage};
pub use question::{Question, QuestionBank, QuestionBankError, QuestionError};
pub use session::{Session, SessionError, SessionProgress};
