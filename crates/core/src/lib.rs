#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod model;
pub mod quiz;
pub mod shuffle;
pub mod time;

pub use error::Error;
pub use quiz::{Draw, Phase, QuizError, QuizSettings, QuizState, SettingsError};
pub use time::Clock;
