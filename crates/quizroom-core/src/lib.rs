//! # Quizroom Core Library
//!
//! Core logic for a timed quiz: a fixed bank of multiple-choice and
//! integer-answer questions, a per-question countdown, exactly-once scoring
//! and a local history of finished attempts. The CLI is a thin terminal
//! surface over this crate.
//!
//! ## Architecture
//!
//! - **Session**: a pure transition function over [`SessionState`], driven by
//!   [`QuizController`], which owns the side effects
//! - **Timer**: [`Countdown`] registrations identified by [`TimerToken`], so
//!   a tick from a previous question can be told apart and dropped
//! - **History**: [`HistoryStore`] append log with SQLite and in-memory
//!   implementations
//! - **Storage**: TOML configuration and the data directory

pub mod error;
pub mod events;
pub mod history;
pub mod question;
pub mod session;
pub mod storage;
pub mod summary;
pub mod timer;

pub use error::{ConfigError, CoreError, HistoryError, ValidationError};
pub use events::Event;
pub use history::{AttemptRecord, HistoryStore, MemoryHistory, SqliteHistory};
pub use question::{Question, QuestionBank, QuestionKind};
pub use session::{QuizController, QuizInput, SessionSnapshot, SessionState};
pub use storage::Config;
pub use summary::HistorySummary;
pub use timer::{Clock, Countdown, FixedClock, ManualCountdown, SystemClock, TimerToken};
