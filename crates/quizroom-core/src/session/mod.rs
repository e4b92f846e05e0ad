mod controller;
pub mod machine;
mod snapshot;
mod state;

pub use controller::QuizController;
pub use machine::{FinalScore, Ignored, Outcome, QuizInput, Resolution, Transition};
pub use snapshot::{QuestionView, SessionSnapshot};
pub use state::SessionState;
