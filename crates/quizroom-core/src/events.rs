use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Every session change produces one or more Events.
/// The display surface renders from them; nothing feeds them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    QuizStarted {
        question_count: usize,
        seconds_per_question: u32,
        at: DateTime<Utc>,
    },
    QuestionShown {
        question_index: usize,
        remaining_seconds: u32,
        at: DateTime<Utc>,
    },
    AnswerLocked {
        question_index: usize,
        correct: bool,
        at: DateTime<Utc>,
    },
    TimerTicked {
        question_index: usize,
        remaining_seconds: u32,
    },
    QuestionResolved {
        question_index: usize,
        correct: bool,
        timed_out: bool,
        total_score: u32,
        at: DateTime<Utc>,
    },
    QuizCompleted {
        final_score: u32,
        max_score: u32,
        at: DateTime<Utc>,
    },
    AttemptSaved {
        id: Uuid,
    },
    HistoryRefreshed {
        attempts: usize,
    },
    HistoryCleared {
        at: DateTime<Utc>,
    },
    /// Non-blocking notice: the history store failed, the session did not.
    HistoryUnavailable {
        message: String,
    },
}

impl Event {
    pub fn is_notice(&self) -> bool {
        matches!(self, Event::HistoryUnavailable { .. })
    }
}
