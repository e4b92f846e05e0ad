use serde::{Deserialize, Serialize};

use super::state::SessionState;
use crate::history::AttemptRecord;
use crate::question::{QuestionBank, QuestionKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionView {
    MultipleChoice { options: Vec<String> },
    Integer,
}

/// Render-ready view of the session after a transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// 1-based for display.
    pub question_number: usize,
    pub question_count: usize,
    pub prompt: String,
    pub question: QuestionView,
    pub selected_option: Option<usize>,
    pub typed_answer: Option<String>,
    pub remaining_seconds: u32,
    pub is_answer_locked: bool,
    /// Correctness of the locked answer; `None` until locked.
    pub feedback: Option<bool>,
    /// Revealed once an answer is locked, for highlighting.
    pub correct_option: Option<usize>,
    pub total_score: u32,
    pub is_complete: bool,
    pub last_attempt: Option<AttemptRecord>,
}

impl SessionSnapshot {
    pub fn build(
        state: &SessionState,
        bank: &QuestionBank,
        last_attempt: Option<&AttemptRecord>,
    ) -> Self {
        let question = bank.get(state.current_index());
        let locked = state.is_answer_locked();
        let feedback = match question {
            Some(q) if locked => Some(q.is_correct(state.selected_option(), state.typed_answer())),
            _ => None,
        };
        let view = match question.map(|q| &q.kind) {
            Some(QuestionKind::MultipleChoice { options, .. }) => QuestionView::MultipleChoice {
                options: options.clone(),
            },
            _ => QuestionView::Integer,
        };

        Self {
            question_number: state.current_index() + 1,
            question_count: bank.len(),
            prompt: question.map(|q| q.prompt.clone()).unwrap_or_default(),
            question: view,
            selected_option: state.selected_option(),
            typed_answer: state.typed_answer().map(str::to_string),
            remaining_seconds: state.remaining_seconds(),
            is_answer_locked: locked,
            feedback,
            correct_option: if locked {
                question.and_then(|q| q.correct_option())
            } else {
                None
            },
            total_score: state.total_score(),
            is_complete: state.is_complete(),
            last_attempt: if state.is_complete() {
                last_attempt.cloned()
            } else {
                None
            },
        }
    }
}
