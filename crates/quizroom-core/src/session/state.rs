use serde::{Deserialize, Serialize};

use crate::timer::DEFAULT_SECONDS_PER_QUESTION;

/// Mutable state of one quiz run.
///
/// Fields are only written by [`super::machine::apply`]; everything else
/// sees them through the read accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub(super) current_index: usize,
    pub(super) selected_option: Option<usize>,
    pub(super) typed_answer: Option<String>,
    pub(super) remaining_seconds: u32,
    pub(super) is_answer_locked: bool,
    pub(super) is_scored: bool,
    pub(super) total_score: u32,
    pub(super) is_complete: bool,
    pub(super) seconds_per_question: u32,
}

impl SessionState {
    /// Fresh state at question 0. A zero budget is bumped to one second.
    pub fn new(seconds_per_question: u32) -> Self {
        let seconds_per_question = seconds_per_question.max(1);
        Self {
            current_index: 0,
            selected_option: None,
            typed_answer: None,
            remaining_seconds: seconds_per_question,
            is_answer_locked: false,
            is_scored: false,
            total_score: 0,
            is_complete: false,
            seconds_per_question,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn typed_answer(&self) -> Option<&str> {
        self.typed_answer.as_deref()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_answer_locked(&self) -> bool {
        self.is_answer_locked
    }

    pub fn is_scored(&self) -> bool {
        self.is_scored
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn seconds_per_question(&self) -> u32 {
        self.seconds_per_question
    }

    /// Clear per-question fields when moving to `index`.
    pub(super) fn enter_question(&mut self, index: usize) {
        self.current_index = index;
        self.selected_option = None;
        self.typed_answer = None;
        self.remaining_seconds = self.seconds_per_question;
        self.is_answer_locked = false;
        self.is_scored = false;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_SECONDS_PER_QUESTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_has_full_countdown_and_no_flags() {
        let state = SessionState::default();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.remaining_seconds(), 30);
        assert!(!state.is_answer_locked());
        assert!(!state.is_scored());
        assert!(!state.is_complete());
        assert_eq!(state.total_score(), 0);
    }

    #[test]
    fn zero_budget_is_clamped() {
        let state = SessionState::new(0);
        assert_eq!(state.seconds_per_question(), 1);
        assert_eq!(state.remaining_seconds(), 1);
    }
}
