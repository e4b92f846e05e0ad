//! Session transition function.
//!
//! `apply` is pure: it takes the current state and one input and returns the
//! next state plus a description of what happened. It never touches the
//! countdown or the history store; the controller acts on the [`Outcome`].
//!
//! ```text
//!            select / submit              advance | tick->0
//! Answering ----------------> Locked ------------------------+
//!     |                                                       |
//!     +----------------- tick->0 (forced, incorrect) ---------+
//!                                                             v
//!                                   next question  <-- Resolved --> Complete
//! ```

use serde::{Deserialize, Serialize};

use super::state::SessionState;
use crate::question::QuestionBank;
use crate::timer::TimerToken;

/// One input from the display surface or the tick source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuizInput {
    SelectOption { index: usize },
    SubmitAnswer { text: String },
    Advance,
    Tick { token: TimerToken },
    Reset,
    ClearHistory,
}

/// Why an input left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ignored {
    Complete,
    AlreadyLocked,
    NotLocked,
    WrongKind,
    BlankAnswer,
    OptionOutOfRange,
    NotASessionInput,
}

/// Result of resolving the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub question_index: usize,
    pub correct: bool,
    /// False when the question had already been tallied before this step.
    pub scored_now: bool,
    pub timed_out: bool,
    /// Set when this resolution finished the quiz.
    pub completed: Option<FinalScore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub final_score: u32,
    pub max_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ignored(Ignored),
    Locked { question_index: usize, correct: bool },
    Ticked { remaining_seconds: u32 },
    Resolved(Resolution),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub outcome: Outcome,
}

impl Transition {
    fn unchanged(state: &SessionState, why: Ignored) -> Self {
        Self {
            state: state.clone(),
            outcome: Outcome::Ignored(why),
        }
    }
}

/// Compute the next state for `input`.
pub fn apply(state: &SessionState, bank: &QuestionBank, input: &QuizInput) -> Transition {
    if let QuizInput::Reset = input {
        return Transition {
            state: SessionState::new(state.seconds_per_question),
            outcome: Outcome::Reset,
        };
    }
    if let QuizInput::ClearHistory = input {
        return Transition::unchanged(state, Ignored::NotASessionInput);
    }
    if state.is_complete {
        return Transition::unchanged(state, Ignored::Complete);
    }
    let Some(question) = bank.get(state.current_index) else {
        return Transition::unchanged(state, Ignored::Complete);
    };

    match input {
        QuizInput::SelectOption { index } => {
            if state.is_answer_locked {
                return Transition::unchanged(state, Ignored::AlreadyLocked);
            }
            if !question.is_multiple_choice() {
                return Transition::unchanged(state, Ignored::WrongKind);
            }
            if *index >= question.options().len() {
                return Transition::unchanged(state, Ignored::OptionOutOfRange);
            }
            let mut next = state.clone();
            next.selected_option = Some(*index);
            next.is_answer_locked = true;
            Transition {
                outcome: Outcome::Locked {
                    question_index: next.current_index,
                    correct: question.is_correct(next.selected_option, None),
                },
                state: next,
            }
        }
        QuizInput::SubmitAnswer { text } => {
            if state.is_answer_locked {
                return Transition::unchanged(state, Ignored::AlreadyLocked);
            }
            if question.is_multiple_choice() {
                return Transition::unchanged(state, Ignored::WrongKind);
            }
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Transition::unchanged(state, Ignored::BlankAnswer);
            }
            let mut next = state.clone();
            next.typed_answer = Some(trimmed.to_string());
            next.is_answer_locked = true;
            Transition {
                outcome: Outcome::Locked {
                    question_index: next.current_index,
                    correct: question.is_correct(None, next.typed_answer.as_deref()),
                },
                state: next,
            }
        }
        QuizInput::Advance => {
            if !state.is_answer_locked {
                return Transition::unchanged(state, Ignored::NotLocked);
            }
            resolve(state, bank, false)
        }
        QuizInput::Tick { .. } => {
            let mut next = state.clone();
            next.remaining_seconds = next.remaining_seconds.saturating_sub(1);
            if next.remaining_seconds > 0 {
                return Transition {
                    outcome: Outcome::Ticked {
                        remaining_seconds: next.remaining_seconds,
                    },
                    state: next,
                };
            }
            resolve(&next, bank, true)
        }
        QuizInput::Reset | QuizInput::ClearHistory => {
            Transition::unchanged(state, Ignored::NotASessionInput)
        }
    }
}

/// Score the current question at most once, then move on or finish.
fn resolve(state: &SessionState, bank: &QuestionBank, timed_out: bool) -> Transition {
    let mut next = state.clone();
    let index = next.current_index;
    let correct = bank
        .get(index)
        .is_some_and(|q| q.is_correct(next.selected_option, next.typed_answer.as_deref()));

    // A timeout without input is a forced, empty lock-in.
    next.is_answer_locked = true;

    let scored_now = !next.is_scored;
    if scored_now {
        if correct {
            next.total_score += 1;
        }
        next.is_scored = true;
    }

    let completed = if index >= bank.last_index() {
        next.is_complete = true;
        next.remaining_seconds = 0;
        Some(FinalScore {
            final_score: next.total_score,
            max_score: bank.len() as u32,
        })
    } else {
        next.enter_question(index + 1);
        None
    };

    Transition {
        state: next,
        outcome: Outcome::Resolved(Resolution {
            question_index: index,
            correct,
            scored_now,
            timed_out,
            completed,
        }),
    }
}
