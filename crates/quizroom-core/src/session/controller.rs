//! Quiz session controller.
//!
//! Owns the session state and applies one input at a time through
//! [`machine::apply`]. The side effects of a transition are carried out here
//! and nowhere else: re-arming the countdown on every question boundary,
//! appending the attempt record on completion, and refreshing the attempt
//! list shown next to the result.
//!
//! ## Usage
//!
//! ```ignore
//! let mut quiz = QuizController::new(bank, 30, history, SystemClock, countdown);
//! quiz.start();
//! quiz.select_option(2);
//! quiz.advance();
//! // For every tick the countdown delivers:
//! quiz.on_timer_tick(token);
//! ```

use tracing::{debug, info, warn};

use super::machine::{self, Outcome, QuizInput, Resolution};
use super::snapshot::SessionSnapshot;
use super::state::SessionState;
use crate::events::Event;
use crate::history::{AttemptRecord, HistoryStore};
use crate::question::QuestionBank;
use crate::timer::{Clock, Countdown, TimerToken};

pub struct QuizController<H, C, T> {
    bank: QuestionBank,
    state: SessionState,
    history: H,
    clock: C,
    countdown: T,
    timer: Option<TimerToken>,
    attempts: Vec<AttemptRecord>,
    last_attempt: Option<AttemptRecord>,
}

impl<H, C, T> QuizController<H, C, T>
where
    H: HistoryStore,
    C: Clock,
    T: Countdown,
{
    /// Build an idle controller. Nothing is armed until [`Self::start`].
    pub fn new(
        bank: QuestionBank,
        seconds_per_question: u32,
        history: H,
        clock: C,
        countdown: T,
    ) -> Self {
        Self {
            bank,
            state: SessionState::new(seconds_per_question),
            history,
            clock,
            countdown,
            timer: None,
            attempts: Vec::new(),
            last_attempt: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Token of the live countdown registration.
    pub fn timer(&self) -> Option<TimerToken> {
        self.timer
    }

    /// Attempts as of the last history read.
    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    /// Record produced by the most recent completion, persisted or not.
    pub fn last_attempt(&self) -> Option<&AttemptRecord> {
        self.last_attempt.as_ref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::build(&self.state, &self.bank, self.last_attempt.as_ref())
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn countdown(&self) -> &T {
        &self.countdown
    }

    pub fn countdown_mut(&mut self) -> &mut T {
        &mut self.countdown
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Vec<Event> {
        self.dispatch(QuizInput::Reset)
    }

    pub fn reset(&mut self) -> Vec<Event> {
        self.dispatch(QuizInput::Reset)
    }

    pub fn select_option(&mut self, index: usize) -> Vec<Event> {
        self.dispatch(QuizInput::SelectOption { index })
    }

    pub fn submit_typed_answer(&mut self, text: &str) -> Vec<Event> {
        self.dispatch(QuizInput::SubmitAnswer {
            text: text.to_string(),
        })
    }

    pub fn advance(&mut self) -> Vec<Event> {
        self.dispatch(QuizInput::Advance)
    }

    pub fn on_timer_tick(&mut self, token: TimerToken) -> Vec<Event> {
        self.dispatch(QuizInput::Tick { token })
    }

    pub fn clear_history(&mut self) -> Vec<Event> {
        self.dispatch(QuizInput::ClearHistory)
    }

    /// Apply one input. Inputs that don't fit the current state return no
    /// events and leave everything untouched.
    pub fn dispatch(&mut self, input: QuizInput) -> Vec<Event> {
        let mut events = Vec::new();

        match &input {
            QuizInput::ClearHistory => {
                self.clear_history_into(&mut events);
                return events;
            }
            QuizInput::Tick { token } if self.timer != Some(*token) => {
                debug!(token = token.value(), "dropping stale tick");
                return events;
            }
            _ => {}
        }

        let transition = machine::apply(&self.state, &self.bank, &input);
        self.state = transition.state;

        match transition.outcome {
            Outcome::Ignored(reason) => {
                debug!(?reason, ?input, "input ignored");
            }
            Outcome::Reset => {
                self.last_attempt = None;
                self.rearm();
                events.push(Event::QuizStarted {
                    question_count: self.bank.len(),
                    seconds_per_question: self.state.seconds_per_question(),
                    at: self.clock.now(),
                });
                events.push(self.question_shown());
                self.refresh_history_into(&mut events);
            }
            Outcome::Locked {
                question_index,
                correct,
            } => {
                events.push(Event::AnswerLocked {
                    question_index,
                    correct,
                    at: self.clock.now(),
                });
            }
            Outcome::Ticked { remaining_seconds } => {
                events.push(Event::TimerTicked {
                    question_index: self.state.current_index(),
                    remaining_seconds,
                });
            }
            Outcome::Resolved(resolution) => self.on_resolved(resolution, &mut events),
        }

        events
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn on_resolved(&mut self, resolution: Resolution, events: &mut Vec<Event>) {
        // The boundary is crossed either way; the old registration must go
        // before anything else can deliver a tick.
        self.disarm();

        let now = self.clock.now();
        events.push(Event::QuestionResolved {
            question_index: resolution.question_index,
            correct: resolution.correct,
            timed_out: resolution.timed_out,
            total_score: self.state.total_score(),
            at: now,
        });

        let Some(done) = resolution.completed else {
            self.rearm();
            events.push(self.question_shown());
            return;
        };

        info!(
            final_score = done.final_score,
            max_score = done.max_score,
            "quiz completed"
        );
        events.push(Event::QuizCompleted {
            final_score: done.final_score,
            max_score: done.max_score,
            at: now,
        });

        let record = AttemptRecord::new(done.final_score, done.max_score, now);
        match self.history.append(&record) {
            Ok(()) => {
                info!(id = %record.id, "attempt saved");
                events.push(Event::AttemptSaved { id: record.id });
                self.refresh_history_into(events);
            }
            Err(e) => {
                warn!(error = %e, "could not save attempt");
                events.push(Event::HistoryUnavailable {
                    message: e.to_string(),
                });
            }
        }
        self.last_attempt = Some(record);
    }

    fn question_shown(&self) -> Event {
        Event::QuestionShown {
            question_index: self.state.current_index(),
            remaining_seconds: self.state.remaining_seconds(),
            at: self.clock.now(),
        }
    }

    fn disarm(&mut self) {
        if let Some(token) = self.timer.take() {
            self.countdown.disarm(token);
        }
    }

    fn rearm(&mut self) {
        self.disarm();
        self.timer = Some(self.countdown.arm());
    }

    fn refresh_history_into(&mut self, events: &mut Vec<Event>) {
        match self.history.list_all() {
            Ok(attempts) => {
                events.push(Event::HistoryRefreshed {
                    attempts: attempts.len(),
                });
                self.attempts = attempts;
            }
            Err(e) => {
                warn!(error = %e, "could not read history");
                events.push(Event::HistoryUnavailable {
                    message: e.to_string(),
                });
            }
        }
    }

    fn clear_history_into(&mut self, events: &mut Vec<Event>) {
        match self.history.clear_all() {
            Ok(()) => {
                info!("history cleared");
                events.push(Event::HistoryCleared {
                    at: self.clock.now(),
                });
                self.refresh_history_into(events);
            }
            Err(e) => {
                warn!(error = %e, "could not clear history");
                events.push(Event::HistoryUnavailable {
                    message: e.to_string(),
                });
            }
        }
    }
}
