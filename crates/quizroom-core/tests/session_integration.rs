//! End-to-end session tests against the SQLite history store.

use chrono::Utc;
use quizroom_core::{
    Clock, Event, FixedClock, HistoryStore, ManualCountdown, Question, QuestionBank,
    QuizController, SqliteHistory,
};

fn scenario_bank() -> QuestionBank {
    QuestionBank::new(vec![
        Question::multiple_choice("Q1", ["a", "b", "c", "d"], 2),
        Question::integer("Q2", 42),
        Question::multiple_choice("Q3", ["x", "y", "z"], 0),
    ])
    .unwrap()
}

#[test]
fn three_question_scenario_persists_two_of_three() {
    let dir = tempfile::tempdir().unwrap();
    let history = SqliteHistory::open(&dir.path().join("history.db")).unwrap();
    let clock = FixedClock::new(Utc::now());
    let mut quiz = QuizController::new(
        scenario_bank(),
        30,
        history,
        &clock,
        ManualCountdown::new(),
    );
    quiz.start();

    // Q1: correct choice.
    quiz.select_option(2);
    quiz.advance();
    // Q2: correct integer.
    quiz.submit_typed_answer("42");
    quiz.advance();
    // Q3: let the countdown run out without answering.
    let mut last = Vec::new();
    for _ in 0..30 {
        let token = quiz.timer().unwrap();
        last = quiz.on_timer_tick(token);
    }

    assert!(quiz.state().is_complete());
    assert_eq!(quiz.state().total_score(), 2);
    assert!(last
        .iter()
        .any(|e| matches!(e, Event::QuestionResolved { question_index: 2, correct: false, timed_out: true, .. })));

    let stored = quiz.history().list_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!((stored[0].final_score, stored[0].max_score), (2, 3));
    assert_eq!(stored[0].completed_at, clock.now());
}

#[test]
fn history_survives_reopen_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.db");

    {
        let clock = FixedClock::new(Utc::now());
        let mut quiz = QuizController::new(
            scenario_bank(),
            1,
            SqliteHistory::open(&path).unwrap(),
            &clock,
            ManualCountdown::new(),
        );
        for _ in 0..2 {
            quiz.start();
            for _ in 0..3 {
                let token = quiz.timer().unwrap();
                quiz.on_timer_tick(token);
            }
            assert!(quiz.state().is_complete());
        }
        assert_eq!(quiz.attempts().len(), 2);
    }

    let mut reopened = SqliteHistory::open(&path).unwrap();
    let records = reopened.list_all().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.final_score == 0 && r.max_score == 3));

    reopened.clear_all().unwrap();
    assert!(reopened.list_all().unwrap().is_empty());
}

#[test]
fn redundant_ui_events_do_not_double_count() {
    let clock = FixedClock::new(Utc::now());
    let mut quiz = QuizController::new(
        scenario_bank(),
        30,
        SqliteHistory::open_memory().unwrap(),
        &clock,
        ManualCountdown::new(),
    );
    quiz.start();

    quiz.select_option(2);
    quiz.select_option(2);
    quiz.select_option(0);
    quiz.advance();
    quiz.advance();
    quiz.submit_typed_answer("  ");
    quiz.submit_typed_answer("42");
    quiz.submit_typed_answer("41");
    quiz.advance();
    quiz.select_option(0);
    quiz.advance();
    quiz.advance();
    quiz.select_option(1);

    assert!(quiz.state().is_complete());
    assert_eq!(quiz.state().total_score(), 3);
    assert_eq!(quiz.history().list_all().unwrap().len(), 1);
}
