//! Text rendering of session snapshots and attempt history.

use std::fmt::Write as _;

use chrono::Local;
use quizroom_core::session::QuestionView;
use quizroom_core::summary::newest_first;
use quizroom_core::{AttemptRecord, SessionSnapshot};

pub fn question(snap: &SessionSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "⏳ Time Left: {}s", snap.remaining_seconds);
    let _ = writeln!(out, "{}. {}", snap.question_number, snap.prompt);
    match &snap.question {
        QuestionView::MultipleChoice { options } => {
            for (i, option) in options.iter().enumerate() {
                let _ = writeln!(out, "  [{}] {}{}", i + 1, option, option_mark(snap, i));
            }
            if !snap.is_answer_locked {
                let _ = write!(out, "Pick an option (1-{}): ", options.len());
            }
        }
        QuestionView::Integer => {
            if !snap.is_answer_locked {
                let _ = write!(out, "Enter your answer: ");
            }
        }
    }
    out
}

fn option_mark(snap: &SessionSnapshot, index: usize) -> &'static str {
    if !snap.is_answer_locked {
        return "";
    }
    if snap.correct_option == Some(index) {
        "  ✓"
    } else if snap.selected_option == Some(index) {
        "  ✗"
    } else {
        ""
    }
}

/// Shown right after an answer locks in.
pub fn feedback(snap: &SessionSnapshot) -> String {
    let mut out = String::new();
    if let QuestionView::MultipleChoice { .. } = snap.question {
        for line in question(snap).lines().skip(3) {
            let _ = writeln!(out, "{line}");
        }
    }
    let verdict = match snap.feedback {
        Some(true) => "✅ Correct!",
        _ => "❌ Wrong Answer",
    };
    let _ = write!(out, "{verdict}  (n = next)");
    out
}

pub fn result(score: u32, max_score: u32) -> String {
    format!(
        "\nYour Score: {score}\nTotal Score: {max_score}\n\nr = try again, c = clear history, q = quit"
    )
}

pub fn attempt_line(record: &AttemptRecord) -> String {
    format!(
        "{} - Score: {}/{}",
        record
            .completed_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S"),
        record.final_score,
        record.max_score
    )
}

pub fn attempts(records: &[AttemptRecord]) -> String {
    let mut out = String::from("📊 Past Quiz Attempts\n");
    if records.is_empty() {
        out.push_str("  (none yet)\n");
    }
    for record in newest_first(records) {
        let _ = writeln!(out, "  {}", attempt_line(&record));
    }
    out
}

pub fn help() -> &'static str {
    "commands: <number> pick option, <integer> answer, n next, r reset, c clear history, h help, q quit"
}
