//! Interactive play loop.
//!
//! Stdin lines and countdown ticks are merged into a single queue; each item
//! becomes exactly one controller input, so transitions never interleave.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use quizroom_core::session::QuestionView;
use quizroom_core::{
    Config, Event, HistoryStore, MemoryHistory, QuestionBank, QuizController, QuizInput,
    SessionSnapshot, SqliteHistory, SystemClock, TimerToken,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::countdown::TokioCountdown;
use crate::render;

#[derive(Args)]
pub struct PlayArgs {
    /// Question bank file (.json or .toml); overrides the configured bank
    #[arg(long)]
    bank: Option<PathBuf>,
    /// Seconds per question; overrides the configured value
    #[arg(long)]
    seconds: Option<u32>,
    /// Emit events and snapshots as JSON lines
    #[arg(long)]
    json: bool,
}

/// One line of user input, interpreted against the current question.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Input(QuizInput),
    History,
    Help,
    Quit,
}

fn parse_command(line: &str, snap: &SessionSnapshot) -> Option<Command> {
    let trimmed = line.trim();
    let command = match trimmed.to_ascii_lowercase().as_str() {
        "" => return None,
        "n" | "next" => Command::Input(QuizInput::Advance),
        "r" | "reset" | "again" => Command::Input(QuizInput::Reset),
        "c" | "clear" => Command::Input(QuizInput::ClearHistory),
        "history" => Command::History,
        "h" | "?" | "help" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => match &snap.question {
            QuestionView::MultipleChoice { .. } => {
                let number: usize = trimmed.parse().ok()?;
                Command::Input(QuizInput::SelectOption {
                    index: number.checked_sub(1)?,
                })
            }
            QuestionView::Integer => Command::Input(QuizInput::SubmitAnswer {
                text: trimmed.to_string(),
            }),
        },
    };
    Some(command)
}

enum Step {
    Tick(TimerToken),
    Line(Option<String>),
}

pub fn run(args: PlayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let bank = match &args.bank {
        Some(path) => QuestionBank::load(path)?,
        None => config.question_bank()?,
    };
    let seconds = args
        .seconds
        .unwrap_or(config.quiz.seconds_per_question)
        .max(1);

    let history: Box<dyn HistoryStore> = if config.history.enabled {
        match SqliteHistory::open_default() {
            Ok(store) => Box::new(store),
            Err(e) => {
                // Play anyway; every history call will surface as a notice.
                warn!(error = %e, "history store unavailable");
                Box::new(MemoryHistory::unavailable(e.to_string()))
            }
        }
    } else {
        Box::new(MemoryHistory::new())
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(play(bank, seconds, history, args.json))
}

async fn play(
    bank: QuestionBank,
    seconds: u32,
    history: Box<dyn HistoryStore>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut quiz = QuizController::new(bank, seconds, history, SystemClock, TokioCountdown::new());
    let mut out = Output { json };

    let events = quiz.start();
    if !json {
        println!("{}", render::help());
    }
    out.show(&quiz, &events)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let step = tokio::select! {
            token = quiz.countdown_mut().tick() => Step::Tick(token),
            line = lines.next_line() => Step::Line(line?),
        };

        let input = match step {
            Step::Tick(token) => QuizInput::Tick { token },
            Step::Line(None) => break,
            Step::Line(Some(line)) => match parse_command(&line, &quiz.snapshot()) {
                Some(Command::Input(input)) => input,
                Some(Command::History) => {
                    out.attempts(&quiz)?;
                    continue;
                }
                Some(Command::Help) => {
                    out.message(render::help())?;
                    continue;
                }
                Some(Command::Quit) => break,
                None => continue,
            },
        };

        let events = quiz.dispatch(input);
        out.show(&quiz, &events)?;
    }
    Ok(())
}

struct Output {
    json: bool,
}

type Quiz = QuizController<Box<dyn HistoryStore>, SystemClock, TokioCountdown>;

impl Output {
    fn show(&mut self, quiz: &Quiz, events: &[Event]) -> Result<(), Box<dyn std::error::Error>> {
        if events.is_empty() {
            return Ok(());
        }
        if self.json {
            let mut stdout = std::io::stdout().lock();
            for event in events {
                writeln!(stdout, "{}", serde_json::to_string(event)?)?;
            }
            let snapshot = serde_json::json!({ "type": "snapshot", "snapshot": quiz.snapshot() });
            writeln!(stdout, "{snapshot}")?;
            return Ok(());
        }

        let snap = quiz.snapshot();
        let mut show_attempts = false;
        for event in events {
            match event {
                Event::QuestionShown { .. } => print!("{}", render::question(&snap)),
                Event::AnswerLocked { .. } => println!("{}", render::feedback(&snap)),
                Event::TimerTicked {
                    remaining_seconds, ..
                } if *remaining_seconds % 10 == 0 || *remaining_seconds <= 5 => {
                    println!("⏳ {remaining_seconds}s left");
                }
                Event::QuestionResolved {
                    timed_out: true, ..
                } => println!("\n⌛ Time's up!"),
                Event::QuizCompleted {
                    final_score,
                    max_score,
                    ..
                } => {
                    println!("{}", render::result(*final_score, *max_score));
                    show_attempts = true;
                }
                Event::HistoryCleared { .. } => {
                    println!("History cleared.");
                    show_attempts = true;
                }
                Event::HistoryUnavailable { message } => {
                    println!("⚠ history unavailable: {message}");
                }
                _ => {}
            }
        }
        if show_attempts {
            print!("{}", render::attempts(quiz.attempts()));
        }
        std::io::stdout().flush()?;
        Ok(())
    }

    fn attempts(&mut self, quiz: &Quiz) -> Result<(), Box<dyn std::error::Error>> {
        if self.json {
            println!("{}", serde_json::to_string(quiz.attempts())?);
        } else {
            print!("{}", render::attempts(quiz.attempts()));
        }
        Ok(())
    }

    fn message(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        if !self.json {
            println!("{text}");
        }
        Ok(())
    }
}
