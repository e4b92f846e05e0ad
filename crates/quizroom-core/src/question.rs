//! Question records and the read-only question bank.
//!
//! A bank is validated once on construction and never mutated afterwards.
//! Banks can be loaded from JSON or TOML files shaped like:
//!
//! ```toml
//! [[questions]]
//! kind = "multiple_choice"
//! prompt = "Which keyword declares a constant in Java?"
//! options = ["const", "static", "final", "immutable"]
//! answer = 2
//!
//! [[questions]]
//! kind = "integer"
//! prompt = "How many bits are in a Java int?"
//! answer = 32
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice {
        options: Vec<String>,
        /// Index into `options`.
        answer: usize,
    },
    Integer {
        answer: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    pub fn multiple_choice<S: Into<String>>(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        answer: usize,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            kind: QuestionKind::MultipleChoice {
                options: options.into_iter().map(Into::into).collect(),
                answer,
            },
        }
    }

    pub fn integer(prompt: impl Into<String>, answer: i64) -> Self {
        Self {
            prompt: prompt.into(),
            kind: QuestionKind::Integer { answer },
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::MultipleChoice { .. })
    }

    /// Options for multiple-choice questions, empty otherwise.
    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. } => options,
            QuestionKind::Integer { .. } => &[],
        }
    }

    /// Index of the correct option (multiple-choice only).
    pub fn correct_option(&self) -> Option<usize> {
        match self.kind {
            QuestionKind::MultipleChoice { answer, .. } => Some(answer),
            QuestionKind::Integer { .. } => None,
        }
    }

    /// Evaluate a response against this question.
    ///
    /// A missing selection, a missing typed answer, or typed text that does
    /// not parse as an integer are all incorrect.
    pub fn is_correct(&self, selected: Option<usize>, typed: Option<&str>) -> bool {
        match &self.kind {
            QuestionKind::MultipleChoice { answer, .. } => selected == Some(*answer),
            QuestionKind::Integer { answer } => typed
                .and_then(|t| t.trim().parse::<i64>().ok())
                .is_some_and(|v| v == *answer),
        }
    }

    fn validate(&self, position: usize) -> Result<(), ValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::BlankPrompt { question: position });
        }
        if let QuestionKind::MultipleChoice { options, answer } = &self.kind {
            if options.len() < 2 {
                return Err(ValidationError::TooFewOptions {
                    question: position,
                    len: options.len(),
                });
            }
            if *answer >= options.len() {
                return Err(ValidationError::AnswerOutOfBounds {
                    question: position,
                    index: *answer,
                    len: options.len(),
                });
            }
        }
        Ok(())
    }
}

/// Ordered, non-empty, immutable sequence of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

#[derive(Deserialize)]
struct BankFile {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank, rejecting empty input and malformed questions.
    /// Positions in errors are 1-based.
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::EmptyBank);
        }
        for (i, q) in questions.iter().enumerate() {
            q.validate(i + 1)?;
        }
        Ok(Self { questions })
    }

    /// Load a bank from a `.json` or `.toml` file.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let file: BankFile = match ext.as_str() {
            "json" => serde_json::from_str(&content)?,
            "toml" => toml::from_str(&content)?,
            other => return Err(ValidationError::UnsupportedFormat(other.to_string()).into()),
        };
        Ok(Self::new(file.questions)?)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// The built-in Java quiz.
    pub fn java_basics() -> Self {
        Self {
            questions: vec![
                Question::multiple_choice(
                    "Which keyword is used to inherit a class in Java?",
                    ["implements", "inherits", "extends", "super"],
                    2,
                ),
                Question::multiple_choice(
                    "Which of these is not a primitive type in Java?",
                    ["int", "String", "boolean", "char"],
                    1,
                ),
                Question::integer("How many bits are in a Java int?", 32),
                Question::multiple_choice(
                    "Which method is the entry point of a Java application?",
                    ["main", "start", "run", "init"],
                    0,
                ),
                Question::integer("What does 7 / 2 evaluate to in Java integer arithmetic?", 3),
                Question::multiple_choice(
                    "Which collection does not allow duplicate elements?",
                    ["List", "ArrayList", "Set", "Vector"],
                    2,
                ),
                Question::integer("What is the default value of an int field?", 0),
            ],
        }
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::java_basics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bank_is_valid() {
        let bank = QuestionBank::default();
        let rebuilt = QuestionBank::new(bank.iter().cloned().collect()).unwrap();
        assert_eq!(rebuilt.len(), 7);
        assert_eq!(rebuilt.last_index(), 6);
    }

    #[test]
    fn empty_bank_rejected() {
        assert_eq!(QuestionBank::new(vec![]), Err(ValidationError::EmptyBank));
    }

    #[test]
    fn out_of_range_answer_rejected() {
        let err = QuestionBank::new(vec![Question::multiple_choice("Q", ["a", "b"], 2)])
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::AnswerOutOfBounds {
                question: 1,
                index: 2,
                len: 2
            }
        );
    }

    #[test]
    fn blank_prompt_rejected() {
        let err = QuestionBank::new(vec![
            Question::integer("ok", 1),
            Question::integer("   ", 1),
        ])
        .unwrap_err();
        assert_eq!(err, ValidationError::BlankPrompt { question: 2 });
    }

    #[test]
    fn integer_answers_parse_trimmed_text() {
        let q = Question::integer("answer?", 42);
        assert!(q.is_correct(None, Some("42")));
        assert!(q.is_correct(None, Some("  42 ")));
        assert!(!q.is_correct(None, Some("41")));
        assert!(!q.is_correct(None, Some("forty-two")));
        assert!(!q.is_correct(None, Some("42.0")));
        assert!(!q.is_correct(None, Some("")));
        assert!(!q.is_correct(None, None));
    }

    #[test]
    fn multiple_choice_needs_exact_index() {
        let q = Question::multiple_choice("pick", ["a", "b", "c"], 1);
        assert!(q.is_correct(Some(1), None));
        assert!(!q.is_correct(Some(0), None));
        assert!(!q.is_correct(None, None));
        assert!(!q.is_correct(None, Some("1")));
    }

    #[test]
    fn loads_json_and_toml_banks() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("bank.json");
        std::fs::write(
            &json_path,
            r#"{"questions": [
                {"kind": "multiple_choice", "prompt": "p1", "options": ["a", "b"], "answer": 1},
                {"kind": "integer", "prompt": "p2", "answer": -7}
            ]}"#,
        )
        .unwrap();
        let bank = QuestionBank::load(&json_path).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get(1), Some(&Question::integer("p2", -7)));

        let toml_path = dir.path().join("bank.toml");
        std::fs::write(
            &toml_path,
            r#"
[[questions]]
kind = "multiple_choice"
prompt = "p1"
options = ["a", "b", "c"]
answer = 2
"#,
        )
        .unwrap();
        let bank = QuestionBank::load(&toml_path).unwrap();
        assert_eq!(bank.get(0).and_then(Question::correct_option), Some(2));
    }

    #[test]
    fn unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.yaml");
        std::fs::write(&path, "questions: []").unwrap();
        assert!(matches!(
            QuestionBank::load(&path),
            Err(CoreError::Validation(ValidationError::UnsupportedFormat(_)))
        ));
    }
}
