//! Profile Quiz data structures.

use crate::games::timer::Timer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl QuizQuestion {
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.answer
    }
}

/// Transient message shown under the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizFeedback {
    /// Right answer; the next question follows after a short delay.
    Correct,
    /// Wrong answer; the message clears after a short delay.
    Retry,
    /// The final question was answered. Terminal until reset.
    Complete,
}

impl QuizFeedback {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Correct => "Correct!",
            Self::Retry => "Try again",
            Self::Complete => "All done!",
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Correct | Self::Complete)
    }
}

/// Prompt shown when the bank has no current question.
pub const QUIZ_EMPTY_PROMPT: &str = "Thanks for playing!";

#[derive(Debug, Clone)]
pub struct QuizGame {
    pub questions: Vec<QuizQuestion>,
    /// Current question. Never past the last index.
    pub index: usize,
    pub score: u32,
    pub feedback: Option<QuizFeedback>,
    /// Keyboard selection among the current options.
    pub cursor: usize,
    pub(crate) feedback_timer: Timer,
}

impl QuizGame {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            index: 0,
            score: 0,
            feedback: None,
            cursor: 0,
            feedback_timer: Timer::disarmed(),
        }
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.index)
    }

    pub fn prompt(&self) -> &str {
        self.current()
            .map(|q| q.question.as_str())
            .unwrap_or(QUIZ_EMPTY_PROMPT)
    }

    pub fn options(&self) -> &[String] {
        self.current().map(|q| q.options.as_slice()).unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.feedback == Some(QuizFeedback::Complete)
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }
}
