use alloc::string::String;
use jeopardy_protocol::ClueRecord;
use serde::{Deserialize, Serialize};

use crate::*;

/// Per-clue progress. Only ever moves forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    QuestionShown,
    AnswerShown,
}

impl RevealState {
    /// State after one activation. `AnswerShown` is terminal.
    pub const fn next(self) -> Self {
        use RevealState::*;
        match self {
            Hidden => QuestionShown,
            QuestionShown => AnswerShown,
            AnswerShown => AnswerShown,
        }
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            state: RevealState::Hidden,
        }
    }

    pub fn from_record(record: &ClueRecord) -> Self {
        Self::new(record.question.clone(), record.answer.clone())
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Advances the reveal state by one step.
    pub fn activate(&mut self) -> ActivateOutcome {
        use RevealState::*;

        let next = self.state.next();
        let outcome = match (self.state, next) {
            (Hidden, QuestionShown) => ActivateOutcome::QuestionShown,
            (QuestionShown, AnswerShown) => ActivateOutcome::AnswerShown,
            _ => ActivateOutcome::NoChange,
        };
        self.state = next;
        outcome
    }

    /// Normalized text for the current state, `None` while hidden.
    pub fn shown_text(&self) -> Option<String> {
        use RevealState::*;
        match self.state {
            Hidden => None,
            QuestionShown => Some(normalize_clue_text(&self.question)),
            AnswerShown => Some(normalize_clue_text(&self.answer)),
        }
    }
}
