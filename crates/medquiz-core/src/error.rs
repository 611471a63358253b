//! Quiz error types.
//!
//! Startup failures (`DataNotFound`, `DataFormat`) and lookup failures
//! (`NotFound`) are fatal for the caller. Everything raised by a session
//! action is recoverable and should be turned into user feedback.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// What a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Subject,
    Chapter,
    Question,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Subject => write!(f, "subject"),
            Lookup::Chapter => write!(f, "chapter"),
            Lookup::Question => write!(f, "question"),
        }
    }
}

/// Errors raised by the question bank and quiz sessions.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question bank file is missing, unreadable, or holds no subjects.
    #[error("no data found at {}", .path.display())]
    DataNotFound {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The document could not be parsed into subjects, chapters and questions.
    #[error("malformed question bank {origin}")]
    DataFormat {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A subject, chapter or question id does not exist in the bank.
    #[error("{kind} not found: {name}")]
    NotFound { kind: Lookup, name: String },

    /// The selected chapter has no questions, so no session can start.
    #[error("chapter '{0}' has no questions")]
    EmptyChapter(String),

    /// Submit was called before any option was selected.
    #[error("select an option before submitting")]
    NoSelection,

    /// Advance was called before the current answer was submitted.
    #[error("submit an answer before moving on")]
    NotSubmitted,

    /// The current question has already been answered.
    #[error("answer already submitted for this question")]
    AlreadySubmitted,

    /// The session is past its last question.
    #[error("quiz already finished")]
    AlreadyFinished,

    /// The selection does not name any option of the current question.
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

impl QuizError {
    pub(crate) fn not_found(kind: Lookup, name: impl Into<String>) -> Self {
        QuizError::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Returns `true` for errors a front-end should report and then carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            QuizError::EmptyChapter(_)
                | QuizError::NoSelection
                | QuizError::NotSubmitted
                | QuizError::AlreadySubmitted
                | QuizError::AlreadyFinished
                | QuizError::UnknownOption(_)
        )
    }
}
