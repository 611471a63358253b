//! Quiz session state machine.
//!
//! A session walks one list of questions in order:
//!
//! ```text
//! AwaitingAnswer --submit--> AnswerSubmitted --advance--> AwaitingAnswer
//!                                            --advance (last)--> Finished
//! ```
//!
//! Every transition goes through a named operation. The score can only grow,
//! and only on the `AwaitingAnswer -> AnswerSubmitted` edge, which each
//! question crosses once.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::answer::{display_key, key_from_selection, keys_match, normalize_key};
use crate::error::QuizError;
use crate::model::{Chapter, Question};

/// Where a session is in its question-by-question flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The current question is open for selection and submission.
    AwaitingAnswer,
    /// The answer is locked in and the explanation is visible.
    AnswerSubmitted,
    /// The last question has been answered and advanced past.
    Finished,
}

/// Outcome of submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub correct: bool,
    /// The option key the user submitted, as written in the bank.
    pub selected_option: String,
    /// The correct key, trimmed and upper-cased for display.
    pub correct_option: String,
    /// Running score after this submission.
    pub score: u32,
}

/// Final tally of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub title: String,
    pub score: u32,
    pub total: usize,
    pub elapsed: Duration,
}

impl QuizSummary {
    /// Fraction of questions answered correctly.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.score as f64 / self.total as f64
        }
    }
}

/// Outcome of advancing past an answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceResult {
    /// Moved on to the question at `index`.
    Next { index: usize, total: usize },
    /// There were no more questions.
    Finished(QuizSummary),
}

/// In-memory progress through one chapter (or any ordered question list).
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: Uuid,
    title: String,
    questions: Vec<Question>,
    current: usize,
    score: u32,
    state: SessionState,
    selected: Option<String>,
    last_result: Option<SubmitResult>,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a session over a chapter's questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyChapter` if the chapter has no questions.
    pub fn start(chapter: &Chapter) -> Result<Self, QuizError> {
        Self::from_questions(chapter.topic.clone(), chapter.questions.clone())
    }

    /// Start a session over an arbitrary ordered list of questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyChapter` if `questions` is empty.
    pub fn from_questions(
        title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        let title = title.into();
        if questions.is_empty() {
            return Err(QuizError::EmptyChapter(title));
        }

        let session = Self {
            id: Uuid::new_v4(),
            title,
            questions,
            current: 0,
            score: 0,
            state: SessionState::AwaitingAnswer,
            selected: None,
            last_result: None,
            started_at: Utc::now(),
            finished_at: None,
        };
        tracing::debug!(
            session = %session.id,
            title = %session.title,
            total = session.questions.len(),
            "quiz session started"
        );
        Ok(session)
    }

    /// Discard all progress and begin again from the first question.
    ///
    /// Allowed in every state, including `Finished`.
    pub fn restart(&mut self) {
        self.id = Uuid::new_v4();
        self.current = 0;
        self.score = 0;
        self.state = SessionState::AwaitingAnswer;
        self.selected = None;
        self.last_result = None;
        self.started_at = Utc::now();
        self.finished_at = None;
        tracing::debug!(session = %self.id, title = %self.title, "quiz session restarted");
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    pub fn answer_submitted(&self) -> bool {
        self.state == SessionState::AnswerSubmitted
    }

    /// The explanation becomes visible together with the submission feedback.
    pub fn show_explanation(&self) -> bool {
        self.answer_submitted()
    }

    /// 0-based index of the current question; `None` once finished.
    pub fn current_index(&self) -> Option<usize> {
        (!self.is_finished()).then_some(self.current)
    }

    /// The current question; `None` once finished.
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().map(|i| &self.questions[i])
    }

    /// The option key chosen for the current question, if any.
    pub fn selected_option(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Feedback for the current question once it has been submitted.
    pub fn last_result(&self) -> Option<&SubmitResult> {
        self.last_result.as_ref()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Record a tentative choice for the current question.
    ///
    /// `selection` may be a bare key (`"b"`, `" B "`) or a display label
    /// (`"b) Penicillin G"`). Choosing again replaces the earlier choice.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadySubmitted` or `QuizError::AlreadyFinished`
    /// outside `AwaitingAnswer`, and `QuizError::UnknownOption` if the key
    /// names none of the current question's options.
    pub fn select_option(&mut self, selection: &str) -> Result<(), QuizError> {
        self.ensure_awaiting()?;

        let wanted = key_from_selection(selection);
        let question = &self.questions[self.current];
        let key = question
            .options
            .keys()
            .find(|k| normalize_key(k) == wanted)
            .ok_or_else(|| QuizError::UnknownOption(selection.trim().to_string()))?;

        self.selected = Some(key.clone());
        Ok(())
    }

    /// Lock in the selected option and score it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoSelection` if nothing was selected, and
    /// `QuizError::AlreadySubmitted` / `QuizError::AlreadyFinished` outside
    /// `AwaitingAnswer`. The session is unchanged on error.
    pub fn submit(&mut self) -> Result<SubmitResult, QuizError> {
        self.ensure_awaiting()?;
        let selected = self.selected.clone().ok_or(QuizError::NoSelection)?;

        let question = &self.questions[self.current];
        let correct = keys_match(&selected, &question.correct_option);
        if correct {
            self.score += 1;
        }

        let result = SubmitResult {
            correct,
            selected_option: selected,
            correct_option: display_key(&question.correct_option),
            score: self.score,
        };
        self.state = SessionState::AnswerSubmitted;
        self.last_result = Some(result.clone());

        tracing::debug!(
            session = %self.id,
            index = self.current,
            correct,
            score = self.score,
            "answer submitted"
        );
        Ok(result)
    }

    /// Move past the answered question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotSubmitted` if the current answer has not been
    /// submitted and `QuizError::AlreadyFinished` once the session is over.
    pub fn advance(&mut self) -> Result<AdvanceResult, QuizError> {
        match self.state {
            SessionState::AwaitingAnswer => return Err(QuizError::NotSubmitted),
            SessionState::Finished => return Err(QuizError::AlreadyFinished),
            SessionState::AnswerSubmitted => {}
        }

        self.selected = None;
        self.last_result = None;

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.state = SessionState::AwaitingAnswer;
            tracing::debug!(session = %self.id, index = self.current, "advanced to next question");
            return Ok(AdvanceResult::Next {
                index: self.current,
                total: self.questions.len(),
            });
        }

        self.state = SessionState::Finished;
        self.finished_at = Some(Utc::now());
        let summary = self.summary().ok_or(QuizError::AlreadyFinished)?;
        tracing::info!(
            session = %self.id,
            title = %self.title,
            score = summary.score,
            total = summary.total,
            "quiz finished"
        );
        Ok(AdvanceResult::Finished(summary))
    }

    /// Final tally; `None` until the session is finished.
    pub fn summary(&self) -> Option<QuizSummary> {
        let finished_at = self.finished_at.filter(|_| self.is_finished())?;
        Some(QuizSummary {
            title: self.title.clone(),
            score: self.score,
            total: self.questions.len(),
            elapsed: finished_at - self.started_at,
        })
    }

    fn ensure_awaiting(&self) -> Result<(), QuizError> {
        match self.state {
            SessionState::AwaitingAnswer => Ok(()),
            SessionState::AnswerSubmitted => Err(QuizError::AlreadySubmitted),
            SessionState::Finished => Err(QuizError::AlreadyFinished),
        }
    }
}
