//! Subject and chapter selection.
//!
//! The controller owns the session for the current selection. Any change of
//! subject or chapter, including re-selecting the current one, throws the
//! session away and starts a fresh one.

use std::sync::Arc;

use crate::error::{Lookup, QuizError};
use crate::model::{Chapter, QuestionBank};
use crate::session::QuizSession;

/// Drives quiz sessions over a shared, read-only question bank.
#[derive(Debug)]
pub struct QuizController {
    bank: Arc<QuestionBank>,
    subject: Option<String>,
    chapter: Option<String>,
    session: Option<QuizSession>,
}

impl QuizController {
    /// Create a controller with the first subject and its first chapter selected.
    ///
    /// An empty first chapter leaves the controller without a session.
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        let mut controller = Self {
            bank,
            subject: None,
            chapter: None,
            session: None,
        };
        let first = controller.bank.list_subjects().first().map(|s| s.to_string());
        if let Some(subject) = first {
            if let Err(e) = controller.select_subject(&subject) {
                tracing::warn!("initial selection has no quiz: {e}");
            }
        }
        controller
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn chapter(&self) -> Option<&str> {
        self.chapter.as_deref()
    }

    /// The running session, if the selected chapter has questions.
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut QuizSession> {
        self.session.as_mut()
    }

    /// Select a subject and its first chapter.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotFound` for an unknown subject (selection is left
    /// unchanged) and `QuizError::EmptyChapter` when the first chapter has no
    /// questions (selection is applied, no session runs).
    pub fn select_subject(&mut self, subject: &str) -> Result<(), QuizError> {
        let first_topic = self
            .bank
            .list_chapters(subject)?
            .first()
            .map(|c| c.topic.clone());

        self.subject = Some(subject.to_string());
        self.chapter = None;
        self.session = None;

        match first_topic {
            Some(topic) => self.select_chapter(&topic),
            None => {
                tracing::debug!(subject, "subject has no chapters");
                Ok(())
            }
        }
    }

    /// Select a chapter of the current subject and start a fresh session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotFound` if no subject is selected or the topic is
    /// unknown (selection is left unchanged), and `QuizError::EmptyChapter`
    /// when the chapter has no questions (selection is applied, no session).
    pub fn select_chapter(&mut self, topic: &str) -> Result<(), QuizError> {
        let subject = self
            .subject
            .clone()
            .ok_or_else(|| QuizError::not_found(Lookup::Subject, ""))?;
        let started = QuizSession::start(self.bank.get_chapter(&subject, topic)?);

        self.chapter = Some(topic.to_string());
        self.session = None;
        let session = started?;
        tracing::debug!(subject = %subject, chapter = topic, "chapter selected");
        self.session = Some(session);
        Ok(())
    }

    /// Restart the session for the current selection.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyChapter` (or `NotFound` with no selection)
    /// when there is no quiz to restart.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        match self.session.as_mut() {
            Some(session) => {
                session.restart();
                Ok(())
            }
            None => {
                let chapter = self.selected_chapter()?;
                Err(QuizError::EmptyChapter(chapter.topic.clone()))
            }
        }
    }

    fn selected_chapter(&self) -> Result<&Chapter, QuizError> {
        match (&self.subject, &self.chapter) {
            (Some(subject), Some(topic)) => self.bank.get_chapter(subject, topic),
            (Some(subject), None) => Err(QuizError::not_found(Lookup::Chapter, subject.clone())),
            _ => Err(QuizError::not_found(Lookup::Subject, "")),
        }
    }
}
