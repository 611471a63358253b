//! Read-only snapshots handed to the presentation layer.

use std::path::PathBuf;

use serde::Serialize;

use crate::answer::option_label;
use crate::assets::AssetResolver;
use crate::session::{QuizSession, SubmitResult};

const NO_TEXT: &str = "No Text";
const NO_EXPLANATION: &str = "No explanation";

/// One selectable answer, with its key kept apart from the display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub key: String,
    /// `key) text`, as shown to the user.
    pub label: String,
}

/// Explanation shown once an answer has been submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplanationView {
    pub text: String,
    /// Resolved explanation image, only when the file exists.
    pub image: Option<PathBuf>,
}

/// Everything a front-end needs to draw the current question.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub title: String,
    /// Stable question id, usable with deep links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 1-based question number.
    pub number: usize,
    pub total: usize,
    pub score: u32,
    pub text: String,
    /// Resolved question image, only when the file exists.
    pub image: Option<PathBuf>,
    pub options: Vec<OptionView>,
    pub selected: Option<String>,
    /// `true` once the answer is submitted and options are no longer selectable.
    pub locked: bool,
    #[serde(skip)]
    pub outcome: Option<SubmitResult>,
    pub explanation: Option<ExplanationView>,
}

impl QuestionView {
    /// Snapshot the session's current question; `None` once the session is finished.
    pub fn from_session(session: &QuizSession, assets: &AssetResolver) -> Option<Self> {
        let index = session.current_index()?;
        let question = session.current_question()?;

        let text = if question.text.trim().is_empty() {
            NO_TEXT.to_string()
        } else {
            question.text.clone()
        };

        let explanation = session.show_explanation().then(|| ExplanationView {
            text: question
                .explanation_text()
                .unwrap_or(NO_EXPLANATION)
                .to_string(),
            image: question
                .explanation_asset()
                .and_then(|name| assets.locate(name)),
        });

        Some(Self {
            title: session.title().to_string(),
            id: question.id.clone().filter(|id| !id.trim().is_empty()),
            number: index + 1,
            total: session.total(),
            score: session.score(),
            text,
            image: question.image_asset().and_then(|name| assets.locate(name)),
            options: question
                .options
                .iter()
                .map(|(key, text)| OptionView {
                    key: key.clone(),
                    label: option_label(key, text),
                })
                .collect(),
            selected: session.selected_option().map(str::to_string),
            locked: session.answer_submitted(),
            outcome: session.last_result().cloned(),
            explanation,
        })
    }

    /// Progress through the session as a fraction in `(0, 1]`.
    pub fn progress(&self) -> f64 {
        self.number as f64 / self.total as f64
    }

    /// Status line such as `Question 1 of 2 | Score: 0`.
    pub fn caption(&self) -> String {
        format!(
            "Question {} of {} | Score: {}",
            self.number, self.total, self.score
        )
    }
}
