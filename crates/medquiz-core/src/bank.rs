//! Question bank loader.
//!
//! Loads the bank from a JSON document, answers subject and chapter lookups,
//! and validates the data for common authoring mistakes.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use crate::answer::normalize_key;
use crate::assets::AssetResolver;
use crate::error::{Lookup, QuizError};
use crate::model::{Chapter, Question, QuestionBank};

/// Subject searches shorter than this return every subject.
const MIN_SEARCH_LEN: usize = 2;

/// Load a question bank from a JSON file.
///
/// A missing or unreadable file, and a document without any subjects, are
/// reported as [`QuizError::DataNotFound`].
pub fn load_bank(path: &Path) -> Result<QuestionBank, QuizError> {
    let content = std::fs::read_to_string(path).map_err(|e| QuizError::DataNotFound {
        path: path.to_path_buf(),
        source: Some(e),
    })?;

    let bank = parse_bank_str(&content, &path.display().to_string())?;
    if bank.is_empty() {
        return Err(QuizError::DataNotFound {
            path: path.to_path_buf(),
            source: None,
        });
    }

    tracing::info!(
        subjects = bank.subject_count(),
        chapters = bank.chapter_count(),
        questions = bank.question_count(),
        "loaded question bank from {}",
        path.display()
    );
    Ok(bank)
}

/// Parse a JSON string into a `QuestionBank` (useful for testing).
pub fn parse_bank_str(content: &str, origin: &str) -> Result<QuestionBank, QuizError> {
    serde_json::from_str(content).map_err(|source| QuizError::DataFormat {
        origin: origin.to_string(),
        source,
    })
}

/// One row of a chapter pick list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterOverview {
    /// 1-based position in the subject.
    pub number: usize,
    pub topic: String,
    pub question_count: usize,
}

/// A question located by id, with the subject and chapter it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct QuestionRef<'a> {
    pub subject: &'a str,
    pub chapter: &'a Chapter,
    pub question: &'a Question,
}

impl QuestionBank {
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn chapter_count(&self) -> usize {
        self.subjects.values().map(Vec::len).sum()
    }

    pub fn question_count(&self) -> usize {
        self.subjects
            .values()
            .flatten()
            .map(|c| c.questions.len())
            .sum()
    }

    /// All subject names, sorted.
    pub fn list_subjects(&self) -> Vec<&str> {
        self.subjects.keys().map(String::as_str).collect()
    }

    /// Subjects whose name contains `query`, ignoring case.
    pub fn search_subjects(&self, query: &str) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_SEARCH_LEN {
            return self.list_subjects();
        }
        self.subjects
            .keys()
            .filter(|name| name.to_lowercase().contains(&query))
            .map(String::as_str)
            .collect()
    }

    /// Chapters of a subject, in document order.
    pub fn list_chapters(&self, subject: &str) -> Result<&[Chapter], QuizError> {
        self.subjects
            .get(subject)
            .map(Vec::as_slice)
            .ok_or_else(|| QuizError::not_found(Lookup::Subject, subject))
    }

    /// Look up a chapter by its exact topic. The first match wins.
    pub fn get_chapter(&self, subject: &str, topic: &str) -> Result<&Chapter, QuizError> {
        self.list_chapters(subject)?
            .iter()
            .find(|c| c.topic == topic)
            .ok_or_else(|| QuizError::not_found(Lookup::Chapter, format!("{subject} / {topic}")))
    }

    /// Topic, position and question count of each chapter of a subject.
    pub fn chapter_overview(&self, subject: &str) -> Result<Vec<ChapterOverview>, QuizError> {
        Ok(self
            .list_chapters(subject)?
            .iter()
            .enumerate()
            .map(|(i, c)| ChapterOverview {
                number: i + 1,
                topic: c.topic.clone(),
                question_count: c.questions.len(),
            })
            .collect())
    }

    /// Every question of a subject, chapter by chapter.
    pub fn subject_questions(&self, subject: &str) -> Result<Vec<Question>, QuizError> {
        Ok(self
            .list_chapters(subject)?
            .iter()
            .flat_map(|c| c.questions.iter().cloned())
            .collect())
    }

    /// Find a question by id anywhere in the bank.
    pub fn find_question(&self, id: &str) -> Result<QuestionRef<'_>, QuizError> {
        let id = id.trim();
        for (subject, chapters) in &self.subjects {
            for chapter in chapters {
                if let Some(question) = chapter
                    .questions
                    .iter()
                    .find(|q| q.id.as_deref() == Some(id))
                {
                    return Ok(QuestionRef {
                        subject,
                        chapter,
                        question,
                    });
                }
            }
        }
        Err(QuizError::not_found(Lookup::Question, id))
    }
}

/// A warning from question bank validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationWarning {
    pub subject: String,
    /// Chapter topic (if applicable).
    pub chapter: Option<String>,
    /// 1-based question number within the chapter (if applicable).
    pub question: Option<usize>,
    pub message: String,
}

impl ValidationWarning {
    fn new(subject: &str, chapter: Option<&str>, question: Option<usize>, message: String) -> Self {
        Self {
            subject: subject.to_string(),
            chapter: chapter.map(str::to_string),
            question,
            message,
        }
    }

    /// Where the warning applies, e.g. `Pharmacology / Antibiotics #2`.
    pub fn location(&self) -> String {
        let mut loc = self.subject.clone();
        if let Some(chapter) = &self.chapter {
            loc.push_str(" / ");
            loc.push_str(chapter);
        }
        if let Some(n) = self.question {
            loc.push_str(&format!(" #{n}"));
        }
        loc
    }
}

/// Validate a question bank for common issues.
///
/// Asset checks only run when a resolver is given.
pub fn validate_bank(bank: &QuestionBank, assets: Option<&AssetResolver>) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut seen_ids = HashSet::new();

    for (subject, chapters) in &bank.subjects {
        if chapters.is_empty() {
            warnings.push(ValidationWarning::new(subject, None, None, "subject has no chapters".into()));
        }

        let mut seen_topics = HashSet::new();
        for chapter in chapters {
            let topic = Some(chapter.topic.as_str());
            if !seen_topics.insert(chapter.topic.as_str()) {
                warnings.push(ValidationWarning::new(
                    subject,
                    topic,
                    None,
                    "duplicate chapter topic, only the first is reachable".into(),
                ));
            }
            if chapter.questions.is_empty() {
                warnings.push(ValidationWarning::new(subject, topic, None, "chapter has no questions".into()));
            }

            for (i, q) in chapter.questions.iter().enumerate() {
                let number = Some(i + 1);
                let mut warn = |message: String| {
                    warnings.push(ValidationWarning::new(subject, topic, number, message));
                };

                if q.text.trim().is_empty() {
                    warn("question text is empty".into());
                }
                if !q.has_options() {
                    warn("question has no options".into());
                } else if !q
                    .options
                    .keys()
                    .any(|k| normalize_key(k) == normalize_key(&q.correct_option))
                {
                    warn(format!(
                        "correct_option '{}' does not match any option key",
                        q.correct_option.trim()
                    ));
                }
                if let Some(id) = &q.id {
                    if !seen_ids.insert(id.as_str()) {
                        warn(format!("duplicate question id: {id}"));
                    }
                }
                if let Some(assets) = assets {
                    for name in [q.image_asset(), q.explanation_asset()].into_iter().flatten() {
                        if !assets.exists(name) {
                            warn(format!(
                                "image not found: {}",
                                assets.resolve(name).display()
                            ));
                        }
                    }
                }
            }
        }
    }

    for w in &warnings {
        tracing::warn!(location = %w.location(), "{}", w.message);
    }
    warnings
}
