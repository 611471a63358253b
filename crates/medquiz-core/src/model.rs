//! Core data model types for medquiz.
//!
//! A question bank maps subject names to chapters, and each chapter holds an
//! ordered list of multiple-choice questions. The shapes mirror the JSON
//! document the bank is loaded from.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Subjects keyed by name, each with its chapters in document order.
///
/// Built once by [`crate::bank::load_bank`] and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionBank {
    pub(crate) subjects: BTreeMap<String, Vec<Chapter>>,
}

/// A named group of questions within a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter title, unique within its subject.
    pub topic: String,
    /// Questions in curricular order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub questions: Vec<Question>,
}

/// A single multiple-choice question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier such as `Pharmacology_Ch1_3`, when the source has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Question stem.
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// Image file name, relative to the asset directory.
    #[serde(default)]
    pub image: Option<String>,
    /// Option key to option text, in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: IndexMap<String, String>,
    /// Key of the correct option, compared case-insensitively.
    #[serde(default, deserialize_with = "deserialize_option_key")]
    pub correct_option: String,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub explanation_image: Option<String>,
}

impl Question {
    /// Image shown with the question stem, if any.
    pub fn image_asset(&self) -> Option<&str> {
        non_blank(&self.image)
    }

    /// Image shown alongside the explanation, if any.
    pub fn explanation_asset(&self) -> Option<&str> {
        non_blank(&self.explanation_image)
    }

    /// Explanation text, if any.
    pub fn explanation_text(&self) -> Option<&str> {
        non_blank(&self.explanation)
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Extracted banks write `null` where a field has no value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Older banks store the correct key as a bare number (`"correct_option": 2`).
fn deserialize_option_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawKey {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<RawKey>::deserialize(deserializer)? {
        Some(RawKey::Text(s)) => s,
        Some(RawKey::Number(n)) => n.to_string(),
        None => String::new(),
    })
}
