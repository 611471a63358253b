//! medquiz-core: Question bank loading and the quiz session state machine.
//!
//! This crate defines the question bank data model, loads and validates
//! banks from JSON, and drives chapter-by-chapter quiz sessions. It does no
//! rendering; front-ends read [`view::QuestionView`] snapshots and call the
//! session operations.

pub mod answer;
pub mod assets;
pub mod bank;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod session;
pub mod view;

pub use assets::AssetResolver;
pub use bank::{load_bank, parse_bank_str, validate_bank, ChapterOverview, ValidationWarning};
pub use config::{load_config, load_config_from, QuizConfig};
pub use controller::QuizController;
pub use error::{Lookup, QuizError};
pub use model::{Chapter, Question, QuestionBank};
pub use session::{AdvanceResult, QuizSession, QuizSummary, SessionState, SubmitResult};
pub use view::QuestionView;
