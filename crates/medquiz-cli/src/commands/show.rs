//! The `medquiz show` command.

use std::io;

use anyhow::Result;

use medquiz_core::QuizSession;

use super::Overrides;

pub fn execute(overrides: &Overrides, id: String) -> Result<()> {
    let (config, bank) = super::load(overrides)?;
    let found = bank.find_question(&id)?;

    let title = format!("{} / {}", found.subject, found.chapter.topic);
    tracing::debug!(id = %id, "showing question from {title}");
    let mut session = QuizSession::from_questions(title, vec![found.question.clone()])?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    super::play::run(&mut session, &config.assets(), stdin.lock(), stdout.lock())
}
