//! The `medquiz validate` command.

use anyhow::{bail, Result};

use medquiz_core::validate_bank;

use super::Overrides;

pub fn execute(overrides: &Overrides, format: String) -> Result<()> {
    let (config, bank) = super::load(overrides)?;
    let assets = config.assets();
    let warnings = validate_bank(&bank, Some(&assets));

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&warnings)?);
        }
        "text" => {
            println!(
                "Question bank: {} subjects, {} chapters, {} questions",
                bank.subject_count(),
                bank.chapter_count(),
                bank.question_count()
            );
            if warnings.is_empty() {
                println!("Question bank valid.");
            } else {
                for w in &warnings {
                    println!("  [{}] WARNING: {}", w.location(), w.message);
                }
                println!("{} warning(s).", warnings.len());
            }
        }
        other => bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}
