//! The `medquiz subjects` command.

use anyhow::Result;

use super::Overrides;

pub fn execute(overrides: &Overrides, search: Option<String>) -> Result<()> {
    let (_, bank) = super::load(overrides)?;
    let subjects = match &search {
        Some(query) => bank.search_subjects(query),
        None => bank.list_subjects(),
    };

    if subjects.is_empty() {
        println!("No subjects match '{}'.", search.unwrap_or_default());
        return Ok(());
    }

    for subject in subjects {
        let chapters = bank.list_chapters(subject)?.len();
        println!("{subject} ({chapters} chapters)");
    }
    Ok(())
}
