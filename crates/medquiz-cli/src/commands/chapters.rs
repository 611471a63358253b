//! The `medquiz chapters` command.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use super::Overrides;

pub fn execute(overrides: &Overrides, subject: String) -> Result<()> {
    let (_, bank) = super::load(overrides)?;
    let overview = bank.chapter_overview(&subject)?;

    // Empty chapters cannot be played, so they are left out of the listing.
    let (playable, empty): (Vec<_>, Vec<_>) =
        overview.into_iter().partition(|c| c.question_count > 0);

    if playable.is_empty() {
        println!("{subject} has no chapters with questions.");
    } else {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["#", "Topic", "Questions"]);

        for chapter in &playable {
            table.add_row(vec![
                chapter.number.to_string(),
                chapter.topic.clone(),
                chapter.question_count.to_string(),
            ]);
        }

        println!("{subject}");
        println!("{table}");
    }

    if !empty.is_empty() {
        println!("{} empty chapter(s) hidden.", empty.len());
    }
    Ok(())
}
