//! The `medquiz init` command.

use std::path::Path;

use anyhow::{Context, Result};

const SAMPLE_CONFIG: &str = r#"# medquiz configuration

# Question bank: subject -> chapters -> questions.
data_file = "master_quiz_data.json"

# Directory that question and explanation image names are resolved against.
image_dir = "extracted_images"

# Both values may reference environment variables, e.g.
# data_file = "${HOME}/banks/master_quiz_data.json"
"#;

const SAMPLE_BANK: &str = r#"{
  "Pharmacology": [
    {
      "topic": "Antibiotics",
      "questions": [
        {
          "id": "Pharmacology_Ch1_1",
          "text": "Drug of choice for the treatment of syphilis?",
          "options": {
            "a": "Doxycycline",
            "b": "Penicillin G",
            "c": "Ceftriaxone",
            "d": "Azithromycin"
          },
          "correct_option": "b",
          "explanation": "Benzathine penicillin G remains first line for all stages."
        },
        {
          "id": "Pharmacology_Ch1_2",
          "text": "Red man syndrome is an infusion reaction to?",
          "options": {
            "a": "Vancomycin",
            "b": "Linezolid",
            "c": "Gentamicin",
            "d": "Clindamycin"
          },
          "correct_option": "a",
          "explanation": "Rapid vancomycin infusion causes histamine release."
        }
      ]
    }
  ]
}
"#;

pub fn execute() -> Result<()> {
    write_if_absent(Path::new("medquiz.toml"), SAMPLE_CONFIG)?;
    write_if_absent(Path::new("master_quiz_data.json"), SAMPLE_BANK)?;

    let images = Path::new("extracted_images");
    if images.exists() {
        println!("extracted_images/ already exists, skipping.");
    } else {
        std::fs::create_dir_all(images).context("failed to create extracted_images/")?;
        println!("Created extracted_images/");
    }

    println!("\nRun `medquiz play --subject Pharmacology` to start.");
    Ok(())
}

fn write_if_absent(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
        return Ok(());
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
