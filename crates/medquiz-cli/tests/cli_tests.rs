//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BANK_JSON: &str = r#"{
    "Pharmacology": [
        {
            "topic": "Antibiotics",
            "questions": [
                {
                    "id": "Pharmacology_Ch1_1",
                    "text": "Drug of choice for syphilis?",
                    "options": {"a": "Doxycycline", "b": "Penicillin G"},
                    "correct_option": "b",
                    "explanation": "Benzathine penicillin G is first line."
                },
                {
                    "id": "Pharmacology_Ch1_2",
                    "text": "Red man syndrome is caused by?",
                    "options": {"a": "Vancomycin", "b": "Linezolid"},
                    "correct_option": "a"
                }
            ]
        },
        {"topic": "Autonomics", "questions": []}
    ],
    "Pathology": [
        {
            "topic": "Neoplasia",
            "questions": [
                {"text": "Most common benign tumour of the liver?", "options": {"a": "Haemangioma", "b": "Adenoma"}, "correct_option": "a"}
            ]
        }
    ]
}"#;

/// A scratch directory with no config, so only `--data` and defaults apply.
fn workspace(bank: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bank.json"), bank).unwrap();
    dir
}

fn medquiz(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("medquiz").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("MEDQUIZ_DATA_FILE")
        .env_remove("MEDQUIZ_IMAGE_DIR");
    cmd
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    medquiz(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("chapters"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    medquiz(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("medquiz"));
}

#[test]
fn subjects_are_listed_sorted() {
    let dir = workspace(BANK_JSON);
    medquiz(dir.path())
        .args(["--data", "bank.json", "subjects"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Pathology (1 chapters)\nPharmacology (2 chapters)",
        ));
}

#[test]
fn subject_search_filters() {
    let dir = workspace(BANK_JSON);
    medquiz(dir.path())
        .args(["--data", "bank.json", "subjects", "--search", "PHARM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pharmacology"))
        .stdout(predicate::str::contains("Pathology").not());
}

#[test]
fn chapters_table_hides_empty_chapters() {
    let dir = workspace(BANK_JSON);
    medquiz(dir.path())
        .args(["--data", "bank.json", "chapters", "--subject", "Pharmacology"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Antibiotics"))
        .stdout(predicate::str::contains("Autonomics").not())
        .stdout(predicate::str::contains("1 empty chapter(s) hidden."));
}

#[test]
fn unknown_subject_fails() {
    let dir = workspace(BANK_JSON);
    medquiz(dir.path())
        .args(["--data", "bank.json", "chapters", "--subject", "Surgery"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("subject not found: Surgery"));
}

#[test]
fn validate_reports_warnings() {
    let dir = workspace(BANK_JSON);
    medquiz(dir.path())
        .args(["--data", "bank.json", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Question bank: 2 subjects, 3 chapters, 3 questions",
        ))
        .stdout(predicate::str::contains(
            "[Pharmacology / Autonomics] WARNING: chapter has no questions",
        ));
}

#[test]
fn validate_clean_bank() {
    let dir = workspace(
        r#"{"Anatomy": [{"topic": "Thorax", "questions": [
            {"text": "T1", "options": {"a": "x", "b": "y"}, "correct_option": "a"}
        ]}]}"#,
    );
    medquiz(dir.path())
        .args(["--data", "bank.json", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Question bank valid."));
}

#[test]
fn validate_json_output() {
    let dir = workspace(BANK_JSON);
    medquiz(dir.path())
        .args(["--data", "bank.json", "validate", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"message\": \"chapter has no questions\""));
}

#[test]
fn missing_data_file_fails() {
    let dir = TempDir::new().unwrap();
    medquiz(dir.path())
        .args(["--data", "nonexistent.json", "subjects"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("no data found"));
}

#[test]
fn malformed_data_file_fails() {
    let dir = workspace("{ not json");
    medquiz(dir.path())
        .args(["--data", "bank.json", "subjects"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed question bank"));
}

#[test]
fn play_scores_a_chapter() {
    let dir = workspace(BANK_JSON);
    medquiz(dir.path())
        .args(["--data", "bank.json", "play", "--subject", "Pharmacology"])
        .write_stdin("a\n\na\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1 of 2 | Score: 0"))
        .stdout(predicate::str::contains("Incorrect. Correct answer: B"))
        .stdout(predicate::str::contains("Correct! Answer: A"))
        .stdout(predicate::str::contains("Quiz finished! Final score: 1/2"));
}

#[test]
fn play_requires_a_selection() {
    let dir = workspace(BANK_JSON);
    medquiz(dir.path())
        .args(["--data", "bank.json", "play", "--subject", "Pharmacology"])
        .write_stdin("\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Select an option."));
}

#[test]
fn play_empty_chapter() {
    let dir = workspace(BANK_JSON);
    medquiz(dir.path())
        .args([
            "--data",
            "bank.json",
            "play",
            "--subject",
            "Pharmacology",
            "--chapter",
            "Autonomics",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("This chapter has no questions."));
}

#[test]
fn play_all_chapters() {
    let dir = workspace(BANK_JSON);
    medquiz(dir.path())
        .args(["--data", "bank.json", "play", "--subject", "Pharmacology", "--all"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pharmacology (all chapters) | Question 1 of 2"));
}

#[test]
fn show_question_by_id() {
    let dir = workspace(BANK_JSON);
    medquiz(dir.path())
        .args(["--data", "bank.json", "show", "--id", "Pharmacology_Ch1_2"])
        .write_stdin("a\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pharmacology / Antibiotics | Question 1 of 1"))
        .stdout(predicate::str::contains("[Pharmacology_Ch1_2]"))
        .stdout(predicate::str::contains("Red man syndrome"))
        .stdout(predicate::str::contains("Quiz finished! Final score: 1/1"));
}

#[test]
fn config_file_sets_data_path() {
    let dir = workspace(BANK_JSON);
    std::fs::write(dir.path().join("medquiz.toml"), "data_file = \"bank.json\"\n").unwrap();
    medquiz(dir.path())
        .arg("subjects")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pharmacology"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    medquiz(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created medquiz.toml"))
        .stdout(predicate::str::contains("Created master_quiz_data.json"));

    assert!(dir.path().join("medquiz.toml").exists());
    assert!(dir.path().join("extracted_images").is_dir());

    medquiz(dir.path())
        .arg("subjects")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pharmacology (1 chapters)"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("medquiz.toml"), "# existing").unwrap();

    medquiz(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("medquiz.toml already exists, skipping."));

    let content = std::fs::read_to_string(dir.path().join("medquiz.toml")).unwrap();
    assert_eq!(content, "# existing");
}
