//! The `medquiz play` command.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use medquiz_core::{
    AdvanceResult, AssetResolver, QuestionView, QuizController, QuizError, QuizSession,
    QuizSummary, SessionState, SubmitResult,
};

use super::Overrides;

const QUIT: &str = "quit";
const RESTART: &str = "restart";

pub fn execute(
    overrides: &Overrides,
    subject: String,
    chapter: Option<String>,
    all: bool,
) -> Result<()> {
    let (config, bank) = super::load(overrides)?;
    let assets = config.assets();

    let session = if all {
        let questions = bank.subject_questions(&subject)?;
        QuizSession::from_questions(format!("{subject} (all chapters)"), questions)
    } else {
        let mut controller = QuizController::new(bank);
        controller.select_subject(&subject).or_else(ignore_empty)?;
        if let Some(topic) = &chapter {
            controller.select_chapter(topic).or_else(ignore_empty)?;
        }
        match controller.session() {
            Some(session) => Ok(session.clone()),
            None => Err(QuizError::EmptyChapter(
                controller.chapter().unwrap_or(&subject).to_string(),
            )),
        }
    };

    let mut session = match session {
        Ok(session) => session,
        Err(QuizError::EmptyChapter(topic)) => {
            tracing::warn!("'{topic}' has no questions");
            println!("This chapter has no questions.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut session, &assets, stdin.lock(), stdout.lock())
}

/// An empty chapter is reported once a session is requested, not while selecting.
fn ignore_empty(e: QuizError) -> Result<(), QuizError> {
    match e {
        QuizError::EmptyChapter(_) => Ok(()),
        other => Err(other),
    }
}

/// Drive a session with line-based input until the user quits or input ends.
pub fn run<R: BufRead, W: Write>(
    session: &mut QuizSession,
    assets: &AssetResolver,
    input: R,
    mut out: W,
) -> Result<()> {
    let mut lines = input.lines();
    render_question(session, assets, &mut out)?;

    loop {
        let prompt = match session.state() {
            SessionState::AwaitingAnswer => "Choose answer: ",
            SessionState::AnswerSubmitted => "Press Enter for the next question: ",
            SessionState::Finished => "Type 'restart' to play again, or press Enter to exit: ",
        };
        write!(out, "{prompt}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line.context("failed to read input")?;
        let line = line.trim();

        if line.eq_ignore_ascii_case(QUIT) {
            break;
        }

        match session.state() {
            SessionState::AwaitingAnswer => answer(session, assets, line, &mut out)?,
            SessionState::AnswerSubmitted => match session.advance()? {
                AdvanceResult::Next { .. } => render_question(session, assets, &mut out)?,
                AdvanceResult::Finished(summary) => render_summary(&summary, &mut out)?,
            },
            SessionState::Finished => {
                if !line.eq_ignore_ascii_case(RESTART) {
                    break;
                }
                session.restart();
                render_question(session, assets, &mut out)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn answer<W: Write>(
    session: &mut QuizSession,
    assets: &AssetResolver,
    line: &str,
    out: &mut W,
) -> Result<()> {
    if !line.is_empty() {
        if let Err(e) = session.select_option(line) {
            return report(e, session, out);
        }
    }

    match session.submit() {
        Ok(result) => render_feedback(session, assets, &result, out),
        Err(e) => report(e, session, out),
    }
}

/// Turn a recoverable action error into a prompt; anything else is fatal.
fn report<W: Write>(e: QuizError, session: &QuizSession, out: &mut W) -> Result<()> {
    match e {
        QuizError::NoSelection => writeln!(out, "Select an option.")?,
        QuizError::UnknownOption(key) => {
            let keys: Vec<String> = session
                .current_question()
                .map(|q| q.options.keys().map(|k| k.trim().to_string()).collect())
                .unwrap_or_default();
            if keys.is_empty() {
                writeln!(out, "Unknown option '{key}'. This question has no options.")?;
            } else {
                writeln!(out, "Unknown option '{key}'. Choose one of: {}", keys.join(", "))?;
            }
        }
        e if e.is_recoverable() => writeln!(out, "{e}")?,
        e => return Err(e.into()),
    }
    Ok(())
}

fn render_question<W: Write>(
    session: &QuizSession,
    assets: &AssetResolver,
    out: &mut W,
) -> Result<()> {
    let Some(view) = QuestionView::from_session(session, assets) else {
        return Ok(());
    };

    writeln!(out)?;
    match &view.id {
        Some(id) => writeln!(out, "{} | {} | [{id}]", view.title, view.caption())?,
        None => writeln!(out, "{} | {}", view.title, view.caption())?,
    }
    writeln!(out, "{}", view.text)?;
    if let Some(image) = &view.image {
        writeln!(out, "[image: {}]", image.display())?;
    }
    if view.options.is_empty() {
        writeln!(out, "  (no options)")?;
    }
    for option in &view.options {
        writeln!(out, "  {}", option.label)?;
    }
    Ok(())
}

fn render_feedback<W: Write>(
    session: &QuizSession,
    assets: &AssetResolver,
    result: &SubmitResult,
    out: &mut W,
) -> Result<()> {
    if result.correct {
        writeln!(out, "Correct! Answer: {}", result.correct_option)?;
    } else {
        writeln!(out, "Incorrect. Correct answer: {}", result.correct_option)?;
    }

    if let Some(explanation) = QuestionView::from_session(session, assets).and_then(|v| v.explanation) {
        writeln!(out, "Explanation: {}", explanation.text)?;
        if let Some(image) = &explanation.image {
            writeln!(out, "[explanation image: {}]", image.display())?;
        }
    }
    Ok(())
}

fn render_summary<W: Write>(summary: &QuizSummary, out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Quiz finished! Final score: {}/{} ({:.0}%)",
        summary.score,
        summary.total,
        summary.ratio() * 100.0
    )?;
    writeln!(out, "Time taken: {}s", summary.elapsed.num_seconds())?;
    Ok(())
}
