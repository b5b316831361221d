use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::store;

/// Validate a round file, or an event file and every round it
/// references. Exits non-zero when a question is missing its answer, so
/// it can gate scripts.
pub fn run(file: &Path, verbose: bool) -> Result<()> {
    let is_event = file
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml");

    let (total, missing) = if is_event {
        check_event(file, verbose)?
    } else {
        check_round(file, verbose)?
    };

    if missing > 0 {
        anyhow::bail!("{missing} of {total} questions missing answers");
    }
    println!("{}", format!("{}, all answered", plural(total, "question")).green());
    Ok(())
}

fn check_event(path: &Path, verbose: bool) -> Result<(usize, usize)> {
    let event = store::load_event(path)?;
    println!("{} - {} ({})", event.title.bold(), event.date, event.status);

    let mut missing = 0;
    for er in &event.rounds {
        println!(
            "  {}  {:<24} {}",
            format!("Round {}", er.position).cyan(),
            er.round.title,
            plural(er.round.questions.len(), "question")
        );

        for rq in &er.round.questions {
            let answered = !rq.question.answer.trim().is_empty();
            if verbose {
                let status = if answered { "ok".green() } else { "no answer".red() };
                println!(
                    "      {}. {}  [{}]",
                    rq.position,
                    preview(&rq.question.text, 56),
                    status
                );
            } else if !answered {
                println!(
                    "      {}",
                    format!("question {} has no answer", rq.position).red()
                );
            }
            if !answered {
                missing += 1;
            }
        }
    }
    println!();
    Ok((event.question_count(), missing))
}

fn check_round(path: &Path, verbose: bool) -> Result<(usize, usize)> {
    let (meta, drafts) = store::load_round(path)?;
    if drafts.is_empty() {
        anyhow::bail!("No questions found in {}", path.display());
    }

    let title = meta.title.unwrap_or_else(|| store::title_from_stem(path));
    println!("{}  {}", title.bold(), plural(drafts.len(), "question"));

    let mut missing = 0;
    for (i, draft) in drafts.iter().enumerate() {
        let number = i + 1;
        if verbose {
            let status = if draft.is_complete() { "ok".green() } else { "no answer".red() };
            println!("  {number}. {}  [{status}]", preview(&draft.text, 60));
        } else if !draft.is_complete() {
            println!("  {}", format!("question {number} has no answer").red());
        }
        if !draft.is_complete() {
            missing += 1;
        }
    }
    println!();
    Ok((drafts.len(), missing))
}

/// First line's worth of a question, whitespace collapsed.
fn preview(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        flat
    } else {
        let cut: String = flat.chars().take(max).collect();
        format!("{cut}…")
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
