use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use inquire::{Confirm, Text};

use crate::store;
use crate::store::RoundMeta;

/// Interactively scaffold an event: prompts for a title, a date and
/// round titles, then writes the event file plus one stub round file
/// per round.
pub fn run(dir: &Path) -> Result<()> {
    let title = Text::new("Event title:")
        .with_placeholder("Friday Night Trivia")
        .prompt()?;
    let title = title.trim().to_string();
    if title.is_empty() {
        anyhow::bail!("Event title cannot be empty");
    }

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let date_input = Text::new("Date (YYYY-MM-DD):").with_default(&today).prompt()?;
    let date = NaiveDate::parse_from_str(date_input.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date: {date_input}"))?;

    let mut round_titles: Vec<String> = Vec::new();
    loop {
        let prompt = format!("Round {} title (empty to finish):", round_titles.len() + 1);
        let round_title = Text::new(&prompt).prompt()?;
        let round_title = round_title.trim().to_string();
        if round_title.is_empty() {
            break;
        }
        round_titles.push(round_title);
    }
    if round_titles.is_empty() {
        anyhow::bail!("An event needs at least one round");
    }

    let event_path = dir.join(format!("{}.yaml", slugify(&title)));
    if event_path.exists() {
        let overwrite = Confirm::new(&format!("{} exists. Overwrite?", event_path.display()))
            .with_default(false)
            .prompt()?;
        if !overwrite {
            return Ok(());
        }
    }

    let rounds_dir = dir.join("rounds");
    std::fs::create_dir_all(&rounds_dir)
        .with_context(|| format!("Failed to create {}", rounds_dir.display()))?;

    let mut used: HashSet<String> = HashSet::new();
    let mut round_paths = Vec::with_capacity(round_titles.len());
    for round_title in &round_titles {
        let mut slug = slugify(round_title);
        let mut n = 1;
        while !used.insert(slug.clone()) {
            n += 1;
            slug = format!("{}-{n}", slugify(round_title));
        }

        let relative = PathBuf::from("rounds").join(format!("{slug}.md"));
        let meta = RoundMeta {
            title: Some(round_title.clone()),
            topic: None,
        };
        store::write_round(&dir.join(&relative), &meta, &[])?;
        round_paths.push(relative);
    }

    store::write_event(&event_path, &title, date, &round_paths)?;

    println!("{} {}", "Created".green(), event_path.display());
    for path in &round_paths {
        println!("  {}", dir.join(path).display());
    }
    println!();
    println!("Add questions to the round files, then present with:");
    println!("  qdeck {}", event_path.display());
    Ok(())
}

/// Lowercased, alphanumerics kept, every other run collapsed to one
/// dash: "Friday Night Trivia!" becomes "friday-night-trivia".
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_dash = true;
    for c in text.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        "event".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Friday Night Trivia!"), "friday-night-trivia");
        assert_eq!(slugify("  Movie   Quotes  "), "movie-quotes");
        assert_eq!(slugify("Röund Äbout"), "röund-äbout");
        assert_eq!(slugify("***"), "event");
    }
}
