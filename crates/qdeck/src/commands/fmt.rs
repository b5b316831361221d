use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::store;

/// Rewrite a round file in canonical form: questions renumbered from 1,
/// one `Answer:` line each, one blank line between questions. Without
/// `--write` the result goes to stdout and the file is untouched.
pub fn run(file: &Path, write: bool, quiet: bool) -> Result<()> {
    let (meta, drafts) = store::load_round(file)?;
    if drafts.is_empty() {
        anyhow::bail!("No questions found in {}", file.display());
    }

    let incomplete = drafts.iter().filter(|d| !d.is_complete()).count();
    if incomplete > 0 && !quiet {
        eprintln!(
            "{}",
            format!("warning: {incomplete} question(s) missing answers").yellow()
        );
    }

    if write {
        store::write_round(file, &meta, &drafts)?;
        if !quiet {
            eprintln!("Rewrote {} ({} questions)", file.display(), drafts.len());
        }
    } else {
        print!("{}", store::render_round(file, &meta, &drafts)?);
    }
    Ok(())
}
