use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;
use crate::deck::{self, DateFormat};
use crate::store;

/// Build an event's full deck and write it out as JSON, for scoreboards
/// and other external renderers. Slides carry a `type` tag; the round
/// index rides along.
pub fn run(file: PathBuf, output: Option<PathBuf>, quiet: bool) -> Result<()> {
    let event = store::load_event(&file)?;

    let config = Config::load_or_default();
    let date_format = DateFormat::from_name(config.default_date_format().unwrap_or("full"));

    let deck = deck::build(&event, date_format);
    let json = serde_json::to_string_pretty(&deck)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            if !quiet {
                eprintln!("Exported {} slides to {}", deck.slides.len(), path.display());
            }
        }
        None => println!("{json}"),
    }
    Ok(())
}
