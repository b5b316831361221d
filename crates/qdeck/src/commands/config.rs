use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    match Config::load() {
        Ok(config) => {
            let yaml = serde_yaml::to_string(&config)?;
            print!("{yaml}");
        }
        Err(_) => {
            println!("No config file yet. Defaults in effect:");
            println!("  defaults.theme: dark");
            println!("  defaults.date_format: full");
        }
    }
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!("{} {key} = {value} ({})", "Saved".green(), path.display());
    Ok(())
}
