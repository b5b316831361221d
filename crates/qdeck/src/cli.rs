use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qdeck")]
#[command(author, version, about)]
#[command(long_about = "A trivia night presentation tool.\n\n\
    Keep your rounds in plain markdown, stitch them into an event file\n\
    and present straight from the terminal.\n\n\
    Examples:\n  \
    qdeck friday.yaml            Present an event\n  \
    qdeck friday.yaml --round 2  Start presenting at round 2\n  \
    qdeck check friday.yaml      Validate every round of an event\n  \
    qdeck spec --short           Print quick reference card")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Event file to present
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Start on a specific round (1-indexed)
    #[arg(long, global = false)]
    pub round: Option<u32>,

    /// Increase output verbosity (-v for per-question detail)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Validate a round file, or an event and every round it references
    Check {
        /// Round markdown file or event file
        file: PathBuf,
    },

    /// Export an event's slide deck as JSON
    Export {
        /// Event file to export
        file: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rewrite a round file in canonical form
    Fmt {
        /// Round markdown file
        file: PathBuf,

        /// Rewrite the file in place instead of printing the result
        #[arg(long)]
        write: bool,
    },

    /// Scaffold a new event and its round files
    New {
        /// Directory to create the event in
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Print the qdeck round format specification
    Spec {
        /// Print a concise quick-reference card instead of the full spec
        #[arg(long)]
        short: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.date_format)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Check { file }) => crate::commands::check::run(&file, self.verbose > 0),
            Some(Commands::Export { file, output }) => {
                crate::commands::export::run(file, output, self.quiet)
            }
            Some(Commands::Fmt { file, write }) => {
                crate::commands::fmt::run(&file, write, self.quiet)
            }
            Some(Commands::New { dir }) => crate::commands::new::run(&dir),
            Some(Commands::Spec { short }) => {
                crate::commands::spec::run(short);
                Ok(())
            }
            None => {
                if let Some(file) = self.file {
                    if !file.exists() {
                        anyhow::bail!("File not found: {}", file.display());
                    }
                    crate::app::run(file, self.round)
                } else {
                    use clap::CommandFactory;
                    let mut cmd = Self::command();
                    cmd.print_help()?;
                    println!();
                    Ok(())
                }
            }
        }
    }
}
