//! File-backed event store.
//!
//! An event is a YAML file listing round files relative to itself:
//!
//! ```yaml
//! title: Friday Night Trivia
//! date: 2026-03-06
//! status: draft
//! rounds:
//!   - rounds/general-knowledge.md
//!   - rounds/movie-quotes.md
//! ```
//!
//! A round file is question markdown with optional `---` YAML
//! frontmatter carrying a title and topic. Ids are not stored anywhere;
//! a round's id is its file stem and question ids are synthesized from
//! it on load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Event, EventRound, EventStatus, Question, Round, RoundQuestion};
use crate::parser::{QuestionDraft, markdown};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid event file {path}: {reason}")]
    EventFormat { path: PathBuf, reason: String },

    #[error("invalid frontmatter in {path}: {reason}")]
    RoundMeta { path: PathBuf, reason: String },

    #[error("event {event} references missing round file {round}")]
    MissingRound { event: PathBuf, round: PathBuf },
}

/// Frontmatter of a round file. Everything is optional; a bare markdown
/// file is a valid round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl RoundMeta {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.topic.is_none()
    }
}

/// On-disk shape of an event file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EventFile {
    title: String,
    date: NaiveDate,
    #[serde(default)]
    status: EventStatus,
    #[serde(default)]
    rounds: Vec<PathBuf>,
}

/// Load an event and every round it references. Round paths resolve
/// relative to the event file's directory.
pub fn load_event(path: &Path) -> Result<Event, StoreError> {
    let content = fs::read_to_string(path).map_err(|source| StoreError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let file: EventFile =
        serde_yaml::from_str(&content).map_err(|err| StoreError::EventFormat {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
    let base = path.parent().unwrap_or(Path::new("."));

    let mut rounds = Vec::with_capacity(file.rounds.len());
    for (i, round_path) in file.rounds.iter().enumerate() {
        let resolved = base.join(round_path);
        let (meta, drafts) = match load_round(&resolved) {
            Ok(loaded) => loaded,
            Err(StoreError::ReadFile { path: round, source })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                return Err(StoreError::MissingRound {
                    event: path.to_path_buf(),
                    round,
                });
            }
            Err(err) => return Err(err),
        };

        let id = stem_id(&resolved);
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(qi, draft)| {
                let position = qi as u32 + 1;
                RoundQuestion {
                    position,
                    question: Question {
                        id: format!("{id}.{position}"),
                        text: draft.text,
                        answer: draft.answer,
                    },
                }
            })
            .collect();

        rounds.push(EventRound {
            position: i as u32 + 1,
            round: Round {
                title: meta.title.unwrap_or_else(|| title_from_stem(&resolved)),
                topic: meta.topic,
                questions,
                id,
            },
        });
    }

    Ok(Event {
        id: stem_id(path),
        title: file.title,
        date: file.date,
        status: file.status,
        rounds,
    })
}

/// Load a single round file: frontmatter plus decoded drafts. Loaded
/// drafts get ids stamped from the file stem and their 1-based position.
pub fn load_round(path: &Path) -> Result<(RoundMeta, Vec<QuestionDraft>), StoreError> {
    let content = fs::read_to_string(path).map_err(|source| StoreError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let (frontmatter, body) = split_frontmatter(&content);
    let meta: RoundMeta = match frontmatter {
        Some(yaml) => serde_yaml::from_str(yaml).map_err(|err| StoreError::RoundMeta {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?,
        None => RoundMeta::default(),
    };

    let id = stem_id(path);
    let mut drafts = markdown::decode(body);
    for (i, draft) in drafts.iter_mut().enumerate() {
        draft.id = Some(format!("{id}.{}", i + 1));
        draft.is_new = false;
    }

    Ok((meta, drafts))
}

/// Render a round file in canonical form: frontmatter (when it carries
/// anything) and the encoded question markdown. The path is only used
/// for error context.
pub fn render_round(
    path: &Path,
    meta: &RoundMeta,
    drafts: &[QuestionDraft],
) -> Result<String, StoreError> {
    let mut out = String::new();
    if !meta.is_empty() {
        let yaml = serde_yaml::to_string(meta).map_err(|err| StoreError::RoundMeta {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        out.push_str("---\n");
        out.push_str(&yaml);
        out.push_str("---\n");
    }

    let body = markdown::encode(drafts);
    if !body.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&body);
        out.push('\n');
    }
    Ok(out)
}

pub fn write_round(
    path: &Path,
    meta: &RoundMeta,
    drafts: &[QuestionDraft],
) -> Result<(), StoreError> {
    let content = render_round(path, meta, drafts)?;
    fs::write(path, content).map_err(|source| StoreError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a fresh event file referencing the given round paths. New
/// events always start in draft status.
pub fn write_event(
    path: &Path,
    title: &str,
    date: NaiveDate,
    rounds: &[PathBuf],
) -> Result<(), StoreError> {
    let file = EventFile {
        title: title.to_string(),
        date,
        status: EventStatus::Draft,
        rounds: rounds.to_vec(),
    };
    let yaml = serde_yaml::to_string(&file).map_err(|err| StoreError::EventFormat {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    fs::write(path, yaml).map_err(|source| StoreError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Split optional `---`-delimited YAML frontmatter off a round file.
/// Without a closing delimiter the whole input is treated as body.
fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let mut lines = content.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return (None, content);
    };
    if first.trim_end() != "---" {
        return (None, content);
    }

    let mut offset = first.len();
    for line in lines {
        if line.trim_end() == "---" {
            let yaml = &content[first.len()..offset];
            let body = &content[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }
    (None, content)
}

/// Ids are file stems; there is no separate id field anywhere on disk.
fn stem_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "round".to_string())
}

/// Fallback title for rounds without frontmatter: `movie-quotes`
/// becomes `Movie Quotes`.
pub fn title_from_stem(path: &Path) -> String {
    stem_id(path)
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
