//! Flattens an event into the linear slide sequence a presentation
//! session runs over, plus an index of where each round starts.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::Event;

/// How the cover slide renders the event date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// "Tuesday, March 5, 2026"
    #[default]
    Full,
    /// "Tue, Mar 5"
    Short,
}

impl DateFormat {
    /// Unknown names fall back to the full format.
    pub fn from_name(name: &str) -> Self {
        match name {
            "short" => DateFormat::Short,
            _ => DateFormat::Full,
        }
    }

    pub fn render(self, date: NaiveDate) -> String {
        match self {
            DateFormat::Full => date.format("%A, %B %-d, %Y").to_string(),
            DateFormat::Short => date.format("%a, %b %-d").to_string(),
        }
    }
}

/// One display slide. Decks are built fresh for a session and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Slide {
    Cover {
        title: String,
        date: String,
    },
    RoundIntro {
        round_number: u32,
        round_title: String,
    },
    Question {
        round_number: u32,
        question_number: u32,
        text: String,
        answer: String,
    },
}

impl Slide {
    /// The round a slide belongs to; the cover belongs to none.
    pub fn round_number(&self) -> Option<u32> {
        match self {
            Slide::Cover { .. } => None,
            Slide::RoundIntro { round_number, .. } | Slide::Question { round_number, .. } => {
                Some(*round_number)
            }
        }
    }

    pub fn is_question(&self) -> bool {
        matches!(self, Slide::Question { .. })
    }
}

/// Where a round's slides live inside the deck. Drives the round tabs,
/// direct jumps and review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundIndexEntry {
    pub round_number: u32,
    pub title: String,
    /// Index of the round's intro slide.
    pub start_slide: usize,
    pub question_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    pub slides: Vec<Slide>,
    pub rounds: Vec<RoundIndexEntry>,
}

impl Deck {
    pub fn round_entry(&self, round_number: u32) -> Option<&RoundIndexEntry> {
        self.rounds.iter().find(|r| r.round_number == round_number)
    }
}

/// Flatten an event into its deck: one cover slide, then for every
/// round an intro slide followed by that round's question slides.
///
/// Rounds and questions keep their stored order; their position numbers
/// are displayed as-is, without any contiguity check. An event with no
/// rounds still yields a valid one-slide deck.
pub fn build(event: &Event, date_format: DateFormat) -> Deck {
    let mut slides = vec![Slide::Cover {
        title: event.title.clone(),
        date: date_format.render(event.date),
    }];
    let mut rounds = Vec::with_capacity(event.rounds.len());

    for er in &event.rounds {
        let start_slide = slides.len();
        slides.push(Slide::RoundIntro {
            round_number: er.position,
            round_title: er.round.title.clone(),
        });

        for rq in &er.round.questions {
            slides.push(Slide::Question {
                round_number: er.position,
                question_number: rq.position,
                text: rq.question.text.clone(),
                answer: rq.question.answer.clone(),
            });
        }

        rounds.push(RoundIndexEntry {
            round_number: er.position,
            title: er.round.title.clone(),
            start_slide,
            question_count: er.round.questions.len(),
        });
    }

    Deck { slides, rounds }
}
