use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single trivia question: the text the host reads out and the answer
/// they hold back until the review. Ids come from whichever store loaded
/// the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub answer: String,
}

/// A question slotted into a round at a 1-based display position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundQuestion {
    pub position: u32,
    pub question: Question,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub id: String,
    pub title: String,
    pub topic: Option<String>,
    pub questions: Vec<RoundQuestion>,
}

/// A round slotted into an event at a 1-based display position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRound {
    pub position: u32,
    pub round: Round,
}

/// A full trivia event: ordered rounds of ordered questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub status: EventStatus,
    pub rounds: Vec<EventRound>,
}

impl Event {
    /// Total number of questions across all rounds.
    pub fn question_count(&self) -> usize {
        self.rounds.iter().map(|er| er.round.questions.len()).sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    #[default]
    Draft,
    Active,
    Completed,
}

impl EventStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::Active => "active",
            EventStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
