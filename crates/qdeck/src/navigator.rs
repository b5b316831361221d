//! Presentation state machine: a cursor over a built deck, plus review
//! mode for walking back through a round with answers.

use crate::deck::{Deck, Slide};

/// Drives a live session over a deck. Every operation is a single
/// synchronous transition; boundary overruns and unknown round numbers
/// are no-ops rather than errors.
///
/// Answers stay hidden during normal playthrough. Reviewing a round
/// revisits its questions and lets each answer be revealed with an
/// extra advance.
#[derive(Debug)]
pub struct Navigator {
    deck: Deck,
    current: usize,
    reviewing_round: Option<u32>,
    answer_revealed: bool,
}

impl Navigator {
    /// Takes ownership of the deck for the session. A built deck always
    /// holds at least the cover slide.
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            current: 0,
            reviewing_round: None,
            answer_revealed: false,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.deck.slides.len()
    }

    pub fn current_slide(&self) -> &Slide {
        &self.deck.slides[self.current]
    }

    pub fn reviewing_round(&self) -> Option<u32> {
        self.reviewing_round
    }

    /// Whether the cursor sits on a slide of the round under review.
    /// Advancing past the round's end leaves review mode implicitly.
    pub fn in_review_mode(&self) -> bool {
        match self.reviewing_round {
            Some(number) => self.current_slide().round_number() == Some(number),
            None => false,
        }
    }

    /// Answers only ever show in review mode, and only after the
    /// reveal step.
    pub fn should_show_answer(&self) -> bool {
        self.in_review_mode() && self.answer_revealed
    }

    /// Move forward one step. With a review target set, a question's
    /// answer is revealed first and the next advance moves on. On the
    /// last slide this is a no-op.
    pub fn advance(&mut self) {
        if self.reviewing_round.is_some()
            && self.current_slide().is_question()
            && !self.answer_revealed
        {
            self.answer_revealed = true;
            return;
        }
        if self.current + 1 < self.deck.slides.len() {
            self.current += 1;
            self.answer_revealed = false;
        }
    }

    /// Move back one slide, hiding any revealed answer. The review
    /// target is kept. On the first slide this is a no-op.
    pub fn retreat(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.answer_revealed = false;
        }
    }

    /// Jump to a round's intro slide, leaving review mode. Unknown
    /// round numbers leave the state untouched.
    pub fn jump_to_round(&mut self, round_number: u32) {
        if let Some(entry) = self.deck.round_entry(round_number) {
            self.current = entry.start_slide;
            self.reviewing_round = None;
            self.answer_revealed = false;
        }
    }

    /// Enter review mode on a round's first question, skipping its
    /// intro. Unknown rounds and rounds without questions are no-ops.
    pub fn review_round(&mut self, round_number: u32) {
        if let Some(entry) = self.deck.round_entry(round_number) {
            if entry.question_count == 0 {
                return;
            }
            self.current = entry.start_slide + 1;
            self.reviewing_round = Some(round_number);
            self.answer_revealed = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{self, DateFormat};
    use crate::model::{Event, EventRound, EventStatus, Question, Round, RoundQuestion};
    use chrono::NaiveDate;

    fn round(number: u32, title: &str, question_count: u32) -> EventRound {
        let id = title.to_lowercase();
        EventRound {
            position: number,
            round: Round {
                id: id.clone(),
                title: title.to_string(),
                topic: None,
                questions: (1..=question_count)
                    .map(|i| RoundQuestion {
                        position: i,
                        question: Question {
                            id: format!("{id}.{i}"),
                            text: format!("{title} question {i}"),
                            answer: format!("{title} answer {i}"),
                        },
                    })
                    .collect(),
            },
        }
    }

    fn navigator(rounds: Vec<EventRound>) -> Navigator {
        let event = Event {
            id: "quiz".to_string(),
            title: "Quiz".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
            status: EventStatus::Active,
            rounds,
        };
        Navigator::new(deck::build(&event, DateFormat::Full))
    }

    /// Cover, intro 1, two questions, intro 2, two questions: 7 slides.
    fn two_round_navigator() -> Navigator {
        navigator(vec![round(1, "History", 2), round(2, "Music", 2)])
    }

    #[test]
    fn test_initial_state() {
        let nav = two_round_navigator();
        assert_eq!(nav.current_index(), 0);
        assert!(nav.current_slide().round_number().is_none());
        assert_eq!(nav.reviewing_round(), None);
        assert!(!nav.should_show_answer());
    }

    #[test]
    fn test_advance_stops_at_last_slide() {
        let mut nav = two_round_navigator();
        for _ in 0..20 {
            nav.advance();
        }
        assert_eq!(nav.current_index(), nav.slide_count() - 1);
        nav.advance();
        assert_eq!(nav.current_index(), nav.slide_count() - 1);
    }

    #[test]
    fn test_retreat_stops_at_cover() {
        let mut nav = two_round_navigator();
        nav.retreat();
        assert_eq!(nav.current_index(), 0);

        nav.advance();
        nav.retreat();
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_answers_stay_hidden_without_review() {
        let mut nav = two_round_navigator();
        for _ in 0..nav.slide_count() {
            assert!(!nav.should_show_answer());
            nav.advance();
        }
    }

    #[test]
    fn test_jump_to_round() {
        let mut nav = two_round_navigator();
        nav.jump_to_round(2);
        assert_eq!(nav.current_index(), 4);
        assert!(matches!(
            nav.current_slide(),
            Slide::RoundIntro { round_number: 2, .. }
        ));
    }

    #[test]
    fn test_jump_to_unknown_round_is_noop() {
        let mut nav = two_round_navigator();
        nav.advance();
        nav.jump_to_round(9);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_jump_clears_review_state() {
        let mut nav = two_round_navigator();
        nav.review_round(1);
        nav.advance(); // reveal
        assert!(nav.should_show_answer());

        nav.jump_to_round(2);
        assert_eq!(nav.reviewing_round(), None);
        assert!(!nav.should_show_answer());
    }

    #[test]
    fn test_review_round_lands_on_first_question() {
        let mut nav = two_round_navigator();
        nav.review_round(2);
        assert_eq!(nav.current_index(), 5);
        assert!(nav.current_slide().is_question());
        assert_eq!(nav.reviewing_round(), Some(2));
        assert!(nav.in_review_mode());
        assert!(!nav.should_show_answer());
    }

    #[test]
    fn test_review_reveals_then_moves() {
        let mut nav = two_round_navigator();
        nav.review_round(1);
        let question_index = nav.current_index();

        // First advance reveals in place, second one moves on.
        nav.advance();
        assert_eq!(nav.current_index(), question_index);
        assert!(nav.should_show_answer());

        nav.advance();
        assert_eq!(nav.current_index(), question_index + 1);
        assert!(!nav.should_show_answer());
    }

    #[test]
    fn test_retreat_hides_answer_but_keeps_review() {
        let mut nav = two_round_navigator();
        nav.review_round(1);
        nav.advance(); // reveal
        nav.advance(); // second question
        nav.retreat();

        assert_eq!(nav.reviewing_round(), Some(1));
        assert!(nav.in_review_mode());
        assert!(!nav.should_show_answer());
    }

    #[test]
    fn test_review_ends_at_round_boundary() {
        let mut nav = two_round_navigator();
        nav.review_round(1);
        nav.advance(); // reveal q1
        nav.advance(); // q2
        nav.advance(); // reveal q2
        nav.advance(); // round 2 intro

        assert!(matches!(
            nav.current_slide(),
            Slide::RoundIntro { round_number: 2, .. }
        ));
        // The target lingers but the cursor has left the round.
        assert_eq!(nav.reviewing_round(), Some(1));
        assert!(!nav.in_review_mode());
        assert!(!nav.should_show_answer());
    }

    #[test]
    fn test_review_unknown_round_is_noop() {
        let mut nav = two_round_navigator();
        nav.review_round(7);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.reviewing_round(), None);
    }

    #[test]
    fn test_review_empty_round_is_noop() {
        let mut nav = navigator(vec![round(1, "History", 2), round(2, "Empty", 0)]);
        nav.review_round(2);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.reviewing_round(), None);
    }
}
