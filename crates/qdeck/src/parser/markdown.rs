//! Codec for the plain-markdown question format.
//!
//! A round file body is a numbered list where each item carries an
//! `Answer:` line:
//!
//! ```text
//! 1. What is the capital of France?
//! Answer: Paris
//!
//! 2. Which planet is known as the Red Planet? A) Venus B) Mars C) Jupiter D) Saturn
//! Answer: B) Mars
//! ```
//!
//! Decoding is strictly line-oriented and never fails; whatever does not
//! parse as a marker or an answer becomes question text.

use super::QuestionDraft;

/// Decode question markdown into an ordered list of drafts.
///
/// Each line is trimmed and matched against, in order:
/// 1. An `Answer:` prefix (any case) closes the question being
///    accumulated; the rest of the line is its answer. An answer with no
///    preceding question text is dropped silently.
/// 2. A numbered-item marker (`3. `) closes any question in progress
///    with an empty answer and starts the next one with the content
///    after the marker.
/// 3. Anything else continues the current question; blank lines before
///    the first content are skipped.
///
/// A trailing question with no `Answer:` line is kept with an empty
/// answer so callers can flag it as incomplete.
pub fn decode(text: &str) -> Vec<QuestionDraft> {
    let mut drafts = Vec::new();
    let mut pending: Vec<String> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();

        if let Some(answer) = answer_line(trimmed) {
            flush(&mut drafts, &pending, answer);
            pending.clear();
            continue;
        }

        if let Some(content) = numbered_item(trimmed) {
            if !pending.is_empty() {
                flush(&mut drafts, &pending, "");
            }
            pending.clear();
            pending.push(content.to_string());
            continue;
        }

        if !trimmed.is_empty() || !pending.is_empty() {
            pending.push(trimmed.to_string());
        }
    }

    flush(&mut drafts, &pending, "");
    drafts
}

/// Encode drafts back into canonical question markdown: items numbered
/// from 1 in order, one `Answer:` line each, one blank line between
/// items. `decode(encode(drafts))` preserves every text and answer.
pub fn encode(drafts: &[QuestionDraft]) -> String {
    drafts
        .iter()
        .enumerate()
        .map(|(i, draft)| format!("{}. {}\nAnswer: {}", i + 1, draft.text, draft.answer))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Emit the accumulated lines as a draft, unless they trim to nothing.
fn flush(drafts: &mut Vec<QuestionDraft>, pending: &[String], answer: &str) {
    let text = pending.join("\n");
    let text = text.trim();
    if !text.is_empty() {
        drafts.push(QuestionDraft::new(text, answer));
    }
}

/// Matches an `Answer:` line in any case; returns the answer text.
fn answer_line(line: &str) -> Option<&str> {
    let prefix = line.get(..7)?;
    if prefix.eq_ignore_ascii_case("answer:") {
        Some(line[7..].trim())
    } else {
        None
    }
}

/// Matches a `3. content` numbered item; returns the content after the
/// marker with leading whitespace stripped.
fn numbered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    Some(rest.trim_start())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_input() {
        assert!(decode("").is_empty());
        assert!(decode("\n\n   \n").is_empty());
    }

    #[test]
    fn test_decode_single_question() {
        let drafts = decode("1. What is the capital of France?\nAnswer: Paris");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].text, "What is the capital of France?");
        assert_eq!(drafts[0].answer, "Paris");
        assert!(drafts[0].is_new);
        assert!(drafts[0].id.is_none());
    }

    #[test]
    fn test_decode_numbered_questions() {
        let drafts = decode("1. Q1\nAnswer: A1\n\n2. Q2\nAnswer: A2");
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].text, "Q1");
        assert_eq!(drafts[0].answer, "A1");
        assert_eq!(drafts[1].text, "Q2");
        assert_eq!(drafts[1].answer, "A2");
    }

    #[test]
    fn test_decode_case_insensitive_answer() {
        let drafts = decode("1. Q\nANSWER: loud\n\n2. R\nanswer: quiet");
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].answer, "loud");
        assert_eq!(drafts[1].answer, "quiet");
    }

    #[test]
    fn test_decode_answer_without_space() {
        let drafts = decode("1. Q\nAnswer:Paris");
        assert_eq!(drafts[0].answer, "Paris");
    }

    #[test]
    fn test_decode_multiline_question_text() {
        let drafts = decode("1. First line\nsecond line\nAnswer: X");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].text, "First line\nsecond line");
    }

    #[test]
    fn test_decode_keeps_blank_line_inside_question() {
        let drafts = decode("1. Setup\n\npunchline?\nAnswer: X");
        assert_eq!(drafts[0].text, "Setup\n\npunchline?");
    }

    #[test]
    fn test_decode_dangling_question_gets_empty_answer() {
        let drafts = decode("1. Dangling question with no answer");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].answer, "");

        let drafts = decode("1. Q1\nAnswer: A1\n\n2. Q2");
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[1].text, "Q2");
        assert_eq!(drafts[1].answer, "");
        assert!(!drafts[1].is_complete());
    }

    #[test]
    fn test_decode_consecutive_markers_split_without_answers() {
        let drafts = decode("1. Q1\n2. Q2\n3. Q3");
        assert_eq!(drafts.len(), 3);
        assert!(drafts.iter().all(|d| d.answer.is_empty()));
    }

    #[test]
    fn test_decode_orphan_answer_dropped() {
        assert!(decode("Answer: nothing asked").is_empty());
        let drafts = decode("Answer: orphan\n\n1. Q\nAnswer: A");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].text, "Q");
    }

    #[test]
    fn test_decode_text_before_first_marker() {
        // Unnumbered text still forms a question once an answer closes it.
        let drafts = decode("Warm-up: name any ocean.\nAnswer: Pacific");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].text, "Warm-up: name any ocean.");
        assert_eq!(drafts[0].answer, "Pacific");
    }

    #[test]
    fn test_decode_bare_marker_contributes_nothing() {
        assert!(decode("1.\nAnswer: X").is_empty());
    }

    #[test]
    fn test_encode_two_questions() {
        let drafts = vec![
            QuestionDraft::new("Q1", "A1"),
            QuestionDraft::new("Q2", "A2"),
        ];
        assert_eq!(encode(&drafts), "1. Q1\nAnswer: A1\n\n2. Q2\nAnswer: A2");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_encode_renumbers_from_one() {
        let drafts = decode("7. Late start\nAnswer: yes");
        assert_eq!(encode(&drafts), "1. Late start\nAnswer: yes");
    }

    #[test]
    fn test_round_trip_preserves_content() {
        let original = "1. What is the capital of France?\nAnswer: Paris\n\n\
                        2. Which planet is the Red Planet? A) Venus B) Mars C) Jupiter D) Saturn\nAnswer: B) Mars\n\n\
                        3. Two line\nquestion here\nAnswer: Sure";
        let drafts = decode(original);
        let reencoded = encode(&drafts);
        let reparsed = decode(&reencoded);
        assert_eq!(drafts, reparsed);
        // A second pass must be byte-stable.
        assert_eq!(encode(&reparsed), reencoded);
    }

    #[test]
    fn test_decode_sample_round() {
        let content = include_str!("../../../../sample-events/rounds/lightning.md");
        let drafts = decode(content);
        assert_eq!(drafts.len(), 3, "lightning round should have 3 questions");
        assert!(drafts.iter().all(|d| d.is_complete()));
    }
}
