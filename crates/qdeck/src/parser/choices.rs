//! Splits question text into a stem and its `A)`-style answer options,
//! for questions that embed multiple choice inline:
//!
//! ```text
//! Which planet is known as the Red Planet? A) Venus B) Mars C) Jupiter D) Saturn
//! ```
//!
//! Detection is purely textual. Text with no option markers is a
//! short-answer question and comes back whole; malformed runs pass
//! through in the order they appear.

use std::sync::LazyLock;

use regex::Regex;

/// Stem before the first option marker, then the rest of the text.
/// `(?s)` so stems and option runs may span lines.
static OPTION_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(.*?)\s*([A-D][).].*)$").expect("Invalid option run regex")
});

/// A position that starts a new option inside a run.
static OPTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-D][).]").expect("Invalid option marker regex"));

/// Question text split for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuestionText {
    /// The question itself, marker run removed, trimmed.
    pub stem: String,
    /// Options with their markers attached (`"B) Mars"`). Empty for
    /// short-answer questions.
    pub options: Vec<String>,
}

impl ParsedQuestionText {
    pub fn is_multiple_choice(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Split raw question text at the first `A)` / `A.` style marker.
///
/// Everything from that marker on is cut into one option per marker;
/// each option keeps its marker and is trimmed. Without any marker the
/// whole text is the stem.
pub fn extract(raw: &str) -> ParsedQuestionText {
    let Some(caps) = OPTION_RUN.captures(raw) else {
        return ParsedQuestionText {
            stem: raw.to_string(),
            options: Vec::new(),
        };
    };

    let stem = caps[1].trim().to_string();
    let options = split_options(&caps[2]);
    ParsedQuestionText { stem, options }
}

/// Cut an option run at every marker position, keeping markers attached
/// to the option they introduce.
fn split_options(run: &str) -> Vec<String> {
    let starts: Vec<usize> = OPTION_MARKER.find_iter(run).map(|m| m.start()).collect();

    let mut options = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(run.len());
        let option = run[start..end].trim();
        if !option.is_empty() {
            options.push(option.to_string());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_four_options() {
        let parsed =
            extract("Which planet is known as the Red Planet? A) Venus B) Mars C) Jupiter D) Saturn");
        assert_eq!(parsed.stem, "Which planet is known as the Red Planet?");
        assert_eq!(
            parsed.options,
            vec!["A) Venus", "B) Mars", "C) Jupiter", "D) Saturn"]
        );
        assert!(parsed.is_multiple_choice());
    }

    #[test]
    fn test_extract_short_answer() {
        let parsed = extract("What is the capital of France?");
        assert_eq!(parsed.stem, "What is the capital of France?");
        assert!(parsed.options.is_empty());
        assert!(!parsed.is_multiple_choice());
    }

    #[test]
    fn test_extract_dot_markers() {
        let parsed = extract("Pick one: A. first B. second");
        assert_eq!(parsed.stem, "Pick one:");
        assert_eq!(parsed.options, vec!["A. first", "B. second"]);
    }

    #[test]
    fn test_extract_options_on_separate_lines() {
        let parsed = extract("Largest ocean?\nA) Atlantic\nB) Pacific");
        assert_eq!(parsed.stem, "Largest ocean?");
        assert_eq!(parsed.options, vec!["A) Atlantic", "B) Pacific"]);
    }

    #[test]
    fn test_extract_multiline_stem() {
        let parsed = extract("Read the quote.\nWho said it? A) Bohr B) Einstein");
        assert_eq!(parsed.stem, "Read the quote.\nWho said it?");
        assert_eq!(parsed.options, vec!["A) Bohr", "B) Einstein"]);
    }

    #[test]
    fn test_extract_two_options_only() {
        let parsed = extract("True or false, basically? A) True B) False");
        assert_eq!(parsed.options.len(), 2);
    }

    #[test]
    fn test_extract_empty_input() {
        let parsed = extract("");
        assert_eq!(parsed.stem, "");
        assert!(parsed.options.is_empty());
    }

    #[test]
    fn test_extract_malformed_order_passes_through() {
        // Out-of-order markers are not corrected, just split.
        let parsed = extract("Odd one? B) beta A) alpha");
        assert_eq!(parsed.stem, "Odd one?");
        assert_eq!(parsed.options, vec!["B) beta", "A) alpha"]);
    }

    #[test]
    fn test_extract_marker_with_no_stem() {
        let parsed = extract("A) yes B) no");
        assert_eq!(parsed.stem, "");
        assert_eq!(parsed.options, vec!["A) yes", "B) no"]);
    }
}
