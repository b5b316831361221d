//! The live presentation session: raw-mode terminal, one screen per
//! slide, single-key navigation.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use colored::{ColoredString, Colorize};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};

use crate::config::Config;
use crate::deck::{self, DateFormat, Slide};
use crate::navigator::Navigator;
use crate::parser::choices;
use crate::store;
use crate::theme::Theme;

struct PresenterApp {
    navigator: Navigator,
    theme: Theme,
}

impl PresenterApp {
    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        queue!(out, Clear(ClearType::All))?;

        self.draw_top_bar(out, cols)?;
        match self.navigator.current_slide() {
            Slide::Cover { title, date } => self.draw_cover(out, cols, rows, title, date),
            Slide::RoundIntro {
                round_number,
                round_title,
            } => self.draw_round_intro(out, cols, rows, *round_number, round_title),
            Slide::Question {
                round_number,
                question_number,
                text,
                answer,
            } => self.draw_question(
                out,
                cols,
                rows,
                *round_number,
                *question_number,
                text,
                answer,
            ),
        }?;
        self.draw_hint(out, cols, rows)?;
        out.flush()
    }

    /// Round tabs on the left, slide counter on the right. Tabs fall
    /// back to bare numbers when titles do not fit.
    fn draw_top_bar(&self, out: &mut impl Write, cols: u16) -> io::Result<()> {
        let nav = &self.navigator;
        let counter = format!("{} / {}", nav.current_index() + 1, nav.slide_count());
        let budget = cols.saturating_sub(counter.chars().count() as u16 + 4) as usize;

        let rounds = &nav.deck().rounds;
        let mut labels: Vec<String> = rounds
            .iter()
            .map(|r| format!("{} {}", r.round_number, r.title))
            .collect();
        if row_width(&labels) > budget {
            labels = rounds.iter().map(|r| r.round_number.to_string()).collect();
        }

        let mut x: u16 = 2;
        for (entry, label) in rounds.iter().zip(&labels) {
            let width = label.chars().count();
            if x as usize + width > budget {
                break;
            }
            queue!(out, MoveTo(x, 0), Print(self.tab_style(entry.round_number, label)))?;
            x += width as u16 + 3;
        }

        let counter_col = cols.saturating_sub(counter.chars().count() as u16 + 2);
        queue!(out, MoveTo(counter_col, 0), Print(counter.color(self.theme.dim)))
    }

    fn tab_style(&self, round_number: u32, label: &str) -> ColoredString {
        let nav = &self.navigator;
        if nav.reviewing_round() == Some(round_number) && nav.in_review_mode() {
            label.color(self.theme.answer).bold()
        } else if nav.reviewing_round().is_none()
            && nav.current_slide().round_number() == Some(round_number)
        {
            label.color(self.theme.accent).bold()
        } else {
            label.color(self.theme.dim)
        }
    }

    fn draw_cover(
        &self,
        out: &mut impl Write,
        cols: u16,
        rows: u16,
        title: &str,
        date: &str,
    ) -> io::Result<()> {
        let title_lines = wrap(title, content_width(cols));
        let mut row = center_top(rows, title_lines.len() as u16 + 2);
        for line in &title_lines {
            queue_centered(out, cols, row, &line.color(self.theme.heading).bold())?;
            row += 1;
        }
        queue_centered(out, cols, row + 1, &date.color(self.theme.dim))
    }

    fn draw_round_intro(
        &self,
        out: &mut impl Write,
        cols: u16,
        rows: u16,
        round_number: u32,
        round_title: &str,
    ) -> io::Result<()> {
        let title_lines = wrap(round_title, content_width(cols));
        let top = center_top(rows, title_lines.len() as u16 + 2);

        let label = format!("ROUND {round_number}");
        queue_centered(out, cols, top, &label.color(self.theme.accent).bold())?;

        let mut row = top + 2;
        for line in &title_lines {
            queue_centered(out, cols, row, &line.color(self.theme.heading).bold())?;
            row += 1;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_question(
        &self,
        out: &mut impl Write,
        cols: u16,
        rows: u16,
        round_number: u32,
        question_number: u32,
        text: &str,
        answer: &str,
    ) -> io::Result<()> {
        let width = content_width(cols);
        let parsed = choices::extract(text);
        let stem_lines = wrap(&parsed.stem, width);
        let option_lines: Vec<String> = parsed
            .options
            .iter()
            .flat_map(|option| wrap(option, width))
            .collect();
        let show_answer = self.navigator.should_show_answer();

        let mut height = 2 + stem_lines.len() as u16;
        if parsed.is_multiple_choice() {
            height += option_lines.len() as u16 + 1;
        }
        if show_answer {
            height += 2;
        }
        let top = center_top(rows, height);

        let mut label = format!("Round {round_number} · Question {question_number}");
        if self.navigator.in_review_mode() {
            label.push_str(" · Review");
        }
        queue_centered(out, cols, top, &label.color(self.theme.accent))?;

        let mut row = top + 2;
        for line in &stem_lines {
            queue_centered(out, cols, row, &line.color(self.theme.heading).bold())?;
            row += 1;
        }

        if parsed.is_multiple_choice() {
            row += 1;
            // Options share a left edge; the block as a whole is centered.
            let block_width = option_lines
                .iter()
                .map(|l| l.chars().count())
                .max()
                .unwrap_or(0) as u16;
            let left = cols.saturating_sub(block_width) / 2;
            for line in &option_lines {
                queue!(out, MoveTo(left, row), Print(line.color(self.theme.body)))?;
                row += 1;
            }
        }

        if show_answer {
            row += 1;
            for line in wrap(&format!("Answer: {answer}"), width) {
                queue_centered(out, cols, row, &line.color(self.theme.answer).bold())?;
                row += 1;
            }
        }
        Ok(())
    }

    fn draw_hint(&self, out: &mut impl Write, cols: u16, rows: u16) -> io::Result<()> {
        let hint = "→ next · ← back · 1-9 round · r review · d theme · Esc quit";
        queue_centered(out, cols, rows.saturating_sub(1), &hint.color(self.theme.dim))
    }
}

fn queue_centered(
    out: &mut impl Write,
    cols: u16,
    row: u16,
    text: &ColoredString,
) -> io::Result<()> {
    let width = text.chars().count() as u16;
    let col = cols.saturating_sub(width) / 2;
    queue!(out, MoveTo(col, row), Print(text))
}

fn content_width(cols: u16) -> usize {
    (cols.saturating_sub(8) as usize).min(76)
}

fn center_top(rows: u16, height: u16) -> u16 {
    // Leave the top bar row free even on tiny terminals.
    (rows.saturating_sub(height) / 2).max(2)
}

fn row_width(labels: &[String]) -> usize {
    let gaps = labels.len().saturating_sub(1) * 3;
    labels.iter().map(|l| l.chars().count()).sum::<usize>() + gaps
}

/// Greedy word wrap. Overlong words get a line of their own instead of
/// being split. Always yields at least one line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for source_line in text.lines() {
        let mut current = String::new();
        for word in source_line.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn run_session(app: &mut PresenterApp, out: &mut impl Write) -> Result<()> {
    loop {
        app.draw(out)?;

        if let TermEvent::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                break;
            }
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => break,
                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => app.navigator.advance(),
                KeyCode::Left => app.navigator.retreat(),
                KeyCode::Char('d') => app.theme = app.theme.toggled(),
                KeyCode::Char('r') => {
                    if let Some(number) = app.navigator.current_slide().round_number() {
                        app.navigator.review_round(number);
                    }
                }
                KeyCode::Char(c @ '1'..='9') => {
                    if let Some(number) = c.to_digit(10) {
                        app.navigator.jump_to_round(number);
                    }
                }
                _ => {}
            }
        }
        // Resize and other events just trigger the redraw above.
    }
    Ok(())
}

pub fn run(file: PathBuf, start_round: Option<u32>) -> Result<()> {
    let event = store::load_event(&file)?;

    let config = Config::load_or_default();
    let theme = Theme::from_name(config.default_theme().unwrap_or("dark"));
    let date_format = DateFormat::from_name(config.default_date_format().unwrap_or("full"));

    let mut navigator = Navigator::new(deck::build(&event, date_format));
    if let Some(number) = start_round {
        navigator.jump_to_round(number);
    }

    let mut app = PresenterApp { navigator, theme };

    enable_raw_mode()?;
    let mut out = io::stdout();
    execute!(out, EnterAlternateScreen, Hide)?;

    let result = run_session(&mut app, &mut out);

    execute!(out, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_plain_text() {
        let lines = wrap("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_keeps_source_lines() {
        let lines = wrap("first\nsecond line", 20);
        assert_eq!(lines, vec!["first", "second line"]);
    }

    #[test]
    fn test_wrap_empty_input() {
        assert_eq!(wrap("", 20), vec![String::new()]);
    }

    #[test]
    fn test_wrap_overlong_word() {
        let lines = wrap("a extraordinarily b", 6);
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
    }
}
