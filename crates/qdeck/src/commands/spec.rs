/// Print the round and event file format reference.
pub fn run(short: bool) {
    if short {
        println!("{SHORT_SPEC}");
    } else {
        println!("{FULL_SPEC}");
    }
}

const SHORT_SPEC: &str = r#"qdeck quick reference

Round file (rounds/capitals.md):

  ---
  title: Capitals
  ---

  1. What is the capital of France?
  Answer: Paris

  2. Which planet is known as the Red Planet? A) Venus B) Mars C) Jupiter D) Saturn
  Answer: B) Mars

Event file (friday.yaml):

  title: Friday Night Trivia
  date: 2026-03-06
  rounds:
    - rounds/capitals.md

Present:  qdeck friday.yaml
Keys:     Right/Space/Enter next · Left back · 1-9 jump · r review · d theme · Esc quit"#;

const FULL_SPEC: &str = r#"QDECK FORMAT SPECIFICATION

ROUND FILES

  A round is a markdown file. Questions are a numbered list; each
  question carries an Answer: line. Blank lines between questions are
  optional but keep files readable.

    1. What is the capital of France?
    Answer: Paris

    2. In which year did the Berlin Wall fall?
    Answer: 1989

  Question text may span several lines; everything up to the Answer:
  line belongs to the question. The numbering in the file is cosmetic:
  questions are renumbered from 1 when presented or rewritten with
  `qdeck fmt`.

  A question without an Answer: line is kept but flagged as incomplete
  by `qdeck check`.

MULTIPLE CHOICE

  Write the options inline after the question, using A) through D)
  markers (A. works too). They are laid out one per line on the slide:

    3. Which planet is known as the Red Planet? A) Venus B) Mars C) Jupiter D) Saturn
    Answer: B) Mars

FRONTMATTER

  A round file may start with YAML frontmatter to set a display title
  and a topic. Without one, the title is derived from the file name
  (movie-quotes.md presents as "Movie Quotes").

    ---
    title: Movie Quotes
    topic: movies
    ---

EVENT FILES

  An event is a YAML file that gives the night a title and a date, and
  lists round files relative to itself, in play order:

    title: Friday Night Trivia
    date: 2026-03-06
    status: draft          # draft | active | completed
    rounds:
      - rounds/general-knowledge.md
      - rounds/movie-quotes.md

PRESENTING

  qdeck friday.yaml            cover, then each round as an intro slide
                               followed by its questions
  qdeck friday.yaml --round 2  start on round 2

  Right/Space/Enter  next slide
  Left               previous slide
  1-9                jump to a round's intro
  r                  review the current round with answers; the first
                     press on each question reveals its answer, the
                     next moves on
  d                  toggle dark/light theme
  Esc or q           quit

  Answers never show outside a review.

CONFIGURATION

  qdeck config show
  qdeck config set defaults.theme dark          # light | dark
  qdeck config set defaults.date_format full    # full | short"#;
