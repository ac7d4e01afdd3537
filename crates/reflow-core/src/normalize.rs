//! Text normalization for spatially reconstructed text.
//!
//! Text joined from page blocks loses the line-wrapping cues of the source
//! document: paragraphs arrive as many short lines, dash and bullet markers
//! sit on their own lines, and words are split by hyphenation. [`normalize`]
//! rebuilds paragraph structure in two passes:
//!
//! 1. A single forward scan over the lines that merges continuations into
//!    "logical lines" (see [`LineKind`] for the rules, in priority order).
//! 2. A fixed sequence of regex cleanups over the joined result.

use std::sync::LazyLock;

use regex::Regex;

/// Canonical dash used when joining dash continuations.
pub const EN_DASH: char = '\u{2013}';

/// Canonical bullet prefix for bullet lines.
pub const BULLET_PREFIX: &str = "\u{2022} ";

static TABS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\t+").expect("valid regex"));
static DASH_WITH_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\u{2013}\u{2014}-]\s+(.*)$").expect("valid regex"));
static DASH_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\u{2013}\u{2014}-]\s*$").expect("valid regex"));
static BULLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[.*\u{2022}\u{25E6}\u{2043}]\s*(.*)$").expect("valid regex")
});
static HYPHEN_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\n(\w)").expect("valid regex"));
static DASH_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[\u{2013}\u{2014}]\s*").expect("valid regex"));
static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("valid regex"));
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// How a single trimmed input line is treated by the first pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty after trimming; becomes at most one blank logical line.
    Blank,
    /// A dash followed by text: appended to the previous logical line.
    DashWithText(&'a str),
    /// A dash alone: joins the previous logical line with the next non-blank line.
    DashOnly,
    /// A bullet glyph followed by text: always starts a new logical line.
    Bullet(&'a str),
    /// Anything else: hyphen join, continuation, or a new logical line.
    Text,
}

impl<'a> LineKind<'a> {
    /// Classify a trimmed line by its leading marker.
    pub fn of(line: &'a str) -> Self {
        if line.is_empty() {
            return LineKind::Blank;
        }
        if let Some(content) = DASH_WITH_TEXT.captures(line).and_then(|c| c.get(1)) {
            return LineKind::DashWithText(content.as_str().trim());
        }
        if DASH_ONLY.is_match(line) {
            return LineKind::DashOnly;
        }
        if let Some(content) = BULLET.captures(line).and_then(|c| c.get(1)) {
            return LineKind::Bullet(content.as_str().trim());
        }
        LineKind::Text
    }
}

/// Normalize raw multi-line text into cleaned paragraphs.
///
/// Total over all inputs; `normalize("")` is `""`.
///
/// # Example
///
/// ```
/// use reflow_core::normalize;
///
/// assert_eq!(normalize("Hello wor-\nld this is\na test."), "Hello world this is a test.");
/// assert_eq!(normalize("Item one\n\u{2013}\nItem two"), "Item one \u{2013} Item two");
/// ```
pub fn normalize(raw: &str) -> String {
    let logical = merge_lines(raw);
    cleanup(&logical.join("\n"))
}

/// First pass: rebuild logical lines from raw text.
///
/// Line endings are unified and tab runs become a single space before the
/// text is split into lines.
pub fn merge_lines(raw: &str) -> Vec<String> {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    let text = TABS.replace_all(&unified, " ");
    let lines: Vec<&str> = text.split('\n').collect();

    let mut out: Vec<String> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();
        i += 1;

        match LineKind::of(line) {
            LineKind::Blank => {
                if out.last().is_none_or(|last| !last.is_empty()) {
                    out.push(String::new());
                }
            }
            LineKind::DashWithText(content) => match out.last_mut() {
                Some(prev) => *prev = dash_join(prev.as_str(), content),
                None => out.push(format!("{EN_DASH} {content}")),
            },
            LineKind::DashOnly => {
                // Skip every blank line between the dash and the next content.
                let next = lines[i..]
                    .iter()
                    .position(|l| !l.trim().is_empty())
                    .map(|offset| i + offset);
                match (out.last_mut(), next) {
                    (Some(prev), Some(j)) => {
                        *prev = dash_join(prev.as_str(), lines[j].trim());
                        i = j + 1;
                    }
                    _ => out.push(EN_DASH.to_string()),
                }
            }
            LineKind::Bullet(content) => out.push(format!("{BULLET_PREFIX}{content}")),
            LineKind::Text => match out.last_mut() {
                Some(prev) if is_hyphen_break(prev.as_str()) => {
                    // Drop the break hyphen and glue the word halves together.
                    prev.truncate(prev.trim_end().len() - 1);
                    prev.push_str(line);
                }
                Some(prev) if continues(prev.as_str(), line) => {
                    prev.push(' ');
                    prev.push_str(line);
                }
                _ => out.push(line.to_string()),
            },
        }
    }

    out
}

/// Second pass: regex cleanups over the joined logical lines.
pub fn cleanup(text: &str) -> String {
    let text = HYPHEN_BREAK.replace_all(text, "$1");
    let text = DASH_SPACING.replace_all(&text, " \u{2013} ");
    let text = SPACE_RUNS.replace_all(&text, " ");
    let text = BLANK_RUNS.replace_all(&text, "\n\n");
    text.trim().to_string()
}

fn dash_join(prev: &str, next: &str) -> String {
    format!("{} {EN_DASH} {next}", prev.trim_end())
}

/// Whether `prev` ends in a word-break hyphen that the next line completes.
///
/// Bullet lines are never merge targets here; pass 2 still removes a
/// `-\n` break before a word character.
fn is_hyphen_break(prev: &str) -> bool {
    !prev.starts_with(BULLET_PREFIX) && prev.trim_end().ends_with('-')
}

/// Whether `line` is a soft-wrapped continuation of `prev`.
fn continues(prev: &str, line: &str) -> bool {
    let starts_lower = line
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    let prev_terminated = prev
        .chars()
        .last()
        .is_some_and(|c| matches!(c, '.' | '?' | '!' | ':' | ';'));
    starts_lower && !prev_terminated && !prev.starts_with(BULLET_PREFIX)
}
