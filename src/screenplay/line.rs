/*!
 * Line and script containers.
 *
 * A script is held as an ordered list of immutable lines. Each line keeps
 * its original text next to the whitespace-trimmed form the classifier reads.
 */

use serde::{Deserialize, Serialize};

/// Title used when a script has no non-blank line.
pub const UNTITLED_SCRIPT: &str = "Untitled Script";

/// A single physical line of a screenplay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// 1-based position in source order
    pub index: usize,

    /// Original text, surrounding whitespace included
    pub text: String,

    /// Text with surrounding whitespace removed
    pub trimmed: String,
}

impl Line {
    /// Create a line from its 1-based index and original text.
    pub fn new(index: usize, text: &str) -> Self {
        Self {
            index,
            text: text.to_string(),
            trimmed: text.trim().to_string(),
        }
    }

    /// Whether the line holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.trimmed.split_whitespace().count()
    }

    /// Length of the original text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// An ordered screenplay, split into lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// All lines in source order
    pub lines: Vec<Line>,
}

impl Script {
    /// Split raw text into lines. `\r\n` endings are accepted.
    pub fn parse(text: &str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .map(|(i, raw)| Line::new(i + 1, raw))
            .collect();

        Self { lines }
    }

    /// Parse the script after trimming the text as a whole.
    ///
    /// Report generators use this form, so their line numbers are counted
    /// from the first non-blank line of the input.
    pub fn parse_trimmed(text: &str) -> Self {
        Self::parse(text.trim())
    }

    /// The first non-blank line, or a placeholder title.
    pub fn title(&self) -> &str {
        self.lines
            .iter()
            .find(|line| !line.is_blank())
            .map(|line| line.trimmed.as_str())
            .unwrap_or(UNTITLED_SCRIPT)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
