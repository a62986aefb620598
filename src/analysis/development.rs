/*!
 * Character development auditing.
 *
 * Tracks where each character is first introduced (by cue, or by an all-caps
 * name inside an action line), how often they speak and in how many scenes.
 * Dialogue only counts while a speaker is active; otherwise the line is
 * treated as action.
 */

use std::collections::BTreeSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::tally::LineTally;
use crate::screenplay::{AttributionRule, Category, ContextScanner, ResolutionPolicy, Script};

/// Runs of capitals inside action text that look like names.
static CAPITALIZED_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][A-Z ]{1,39}\b").expect("Invalid capitalized name regex")
});

/// First appearance of a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Introduction {
    pub name: String,

    /// 1-based line of the first appearance
    pub line: usize,
}

/// Speaking record of one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerPresence {
    pub name: String,
    pub dialogue_lines: usize,

    /// Scene numbers the character speaks in, 0 for lines before the first heading
    pub scenes: BTreeSet<usize>,
}

/// Character development across the whole script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DevelopmentReport {
    /// Characters in order of first appearance
    pub introduced: Vec<Introduction>,

    /// Characters in order of first spoken line
    pub speakers: Vec<SpeakerPresence>,
}

impl DevelopmentReport {
    pub fn analyze(script: &Script) -> Self {
        let scanner = ContextScanner::new(ResolutionPolicy::ContextGated, AttributionRule::Context);
        let mut report = Self::default();

        for scanned in scanner.scan(&script.lines) {
            match scanned.category {
                Some(Category::CharacterCue) => {
                    if let Some(name) = &scanned.speaker {
                        report.introduce(name, scanned.line.index);
                    }
                }
                Some(Category::Dialogue) => {
                    if let Some(attribution) = &scanned.attribution {
                        report.record_line(attribution.name(), scanned.scene);
                    }
                }
                Some(Category::Action) => {
                    for found in CAPITALIZED_NAME_REGEX.find_iter(&scanned.line.trimmed) {
                        report.introduce(found.as_str().trim(), scanned.line.index);
                    }
                }
                _ => {}
            }
        }

        report
    }

    fn introduce(&mut self, name: &str, line: usize) {
        if !self.introduced.iter().any(|i| i.name == name) {
            self.introduced.push(Introduction {
                name: name.to_string(),
                line,
            });
        }
    }

    fn record_line(&mut self, name: &str, scene: usize) {
        match self.speakers.iter_mut().find(|s| s.name == name) {
            Some(presence) => {
                presence.dialogue_lines += 1;
                presence.scenes.insert(scene);
            }
            None => self.speakers.push(SpeakerPresence {
                name: name.to_string(),
                dialogue_lines: 1,
                scenes: BTreeSet::from([scene]),
            }),
        }
    }

    /// Dialogue lines per character.
    pub fn dialogue_tally(&self) -> LineTally {
        let mut tally = LineTally::new();
        for presence in &self.speakers {
            tally.add(&presence.name, presence.dialogue_lines);
        }
        tally
    }

    pub fn speaks(&self, name: &str) -> bool {
        self.speakers.iter().any(|s| s.name == name)
    }

    /// Introduced characters that never speak.
    pub fn silent_characters(&self) -> Vec<&str> {
        self.introduced
            .iter()
            .filter(|i| !self.speaks(&i.name))
            .map(|i| i.name.as_str())
            .collect()
    }

    /// Characters with a single line of dialogue.
    pub fn single_line_speakers(&self) -> Vec<&str> {
        self.speakers
            .iter()
            .filter(|s| s.dialogue_lines == 1)
            .map(|s| s.name.as_str())
            .collect()
    }
}

impl fmt::Display for DevelopmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Character Development Report")?;
        writeln!(f, "--------------------------------")?;
        writeln!(f)?;

        writeln!(f, "Introduced Characters:")?;
        for intro in &self.introduced {
            if self.speaks(&intro.name) {
                writeln!(f, "    - {} (Line {}): Introduced via dialogue only ⚠️", intro.name, intro.line)?;
            } else {
                writeln!(f, "    - {} (Line {}): Introduced via action only ❌", intro.name, intro.line)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Speaking Presence:")?;
        for presence in &self.speakers {
            if presence.dialogue_lines == 1 {
                writeln!(f, "{}: ⚠️ Only speaks once", presence.name)?;
            } else {
                writeln!(
                    f,
                    "{}: Speaks {} times across {} scenes",
                    presence.name,
                    presence.dialogue_lines,
                    presence.scenes.len()
                )?;
            }
        }

        writeln!(f)?;
        write!(f, "Warnings:")?;
        for name in self.silent_characters() {
            write!(f, "\n{}: ❌ Never speaks", name)?;
        }

        Ok(())
    }
}
