/*!
 * Speaking time statistics.
 *
 * Counts dialogue lines and words per character and estimates how long
 * each character talks at a fixed speaking rate.
 */

use std::fmt;

use crate::analysis::tally::LineTally;
use crate::app_config::AnalysisConfig;
use crate::screenplay::{AttributionRule, ContextScanner, ResolutionPolicy, Script};

/// Speaking record of one character.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakingStats {
    pub name: String,
    pub lines: usize,
    pub words: usize,

    /// Estimated speaking time in seconds
    pub seconds: f64,
}

impl SpeakingStats {
    /// `M min S sec` from one minute up, `S sec` below.
    pub fn format_duration(&self) -> String {
        format_speaking_time(self.seconds)
    }
}

/// Speaking statistics for all characters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeakingReport {
    pub total_lines: usize,

    /// Characters in order of first spoken line, `UNKNOWN` included
    pub characters: Vec<SpeakingStats>,
}

impl SpeakingReport {
    pub fn analyze(script: &Script, config: &AnalysisConfig) -> Self {
        let scanner = ContextScanner::new(ResolutionPolicy::DialogueOnly, AttributionRule::Context);
        let mut lines = LineTally::new();
        let mut words = LineTally::new();

        for scanned in scanner.scan(&script.lines) {
            if let Some(attribution) = &scanned.attribution {
                lines.increment(attribution.name());
                words.add(attribution.name(), scanned.line.word_count());
            }
        }

        let characters = lines
            .iter()
            .map(|(name, count)| {
                let word_count = words.get(name);
                SpeakingStats {
                    name: name.to_string(),
                    lines: count,
                    words: word_count,
                    seconds: word_count as f64 / config.words_per_second,
                }
            })
            .collect();

        Self {
            total_lines: lines.total(),
            characters,
        }
    }

    pub fn get(&self, name: &str) -> Option<&SpeakingStats> {
        self.characters.iter().find(|c| c.name == name)
    }
}

/// Render seconds as `M min S sec` or `S sec`, truncating fractions.
pub fn format_speaking_time(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    if seconds >= 60.0 {
        format!("{} min {} sec", (seconds / 60.0).floor() as u64, (seconds % 60.0).floor() as u64)
    } else {
        format!("{} sec", seconds.floor() as u64)
    }
}

impl fmt::Display for SpeakingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Character Speaking Time Report")?;
        writeln!(f, "-------------------------------")?;
        write!(f, "Total dialogue lines: {} lines", self.total_lines)?;

        for stats in &self.characters {
            write!(f, "\n{}:", stats.name)?;
            write!(f, "\n    - Lines: {}", stats.lines)?;
            write!(f, "\n    - Words: {}", stats.words)?;
            write!(f, "\n    - Estimated Speaking Time: {}\n", stats.format_duration())?;
        }

        if self.characters.is_empty() {
            write!(f, "\nNo dialogue lines found")?;
        }

        Ok(())
    }
}
