/*!
 * Character dialogue tracking.
 *
 * Counts dialogue lines per speaker using the speaker cursor. Action lines
 * are not considered at all, so every line that reads as dialogue counts.
 */

use std::fmt;

use crate::analysis::tally::LineTally;
use crate::screenplay::{AttributionRule, ContextScanner, ResolutionPolicy, Script, UNKNOWN_SPEAKER};

/// Dialogue distribution across characters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterReport {
    /// Dialogue lines per character, `UNKNOWN` included
    pub character_lines: LineTally,
}

impl CharacterReport {
    pub fn analyze(script: &Script) -> Self {
        let scanner = ContextScanner::new(ResolutionPolicy::DialogueOnly, AttributionRule::Context);
        let mut character_lines = LineTally::new();

        for scanned in scanner.scan(&script.lines) {
            if let Some(attribution) = &scanned.attribution {
                character_lines.increment(attribution.name());
            }
        }

        Self { character_lines }
    }

    /// Whether some dialogue has no speaker.
    pub fn has_unassigned_dialogue(&self) -> bool {
        self.character_lines.contains(UNKNOWN_SPEAKER)
    }
}

impl fmt::Display for CharacterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Characters Found:")?;
        for (character, count) in self.character_lines.iter() {
            writeln!(f, "    - {}: {} lines", character, count)?;
        }

        writeln!(f)?;
        writeln!(f, "Character Dialogue Distribution:")?;
        for line in self.character_lines.distribution_lines("") {
            writeln!(f, "{}", line)?;
        }

        writeln!(f)?;
        write!(f, "Character Report:")?;
        if self.has_unassigned_dialogue() {
            write!(f, "\n    - ⚠️ Some dialogue has no character assigned")
        } else {
            write!(f, "\n    - ✔ No character assignment issues")
        }
    }
}
