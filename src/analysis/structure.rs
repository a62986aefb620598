/*!
 * Scene structure validation.
 *
 * Checks a script for:
 * - Scene headings and their count
 * - Transitions that are not directly followed by a scene heading
 * - Scenes with nothing but blank lines under the heading
 * - Dialogue that cannot be attributed to the cue right above it
 * - Absence of any action line
 *
 * Action wins over dialogue here, and attribution only looks at the line
 * above (or the cue above a parenthetical), never at an older cue.
 */

use std::fmt;

use log::warn;

use crate::analysis::tally::LineTally;
use crate::screenplay::{
    classifier::is_scene_heading, AttributionRule, Category, ContextScanner, ResolutionPolicy,
    SceneSegmenter, Script,
};

/// Non-fatal problem in the script's layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralWarning {
    /// Transition whose next line is not a scene heading
    TransitionWithoutHeading { line: usize },
    /// Scene heading with no content before the next heading
    EmptyScene { index: usize, heading: String },
}

impl fmt::Display for StructuralWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralWarning::TransitionWithoutHeading { line } => {
                write!(f, "⚠️ Line {}: transition not followed by a scene heading", line)
            }
            StructuralWarning::EmptyScene { index, heading } => {
                write!(f, "⚠️ Scene {} ({}) has no content", index, heading)
            }
        }
    }
}

/// Result of validating a script's structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureReport {
    pub scene_count: usize,

    /// Scene headings in order
    pub headings: Vec<String>,

    /// Heading and transition problems
    pub header_issues: Vec<StructuralWarning>,

    /// Line numbers of dialogue without a speaker
    pub attribution_gaps: Vec<usize>,

    /// Dialogue lines per character, `UNKNOWN` included
    pub character_lines: LineTally,

    /// Whether at least one action line exists
    pub action_present: bool,
}

impl StructureReport {
    pub fn analyze(script: &Script) -> Self {
        let lines = &script.lines;
        let scanner = ContextScanner::new(ResolutionPolicy::ActionFirst, AttributionRule::Adjacent);
        let mut report = Self::default();

        for (position, scanned) in scanner.scan(lines).iter().enumerate() {
            match scanned.category {
                Some(Category::SceneHeading) => {
                    report.scene_count += 1;
                    report.headings.push(scanned.line.trimmed.clone());
                }
                Some(Category::Transition) => {
                    let followed_by_heading = lines
                        .get(position + 1)
                        .is_some_and(|next| is_scene_heading(&next.trimmed));
                    if !followed_by_heading {
                        report
                            .header_issues
                            .push(StructuralWarning::TransitionWithoutHeading { line: scanned.line.index });
                    }
                }
                Some(Category::Action) => report.action_present = true,
                Some(Category::Dialogue) => {
                    if let Some(attribution) = &scanned.attribution {
                        report.character_lines.increment(attribution.name());
                        if attribution.is_gap() {
                            report.attribution_gaps.push(scanned.line.index);
                        }
                    }
                }
                _ => {}
            }
        }

        for scene in SceneSegmenter::new().segment(lines) {
            if scene.has_no_content() {
                report.header_issues.push(StructuralWarning::EmptyScene {
                    index: scene.index,
                    heading: scene.heading,
                });
            }
        }

        for issue in &report.header_issues {
            warn!("{}", issue);
        }

        report
    }

    pub fn has_issues(&self) -> bool {
        !self.header_issues.is_empty() || !self.attribution_gaps.is_empty()
    }
}

impl fmt::Display for StructureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scene Structure Report:")?;
        writeln!(f, "--------------------------------")?;
        writeln!(f, "Total Scenes: {}", self.scene_count)?;
        writeln!(f)?;

        if self.headings.is_empty() {
            writeln!(f, "❌ No valid scene headings found.")?;
        } else {
            writeln!(f, "Valid Headings:")?;
            for heading in &self.headings {
                writeln!(f, "    - {} ✔", heading)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Header Reports:")?;
        if self.header_issues.is_empty() {
            writeln!(f, "    - ✔ No header errors")?;
        } else {
            for issue in &self.header_issues {
                writeln!(f, "    - {}", issue)?;
            }
        }

        writeln!(f)?;
        write!(f, "Scene Reports:")?;
        if self.attribution_gaps.is_empty() {
            write!(f, "\n    - ✔ No scene structure issues")?;
        } else {
            for line in &self.attribution_gaps {
                write!(f, "\n    - ❌ Line {}: dialogue not preceded by character name", line)?;
            }
        }

        if !self.action_present {
            write!(f, "\n    - ⚠️ Script has no action lines")?;
        }

        Ok(())
    }
}
