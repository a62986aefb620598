/*!
 * Scene pacing and dialogue distribution.
 *
 * Each scene is scanned on its own, with a fresh speaker cursor, and its
 * dialogue and action lines are counted. Dialogue wins over action for
 * lines that read as both.
 */

use std::fmt;

use crate::analysis::tally::LineTally;
use crate::app_config::AnalysisConfig;
use crate::screenplay::{AttributionRule, ContextScanner, ResolutionPolicy, SceneSegmenter, Script};

/// Dialogue/action balance of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneBalance {
    DialogueHeavy,
    ActionHeavy,
    Balanced,
}

impl SceneBalance {
    /// Balance given the counts and the factor one side must exceed the other by.
    pub fn from_counts(dialogue: usize, action: usize, factor: usize) -> Self {
        if dialogue > action.saturating_mul(factor) {
            SceneBalance::DialogueHeavy
        } else if action > dialogue.saturating_mul(factor) {
            SceneBalance::ActionHeavy
        } else {
            SceneBalance::Balanced
        }
    }
}

impl fmt::Display for SceneBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneBalance::DialogueHeavy => write!(f, "💬 Dialogue-heavy"),
            SceneBalance::ActionHeavy => write!(f, "🏃 Action-heavy"),
            SceneBalance::Balanced => write!(f, "⚖️ Balanced"),
        }
    }
}

/// Counts for one scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenePacing {
    pub index: usize,
    pub heading: String,
    pub dialogue: usize,
    pub action: usize,
    pub balance: SceneBalance,
}

impl ScenePacing {
    /// Lines that are either dialogue or action.
    pub fn quantity(&self) -> usize {
        self.dialogue + self.action
    }
}

/// Pacing across all scenes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PacingReport {
    pub scenes: Vec<ScenePacing>,

    /// Whether neighbouring scenes differ too much in size
    pub ill_paced: bool,

    /// Dialogue lines per character over all scenes, `UNKNOWN` included
    pub character_lines: LineTally,
}

impl PacingReport {
    pub fn analyze(script: &Script, config: &AnalysisConfig) -> Self {
        let scanner = ContextScanner::new(ResolutionPolicy::DialogueFirst, AttributionRule::Context);
        let mut report = Self::default();

        for scene in SceneSegmenter::new().segment(&script.lines) {
            let mut dialogue = 0;
            let mut action = 0;

            for scanned in scanner.scan(&scene.content) {
                if scanned.is_dialogue() {
                    dialogue += 1;
                    if let Some(attribution) = &scanned.attribution {
                        report.character_lines.increment(attribution.name());
                    }
                } else if scanned.is_action() {
                    action += 1;
                }
            }

            report.scenes.push(ScenePacing {
                index: scene.index,
                heading: scene.heading,
                dialogue,
                action,
                balance: SceneBalance::from_counts(dialogue, action, config.balance_factor),
            });
        }

        report.ill_paced = report
            .scenes
            .windows(2)
            .any(|pair| pair[0].quantity().abs_diff(pair[1].quantity()) >= config.pacing_variation_threshold);

        report
    }

    pub fn total_dialogue_lines(&self) -> usize {
        self.character_lines.total()
    }
}

impl fmt::Display for PacingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scene Pacing Report")?;
        writeln!(f, "--------------------")?;

        match self.scenes.len() {
            0 => writeln!(f, "No scenes detected")?,
            1 => writeln!(f, "Only one scene detected")?,
            _ => {}
        }

        for scene in &self.scenes {
            writeln!(f, "Scene {}: {}", scene.index, scene.heading)?;
            writeln!(f, "    - Dialogue: {} lines", scene.dialogue)?;
            writeln!(f, "    - Action: {} lines", scene.action)?;
            writeln!(f, "    - Balance: {}", scene.balance)?;
            writeln!(f)?;
        }

        if self.ill_paced {
            writeln!(f, "Significant variation in scene lengths - Consider breaking up longer scenes")?;
        } else {
            writeln!(f, "Scene length distribution is balanced")?;
        }

        writeln!(f, "Dialogue Distribution:")?;
        write!(f, "----------------------")?;
        if self.total_dialogue_lines() == 0 {
            write!(f, "\n    No dialogue found in the script.")?;
        } else {
            for line in self.character_lines.distribution_lines("    ") {
                write!(f, "\n{}", line)?;
            }
        }

        Ok(())
    }
}
