/*!
 * Readability analysis per target medium.
 *
 * Flags scenes that read poorly for:
 * - Web: scenes too long for short-form pacing
 * - TV: blocks of consecutive long lines (dense narration)
 * - Stage: scenes with too little spoken text
 *
 * and counts lines that exceed the long-line threshold.
 */

use std::fmt;

use crate::app_config::AnalysisConfig;
use crate::screenplay::{classify, Category, Scene, SceneSegmenter, Script};

/// Target medium of a readability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Medium {
    Web,
    Tv,
    Stage,
}

impl Medium {
    pub const ALL: [Medium; 3] = [Medium::Web, Medium::Tv, Medium::Stage];
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Medium::Web => write!(f, "Web"),
            Medium::Tv => write!(f, "TV"),
            Medium::Stage => write!(f, "Stage"),
        }
    }
}

/// A scene that reads poorly for one medium.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatFlag {
    pub medium: Medium,
    pub scene: usize,
}

impl fmt::Display for FormatFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.medium {
            Medium::Web => write!(f, "Scene {} too long for short-form pacing ⚠️", self.scene),
            Medium::Tv => write!(f, "Scene {} has dense narration blocks ⚠️", self.scene),
            Medium::Stage => write!(f, "Scene {} is action-heavy for stage format ⚠️", self.scene),
        }
    }
}

/// Readability findings for a script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadabilityReport {
    pub flags: Vec<FormatFlag>,

    /// Lines in scenes longer than the threshold
    pub long_lines: usize,

    pub long_line_chars: usize,
}

impl ReadabilityReport {
    pub fn analyze(script: &Script, config: &AnalysisConfig) -> Self {
        let mut report = Self {
            long_line_chars: config.long_line_chars,
            ..Default::default()
        };

        for scene in SceneSegmenter::new().segment(&script.lines) {
            let (long_lines, has_dense_block) = long_line_stats(&scene, config);
            report.long_lines += long_lines;

            if scene.len() > config.web_max_scene_lines {
                report.flags.push(FormatFlag { medium: Medium::Web, scene: scene.index });
            }
            if has_dense_block {
                report.flags.push(FormatFlag { medium: Medium::Tv, scene: scene.index });
            }
            if spoken_ratio(&scene) < config.stage_min_dialogue_ratio {
                report.flags.push(FormatFlag { medium: Medium::Stage, scene: scene.index });
            }
        }

        report
    }

    pub fn flags_for(&self, medium: Medium) -> impl Iterator<Item = &FormatFlag> {
        self.flags.iter().filter(move |flag| flag.medium == medium)
    }
}

/// Long lines in the scene and whether enough of them run back to back.
fn long_line_stats(scene: &Scene, config: &AnalysisConfig) -> (usize, bool) {
    let mut long_lines = 0;
    let mut consecutive = 0;
    let mut dense_block = false;

    for line in &scene.content {
        if line.char_len() > config.long_line_chars {
            long_lines += 1;
            consecutive += 1;
        } else {
            consecutive = 0;
        }

        if consecutive >= config.dense_block_lines {
            dense_block = true;
        }
    }

    (long_lines, dense_block)
}

/// Share of content lines that are neither blank nor character cues.
fn spoken_ratio(scene: &Scene) -> f64 {
    let spoken = scene
        .content
        .iter()
        .filter(|line| {
            let tags = classify(&line.trimmed);
            !tags.contains(Category::Blank) && !tags.contains(Category::CharacterCue)
        })
        .count();

    spoken as f64 / scene.len().max(1) as f64
}

impl fmt::Display for ReadabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Readability Analysis")?;
        writeln!(f, "----------------------")?;
        writeln!(f)?;

        writeln!(f, "Format Flags:")?;
        for medium in Medium::ALL {
            let mut flags = self.flags_for(medium).peekable();
            if flags.peek().is_none() {
                writeln!(f, "    - {}: ✔ No issues found", medium)?;
            }
            for flag in flags {
                writeln!(f, "    - {}: {}", medium, flag)?;
            }
        }

        writeln!(f)?;
        write!(f, "General Issues:")?;
        if self.long_lines == 0 {
            write!(f, "\n    - ✔ No overly long lines found")
        } else {
            write!(
                f,
                "\n    - {} line(s) exceed {} characters (may reduce readability)",
                self.long_lines, self.long_line_chars
            )
        }
    }
}
