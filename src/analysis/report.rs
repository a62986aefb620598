/*!
 * Combined script report.
 *
 * Runs every analysis over one script and exposes the results as named
 * sections, individually or joined into a single document.
 */

use std::fmt;
use std::str::FromStr;

use chrono::Local;
use log::info;

use crate::analysis::{
    CharacterReport, DevelopmentReport, PacingReport, ReadabilityReport, SpeakingReport, StructureReport,
};
use crate::app_config::AnalysisConfig;
use crate::errors::ReportError;
use crate::screenplay::Script;

/// Named sections of a full report, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    TitleAndDate,
    Structure,
    Characters,
    Development,
    Pacing,
    Readability,
    Speaking,
}

impl ReportKind {
    pub const ALL: [ReportKind; 7] = [
        ReportKind::TitleAndDate,
        ReportKind::Structure,
        ReportKind::Characters,
        ReportKind::Development,
        ReportKind::Pacing,
        ReportKind::Readability,
        ReportKind::Speaking,
    ];

    // @returns: Section title
    pub fn display_name(&self) -> &'static str {
        match self {
            ReportKind::TitleAndDate => "Title & Date",
            ReportKind::Structure => "Structure",
            ReportKind::Characters => "Characters",
            ReportKind::Development => "Development",
            ReportKind::Pacing => "Pacing",
            ReportKind::Readability => "Readability",
            ReportKind::Speaking => "Speaking",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" | "title & date" => Ok(Self::TitleAndDate),
            "structure" => Ok(Self::Structure),
            "characters" => Ok(Self::Characters),
            "development" => Ok(Self::Development),
            "pacing" => Ok(Self::Pacing),
            "readability" => Ok(Self::Readability),
            "speaking" => Ok(Self::Speaking),
            _ => Err(ReportError::UnknownReport(s.to_string())),
        }
    }
}

/// Every analysis of one script.
#[derive(Debug, Clone)]
pub struct ScriptReport {
    pub title: String,

    /// Local time the report was generated
    pub generated_at: String,

    pub structure: StructureReport,
    pub characters: CharacterReport,
    pub development: DevelopmentReport,
    pub pacing: PacingReport,
    pub readability: ReadabilityReport,
    pub speaking: SpeakingReport,
}

impl ScriptReport {
    /// Run all analyses. Each one scans the script independently.
    pub fn generate(text: &str, config: &AnalysisConfig) -> Self {
        let script = Script::parse_trimmed(text);
        info!("Analyzing script: {} lines", script.len());

        Self {
            title: script.title().to_string(),
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            structure: StructureReport::analyze(&script),
            characters: CharacterReport::analyze(&script),
            development: DevelopmentReport::analyze(&script),
            pacing: PacingReport::analyze(&script, config),
            readability: ReadabilityReport::analyze(&script, config),
            speaking: SpeakingReport::analyze(&script, config),
        }
    }

    /// Body of one section.
    pub fn section(&self, kind: ReportKind) -> String {
        match kind {
            ReportKind::TitleAndDate => format!("{}\n{}", self.title, self.generated_at),
            ReportKind::Structure => self.structure.to_string(),
            ReportKind::Characters => self.characters.to_string(),
            ReportKind::Development => self.development.to_string(),
            ReportKind::Pacing => self.pacing.to_string(),
            ReportKind::Readability => self.readability.to_string(),
            ReportKind::Speaking => self.speaking.to_string(),
        }
    }

    /// All sections as `(name, body)` pairs.
    pub fn sections(&self) -> Vec<(ReportKind, String)> {
        ReportKind::ALL.iter().map(|kind| (*kind, self.section(*kind))).collect()
    }
}

impl fmt::Display for ScriptReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full = self
            .sections()
            .into_iter()
            .map(|(kind, body)| format!("{}:\n{}", kind, body))
            .collect::<Vec<_>>()
            .join("\n\n");
        write!(f, "{}", full)
    }
}
