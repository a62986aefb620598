/*!
 * Tests for the report generators
 */

use screenwright::analysis::development::DevelopmentReport;
use screenwright::analysis::readability::FormatFlag;
use screenwright::analysis::speaking::SpeakingReport;
use screenwright::analysis::{
    CharacterReport, Medium, PacingReport, ReadabilityReport, ReportKind, SceneBalance, ScriptReport,
    StructuralWarning, StructureReport,
};
use screenwright::app_config::AnalysisConfig;
use screenwright::screenplay::Script;
use crate::common;

/// Test structure analysis on a well-formed script
#[test]
fn test_structureReport_twoScenes_shouldHaveNoIssues() {
    let report = StructureReport::analyze(&Script::parse_trimmed(common::TWO_SCENE_SCRIPT));

    assert_eq!(report.scene_count, 2);
    assert_eq!(report.headings, vec!["INT. ROOM - DAY", "EXT. PARK - DAY"]);
    assert!(report.header_issues.is_empty());
    assert!(report.action_present);
}

/// Test transitions that lead nowhere and empty scenes
#[test]
fn test_structureReport_danglingTransition_shouldWarn() {
    let text = "INT. HALL - DAY\nCUT TO:\n\nINT. STAIRS - DAY\n\nINT. ROOF - DAY\nWind howls over the roof.";
    let report = StructureReport::analyze(&Script::parse_trimmed(text));

    assert!(report.header_issues.contains(&StructuralWarning::TransitionWithoutHeading { line: 2 }));
    assert!(report.header_issues.contains(&StructuralWarning::EmptyScene {
        index: 2,
        heading: "INT. STAIRS - DAY".to_string(),
    }));
    assert!(report.has_issues());
}

/// Test adjacent-cue attribution in the structure report
#[test]
fn test_structureReport_questionAfterGap_shouldRecordGapLine() {
    let text = "INT. ROOM - DAY\nSARAH\nWhere is he?\nWhy is he late?";
    let report = StructureReport::analyze(&Script::parse_trimmed(text));

    assert_eq!(report.character_lines.get("SARAH"), 1);
    assert_eq!(report.attribution_gaps, vec![4]);
}

/// Test the character distribution with unknown speakers
#[test]
fn test_characterReport_withGap_shouldFlagUnassignedDialogue() {
    let text = "SARAH\nHello there.\nHow are you?\n\nNobody answers?";
    let report = CharacterReport::analyze(&Script::parse_trimmed(text));

    assert_eq!(report.character_lines.get("SARAH"), 2);
    assert_eq!(report.character_lines.get("UNKNOWN"), 1);
    assert!(report.has_unassigned_dialogue());

    let rendered = report.to_string();
    assert!(rendered.contains("SARAH: 2 lines"));
}

/// Test introductions found in action lines
#[test]
fn test_developmentReport_mentionedInAction_shouldBeSilent() {
    let report = DevelopmentReport::analyze(&Script::parse_trimmed(common::MENTIONED_SCRIPT));

    let introduced: Vec<&str> = report.introduced.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(introduced, vec!["SARAH", "JOHN"]);
    assert_eq!(report.silent_characters(), vec!["JOHN"]);
    assert_eq!(report.single_line_speakers(), vec!["SARAH"]);
}

/// Test speaking presence across scenes
#[test]
fn test_developmentReport_twoScenes_shouldListBothScenes() {
    let report = DevelopmentReport::analyze(&Script::parse_trimmed(common::TWO_SCENE_SCRIPT));

    let sarah = report.speakers.iter().find(|s| s.name == "SARAH").unwrap();
    assert_eq!(sarah.dialogue_lines, 2);
    assert_eq!(sarah.scenes.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(report.introduced[0].line, 3);
}

/// Test per-scene balance and uneven pacing
#[test]
fn test_pacingReport_unevenScenes_shouldBeIllPaced() {
    let text = "INT. A - DAY\nSARAH\nHi.\n\nINT. B - DAY\nRain falls\nThunder rolls\nA door bangs\nA dog barks\nWind howls";
    let config = AnalysisConfig::default();
    let report = PacingReport::analyze(&Script::parse_trimmed(text), &config);

    assert_eq!(report.scenes.len(), 2);
    assert_eq!(report.scenes[0].dialogue, 1);
    assert_eq!(report.scenes[0].balance, SceneBalance::DialogueHeavy);
    assert_eq!(report.scenes[1].action, 5);
    assert_eq!(report.scenes[1].balance, SceneBalance::ActionHeavy);
    assert!(report.ill_paced);
    assert_eq!(report.total_dialogue_lines(), 1);
}

/// Test a balance factor at the top of its range
#[test]
fn test_pacingReport_withMaxBalanceFactor_shouldNotOverflow() {
    let config = AnalysisConfig {
        balance_factor: usize::MAX,
        ..AnalysisConfig::default()
    };
    let text = "INT. A\nSARAH\nHello there friend.\nShe waits\nHe sits";
    let report = PacingReport::analyze(&Script::parse_trimmed(text), &config);

    assert_eq!((report.scenes[0].dialogue, report.scenes[0].action), (1, 2));
    assert_eq!(report.scenes[0].balance, SceneBalance::Balanced);
}

/// Test that each scene starts with no speaker
#[test]
fn test_pacingReport_speakerAcrossHeading_shouldNotCarryOver() {
    let text = "INT. A - DAY\nSARAH\nINT. B - DAY\nWhere am I?";
    let report = PacingReport::analyze(&Script::parse_trimmed(text), &AnalysisConfig::default());
    assert_eq!(report.character_lines.get("UNKNOWN"), 1);
    assert!(!report.character_lines.contains("SARAH"));
}

/// Test web, TV and stage flags
#[test]
fn test_readabilityReport_withThresholds_shouldFlagScenes() {
    let config = AnalysisConfig {
        web_max_scene_lines: 3,
        dense_block_lines: 2,
        long_line_chars: 20,
        ..AnalysisConfig::default()
    };
    let long = "The camera drifts slowly across the empty room.";
    let text = format!("INT. A - DAY\n{long}\n{long}\nSARAH\nOkay.\n\nINT. B - DAY\nJOHN\nMARY\nPETE\nHi.");
    let report = ReadabilityReport::analyze(&Script::parse_trimmed(&text), &config);

    assert!(report.flags.contains(&FormatFlag { medium: Medium::Web, scene: 1 }));
    assert!(report.flags.contains(&FormatFlag { medium: Medium::Tv, scene: 1 }));
    assert!(report.flags.contains(&FormatFlag { medium: Medium::Stage, scene: 2 }));
    assert_eq!(report.flags_for(Medium::Stage).count(), 1);
    assert_eq!(report.long_lines, 2);
}

/// Test speaking time estimates
#[test]
fn test_speakingReport_longSpeech_shouldRenderMinutes() {
    let speech = vec!["word"; 200].join(" ");
    let text = format!("NARRATOR\n{speech}");
    let report = SpeakingReport::analyze(&Script::parse_trimmed(&text), &AnalysisConfig::default());

    let narrator = report.get("NARRATOR").unwrap();
    assert_eq!(narrator.words, 200);
    assert_eq!(narrator.format_duration(), "1 min 20 sec");
    assert!(report.to_string().contains("Estimated Speaking Time: 1 min 20 sec"));
}

/// Test the combined report sections
#[test]
fn test_scriptReport_section_shouldMatchStandaloneReports() {
    let config = AnalysisConfig::default();
    let report = ScriptReport::generate(common::TWO_SCENE_SCRIPT, &config);
    let script = Script::parse_trimmed(common::TWO_SCENE_SCRIPT);

    assert_eq!(report.title, "INT. ROOM - DAY");
    assert_eq!(report.section(ReportKind::Characters), CharacterReport::analyze(&script).to_string());
    assert_eq!(report.sections().len(), ReportKind::ALL.len());
    assert_eq!(report.characters.character_lines.get("SARAH"), 2);
    assert_eq!(report.speaking.get("SARAH").map(|s| s.words), Some(4));
}
