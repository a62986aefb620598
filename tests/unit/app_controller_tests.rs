/*!
 * Tests for app controller functionality
 */

use anyhow::Result;
use screenwright::analysis::ReportKind;
use screenwright::app_config::Config;
use screenwright::app_controller::Controller;
use screenwright::errors::ReportError;
use crate::common;

/// Test controller creation with an invalid configuration
#[test]
fn test_withConfig_invalidConfig_shouldFail() {
    let mut config = Config::default();
    config.layout.center_width = 0;
    assert!(Controller::with_config(config).is_err());
}

/// Test analysis before loading anything
#[test]
fn test_runAnalysis_withoutScript_shouldReturnNoScriptLoaded() -> Result<()> {
    let mut controller = Controller::new_for_test()?;

    let error = controller.run_analysis().unwrap_err();
    assert!(matches!(error.downcast_ref::<ReportError>(), Some(ReportError::NoScriptLoaded)));
    Ok(())
}

/// Test report access before any analysis
#[test]
fn test_reportSection_beforeAnalysis_shouldReturnNotAnalyzed() -> Result<()> {
    let mut controller = Controller::new_for_test()?;
    controller.load_text(common::TWO_SCENE_SCRIPT);

    let error = controller.report_section(ReportKind::Pacing).unwrap_err();
    assert!(matches!(error.downcast_ref::<ReportError>(), Some(ReportError::NotAnalyzed)));

    let temp_dir = common::create_temp_dir()?;
    assert!(controller.save_report(temp_dir.path().join("r.txt")).is_err());
    Ok(())
}

/// Test that loading formats the script when configured
#[test]
fn test_loadText_withFormatOnLoad_shouldStoreFormattedScript() -> Result<()> {
    let mut controller = Controller::new_for_test()?;
    controller.load_text("int. room - day\nSarah: Hello there.");

    let script = controller.script().unwrap();
    assert!(script.starts_with("INT. ROOM - DAY\n"));
    assert!(script.contains("     Hello there."));
    Ok(())
}

/// Test that raw mode keeps the script as written
#[test]
fn test_loadText_withoutFormatOnLoad_shouldKeepText() -> Result<()> {
    let config = Config {
        format_on_load: false,
        ..Config::default()
    };
    let mut controller = Controller::with_config(config)?;
    controller.load_text("int. room - day");

    assert_eq!(controller.script(), Some("int. room - day"));
    Ok(())
}

/// Test sections by kind and by name
#[test]
fn test_reportSection_afterAnalysis_shouldReturnSection() -> Result<()> {
    let mut controller = Controller::new_for_test()?;
    controller.load_text(common::TWO_SCENE_SCRIPT);
    controller.run_analysis()?;

    let speaking = controller.report_section(ReportKind::Speaking)?;
    assert!(speaking.starts_with("Character Speaking Time Report"));
    assert_eq!(controller.report_section_named("speaking")?, speaking);

    let error = controller.report_section_named("plot").unwrap_err();
    assert!(matches!(error.downcast_ref::<ReportError>(), Some(ReportError::UnknownReport(_))));
    Ok(())
}

/// Test that loading a new script drops the previous report
#[test]
fn test_loadText_afterAnalysis_shouldClearReport() -> Result<()> {
    let mut controller = Controller::new_for_test()?;
    controller.load_text(common::TWO_SCENE_SCRIPT);
    controller.run_analysis()?;
    assert!(controller.report().is_some());

    controller.load_text("INT. OTHER - DAY");
    assert!(controller.report().is_none());
    Ok(())
}

/// Test formatting a file to an output path
#[test]
fn test_formatFile_withOutput_shouldWriteFormattedScript() -> Result<()> {
    let controller = Controller::new_for_test()?;
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "draft.txt", common::INLINE_DRAFT)?;
    let output = temp_dir.path().join("formatted").join("draft.txt");

    let formatted = controller.format_file(&input, Some(&output))?;

    assert_eq!(std::fs::read_to_string(&output)?, formatted);
    assert!(formatted.contains("INT. KITCHEN - NIGHT"));
    Ok(())
}

/// Test single-file analysis skipping an existing report
#[test]
fn test_analyzeFile_withExistingReport_shouldSkipUnlessForced() -> Result<()> {
    let mut controller = Controller::new_for_test()?;
    let temp_dir = common::create_temp_dir()?;
    let script = common::create_test_script(temp_dir.path(), "pilot.txt")?;
    common::create_test_file(temp_dir.path(), "pilot.txt.report.txt", "old")?;

    assert_eq!(controller.analyze_file(&script, false)?, None);
    assert_eq!(std::fs::read_to_string(temp_dir.path().join("pilot.txt.report.txt"))?, "old");

    let written = controller.analyze_file(&script, true)?;
    assert_eq!(written, Some(temp_dir.path().join("pilot.txt.report.txt")));
    assert!(std::fs::read_to_string(temp_dir.path().join("pilot.txt.report.txt"))?.starts_with("Title & Date:"));
    Ok(())
}
