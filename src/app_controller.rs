use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::analysis::{ReportKind, ScriptReport};
use crate::app_config::Config;
use crate::errors::ReportError;
use crate::file_utils::FileManager;
use crate::screenplay::LayoutRenderer;

// @module: Application controller for script analysis

/// Outcome of analyzing every script in a folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSummary {
    /// Scripts whose report was written
    pub processed: usize,
    /// Scripts skipped because a report already existed
    pub skipped: usize,
    /// Scripts that could not be analyzed
    pub failed: usize,
}

/// Main application controller for screenplay formatting and analysis
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Renderer built from the layout config
    renderer: LayoutRenderer,

    // @field: Currently loaded script text
    script: Option<String>,

    // @field: Result of the last analysis
    report: Option<ScriptReport>,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let renderer = LayoutRenderer::new(config.layout.clone());
        Ok(Self {
            config,
            renderer,
            script: None,
            report: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The loaded script, formatted if `format_on_load` is set
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// The last generated report
    pub fn report(&self) -> Option<&ScriptReport> {
        self.report.as_ref()
    }

    /// Render text with the configured layout
    pub fn format_text(&self, text: &str) -> String {
        self.renderer.render(text)
    }

    /// Load a script from text, replacing any previous script and report
    pub fn load_text(&mut self, text: &str) {
        let script = if self.config.format_on_load {
            self.format_text(text)
        } else {
            text.to_string()
        };

        debug!("Loaded script with {} lines", script.lines().count());
        self.script = Some(script);
        self.report = None;
    }

    /// Load a script from a file
    pub fn load_script<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let raw_text = FileManager::read_to_string(path)?;
        self.load_text(&raw_text);
        info!("Loaded script from {:?}", path);
        Ok(())
    }

    /// Format a script file, writing it to `output` when given
    pub fn format_file<P: AsRef<Path>>(&self, input: P, output: Option<&Path>) -> Result<String> {
        let raw_text = FileManager::read_to_string(input)?;
        let formatted = self.format_text(&raw_text);

        if let Some(output) = output {
            FileManager::write_to_file(output, &formatted)?;
            info!("Formatted script written to {:?}", output);
        }

        Ok(formatted)
    }

    /// Run every analysis over the loaded script
    pub fn run_analysis(&mut self) -> Result<&ScriptReport> {
        let script = self.script.as_deref().ok_or(ReportError::NoScriptLoaded)?;

        info!("Running analysis...");
        let report = ScriptReport::generate(script, &self.config.analysis);

        let gaps = report.structure.attribution_gaps.len();
        if gaps > 0 {
            warn!("{} dialogue line(s) have no character assigned", gaps);
        }
        info!("Analysis complete");

        Ok(&*self.report.insert(report))
    }

    /// Body of one report section
    pub fn report_section(&self, kind: ReportKind) -> Result<String> {
        let report = self.report.as_ref().ok_or(ReportError::NotAnalyzed)?;
        Ok(report.section(kind))
    }

    /// Body of one report section looked up by name, e.g. `"pacing"`
    pub fn report_section_named(&self, name: &str) -> Result<String> {
        let kind: ReportKind = name.parse()?;
        self.report_section(kind)
    }

    /// Full report with all sections
    pub fn full_report(&self) -> Result<String> {
        let report = self.report.as_ref().ok_or(ReportError::NotAnalyzed)?;
        Ok(report.to_string())
    }

    /// Save the full report to a file
    pub fn save_report<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let full_report = self.full_report()?;
        FileManager::write_to_file(&path, &full_report)?;
        info!("Report saved to {:?}", path.as_ref());
        Ok(())
    }

    /// Analyze one script file and write its report beside it
    ///
    /// Returns `None` when the report exists and `force_overwrite` is off.
    pub fn analyze_file<P: AsRef<Path>>(&mut self, input_file: P, force_overwrite: bool) -> Result<Option<PathBuf>> {
        let input_file = input_file.as_ref();
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let report_path = FileManager::report_path_for(input_file);
        if report_path.exists() && !force_overwrite {
            warn!("Skipping {:?}, report already exists (use -f to force overwrite)", input_file);
            return Ok(None);
        }

        self.load_script(input_file)?;
        self.run_analysis()?;
        self.save_report(&report_path)?;

        Ok(Some(report_path))
    }

    /// Analyze every script in a folder
    pub fn analyze_folder<P: AsRef<Path>>(&mut self, input_dir: P, force_overwrite: bool) -> Result<FolderSummary> {
        let input_dir = input_dir.as_ref();
        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let scripts = FileManager::find_scripts(input_dir)?;
        if scripts.is_empty() {
            warn!("No script files found in directory: {:?}", input_dir);
            return Ok(FolderSummary::default());
        }

        info!("Found {} script file(s) in {:?}", scripts.len(), input_dir);

        let folder_pb = ProgressBar::new(scripts.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} scripts ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));

        let mut summary = FolderSummary::default();
        for script in &scripts {
            let name = script.file_name().unwrap_or_default().to_string_lossy().to_string();
            folder_pb.set_message(name);

            match self.analyze_file(script, force_overwrite) {
                Ok(Some(_)) => summary.processed += 1,
                Ok(None) => summary.skipped += 1,
                Err(e) => {
                    error!("Error processing {:?}: {}", script, e);
                    summary.failed += 1;
                }
            }
            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder processing complete");
        info!(
            "Finished: {} analyzed, {} skipped, {} failed",
            summary.processed, summary.skipped, summary.failed
        );

        Ok(summary)
    }
}
