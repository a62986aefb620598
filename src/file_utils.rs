use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

/// Extensions recognized as plain-text screenplays
pub const SCRIPT_EXTENSIONS: [&str; 2] = ["txt", "fountain"];

/// Suffix appended to a script's file name for its saved report
pub const REPORT_SUFFIX: &str = ".report.txt";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    // @generates: Report path next to the script, e.g. pilot.fountain -> pilot.fountain.report.txt
    pub fn report_path_for<P: AsRef<Path>>(script: P) -> PathBuf {
        let script = script.as_ref();
        let file_name = script.file_name().unwrap_or_default();

        // The extension stays in the name so pilot.txt and pilot.fountain get separate reports
        let mut report_filename = file_name.to_string_lossy().to_string();
        report_filename.push_str(REPORT_SUFFIX);

        script.with_file_name(report_filename)
    }

    /// Whether a path looks like a screenplay and not a generated report
    pub fn is_script_file<P: AsRef<Path>>(path: P) -> bool {
        let path = path.as_ref();
        let is_report = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(REPORT_SUFFIX));

        let has_script_extension = path.extension().is_some_and(|ext| {
            SCRIPT_EXTENSIONS
                .iter()
                .any(|known| ext.to_string_lossy().eq_ignore_ascii_case(known))
        });

        has_script_extension && !is_report
    }

    /// Find screenplay files in a directory, sorted by path
    pub fn find_scripts<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() && Self::is_script_file(path) {
                result.push(path.to_path_buf());
            }
        }

        result.sort();
        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                Self::ensure_dir(parent)?;
            }
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
