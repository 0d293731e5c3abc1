use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::extractor::ImageExtractor;

/// Outcome of a batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Text blocks of the images that succeeded, headers already applied.
    pub results: Vec<String>,
    /// Display strings of the errors for the images that failed.
    pub errors: Vec<String>,
}

impl BatchReport {
    /// True when nothing succeeded and at least one image failed.
    pub fn is_total_failure(&self) -> bool {
        self.results.is_empty() && !self.errors.is_empty()
    }

    /// All successful blocks, separated by exactly one blank line.
    pub fn combined_text(&self) -> Option<String> {
        let (first, rest) = self.results.split_first()?;

        let mut combined = first.clone();
        for block in rest {
            combined.push_str(if combined.ends_with('\n') { "\n" } else { "\n\n" });
            combined.push_str(block);
        }
        Some(combined)
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_total_failure() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

fn header(path: &Path) -> String {
    format!("=== {} ===\n", path.display())
}

/// Runs the extractor over a list of paths one after another.
pub struct BatchRunner<'a> {
    extractor: &'a ImageExtractor,
}

impl<'a> BatchRunner<'a> {
    pub fn new(extractor: &'a ImageExtractor) -> Self {
        Self { extractor }
    }

    /// Extract every image in order. A failed image is recorded and skipped.
    pub fn run(&self, paths: &[PathBuf]) -> BatchReport {
        let with_headers = paths.len() > 1;
        let mut report = BatchReport::default();

        for path in paths {
            match self.extractor.extract_text(path) {
                Ok(text) => {
                    debug!(path = %path.display(), chars = text.chars().count(), "Extracted text");
                    if with_headers {
                        report.results.push(format!("{}{}", header(path), text));
                    } else {
                        report.results.push(text);
                    }
                }
                Err(e) => {
                    if e.is_input_error() {
                        debug!(path = %path.display(), error = %e, "Skipping image");
                    } else {
                        warn!(path = %path.display(), error = %e, "OCR failed for image");
                    }
                    report.errors.push(e.to_string());
                }
            }
        }

        info!(
            requested = paths.len(),
            succeeded = report.results.len(),
            failed = report.errors.len(),
            "Batch finished"
        );
        report
    }
}

/// Write errors to `stderr` and the combined text to `output` or `stdout`.
pub fn write_report<O, E>(
    report: &BatchReport,
    output: Option<&Path>,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<()>
where
    O: Write,
    E: Write,
{
    for error in &report.errors {
        writeln!(stderr, "Error: {error}")?;
    }
    stderr.flush()?;

    if let Some(text) = report.combined_text() {
        match output {
            Some(file) => {
                fs::write(file, text.as_bytes())?;
                writeln!(stdout, "Text written to {}", file.display())?;
            }
            None => writeln!(stdout, "{text}")?,
        }
        stdout.flush()?;
    }

    Ok(())
}
