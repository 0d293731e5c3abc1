use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::batch::{write_report, BatchReport, BatchRunner};
use crate::error::Result;
use crate::extractor::ImageExtractor;

#[derive(Parser, Debug)]
#[command(name = "imgtext")]
#[command(version, about = "Extract text from image files using OCR.")]
pub struct Args {
    /// Path(s) to image file(s) to extract text from
    #[arg(value_name = "IMAGE", required = true, num_args = 1..)]
    pub images: Vec<PathBuf>,

    /// Write extracted text to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Run one batch for parsed arguments and write its output.
///
/// The returned report decides the exit status; see [`BatchReport::exit_code`].
pub fn run<O, E>(
    args: &Args,
    extractor: &ImageExtractor,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<BatchReport>
where
    O: Write,
    E: Write,
{
    let report = BatchRunner::new(extractor).run(&args.images);
    write_report(&report, args.output.as_deref(), stdout, stderr)?;
    Ok(report)
}
