use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imgtext::cli::{self, Args};
use imgtext::config::{Config, LogFormat};
use imgtext::{ImageExtractor, OcrProvider};

fn init_tracing(format: LogFormat) {
    // stdout carries extracted text, so logs always go to stderr
    let (text_layer, json_layer) = match format {
        LogFormat::Text => (
            Some(tracing_subscriber::fmt::layer().with_writer(io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imgtext=warn".into()),
        )
        .with(text_layer)
        .with(json_layer)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_tracing(config.logging.format);

    tracing::debug!(languages = %config.ocr.languages, "Initializing OCR engine...");
    let ocr = OcrProvider::new(&config.ocr)?;
    let extractor = ImageExtractor::new(Arc::new(ocr));

    let stdout = io::stdout();
    let stderr = io::stderr();
    let report = cli::run(&args, &extractor, &mut stdout.lock(), &mut stderr.lock())?;

    Ok(report.exit_code())
}
