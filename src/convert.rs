use std::path::{Path, PathBuf};

use futures::{StreamExt, stream};
use tokio::fs::{read_to_string, remove_file, write};
use tracing::{debug, info};

use crate::{
    classify::{TargetExtension, classify},
    config::Config,
    discover::{Candidate, discover},
    error::{ConvertError, Error, Stage},
};

/// A file written under its new extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub source: PathBuf,
    pub destination: PathBuf,
}

#[derive(Debug, Default)]
pub struct ConversionReport {
    pub converted: Vec<Converted>,
    pub failed: Vec<ConvertError>,
}

impl ConversionReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    fn record(&mut self, outcome: Result<Converted, ConvertError>) {
        match outcome {
            Ok(converted) => {
                println!(
                    "✅ Converted: {} -> {}",
                    converted.source.display(),
                    converted.destination.display()
                );
                self.converted.push(converted);
            }
            Err(err) => {
                eprintln!("❌ Failed to convert {}: {err}", err.path.display());
                debug!(path = %err.path.display(), stage = %err.stage, "conversion failed");
                self.failed.push(err);
            }
        }
    }
}

/// `path` with its last extension swapped for `target`.
pub fn destination_path(path: &Path, target: TargetExtension) -> PathBuf {
    path.with_extension(target.suffix().trim_start_matches('.'))
}

/// Convert one file: read it, pick `.ts` or `.tsx`, write the content under
/// the new name and, unless `keep_original`, delete the source.
///
/// An existing destination is overwritten. If the delete fails the new file
/// stays in place next to the original.
pub async fn convert_file(
    candidate: &Candidate,
    keep_original: bool,
) -> Result<Converted, ConvertError> {
    let source = &candidate.path;
    let content = read_to_string(source)
        .await
        .map_err(|e| ConvertError::new(source, Stage::Read, e))?;

    let target = classify(candidate.extension, &content);
    let destination = destination_path(source, target);
    debug!(path = %source.display(), %target, "classified");

    write(&destination, &content)
        .await
        .map_err(|e| ConvertError::new(source, Stage::Write, e))?;

    if !keep_original {
        remove_file(source)
            .await
            .map_err(|e| ConvertError::new(source, Stage::Delete, e))?;
    }

    Ok(Converted {
        source: source.clone(),
        destination,
    })
}

/// Convert every candidate concurrently, at most `limit` at a time when set.
/// Failures are recorded and never stop the other files.
pub async fn convert_all(
    candidates: Vec<Candidate>,
    keep_originals: bool,
    limit: Option<usize>,
) -> ConversionReport {
    stream::iter(candidates)
        .map(|candidate| async move { convert_file(&candidate, keep_originals).await })
        .buffer_unordered(limit.unwrap_or(usize::MAX).max(1))
        .fold(ConversionReport::default(), |mut report, outcome| async move {
            report.record(outcome);
            report
        })
        .await
}

pub async fn run_convert(config: Config) -> Result<ConversionReport, Error> {
    info!(?config, "starting conversion");
    let candidates = discover(&config.root, &config.extensions, &config.ignore_patterns)?;

    if !config.ignore_patterns.is_empty() {
        println!("🚫 Ignoring patterns: {}", config.ignore_patterns.join(", "));
    }
    if candidates.is_empty() {
        println!("ℹ️ No .js/.jsx files found (after applying ignore patterns).");
        return Ok(ConversionReport::default());
    }

    println!("🔍 Found {} JS file(s) to convert", candidates.len());

    let report = convert_all(candidates, config.keep_originals, config.max_concurrency).await;

    println!("🎉 Conversion complete.");
    println!(
        "   {}/{} converted, {} failed",
        report.converted.len(),
        report.total(),
        report.failed.len()
    );
    Ok(report)
}
