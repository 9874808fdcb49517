use anyhow::{Context, Result};
use csv::ReaderBuilder;
use log::{debug, error, info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::common::{BatchLine, BatchStats};
use crate::utm::{compose, ParameterSet};

/// Base URLs collected from CSV or plain-text sources.
pub struct BatchSource {
    pub urls: Vec<String>,
}

impl BatchSource {
    pub fn from_files(file_paths: &[String]) -> Result<Self> {
        let mut urls = Vec::new();
        for file_path in file_paths {
            urls.extend(urls_from_file(file_path)?);
        }
        info!(
            "Collected {} base URL(s) from {} file(s)",
            urls.len(),
            file_paths.len()
        );
        Ok(Self { urls })
    }

    /// Composes every base URL with the same parameters, in input order.
    pub fn compose_all(&self, params: &ParameterSet) -> (Vec<BatchLine>, BatchStats) {
        let lines: Vec<BatchLine> = self
            .urls
            .iter()
            .map(|base_url| {
                let composed = compose(base_url, params);
                if composed.is_empty() {
                    warn!("Invalid base URL '{}'. Skipping...", base_url);
                } else {
                    debug!("Composed {} -> {}", base_url, composed);
                }
                BatchLine {
                    base_url: base_url.clone(),
                    composed,
                }
            })
            .collect();

        let stats = BatchStats::from_lines(&lines);
        (lines, stats)
    }
}

fn urls_from_file(file_path: &str) -> Result<Vec<String>> {
    let path = Path::new(file_path);
    if !path.exists() {
        error!("File '{}' not found. Skipping...", file_path);
        return Ok(Vec::new());
    }

    let file = File::open(path).with_context(|| format!("Failed to open {}", file_path))?;
    urls_from_reader(file).with_context(|| format!("Failed to read URLs from {}", file_path))
}

/// Every non-empty cell is a candidate; no header row is assumed.
pub fn urls_from_reader<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut result = Vec::new();

    for record in reader.records() {
        let record = record?;
        for field in record.iter() {
            let candidate = field.trim();
            if !candidate.is_empty() {
                result.push(candidate.to_string());
            }
        }
    }

    Ok(result)
}
