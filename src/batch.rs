use crate::config::Config;
use ocr_prep::preprocessing::{ContrastLevel, Pipeline, PreprocessingReport};
use ocr_prep::{output, OcrOptions, PrepError};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// One prepared image
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub input: String,
    pub output: String,
    pub width: u32,
    pub height: u32,
    #[serde(flatten)]
    pub preprocessing: PreprocessingReport,
}

/// One image that could not be prepared
#[derive(Debug, Serialize)]
pub struct FailedFile {
    pub input: String,
    pub error: String,
}

/// Summary printed once the batch finishes
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub format: &'static str,
    pub options: OcrOptions,
    pub processed: Vec<FileReport>,
    pub failed: Vec<FailedFile>,
}

/// Prepare every input in turn
///
/// A file that fails to decode, process or encode is recorded and the batch
/// carries on. So is a file whose output would land on an input image or on
/// an output already written in this run. Options that are invalid for every
/// file fail up front.
pub fn run(config: &Config) -> Result<BatchReport, PrepError> {
    ContrastLevel::from_factor(config.options.contrast_factor)?;
    fs::create_dir_all(&config.out_dir)?;

    let pipeline = Pipeline::new(config.options);
    let mut report = BatchReport {
        format: config.format.as_str(),
        options: config.options,
        processed: Vec::new(),
        failed: Vec::new(),
    };

    let input_paths: HashSet<PathBuf> = config
        .inputs
        .iter()
        .filter_map(|input| fs::canonicalize(input).ok())
        .collect();
    let mut claimed: HashMap<PathBuf, String> = HashMap::new();

    for input in &config.inputs {
        let outcome = check_output(config, input, &input_paths, &claimed).and_then(
            |(output_path, key)| {
                let file_report = process_file(&pipeline, config, input, &output_path)?;
                claimed.insert(key, file_report.input.clone());
                Ok(file_report)
            },
        );

        match outcome {
            Ok(file_report) => {
                tracing::info!(
                    "Prepared {} -> {} in {}ms",
                    file_report.input,
                    file_report.output,
                    file_report.preprocessing.total_time_ms
                );
                report.processed.push(file_report);
            }
            Err(e) => {
                tracing::warn!(input = %input.display(), error = %e, "Failed to prepare image");
                report.failed.push(FailedFile {
                    input: input.display().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

/// Output path for `input` plus its resolved form, refusing inputs and
/// outputs already written
fn check_output(
    config: &Config,
    input: &Path,
    input_paths: &HashSet<PathBuf>,
    claimed: &HashMap<PathBuf, String>,
) -> Result<(PathBuf, PathBuf), PrepError> {
    let output_path = config.output_path(input);
    let key = resolve(&output_path)?;

    if input_paths.contains(&key) {
        return Err(PrepError::OverwritesInput(output_path.display().to_string()));
    }
    if let Some(owner) = claimed.get(&key) {
        return Err(PrepError::DuplicateOutput {
            path: output_path.display().to_string(),
            claimed_by: owner.clone(),
        });
    }

    Ok((output_path, key))
}

/// Canonical form of a path that may not exist yet; its directory must
fn resolve(path: &Path) -> Result<PathBuf, PrepError> {
    if path.exists() {
        return Ok(fs::canonicalize(path)?);
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let parent = fs::canonicalize(parent)?;
    Ok(match path.file_name() {
        Some(name) => parent.join(name),
        None => parent,
    })
}

fn process_file(
    pipeline: &Pipeline,
    config: &Config,
    input: &Path,
    output_path: &Path,
) -> Result<FileReport, PrepError> {
    let image = output::load(input)?;
    tracing::debug!(
        "Decoded {} ({}x{})",
        input.display(),
        image.width(),
        image.height()
    );

    let result = pipeline.process(&image)?;

    output::save(&result.image, output_path, config.format, config.quality)?;

    Ok(FileReport {
        input: input.display().to_string(),
        output: output_path.display().to_string(),
        width: result.image.width(),
        height: result.image.height(),
        preprocessing: result.report,
    })
}
