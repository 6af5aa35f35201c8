use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::metadata::VideoMetadata;
use crate::subtitles;
use crate::transcript::{self, TranscriptDocument};
use crate::xml_builder;

// @module: Application controller for transcript conversion

const OUTPUT_EXTENSION: &str = "xml";

/// Result of converting a single input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// The document was written to this path
    Written(PathBuf),
    /// The output already existed and overwriting was not forced
    Skipped(PathBuf),
}

impl ConversionOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Written(path) | Self::Skipped(path) => path,
        }
    }
}

/// Counts from a folder conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FolderSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Main application controller for transcript conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Output directory from the configuration
    pub fn default_output_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.output_dir)
    }

    /// Convert raw transcript text into an XML document
    pub fn convert_text(&self, raw: &str, metadata: &VideoMetadata) -> Result<String, AppError> {
        let chapters = transcript::parse_transcript_with(raw, &self.config.parser_options())?;
        debug!("Segmented transcript into {} chapters", chapters.len());
        Ok(xml_builder::build_document(&chapters, metadata)?)
    }

    /// Convert one transcript file, writing `<stem>.xml` into `output_dir`
    pub fn convert_file(&self, input_file: &Path, output_dir: &Path, force_overwrite: bool) -> Result<ConversionOutcome> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = FileManager::generate_output_path(input_file, output_dir, OUTPUT_EXTENSION);
        if output_path.exists() && !force_overwrite {
            warn!("Output file already exists: {:?}. Use -f to force overwrite.", output_path);
            return Ok(ConversionOutcome::Skipped(output_path));
        }

        let raw = FileManager::read_to_string(input_file)?;
        let xml = self
            .convert_text(&raw, &VideoMetadata::default())
            .with_context(|| format!("Failed to convert {}", input_file.display()))?;

        FileManager::write_to_file(&output_path, &xml)?;
        info!("Created: {}", output_path.display());
        Ok(ConversionOutcome::Written(output_path))
    }

    /// Convert every transcript file under a directory.
    ///
    /// Each document lands next to its transcript. Failures are logged and
    /// counted so one bad file does not stop the batch.
    pub fn run_folder(&self, input_dir: &Path, force_overwrite: bool) -> Result<FolderSummary> {
        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let transcript_files = FileManager::find_files(input_dir, &self.config.input_extension)?;
        if transcript_files.is_empty() {
            return Err(anyhow!(
                "No .{} transcript files found in directory: {:?}",
                self.config.input_extension,
                input_dir
            ));
        }

        let progress_bar = ProgressBar::new(transcript_files.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("=>-"));

        let mut summary = FolderSummary::default();

        for transcript_file in &transcript_files {
            let file_name = transcript_file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            progress_bar.set_message(format!("Processing: {}", file_name));

            let output_dir = transcript_file.parent().unwrap_or(input_dir);

            match self.convert_file(transcript_file, output_dir, force_overwrite) {
                Ok(ConversionOutcome::Written(_)) => summary.converted += 1,
                Ok(ConversionOutcome::Skipped(_)) => summary.skipped += 1,
                Err(e) => {
                    error!("Error processing file {}: {:#}", file_name, e);
                    summary.failed += 1;
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("Folder processing complete");
        info!(
            "Folder processing completed: {} converted, {} skipped, {} errors",
            summary.converted, summary.skipped, summary.failed
        );

        Ok(summary)
    }

    /// Convert a downloaded json3 subtitle track, with optional yt-dlp info JSON
    pub fn convert_subtitles(
        &self,
        json3_file: &Path,
        info_file: Option<&Path>,
        output_dir: &Path,
        force_overwrite: bool,
    ) -> Result<ConversionOutcome> {
        let output_path = FileManager::generate_output_path(json3_file, output_dir, OUTPUT_EXTENSION);
        if output_path.exists() && !force_overwrite {
            warn!("Output file already exists: {:?}. Use -f to force overwrite.", output_path);
            return Ok(ConversionOutcome::Skipped(output_path));
        }

        let json3 = FileManager::read_to_string(json3_file)?;
        let info = info_file.map(FileManager::read_to_string).transpose()?;

        let (metadata, chapters) = subtitles::convert_subtitles(&json3, info.as_deref())
            .with_context(|| format!("Failed to read subtitles from {}", json3_file.display()))?;
        let document = TranscriptDocument::new(metadata, chapters);
        let xml = xml_builder::transcript_to_xml(&document)?;

        FileManager::write_to_file(&output_path, &xml)?;
        info!("Created: {}", output_path.display());
        Ok(ConversionOutcome::Written(output_path))
    }
}
