use anyhow::{Result, Context};
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};
use crate::app_config::Config;
use crate::extraction::ScriptParser;
use crate::file_utils::FileManager;
use crate::script_model::Movie;

// @module: Application controller for script extraction

/// Extension given to extracted movie records
const OUTPUT_EXTENSION: &str = "json";

/// Main application controller for movie script extraction
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Extraction engine built from the configuration
    parser: ScriptParser,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let parser = ScriptParser::new(config.parser.clone(), config.filter.clone());

        Ok(Self { config, parser })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        self.config.validate().is_ok()
    }

    /// Parse one script file into a movie record
    pub fn parse_file(&self, input_file: &Path) -> Result<Movie> {
        let content = FileManager::read_to_string_lossy(input_file)?;

        let movie = self
            .parser
            .parse(&content)
            .with_context(|| format!("Failed to parse script: {}", input_file.display()))?;

        Ok(movie)
    }

    /// Run the main workflow with an input script file and output directory
    pub fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        // Check if the input file exists
        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        // Ensure the output directory exists
        FileManager::ensure_dir(&output_dir)?;

        // Check if an extraction already exists
        let output_path = FileManager::generate_output_path(&input_file, &output_dir, OUTPUT_EXTENSION);
        if output_path.exists() && !force_overwrite {
            // Skip if the record already exists and no force flag
            warn!("Skipping file, extraction already exists (use -f to force overwrite)");
            return Ok(());
        }

        let movie = self.parse_file(&input_file)?;
        debug!("Extracted {}", movie);

        self.save_movie(&movie, &input_file, &output_dir)?;

        info!(
            "Extraction completed in {}.",
            Self::format_duration(start_time.elapsed())
        );

        Ok(())
    }

    /// Run the workflow in folder mode, processing every script in a directory.
    /// Records are written next to their scripts; files that already have one
    /// are skipped unless overwriting is forced.
    pub fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        // Check if the input directory exists
        if !input_dir.exists() {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        // Find all script files in the directory (recursive)
        let script_files = FileManager::find_files(&input_dir, "txt")?;

        // If no script files found, return error
        if script_files.is_empty() {
            return Err(anyhow::anyhow!("No script files found in directory: {:?}", input_dir));
        }

        // Create a progress bar for folder processing
        let folder_pb = ProgressBar::new(script_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} scripts ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Processing scripts");

        // Track success and failure counts
        let mut success_count = 0;
        let mut error_count = 0;
        let mut skip_count = 0;

        // Process each script file
        for script_file in script_files.iter() {
            // Get the file name for display
            let file_name = script_file.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            // Update the folder progress bar to show current file
            folder_pb.set_message(format!("Processing: {}", file_name));

            // Records land next to their scripts
            let output_dir = match script_file.parent() {
                Some(parent) => parent.to_path_buf(),
                None => input_dir.clone(),
            };

            // Check if an extraction already exists
            let output_path = FileManager::generate_output_path(script_file, &output_dir, OUTPUT_EXTENSION);
            if output_path.exists() && !force_overwrite {
                // Skip if the record already exists and no force flag
                warn!("Skipping {}, extraction already exists (use -f to force overwrite)", file_name);
                skip_count += 1;
                folder_pb.inc(1);
                continue;
            }

            // Run the extraction for this file
            match self.parse_file(script_file).and_then(|movie| {
                self.save_movie(&movie, script_file, &output_dir)
            }) {
                Ok(_) => {
                    success_count += 1;
                },
                Err(e) => {
                    error!("Error processing file {}: {}", file_name, e);
                    error_count += 1;
                }
            }

            // Update the folder progress bar
            folder_pb.inc(1);
        }

        // Finish the folder progress bar
        folder_pb.finish_with_message("Folder processing complete");

        // Give summary results - important for batch operations
        info!(
            "Folder processing completed: {} processed, {} skipped, {} errors - Duration: {}",
            success_count, skip_count, error_count,
            Self::format_duration(start_time.elapsed())
        );

        Ok(())
    }

    /// Save an extracted movie record to the output directory
    fn save_movie(&self, movie: &Movie, input_file: &Path, output_dir: &Path) -> Result<PathBuf> {
        let output_path = FileManager::generate_output_path(input_file, output_dir, OUTPUT_EXTENSION);

        let json = serde_json::to_string_pretty(movie)
            .context("Failed to serialize movie record")?;
        FileManager::write_to_file(&output_path, &json)?;

        // Log that we saved the record
        info!("Success: {}", output_path.display());

        Ok(output_path)
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
