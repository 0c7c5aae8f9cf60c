use crate::business::run_config::{RecordMode, RunConfig, ScanPolicy};
use crate::business::writer::DEFAULT_OUTPUT_FILE;
use crate::domain::{Language, MessageTemplate, MonthRange, SkipSet, DEFAULT_SKIP_FILE};
use crate::error::AppError;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Send feedback reminders to eBay buyers who have not reviewed last month's orders.
#[derive(Debug, Parser)]
#[command(name = "feedback_reminder", version)]
pub struct Cli {
    /// Language of the reminder message
    #[arg(long, value_enum, default_value_t = Language::English)]
    pub language: Language,

    /// Buyer ids to skip (comma or space separated)
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub skip_names: Vec<String>,

    /// Month to search (1-12); defaults to the previous month
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub custom_month: Option<u32>,

    /// Skip list file, one buyer id per line
    #[arg(long, default_value = DEFAULT_SKIP_FILE)]
    pub skip_file: PathBuf,

    /// File receiving the processed item titles
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Also remind buyers of cancelled orders
    #[arg(long)]
    pub include_cancelled: bool,

    /// Only list items that had no feedback in the output file
    #[arg(long)]
    pub only_missing_feedback: bool,

    /// Leave the "automated message" sentence out of the reminder
    #[arg(long)]
    pub no_automated_notice: bool,
}

impl Cli {
    /// Resolve the run configuration. Reads the skip file.
    pub fn into_run_config(self, today: NaiveDate) -> Result<RunConfig, AppError> {
        let range = MonthRange::resolve(self.custom_month, today)?;
        let file_set = SkipSet::load(&self.skip_file).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read skip list {}: {}", self.skip_file.display(), e),
            )
        })?;
        let skip_set = SkipSet::resolve(&self.skip_names, Some(file_set));
        info!(
            "Searching orders from {} to {}, skipping {} buyer(s)",
            range.start_string(),
            range.end_string(),
            skip_set.len()
        );

        let policy = ScanPolicy {
            skip_cancelled: !self.include_cancelled,
            record_mode: if self.only_missing_feedback {
                RecordMode::MissingFeedback
            } else {
                RecordMode::All
            },
        };

        Ok(RunConfig {
            range,
            language: self.language,
            template: MessageTemplate::for_language(self.language, !self.no_automated_notice),
            skip_set,
            policy,
            output_path: self.output,
        })
    }
}
