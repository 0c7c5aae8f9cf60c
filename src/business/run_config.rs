use crate::domain::{Language, MessageTemplate, MonthRange, SkipSet};
use std::path::PathBuf;

/// Which reached line items end up in the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordMode {
    /// Every line item of a non-skipped order.
    #[default]
    All,
    /// Only line items that had no feedback.
    MissingFeedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanPolicy {
    pub skip_cancelled: bool,
    pub record_mode: RecordMode,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            skip_cancelled: true,
            record_mode: RecordMode::All,
        }
    }
}

/// Everything one reminder run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub range: MonthRange,
    pub language: Language,
    pub template: MessageTemplate,
    pub skip_set: SkipSet,
    pub policy: ScanPolicy,
    pub output_path: PathBuf,
}
