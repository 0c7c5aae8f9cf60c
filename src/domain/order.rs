use chrono::{DateTime, Utc};

/// Order statuses that are left out of the reminder run.
pub const CANCELLED_STATUSES: [&str; 2] = ["Cancelled", "CancelPending"];

pub fn is_cancelled(status: &str) -> bool {
    CANCELLED_STATUSES.contains(&status)
}

/// One line item reached by the scan, kept for the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedOrder {
    pub created_time: DateTime<Utc>,
    pub item_title: String,
}

impl ProcessedOrder {
    pub fn new(created_time: DateTime<Utc>, item_title: impl Into<String>) -> Self {
        Self {
            created_time,
            item_title: item_title.into(),
        }
    }
}
