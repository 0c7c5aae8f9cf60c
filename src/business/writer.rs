use crate::domain::ProcessedOrder;
use std::path::Path;
use tracing::info;

pub const DEFAULT_OUTPUT_FILE: &str = "orders_name.txt";

/// Sort by creation time, oldest first. Ties keep their scan order.
pub fn sort_chronologically(records: &mut [ProcessedOrder]) {
    records.sort_by_key(|r| r.created_time);
}

/// Render item titles, one per line, in chronological order.
pub fn render_titles(records: &[ProcessedOrder]) -> String {
    let mut sorted = records.to_vec();
    sort_chronologically(&mut sorted);

    let mut contents = String::new();
    for record in &sorted {
        contents.push_str(&record.item_title);
        contents.push('\n');
    }
    contents
}

/// Overwrite `path` with the processed item titles.
pub fn write_processed(path: &Path, records: &[ProcessedOrder]) -> std::io::Result<()> {
    std::fs::write(path, render_titles(records))?;
    info!("Wrote {} item title(s) to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(day: u32, hour: u32, title: &str) -> ProcessedOrder {
        ProcessedOrder::new(Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap(), title)
    }

    #[test]
    fn test_titles_sorted_by_creation_time() {
        let records = vec![
            record(20, 9, "Lamp"),
            record(2, 18, "Mug"),
            record(2, 7, "Plate"),
        ];

        assert_eq!(render_titles(&records), "Plate\nMug\nLamp\n");
    }

    #[test]
    fn test_equal_timestamps_keep_scan_order() {
        let records = vec![record(5, 10, "First"), record(5, 10, "Second")];
        assert_eq!(render_titles(&records), "First\nSecond\n");
    }

    #[test]
    fn test_write_overwrites_previous_content() {
        let path = std::env::temp_dir().join(format!("orders-{}.txt", uuid::Uuid::new_v4()));
        std::fs::write(&path, "stale\nstale\nstale\n").unwrap();

        write_processed(&path, &[record(1, 1, "Fresh")]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Fresh\n");

        write_processed(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

        std::fs::remove_file(&path).unwrap();
    }
}
