use std::fmt::Display;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One ranked entry of the hot search board.
///
/// Only `rank` is guaranteed to carry data. Every text field falls back to an
/// empty string when the card did not render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotSearchItem {
    pub rank: i64,
    pub title: String,
    pub summary: String,
    pub hot_score: String,
    pub detail_url: String,
}

impl Display for HotSearchItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.rank, self.title)?;
        if !self.hot_score.is_empty() {
            write!(f, " ({})", self.hot_score)?;
        }
        Ok(())
    }
}

/// The envelope written to disk for a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generated_at: DateTime<FixedOffset>,
    pub items: Vec<HotSearchItem>,
}

impl Snapshot {
    pub fn new(generated_at: DateTime<FixedOffset>, items: Vec<HotSearchItem>) -> Self {
        Self {
            generated_at,
            items,
        }
    }

    /// Calendar date of the snapshot in `YYYYMMDD` form, taken in the
    /// timestamp's own offset.
    pub fn date_suffix(&self) -> String {
        self.generated_at.format("%Y%m%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(rank: i64, title: &str, hot_score: &str) -> HotSearchItem {
        HotSearchItem {
            rank,
            title: title.to_string(),
            summary: String::new(),
            hot_score: hot_score.to_string(),
            detail_url: String::new(),
        }
    }

    #[test]
    fn test_item_display_with_and_without_score() {
        assert_eq!(item(1, "标题", "4955075").to_string(), "#1 标题 (4955075)");
        assert_eq!(item(7, "", "").to_string(), "#7 ");
    }

    #[test]
    fn test_date_suffix_uses_local_offset() {
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        // 16:30 UTC on the 14th is already the 15th at +08:00
        let generated_at = offset.with_ymd_and_hms(2024, 1, 15, 0, 30, 0).unwrap();
        let snapshot = Snapshot::new(generated_at, Vec::new());
        assert_eq!(snapshot.date_suffix(), "20240115");
    }

    #[test]
    fn test_snapshot_serializes_rfc3339_with_offset() {
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        let generated_at = offset.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let snapshot = Snapshot::new(generated_at, vec![item(1, "a", "1")]);

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["generated_at"], "2024-01-15T10:00:00+08:00");
        assert_eq!(value["items"][0]["rank"], 1);
        assert_eq!(value["items"][0]["detail_url"], "");
    }
}
