use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Utc};

use crate::types::{HotSearchItem, Snapshot};

pub const LATEST_FILE_NAME: &str = "latest.json";
pub const ARCHIVE_FILE_PREFIX: &str = "baidu-hotsearch-";

const BEIJING_OFFSET_SECS: i32 = 8 * 3600;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to create data directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The board's civil time zone (UTC+8, no DST).
pub fn board_offset() -> FixedOffset {
    FixedOffset::east_opt(BEIJING_OFFSET_SECS).expect("UTC+8 is a valid offset")
}

pub fn now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&board_offset())
}

/// Writes snapshots into a data directory as a dated archive file plus
/// `latest.json`.
#[derive(Debug, Clone)]
pub struct Snapshotter {
    data_dir: PathBuf,
}

impl Snapshotter {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn archive_path(&self, snapshot: &Snapshot) -> PathBuf {
        self.data_dir.join(format!(
            "{}{}.json",
            ARCHIVE_FILE_PREFIX,
            snapshot.date_suffix()
        ))
    }

    pub fn latest_path(&self) -> PathBuf {
        self.data_dir.join(LATEST_FILE_NAME)
    }

    /// Stamps `items` with the current time and writes both files.
    pub fn save(&self, items: Vec<HotSearchItem>) -> Result<PathBuf, SnapshotError> {
        self.write(&Snapshot::new(now(), items))
    }

    /// Writes `snapshot` to the archive and latest files, returning the
    /// archive path. Both files receive the same bytes.
    pub fn write(&self, snapshot: &Snapshot) -> Result<PathBuf, SnapshotError> {
        fs::create_dir_all(&self.data_dir).map_err(|source| SnapshotError::CreateDir {
            path: self.data_dir.clone(),
            source,
        })?;

        let payload = serde_json::to_string_pretty(snapshot)?;

        let archive_path = self.archive_path(snapshot);
        let latest_path = self.latest_path();

        for path in [&archive_path, &latest_path] {
            fs::write(path, payload.as_bytes()).map_err(|source| SnapshotError::Write {
                path: path.clone(),
                source,
            })?;
            log::debug!("Wrote {} bytes to {}", payload.len(), path.display());
        }

        Ok(archive_path)
    }
}
