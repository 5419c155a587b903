pub mod fetcher;
pub mod parser;
pub mod snapshot;
pub mod types;

use std::path::{Path, PathBuf};

pub use fetcher::{FetchError, WebFetcher};
pub use parser::{BoardLayout, BoardSelectors, ParseError, parse_hot_search};
pub use snapshot::{SnapshotError, Snapshotter};
pub use types::{HotSearchItem, Snapshot};

pub const HOT_SEARCH_URL: &str = "https://top.baidu.com/board?tab=realtime";
pub const DATA_DIR: &str = "data";

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Error while fetching hot search board: {0}")]
    Fetch(#[from] FetchError),
    #[error("No hot search items were found.")]
    EmptyResult,
    #[error("Error while saving snapshot: {0}")]
    Snapshot(#[from] SnapshotError),
}

impl RunError {
    /// Process exit status for this failure. A run is all-or-nothing, so every
    /// failure maps to the same code.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Fetch(_) | RunError::EmptyResult | RunError::Snapshot(_) => 1,
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    pub archive_path: PathBuf,
    pub item_count: usize,
}

/// Fetches the board at `url`, extracts its entries and snapshots them into
/// `data_dir`. Nothing is written when the fetch fails or no entries are found.
pub async fn run(url: &str, data_dir: impl AsRef<Path>) -> Result<Saved, RunError> {
    let fetcher = WebFetcher::new()?;
    let html = fetcher.fetch_html(url).await?;

    let items = parse_hot_search(&html);
    if items.is_empty() {
        return Err(RunError::EmptyResult);
    }
    log::info!("Extracted {} hot search item(s)", items.len());
    for item in &items {
        log::debug!("{}", item);
    }

    let item_count = items.len();
    let archive_path = Snapshotter::new(data_dir.as_ref()).save(items)?;

    Ok(Saved {
        archive_path,
        item_count,
    })
}
