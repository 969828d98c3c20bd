//! # podcast-dl
//!
//! Concurrent podcast episode downloader for a small set of preconfigured RSS feeds.
//!
//! The crate fetches a feed, selects the newest episodes, and downloads their
//! audio enclosures in parallel, one task per episode, with a progress bar per
//! active download.
//!
//! ## Quick Start
//!
//! ```no_run
//! use podcast_dl::{DownloadOptions, Feed, PodcastDownloader, select_jobs};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let downloader = PodcastDownloader::new(DownloadOptions::default())?;
//!
//!     let episodes = downloader.fetch_feed(Feed::Doctor.url()).await?;
//!     let jobs = select_jobs(&episodes, 3);
//!     let outcomes = downloader.download_all(jobs).await;
//!
//!     for outcome in outcomes {
//!         if let Err(e) = outcome.result {
//!             eprintln!("{} failed: {}", outcome.title, e);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Feed registry and download options
pub mod config;
/// Download orchestration and per-episode download tasks
pub mod downloader;
/// Error types
pub mod error;
/// Feed fetching and Media-RSS parsing
pub mod feed;
/// Episode selection
pub mod selector;
/// Filename helpers
pub mod utils;

// Re-export commonly used types
pub use config::{DownloadOptions, Feed};
pub use downloader::{JobOutcome, PodcastDownloader};
pub use error::{Error, Result};
pub use feed::{Episode, MediaVariant};
pub use selector::{DownloadJob, select_jobs};
pub use utils::sanitized_filename;
