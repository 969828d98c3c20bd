//! Episode selection
//!
//! Turns the parsed feed into concrete download jobs. Feed order is assumed
//! newest-first (RSS convention) and is preserved as-is; no date-based sorting
//! is applied.

use crate::feed::Episode;
use tracing::warn;

/// MIME type an enclosure must declare to be downloadable
const AUDIO_MIME_TYPE: &str = "audio/mpeg";

/// One resolved (title, audio URL) pair eligible for download
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadJob {
    /// Episode title the output filename is derived from
    pub title: String,

    /// URL of the episode's `audio/mpeg` enclosure
    pub audio_url: String,
}

/// Select up to `count` download jobs from the first episodes in feed order.
///
/// Considers exactly `min(count, episodes.len())` episodes. An episode whose
/// media variants include no `audio/mpeg` entry is skipped with a warning;
/// this is a per-item gap, never a run-level error.
pub fn select_jobs(episodes: &[Episode], count: usize) -> Vec<DownloadJob> {
    episodes
        .iter()
        .take(count)
        .filter_map(|episode| match audio_url(episode) {
            Some(url) => Some(DownloadJob {
                title: episode.title.clone(),
                audio_url: url.to_string(),
            }),
            None => {
                warn!("No audio found for: {}", episode.title);
                None
            }
        })
        .collect()
}

/// First `audio/mpeg` variant URL of an episode, if any
fn audio_url(episode: &Episode) -> Option<&str> {
    episode
        .media
        .iter()
        .find(|variant| variant.mime_type == AUDIO_MIME_TYPE)
        .map(|variant| variant.url.as_str())
}
