//! Feed fetching and Media-RSS parsing
//!
//! Fetches a podcast feed over HTTP and decodes it into an ordered list of
//! episodes. Enclosures arrive as namespaced `media:content` elements, so the
//! parser resolves the Media-RSS namespace through the channel's namespace
//! table by URI instead of assuming a particular prefix.

use crate::error::{Error, Result};
use tracing::debug;

/// Namespace URI identifying Media-RSS `content` elements
const MEDIA_RSS_NAMESPACE: &str = "http://search.yahoo.com/mrss/";

/// One episode from a podcast feed, in document order
#[derive(Clone, Debug)]
pub struct Episode {
    /// Episode title, used (sanitized) as the output filename stem
    pub title: String,

    /// Publication date, kept as opaque feed text
    pub pub_date: Option<String>,

    /// Media variants declared for this episode, in document order.
    /// May be empty; an episode with no `audio/mpeg` variant is not
    /// downloadable.
    pub media: Vec<MediaVariant>,
}

/// One `media:content` enclosure attached to an episode
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaVariant {
    /// Absolute URL of the asset
    pub url: String,

    /// Declared MIME type, compared by exact equality to `audio/mpeg`
    pub mime_type: String,
}

/// Fetch the raw feed body from `url`.
///
/// # Errors
/// Returns [`Error::Network`] when the request cannot be completed and
/// [`Error::HttpStatus`] when the server answers with a non-success status.
/// Either failure aborts the run before any download is attempted.
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!("Fetching RSS feed: {}", url);

    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(response.text().await?)
}

/// Parse feed content into episodes, preserving document order.
///
/// A well-formed feed with zero `<item>` elements yields an empty vector.
///
/// # Errors
/// Returns [`Error::Parse`] when the content is not a well-formed RSS
/// document.
pub fn parse(content: &str) -> Result<Vec<Episode>> {
    let channel = content.parse::<rss::Channel>()?;

    // Prefixes bound to the Media-RSS namespace URI. Feeds differ here:
    // some declare `media:`, others `mrss:`.
    let media_prefixes: Vec<&str> = channel
        .namespaces()
        .iter()
        .filter(|(_, uri)| uri.as_str() == MEDIA_RSS_NAMESPACE)
        .map(|(prefix, _)| prefix.as_str())
        .collect();

    let episodes = channel
        .items()
        .iter()
        .map(|item| {
            let media = media_prefixes
                .iter()
                .filter_map(|prefix| item.extensions().get(*prefix))
                .filter_map(|elements| elements.get("content"))
                .flatten()
                .filter_map(|content| {
                    // A variant without a URL cannot be downloaded at all
                    let url = content.attrs().get("url")?.clone();
                    let mime_type = content.attrs().get("type").cloned().unwrap_or_default();
                    Some(MediaVariant { url, mime_type })
                })
                .collect();

            Episode {
                title: item.title().unwrap_or("").to_string(),
                pub_date: item.pub_date().map(|d| d.to_string()),
                media,
            }
        })
        .collect::<Vec<_>>();

    debug!("Parsed {} feed items", episodes.len());
    Ok(episodes)
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
