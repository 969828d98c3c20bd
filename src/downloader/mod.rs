//! Download orchestration and per-episode download tasks
//!
//! One task is spawned per download job with no concurrency limit; the
//! orchestrator drains its [`JoinSet`] so it cannot return while any task is
//! still writing a file. Tasks are fully independent: a failed download is
//! reported and recorded in its outcome, and never cancels or blocks a
//! sibling.

use crate::config::DownloadOptions;
use crate::error::{Error, Result};
use crate::feed::{self, Episode};
use crate::selector::DownloadJob;
use crate::utils::sanitized_filename;
use futures::StreamExt;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use tokio::io::AsyncWriteExt;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Result of one download task, reported after the join barrier
#[derive(Debug)]
pub struct JobOutcome {
    /// Episode title the job was created from
    pub title: String,

    /// Output filename the task wrote (or was going to write)
    pub filename: String,

    /// Bytes written on success, the task's error otherwise
    pub result: Result<u64>,
}

/// Fetches feeds and downloads episode enclosures concurrently
pub struct PodcastDownloader {
    /// HTTP client shared by the feed fetch and all download tasks
    client: reqwest::Client,

    /// Output directory and per-download timeout
    options: DownloadOptions,

    /// Shared terminal area for the per-task progress bars
    progress: MultiProgress,
}

impl PodcastDownloader {
    /// Create a downloader with the given options
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new(options: DownloadOptions) -> Result<Self> {
        // No client-wide timeout: the per-download deadline, when configured,
        // is applied per request so it covers the full body read.
        let client = reqwest::Client::builder()
            .user_agent(concat!("podcast-dl/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            options,
            progress: MultiProgress::with_draw_target(ProgressDrawTarget::stderr()),
        })
    }

    /// Fetch and parse the feed at `url` into episodes in document order
    ///
    /// # Errors
    /// Returns [`Error::Network`] or [`Error::HttpStatus`] when the feed
    /// cannot be fetched and [`Error::Parse`] when the body is not well-formed
    /// RSS. All of these abort the run; no downloads are attempted.
    pub async fn fetch_feed(&self, url: &str) -> Result<Vec<Episode>> {
        let body = feed::fetch(&self.client, url).await?;
        feed::parse(&body)
    }

    /// Download all jobs concurrently and wait for every task to finish.
    ///
    /// Spawns one task per job (fan-out equals the job count) and returns only
    /// after each task has signaled completion, success or failure. Outcomes
    /// are returned for programmatic callers; completion order is
    /// nondeterministic.
    pub async fn download_all(&self, jobs: Vec<DownloadJob>) -> Vec<JobOutcome> {
        let mut tasks = JoinSet::new();

        for job in jobs {
            let client = self.client.clone();
            let options = self.options.clone();
            let progress = self.progress.clone();
            tasks.spawn(async move { download_one(client, options, progress, job).await });
        }

        // Join barrier: drain every task before returning
        let mut outcomes = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => warn!("Download task panicked: {}", e),
            }
        }

        outcomes
    }
}

/// Run one download job end-to-end, reporting its failure to the console
async fn download_one(
    client: reqwest::Client,
    options: DownloadOptions,
    progress: MultiProgress,
    job: DownloadJob,
) -> JobOutcome {
    let filename = sanitized_filename(&job.title);
    let result = run_download(&client, &options, &progress, &job, &filename).await;

    if let Err(ref e) = result {
        let _ = progress.println(format!("Failed to download {}: {}", job.title, e));
    }

    JobOutcome {
        title: job.title,
        filename,
        result,
    }
}

/// Request the enclosure and stream it to the destination file.
///
/// Returns the number of bytes written. On failure any partially written file
/// is left in place.
async fn run_download(
    client: &reqwest::Client,
    options: &DownloadOptions,
    progress: &MultiProgress,
    job: &DownloadJob,
    filename: &str,
) -> Result<u64> {
    debug!("Requesting {}", job.audio_url);

    let mut request = client.get(&job.audio_url);
    if let Some(timeout) = options.timeout {
        request = request.timeout(timeout);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            url: job.audio_url.clone(),
        });
    }

    let bar = progress.add(byte_bar(response.content_length(), filename));
    let path = options.output_dir.join(filename);

    match stream_to_file(response, &path, &bar).await {
        Ok(written) => {
            bar.finish_and_clear();
            let _ = progress.println(format!("Download complete: {}", filename));
            Ok(written)
        }
        Err(e) => {
            bar.abandon();
            Err(e)
        }
    }
}

/// Copy the response body to `path`, advancing the bar byte-for-byte
async fn stream_to_file(
    response: reqwest::Response,
    path: &std::path::Path,
    bar: &ProgressBar,
) -> Result<u64> {
    // Truncates any existing file of the same name
    let mut file = tokio::fs::File::create(path).await?;

    let mut written = 0u64;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
        bar.inc(chunk.len() as u64);
    }

    file.flush().await?;
    Ok(written)
}

/// Progress bar sized to the declared content length, or an indeterminate
/// spinner when the response does not declare one
fn byte_bar(content_length: Option<u64>, filename: &str) -> ProgressBar {
    let bar = match content_length {
        Some(len) => {
            let style = ProgressStyle::with_template(
                "{prefix} {bytes}/{total_bytes} {wide_bar} ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");

            let bar = ProgressBar::new(len);
            bar.set_style(style);
            bar
        }
        None => {
            let style = ProgressStyle::with_template("{prefix} {bytes} {spinner}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());

            let bar = ProgressBar::new_spinner();
            bar.set_style(style);
            bar
        }
    };

    bar.set_prefix(format!("Downloading {}", filename));
    bar
}
