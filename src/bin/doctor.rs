//! Bare-request variant: downloads run without a deadline.

use clap::Parser;
use podcast_dl::{DownloadOptions, Error, Feed, PodcastDownloader, select_jobs};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "doctor")]
#[command(about = "Download the latest episodes of a preconfigured podcast feed")]
struct Args {
    /// Number of latest episodes to download
    #[arg(short = 'n', default_value_t = 1)]
    episodes: usize,

    /// Which RSS feed to use
    #[arg(long = "rss", value_enum, default_value = "doctor")]
    feed: Feed,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let downloader = match PodcastDownloader::new(DownloadOptions::default()) {
        Ok(downloader) => downloader,
        Err(e) => {
            eprintln!("Failed to create HTTP client: {}", e);
            return;
        }
    };

    let episodes = match downloader.fetch_feed(args.feed.url()).await {
        Ok(episodes) => episodes,
        Err(e @ Error::Parse(_)) => {
            eprintln!("Failed to parse RSS feed: {}", e);
            return;
        }
        Err(e) => {
            eprintln!("Failed to fetch RSS feed: {}", e);
            return;
        }
    };

    let jobs = select_jobs(&episodes, args.episodes);

    // Per-task failures are reported as they happen; the exit status does not
    // reflect them.
    downloader.download_all(jobs).await;
}
