//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use url::Url;

/// A live-updating image feed in the terminal.
#[derive(Debug, Parser)]
#[command(name = "livescroll-feed", version, about)]
pub struct Config {
    /// Feed endpoint returning a JSON array of images.
    #[arg(default_value = "http://localhost:8080/feed.json")]
    pub url: Url,

    /// File the last fetched feed is cached in.
    #[arg(long, default_value = "feed-cache.json")]
    pub cache_path: PathBuf,

    /// Where log records go (filtered by RUST_LOG, default `info`).
    #[arg(long, default_value = "livescroll-feed.log")]
    pub log_file: PathBuf,

    /// Seconds between automatic re-fetches; 0 disables them.
    #[arg(long, default_value_t = 60)]
    pub refresh_secs: u64,

    /// Seconds before an unanswered request fails and the cache is used.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl Config {
    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_secs > 0).then(|| Duration::from_secs(self.refresh_secs))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["livescroll-feed"]).unwrap();

        assert_eq!(config.url.as_str(), "http://localhost:8080/feed.json");
        assert_eq!(config.cache_path, PathBuf::from("feed-cache.json"));
        assert_eq!(config.refresh_interval(), Some(Duration::from_secs(60)));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn request_timeout_is_never_zero() {
        let config = Config::try_parse_from(["livescroll-feed", "--timeout-secs", "0"]).unwrap();
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn zero_refresh_disables_polling() {
        let config = Config::try_parse_from(["livescroll-feed", "--refresh-secs", "0"]).unwrap();
        assert_eq!(config.refresh_interval(), None);
    }

    #[test]
    fn rejects_invalid_url() {
        assert!(Config::try_parse_from(["livescroll-feed", "not a url"]).is_err());
    }
}
