//! Command-line options for the newsfeed viewer.
//!
//! Filter flags set the initial form values; anything left out keeps the
//! viewer's defaults (all topics, English, worldwide, last 7 days).

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use newsfeed_core::FilterState;
use newsfeed_engine::FetchSettings;

use crate::platform::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse news headlines served by a newsfeed API")]
pub struct Cli {
    /// Origin of the news API (`/api/news` and `/api/search` are appended)
    #[arg(long, env = "NEWSFEED_BASE_URL", default_value = "http://127.0.0.1:5000")]
    pub base_url: String,

    /// Topic code, e.g. technology or business
    #[arg(long)]
    pub topic: Option<String>,

    /// Language code, e.g. en or de
    #[arg(long)]
    pub language: Option<String>,

    /// Country code, e.g. us or jp; `all` for worldwide
    #[arg(long)]
    pub country: Option<String>,

    /// One of today, week, month, year
    #[arg(long)]
    pub date_range: Option<String>,

    /// Search keywords; switches from headlines to search
    #[arg(long)]
    pub keywords: Option<String>,

    /// Directory receiving the rendered `index.html`
    #[arg(short, long, default_value = "newsfeed_output")]
    pub output_dir: PathBuf,

    /// Give up on a request after this many seconds (no limit by default)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Give up on connecting after this many seconds (no limit by default)
    #[arg(long)]
    pub connect_timeout_secs: Option<u64>,

    /// Where log lines go
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    pub log: LogDestination,

    /// Minimum log level
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,

    /// Keep running and read filter commands from stdin
    #[arg(short, long)]
    pub interactive: bool,
}

impl Cli {
    /// Initial filters: defaults overridden by whatever flags were given.
    pub fn filters(&self) -> FilterState {
        let mut filters = FilterState::default();
        if let Some(topic) = &self.topic {
            filters = filters.with_topic(topic.as_str());
        }
        if let Some(language) = &self.language {
            filters = filters.with_language(language.as_str());
        }
        if let Some(country) = &self.country {
            filters = filters.with_country(country.as_str());
        }
        if let Some(date_range) = &self.date_range {
            filters = filters.with_date_range(date_range.as_str());
        }
        if let Some(keywords) = &self.keywords {
            filters = filters.with_keywords(keywords);
        }
        filters
    }

    /// Transport settings; timeouts stay off unless their flags are given.
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.timeout_secs.map(Duration::from_secs),
            ..FetchSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_viewer_defaults() {
        let cli = Cli::parse_from(["newsfeed"]);
        assert_eq!(cli.filters(), FilterState::default());
        assert_eq!(cli.output_dir, PathBuf::from("newsfeed_output"));
        assert_eq!(cli.timeout_secs, None);
        assert_eq!(cli.connect_timeout_secs, None);
        assert_eq!(cli.fetch_settings().connect_timeout, None);
        assert_eq!(cli.log, LogDestination::Terminal);
        assert_eq!(cli.log_level, LevelFilter::Info);
        assert!(!cli.interactive);
    }

    #[test]
    fn filter_flags_override_defaults() {
        let cli = Cli::parse_from([
            "newsfeed",
            "--topic",
            "science",
            "--country",
            "au",
            "--date-range",
            "month",
            "--keywords",
            " reef ",
            "--base-url",
            "http://news.local:8080",
            "--timeout-secs",
            "10",
            "--connect-timeout-secs",
            "3",
            "--log",
            "both",
            "-i",
        ]);

        let filters = cli.filters();
        assert_eq!(filters.topic(), "science");
        assert_eq!(filters.language(), "en");
        assert_eq!(filters.country(), "au");
        assert_eq!(filters.date_range(), "month");
        assert_eq!(filters.keywords(), "reef");
        assert_eq!(cli.base_url, "http://news.local:8080");
        assert_eq!(cli.timeout_secs, Some(10));
        assert_eq!(cli.connect_timeout_secs, Some(3));
        let settings = cli.fetch_settings();
        assert_eq!(settings.connect_timeout, Some(Duration::from_secs(3)));
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(10)));
        assert_eq!(cli.log, LogDestination::Both);
        assert!(cli.interactive);
    }
}
