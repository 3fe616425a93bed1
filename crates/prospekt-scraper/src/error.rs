use thiserror::Error;

/// Errors that abort a run. Everything below the page level is absorbed
/// into sentinel values instead.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Reasons a validity-date text could not be turned into a date range.
#[derive(Debug, Error)]
pub enum DateParseError {
    #[error("no DD.MM.YYYY date after \"von\" in {text:?}")]
    MissingStartDate { text: String },

    #[error("expected 2 hyphen-separated dates, found {found} part(s) in {text:?}")]
    PartCount { found: usize, text: String },

    #[error("{part:?} is not a valid DD.MM.YYYY date: {source}")]
    InvalidDate {
        part: String,
        #[source]
        source: chrono::ParseError,
    },
}
