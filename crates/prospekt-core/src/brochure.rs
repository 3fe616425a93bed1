//! Brochure listing record and the sentinel values that stand in for data
//! that could not be determined.
//!
//! A record never has an absent field. Missing data is expressed through the
//! sentinels [`UNKNOWN`] and [`EMPTY`], and [`MissingMarker`] is the single
//! place that decides whether a value counts as missing.

use serde::{Deserialize, Serialize};

/// Text sentinel for a field whose markup node or date could not be resolved.
pub const UNKNOWN: &str = "Unknown";

/// Empty-string sentinel, used for an absent thumbnail URL.
pub const EMPTY: &str = "";

/// Output form of `valid_from` / `valid_to`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Output form of `parsed_time`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One brochure listing tile.
///
/// Field declaration order is the serialization order:
/// `title, thumbnail, shop_name, valid_from, valid_to, parsed_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrochureRecord {
    pub title: String,
    /// Lazy-load source of the shop logo, falling back to the direct source.
    pub thumbnail: String,
    pub shop_name: String,
    /// `YYYY-MM-DD` or [`UNKNOWN`].
    pub valid_from: String,
    /// `YYYY-MM-DD` or [`UNKNOWN`]. Always [`UNKNOWN`] for open-ended listings.
    pub valid_to: String,
    /// Local capture time, `YYYY-MM-DD HH:MM:SS`.
    pub parsed_time: String,
}

impl BrochureRecord {
    /// Returns `(field_name, value)` pairs in serialization order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("title", self.title.as_str()),
            ("thumbnail", self.thumbnail.as_str()),
            ("shop_name", self.shop_name.as_str()),
            ("valid_from", self.valid_from.as_str()),
            ("valid_to", self.valid_to.as_str()),
            ("parsed_time", self.parsed_time.as_str()),
        ]
    }

    /// Names of the fields currently holding a sentinel value.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.is_missing())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Whether a field value is one of the defined missing-markers.
pub trait MissingMarker {
    fn is_missing(&self) -> bool;
}

impl MissingMarker for str {
    fn is_missing(&self) -> bool {
        self == UNKNOWN || self == EMPTY
    }
}

impl MissingMarker for String {
    fn is_missing(&self) -> bool {
        self.as_str().is_missing()
    }
}

impl<T> MissingMarker for [T] {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl<T> MissingMarker for Vec<T> {
    fn is_missing(&self) -> bool {
        self.as_slice().is_missing()
    }
}

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn capture_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
#[path = "brochure_test.rs"]
mod tests;
