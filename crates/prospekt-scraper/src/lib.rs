pub mod client;
pub mod completeness;
pub mod dates;
pub mod error;
pub mod extract;
pub mod output;

pub use client::ProspektClient;
pub use completeness::{
    check_completeness, find_incomplete_fields, IncompleteField, NOTICE_HEADER,
};
pub use dates::{parse_date_range, try_parse_date_range, DateRange};
pub use error::{DateParseError, ScraperError};
pub use extract::extract_brochures;
pub use output::{to_json_string, write_json};
