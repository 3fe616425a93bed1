use std::path::PathBuf;

pub const DEFAULT_SOURCE_URL: &str = "https://www.prospektmaschine.de/hypermarkte/";
pub const DEFAULT_OUTPUT_PATH: &str = "brochures.json";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "prospekt/0.1 (brochure-listing)";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source_url: String,
    pub output_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("source_url", &self.source_url)
            .field("output_path", &self.output_path.display())
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
