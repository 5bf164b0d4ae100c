use std::env;

#[derive(Clone, Debug)]
pub struct LogConfig {
    /// Directory for the rolling JSON log files.
    pub dir: String,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self {
            dir: env::var("LOG_DIR").unwrap_or_else(|_| "storage/logs".to_string()),
        }
    }
}
