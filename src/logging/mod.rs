mod init;
pub use init::{init_logging, parse_rotation};
use crate::utils::get_app_path;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;
/// Log filename used by the plugin.
pub const LOG_FILENAME: &str = "issue-template.log";
/// Configuration for the logging system.
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: get_app_path().join("logs"),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
