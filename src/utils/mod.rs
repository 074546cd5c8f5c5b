/// Name of the per-user folder holding config and logs
pub const APP_FOLDER: &str = ".issue-template";

/// Get the path to the per-user app folder (`~/.issue-template`)
#[must_use]
pub fn get_app_path() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(APP_FOLDER)
}
