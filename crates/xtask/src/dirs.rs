//! Data directory resolution.
//!
//! Commands read content from `--data-dir` when given, else from
//! `$MOTION_DATA_DIR`, else from the platform data directory.

use std::path::PathBuf;

/// Platform-specific data directory for motion content
///
/// - macOS: `~/Library/Application Support/motion`
/// - Linux: `~/.local/share/motion` (or `$XDG_DATA_HOME/motion`)
/// - Windows: `%APPDATA%\motion`
/// - Fallback: `./data`
pub fn data_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if let Some(dir) = std::env::var_os("MOTION_DATA_DIR") {
        return PathBuf::from(dir);
    }
    directories::ProjectDirs::from("", "", "motion")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}
