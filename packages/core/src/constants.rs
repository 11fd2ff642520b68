use labtrack_config::{HOME, LABTRACK_DATA_DIR};
use std::env;
use std::path::PathBuf;

/// Key of the slot holding the serialized list of test requests
pub const STORAGE_KEY: &str = "test_requests";

/// Get the path to the labtrack data directory.
///
/// `LABTRACK_DATA_DIR` wins when set; otherwise `$HOME/.labtrack`.
pub fn labtrack_dir() -> PathBuf {
    if let Ok(dir) = env::var(LABTRACK_DATA_DIR) {
        return PathBuf::from(dir);
    }

    // HOME first so tests can redirect it
    if let Ok(home) = env::var(HOME) {
        PathBuf::from(home).join(".labtrack")
    } else {
        dirs::home_dir()
            .unwrap_or_else(env::temp_dir)
            .join(".labtrack")
    }
}
