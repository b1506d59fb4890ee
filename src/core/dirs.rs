use crate::core::error::GitGrepError;
use std::path::PathBuf;

const APP_DIR: &str = "gitgrep";

pub fn get_config_directory() -> Result<PathBuf, GitGrepError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|dir| dir.join(APP_DIR))
        .ok_or(GitGrepError::ConfigDirectoryNotFound)
}
