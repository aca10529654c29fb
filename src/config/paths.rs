use std::path::{Path, PathBuf};

const APP_ID: &str = "com.studyplanner.app";

/// Platform-specific app data directory.
pub fn app_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push("Library/Application Support");
            dir.push(APP_ID);
            return dir;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            let mut dir = PathBuf::from(appdata);
            dir.push(APP_ID);
            return dir;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push(".local/share");
            dir.push(APP_ID);
            return dir;
        }
    }

    // Fallback
    PathBuf::from("data")
}

pub fn settings_path() -> PathBuf {
    app_data_dir().join("settings.toml")
}

/// Where plans and session records live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub plans: PathBuf,
    pub sessions: PathBuf,
}

impl DataPaths {
    /// Layout rooted at an arbitrary directory.
    pub fn under(root: &Path) -> Self {
        DataPaths {
            plans: root.join("data").join("plans.json"),
            sessions: root.join("data").join("sessions"),
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        DataPaths::under(&app_data_dir())
    }
}
