use std::error::Error;
use std::path::PathBuf;

use tauri::{AppHandle, Manager};

/// Overrides the platform app-data directory, mainly for portable installs.
pub const DATA_DIR_ENV: &str = "TEXPILOT_DATA_DIR";

pub fn resolve_app_data_dir(app_handle: &AppHandle) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty()) {
        let dir = PathBuf::from(dir);
        tracing::debug!("Using {} override: {:?}", DATA_DIR_ENV, dir);
        return Ok(dir);
    }

    Ok(app_handle.path().app_data_dir()?)
}
