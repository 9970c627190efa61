use crate::domain::errors::DomainError;
use crate::infrastructure::logging::logger;
use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};
use tokio::fs::{self as tokio_fs, create_dir_all, read_to_string};

/// Represents the application data directory structure
pub struct DataDirectory {
    root: PathBuf,
    workspace: PathBuf,
    logs: PathBuf,
    settings_file: PathBuf,
}

impl DataDirectory {
    /// Create a new DataDirectory instance
    pub fn new(root: PathBuf) -> Self {
        let workspace = root.join("workspace");
        let logs = root.join("logs");
        let settings_file = root.join("settings.json");

        Self {
            root,
            workspace,
            logs,
            settings_file,
        }
    }

    /// Initialize the data directory structure
    pub async fn initialize(&self) -> Result<(), DomainError> {
        tracing::info!("Initializing data directory at: {:?}", self.root);

        for dir in [&self.root, &self.workspace, &self.logs] {
            create_directory(dir).await?;
        }

        tracing::info!("Data directory initialized successfully");
        Ok(())
    }

    /// Scratch space for documents without a path and uploaded PDFs
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    pub fn logs(&self) -> &Path {
        &self.logs
    }

    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }
}

async fn create_directory(path: &Path) -> Result<(), DomainError> {
    if !path.exists() {
        tracing::info!("Creating directory: {:?}", path);
        create_dir_all(path).await.map_err(|e| {
            tracing::error!("Failed to create directory {:?}: {}", path, e);
            DomainError::InternalError(format!("Failed to create directory: {}", e))
        })?;
    }
    Ok(())
}

/// Read a JSON file and deserialize it
pub async fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
    logger::debug(&format!("Reading JSON file: {:?}", path));

    let contents = read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DomainError::NotFound(format!("File not found: {}", path.display()))
        } else {
            logger::error(&format!("Failed to read file {:?}: {}", path, e));
            DomainError::InternalError(format!("Failed to read file: {}", e))
        }
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        logger::error(&format!("Failed to parse JSON from file {:?}: {}", path, e));
        DomainError::InvalidData(format!("Invalid JSON: {}", e))
    })
}

/// Serialize `data` as pretty JSON and write it, creating parent directories.
pub async fn write_json_file<T: Serialize>(path: &Path, data: &T) -> Result<(), DomainError> {
    logger::debug(&format!("Writing JSON file: {:?}", path));

    if let Some(parent) = path.parent() {
        create_dir_all(parent).await.map_err(|e| {
            logger::error(&format!(
                "Failed to create parent directory for {:?}: {}",
                path, e
            ));
            DomainError::InternalError(format!("Failed to create directory: {}", e))
        })?;
    }

    let json = serde_json::to_string_pretty(data).map_err(|e| {
        logger::error(&format!(
            "Failed to serialize to JSON for file {:?}: {}",
            path, e
        ));
        DomainError::InvalidData(format!("Failed to serialize to JSON: {}", e))
    })?;

    tokio_fs::write(path, json).await.map_err(|e| {
        logger::error(&format!("Failed to write to file {:?}: {}", path, e));
        DomainError::InternalError(format!("Failed to write to file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::random;

    #[tokio::test]
    async fn initialize_creates_workspace_and_logs() {
        let root = std::env::temp_dir().join(format!("texpilot-data-{}", random::<u64>()));
        let directory = DataDirectory::new(root.clone());

        directory.initialize().await.expect("initialize data directory");

        assert!(directory.workspace().is_dir());
        assert!(directory.logs().is_dir());
        assert_eq!(directory.settings_file(), root.join("settings.json"));

        let _ = tokio_fs::remove_dir_all(&root).await;
    }
}
