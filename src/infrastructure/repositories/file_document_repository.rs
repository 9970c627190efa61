use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs as tokio_fs;

use crate::domain::errors::DomainError;
use crate::domain::models::file_tree::{FileNode, is_hidden};
use crate::domain::repositories::document_repository::DocumentRepository;
use crate::infrastructure::logging::logger;

/// Documents on the local file system; paths are used as given.
#[derive(Default)]
pub struct FileDocumentRepository;

impl FileDocumentRepository {
    pub fn new() -> Self {
        Self
    }

    async fn ensure_parent(path: &Path) -> Result<(), DomainError> {
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            tokio_fs::create_dir_all(parent)
                .await
                .map_err(|error| DomainError::from_io(error, parent))?;
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentRepository for FileDocumentRepository {
    async fn read_text(&self, path: &Path) -> Result<String, DomainError> {
        tokio_fs::read_to_string(path)
            .await
            .map_err(|error| DomainError::from_io(error, path))
    }

    async fn write_text(&self, path: &Path, content: &str) -> Result<(), DomainError> {
        Self::ensure_parent(path).await?;
        tokio_fs::write(path, content)
            .await
            .map_err(|error| DomainError::from_io(error, path))
    }

    async fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, DomainError> {
        tokio_fs::read(path)
            .await
            .map_err(|error| DomainError::from_io(error, path))
    }

    async fn copy_file(&self, source: &Path, destination: &Path) -> Result<(), DomainError> {
        Self::ensure_parent(destination).await?;
        tokio_fs::copy(source, destination)
            .await
            .map(|_| ())
            .map_err(|error| DomainError::from_io(error, source))
    }

    async fn read_folder(&self, path: &Path) -> Result<FileNode, DomainError> {
        if !tokio_fs::try_exists(path)
            .await
            .map_err(|error| DomainError::from_io(error, path))?
        {
            return Err(DomainError::NotFound(path.display().to_string()));
        }

        let root = path.to_path_buf();
        tokio::task::spawn_blocking(move || build_tree(&root))
            .await
            .map_err(|error| DomainError::InternalError(format!("Folder scan failed: {error}")))
    }
}

fn build_tree(path: &Path) -> FileNode {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let is_dir = path.is_dir();

    let mut node = FileNode {
        name,
        path: path.to_string_lossy().into_owned(),
        is_dir,
        children: Vec::new(),
    };

    if is_dir {
        node.children = read_children(path)
            .into_iter()
            .map(|child| build_tree(&child))
            .collect();
        node.sort_children();
    }

    node
}

fn read_children(path: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(error) => {
            logger::warn(&format!("Skipping unreadable folder {:?}: {}", path, error));
            return Vec::new();
        }
    };

    entries
        .flatten()
        .filter(|entry| !is_hidden(&entry.file_name().to_string_lossy()))
        .map(|entry| entry.path())
        .collect()
}
