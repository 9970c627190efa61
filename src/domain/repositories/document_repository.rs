use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::models::file_tree::FileNode;

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn read_text(&self, path: &Path) -> Result<String, DomainError>;
    async fn write_text(&self, path: &Path, content: &str) -> Result<(), DomainError>;
    async fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, DomainError>;
    async fn copy_file(&self, source: &Path, destination: &Path) -> Result<(), DomainError>;
    async fn read_folder(&self, path: &Path) -> Result<FileNode, DomainError>;
}
