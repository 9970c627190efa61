use std::path::{Path, PathBuf};
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::application::dto::document_dto::{
    CopyPdfToWorkspaceRequestDto, CopyPdfToWorkspaceResponseDto, ReadPdfRequestDto,
    ReadTexResponseDto, ReadTextFileRequestDto, ReadTextFileResponseDto, WriteTextFileRequestDto,
    WriteTextFileResponseDto,
};
use crate::application::errors::ApplicationError;
use crate::domain::errors::DomainError;
use crate::domain::models::file_tree::FileNode;
use crate::domain::models::project::{
    DEFAULT_TEX, UPLOADED_PDF_FILE, WORKSPACE_PDF_FILE, WORKSPACE_TEX_FILE,
};
use crate::domain::repositories::document_repository::DocumentRepository;

/// Plain file operations exposed to the frontend.
pub struct DocumentService {
    document_repository: Arc<dyn DocumentRepository>,
    workspace_dir: PathBuf,
}

impl DocumentService {
    pub fn new(document_repository: Arc<dyn DocumentRepository>, workspace_dir: PathBuf) -> Self {
        Self {
            document_repository,
            workspace_dir,
        }
    }

    pub async fn read_text_file(
        &self,
        dto: ReadTextFileRequestDto,
    ) -> Result<ReadTextFileResponseDto, ApplicationError> {
        let content = self
            .document_repository
            .read_text(Path::new(&dto.path))
            .await?;
        Ok(ReadTextFileResponseDto { content })
    }

    pub async fn write_text_file(
        &self,
        dto: WriteTextFileRequestDto,
    ) -> Result<WriteTextFileResponseDto, ApplicationError> {
        self.document_repository
            .write_text(Path::new(&dto.path), &dto.content)
            .await?;
        Ok(WriteTextFileResponseDto { ok: true })
    }

    /// Reads the workspace `main.tex`, falling back to the default document.
    pub async fn read_workspace_tex(&self) -> Result<ReadTexResponseDto, ApplicationError> {
        let path = self.workspace_dir.join(WORKSPACE_TEX_FILE);

        match self.document_repository.read_text(&path).await {
            Ok(content) => Ok(ReadTexResponseDto {
                content,
                tex_path: Some(path.to_string_lossy().into_owned()),
                workspace_dir: Some(self.workspace_dir.to_string_lossy().into_owned()),
            }),
            Err(DomainError::NotFound(_)) => Ok(ReadTexResponseDto {
                content: DEFAULT_TEX.to_string(),
                tex_path: None,
                workspace_dir: None,
            }),
            Err(error) => Err(error.into()),
        }
    }

    pub async fn read_pdf_base64(
        &self,
        dto: ReadPdfRequestDto,
    ) -> Result<String, ApplicationError> {
        let path = if dto.path.trim().is_empty() {
            self.workspace_dir.join(WORKSPACE_PDF_FILE)
        } else {
            PathBuf::from(dto.path)
        };

        let bytes = self
            .document_repository
            .read_bytes(&path)
            .await
            .map_err(|error| ApplicationError::NotFound(format!("Cannot read pdf: {error}")))?;
        Ok(STANDARD.encode(bytes))
    }

    pub async fn read_folder(&self, path: &str) -> Result<FileNode, ApplicationError> {
        Ok(self.document_repository.read_folder(Path::new(path)).await?)
    }

    pub async fn copy_pdf_to_workspace(
        &self,
        dto: CopyPdfToWorkspaceRequestDto,
    ) -> Result<CopyPdfToWorkspaceResponseDto, ApplicationError> {
        let destination = self.workspace_dir.join(UPLOADED_PDF_FILE);
        self.document_repository
            .copy_file(Path::new(&dto.src_path), &destination)
            .await?;

        Ok(CopyPdfToWorkspaceResponseDto {
            dst_path: destination.to_string_lossy().into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const WORKSPACE: &str = "/data/workspace";

    // Mock repository for testing
    #[derive(Default)]
    struct MockDocumentRepository {
        files: Mutex<HashMap<PathBuf, Vec<u8>>>,
        fail_reads: bool,
    }

    impl MockDocumentRepository {
        fn with_file(path: &str, content: &[u8]) -> Self {
            let repository = Self::default();
            repository
                .files
                .lock()
                .unwrap()
                .insert(PathBuf::from(path), content.to_vec());
            repository
        }
    }

    #[async_trait]
    impl DocumentRepository for MockDocumentRepository {
        async fn read_text(&self, path: &Path) -> Result<String, DomainError> {
            let bytes = self.read_bytes(path).await?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }

        async fn write_text(&self, path: &Path, content: &str) -> Result<(), DomainError> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.as_bytes().to_vec());
            Ok(())
        }

        async fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, DomainError> {
            if self.fail_reads {
                return Err(DomainError::Io("permission denied".to_string()));
            }
            self.files
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| DomainError::NotFound(path.display().to_string()))
        }

        async fn copy_file(&self, source: &Path, destination: &Path) -> Result<(), DomainError> {
            let bytes = self.read_bytes(source).await?;
            self.files
                .lock()
                .unwrap()
                .insert(destination.to_path_buf(), bytes);
            Ok(())
        }

        async fn read_folder(&self, path: &Path) -> Result<FileNode, DomainError> {
            Ok(FileNode {
                name: "workspace".to_string(),
                path: path.display().to_string(),
                is_dir: true,
                children: Vec::new(),
            })
        }
    }

    fn service(repository: MockDocumentRepository) -> DocumentService {
        DocumentService::new(Arc::new(repository), PathBuf::from(WORKSPACE))
    }

    #[tokio::test]
    async fn workspace_tex_is_read_with_its_location() {
        let service = service(MockDocumentRepository::with_file(
            "/data/workspace/main.tex",
            b"\\documentclass{book}",
        ));

        let response = service.read_workspace_tex().await.unwrap();

        assert_eq!(response.content, "\\documentclass{book}");
        assert_eq!(response.tex_path.as_deref(), Some("/data/workspace/main.tex"));
        assert_eq!(response.workspace_dir.as_deref(), Some(WORKSPACE));
    }

    #[tokio::test]
    async fn missing_workspace_tex_falls_back_to_default() {
        let response = service(MockDocumentRepository::default())
            .read_workspace_tex()
            .await
            .unwrap();

        assert_eq!(response.content, DEFAULT_TEX);
        assert!(response.tex_path.is_none());
        assert!(response.workspace_dir.is_none());
    }

    #[tokio::test]
    async fn unreadable_workspace_tex_is_an_error() {
        let repository = MockDocumentRepository {
            fail_reads: true,
            ..Default::default()
        };

        let error = service(repository).read_workspace_tex().await.unwrap_err();
        assert!(matches!(error, ApplicationError::InternalError(_)));
    }

    #[tokio::test]
    async fn blank_pdf_path_reads_compiled_workspace_pdf() {
        let service = service(MockDocumentRepository::with_file(
            "/data/workspace/main.pdf",
            b"%PDF-1.5",
        ));

        let encoded = service
            .read_pdf_base64(ReadPdfRequestDto {
                path: "  ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(encoded, "JVBERi0xLjU=");
    }

    #[tokio::test]
    async fn missing_pdf_reports_cannot_read() {
        let error = service(MockDocumentRepository::default())
            .read_pdf_base64(ReadPdfRequestDto {
                path: "/elsewhere/paper.pdf".to_string(),
            })
            .await
            .unwrap_err();

        assert!(error.to_string().contains("Cannot read pdf"));
    }

    #[tokio::test]
    async fn pdf_is_copied_as_uploaded_pdf() {
        let service = service(MockDocumentRepository::with_file(
            "/home/me/paper.pdf",
            b"%PDF",
        ));

        let response = service
            .copy_pdf_to_workspace(CopyPdfToWorkspaceRequestDto {
                src_path: "/home/me/paper.pdf".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.dst_path, "/data/workspace/uploaded.pdf");
        let copied = service
            .read_pdf_base64(ReadPdfRequestDto {
                path: response.dst_path,
            })
            .await
            .unwrap();
        assert_eq!(copied, STANDARD.encode(b"%PDF"));
    }

    #[tokio::test]
    async fn text_files_round_trip() {
        let service = service(MockDocumentRepository::default());

        let written = service
            .write_text_file(WriteTextFileRequestDto {
                path: "/notes/intro.tex".to_string(),
                content: "Hello".to_string(),
            })
            .await
            .unwrap();
        assert!(written.ok);

        let read = service
            .read_text_file(ReadTextFileRequestDto {
                path: "/notes/intro.tex".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(read.content, "Hello");
    }
}
