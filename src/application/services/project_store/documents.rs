use std::path::{Path, PathBuf};

use chrono::Utc;

use super::ProjectStore;
use crate::domain::errors::DomainError;
use crate::domain::models::project::{
    DEFAULT_TEX, PdfTab, ProjectState, ToastVariant, UPLOADED_PDF_FILE, WORKSPACE_TEX_FILE,
};

impl ProjectStore {
    /// Loads the workspace `main.tex` and compiles it when present.
    pub async fn load_workspace_document(&self) {
        let path = self.inner.workspace_dir.join(WORKSPACE_TEX_FILE);

        match self.inner.document_repository.read_text(&path).await {
            Ok(content) => {
                let workspace_dir = self.inner.workspace_dir.clone();
                self.update(|state| {
                    replace_document(state, content);
                    state.tex_path = Some(path);
                    state.workspace_dir = Some(workspace_dir);
                    state.active_pdf_tab = PdfTab::Compiled;
                });
                self.compile().await;
            }
            Err(DomainError::NotFound(_)) => {
                tracing::debug!("No workspace document, starting from the default");
                self.update(|state| replace_document(state, DEFAULT_TEX.to_string()));
            }
            Err(error) => {
                tracing::warn!("Failed to read workspace document: {}", error);
                self.update(|state| replace_document(state, DEFAULT_TEX.to_string()));
                self.set_toast(
                    format!("Cannot read workspace document: {error}"),
                    ToastVariant::Error,
                );
            }
        }
    }

    pub async fn open_file(&self, path: PathBuf) {
        match self.inner.document_repository.read_text(&path).await {
            Ok(content) => {
                let name = file_name(&path);
                let workspace_dir = path
                    .parent()
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .map(Path::to_path_buf);

                let mut revision = 0;
                self.update(|state| {
                    replace_document(state, content);
                    state.tex_path = Some(path);
                    state.workspace_dir = workspace_dir;
                    revision = state.revision;
                });
                self.set_toast(format!("Opened {name}"), ToastVariant::Success);
                self.schedule_compile(revision);
            }
            Err(error) => {
                tracing::warn!("Failed to open {:?}: {}", path, error);
                self.set_toast(error.to_string(), ToastVariant::Error);
            }
        }
    }

    /// Writes the document to its path; `false` when nothing was saved.
    pub async fn save_file(&self) -> bool {
        let state = self.snapshot();
        let Some(tex_path) = state.tex_path else {
            self.set_toast("No file open.", ToastVariant::Error);
            return false;
        };

        match self
            .inner
            .document_repository
            .write_text(&tex_path, &state.tex_content)
            .await
        {
            Ok(()) => {
                let saved_revision = state.revision;
                self.update(|state| {
                    // Edits made while writing stay unsaved.
                    if state.revision == saved_revision {
                        state.dirty = false;
                    }
                    state.last_saved_at = Some(Utc::now());
                });
                self.set_toast("Saved", ToastVariant::Success);
                true
            }
            Err(error) => {
                tracing::warn!("Failed to save {:?}: {}", tex_path, error);
                self.set_toast(error.to_string(), ToastVariant::Error);
                false
            }
        }
    }

    /// Copies a PDF into the workspace and shows it in the uploaded tab.
    pub async fn upload_pdf(&self, source: PathBuf) {
        let destination = self.inner.workspace_dir.join(UPLOADED_PDF_FILE);

        match self
            .inner
            .document_repository
            .copy_file(&source, &destination)
            .await
        {
            Ok(()) => {
                self.update(|state| {
                    state.uploaded_pdf_path = Some(destination);
                    state.active_pdf_tab = PdfTab::Uploaded;
                });
                self.set_toast("PDF added", ToastVariant::Success);
            }
            Err(error) => {
                tracing::warn!("Failed to add PDF {:?}: {}", source, error);
                self.set_toast(error.to_string(), ToastVariant::Error);
            }
        }
    }
}

fn replace_document(state: &mut ProjectState, content: String) {
    state.tex_content = content;
    state.dirty = false;
    state.revision += 1;
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
