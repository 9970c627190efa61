use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;

use super::ProjectStore;
use crate::domain::errors::DomainError;
use crate::domain::models::compile::{CompileJob, CompileOutput, CompileStatus};
use crate::domain::models::project::{ToastVariant, WORKSPACE_TEX_FILE};

pub const COMPILE_SUCCESS_LOG: &str = "Compiled successfully.";

impl ProjectStore {
    /// Arms the debounce timer for `revision`. When the timer fires and the
    /// document has not changed since, the document is compiled.
    pub(super) fn schedule_compile(&self, revision: u64) {
        let store = self.clone();

        self.inner.runtime.spawn(async move {
            let settings = store.inner.settings_service.current().await;
            if !settings.auto_compile {
                return;
            }

            tokio::time::sleep(Duration::from_millis(settings.compile_debounce_ms)).await;

            if store.snapshot().revision != revision {
                return;
            }

            tracing::debug!("Debounce elapsed, compiling revision {}", revision);
            store.compile().await;
        });
    }

    /// Writes the current document to disk and runs the engine over it.
    ///
    /// With auto-compile on, a result for a revision that has since been
    /// edited is dropped: the edit already armed a newer compile.
    pub async fn compile(&self) {
        let _guard = self.inner.compile_lock.lock().await;

        let (content, tex_path, revision) = {
            let state = self.snapshot();
            (state.tex_content, state.tex_path, state.revision)
        };
        self.update(|state| state.compile_status = CompileStatus::Compiling);

        let result = self.run_compile(&content, tex_path).await;

        let auto_compile = self.inner.settings_service.current().await.auto_compile;
        if auto_compile && self.snapshot().revision != revision {
            tracing::debug!("Discarding stale compile result for revision {}", revision);
            return;
        }

        match result {
            Ok(output) => {
                tracing::info!("Compiled {:?}", output.pdf_path);
                self.update(|state| {
                    state.compile_status = CompileStatus::Success;
                    state.compile_log = COMPILE_SUCCESS_LOG.to_string();
                    state.compiled_pdf_path = Some(output.pdf_path);
                    state.compiled_at = Some(Utc::now());
                });
                self.set_toast("Compiled", ToastVariant::Success);
            }
            Err(error) => {
                tracing::warn!("Compile failed: {}", error);
                self.update(|state| {
                    state.compile_status = CompileStatus::Error;
                    state.compile_log = error.to_string();
                });
                self.set_toast("Compile failed", ToastVariant::Error);
            }
        }
    }

    /// Compiles arbitrary source without touching the store state.
    pub async fn compile_source(
        &self,
        content: &str,
        tex_path: Option<PathBuf>,
    ) -> Result<CompileOutput, DomainError> {
        let _guard = self.inner.compile_lock.lock().await;
        self.run_compile(content, tex_path).await
    }

    async fn run_compile(
        &self,
        content: &str,
        tex_path: Option<PathBuf>,
    ) -> Result<CompileOutput, DomainError> {
        let tex_path = tex_path
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(|| self.inner.workspace_dir.join(WORKSPACE_TEX_FILE));
        let job = CompileJob::for_tex_path(tex_path);
        let settings = self.inner.settings_service.current().await;

        self.inner
            .document_repository
            .write_text(&job.tex_path, content)
            .await?;
        self.inner.compiler.compile(&job, &settings.compiler).await
    }
}
