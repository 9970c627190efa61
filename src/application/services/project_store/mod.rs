//! Project state store.
//!
//! Owns the [`ProjectState`] rendered by the editor window and the actions
//! that change it. Every change is published on a `watch` channel so the
//! shell can forward snapshots to the frontend. Long-running actions call
//! out to the engine or the model and write their outcome back when done.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::{Mutex, watch};

use crate::application::services::settings_service::SettingsService;
use crate::domain::models::project::{PdfTab, ProjectState, Toast, ToastVariant};
use crate::domain::models::settings::EditorSettings;
use crate::domain::repositories::document_repository::DocumentRepository;
use crate::domain::repositories::language_model_repository::LanguageModelRepository;
use crate::domain::repositories::latex_compiler::LatexCompiler;

mod assistant;
mod compile_loop;
mod documents;


/// Cheap to clone; all clones share one state.
#[derive(Clone)]
pub struct ProjectStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: watch::Sender<ProjectState>,
    document_repository: Arc<dyn DocumentRepository>,
    compiler: Arc<dyn LatexCompiler>,
    language_model_repository: Arc<dyn LanguageModelRepository>,
    settings_service: Arc<SettingsService>,
    workspace_dir: PathBuf,
    compile_lock: Mutex<()>,
    runtime: Handle,
}

impl ProjectStore {
    /// Must be called from within a tokio runtime; debounce timers are
    /// spawned onto it.
    pub async fn new(
        document_repository: Arc<dyn DocumentRepository>,
        compiler: Arc<dyn LatexCompiler>,
        language_model_repository: Arc<dyn LanguageModelRepository>,
        settings_service: Arc<SettingsService>,
        workspace_dir: PathBuf,
    ) -> Self {
        let settings = settings_service.current().await;
        let (state, _) = watch::channel(ProjectState::new(&settings));

        Self {
            inner: Arc::new(StoreInner {
                state,
                document_repository,
                compiler,
                language_model_repository,
                settings_service,
                workspace_dir,
                compile_lock: Mutex::new(()),
                runtime: Handle::current(),
            }),
        }
    }

    pub fn snapshot(&self) -> ProjectState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ProjectState> {
        self.inner.state.subscribe()
    }

    fn update(&self, apply: impl FnOnce(&mut ProjectState)) {
        self.inner.state.send_modify(apply);
    }

    /// Replaces the document text and arms the compile debounce.
    pub fn set_tex_content(&self, content: impl Into<String>) {
        let content = content.into();
        let mut revision = 0;

        self.update(|state| {
            state.tex_content = content;
            state.dirty = true;
            state.revision += 1;
            revision = state.revision;
        });

        self.schedule_compile(revision);
    }

    pub fn set_selection(&self, text: Option<String>) {
        self.update(|state| state.selection_text = text);
    }

    pub fn set_cursor_context(&self, context: Option<String>) {
        self.update(|state| state.cursor_context = context);
    }

    pub fn set_active_pdf_tab(&self, tab: PdfTab) {
        self.update(|state| state.active_pdf_tab = tab);
    }

    pub async fn set_ollama_url(&self, url: String) {
        if let Err(error) = self.inner.settings_service.set_ollama_url(&url).await {
            tracing::warn!("Failed to persist Ollama URL: {}", error);
            self.set_toast(error.to_string(), ToastVariant::Error);
            return;
        }
        self.update(|state| state.ollama_url = url.trim().to_string());
    }

    pub async fn set_ollama_model(&self, model: String) {
        if let Err(error) = self.inner.settings_service.set_ollama_model(&model).await {
            tracing::warn!("Failed to persist Ollama model: {}", error);
            self.set_toast(error.to_string(), ToastVariant::Error);
            return;
        }
        self.update(|state| state.ollama_model = model.trim().to_string());
    }

    /// Mirrors settings changed outside the store; nothing is persisted.
    pub fn apply_settings(&self, settings: &EditorSettings) {
        self.update(|state| {
            state.ollama_url = settings.ollama_url.clone();
            state.ollama_model = settings.ollama_model.clone();
        });
    }

    pub fn set_toast(&self, message: impl Into<String>, variant: ToastVariant) {
        let message = message.into();
        self.update(|state| state.toast = Some(Toast { message, variant }));
    }

    pub fn clear_toast(&self) {
        self.update(|state| state.toast = None);
    }

    pub fn apply_formula_to_editor(&self, latex: String) {
        self.update(|state| {
            state.pending_replace_selection = Some(latex);
            state.selection_text = None;
        });
    }

    pub fn append_at_cursor(&self, latex: String) {
        self.update(|state| {
            state.pending_insert_at_cursor = Some(latex);
            state.cursor_context = None;
        });
    }

    pub fn clear_pending_replace(&self) {
        self.update(|state| state.pending_replace_selection = None);
    }

    pub fn clear_pending_insert(&self) {
        self.update(|state| state.pending_insert_at_cursor = None);
    }
}
