use std::path::PathBuf;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::compile::CompileStatus;
use super::message::ChatMessage;
use super::settings::EditorSettings;

pub const DEFAULT_TEX: &str = r"\documentclass{article}
\begin{document}
Hello, LaTeX.
\end{document}
";

pub const WORKSPACE_TEX_FILE: &str = "main.tex";
pub const WORKSPACE_PDF_FILE: &str = "main.pdf";
pub const UPLOADED_PDF_FILE: &str = "uploaded.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PdfTab {
    #[default]
    Compiled,
    Uploaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssistantStatus {
    #[default]
    Idle,
    Thinking,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Info,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
}

/// Everything the editor window renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectState {
    pub workspace_dir: Option<PathBuf>,
    pub tex_path: Option<PathBuf>,
    pub tex_content: String,
    pub dirty: bool,
    /// Bumped on every content change; compile results are tagged with it.
    pub revision: u64,
    pub compile_status: CompileStatus,
    pub compile_log: String,
    pub compiled_pdf_path: Option<PathBuf>,
    pub compiled_at: Option<DateTime<Utc>>,
    pub uploaded_pdf_path: Option<PathBuf>,
    pub active_pdf_tab: PdfTab,
    pub selection_text: Option<String>,
    pub cursor_context: Option<String>,
    pub last_saved_at: Option<DateTime<Utc>>,
    pub ollama_url: String,
    pub ollama_model: String,
    pub ollama_models: Vec<String>,
    pub ollama_ready: bool,
    pub assistant_messages: Vec<ChatMessage>,
    pub assistant_status: AssistantStatus,
    pub assistant_error: Option<String>,
    pub toast: Option<Toast>,
    pub pending_replace_selection: Option<String>,
    pub pending_insert_at_cursor: Option<String>,
}

impl ProjectState {
    pub fn new(settings: &EditorSettings) -> Self {
        Self {
            workspace_dir: None,
            tex_path: None,
            tex_content: DEFAULT_TEX.to_string(),
            dirty: false,
            revision: 0,
            compile_status: CompileStatus::Idle,
            compile_log: String::new(),
            compiled_pdf_path: None,
            compiled_at: None,
            uploaded_pdf_path: None,
            active_pdf_tab: PdfTab::Compiled,
            selection_text: None,
            cursor_context: None,
            last_saved_at: None,
            ollama_url: settings.ollama_url.clone(),
            ollama_model: settings.ollama_model.clone(),
            ollama_models: Vec::new(),
            ollama_ready: false,
            assistant_messages: Vec::new(),
            assistant_status: AssistantStatus::Idle,
            assistant_error: None,
            toast: None,
            pending_replace_selection: None,
            pending_insert_at_cursor: None,
        }
    }

    pub fn file_name(&self) -> String {
        self.tex_path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    pub fn active_pdf_path(&self) -> Option<&PathBuf> {
        match self.active_pdf_tab {
            PdfTab::Compiled => self.compiled_pdf_path.as_ref(),
            PdfTab::Uploaded => self.uploaded_pdf_path.as_ref(),
        }
    }

    pub fn status_line(&self) -> StatusLine {
        let compile = match self.compile_status {
            CompileStatus::Compiling => "Compiling…",
            CompileStatus::Success => "Compiled",
            CompileStatus::Error => "Compile failed",
            CompileStatus::Idle => "",
        };
        let saved = self
            .last_saved_at
            .map(|at| format!("Saved {}", at.with_timezone(&Local).format("%H:%M:%S")))
            .unwrap_or_default();
        let assistant = if self.ollama_ready {
            "Ollama ready"
        } else {
            "Ollama not running"
        };

        StatusLine {
            compile: compile.to_string(),
            saved,
            assistant: assistant.to_string(),
        }
    }
}

/// Footer texts derived from the state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub compile: String,
    pub saved: String,
    pub assistant: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_holds_default_document() {
        let state = ProjectState::new(&EditorSettings::default());
        assert_eq!(state.tex_content, DEFAULT_TEX);
        assert_eq!(state.file_name(), "Untitled");
        assert!(!state.dirty);
        assert_eq!(state.active_pdf_tab, PdfTab::Compiled);
    }

    #[test]
    fn status_line_follows_compile_and_assistant_state() {
        let mut state = ProjectState::new(&EditorSettings::default());
        assert_eq!(state.status_line().compile, "");
        assert_eq!(state.status_line().assistant, "Ollama not running");
        assert_eq!(state.status_line().saved, "");

        state.compile_status = CompileStatus::Error;
        state.ollama_ready = true;
        state.last_saved_at = Some(Utc::now());

        let line = state.status_line();
        assert_eq!(line.compile, "Compile failed");
        assert_eq!(line.assistant, "Ollama ready");
        assert!(line.saved.starts_with("Saved "));
    }

    #[test]
    fn state_serializes_camel_case_for_the_frontend() {
        let state = ProjectState::new(&EditorSettings::default());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["compileStatus"], "idle");
        assert_eq!(json["activePdfTab"], "compiled");
        assert_eq!(json["ollamaModel"], "gemma3:12b");
    }
}
