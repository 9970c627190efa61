use serde::{Deserialize, Serialize};

use crate::domain::models::settings::{CompilerSettings, EditorSettings};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSettingsDto {
    pub ollama_url: String,
    pub ollama_model: String,
    pub auto_compile: bool,
    pub compile_debounce_ms: u64,
    pub compiler_program: String,
    pub compiler_args: Vec<String>,
    pub compiler_timeout_secs: u64,
}

impl From<EditorSettings> for EditorSettingsDto {
    fn from(settings: EditorSettings) -> Self {
        let CompilerSettings {
            program,
            args,
            timeout_secs,
        } = settings.compiler;

        Self {
            ollama_url: settings.ollama_url,
            ollama_model: settings.ollama_model,
            auto_compile: settings.auto_compile,
            compile_debounce_ms: settings.compile_debounce_ms,
            compiler_program: program,
            compiler_args: args,
            compiler_timeout_secs: timeout_secs,
        }
    }
}

/// Only the provided fields change
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEditorSettingsDto {
    pub ollama_url: Option<String>,
    pub ollama_model: Option<String>,
    pub auto_compile: Option<bool>,
    pub compile_debounce_ms: Option<u64>,
    pub compiler_program: Option<String>,
    pub compiler_args: Option<Vec<String>>,
    pub compiler_timeout_secs: Option<u64>,
}
