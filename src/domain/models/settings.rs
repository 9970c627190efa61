use serde::{Deserialize, Serialize};

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "gemma3:12b";
pub const DEFAULT_COMPILE_DEBOUNCE_MS: u64 = 800;
pub const MIN_COMPILE_DEBOUNCE_MS: u64 = 100;
pub const MAX_COMPILE_DEBOUNCE_MS: u64 = 10_000;

/// Placeholder in compiler arguments replaced by the tex file name
pub const FILE_PLACEHOLDER: &str = "{file}";

/// Editor settings, persisted as `settings.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub ollama_url: String,
    pub ollama_model: String,
    pub auto_compile: bool,
    pub compile_debounce_ms: u64,
    pub compiler: CompilerSettings,
}

/// External LaTeX engine invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerSettings {
    pub program: String,
    pub args: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
            auto_compile: true,
            compile_debounce_ms: DEFAULT_COMPILE_DEBOUNCE_MS,
            compiler: CompilerSettings::default(),
        }
    }
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            program: "tectonic".to_string(),
            args: vec![
                "-X".to_string(),
                "compile".to_string(),
                FILE_PLACEHOLDER.to_string(),
            ],
            timeout_secs: 120,
        }
    }
}

impl CompilerSettings {
    pub fn resolve_args(&self, file_name: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace(FILE_PLACEHOLDER, file_name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_fill_missing_fields_with_defaults() {
        let settings: EditorSettings =
            serde_json::from_str(r#"{"ollama_model":"llama3","compiler":{"program":"latexmk"}}"#)
                .unwrap();

        assert_eq!(settings.ollama_model, "llama3");
        assert_eq!(settings.ollama_url, DEFAULT_OLLAMA_URL);
        assert!(settings.auto_compile);
        assert_eq!(settings.compiler.program, "latexmk");
        assert_eq!(settings.compiler.timeout_secs, 120);
    }

    #[test]
    fn default_compiler_args_name_the_file() {
        let args = CompilerSettings::default().resolve_args("paper.tex");
        assert_eq!(args, vec!["-X", "compile", "paper.tex"]);
    }
}
