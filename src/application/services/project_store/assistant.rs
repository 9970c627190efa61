use super::ProjectStore;
use crate::application::services::prompts;
use crate::application::services::response_processing::{
    clean_output, extract_latex, parse_fix_response,
};
use crate::domain::errors::DomainError;
use crate::domain::models::message::ChatMessage;
use crate::domain::models::project::{AssistantStatus, ToastVariant};

pub const OLLAMA_UNREACHABLE: &str = "Ollama not running at this address";
pub const FIX_APPLIED_REPLY: &str = "I've applied a fix to your document. ✨";

impl ProjectStore {
    pub async fn load_models(&self) {
        let base_url = self.snapshot().ollama_url;

        match self
            .inner
            .language_model_repository
            .list_models(&base_url)
            .await
        {
            Ok(models) => {
                let current = self.snapshot().ollama_model;
                let replacement = models
                    .first()
                    .filter(|_| !models.contains(&current))
                    .cloned();

                self.update(|state| {
                    state.ollama_models = models;
                    state.ollama_ready = true;
                    state.assistant_error = None;
                });

                if let Some(model) = replacement {
                    tracing::info!("Model {} not installed, switching to {}", current, model);
                    self.set_ollama_model(model).await;
                }
            }
            Err(error) => {
                tracing::warn!("Failed to list models at {}: {}", base_url, error);
                self.update(|state| {
                    state.ollama_models = Vec::new();
                    state.ollama_ready = false;
                    state.assistant_error = Some(OLLAMA_UNREACHABLE.to_string());
                });
            }
        }
    }

    /// Sends the whole thread plus `content` and appends the reply.
    pub async fn send_chat(&self, content: String) {
        if !self.snapshot().ollama_ready {
            self.set_toast("Ollama not connected.", ToastVariant::Error);
            return;
        }

        let mut conversation = Vec::new();
        self.update(|state| {
            state.assistant_messages.push(ChatMessage::user(content));
            state.assistant_status = AssistantStatus::Thinking;
            conversation = state.assistant_messages.clone();
        });

        match self.request(&conversation).await {
            Ok(reply) => {
                let reply = clean_output(&reply);
                self.update(|state| {
                    state.assistant_messages.push(ChatMessage::assistant(reply));
                    state.assistant_status = AssistantStatus::Idle;
                });
            }
            Err(error) => self.fail_assistant(error),
        }
    }

    pub async fn ask_fix_in_chat(&self) {
        let log = self.snapshot().compile_log;
        if log.trim().is_empty() {
            return;
        }
        self.send_chat(prompts::chat_fix_prompt(&log)).await;
    }

    /// Converts the selection into a formula and stages it as a replacement.
    pub async fn prompt_formula(&self) {
        let state = self.snapshot();
        let Some(selection) = state
            .selection_text
            .filter(|selection| !selection.trim().is_empty())
        else {
            return;
        };
        if !state.ollama_ready {
            return;
        }

        self.update(|state| state.assistant_status = AssistantStatus::Thinking);
        let messages = [
            ChatMessage::system(prompts::FORMULA_SYSTEM_PROMPT),
            ChatMessage::user(prompts::formula_user_prompt(&selection)),
        ];

        match self.request(&messages).await {
            Ok(reply) => {
                let latex = extract_latex(&reply);
                self.finish_exchange(format!("To formula: {selection}"), latex.clone());
                self.apply_formula_to_editor(latex);
            }
            Err(error) => self.fail_assistant(error),
        }
    }

    /// Asks for a fix of the last compile failure.
    ///
    /// A whole corrected document replaces the editor content; a fragment is
    /// posted to the thread for the user to apply.
    pub async fn prompt_fix_error(&self) {
        let state = self.snapshot();
        if state.compile_log.trim().is_empty() || !state.ollama_ready {
            return;
        }

        self.update(|state| state.assistant_status = AssistantStatus::Thinking);
        let messages = [
            ChatMessage::system(prompts::FIX_ERROR_SYSTEM_PROMPT),
            ChatMessage::user(prompts::fix_error_user_prompt(
                &state.compile_log,
                Some(&state.tex_content),
            )),
        ];

        match self.request(&messages).await {
            Ok(reply) => {
                let fix = parse_fix_response(&reply);
                if fix.fragment.is_empty() {
                    self.fail_assistant(DomainError::InvalidData(
                        "The model returned no fix".to_string(),
                    ));
                    self.set_toast("Fix failed.", ToastVariant::Error);
                } else if fix.is_full_document() {
                    self.finish_exchange("Fix error".to_string(), FIX_APPLIED_REPLY.to_string());
                    self.set_tex_content(fix.fragment);
                    self.set_toast("AI Fix Applied!", ToastVariant::Success);
                } else {
                    self.finish_exchange("Fix error".to_string(), fix.summary());
                    self.set_toast("Fix suggested", ToastVariant::Info);
                }
            }
            Err(error) => {
                self.fail_assistant(error);
                self.set_toast("Fix failed.", ToastVariant::Error);
            }
        }
    }

    /// Continues the document from the cursor context.
    pub async fn prompt_complete(&self) {
        let state = self.snapshot();
        let Some(context) = state
            .cursor_context
            .filter(|context| !context.trim().is_empty())
        else {
            return;
        };
        if !state.ollama_ready {
            return;
        }

        self.update(|state| state.assistant_status = AssistantStatus::Thinking);
        let messages = [
            ChatMessage::system(prompts::COMPLETE_SYSTEM_PROMPT),
            ChatMessage::user(prompts::complete_user_prompt(&context)),
        ];

        match self.request(&messages).await {
            Ok(reply) => {
                let latex = extract_latex(&reply);
                self.finish_exchange("Complete paragraph".to_string(), latex.clone());
                self.append_at_cursor(latex);
            }
            Err(error) => self.fail_assistant(error),
        }
    }

    /// Rewrites the whole document following `instruction`.
    pub async fn rewrite_editor_content(&self, instruction: String) {
        let state = self.snapshot();
        if !state.ollama_ready || instruction.trim().is_empty() {
            return;
        }

        self.update(|state| {
            state.assistant_status = AssistantStatus::Thinking;
            state.assistant_error = None;
        });
        let messages = [ChatMessage::user(prompts::rewrite_prompt(
            instruction.trim(),
            &state.tex_content,
        ))];

        match self.request(&messages).await {
            Ok(reply) => {
                let latex = extract_latex(&reply);
                if latex.is_empty() {
                    self.fail_assistant(DomainError::InvalidData(
                        "The model returned an empty document".to_string(),
                    ));
                    return;
                }
                self.set_tex_content(latex);
                self.update(|state| state.assistant_status = AssistantStatus::Idle);
                self.set_toast("Updated ✨", ToastVariant::Success);
            }
            Err(error) => self.fail_assistant(error),
        }
    }

    pub fn clear_assistant(&self) {
        self.update(|state| {
            state.assistant_messages.clear();
            state.assistant_status = AssistantStatus::Idle;
            state.assistant_error = None;
        });
    }

    async fn request(&self, messages: &[ChatMessage]) -> Result<String, DomainError> {
        let state = self.snapshot();
        self.inner
            .language_model_repository
            .chat(&state.ollama_url, &state.ollama_model, messages)
            .await
    }

    fn finish_exchange(&self, request: String, reply: String) {
        self.update(|state| {
            state.assistant_messages.push(ChatMessage::user(request));
            state.assistant_messages.push(ChatMessage::assistant(reply));
            state.assistant_status = AssistantStatus::Idle;
        });
    }

    fn fail_assistant(&self, error: DomainError) {
        tracing::warn!("Assistant request failed: {}", error);
        self.update(|state| {
            state.assistant_status = AssistantStatus::Error;
            state.assistant_error = Some(error.to_string());
        });
    }
}
