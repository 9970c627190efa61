use std::sync::Arc;

use crate::application::dto::assistant_dto::{
    GenerateRequestDto, GenerateResponseDto, ListModelsRequestDto, ListModelsResponseDto,
};
use crate::application::errors::ApplicationError;
use crate::application::services::prompts;
use crate::application::services::response_processing::clean_output;
use crate::application::services::settings_service::SettingsService;
use crate::domain::models::message::ChatMessage;
use crate::domain::repositories::language_model_repository::LanguageModelRepository;

/// Stateless one-shot requests that bypass the project store.
pub struct AssistantService {
    language_model_repository: Arc<dyn LanguageModelRepository>,
    settings_service: Arc<SettingsService>,
}

impl AssistantService {
    pub fn new(
        language_model_repository: Arc<dyn LanguageModelRepository>,
        settings_service: Arc<SettingsService>,
    ) -> Self {
        Self {
            language_model_repository,
            settings_service,
        }
    }

    pub async fn list_models(
        &self,
        dto: ListModelsRequestDto,
    ) -> Result<ListModelsResponseDto, ApplicationError> {
        let base_url = self.resolve_base_url(dto.base_url).await;
        let models = self.language_model_repository.list_models(&base_url).await?;
        Ok(ListModelsResponseDto { models })
    }

    pub async fn generate(
        &self,
        dto: GenerateRequestDto,
    ) -> Result<GenerateResponseDto, ApplicationError> {
        if dto.model.trim().is_empty() {
            return Err(ApplicationError::ValidationError(
                "Model must not be empty".to_string(),
            ));
        }

        let base_url = self.resolve_base_url(dto.base_url).await;
        let reply = self
            .language_model_repository
            .chat(&base_url, dto.model.trim(), &dto.messages)
            .await?;

        Ok(GenerateResponseDto {
            text: clean_output(&reply),
        })
    }

    /// Single prompt against the configured model with the LaTeX-only system prompt.
    pub async fn ask(&self, prompt: String) -> Result<String, ApplicationError> {
        let settings = self.settings_service.current().await;
        let messages = [
            ChatMessage::system(prompts::LATEX_ASSISTANT_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ];

        let reply = self
            .language_model_repository
            .chat(&settings.ollama_url, &settings.ollama_model, &messages)
            .await?;
        Ok(clean_output(&reply))
    }

    pub async fn fix_latex_error(
        &self,
        snippet: &str,
        error_message: &str,
    ) -> Result<String, ApplicationError> {
        self.ask(prompts::quick_fix_prompt(snippet, error_message))
            .await
    }

    pub async fn to_latex_formula(&self, snippet: &str) -> Result<String, ApplicationError> {
        self.ask(prompts::quick_formula_prompt(snippet)).await
    }

    pub async fn autocomplete_latex(&self, prefix: &str) -> Result<String, ApplicationError> {
        self.ask(prompts::autocomplete_prompt(prefix)).await
    }

    async fn resolve_base_url(&self, requested: Option<String>) -> String {
        match requested.map(|url| url.trim().to_string()) {
            Some(url) if !url.is_empty() => url,
            _ => self.settings_service.current().await.ollama_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::domain::models::message::Role;
    use crate::domain::models::settings::EditorSettings;
    use crate::domain::repositories::settings_repository::SettingsRepository;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ChatRequest {
        base_url: String,
        model: String,
        messages: Vec<ChatMessage>,
    }

    // Mock repository for testing
    struct MockLanguageModelRepository {
        reply: Result<String, DomainError>,
        requests: Mutex<Vec<ChatRequest>>,
        listed_urls: Mutex<Vec<String>>,
    }

    impl MockLanguageModelRepository {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                requests: Mutex::new(Vec::new()),
                listed_urls: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: DomainError) -> Self {
            Self {
                reply: Err(error),
                requests: Mutex::new(Vec::new()),
                listed_urls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LanguageModelRepository for MockLanguageModelRepository {
        async fn list_models(&self, base_url: &str) -> Result<Vec<String>, DomainError> {
            self.listed_urls.lock().unwrap().push(base_url.to_string());
            Ok(vec!["gemma3:12b".to_string()])
        }

        async fn chat(
            &self,
            base_url: &str,
            model: &str,
            messages: &[ChatMessage],
        ) -> Result<String, DomainError> {
            self.requests.lock().unwrap().push(ChatRequest {
                base_url: base_url.to_string(),
                model: model.to_string(),
                messages: messages.to_vec(),
            });
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(error) => Err(DomainError::Upstream(error.to_string())),
            }
        }
    }

    struct FixedSettingsRepository;

    #[async_trait]
    impl SettingsRepository for FixedSettingsRepository {
        async fn load(&self) -> Result<EditorSettings, DomainError> {
            Ok(EditorSettings {
                ollama_url: "http://gpu-box:11434".to_string(),
                ollama_model: "qwen2.5:14b".to_string(),
                ..EditorSettings::default()
            })
        }

        async fn save(&self, _settings: &EditorSettings) -> Result<(), DomainError> {
            Ok(())
        }
    }

    async fn service(
        repository: MockLanguageModelRepository,
    ) -> (AssistantService, Arc<MockLanguageModelRepository>) {
        let repository = Arc::new(repository);
        let settings = SettingsService::load(Arc::new(FixedSettingsRepository))
            .await
            .unwrap();
        (
            AssistantService::new(repository.clone(), Arc::new(settings)),
            repository,
        )
    }

    #[tokio::test]
    async fn list_models_defaults_to_configured_url() {
        let (service, repository) = service(MockLanguageModelRepository::replying("")).await;

        service
            .list_models(ListModelsRequestDto { base_url: None })
            .await
            .unwrap();
        service
            .list_models(ListModelsRequestDto {
                base_url: Some(" http://other:11434 ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(
            *repository.listed_urls.lock().unwrap(),
            vec!["http://gpu-box:11434", "http://other:11434"]
        );
    }

    #[tokio::test]
    async fn generate_cleans_reasoning_and_fences() {
        let (service, repository) = service(MockLanguageModelRepository::replying(
            "<think>hmm</think>\n```latex\n\\alpha\n```",
        ))
        .await;

        let response = service
            .generate(GenerateRequestDto {
                base_url: None,
                model: "gemma3:12b".to_string(),
                messages: vec![ChatMessage::user("alpha")],
            })
            .await
            .unwrap();

        assert_eq!(response.text, "\\alpha");
        assert_eq!(repository.requests.lock().unwrap()[0].model, "gemma3:12b");
    }

    #[tokio::test]
    async fn generate_requires_a_model() {
        let (service, repository) = service(MockLanguageModelRepository::replying("x")).await;

        let error = service
            .generate(GenerateRequestDto {
                base_url: None,
                model: "  ".to_string(),
                messages: vec![ChatMessage::user("hi")],
            })
            .await
            .unwrap_err();

        assert!(matches!(error, ApplicationError::ValidationError(_)));
        assert!(repository.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn one_shots_use_configured_model_and_latex_system_prompt() {
        let (service, repository) =
            service(MockLanguageModelRepository::replying("\\frac{a}{b}")).await;

        let latex = service.to_latex_formula("a over b").await.unwrap();

        assert_eq!(latex, "\\frac{a}{b}");
        let requests = repository.requests.lock().unwrap();
        let request = &requests[0];
        assert_eq!(request.base_url, "http://gpu-box:11434");
        assert_eq!(request.model, "qwen2.5:14b");
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(
            request.messages[0].content,
            prompts::LATEX_ASSISTANT_SYSTEM_PROMPT
        );
        assert!(request.messages[1].content.ends_with("a over b"));
    }

    #[tokio::test]
    async fn fix_prompt_carries_error_and_snippet() {
        let (service, repository) = service(MockLanguageModelRepository::replying("ok")).await;

        service
            .fix_latex_error("\\beginn{document}", "Undefined control sequence")
            .await
            .unwrap();

        let requests = repository.requests.lock().unwrap();
        let prompt = &requests[0].messages[1].content;
        assert!(prompt.contains("Error: Undefined control sequence"));
        assert!(prompt.contains("\\beginn{document}"));
    }

    #[tokio::test]
    async fn upstream_failures_become_service_errors() {
        let (service, _) = service(MockLanguageModelRepository::failing(DomainError::Upstream(
            "connection refused".to_string(),
        )))
        .await;

        let error = service.autocomplete_latex("\\section{").await.unwrap_err();
        assert!(matches!(error, ApplicationError::ServiceError(_)));
    }
}
