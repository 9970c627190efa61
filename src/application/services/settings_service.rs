use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::dto::settings_dto::{EditorSettingsDto, UpdateEditorSettingsDto};
use crate::application::errors::ApplicationError;
use crate::domain::models::settings::{
    EditorSettings, MAX_COMPILE_DEBOUNCE_MS, MIN_COMPILE_DEBOUNCE_MS,
};
use crate::domain::repositories::settings_repository::SettingsRepository;

/// Settings cache in front of the repository; every update is written through.
pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepository>,
    current: RwLock<EditorSettings>,
}

impl SettingsService {
    pub async fn load(
        settings_repository: Arc<dyn SettingsRepository>,
    ) -> Result<Self, ApplicationError> {
        let current = settings_repository.load().await?;
        tracing::debug!("Loaded editor settings: {:?}", current);

        Ok(Self {
            settings_repository,
            current: RwLock::new(current),
        })
    }

    pub async fn current(&self) -> EditorSettings {
        self.current.read().await.clone()
    }

    pub async fn get_settings(&self) -> EditorSettingsDto {
        EditorSettingsDto::from(self.current().await)
    }

    pub async fn update_settings(
        &self,
        dto: UpdateEditorSettingsDto,
    ) -> Result<EditorSettingsDto, ApplicationError> {
        tracing::debug!("Updating editor settings");

        let settings = self
            .modify(|settings| {
                if let Some(url) = dto.ollama_url {
                    settings.ollama_url = non_empty("Ollama URL", url)?;
                }
                if let Some(model) = dto.ollama_model {
                    settings.ollama_model = non_empty("Ollama model", model)?;
                }
                if let Some(auto_compile) = dto.auto_compile {
                    settings.auto_compile = auto_compile;
                }
                if let Some(debounce) = dto.compile_debounce_ms {
                    settings.compile_debounce_ms =
                        debounce.clamp(MIN_COMPILE_DEBOUNCE_MS, MAX_COMPILE_DEBOUNCE_MS);
                }
                if let Some(program) = dto.compiler_program {
                    settings.compiler.program = non_empty("Compiler program", program)?;
                }
                if let Some(args) = dto.compiler_args {
                    settings.compiler.args = args;
                }
                if let Some(timeout) = dto.compiler_timeout_secs {
                    if timeout == 0 {
                        return Err(ApplicationError::ValidationError(
                            "Compiler timeout must be positive".to_string(),
                        ));
                    }
                    settings.compiler.timeout_secs = timeout;
                }
                Ok(())
            })
            .await?;

        Ok(EditorSettingsDto::from(settings))
    }

    pub async fn set_ollama_url(&self, url: &str) -> Result<(), ApplicationError> {
        self.modify(|settings| {
            settings.ollama_url = non_empty("Ollama URL", url.to_string())?;
            Ok(())
        })
        .await
        .map(|_| ())
    }

    pub async fn set_ollama_model(&self, model: &str) -> Result<(), ApplicationError> {
        self.modify(|settings| {
            settings.ollama_model = non_empty("Ollama model", model.to_string())?;
            Ok(())
        })
        .await
        .map(|_| ())
    }

    /// Applies `change` to a copy and saves it. The write lock is held until
    /// the cache is updated so concurrent updates apply one after another.
    async fn modify(
        &self,
        change: impl FnOnce(&mut EditorSettings) -> Result<(), ApplicationError>,
    ) -> Result<EditorSettings, ApplicationError> {
        let mut current = self.current.write().await;
        let mut settings = current.clone();
        change(&mut settings)?;

        self.settings_repository.save(&settings).await?;
        *current = settings.clone();
        Ok(settings)
    }
}

fn non_empty(field: &str, value: String) -> Result<String, ApplicationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApplicationError::ValidationError(format!(
            "{field} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::errors::DomainError;

    #[derive(Default)]
    struct MemorySettingsRepository {
        saved: Mutex<Option<EditorSettings>>,
    }

    #[async_trait]
    impl SettingsRepository for MemorySettingsRepository {
        async fn load(&self) -> Result<EditorSettings, DomainError> {
            Ok(self.saved.lock().unwrap().clone().unwrap_or_default())
        }

        async fn save(&self, settings: &EditorSettings) -> Result<(), DomainError> {
            *self.saved.lock().unwrap() = Some(settings.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn update_changes_only_provided_fields_and_persists() {
        let repository = Arc::new(MemorySettingsRepository::default());
        let service = SettingsService::load(repository.clone()).await.unwrap();

        let updated = service
            .update_settings(UpdateEditorSettingsDto {
                ollama_model: Some(" llama3.1:8b ".to_string()),
                compile_debounce_ms: Some(5),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.ollama_model, "llama3.1:8b");
        assert_eq!(updated.compile_debounce_ms, MIN_COMPILE_DEBOUNCE_MS);
        assert_eq!(updated.compiler_program, "tectonic");

        let saved = repository.saved.lock().unwrap().clone().unwrap();
        assert_eq!(saved.ollama_model, "llama3.1:8b");
    }

    struct SlowSettingsRepository {
        inner: MemorySettingsRepository,
        delay: std::time::Duration,
    }

    #[async_trait]
    impl SettingsRepository for SlowSettingsRepository {
        async fn load(&self) -> Result<EditorSettings, DomainError> {
            self.inner.load().await
        }

        async fn save(&self, settings: &EditorSettings) -> Result<(), DomainError> {
            tokio::time::sleep(self.delay).await;
            self.inner.save(settings).await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_updates_keep_both_changes() {
        let repository = Arc::new(SlowSettingsRepository {
            inner: MemorySettingsRepository::default(),
            delay: std::time::Duration::from_millis(50),
        });
        let service = Arc::new(SettingsService::load(repository.clone()).await.unwrap());

        let debounce = tokio::spawn({
            let service = service.clone();
            async move {
                service
                    .update_settings(UpdateEditorSettingsDto {
                        compile_debounce_ms: Some(2000),
                        ..Default::default()
                    })
                    .await
            }
        });
        let model = tokio::spawn({
            let service = service.clone();
            async move { service.set_ollama_model("llama3").await }
        });
        debounce.await.unwrap().unwrap();
        model.await.unwrap().unwrap();

        let current = service.current().await;
        assert_eq!(current.compile_debounce_ms, 2000);
        assert_eq!(current.ollama_model, "llama3");

        let saved = repository.inner.saved.lock().unwrap().clone().unwrap();
        assert_eq!(saved, current);
    }

    #[tokio::test]
    async fn blank_url_is_rejected_without_saving() {
        let repository = Arc::new(MemorySettingsRepository::default());
        let service = SettingsService::load(repository.clone()).await.unwrap();

        let error = service
            .update_settings(UpdateEditorSettingsDto {
                ollama_url: Some("   ".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(error, ApplicationError::ValidationError(_)));
        assert!(repository.saved.lock().unwrap().is_none());
    }
}
