use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::errors::DomainError;
use crate::domain::models::settings::EditorSettings;
use crate::domain::repositories::settings_repository::SettingsRepository;
use crate::infrastructure::persistence::file_system::{read_json_file, write_json_file};

pub struct FileSettingsRepository {
    settings_file: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(settings_file: PathBuf) -> Self {
        Self { settings_file }
    }
}

#[async_trait]
impl SettingsRepository for FileSettingsRepository {
    async fn load(&self) -> Result<EditorSettings, DomainError> {
        match read_json_file::<EditorSettings>(&self.settings_file).await {
            Ok(settings) => Ok(settings),
            Err(DomainError::NotFound(_)) => {
                tracing::info!(
                    "No settings at {:?}, using defaults",
                    self.settings_file
                );
                Ok(EditorSettings::default())
            }
            Err(error) => Err(error),
        }
    }

    async fn save(&self, settings: &EditorSettings) -> Result<(), DomainError> {
        write_json_file(&self.settings_file, settings).await
    }
}

#[cfg(test)]
mod tests {
    use rand::random;
    use tokio::fs;

    use super::*;

    fn unique_settings_file() -> PathBuf {
        std::env::temp_dir()
            .join(format!("texpilot-settings-{}", random::<u64>()))
            .join("settings.json")
    }

    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let repository = FileSettingsRepository::new(unique_settings_file());
        assert_eq!(repository.load().await.unwrap(), EditorSettings::default());
    }

    #[tokio::test]
    async fn saved_settings_round_trip() {
        let path = unique_settings_file();
        let repository = FileSettingsRepository::new(path.clone());

        let mut settings = EditorSettings::default();
        settings.ollama_url = "http://desktop:11434".to_string();
        settings.compiler.program = "latexmk".to_string();
        repository.save(&settings).await.expect("save settings");

        assert_eq!(repository.load().await.unwrap(), settings);

        let _ = fs::remove_dir_all(path.parent().unwrap()).await;
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let path = unique_settings_file();
        fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        fs::write(&path, "{ not json").await.unwrap();

        let error = FileSettingsRepository::new(path.clone())
            .load()
            .await
            .unwrap_err();
        assert!(matches!(error, DomainError::InvalidData(_)));

        let _ = fs::remove_dir_all(path.parent().unwrap()).await;
    }
}
