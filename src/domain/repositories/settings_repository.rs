use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::models::settings::EditorSettings;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn load(&self) -> Result<EditorSettings, DomainError>;
    async fn save(&self, settings: &EditorSettings) -> Result<(), DomainError>;
}
