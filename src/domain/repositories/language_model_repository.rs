use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::models::message::ChatMessage;

#[async_trait]
pub trait LanguageModelRepository: Send + Sync {
    async fn list_models(&self, base_url: &str) -> Result<Vec<String>, DomainError>;

    /// Sends the whole conversation and returns the raw reply text.
    async fn chat(
        &self,
        base_url: &str,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, DomainError>;
}
