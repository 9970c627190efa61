use serde::{Deserialize, Serialize};

use crate::domain::models::message::ChatMessage;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListModelsRequestDto {
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListModelsResponseDto {
    pub models: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequestDto {
    #[serde(default)]
    pub base_url: Option<String>,
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponseDto {
    pub text: String,
}
