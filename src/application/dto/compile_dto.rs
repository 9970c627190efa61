use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompileRequestDto {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tex_path: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileResponseDto {
    pub success: bool,
    pub pdf_path: Option<String>,
    pub log: String,
}
