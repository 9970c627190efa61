use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ReadTextFileRequestDto {
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadTextFileResponseDto {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WriteTextFileRequestDto {
    pub path: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WriteTextFileResponseDto {
    pub ok: bool,
}

/// Workspace `main.tex`; path fields are only set when the file exists
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadTexResponseDto {
    pub content: String,
    pub tex_path: Option<String>,
    pub workspace_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ReadPdfRequestDto {
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyPdfToWorkspaceRequestDto {
    pub src_path: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyPdfToWorkspaceResponseDto {
    pub dst_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileFilterDto {
    pub name: String,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PickFileRequestDto {
    #[serde(default)]
    pub filters: Option<Vec<FileFilterDto>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PickFileResponseDto {
    pub path: String,
    pub name: String,
}
