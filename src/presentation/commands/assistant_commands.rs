use std::sync::Arc;

use tauri::State;

use crate::app::AppState;
use crate::application::dto::assistant_dto::{
    GenerateRequestDto, GenerateResponseDto, ListModelsRequestDto, ListModelsResponseDto,
};
use crate::presentation::commands::helpers::{log_command, map_command_error};
use crate::presentation::errors::CommandError;

#[tauri::command]
pub async fn ollama_list_models(
    dto: Option<ListModelsRequestDto>,
    app_state: State<'_, Arc<AppState>>,
) -> Result<ListModelsResponseDto, CommandError> {
    log_command("ollama_list_models");

    app_state
        .assistant_service
        .list_models(dto.unwrap_or_default())
        .await
        .map_err(map_command_error("Failed to list Ollama models"))
}

#[tauri::command]
pub async fn ollama_generate(
    dto: GenerateRequestDto,
    app_state: State<'_, Arc<AppState>>,
) -> Result<GenerateResponseDto, CommandError> {
    log_command(format!(
        "ollama_generate model={} messages={}",
        dto.model,
        dto.messages.len()
    ));

    app_state
        .assistant_service
        .generate(dto)
        .await
        .map_err(map_command_error("Ollama generation failed"))
}

#[tauri::command]
pub async fn ask_ollama(
    prompt: String,
    app_state: State<'_, Arc<AppState>>,
) -> Result<String, CommandError> {
    log_command("ask_ollama");

    app_state
        .assistant_service
        .ask(prompt)
        .await
        .map_err(map_command_error("Ollama request failed"))
}

#[tauri::command]
pub async fn fix_latex_error(
    snippet: String,
    error_message: String,
    app_state: State<'_, Arc<AppState>>,
) -> Result<String, CommandError> {
    log_command("fix_latex_error");

    app_state
        .assistant_service
        .fix_latex_error(&snippet, &error_message)
        .await
        .map_err(map_command_error("Failed to fix LaTeX error"))
}

#[tauri::command]
pub async fn to_latex_formula(
    snippet: String,
    app_state: State<'_, Arc<AppState>>,
) -> Result<String, CommandError> {
    log_command("to_latex_formula");

    app_state
        .assistant_service
        .to_latex_formula(&snippet)
        .await
        .map_err(map_command_error("Failed to convert to LaTeX"))
}

#[tauri::command]
pub async fn autocomplete_latex(
    prefix: String,
    app_state: State<'_, Arc<AppState>>,
) -> Result<String, CommandError> {
    log_command("autocomplete_latex");

    app_state
        .assistant_service
        .autocomplete_latex(&prefix)
        .await
        .map_err(map_command_error("Failed to autocomplete"))
}
