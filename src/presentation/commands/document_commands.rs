use std::sync::Arc;

use tauri::State;

use crate::app::AppState;
use crate::application::dto::document_dto::{
    CopyPdfToWorkspaceRequestDto, CopyPdfToWorkspaceResponseDto, ReadPdfRequestDto,
    ReadTexResponseDto, ReadTextFileRequestDto, ReadTextFileResponseDto, WriteTextFileRequestDto,
    WriteTextFileResponseDto,
};
use crate::domain::models::file_tree::FileNode;
use crate::presentation::commands::helpers::{log_command, map_command_error};
use crate::presentation::errors::CommandError;

#[tauri::command]
pub async fn read_text_file(
    dto: ReadTextFileRequestDto,
    app_state: State<'_, Arc<AppState>>,
) -> Result<ReadTextFileResponseDto, CommandError> {
    log_command(format!("read_text_file {}", dto.path));
    let context = format!("Failed to read {}", dto.path);

    app_state
        .document_service
        .read_text_file(dto)
        .await
        .map_err(map_command_error(context))
}

#[tauri::command]
pub async fn write_text_file(
    dto: WriteTextFileRequestDto,
    app_state: State<'_, Arc<AppState>>,
) -> Result<WriteTextFileResponseDto, CommandError> {
    log_command(format!("write_text_file {}", dto.path));
    let context = format!("Failed to write {}", dto.path);

    app_state
        .document_service
        .write_text_file(dto)
        .await
        .map_err(map_command_error(context))
}

#[tauri::command]
pub async fn read_tex(
    app_state: State<'_, Arc<AppState>>,
) -> Result<ReadTexResponseDto, CommandError> {
    log_command("read_tex");

    app_state
        .document_service
        .read_workspace_tex()
        .await
        .map_err(map_command_error("Failed to read workspace document"))
}

/// Base64 of the PDF at `path`, or of the workspace `main.pdf` when blank.
#[tauri::command]
pub async fn read_pdf_base64(
    dto: Option<ReadPdfRequestDto>,
    app_state: State<'_, Arc<AppState>>,
) -> Result<String, CommandError> {
    let dto = dto.unwrap_or_default();
    log_command(format!("read_pdf_base64 {:?}", dto.path));

    app_state
        .document_service
        .read_pdf_base64(dto)
        .await
        .map_err(map_command_error("Failed to read PDF"))
}

#[tauri::command]
pub async fn read_folder(
    path: String,
    app_state: State<'_, Arc<AppState>>,
) -> Result<FileNode, CommandError> {
    log_command(format!("read_folder {}", path));
    let context = format!("Failed to read folder {}", path);

    app_state
        .document_service
        .read_folder(&path)
        .await
        .map_err(map_command_error(context))
}

#[tauri::command]
pub async fn copy_pdf_to_workspace(
    dto: CopyPdfToWorkspaceRequestDto,
    app_state: State<'_, Arc<AppState>>,
) -> Result<CopyPdfToWorkspaceResponseDto, CommandError> {
    log_command(format!("copy_pdf_to_workspace {}", dto.src_path));

    app_state
        .document_service
        .copy_pdf_to_workspace(dto)
        .await
        .map_err(map_command_error("Failed to copy PDF into workspace"))
}
