use std::path::PathBuf;
use std::sync::Arc;

use tauri::State;

use crate::app::AppState;
use crate::application::dto::compile_dto::{CompileRequestDto, CompileResponseDto};
use crate::application::errors::ApplicationError;
use crate::domain::errors::DomainError;
use crate::infrastructure::logging::logger;
use crate::presentation::commands::helpers::log_command;
use crate::presentation::errors::CommandError;

/// Compiles the given source. Engine failures are reported in the
/// response; only storage or internal failures are command errors.
#[tauri::command]
pub async fn compile_latex(
    dto: CompileRequestDto,
    app_state: State<'_, Arc<AppState>>,
) -> Result<CompileResponseDto, CommandError> {
    log_command(format!("compile_latex {:?}", dto.tex_path));

    let tex_path = dto.tex_path.map(PathBuf::from);
    match app_state
        .project_store
        .compile_source(&dto.content, tex_path)
        .await
    {
        Ok(output) => Ok(CompileResponseDto {
            success: true,
            pdf_path: Some(output.pdf_path.to_string_lossy().into_owned()),
            log: output.log,
        }),
        Err(error @ (DomainError::Compile(_) | DomainError::Timeout(_))) => {
            logger::warn(&format!("Compile failed: {}", error));
            Ok(CompileResponseDto {
                success: false,
                pdf_path: None,
                log: error.to_string(),
            })
        }
        Err(error) => {
            logger::error(&format!("Compile could not run: {}", error));
            Err(ApplicationError::from(error).into())
        }
    }
}

/// Compiles the store's current document; the outcome arrives as state.
#[tauri::command]
pub async fn compile_project(app_state: State<'_, Arc<AppState>>) -> Result<(), CommandError> {
    log_command("compile_project");
    app_state.project_store.compile().await;
    Ok(())
}
