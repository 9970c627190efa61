use std::sync::Arc;

use tauri::State;

use crate::app::AppState;
use crate::application::dto::settings_dto::{EditorSettingsDto, UpdateEditorSettingsDto};
use crate::presentation::commands::helpers::{log_command, map_command_error};
use crate::presentation::errors::CommandError;

#[tauri::command]
pub async fn get_settings(
    app_state: State<'_, Arc<AppState>>,
) -> Result<EditorSettingsDto, CommandError> {
    log_command("get_settings");
    Ok(app_state.settings_service.get_settings().await)
}

#[tauri::command]
pub async fn update_settings(
    dto: UpdateEditorSettingsDto,
    app_state: State<'_, Arc<AppState>>,
) -> Result<EditorSettingsDto, CommandError> {
    log_command("update_settings");

    let settings = app_state
        .settings_service
        .update_settings(dto)
        .await
        .map_err(map_command_error("Failed to update settings"))?;

    app_state
        .project_store
        .apply_settings(&app_state.settings_service.current().await);
    Ok(settings)
}
