//! Commands forwarding editor actions to the project store.
//!
//! Results are not returned directly; the store publishes every change
//! and the shell forwards it as a `project-state` event.

use std::sync::Arc;

use tauri::State;

use crate::app::AppState;
use crate::application::dto::project_dto::ProjectSnapshotDto;
use crate::domain::models::project::{PdfTab, ToastVariant};
use crate::presentation::commands::helpers::{log_command, require_path};
use crate::presentation::errors::CommandError;

#[tauri::command]
pub fn get_project_state(app_state: State<'_, Arc<AppState>>) -> ProjectSnapshotDto {
    log_command("get_project_state");
    app_state.project_store.snapshot().into()
}

#[tauri::command]
pub fn set_tex_content(content: String, app_state: State<'_, Arc<AppState>>) {
    app_state.project_store.set_tex_content(content);
}

#[tauri::command]
pub fn set_selection(text: Option<String>, app_state: State<'_, Arc<AppState>>) {
    app_state.project_store.set_selection(text);
}

#[tauri::command]
pub fn set_cursor_context(context: Option<String>, app_state: State<'_, Arc<AppState>>) {
    app_state.project_store.set_cursor_context(context);
}

#[tauri::command]
pub fn set_active_pdf_tab(tab: PdfTab, app_state: State<'_, Arc<AppState>>) {
    log_command(format!("set_active_pdf_tab {:?}", tab));
    app_state.project_store.set_active_pdf_tab(tab);
}

#[tauri::command]
pub async fn set_ollama_url(
    url: String,
    app_state: State<'_, Arc<AppState>>,
) -> Result<(), CommandError> {
    log_command(format!("set_ollama_url {}", url));
    app_state.project_store.set_ollama_url(url).await;
    Ok(())
}

#[tauri::command]
pub async fn set_ollama_model(
    model: String,
    app_state: State<'_, Arc<AppState>>,
) -> Result<(), CommandError> {
    log_command(format!("set_ollama_model {}", model));
    app_state.project_store.set_ollama_model(model).await;
    Ok(())
}

#[tauri::command]
pub fn set_toast(message: String, variant: ToastVariant, app_state: State<'_, Arc<AppState>>) {
    app_state.project_store.set_toast(message, variant);
}

#[tauri::command]
pub fn clear_toast(app_state: State<'_, Arc<AppState>>) {
    app_state.project_store.clear_toast();
}

#[tauri::command]
pub fn apply_formula_to_editor(latex: String, app_state: State<'_, Arc<AppState>>) {
    app_state.project_store.apply_formula_to_editor(latex);
}

#[tauri::command]
pub fn append_at_cursor(latex: String, app_state: State<'_, Arc<AppState>>) {
    app_state.project_store.append_at_cursor(latex);
}

#[tauri::command]
pub fn clear_pending_replace(app_state: State<'_, Arc<AppState>>) {
    app_state.project_store.clear_pending_replace();
}

#[tauri::command]
pub fn clear_pending_insert(app_state: State<'_, Arc<AppState>>) {
    app_state.project_store.clear_pending_insert();
}

#[tauri::command]
pub fn clear_assistant(app_state: State<'_, Arc<AppState>>) {
    log_command("clear_assistant");
    app_state.project_store.clear_assistant();
}

#[tauri::command]
pub async fn load_workspace_document(
    app_state: State<'_, Arc<AppState>>,
) -> Result<(), CommandError> {
    log_command("load_workspace_document");
    app_state.project_store.load_workspace_document().await;
    Ok(())
}

#[tauri::command]
pub async fn open_file(
    path: String,
    app_state: State<'_, Arc<AppState>>,
) -> Result<(), CommandError> {
    log_command(format!("open_file {}", path));
    let path = require_path(&path)?;
    app_state.project_store.open_file(path).await;
    Ok(())
}

#[tauri::command]
pub async fn save_file(app_state: State<'_, Arc<AppState>>) -> Result<bool, CommandError> {
    log_command("save_file");
    Ok(app_state.project_store.save_file().await)
}

#[tauri::command]
pub async fn upload_pdf(
    path: String,
    app_state: State<'_, Arc<AppState>>,
) -> Result<(), CommandError> {
    log_command(format!("upload_pdf {}", path));
    let path = require_path(&path)?;
    app_state.project_store.upload_pdf(path).await;
    Ok(())
}

#[tauri::command]
pub async fn load_models(app_state: State<'_, Arc<AppState>>) -> Result<(), CommandError> {
    log_command("load_models");
    app_state.project_store.load_models().await;
    Ok(())
}

#[tauri::command]
pub async fn send_chat(
    content: String,
    app_state: State<'_, Arc<AppState>>,
) -> Result<(), CommandError> {
    log_command("send_chat");
    app_state.project_store.send_chat(content).await;
    Ok(())
}

#[tauri::command]
pub async fn ask_fix_in_chat(app_state: State<'_, Arc<AppState>>) -> Result<(), CommandError> {
    log_command("ask_fix_in_chat");
    app_state.project_store.ask_fix_in_chat().await;
    Ok(())
}

#[tauri::command]
pub async fn prompt_formula(app_state: State<'_, Arc<AppState>>) -> Result<(), CommandError> {
    log_command("prompt_formula");
    app_state.project_store.prompt_formula().await;
    Ok(())
}

#[tauri::command]
pub async fn prompt_fix_error(app_state: State<'_, Arc<AppState>>) -> Result<(), CommandError> {
    log_command("prompt_fix_error");
    app_state.project_store.prompt_fix_error().await;
    Ok(())
}

#[tauri::command]
pub async fn prompt_complete(app_state: State<'_, Arc<AppState>>) -> Result<(), CommandError> {
    log_command("prompt_complete");
    app_state.project_store.prompt_complete().await;
    Ok(())
}

#[tauri::command]
pub async fn rewrite_editor_content(
    instruction: String,
    app_state: State<'_, Arc<AppState>>,
) -> Result<(), CommandError> {
    log_command("rewrite_editor_content");
    app_state
        .project_store
        .rewrite_editor_content(instruction)
        .await;
    Ok(())
}
