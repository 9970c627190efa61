use std::path::PathBuf;
use std::sync::Arc;

use tauri::{AppHandle, State};
use tauri_plugin_dialog::{DialogExt, FilePath};
use tokio::sync::oneshot;

use crate::app::AppState;
use crate::application::dto::document_dto::{
    FileFilterDto, PickFileRequestDto, PickFileResponseDto,
};
use crate::presentation::commands::helpers::log_command;
use crate::presentation::errors::CommandError;

/// Shows the native open dialog; `None` when the user cancels.
async fn pick_path(
    app: &AppHandle,
    filters: &[FileFilterDto],
) -> Result<Option<PathBuf>, CommandError> {
    let mut builder = app.dialog().file();
    for filter in filters {
        let extensions: Vec<&str> = filter.extensions.iter().map(String::as_str).collect();
        builder = builder.add_filter(&filter.name, &extensions);
    }

    let (sender, receiver) = oneshot::channel::<Option<FilePath>>();
    builder.pick_file(move |file| {
        let _ = sender.send(file);
    });

    let picked = receiver.await.map_err(|_| {
        CommandError::InternalServerError("File dialog closed unexpectedly".to_string())
    })?;

    picked
        .map(|file| {
            file.into_path().map_err(|error| {
                CommandError::BadRequest(format!("Unsupported file location: {}", error))
            })
        })
        .transpose()
}

fn filter(name: &str, extensions: &[&str]) -> FileFilterDto {
    FileFilterDto {
        name: name.to_string(),
        extensions: extensions.iter().map(|ext| ext.to_string()).collect(),
    }
}

#[tauri::command]
pub async fn pick_file(
    app: AppHandle,
    dto: Option<PickFileRequestDto>,
) -> Result<Option<PickFileResponseDto>, CommandError> {
    log_command("pick_file");

    let filters = dto.and_then(|dto| dto.filters).unwrap_or_default();
    let Some(path) = pick_path(&app, &filters).await? else {
        return Ok(None);
    };

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Some(PickFileResponseDto {
        path: path.to_string_lossy().into_owned(),
        name,
    }))
}

/// Open dialog for `.tex` files followed by `open_file`.
#[tauri::command]
pub async fn open_file_dialog(
    app: AppHandle,
    app_state: State<'_, Arc<AppState>>,
) -> Result<(), CommandError> {
    log_command("open_file_dialog");

    if let Some(path) = pick_path(&app, &[filter("TeX", &["tex"])]).await? {
        app_state.project_store.open_file(path).await;
    }
    Ok(())
}

/// Open dialog for PDFs followed by `upload_pdf`.
#[tauri::command]
pub async fn upload_pdf_dialog(
    app: AppHandle,
    app_state: State<'_, Arc<AppState>>,
) -> Result<(), CommandError> {
    log_command("upload_pdf_dialog");

    if let Some(path) = pick_path(&app, &[filter("PDF", &["pdf"])]).await? {
        app_state.project_store.upload_pdf(path).await;
    }
    Ok(())
}
