use std::path::{Path, PathBuf};
use std::sync::Arc;

use tauri::{AppHandle, Emitter, Manager};

use crate::application::dto::project_dto::ProjectSnapshotDto;
use crate::application::errors::ApplicationError;
use crate::application::services::assistant_service::AssistantService;
use crate::application::services::document_service::DocumentService;
use crate::application::services::project_store::ProjectStore;
use crate::application::services::settings_service::SettingsService;
use crate::infrastructure::logging::logger;
use crate::infrastructure::paths::resolve_app_data_dir;
use crate::infrastructure::persistence::file_system::DataDirectory;

mod bootstrap;

pub const PROJECT_STATE_EVENT: &str = "project-state";
pub const APP_READY_EVENT: &str = "app-ready";
pub const APP_ERROR_EVENT: &str = "app-error";

pub struct AppState {
    pub data_directory: DataDirectory,
    pub settings_service: Arc<SettingsService>,
    pub document_service: Arc<DocumentService>,
    pub assistant_service: Arc<AssistantService>,
    pub project_store: ProjectStore,
}

impl AppState {
    pub async fn new(data_root: &Path) -> Result<Self, ApplicationError> {
        tracing::info!("Initializing application with data root: {:?}", data_root);

        let data_directory = bootstrap::initialize_data_directory(data_root).await?;
        let services = bootstrap::build_services(&data_directory).await?;

        tracing::info!("Application initialized successfully");

        Ok(Self {
            data_directory,
            settings_service: services.settings_service,
            document_service: services.document_service,
            assistant_service: services.assistant_service,
            project_store: services.project_store,
        })
    }
}

pub fn resolve_data_root(app_handle: &AppHandle) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let app_data_dir = resolve_app_data_dir(app_handle)?;
    tracing::info!("App data directory: {:?}", app_data_dir);

    let data_root = app_data_dir.join("data");
    std::fs::create_dir_all(&data_root)?;
    Ok(data_root)
}

pub fn spawn_initialization(app_handle: AppHandle, data_root: PathBuf) {
    tauri::async_runtime::spawn(async move {
        match AppState::new(&data_root).await {
            Ok(state) => {
                let state = Arc::new(state);
                tracing::info!(
                    "Workspace directory: {:?}",
                    state.data_directory.workspace()
                );
                app_handle.manage(state.clone());
                logger::bind_app_handle(app_handle.clone());

                forward_project_state(app_handle.clone(), state.project_store.clone());

                if let Err(error) = app_handle.emit(APP_READY_EVENT, ()) {
                    tracing::error!("Failed to emit app-ready event: {}", error);
                } else {
                    tracing::info!("Application is ready");
                }

                state.project_store.load_workspace_document().await;
                state.project_store.load_models().await;
            }
            Err(error) => {
                tracing::error!("Failed to initialize application state: {}", error);

                if let Err(emit_error) = app_handle.emit(APP_ERROR_EVENT, error.to_string()) {
                    tracing::error!("Failed to emit app-error event: {}", emit_error);
                }
            }
        }
    });
}

/// Pushes a snapshot to the window whenever the store changes. Bursts of
/// changes between two sends collapse into one event.
fn forward_project_state(app_handle: AppHandle, store: ProjectStore) {
    let mut receiver = store.subscribe();

    tauri::async_runtime::spawn(async move {
        loop {
            let snapshot = ProjectSnapshotDto::from(receiver.borrow_and_update().clone());
            if let Err(error) = app_handle.emit(PROJECT_STATE_EVENT, snapshot) {
                tracing::warn!("Failed to emit project state: {}", error);
            }

            if receiver.changed().await.is_err() {
                tracing::debug!("Project store dropped; stopping state forwarding");
                break;
            }
        }
    });
}
