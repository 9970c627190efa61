//! TeXPilot backend: a LaTeX editor with a local Ollama assistant and a
//! live PDF preview.
//!
//! Without the `desktop` feature the crate is a headless library holding
//! the project store, the compile loop and the prompt tooling.

#[cfg(feature = "desktop")]
mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
#[cfg(feature = "desktop")]
mod presentation;

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use app::{resolve_data_root, spawn_initialization};
    use infrastructure::logging::logger;
    use infrastructure::persistence::file_system::DataDirectory;
    use presentation::commands::registry::invoke_handler;

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(move |app| {
            let app_handle = app.handle().clone();
            let data_root = resolve_data_root(&app_handle)?;

            let data_directory = DataDirectory::new(data_root.clone());
            if let Err(error) = logger::init_logger(data_directory.logs()) {
                eprintln!("Failed to initialize logger: {}", error);
            }
            tracing::info!("Starting TeXPilot {}", env!("CARGO_PKG_VERSION"));

            spawn_initialization(app_handle, data_root);
            Ok(())
        })
        .invoke_handler(invoke_handler())
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
