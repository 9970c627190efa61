use std::path::Path;
use std::sync::Once;
#[cfg(feature = "desktop")]
use std::sync::OnceLock;

#[cfg(feature = "desktop")]
use serde::Serialize;
#[cfg(feature = "desktop")]
use tauri::{AppHandle, Emitter};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

static INIT: Once = Once::new();
#[cfg(feature = "desktop")]
static APP_HANDLE: OnceLock<AppHandle> = OnceLock::new();

pub const BACKEND_ERROR_EVENT: &str = "texpilot-backend-error";
pub const LOG_FILE_NAME: &str = "texpilot.log";

#[cfg(feature = "desktop")]
#[derive(Clone, Serialize)]
struct BackendErrorEventPayload {
    message: String,
}

#[cfg(feature = "desktop")]
pub fn bind_app_handle(app_handle: AppHandle) {
    let _ = APP_HANDLE.set(app_handle);
}

/// Initialize the logger with file and console output
pub fn init_logger(log_dir: &Path) -> Result<(), String> {
    std::fs::create_dir_all(log_dir)
        .map_err(|error| format!("Failed to create log directory {:?}: {}", log_dir, error))?;

    INIT.call_once(|| {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_NAME);

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // The guard flushes the file writer on drop; it must outlive the process.
        Box::leak(Box::new(guard));

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::Layer::new()
                    .with_writer(std::io::stdout)
                    .with_ansi(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_target(true),
            )
            .with(
                fmt::Layer::new()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_target(true),
            );

        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Failed to set global default subscriber: {}", e);
        }

        tracing::debug!("Logger initialized");
    });

    Ok(())
}

/// Log a debug message
pub fn debug(message: &str) {
    tracing::debug!("{}", message);
}

/// Log a warning message
pub fn warn(message: &str) {
    tracing::warn!("{}", message);
}

/// Log an error message and surface it to the window
pub fn error(message: &str) {
    tracing::error!("{}", message);
    emit_error_event(message);
}

#[cfg(feature = "desktop")]
fn emit_error_event(message: &str) {
    let normalized = message.trim();
    if normalized.is_empty() {
        return;
    }

    let Some(app_handle) = APP_HANDLE.get() else {
        return;
    };

    let payload = BackendErrorEventPayload {
        message: normalized.to_string(),
    };

    if let Err(error) = app_handle.emit(BACKEND_ERROR_EVENT, payload) {
        eprintln!("Failed to emit backend error event: {}", error);
    }
}

#[cfg(not(feature = "desktop"))]
fn emit_error_event(_message: &str) {}
