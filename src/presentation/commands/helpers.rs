use std::fmt::Display;
use std::path::PathBuf;

use crate::infrastructure::logging::logger;
use crate::presentation::errors::CommandError;

pub fn log_command(command: impl AsRef<str>) {
    logger::debug(&format!("Command: {}", command.as_ref()));
}

pub fn map_command_error<E>(context: impl AsRef<str>) -> impl FnOnce(E) -> CommandError
where
    E: Display + Into<CommandError>,
{
    let context = context.as_ref().to_string();

    move |error| {
        logger::error(&format!("{}: {}", context, error));
        error.into()
    }
}

/// Rejects blank paths coming from the webview before they reach the store.
pub fn require_path(path: &str) -> Result<PathBuf, CommandError> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(CommandError::BadRequest("Path must not be empty".to_string()));
    }
    Ok(PathBuf::from(trimmed))
}
