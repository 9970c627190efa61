pub mod assistant_commands;
pub mod compile_commands;
pub mod dialog_commands;
pub mod document_commands;
pub mod helpers;
pub mod project_commands;
pub mod registry;
pub mod settings_commands;
