pub mod assistant_service;
pub mod document_service;
pub mod project_store;
pub mod prompts;
pub mod response_processing;
pub mod settings_service;
