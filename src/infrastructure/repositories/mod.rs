pub mod file_document_repository;
pub mod file_settings_repository;
