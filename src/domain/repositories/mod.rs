pub mod document_repository;
pub mod language_model_repository;
pub mod latex_compiler;
pub mod settings_repository;
