pub mod assistant_dto;
pub mod compile_dto;
pub mod document_dto;
pub mod project_dto;
pub mod settings_dto;
