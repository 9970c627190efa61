pub mod compile;
pub mod file_tree;
pub mod message;
pub mod project;
pub mod settings;
