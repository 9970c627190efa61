pub mod ollama_repository;
