// Infrastructure layer - implements interfaces defined in the domain layer
pub mod apis;
pub mod compilers;
pub mod http_client;
pub mod logging;
#[cfg(feature = "desktop")]
pub mod paths;
pub mod persistence;
pub mod repositories;
