use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::models::compile::{CompileJob, CompileOutput};
use crate::domain::models::settings::CompilerSettings;

/// Runs an external LaTeX engine over a file that is already on disk.
#[async_trait]
pub trait LatexCompiler: Send + Sync {
    async fn compile(
        &self,
        job: &CompileJob,
        settings: &CompilerSettings,
    ) -> Result<CompileOutput, DomainError>;
}
