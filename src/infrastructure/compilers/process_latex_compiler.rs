use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::domain::errors::DomainError;
use crate::domain::models::compile::{CompileJob, CompileOutput};
use crate::domain::models::settings::CompilerSettings;
use crate::domain::repositories::latex_compiler::LatexCompiler;

/// Runs the configured engine (tectonic by default) as a child process.
#[derive(Default)]
pub struct ProcessLatexCompiler;

impl ProcessLatexCompiler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LatexCompiler for ProcessLatexCompiler {
    async fn compile(
        &self,
        job: &CompileJob,
        settings: &CompilerSettings,
    ) -> Result<CompileOutput, DomainError> {
        let args = settings.resolve_args(&job.file_name);
        tracing::debug!(
            "Running {} {:?} in {:?}",
            settings.program,
            args,
            job.work_dir
        );

        let mut command = Command::new(&settings.program);
        command
            .args(&args)
            .current_dir(&job.work_dir)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let timeout = Duration::from_secs(settings.timeout_secs.max(1));
        let output = tokio::time::timeout(timeout, command.output())
            .await
            .map_err(|_| {
                DomainError::Timeout(format!(
                    "{} did not finish within {}s",
                    settings.program,
                    timeout.as_secs()
                ))
            })?
            .map_err(|error| match error.kind() {
                std::io::ErrorKind::NotFound => DomainError::Compile(format!(
                    "LaTeX engine '{}' was not found; install it or change the compiler setting",
                    settings.program
                )),
                _ => DomainError::Compile(format!(
                    "{} execution error: {}",
                    settings.program, error
                )),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let details = if stderr.trim().is_empty() {
                stdout.trim()
            } else {
                stderr.trim()
            };
            return Err(DomainError::Compile(format!("Fail to compile: {details}")));
        }

        let pdf_path = job.pdf_path();
        if !tokio::fs::try_exists(&pdf_path).await.unwrap_or(false) {
            return Err(DomainError::Compile(format!(
                "Fail to compile: {} finished without producing {}",
                settings.program,
                pdf_path.display()
            )));
        }

        Ok(CompileOutput {
            pdf_path,
            log: stdout,
        })
    }
}
