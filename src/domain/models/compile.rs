use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompileStatus {
    #[default]
    Idle,
    Compiling,
    Success,
    Error,
}

/// Result of a successful engine run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutput {
    pub pdf_path: PathBuf,
    pub log: String,
}

/// What to compile and where the engine runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileJob {
    pub tex_path: PathBuf,
    pub work_dir: PathBuf,
    pub file_name: String,
}

impl CompileJob {
    pub fn for_tex_path(tex_path: PathBuf) -> Self {
        let work_dir = tex_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_default();
        let file_name = tex_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            tex_path,
            work_dir,
            file_name,
        }
    }

    pub fn pdf_path(&self) -> PathBuf {
        self.tex_path.with_extension("pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_splits_directory_and_file_name() {
        let job = CompileJob::for_tex_path(PathBuf::from("/tmp/paper/main.tex"));
        assert_eq!(job.work_dir, PathBuf::from("/tmp/paper"));
        assert_eq!(job.file_name, "main.tex");
        assert_eq!(job.pdf_path(), PathBuf::from("/tmp/paper/main.pdf"));
    }
}
