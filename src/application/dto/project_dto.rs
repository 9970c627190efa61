use serde::Serialize;

use crate::domain::models::project::{ProjectState, StatusLine};

/// State pushed to the frontend on every change
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshotDto {
    #[serde(flatten)]
    pub state: ProjectState,
    pub file_name: String,
    pub status_line: StatusLine,
}

impl From<ProjectState> for ProjectSnapshotDto {
    fn from(state: ProjectState) -> Self {
        let file_name = state.file_name();
        let status_line = state.status_line();

        Self {
            state,
            file_name,
            status_line,
        }
    }
}
