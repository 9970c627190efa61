use serde::Serialize;

/// Node of a workspace folder listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileNode {
    pub name: String,
    pub path: String,
    pub is_dir: bool,
    pub children: Vec<FileNode>,
}

impl FileNode {
    /// Directories first, then by name.
    pub fn sort_children(&mut self) {
        self.children
            .sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
    }
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
