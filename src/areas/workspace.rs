use anyhow::Context;
use std::path::Path;

/// Read-only access to the documents being diffed.
///
/// The engine itself never touches the file system; this is the boundary
/// where missing or non-UTF-8 inputs are rejected before the diff runs.
#[derive(Debug, Default)]
pub struct Workspace;

impl Workspace {
    pub fn read_document(&self, path: &Path) -> anyhow::Result<String> {
        if !path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", path);
        }

        if !path.is_file() {
            anyhow::bail!("The specified path is not a file: {:?}", path);
        }

        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document as UTF-8 text: {:?}", path))
    }
}
