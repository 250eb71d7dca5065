use crate::handle::{FileHandle, FileType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of every string derived from a handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleReport {
    /// Normalized path (e.g., "assets/ui/skin.json")
    pub path: String,
    pub name: String,
    pub extension: String,
    pub name_without_extension: String,
    pub path_without_extension: String,
    /// Storage origin
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Whether the origin only allows reads
    pub read_only: bool,
}

impl From<&FileHandle> for HandleReport {
    fn from(handle: &FileHandle) -> Self {
        let file_type = handle.file_type();
        Self {
            path: handle.path(),
            name: handle.name(),
            extension: handle.extension(),
            name_without_extension: handle.name_without_extension(),
            path_without_extension: handle.path_without_extension(),
            file_type,
            read_only: file_type.is_read_only(),
        }
    }
}

impl fmt::Display for HandleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "path:                   {}", self.path)?;
        writeln!(f, "name:                   {}", self.name)?;
        writeln!(f, "extension:              {}", self.extension)?;
        writeln!(f, "name_without_extension: {}", self.name_without_extension)?;
        writeln!(f, "path_without_extension: {}", self.path_without_extension)?;
        writeln!(f, "type:                   {}", self.file_type)?;
        write!(f, "read_only:              {}", self.read_only)
    }
}
