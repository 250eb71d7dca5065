use crate::error::HandleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the bytes behind a file handle live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Resource bundled with the program image, looked up by name
    Classpath,
    /// Bundled application asset (archive or asset directory)
    Internal,
    /// Relative to the user's external storage or home directory
    External,
    /// Plain filesystem path, used as given
    Absolute,
    /// Relative to the application's private writable storage
    Local,
}

impl FileType {
    /// Every storage origin, in declaration order
    pub const ALL: [FileType; 5] = [
        FileType::Classpath,
        FileType::Internal,
        FileType::External,
        FileType::Absolute,
        FileType::Local,
    ];

    /// Lowercase name used by `Display`, `FromStr` and serde
    pub fn as_str(self) -> &'static str {
        match self {
            FileType::Classpath => "classpath",
            FileType::Internal => "internal",
            FileType::External => "external",
            FileType::Absolute => "absolute",
            FileType::Local => "local",
        }
    }

    /// Bundled origins can be read but never written
    pub fn is_read_only(self) -> bool {
        matches!(self, FileType::Classpath | FileType::Internal)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HandleError::UnknownFileType(s.to_string()))
    }
}
