mod file_type;
mod path;

#[cfg(test)]
mod path_tests;

pub use file_type::FileType;
pub use path::{SEPARATOR, normalize_separators};

use crate::error::HandleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// A file or directory on one of the storage origins in [`FileType`].
///
/// The native path and the origin are fixed at construction. Nothing here
/// touches the filesystem: the accessors are string arithmetic over the
/// stored path, and the path is never checked for existence or validity.
///
/// Some origins (archives, classpath resources) have no real file behind
/// them, so [`file()`](Self::file) is only meaningful for disk-backed types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "HandleRepr", from = "HandleRepr")]
pub struct FileHandle {
    file: PathBuf,
    file_type: FileType,
}

/// Serialized shape of a handle
#[derive(Serialize, Deserialize)]
struct HandleRepr {
    path: String,
    #[serde(rename = "type")]
    file_type: FileType,
}

impl FileHandle {
    /// Create an absolute handle for a path string or native path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_type(path, FileType::Absolute)
    }

    /// Create a handle on a specific storage origin
    pub fn with_type(path: impl AsRef<Path>, file_type: FileType) -> Self {
        let file = path.as_ref().to_path_buf();
        trace!(path = %file.display(), %file_type, "created file handle");
        Self { file, file_type }
    }

    /// Path as given on construction, with backslashes replaced by forward
    /// slashes, e.g. `internal("dir\\file.png")` -> `dir/file.png`.
    pub fn path(&self) -> String {
        normalize_separators(&self.file.to_string_lossy())
    }

    /// Name of the file without any parent paths
    pub fn name(&self) -> String {
        path::file_name(&self.path()).to_string()
    }

    /// Text after the last dot of the name, or an empty string
    pub fn extension(&self) -> String {
        let path = self.path();
        path::split_extension(path::file_name(&path))
            .map(|(_, ext)| ext.to_string())
            .unwrap_or_default()
    }

    /// Name of the file without parent paths or the extension
    pub fn name_without_extension(&self) -> String {
        let path = self.path();
        let name = path::file_name(&path);
        match path::split_extension(name) {
            Some((stem, _)) => stem.to_string(),
            None => name.to_string(),
        }
    }

    /// Normalized path without the extension,
    /// e.g. `dir/dir2/file.png` -> `dir/dir2/file`.
    ///
    /// The last dot anywhere in the path marks the extension, so a dotted
    /// directory with an extensionless file, `a.d/file`, becomes `a`.
    pub fn path_without_extension(&self) -> String {
        let mut path = self.path();
        if let Some(dot) = path.rfind('.') {
            path.truncate(dot);
        }
        path
    }

    /// Storage origin given on construction
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// The underlying native path, exactly as constructed
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Handle for a file inside this directory, on the same origin
    pub fn child(&self, name: &str) -> FileHandle {
        FileHandle::with_type(path::join(&self.path(), name), self.file_type)
    }

    /// Handle for the directory containing this one, on the same origin.
    ///
    /// A bare name has the root as parent: `/` for absolute handles and the
    /// empty path for every other origin.
    pub fn parent(&self) -> FileHandle {
        let path = self.path();
        let parent = match path::parent_path(&path) {
            Some(parent) => parent,
            None if self.file_type == FileType::Absolute => "/",
            None => "",
        };
        FileHandle::with_type(parent, self.file_type)
    }

    /// Handle for a file next to this one, on the same origin
    pub fn sibling(&self, name: &str) -> Result<FileHandle, HandleError> {
        let path = self.path();
        let trimmed = path::trim_trailing_separators(&path);
        if trimmed.is_empty() {
            debug!(path = %path, sibling = name, "refusing sibling of root");
            return Err(HandleError::NoSibling(path));
        }

        let sibling = match path::parent_path(trimmed) {
            Some(parent) => path::join(parent, name),
            None => name.to_string(),
        };
        Ok(FileHandle::with_type(sibling, self.file_type))
    }
}

impl PartialEq for FileHandle {
    fn eq(&self, other: &Self) -> bool {
        self.file_type == other.file_type && self.path() == other.path()
    }
}

impl Eq for FileHandle {}

impl Hash for FileHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.file_type.hash(state);
        self.path().hash(state);
    }
}

impl fmt::Display for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl From<PathBuf> for FileHandle {
    fn from(file: PathBuf) -> Self {
        FileHandle::new(file)
    }
}

impl From<&Path> for FileHandle {
    fn from(file: &Path) -> Self {
        FileHandle::new(file)
    }
}

impl From<&str> for FileHandle {
    fn from(path: &str) -> Self {
        FileHandle::new(path)
    }
}

impl From<String> for FileHandle {
    fn from(path: String) -> Self {
        FileHandle::new(path)
    }
}

impl From<FileHandle> for HandleRepr {
    fn from(handle: FileHandle) -> Self {
        HandleRepr {
            path: handle.path(),
            file_type: handle.file_type,
        }
    }
}

impl From<HandleRepr> for FileHandle {
    fn from(repr: HandleRepr) -> Self {
        FileHandle::with_type(repr.path, repr.file_type)
    }
}
