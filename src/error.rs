use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandleError {
    #[error("Unknown file type: {0} (expected classpath, internal, external, absolute or local)")]
    UnknownFileType(String),

    #[error("Cannot get the sibling of the root: {0:?}")]
    NoSibling(String),
}
