// Public API exports
pub mod error;
pub mod handle;
pub mod report;

// Re-export main types for convenience
pub use error::HandleError;
pub use handle::{FileHandle, FileType, SEPARATOR, normalize_separators};
pub use report::HandleReport;
