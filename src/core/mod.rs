// Public modules
pub mod error;
pub mod list;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use list::{NormalizeOutput, NormalizedList, RewriteFileOutput};
