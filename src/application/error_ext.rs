//! Path context for I/O failures while reading record files

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Turns an `io::Result` into an [`ApplicationResult`] naming the file involved.
pub trait IoResultExt<T> {
    /// `action` describes what was attempted, e.g. `"read records"`.
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{} {}", action, path.display()),
            source: Box::new(e),
        })
    }
}
