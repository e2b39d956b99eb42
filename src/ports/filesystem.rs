//! Filesystem port for file I/O operations.

use std::path::Path;

/// Provides filesystem access for reading local resources.
///
/// Abstracting the filesystem keeps the roster loader testable without
/// touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
