//! Persistence to the secret file.
//!
//! Writes the hex-encoded secret to `<directory>/<file_name>`, truncating any
//! existing content. The directory is not created or checked; a missing or
//! unwritable directory surfaces as the underlying filesystem error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::secret::LinkSecret;
use crate::error::{LinksecError, Result};

/// Generate a fresh link secret and write its hex encoding to
/// `<directory>/<file_name>`.
///
/// Returns the path written. The file contains exactly the 64-character
/// lowercase hex string, no trailing newline. Each call overwrites the file
/// with a newly generated secret; two concurrent calls targeting the same
/// path race and the last writer wins.
///
/// # Errors
///
/// Returns `LinksecError::Write` if the file cannot be created or written.
pub fn generate_and_write_secret(directory: &Path, file_name: &str) -> Result<PathBuf> {
    let secret = LinkSecret::generate();
    let hex = secret.to_hex();

    let path = directory.join(file_name);
    debug!(path = %path.display(), "writing link secret");

    fs::write(&path, hex.as_bytes()).map_err(|source| LinksecError::Write {
        path: path.display().to_string(),
        source,
    })?;

    Ok(path)
}
