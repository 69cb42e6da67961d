//! Generate command - create the link secret file.

use std::path::Path;

use tracing::info;

use crate::core::store;
use crate::error::Result;

/// Generate a fresh link secret and write it under `dir`.
///
/// Prints a confirmation line with the written path on success. The
/// directory is expected to exist already; a missing directory surfaces as
/// the underlying filesystem error.
pub fn execute(dir: &Path, file_name: &str) -> Result<()> {
    let path = store::generate_and_write_secret(dir, file_name)?;

    println!("Saved LinkSecretFile to {}", path.display());

    info!(path = %path.display(), "link secret written");
    Ok(())
}
