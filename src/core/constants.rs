//! Constants used throughout linksec.
//!
//! Centralizes the default output location.

/// Default directory the secret file is written into.
///
/// Relative to the process working directory; expected to exist already.
pub const DEFAULT_DATA_DIR: &str = "./crypto_data";

/// Default name of the secret file.
pub const LINK_SECRET_FILE: &str = "link_secret.txt";
