//! Link secret generation and hex encoding.
//!
//! The secret is an opaque 32-byte value drawn from the operating system's
//! cryptographically secure random source. It has no internal structure and
//! is wiped from memory when dropped.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, Zeroizing};

/// Length of a link secret in bytes.
pub const SECRET_LEN: usize = 32;

/// A freshly generated link secret.
pub struct LinkSecret([u8; SECRET_LEN]);

impl LinkSecret {
    /// Generate a new secret from the OS random source.
    pub fn generate() -> Self {
        let mut bytes = [0u8; SECRET_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Encode the secret as a lowercase hex string.
    ///
    /// The result is always exactly twice `SECRET_LEN` characters and is
    /// wrapped in `Zeroizing` so the text form is wiped along with the bytes.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.0))
    }
}

impl Drop for LinkSecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
