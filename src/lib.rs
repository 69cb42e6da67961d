//! Linksec - generates the wallet link secret and persists it to disk.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Generate-and-write command
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── constants     # Default output location
//!     ├── secret        # Link secret generation and hex encoding
//!     └── store         # Persistence to the secret file
//! ```
//!
//! The binary performs exactly one operation: draw 32 bytes from the
//! operating system's cryptographically secure random source, encode them as
//! lowercase hex, and write the result to a file another process reads later.

pub mod cli;
pub mod core;
pub mod error;
