//! Envsnap - versioned, encrypted backups for your .env files.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── login         # Authenticate and store a token
//! │   ├── init          # Set up a project directory
//! │   ├── backup        # Snapshot .env to the server
//! │   ├── pull          # Download the latest snapshot
//! │   ├── list          # List repositories
//! │   ├── commit        # Stage a commit message
//! │   ├── diff          # Compare .env against a snapshot
//! │   ├── watch         # Auto-backup on file change
//! │   ├── social        # Star and fork repositories
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── env           # .env parsing and serialization
//!     ├── diff          # Key-level env comparison
//!     ├── crypto        # AES-256-GCM envelope sealing
//!     ├── config        # Global and project configuration
//!     ├── api           # Typed HTTP client
//!     └── constants     # Shared names and limits
//! ```
//!
//! # Features
//!
//! - Versioned .env snapshots with commit messages
//! - Client-side AES-256-GCM envelope encryption
//! - Insertion-order-preserving .env codec
//! - Key-level diffs between local and stored snapshots
//! - Watch mode for automatic backups

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::crypto::{decrypt_envelope, encrypt_envelope, KeyDerivation};
pub use crate::core::diff::EnvDiff;
pub use crate::core::env::{parse_env, serialize_env, EnvMap};
pub use crate::error::{Error, Result};
