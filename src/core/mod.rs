//! Core library components.
//!
//! This module contains the reusable business logic for the dotenv codec,
//! snapshot diffing, envelope encryption, configuration handling, and the
//! service client.

pub mod api;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod diff;
pub mod env;
