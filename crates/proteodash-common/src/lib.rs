//! proteodash-common — Shared error type and HTTP client used across all proteodash crates.

pub mod error;
pub mod sandbox;

pub use error::{ProteodashError, Result};
