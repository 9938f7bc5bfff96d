//! Bugsage Core Library
//!
//! Domain models and analysis orchestration for the Bugsage error
//! debugging assistant.

pub mod ai;
pub mod analysis;
pub mod config;
pub mod error;
pub mod session;
pub mod stackoverflow;

pub use error::{BugsageError, BugsageResult, FetchError};
