//! Utility module

mod error;
pub mod escape;

pub use error::{CleanupFailure, Error, Result};
