//! implgen - default implementations of Java interfaces
//!
//! Given an interface description, implgen writes a class whose methods all
//! return the default value of their return type, compiles it with the
//! platform compiler and packages the class file into a jar.

pub mod backend;
pub mod driver;
pub mod frontend;
pub mod types;
pub mod utils;

pub use driver::{ArchiveReport, Implementor, SourceOutcome};
pub use utils::{CleanupFailure, Error, Result};
