//! Utility modules for common functionality
//!
//! Provides the shared process execution layer.

pub mod process;

pub use process::ProcessRunner;
