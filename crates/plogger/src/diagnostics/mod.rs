//! Fallback channel for the logger's own failures
//!
//! Implementations:
//! - `StderrDiagnostics`: prints to stderr (default)
//! - `NoOpDiagnostics`: drops everything
//! - `MemoryDiagnostics`: keeps messages for inspection

mod traits;
mod stderr;
mod noop;
mod memory;

pub use traits::{Diagnostics, SharedDiagnostics};
pub use stderr::StderrDiagnostics;
pub use noop::NoOpDiagnostics;
pub use memory::MemoryDiagnostics;
