//! Caller metadata resolution
//!
//! Every public severity method is `#[track_caller]`, so the resolver is
//! handed the application call site directly and never counts frames:
//! - `BacktraceResolver`: file/line from the call site, function/module from the matching backtrace frame
//! - `LocationResolver`: file/line only
//!
//! The `caller!()` macro resolves everything at compile time instead.

mod info;
mod traits;
mod resolvers;

pub use info::CallerInfo;
pub use traits::{CallerResolver, BoxedResolver};
pub use resolvers::{BacktraceResolver, LocationResolver};
