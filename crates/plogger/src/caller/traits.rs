//! Caller resolver trait definition

use std::panic::Location;

use super::info::CallerInfo;

/// Turns an application call site into caller metadata
pub trait CallerResolver: Send + Sync {
    /// Resolve the metadata for `location`, the site that invoked the logger
    ///
    /// Must never fail: anything that cannot be determined is replaced by
    /// the placeholders of [`CallerInfo::unknown`].
    fn resolve(&self, location: &'static Location<'static>) -> CallerInfo;
}

/// Type alias for a boxed resolver
pub type BoxedResolver = Box<dyn CallerResolver>;
