//! Master console/file switches

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::env::EnvConfig;

/// Console and file gates applied on top of each logger's own toggles
///
/// A line reaches a sink only if both this gate and the logger's gate are on.
#[derive(Debug)]
pub struct GlobalToggles {
    console: AtomicBool,
    file: AtomicBool,
}

impl GlobalToggles {
    /// Both outputs enabled
    pub fn new() -> Self {
        Self {
            console: AtomicBool::new(true),
            file: AtomicBool::new(true),
        }
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        Self {
            console: AtomicBool::new(!config.disable_console),
            file: AtomicBool::new(!config.disable_file),
        }
    }

    pub fn log_to_console(&self) -> bool {
        self.console.load(Ordering::Relaxed)
    }

    pub fn set_log_to_console(&self, enabled: bool) {
        self.console.store(enabled, Ordering::Relaxed);
    }

    pub fn log_to_file(&self) -> bool {
        self.file.load(Ordering::Relaxed)
    }

    pub fn set_log_to_file(&self, enabled: bool) {
        self.file.store(enabled, Ordering::Relaxed);
    }
}

impl Default for GlobalToggles {
    fn default() -> Self {
        Self::new()
    }
}

// Global instance, seeded from the environment on first use
static GLOBAL_TOGGLES: Lazy<Arc<GlobalToggles>> =
    Lazy::new(|| Arc::new(GlobalToggles::from_config(&EnvConfig::from_env())));

/// The process-wide toggles every logger uses unless built with its own
pub fn global_toggles() -> Arc<GlobalToggles> {
    Arc::clone(&GLOBAL_TOGGLES)
}

pub fn global_log_to_console() -> bool {
    GLOBAL_TOGGLES.log_to_console()
}

/// Enable or disable console output for all loggers
pub fn set_global_log_to_console(enabled: bool) {
    GLOBAL_TOGGLES.set_log_to_console(enabled);
}

pub fn global_log_to_file() -> bool {
    GLOBAL_TOGGLES.log_to_file()
}

/// Enable or disable file output for all loggers
pub fn set_global_log_to_file(enabled: bool) {
    GLOBAL_TOGGLES.set_log_to_file(enabled);
}
