//! Process-wide configuration
//!
//! - `EnvConfig`: the two environment switches, read once
//! - `GlobalToggles`: the master console/file gates shared by every logger

mod env;
mod toggles;

pub use env::{EnvConfig, DISABLE_CONSOLE_VAR, DISABLE_FILE_VAR};
pub use toggles::{
    GlobalToggles, global_toggles,
    global_log_to_console, global_log_to_file,
    set_global_log_to_console, set_global_log_to_file,
};
