//! Output macros shared by every command.
//!
//! Each user-facing macro prints one line straight to the terminal
//! (`println!`, or `eprintln!` for errors) whatever the log filter says, so
//! an operation always ends with its confirmation or error. Only
//! `msg_debug!` goes through `tracing`, and only in debug mode.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when either variable is set:
//! - **`TASK_TRACKER_DEBUG`**: application-specific switch
//! - **`RUST_LOG`**: standard filter for `tracing-subscriber`
//!
//! The check runs once per process and is cached.
//!
//! ## Macros
//!
//! - **`msg_success!`**: ✅ prefix
//! - **`msg_info!`**: ℹ️ prefix
//! - **`msg_warning!`**: ⚠️ prefix
//! - **`msg_error!`**: ❌ prefix, stderr
//! - **`msg_debug!`**: 🔍 prefix, silent outside debug mode
//!
//! ```rust
//! use task_tracker::{msg_debug, msg_success};
//! use task_tracker::libs::messages::Message;
//!
//! msg_success!(Message::TaskAdded(1));
//! msg_debug!(Message::TasksLoaded(3, "tasks.json".to_string()));
//! ```

use std::sync::OnceLock;

/// Environment variable that switches on debug output.
pub const DEBUG_ENV: &str = "TASK_TRACKER_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns whether debug output is enabled. Cached after the first call.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var_os(DEBUG_ENV).is_some() || std::env::var_os("RUST_LOG").is_some())
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        println!("✅ {}", $msg)
    };
}

/// Errors go to stderr so that `list` output can be piped without them.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        eprintln!("❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        println!("⚠️ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        println!("ℹ️ {}", $msg)
    };
}

/// Debug-only line. Produces no output at all in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
