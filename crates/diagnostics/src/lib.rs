//! Logging facade shared by the nstree crates.
//!
//! Output is controlled by the NSTREE_LOG environment variable:
//! - NSTREE_LOG=off (default) - no logs
//! - NSTREE_LOG=error | warn | info - progressively more operational logs
//! - NSTREE_LOG=debug - every folder/file creation, removal and teardown

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

/// Environment variable consulted by `init_diagnostics`.
pub const LOG_ENV: &str = "NSTREE_LOG";

static INIT: Once = Once::new();

/// Requested verbosity, parsed from the NSTREE_LOG value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl Verbosity {
    /// Parse a NSTREE_LOG value. Returns None for unrecognized input.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" | "" => Some(Verbosity::Off),
            "error" => Some(Verbosity::Error),
            "warn" => Some(Verbosity::Warn),
            "info" => Some(Verbosity::Info),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }

    fn min_level(self) -> Option<emit::Level> {
        match self {
            Verbosity::Off => None,
            Verbosity::Error => Some(emit::Level::Error),
            Verbosity::Warn => Some(emit::Level::Warn),
            Verbosity::Info => Some(emit::Level::Info),
            Verbosity::Debug => Some(emit::Level::Debug),
        }
    }
}

/// Initialize diagnostics from NSTREE_LOG, defaulting to `off`.
///
/// Safe to call multiple times; only the first call has any effect.
pub fn init_diagnostics() {
    init_with_default(Verbosity::Off);
}

/// Initialize diagnostics, using `fallback` when NSTREE_LOG is not set.
///
/// The binary uses this to let `--verbose` turn on debug output without
/// overriding an explicit NSTREE_LOG.
pub fn init_with_default(fallback: Verbosity) {
    INIT.call_once(|| {
        let (verbosity, unknown) = match std::env::var(LOG_ENV) {
            Ok(value) => match Verbosity::parse(&value) {
                Some(v) => (v, None),
                None => (Verbosity::Info, Some(value)),
            },
            Err(_) => (fallback, None),
        };

        let Some(level) = verbosity.min_level() else {
            return;
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(level))
            .init();

        if let Some(value) = unknown {
            emit::warn!("Unknown NSTREE_LOG value {value}, using info");
        }

        // The runtime must outlive every log call in the process.
        std::mem::forget(rt);
    });
}

/// Log basic operations users may want to see in normal usage.
///
/// Examples: "Created file", "Tree torn down"
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics: folder creation, lookups, node counts.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log recoverable conditions the caller should know about.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log failures reported at a process boundary.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

/// Re-export the init function for convenience
pub use init_diagnostics as init;
