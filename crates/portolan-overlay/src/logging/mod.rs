//! Logging utilities.
//!
//! Centralizes logger initialization. Everything else in the crate logs
//! through the `log` facade only; per-frame paths stay at `trace!` and
//! tolerated oddities (unknown skin entry, layout for an absent widget)
//! at `debug!`.

mod init;

pub use init::{DEFAULT_FILTER, LoggingConfig, init_logging};
