#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Logging setup shared by the Folio binaries.
//!
//! Native builds log to stderr (pretty or JSON); wasm builds forward formatted
//! events to the browser console.

#[cfg(target_arch = "wasm32")]
mod console;
pub mod error;
pub mod init;

pub use error::{Result, TelemetryError};
#[cfg(target_arch = "wasm32")]
pub use init::init_browser_logging;
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
