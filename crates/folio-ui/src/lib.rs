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
//! Folio portfolio page controller.
//!
//! The DOM-free controller in [`core`] renders the navbar, hero and content
//! sections through the [`core::ports`] traits. `services` and `app` bind it
//! to the browser on `wasm32`; [`preview`] runs it against files on disk.

pub mod core;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(not(target_arch = "wasm32"))]
pub mod preview;

pub use crate::core::actions::PageAction;
pub use crate::core::config::{PageConfig, Section, SlotIds};
pub use crate::core::controller::{Hydration, PageController};
pub use crate::core::error::{ControllerError, SourceError};

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
