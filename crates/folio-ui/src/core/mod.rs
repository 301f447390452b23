//! Core, DOM-free controller, ports and their in-memory implementations.
pub mod actions;
pub mod config;
pub mod controller;
pub mod error;
pub mod memory;
pub mod ports;
