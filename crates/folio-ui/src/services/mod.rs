//! Browser implementations of the controller ports (wasm only).
pub mod dom;
pub mod fetch;
pub mod storage;
