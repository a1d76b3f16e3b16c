//! WebAssembly bindings for the nez CPU core.
//!
//! This module provides a JavaScript-callable wrapper so a browser front end can
//! load a program, drive execution once per animation frame, and render the
//! register file and memory pages.

pub mod api;

pub use api::Emulator;
