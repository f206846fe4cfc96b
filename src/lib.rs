//! Bulbul - call-site-aware logging for JavaScript and TypeScript
//!
//! Bulbul rewrites `Log.traceable(...)` calls at build time so they carry the
//! file path and line they were written on, and renders that location at run
//! time in front of the logged values.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, the rewriting plugin and the file-level transform
//! - `runtime`: The `Log` facade and trailing-location recovery
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod runtime;
pub mod utils;

#[doc(hidden)]
pub use serde_json;
