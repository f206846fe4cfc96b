//! Build-time side: parsing, the rewriting pass and the file-level host.
//!
//! ## Module Structure
//!
//! - `file_scanner`: Source file discovery from config includes and ignores
//! - `parsers`: swc parsing of JS/JSX/TS/TSX sources
//! - `rewrite`: The `Log.traceable` rewriting plugin
//! - `transform`: Parse, rewrite and splice for one source text

pub mod file_scanner;
pub mod parsers;
pub mod rewrite;
pub mod transform;

pub use transform::{TransformOutput, transform_source};
