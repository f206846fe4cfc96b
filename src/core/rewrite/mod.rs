//! Build-time rewriting of `Log.traceable(...)` calls.
//!
//! ## Module Structure
//!
//! - `call_site`: Syntactic detection of the traceable call shape
//! - `plugin`: Plugin descriptor, options, per-file state and the `VisitMut` pass
//! - `relative_path`: Lexical path normalization and relativization

pub mod call_site;
pub mod plugin;
pub mod relative_path;


pub use call_site::{CallSite, FACADE_NAME, TRACEABLE_METHOD, has_location_pair};
pub use plugin::{
    Injection, PLUGIN_NAME, PluginOptions, TraceablePlugin, TraceableVisitor, TransformState,
    UNKNOWN_FILE, plugin,
};
pub use relative_path::{normalize, relative_path};
