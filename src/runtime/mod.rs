//! Runtime half of call-site-aware logging.
//!
//! ## Module Structure
//!
//! - `location`: Validation and stripping of the trailing `path`, `line` pair
//! - `log`: The `Log` facade, `Logger` and line formatting
//! - `style`: Pluggable painting of the origin tag

pub mod location;
pub mod log;
pub mod style;

pub use location::{LineNumber, LocationPair, Origin, split_location};
pub use log::{Log, Logger, TraceableFn, format_line};
pub use style::{Cyan, OriginStyle, Plain};
