mod document;
mod error;
mod kind;
mod path;
mod value;
mod walk;

/// Parsed document ownership and parse entry points.
pub use document::{Document, parse};
/// Error and result aliases.
pub use error::{Expected, JsonError, Result};
/// Node kind classification.
pub use kind::Kind;
/// Path segments and parsed path expressions.
pub use path::{Path, PathSegment};
/// Path-tracking accessor.
pub use value::Value;
/// Tree traversal options and summary.
pub use walk::{StopMode, WalkOptions, WalkSummary};

/// Decoded JSON node produced by `serde_json`.
pub type Node = serde_json::Value;
