//! Public library API for navigating decoded JSON documents with path-tracking errors.

/// Document parsing, path-tracking accessors, typed extraction, and traversal.
pub mod json;
