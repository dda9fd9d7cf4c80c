use std::fmt;

use thiserror::Error;

use crate::json::{Kind, Path};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, JsonError>;

/// Node shape an operation required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
	/// An object node.
	Object,
	/// An array node.
	Array,
	/// A string node.
	String,
	/// A boolean node.
	Boolean,
	/// A number node.
	Number,
	/// Either an array or a string node.
	ArrayOrString,
}

impl Expected {
	/// Stable human-readable label, article included.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Object => "an object",
			Self::Array => "an array",
			Self::String => "a string",
			Self::Boolean => "a boolean",
			Self::Number => "a number",
			Self::ArrayOrString => "an array or string",
		}
	}
}

impl fmt::Display for Expected {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Errors produced while parsing, navigating, and extracting JSON values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JsonError {
	/// Input was not well-formed JSON.
	#[error("parse: {message}")]
	Decode {
		/// Decoder message.
		message: String,
		/// One-based line of the failure.
		line: usize,
		/// One-based column of the failure.
		column: usize,
	},
	/// Reader failed while the document was being decoded.
	#[error("parse: io: {message}")]
	Io {
		/// Underlying IO error message.
		message: String,
	},
	/// Node kind did not match what the operation required.
	#[error("{path}: not {expected} (got {actual})")]
	TypeMismatch {
		/// Location of the mismatching node.
		path: Path,
		/// Required node shape.
		expected: Expected,
		/// Actual node kind.
		actual: Kind,
	},
	/// Object did not contain the requested key.
	#[error("{path}: key not found {key:?}")]
	KeyNotFound {
		/// Location including the missing key.
		path: Path,
		/// Requested key.
		key: String,
	},
	/// Array index was outside `[0, len)`.
	#[error("{path}: index out of range {index} (len={len})")]
	IndexOutOfRange {
		/// Location including the offending index.
		path: Path,
		/// Requested index.
		index: usize,
		/// Array length.
		len: usize,
	},
	/// Path expression syntax is invalid.
	#[error("invalid path expression: {expr}")]
	InvalidPath {
		/// Original path expression.
		expr: String,
	},
	/// Node could not be deserialized into the requested type.
	#[error("{path}: deserialize: {message}")]
	Deserialize {
		/// Location of the node.
		path: Path,
		/// Deserializer message.
		message: String,
	},
	/// Traversal reached the configured depth ceiling.
	#[error("{path}: walk depth exceeded (max={max_depth})")]
	WalkDepthExceeded {
		/// Node whose children were too deep.
		path: Path,
		/// Configured depth ceiling.
		max_depth: usize,
	},
}

impl JsonError {
	/// Location carried by the error, if any.
	///
	/// Parse-time errors and malformed path expressions carry no location.
	pub fn path(&self) -> Option<&Path> {
		match self {
			Self::Decode { .. } | Self::Io { .. } | Self::InvalidPath { .. } => None,
			Self::TypeMismatch { path, .. }
			| Self::KeyNotFound { path, .. }
			| Self::IndexOutOfRange { path, .. }
			| Self::Deserialize { path, .. }
			| Self::WalkDepthExceeded { path, .. } => Some(path),
		}
	}

	pub(crate) fn from_decode(err: serde_json::Error) -> Self {
		if err.is_io() {
			return Self::Io { message: err.to_string() };
		}
		Self::Decode {
			message: err.to_string(),
			line: err.line(),
			column: err.column(),
		}
	}
}
