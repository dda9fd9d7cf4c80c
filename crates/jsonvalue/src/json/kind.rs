use std::fmt;

use crate::json::Node;

/// Kind of a decoded JSON node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Key/value mapping.
	Object,
	/// Ordered sequence.
	Array,
	/// Double-precision number.
	Number,
	/// UTF-8 string.
	String,
	/// `true` or `false`.
	Boolean,
	/// Explicit `null`, or no node at all.
	Null,
}

impl Kind {
	/// Classify a decoded node.
	pub fn of(node: &Node) -> Self {
		match node {
			Node::Object(_) => Self::Object,
			Node::Array(_) => Self::Array,
			Node::Number(_) => Self::Number,
			Node::String(_) => Self::String,
			Node::Bool(_) => Self::Boolean,
			Node::Null => Self::Null,
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Object => "object",
			Self::Array => "array",
			Self::Number => "number",
			Self::String => "string",
			Self::Boolean => "boolean",
			Self::Null => "null",
		}
	}

	/// Whether nodes of this kind have children.
	pub fn is_container(self) -> bool {
		matches!(self, Self::Object | Self::Array)
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
