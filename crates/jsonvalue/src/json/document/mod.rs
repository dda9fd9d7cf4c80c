use std::io::Read;

use crate::json::{JsonError, Node, Path, Value};

/// Decoded document, or the error that prevented decoding.
///
/// Owns the tree that every [`Value`] handed out by [`Document::root`] borrows.
#[derive(Debug, Clone)]
pub struct Document {
	root: Result<Node, JsonError>,
}

impl Document {
	/// Decode JSON text from `bytes`.
	pub fn parse(bytes: &[u8]) -> Self {
		Self {
			root: serde_json::from_slice(bytes).map_err(JsonError::from_decode),
		}
	}

	/// Decode JSON text from `reader`.
	pub fn from_reader<R: Read>(reader: R) -> Self {
		Self {
			root: serde_json::from_reader(reader).map_err(JsonError::from_decode),
		}
	}

	/// Wrap an already-decoded tree.
	pub fn from_node(node: Node) -> Self {
		Self { root: Ok(node) }
	}

	/// Root accessor: live with an empty path, or failed with the decode error.
	pub fn root(&self) -> Value<'_> {
		match &self.root {
			Ok(node) => Value::new(node),
			Err(err) => Value::failed(Path::root(), err.clone()),
		}
	}

	/// Decoded tree, if decoding succeeded.
	pub fn node(&self) -> Option<&Node> {
		self.root.as_ref().ok()
	}

	/// Decode error, if decoding failed.
	pub fn error(&self) -> Option<&JsonError> {
		self.root.as_ref().err()
	}
}

impl From<Node> for Document {
	fn from(node: Node) -> Self {
		Self::from_node(node)
	}
}

/// Decode JSON text from `bytes` into a [`Document`].
pub fn parse(bytes: &[u8]) -> Document {
	Document::parse(bytes)
}
