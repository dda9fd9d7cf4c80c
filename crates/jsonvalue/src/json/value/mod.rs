use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::json::{Expected, JsonError, Kind, Node, Path, PathSegment, Result};

/// Immutable path-tracking handle onto one node of a decoded document.
///
/// Navigation (`key`, `index`, `lookup`, `at`) never fails outright: a bad step
/// yields a failed accessor whose error sticks through any further navigation.
/// Extraction (`str`, `num`, `object`, ...) returns a [`Result`] and leaves the
/// accessor untouched.
#[derive(Debug, Clone)]
pub struct Value<'a> {
	path: Path,
	state: State<'a>,
}

#[derive(Debug, Clone)]
enum State<'a> {
	Live(&'a Node),
	Failed(JsonError),
}

impl<'a> Value<'a> {
	/// Root accessor over an already-decoded node.
	pub fn new(node: &'a Node) -> Self {
		Self {
			path: Path::root(),
			state: State::Live(node),
		}
	}

	pub(crate) fn failed(path: Path, error: JsonError) -> Self {
		Self {
			path,
			state: State::Failed(error),
		}
	}

	fn child(&self, segment: impl Into<PathSegment>, node: &'a Node) -> Self {
		Self {
			path: self.path.child(segment),
			state: State::Live(node),
		}
	}

	/// Steps taken from the root; for a failed accessor, up to and including the faulty step.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Sticky error, if navigation failed.
	pub fn error(&self) -> Option<&JsonError> {
		match &self.state {
			State::Live(_) => None,
			State::Failed(err) => Some(err),
		}
	}

	/// Underlying node, if live.
	pub fn node(&self) -> Option<&'a Node> {
		match self.state {
			State::Live(node) => Some(node),
			State::Failed(_) => None,
		}
	}

	/// Whether this accessor is live.
	pub fn is_ok(&self) -> bool {
		matches!(self.state, State::Live(_))
	}

	/// Navigate to object member `name`.
	pub fn key(&self, name: &str) -> Self {
		let node = match self.state {
			State::Live(node) => node,
			State::Failed(_) => return self.clone(),
		};

		let path = self.path.child(name);
		let Node::Object(map) = node else {
			let error = JsonError::TypeMismatch {
				path: path.clone(),
				expected: Expected::Object,
				actual: Kind::of(node),
			};
			return Self::failed(path, error);
		};

		match map.get(name) {
			Some(child) => Self {
				path,
				state: State::Live(child),
			},
			None => {
				let error = JsonError::KeyNotFound {
					path: path.clone(),
					key: name.to_owned(),
				};
				Self::failed(path, error)
			}
		}
	}

	/// Navigate to array element `index`.
	pub fn index(&self, index: usize) -> Self {
		let node = match self.state {
			State::Live(node) => node,
			State::Failed(_) => return self.clone(),
		};

		let path = self.path.child(index);
		let Node::Array(items) = node else {
			let error = JsonError::TypeMismatch {
				path: path.clone(),
				expected: Expected::Array,
				actual: Kind::of(node),
			};
			return Self::failed(path, error);
		};

		match items.get(index) {
			Some(child) => Self {
				path,
				state: State::Live(child),
			},
			None => {
				let error = JsonError::IndexOutOfRange {
					path: path.clone(),
					index,
					len: items.len(),
				};
				Self::failed(path, error)
			}
		}
	}

	/// Apply [`Value::key`] for each key in turn, stopping at the first failure.
	pub fn lookup<I>(&self, keys: I) -> Self
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		let mut current = self.clone();
		for key in keys {
			if !current.is_ok() {
				break;
			}
			current = current.key(key.as_ref());
		}
		current
	}

	/// Apply every step of `path`, stopping at the first failure.
	pub fn at(&self, path: &Path) -> Self {
		let mut current = self.clone();
		for segment in path {
			if !current.is_ok() {
				break;
			}
			current = match segment {
				PathSegment::Key(key) => current.key(key),
				PathSegment::Index(index) => current.index(*index),
			};
		}
		current
	}

	/// Parse `expr` with [`Path::parse`] and navigate along it.
	///
	/// A malformed expression fails the accessor without extending its path.
	pub fn at_str(&self, expr: &str) -> Self {
		if !self.is_ok() {
			return self.clone();
		}
		match Path::parse(expr) {
			Ok(path) => self.at(&path),
			Err(err) => Self::failed(self.path.clone(), err),
		}
	}

	fn live(&self) -> Result<&'a Node> {
		match &self.state {
			State::Live(node) => Ok(*node),
			State::Failed(err) => Err(err.clone()),
		}
	}

	fn mismatch(&self, expected: Expected, node: &Node) -> JsonError {
		JsonError::TypeMismatch {
			path: self.path.clone(),
			expected,
			actual: Kind::of(node),
		}
	}

	/// Borrow the node as a string.
	pub fn str(&self) -> Result<&'a str> {
		let node = self.live()?;
		match node {
			Node::String(value) => Ok(value.as_str()),
			_ => Err(self.mismatch(Expected::String, node)),
		}
	}

	/// Read the node as a boolean.
	pub fn bool(&self) -> Result<bool> {
		let node = self.live()?;
		match node {
			Node::Bool(value) => Ok(*value),
			_ => Err(self.mismatch(Expected::Boolean, node)),
		}
	}

	/// Read the node as a double-precision number.
	pub fn num(&self) -> Result<f64> {
		let node = self.live()?;
		match node {
			Node::Number(number) => number.as_f64().ok_or_else(|| self.mismatch(Expected::Number, node)),
			_ => Err(self.mismatch(Expected::Number, node)),
		}
	}

	/// Deserialize the node into `T`, borrowing from the document where `T` allows.
	pub fn deserialize<T: Deserialize<'a>>(&self) -> Result<T> {
		let node = self.live()?;
		T::deserialize(node).map_err(|err| JsonError::Deserialize {
			path: self.path.clone(),
			message: err.to_string(),
		})
	}

	/// Object members as child accessors keyed by member name.
	pub fn object(&self) -> Result<BTreeMap<&'a str, Value<'a>>> {
		let node = self.live()?;
		let Node::Object(map) = node else {
			return Err(self.mismatch(Expected::Object, node));
		};
		Ok(map.iter().map(|(key, child)| (key.as_str(), self.child(key.as_str(), child))).collect())
	}

	/// Array elements as child accessors in index order.
	pub fn array(&self) -> Result<Vec<Value<'a>>> {
		let node = self.live()?;
		let Node::Array(items) = node else {
			return Err(self.mismatch(Expected::Array, node));
		};
		Ok(items.iter().enumerate().map(|(index, child)| self.child(index, child)).collect())
	}

	/// Child accessors of a live object or array, in the decoded map's or index order.
	pub(crate) fn children(&self) -> Vec<Value<'a>> {
		match self.state {
			State::Live(Node::Object(map)) => map.iter().map(|(key, child)| self.child(key.as_str(), child)).collect(),
			State::Live(Node::Array(items)) => items.iter().enumerate().map(|(index, child)| self.child(index, child)).collect(),
			_ => Vec::new(),
		}
	}

	/// Element count of an array, or character count of a string.
	pub fn len(&self) -> Result<usize> {
		let node = self.live()?;
		match node {
			Node::Array(items) => Ok(items.len()),
			Node::String(value) => Ok(value.chars().count()),
			_ => Err(self.mismatch(Expected::ArrayOrString, node)),
		}
	}

	/// Whether an array or string is empty.
	pub fn is_empty(&self) -> Result<bool> {
		self.len().map(|len| len == 0)
	}

	/// Node kind; a failed accessor has no node and reports [`Kind::Null`].
	pub fn kind(&self) -> Kind {
		self.node().map_or(Kind::Null, Kind::of)
	}

	/// Node kind, or the sticky error of a failed accessor.
	pub fn try_kind(&self) -> Result<Kind> {
		self.live().map(Kind::of)
	}

	/// Shorthand for `kind() == Kind::Null`.
	pub fn is_null(&self) -> bool {
		self.kind() == Kind::Null
	}
}

impl fmt::Display for Value<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.state {
			State::Live(Node::String(value)) => f.write_str(value),
			State::Live(node) => write!(f, "{node}"),
			State::Failed(err) if err.path().is_some() => write!(f, "{err}"),
			State::Failed(err) => write!(f, "{}: {err}", self.path),
		}
	}
}

#[cfg(test)]
mod tests;
