use std::fmt;

use crate::json::{JsonError, Result};

/// One navigation step from a parent node to a child.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
	/// Select an object member by key.
	Key(String),
	/// Select an array element by zero-based index.
	Index(usize),
}

impl fmt::Display for PathSegment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Key(key) => f.write_str(key),
			Self::Index(index) => write!(f, "{index}"),
		}
	}
}

impl From<&str> for PathSegment {
	fn from(key: &str) -> Self {
		Self::Key(key.to_owned())
	}
}

impl From<String> for PathSegment {
	fn from(key: String) -> Self {
		Self::Key(key)
	}
}

impl From<usize> for PathSegment {
	fn from(index: usize) -> Self {
		Self::Index(index)
	}
}

/// Ordered key/index steps locating a node relative to the document root.
///
/// Renders as `$` for the root and `$.key[1].other` otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
	segments: Vec<PathSegment>,
}

impl Path {
	/// Empty path addressing the document root.
	pub fn root() -> Self {
		Self::default()
	}

	/// Parse dotted key syntax with optional `[index]` selectors and an optional leading `$`.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || JsonError::InvalidPath { expr: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut segments = Vec::new();
		let mut need_key = false;

		match bytes[0] {
			b'$' => idx = 1,
			b'[' => {}
			_ => need_key = true,
		}

		while need_key || idx < bytes.len() {
			if need_key {
				let start = idx;
				while idx < bytes.len() && is_key_byte(bytes[idx]) {
					idx += 1;
				}
				if idx == start {
					return Err(invalid());
				}
				segments.push(PathSegment::Key(input[start..idx].to_owned()));
				need_key = false;
				continue;
			}

			match bytes[idx] {
				b'.' => {
					idx += 1;
					need_key = true;
				}
				b'[' => {
					idx += 1;
					let n_start = idx;
					while idx < bytes.len() && bytes[idx].is_ascii_digit() {
						idx += 1;
					}
					if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
						return Err(invalid());
					}

					let number = input[n_start..idx].parse::<usize>().map_err(|_| invalid())?;
					segments.push(PathSegment::Index(number));
					idx += 1;
				}
				_ => return Err(invalid()),
			}
		}

		Ok(Self { segments })
	}

	/// Steps in navigation order.
	pub fn segments(&self) -> &[PathSegment] {
		&self.segments
	}

	/// Number of steps from the root.
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Whether this path addresses the root.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Final step, if any.
	pub fn last(&self) -> Option<&PathSegment> {
		self.segments.last()
	}

	/// Return a new path extended with `segment`, leaving `self` untouched.
	pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
		let mut segments = Vec::with_capacity(self.segments.len() + 1);
		segments.extend_from_slice(&self.segments);
		segments.push(segment.into());
		Self { segments }
	}

	/// Append a step in place.
	pub fn push(&mut self, segment: impl Into<PathSegment>) {
		self.segments.push(segment.into());
	}

	/// String form of every step, indices stringified.
	pub fn to_strings(&self) -> Vec<String> {
		self.segments.iter().map(ToString::to_string).collect()
	}
}

impl fmt::Display for Path {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("$")?;
		for segment in &self.segments {
			match segment {
				PathSegment::Key(key) => write!(f, ".{key}")?,
				PathSegment::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}

impl FromIterator<PathSegment> for Path {
	fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
		Self {
			segments: iter.into_iter().collect(),
		}
	}
}

impl From<Vec<PathSegment>> for Path {
	fn from(segments: Vec<PathSegment>) -> Self {
		Self { segments }
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a PathSegment;
	type IntoIter = std::slice::Iter<'a, PathSegment>;

	fn into_iter(self) -> Self::IntoIter {
		self.segments.iter()
	}
}

fn is_key_byte(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}
