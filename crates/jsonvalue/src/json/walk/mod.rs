use crate::json::{JsonError, Result, Value};

/// Action taken when traversal reaches `max_depth` on a node that still has children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopMode {
	/// Leave the children unvisited and count them in [`WalkSummary::truncated`].
	#[default]
	Skip,
	/// Abort traversal with [`JsonError::WalkDepthExceeded`].
	Error,
}

/// Traversal options.
#[derive(Debug, Clone)]
pub struct WalkOptions {
	/// Deepest level visited; the starting accessor is depth 0.
	pub max_depth: usize,
	/// Action when a visited node at `max_depth` has children.
	pub on_depth_limit: StopMode,
}

impl Default for WalkOptions {
	fn default() -> Self {
		Self {
			max_depth: 512,
			on_depth_limit: StopMode::Skip,
		}
	}
}

/// Counters describing a finished traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
	/// Accessors passed to the visitor.
	pub visited: usize,
	/// Visits that returned `false`.
	pub pruned: usize,
	/// Children left unvisited because of the depth limit.
	pub truncated: usize,
}

impl<'a> Value<'a> {
	/// Depth-first pre-order traversal with [`WalkOptions::default`].
	///
	/// When `visit` returns `false`, the current node's children are skipped.
	pub fn walk<F>(&self, visit: F) -> Result<WalkSummary>
	where
		F: FnMut(&Value<'a>) -> bool,
	{
		self.walk_with(&WalkOptions::default(), visit)
	}

	/// Depth-first pre-order traversal driven by an explicit worklist.
	///
	/// Array children are visited in index order, object children in the decoded map's order.
	pub fn walk_with<F>(&self, options: &WalkOptions, mut visit: F) -> Result<WalkSummary>
	where
		F: FnMut(&Value<'a>) -> bool,
	{
		let mut summary = WalkSummary::default();
		let mut stack = vec![(self.clone(), 0_usize)];

		while let Some((current, depth)) = stack.pop() {
			summary.visited += 1;
			if !visit(&current) {
				summary.pruned += 1;
				continue;
			}

			let children = current.children();
			if children.is_empty() {
				continue;
			}

			if depth >= options.max_depth {
				match options.on_depth_limit {
					StopMode::Skip => {
						summary.truncated += children.len();
						continue;
					}
					StopMode::Error => {
						return Err(JsonError::WalkDepthExceeded {
							path: current.path().clone(),
							max_depth: options.max_depth,
						});
					}
				}
			}

			stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
		}

		Ok(summary)
	}
}
