//! Current-container context tracking.

use crate::dom::NodeId;

/// Stack of currently open container handles.
///
/// The stack is seeded with a root handle at construction and is never
/// empty afterwards: [`pop`](ContextStack::pop) refuses to remove the last
/// element, so [`current`](ContextStack::current) is total. Each builder
/// instance owns exactly one of these; there is no shared or global
/// context.
#[derive(Debug, Clone)]
pub struct ContextStack {
	stack: Vec<NodeId>,
}

impl ContextStack {
	/// Creates a stack holding only the root handle.
	pub fn new(root: NodeId) -> Self {
		Self { stack: vec![root] }
	}

	/// Pushes a newly opened container as the new top.
	pub fn push(&mut self, handle: NodeId) {
		self.stack.push(handle);
	}

	/// Removes the top container and returns the new top.
	///
	/// When only the root is left the call is absorbed: the root can never
	/// be popped, so an unmatched close degrades to a no-op instead of
	/// leaving the builder without a default parent.
	pub fn pop(&mut self) -> NodeId {
		if self.stack.len() > 1 {
			self.stack.pop();
		} else {
			tracing::debug!("close without matching open; keeping root context");
		}
		self.current()
	}

	/// The innermost currently open container.
	pub fn current(&self) -> NodeId {
		*self.stack.last().expect("context stack is never empty")
	}

	/// Number of open containers, root included. Always at least 1.
	pub fn depth(&self) -> usize {
		self.stack.len()
	}
}
