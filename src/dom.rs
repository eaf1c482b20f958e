//! In-memory document tree.
//!
//! This module is the node-tree side of the crate: an arena [`Document`]
//! that owns every [`Node`] and hands out opaque [`NodeId`] handles. The
//! builder layer only ever touches the four mutation operations
//! ([`create_node`](Document::create_node), [`attach_text`](Document::attach_text),
//! [`set_attribute`](Document::set_attribute), [`append_child`](Document::append_child));
//! everything else here is read-side plumbing and serialization.
//!
//! ## Design
//!
//! - **Arena ownership**: nodes live in a flat `Vec`; handles are indices
//!   and stay valid for the lifetime of the document (nodes are never
//!   removed, only re-parented).
//! - **Move semantics on append**: appending an already-attached child
//!   detaches it from its old parent first, like DOM `appendChild`.
//! - **Serialization**: [`Document::to_html`] renders the tree to a string
//!   with escaped text and attribute values.

use crate::builder::Tag;
use thiserror::Error;

/// Opaque handle to a node owned by a [`Document`].
///
/// Handles are cheap to copy and only meaningful for the document that
/// issued them; using one against another document yields
/// [`DomError::UnknownNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

/// Errors raised by document mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
	/// The handle does not belong to this document.
	#[error("node {0:?} does not belong to this document")]
	UnknownNode(NodeId),
	/// Attaching the child would make it its own ancestor.
	#[error("attaching {child:?} under {parent:?} would create a cycle")]
	CyclicAttachment {
		/// The prospective parent.
		parent: NodeId,
		/// The child whose attachment was rejected.
		child: NodeId,
	},
	/// The document root cannot be attached to another node.
	#[error("the document root cannot be re-attached")]
	RootAttachment,
}

/// One element in the tree.
#[derive(Debug, Clone)]
pub struct Node {
	tag: Tag,
	text: Option<String>,
	attributes: Vec<(String, String)>,
	children: Vec<NodeId>,
	parent: Option<NodeId>,
}

impl Node {
	fn new(tag: Tag) -> Self {
		Self {
			tag,
			text: None,
			attributes: Vec::new(),
			children: Vec::new(),
			parent: None,
		}
	}

	/// The element's tag.
	pub fn tag(&self) -> Tag {
		self.tag
	}

	/// The text payload, if one was attached.
	pub fn text(&self) -> Option<&str> {
		self.text.as_deref()
	}

	/// Looks up a single attribute value by name.
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_str())
	}

	/// All attributes in write order.
	pub fn attributes(&self) -> &[(String, String)] {
		&self.attributes
	}

	/// Child handles in insertion order.
	pub fn children(&self) -> &[NodeId] {
		&self.children
	}

	/// The parent handle, if this node is attached.
	pub fn parent(&self) -> Option<NodeId> {
		self.parent
	}
}

/// An element tree with a fixed root.
///
/// ## Example
///
/// ```
/// use grappelli::{Document, Tag};
///
/// let mut doc = Document::new();
/// let root = doc.root();
/// let title = doc.create_node(Tag::H1);
/// doc.attach_text(title, "Hello")?;
/// doc.append_child(root, title)?;
/// assert_eq!(doc.to_html(), "<body><h1>Hello</h1></body>");
/// # Ok::<(), grappelli::DomError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Document {
	nodes: Vec<Node>,
	root: NodeId,
}

impl Document {
	/// Creates a document rooted at a `<body>` element.
	pub fn new() -> Self {
		Self::with_root(Tag::Body)
	}

	/// Creates a document rooted at an element of the given tag.
	pub fn with_root(tag: Tag) -> Self {
		Self {
			nodes: vec![Node::new(tag)],
			root: NodeId(0),
		}
	}

	/// The root handle.
	pub fn root(&self) -> NodeId {
		self.root
	}

	/// Whether the handle belongs to this document.
	pub fn contains(&self, id: NodeId) -> bool {
		id.0 < self.nodes.len()
	}

	/// Number of nodes in the document, root included.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Borrows a node by handle.
	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.nodes.get(id.0)
	}

	/// Child handles of a node, empty for unknown handles.
	pub fn children(&self, id: NodeId) -> &[NodeId] {
		self.node(id).map(Node::children).unwrap_or_default()
	}

	/// Parent handle of a node, `None` for detached or unknown handles.
	pub fn parent(&self, id: NodeId) -> Option<NodeId> {
		self.node(id).and_then(Node::parent)
	}

	/// Allocates a new, detached element.
	///
	/// Cannot fail: tags are registry values, so there is no malformed-tag
	/// case, and the arena grows as needed.
	pub fn create_node(&mut self, tag: Tag) -> NodeId {
		let id = NodeId(self.nodes.len());
		self.nodes.push(Node::new(tag));
		id
	}

	/// Sets the node's text payload, replacing any previous one.
	pub fn attach_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), DomError> {
		self.get_mut(id)?.text = Some(text.into());
		Ok(())
	}

	/// Writes one attribute, overwriting an existing value for the same
	/// name.
	pub fn set_attribute(
		&mut self,
		id: NodeId,
		name: impl Into<String>,
		value: impl Into<String>,
	) -> Result<(), DomError> {
		let name = name.into();
		let value = value.into();
		let node = self.get_mut(id)?;
		match node.attributes.iter_mut().find(|(n, _)| *n == name) {
			Some(slot) => slot.1 = value,
			None => node.attributes.push((name, value)),
		}
		Ok(())
	}

	/// Appends `child` as the last child of `parent`.
	///
	/// An already-attached child is detached from its old parent first.
	/// Rejects attaching the root and attachments that would make a node
	/// its own ancestor.
	pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
		self.get(parent)?;
		self.get(child)?;
		if child == self.root {
			return Err(DomError::RootAttachment);
		}
		let mut cursor = Some(parent);
		while let Some(id) = cursor {
			if id == child {
				return Err(DomError::CyclicAttachment { parent, child });
			}
			cursor = self.nodes[id.0].parent;
		}
		if let Some(old) = self.nodes[child.0].parent {
			self.nodes[old.0].children.retain(|&c| c != child);
		}
		self.nodes[child.0].parent = Some(parent);
		self.nodes[parent.0].children.push(child);
		Ok(())
	}

	/// Serializes the tree from the root.
	///
	/// Text payload renders before child elements; void tags render
	/// without children or a closing tag.
	pub fn to_html(&self) -> String {
		let mut out = String::new();
		self.render_into(self.root, &mut out);
		out
	}

	fn render_into(&self, id: NodeId, out: &mut String) {
		let node = &self.nodes[id.0];
		let tag = node.tag.as_str();
		out.push('<');
		out.push_str(tag);
		for (name, value) in &node.attributes {
			out.push(' ');
			out.push_str(name);
			out.push_str("=\"");
			out.push_str(&html_escape(value));
			out.push('"');
		}
		out.push('>');
		if node.tag.is_void() {
			return;
		}
		if let Some(text) = &node.text {
			out.push_str(&html_escape(text));
		}
		for &child in &node.children {
			self.render_into(child, out);
		}
		out.push_str("</");
		out.push_str(tag);
		out.push('>');
	}

	fn get(&self, id: NodeId) -> Result<&Node, DomError> {
		self.nodes.get(id.0).ok_or(DomError::UnknownNode(id))
	}

	fn get_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
		self.nodes.get_mut(id.0).ok_or(DomError::UnknownNode(id))
	}
}

impl Default for Document {
	fn default() -> Self {
		Self::new()
	}
}

/// Simple HTML escape function.
fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}
