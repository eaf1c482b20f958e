//! Element descriptors and the page builder.
//!
//! [`PageBuilder`] is the single construction path for the whole crate:
//! every element, whether created directly or through the table helpers,
//! goes through [`PageBuilder::element`]. The builder owns its
//! [`Document`] and its [`ContextStack`], so the borrow checker enforces
//! the one-call-chain-at-a-time contract: there is no way to interleave
//! two logical construction sequences against the same builder.

use super::context::ContextStack;
use super::tags::Tag;
use crate::dom::{Document, DomError, NodeId};
use std::borrow::Cow;

/// One ordered attribute dictionary.
///
/// Entries keep insertion order; setting a name that is already present
/// replaces its value in place, like a map literal. A sequence of sets is
/// merged by [`ElementConfig`] with last-write-wins across the whole
/// sequence.
///
/// ## Example
///
/// ```
/// use grappelli::AttributeSet;
///
/// let attrs = AttributeSet::new()
///     .class("card highlighted")
///     .id("summary")
///     .set("data-kind", "report");
/// assert_eq!(attrs.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeSet {
	entries: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl AttributeSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets one attribute, replacing the value if the name is already
	/// present in this set.
	pub fn set(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		let name = name.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(n, _)| *n == name) {
			Some(slot) => slot.1 = value,
			None => self.entries.push((name, value)),
		}
		self
	}

	/// Sets the `class` attribute.
	pub fn class(self, value: impl Into<Cow<'static, str>>) -> Self {
		self.set("class", value)
	}

	/// Sets the `id` attribute.
	pub fn id(self, value: impl Into<Cow<'static, str>>) -> Self {
		self.set("id", value)
	}

	/// Sets the `style` attribute.
	pub fn style(self, value: impl Into<Cow<'static, str>>) -> Self {
		self.set("style", value)
	}

	/// Name/value pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(n, v)| (n.as_ref(), v.as_ref()))
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the set has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Descriptor for one element construction call.
///
/// Every option is an explicit field; there is no open-ended property
/// merging. The defaults are "attach to the current context, not a
/// container": exactly what a plain content element wants.
///
/// ## Example
///
/// ```
/// use grappelli::{AttributeSet, ElementConfig};
///
/// let config = ElementConfig::new()
///     .text("Save")
///     .attrs(AttributeSet::new().class("btn"))
///     .attr("type", "submit");
/// ```
#[derive(Debug, Clone)]
pub struct ElementConfig {
	pub(super) text: Option<Cow<'static, str>>,
	pub(super) parent: Option<NodeId>,
	pub(super) attributes: Vec<AttributeSet>,
	pub(super) attach_to_parent: bool,
	pub(super) is_container: bool,
}

impl Default for ElementConfig {
	fn default() -> Self {
		Self {
			text: None,
			parent: None,
			attributes: Vec::new(),
			attach_to_parent: true,
			is_container: false,
		}
	}
}

impl ElementConfig {
	/// Creates the default descriptor.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the text payload.
	///
	/// Presence is what matters, not truthiness: an empty string is a
	/// present payload and will be attached.
	pub fn text(mut self, text: impl Into<Cow<'static, str>>) -> Self {
		self.text = Some(text.into());
		self
	}

	/// Attaches the element under an explicit parent instead of the
	/// context stack's current top.
	pub fn parent(mut self, parent: NodeId) -> Self {
		self.parent = Some(parent);
		self
	}

	/// Appends one attribute dictionary to the sequence.
	pub fn attrs(mut self, set: AttributeSet) -> Self {
		self.attributes.push(set);
		self
	}

	/// Appends a single-entry attribute dictionary.
	///
	/// Later entries win on name collision, so `.attr("class", "b")`
	/// after `.attr("class", "a")` leaves `class="b"`.
	pub fn attr(
		self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		let set = AttributeSet::new().set(name, value);
		self.attrs(set)
	}

	/// Creates the element without attaching it to any parent.
	pub fn detached(mut self) -> Self {
		self.attach_to_parent = false;
		self
	}

	/// Marks the element as a container (it will be pushed onto the
	/// context stack after attachment).
	pub fn container(mut self, is_container: bool) -> Self {
		self.is_container = is_container;
		self
	}

	/// Flattens the attribute-set sequence into one write list.
	///
	/// Last-write-wins on name collision; win order is insertion order
	/// across the whole sequence, not just within one set.
	fn merged_attributes(&self) -> Vec<(&str, &str)> {
		let mut merged: Vec<(&str, &str)> = Vec::new();
		for set in &self.attributes {
			for (name, value) in set.iter() {
				match merged.iter_mut().find(|(n, _)| *n == name) {
					Some(slot) => slot.1 = value,
					None => merged.push((name, value)),
				}
			}
		}
		merged
	}
}

/// Declarative element-tree builder.
///
/// The builder owns a [`Document`] and tracks the innermost open container
/// so callers do not thread parent handles through every call: content
/// elements land in the current container, [`open`](PageBuilder::open)
/// descends one level, [`close`](PageBuilder::close) ascends one level.
///
/// ## Example
///
/// ```
/// use grappelli::{Document, ElementConfig, PageBuilder, Tag};
///
/// let mut page = PageBuilder::new(Document::new());
/// page.open(Tag::Div, ElementConfig::new().attr("class", "card"))?;
/// page.leaf(Tag::H2, ElementConfig::new().text("Report"))?;
/// page.leaf(Tag::P, ElementConfig::new().text("All good."))?;
/// page.close();
///
/// assert_eq!(
///     page.into_document().to_html(),
///     "<body><div class=\"card\"><h2>Report</h2><p>All good.</p></div></body>"
/// );
/// # Ok::<(), grappelli::DomError>(())
/// ```
#[derive(Debug)]
pub struct PageBuilder {
	document: Document,
	context: ContextStack,
}

impl PageBuilder {
	/// Creates a builder whose context is seeded with the document root.
	pub fn new(document: Document) -> Self {
		let root = document.root();
		Self {
			document,
			context: ContextStack::new(root),
		}
	}

	/// Creates a builder seeded with an explicit root container.
	///
	/// Useful for building a subtree into the middle of an existing
	/// document.
	pub fn with_root(document: Document, root: NodeId) -> Result<Self, DomError> {
		if !document.contains(root) {
			return Err(DomError::UnknownNode(root));
		}
		Ok(Self {
			document,
			context: ContextStack::new(root),
		})
	}

	/// Constructs one element from its descriptor.
	///
	/// This is the choke point every other operation funnels through:
	/// create the node, attach the text payload if present, write the
	/// merged attributes, append under the explicit parent or the current
	/// context top (unless detached), and push onto the context stack when
	/// the descriptor marks a container. A container is attached to its
	/// parent before it starts accepting children.
	pub fn element(&mut self, tag: Tag, config: ElementConfig) -> Result<NodeId, DomError> {
		let node = self.document.create_node(tag);
		if let Some(text) = &config.text {
			self.document.attach_text(node, text.as_ref())?;
		}
		for (name, value) in config.merged_attributes() {
			self.document.set_attribute(node, name, value)?;
		}
		if config.attach_to_parent {
			let target = config.parent.unwrap_or_else(|| self.context.current());
			self.document.append_child(target, node)?;
		}
		if config.is_container {
			self.context.push(node);
		}
		tracing::trace!(tag = tag.as_str(), node = ?node, "created element");
		Ok(node)
	}

	/// Creates a content element: never pushed onto the context stack,
	/// whatever the descriptor says.
	pub fn leaf(&mut self, tag: Tag, config: ElementConfig) -> Result<NodeId, DomError> {
		self.element(tag, config.container(false))
	}

	/// Opens a container element: pushed onto the context stack, text
	/// payload ignored (containers take children, not text).
	pub fn open(&mut self, tag: Tag, mut config: ElementConfig) -> Result<NodeId, DomError> {
		config.text = None;
		self.element(tag, config.container(true))
	}

	/// Creates an element whose container behavior comes from the tag
	/// registry: container tags open, content tags stay leaves.
	pub fn node(&mut self, tag: Tag, config: ElementConfig) -> Result<NodeId, DomError> {
		self.element(tag, config.container(tag.is_container()))
	}

	/// Closes the innermost open container and returns the new current
	/// container.
	///
	/// Closing past the root is absorbed silently; the root stays current.
	pub fn close(&mut self) -> NodeId {
		self.context.pop()
	}

	/// The container new elements currently default into.
	pub fn current(&self) -> NodeId {
		self.context.current()
	}

	/// Number of open containers, root included.
	pub fn depth(&self) -> usize {
		self.context.depth()
	}

	/// Read access to the document being built.
	pub fn document(&self) -> &Document {
		&self.document
	}

	/// Finishes building and hands the document back.
	pub fn into_document(self) -> Document {
		self.document
	}
}
