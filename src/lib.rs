//! Grappelli - Declarative HTML element tree builder
//!
//! Builds nested element hierarchies through ordinary method calls instead
//! of string templates. The core mechanism is an open-container context
//! stack: opening a container makes it the implicit parent for subsequent
//! elements until it is explicitly closed, so a flat call sequence
//! produces arbitrary nesting depth without threading parent handles
//! through every call.
//!
//! ## Features
//!
//! - **Context-tracked construction**: [`PageBuilder::open`] /
//!   [`PageBuilder::close`] manage the implicit current parent
//! - **Explicit descriptors**: [`ElementConfig`] names every option of a
//!   construction call; no open-ended option bags
//! - **Tag registry**: a [`Tag`] enum plus one parameterized constructor
//!   instead of a function per tag
//! - **Table expansion**: `table_head` / `table_body` / `table_foot`
//!   expand value matrices into row and cell elements
//! - **Owned document**: the builder writes into an in-memory
//!   [`Document`] arena that serializes to HTML
//!
//! ## Architecture
//!
//! - [`builder`]: context stack, element descriptors, the builder itself
//! - [`dom`]: the document arena the builder constructs into
//! - [`tables`]: structured table-section helpers
//!
//! ## Example
//!
//! ```
//! use grappelli::{Document, ElementConfig, PageBuilder, Tag};
//!
//! let mut page = PageBuilder::new(Document::new());
//! page.open(Tag::Div, ElementConfig::new().attr("class", "report"))?;
//! page.leaf(Tag::H1, ElementConfig::new().text("Monthly totals"))?;
//! page.open(Tag::Table, ElementConfig::new())?;
//! page.table_head([["Item", "Count"]], ElementConfig::new())?;
//! page.table_body([["bolts", "12"], ["washers", "40"]], ElementConfig::new())?;
//! page.close(); // </table>
//! page.close(); // </div>
//!
//! let html = page.into_document().to_html();
//! assert!(html.contains("<thead><tr><th>Item</th><th>Count</th></tr></thead>"));
//! # Ok::<(), grappelli::DomError>(())
//! ```
//!
//! Every call performs an immediate mutation of the document; there is no
//! virtual tree, no diffing, and no undo.

#![warn(missing_docs)]

pub mod builder;
pub mod dom;
pub mod prelude;
pub mod tables;

pub use builder::{AttributeSet, ContextStack, ElementConfig, PageBuilder, Tag};
pub use dom::{Document, DomError, Node, NodeId};
