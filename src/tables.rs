//! Structured table-section helpers.
//!
//! The three helpers expand a matrix of cell values into a table section:
//! one row container per input row, one cell element per value. All three
//! share the same shape; only the section tag and the cell tag differ.
//!
//! The section element itself is created through the generic path as a
//! non-container. Rows attach to it by explicit parent handle, so the
//! expansion nests correctly inside this specific section regardless of
//! what else is currently open, and the context stack is exactly as deep
//! after the call as before it.
//!
//! ## Example
//!
//! ```
//! use grappelli::{Document, ElementConfig, PageBuilder, Tag};
//!
//! let mut page = PageBuilder::new(Document::new());
//! page.open(Tag::Table, ElementConfig::new())?;
//! page.table_head([["Name", "Qty"]], ElementConfig::new())?;
//! page.table_body([vec!["bolt", "12"], vec!["washer", "40"]], ElementConfig::new())?;
//! page.close();
//! # Ok::<(), grappelli::DomError>(())
//! ```

use crate::builder::{ElementConfig, PageBuilder, Tag};
use crate::dom::{DomError, NodeId};
use std::borrow::Cow;

impl PageBuilder {
	/// Creates a `<thead>` section with one `<tr>` per heading row and one
	/// `<th>` per value.
	///
	/// An empty matrix produces just the empty section element. Row
	/// lengths need not be uniform.
	pub fn table_head<R, C, V>(&mut self, headings: R, config: ElementConfig) -> Result<NodeId, DomError>
	where
		R: IntoIterator<Item = C>,
		C: IntoIterator<Item = V>,
		V: Into<Cow<'static, str>>,
	{
		self.table_section(Tag::Thead, Tag::Th, headings, config)
	}

	/// Creates a `<tbody>` section with one `<tr>` per data row and one
	/// `<td>` per value.
	pub fn table_body<R, C, V>(&mut self, data: R, config: ElementConfig) -> Result<NodeId, DomError>
	where
		R: IntoIterator<Item = C>,
		C: IntoIterator<Item = V>,
		V: Into<Cow<'static, str>>,
	{
		self.table_section(Tag::Tbody, Tag::Td, data, config)
	}

	/// Creates a `<tfoot>` section with one `<tr>` per footer row and one
	/// `<td>` per value.
	pub fn table_foot<R, C, V>(&mut self, footer: R, config: ElementConfig) -> Result<NodeId, DomError>
	where
		R: IntoIterator<Item = C>,
		C: IntoIterator<Item = V>,
		V: Into<Cow<'static, str>>,
	{
		self.table_section(Tag::Tfoot, Tag::Td, footer, config)
	}

	fn table_section<R, C, V>(
		&mut self,
		section: Tag,
		cell: Tag,
		rows: R,
		config: ElementConfig,
	) -> Result<NodeId, DomError>
	where
		R: IntoIterator<Item = C>,
		C: IntoIterator<Item = V>,
		V: Into<Cow<'static, str>>,
	{
		// The section is attached but deliberately not pushed: the row
		// loop manages its own nesting against the section handle.
		let section_id = self.leaf(section, config)?;
		for row in rows {
			self.open(Tag::Tr, ElementConfig::new().parent(section_id))?;
			for value in row {
				self.leaf(cell, ElementConfig::new().text(value))?;
			}
			self.close();
		}
		Ok(section_id)
	}
}
