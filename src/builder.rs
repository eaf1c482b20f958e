//! Element builder API.
//!
//! This module provides the declarative construction surface: a flat
//! sequence of calls produces arbitrary nesting depth without the caller
//! passing parent handles around.
//!
//! ## Features
//!
//! - **Context tracking**: [`ContextStack`] records the open containers;
//!   new elements default into the innermost one
//! - **Explicit descriptors**: [`ElementConfig`] enumerates every option
//!   of a construction call as a named field
//! - **Tag registry**: [`Tag`] replaces per-tag constructor functions with
//!   one parameterized path
//!
//! ## Example
//!
//! ```
//! use grappelli::{Document, ElementConfig, PageBuilder, Tag};
//!
//! let mut page = PageBuilder::new(Document::new());
//! page.open(Tag::Section, ElementConfig::new())?;
//! page.leaf(Tag::H1, ElementConfig::new().text("Inventory"))?;
//! page.open(Tag::Ul, ElementConfig::new())?;
//! page.leaf(Tag::Li, ElementConfig::new().text("bolts"))?;
//! page.leaf(Tag::Li, ElementConfig::new().text("washers"))?;
//! page.close(); // </ul>
//! page.close(); // </section>
//! # Ok::<(), grappelli::DomError>(())
//! ```

pub mod context;
pub mod element;
pub mod tags;

// Re-exports for convenience
pub use context::ContextStack;
pub use element::{AttributeSet, ElementConfig, PageBuilder};
pub use tags::Tag;
