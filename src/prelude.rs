//! Convenience re-exports for the common construction workflow.
//!
//! ```
//! use grappelli::prelude::*;
//!
//! let mut page = PageBuilder::new(Document::new());
//! page.leaf(Tag::P, ElementConfig::new().text("hello"))?;
//! # Ok::<(), grappelli::DomError>(())
//! ```

pub use crate::builder::{AttributeSet, ElementConfig, PageBuilder, Tag};
pub use crate::dom::{Document, DomError, NodeId};
