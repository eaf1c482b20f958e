//! Tag registry for supported HTML elements.
//!
//! Instead of one constructor function per tag, the builder takes a [`Tag`]
//! value and a single parameterized construction path. The registry records
//! two pieces of metadata per tag:
//!
//! - **container**: opening one of these normally changes the current-parent
//!   context until it is explicitly closed
//! - **void**: the element cannot hold children and renders without a
//!   closing tag

/// Defines the [`Tag`] enum together with its name table and category
/// metadata in one place.
macro_rules! define_tags {
	(@container container) => { true };
	(@container content) => { false };
	(@container void) => { false };
	(@void void) => { true };
	(@void container) => { false };
	(@void content) => { false };
	( $( $(#[$meta:meta])* $variant:ident => $name:literal, $kind:ident; )* ) => {
		/// A supported element tag.
		///
		/// The set mirrors the tags the builder can construct; anything not
		/// listed here is unrepresentable, so there is no "malformed tag"
		/// failure path anywhere in the crate.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
		pub enum Tag {
			$(
				$(#[$meta])*
				#[doc = concat!("The `<", $name, ">` element.")]
				$variant,
			)*
		}

		impl Tag {
			/// Every supported tag, in declaration order.
			pub const ALL: &'static [Tag] = &[ $( Tag::$variant, )* ];

			/// The tag name as it appears in markup.
			pub const fn as_str(self) -> &'static str {
				match self {
					$( Tag::$variant => $name, )*
				}
			}

			/// Whether this tag is a container element.
			///
			/// Containers are the tags that, when opened through
			/// [`PageBuilder::node`](crate::PageBuilder::node), push
			/// themselves onto the context stack.
			pub const fn is_container(self) -> bool {
				match self {
					$( Tag::$variant => define_tags!(@container $kind), )*
				}
			}

			/// Whether this tag is a void element (no children, no closing
			/// tag when serialized).
			pub const fn is_void(self) -> bool {
				match self {
					$( Tag::$variant => define_tags!(@void $kind), )*
				}
			}
		}
	};
}

define_tags! {
	// Document / sectioning containers
	Body => "body", container;
	Div => "div", container;
	Span => "span", container;
	Section => "section", container;
	Article => "article", container;
	Aside => "aside", container;
	Header => "header", container;
	Footer => "footer", container;
	Main => "main", container;
	Nav => "nav", container;
	Form => "form", container;
	Fieldset => "fieldset", container;
	Blockquote => "blockquote", container;
	Figure => "figure", container;
	Details => "details", container;
	Select => "select", container;

	// List containers
	Ul => "ul", container;
	Ol => "ol", container;
	Dl => "dl", container;

	// Table containers
	Table => "table", container;
	Thead => "thead", container;
	Tbody => "tbody", container;
	Tfoot => "tfoot", container;
	Tr => "tr", container;

	// Headings and text content
	H1 => "h1", content;
	H2 => "h2", content;
	H3 => "h3", content;
	H4 => "h4", content;
	H5 => "h5", content;
	H6 => "h6", content;
	P => "p", content;
	A => "a", content;
	Em => "em", content;
	Strong => "strong", content;
	Code => "code", content;
	Pre => "pre", content;
	Small => "small", content;
	Time => "time", content;

	// List / description content
	Li => "li", content;
	Dt => "dt", content;
	Dd => "dd", content;
	Figcaption => "figcaption", content;
	Summary => "summary", content;

	// Table cells and captions
	Th => "th", content;
	Td => "td", content;
	Caption => "caption", content;

	// Form content
	Button => "button", content;
	Label => "label", content;
	Legend => "legend", content;
	Option => "option", content;
	Textarea => "textarea", content;

	// Void elements
	Input => "input", void;
	Img => "img", void;
	Br => "br", void;
	Hr => "hr", void;
}

impl std::fmt::Display for Tag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tag_names_match_markup() {
		assert_eq!(Tag::Div.as_str(), "div");
		assert_eq!(Tag::Thead.as_str(), "thead");
		assert_eq!(Tag::H3.as_str(), "h3");
		assert_eq!(Tag::Figcaption.as_str(), "figcaption");
	}

	#[test]
	fn test_container_classification() {
		assert!(Tag::Div.is_container());
		assert!(Tag::Tr.is_container());
		assert!(!Tag::P.is_container());
		assert!(!Tag::Td.is_container());
		assert!(!Tag::Input.is_container());
	}

	#[test]
	fn test_void_classification() {
		assert!(Tag::Br.is_void());
		assert!(Tag::Input.is_void());
		assert!(!Tag::Div.is_void());
		assert!(!Tag::Textarea.is_void());
	}

	#[test]
	fn test_registry_is_complete_and_unique() {
		let mut names: Vec<&str> = Tag::ALL.iter().map(|t| t.as_str()).collect();
		let total = names.len();
		names.sort_unstable();
		names.dedup();
		assert_eq!(names.len(), total, "duplicate tag name in registry");
	}

	#[test]
	fn test_display_uses_markup_name() {
		assert_eq!(Tag::Section.to_string(), "section");
	}
}
