//! # htmlnode
//!
//! A small object model for HTML markup: build a tree of nodes, then render
//! it to a string.
//!
//! ## Design
//!
//! - [`LeafNode`] carries a text value and no children. Without a tag it
//!   renders as plain text.
//! - [`ParentNode`] carries a tag and child [`Node`]s and no value of its own.
//! - [`Node`] is the union of the two, so a parent can hold either kind.
//! - [`HtmlNode`] is the plain record all variants convert into.
//!
//! Validation happens at render time, not at construction: a leaf without a
//! value, or a parent without a tag or children, fails with
//! [`HtmlError::InvalidValue`].
//!
//! Attribute values and text are written as given. Nothing is escaped, so
//! callers must not feed untrusted input through this crate.
//!
//! ## Example
//!
//! ```rust
//! use htmlnode::{LeafNode, ParentNode, Props};
//!
//! let node = ParentNode::element(
//!     "p",
//!     vec![
//!         LeafNode::element("b", "Bold text").into(),
//!         LeafNode::text("Normal text").into(),
//!         LeafNode::element("a", "link")
//!             .with_props(Props::from([("href", "https://example.com")]))
//!             .into(),
//!     ],
//! );
//!
//! assert_eq!(
//!     node.to_html().unwrap(),
//!     r#"<p><b>Bold text</b>Normal text<a href="https://example.com">link</a></p>"#
//! );
//! ```

pub mod node;
pub mod props;
mod render;

pub use node::{HtmlNode, LeafNode, Node, ParentNode};
pub use props::{AttrValue, Props};
pub use render::render;

/// Error type for rendering operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, HtmlError>;
