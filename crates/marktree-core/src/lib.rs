//! marktree-core - HTML node tree and rendering
//!
//! This crate provides the node tree produced by the `marktree` converter and
//! the rules for turning it into an HTML string.
//!
//! # Architecture
//!
//! ```text
//!                  ┌───────────┐
//! Markdown ──────▶ │ Node tree │ ──render──▶ HTML String
//!                  └───────────┘
//! ```
//!
//! A tree is built from two kinds of node: a [`Leaf`] carries literal text
//! and no children, a [`Parent`] carries children and no text of its own.
//!
//! # Example
//!
//! ```rust
//! use marktree_core::{Leaf, Node, Parent};
//!
//! let tree = Node::from(Parent::new(
//!     "p",
//!     vec![
//!         Leaf::text("This is ").into(),
//!         Leaf::new("b", "bold").into(),
//!         Leaf::text(" text.").into(),
//!     ],
//! ));
//!
//! assert_eq!(tree.render().unwrap(), "<p>This is <b>bold</b> text.</p>");
//! ```

mod node;
mod render;

pub use node::{Attributes, Leaf, Node, Parent};
pub use render::{attributes_to_html, is_void, render, VOID_ELEMENTS};

/// Error type for rendering a node tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf node <{}> requires a non-empty value", .tag.as_deref().unwrap_or("text"))]
    EmptyValue { tag: Option<String> },

    #[error("parent node requires a tag")]
    MissingTag,

    #[error("parent node <{tag}> requires at least one child")]
    MissingChildren { tag: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;
