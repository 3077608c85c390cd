//! # marktree
//!
//! Convert a small Markdown dialect into an HTML node tree.
//!
//! ## Dialect
//!
//! Blocks are separated by blank lines and are one of: headings (`#` to
//! `######`), fenced code (```` ```code``` ````), quotes (`> `), unordered lists
//! (`* ` or `- `), ordered lists (`1. `, `2. `, ...) and paragraphs. Inside a
//! block, `**bold**`, `*italic*`, `` `code` ``, `![alt](src)` and
//! `[label](href)` are recognised. Formatting does not nest, and neither do
//! blocks.
//!
//! ## Example
//!
//! ```rust
//! let tree = marktree::convert("# A *fancy* heading.").unwrap();
//! let html = marktree::render(&tree).unwrap();
//! assert_eq!(html, "<div><h1>A <i>fancy</i> heading.</h1></div>");
//! ```
//!
//! ## Example (service)
//!
//! ```rust
//! use marktree::{MarkdownOptions, MarkdownService};
//!
//! let options = MarkdownOptions {
//!     root_tag: "article".to_string(),
//!     ..Default::default()
//! };
//! let service = MarkdownService::with_options(options);
//! let html = service.convert_to_html("Hello **World**").unwrap();
//! assert_eq!(html, "<article><p>Hello <b>World</b></p></article>");
//! ```

pub mod assemble;
pub mod block;
pub mod inline;
mod service;

pub use assemble::{block_to_node, span_to_node};
pub use block::{classify, classify_with, segment_blocks, BlockType};
pub use inline::{extract_images, extract_links, text_to_spans, SpanKind, TextSpan};
pub use marktree_core::{Attributes, Leaf, Node, Parent, RenderError};
pub use service::{MarkdownOptions, MarkdownService, QuoteCheck};

/// Error type for marktree operations
#[derive(Debug, thiserror::Error)]
pub enum MarkdownError {
    #[error("formatted section not closed: unmatched `{delimiter}` in {text:?}")]
    MalformedInline { delimiter: String, text: String },

    #[error("unknown span kind: {0}")]
    UnknownSpanKind(String),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, MarkdownError>;

/// Convert a Markdown document into a tree rooted at a `div`
pub fn convert(markdown: &str) -> Result<Node> {
    MarkdownService::new().convert(markdown)
}

/// Render a node tree to HTML
pub fn render(node: &Node) -> Result<String> {
    Ok(marktree_core::render(node)?)
}
