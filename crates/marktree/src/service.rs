//! MarkdownService - the main entry point for Markdown to HTML conversion.

use marktree_core::{Node, Parent};

use crate::assemble::block_to_node;
use crate::block::{classify_with, segment_blocks};
use crate::Result;

/// How strictly a block is checked before it is treated as a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteCheck {
    /// Only the start of the block must read `> text`; later lines are kept verbatim
    #[default]
    FirstLine,
    /// Every line must read `> text`; each marker is stripped
    EveryLine,
}

/// Options for MarkdownService
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Tag of the element wrapping the whole document
    pub root_tag: String,

    /// Quote block check
    pub quote_check: QuoteCheck,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            root_tag: "div".to_string(),
            quote_check: QuoteCheck::FirstLine,
        }
    }
}

/// The main service for converting Markdown to a node tree
#[derive(Debug, Clone, Default)]
pub struct MarkdownService {
    options: MarkdownOptions,
}

impl MarkdownService {
    /// Create a new MarkdownService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MarkdownService with custom options
    pub fn with_options(options: MarkdownOptions) -> Self {
        Self { options }
    }

    /// Convert Markdown to a tree rooted at a single parent node
    pub fn convert(&self, markdown: &str) -> Result<Node> {
        let blocks = segment_blocks(markdown);
        tracing::debug!(blocks = blocks.len(), "converting markdown");

        let mut children = Vec::with_capacity(blocks.len());
        for block in blocks {
            let block_type = classify_with(block, self.options.quote_check);
            tracing::debug!(%block_type, "classified block");
            children.push(block_to_node(block, block_type, self.options.quote_check)?);
        }

        Ok(Parent::new(&self.options.root_tag, children).into())
    }

    /// Convert Markdown straight to an HTML string
    pub fn convert_to_html(&self, markdown: &str) -> Result<String> {
        Ok(self.convert(markdown)?.render()?)
    }

    /// Get the current options
    pub fn options(&self) -> &MarkdownOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut MarkdownOptions {
        &mut self.options
    }
}
