//! Build node subtrees from classified blocks.

use marktree_core::{Leaf, Node, Parent};

use crate::block::{block_lines, heading_level, BlockType};
use crate::inline::{text_to_spans, SpanKind, TextSpan};
use crate::service::QuoteCheck;
use crate::Result;

/// Map a span to its leaf node
pub fn span_to_node(span: &TextSpan) -> Node {
    let url = span.url.as_deref().unwrap_or_default();
    let leaf = match span.kind {
        SpanKind::Plain => Leaf::text(&span.content),
        SpanKind::Bold => Leaf::new("b", &span.content),
        SpanKind::Italic => Leaf::new("i", &span.content),
        SpanKind::Code => Leaf::new("code", &span.content),
        SpanKind::Link => Leaf::new("a", &span.content).with_attr("href", url),
        SpanKind::Image => Leaf::new("img", "")
            .with_attr("src", url)
            .with_attr("alt", &span.content),
    };
    Node::Leaf(leaf)
}

/// Tokenize a text run and map every span to a node
pub fn text_to_children(text: &str) -> Result<Vec<Node>> {
    Ok(text_to_spans(text)?.iter().map(span_to_node).collect())
}

/// Build the subtree for one block
pub fn block_to_node(block: &str, block_type: BlockType, quote_check: QuoteCheck) -> Result<Node> {
    let node = match block_type {
        BlockType::Heading => {
            let level = heading_level(block);
            let tag = format!("h{level}");
            Parent::new(&tag, text_to_children(strip(block, level + 1, 0))?)
        }
        BlockType::Code => {
            let code = Parent::new("code", text_to_children(strip(block, 3, 3))?);
            Parent::new("pre", vec![code.into()])
        }
        BlockType::Quote => {
            let text = quote_text(block, quote_check);
            Parent::new("blockquote", text_to_children(&text)?)
        }
        BlockType::UnorderedList => Parent::new("ul", list_items(block, |_| 2)?),
        BlockType::OrderedList => {
            Parent::new("ol", list_items(block, |i| format!("{}. ", i + 1).len())?)
        }
        BlockType::Paragraph => Parent::new("p", text_to_children(block)?),
    };
    Ok(node.into())
}

fn quote_text(block: &str, quote_check: QuoteCheck) -> String {
    match quote_check {
        QuoteCheck::FirstLine => strip(block, 2, 0).to_string(),
        QuoteCheck::EveryLine => block_lines(block)
            .map(|line| strip(line, 2, 0))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// One `li` per non-blank line, with the first `marker_len(index)` bytes stripped
fn list_items(block: &str, marker_len: impl Fn(usize) -> usize) -> Result<Vec<Node>> {
    block_lines(block)
        .enumerate()
        .map(|(i, line)| {
            let children = text_to_children(strip(line, marker_len(i), 0))?;
            Ok(Node::from(Parent::new("li", children)))
        })
        .collect()
}

/// `text` without its first `prefix` and last `suffix` bytes
fn strip(text: &str, prefix: usize, suffix: usize) -> &str {
    text.get(prefix..text.len().saturating_sub(suffix))
        .unwrap_or_default()
}
