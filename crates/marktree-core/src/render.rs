//! Node tree rendering
//!
//! Converts a node tree into an HTML string. Text and attribute values are
//! emitted as-is; nothing is escaped.

use crate::node::{Attributes, Leaf, Node, Parent};
use crate::{RenderError, Result};

/// Void (self-closing) HTML elements
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Render a node tree to an HTML string
pub fn render(node: &Node) -> Result<String> {
    let mut output = String::with_capacity(256);
    render_node(node, &mut output)?;
    Ok(output)
}

/// Serialize attributes as ` name="value"` pairs in insertion order
pub fn attributes_to_html(attributes: &Attributes) -> String {
    let mut out = String::new();
    push_attributes(attributes, &mut out);
    out
}

fn render_node(node: &Node, out: &mut String) -> Result<()> {
    match node {
        Node::Leaf(leaf) => render_leaf(leaf, out),
        Node::Parent(parent) => render_parent(parent, out),
    }
}

fn render_leaf(leaf: &Leaf, out: &mut String) -> Result<()> {
    match leaf.tag.as_deref() {
        Some(tag) if is_void(tag) => {
            out.push('<');
            out.push_str(tag);
            push_attributes(&leaf.attributes, out);
            out.push('>');
        }
        _ if leaf.value.is_empty() => {
            return Err(RenderError::EmptyValue {
                tag: leaf.tag.clone(),
            });
        }
        None => out.push_str(&leaf.value),
        Some(tag) => {
            push_open_tag(tag, &leaf.attributes, out);
            out.push_str(&leaf.value);
            push_close_tag(tag, out);
        }
    }
    Ok(())
}

fn render_parent(parent: &Parent, out: &mut String) -> Result<()> {
    let tag = parent.tag.as_deref().ok_or(RenderError::MissingTag)?;
    if parent.children.is_empty() {
        return Err(RenderError::MissingChildren {
            tag: tag.to_string(),
        });
    }

    push_open_tag(tag, &parent.attributes, out);
    for child in &parent.children {
        render_node(child, out)?;
    }
    push_close_tag(tag, out);
    Ok(())
}

fn push_open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    push_attributes(attributes, out);
    out.push('>');
}

fn push_close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_attributes(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
