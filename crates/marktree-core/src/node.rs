//! HTML node tree
//!
//! Nodes are built bottom-up and never mutated afterwards: a [`Parent`] owns
//! its children outright.

use indexmap::IndexMap;

/// HTML attributes in insertion order
pub type Attributes = IndexMap<String, String>;

/// A node in the HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, optionally wrapped in an element
    Leaf(Leaf),
    /// Element whose content is its rendered children
    Parent(Parent),
}

/// A node with a value and no children.
///
/// Without a tag the value is emitted as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub tag: Option<String>,
    pub value: String,
    pub attributes: Attributes,
}

/// A node with children and no value of its own.
///
/// A tag and at least one child are required at render time, not at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parent {
    pub tag: Option<String>,
    pub children: Vec<Node>,
    pub attributes: Attributes,
}

impl Leaf {
    /// Create a leaf wrapped in `tag`
    pub fn new(tag: &str, value: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
            value: value.to_string(),
            attributes: Attributes::new(),
        }
    }

    /// Create an untagged leaf (raw text)
    pub fn text(value: &str) -> Self {
        Self {
            tag: None,
            value: value.to_string(),
            attributes: Attributes::new(),
        }
    }

    /// Add an attribute; later attributes render after earlier ones
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }
}

impl Parent {
    /// Create a parent wrapped in `tag`
    pub fn new(tag: &str, children: Vec<Node>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }
}

impl Node {
    /// Tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag.as_deref(),
            Node::Parent(parent) => parent.tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf(leaf) => &leaf.attributes,
            Node::Parent(parent) => &parent.attributes,
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }

    /// Child nodes; always empty for a leaf
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Parent(parent) => &parent.children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Concatenated leaf values of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Leaf(leaf) => leaf.value.clone(),
            Node::Parent(parent) => parent.children.iter().map(Node::text_content).collect(),
        }
    }

    /// Render this node and its descendants to HTML
    pub fn render(&self) -> crate::Result<String> {
        crate::render::render(self)
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<Parent> for Node {
    fn from(parent: Parent) -> Self {
        Node::Parent(parent)
    }
}
