//! In-memory SVG markup tree.
//!
//! Attribute and style maps are [`IndexMap`]s: generated output must list
//! attributes in source order, so insertion order is part of the data model.

use indexmap::IndexMap;

/// Ordered attribute map of an element.
pub type Properties = IndexMap<String, PropValue>;

/// Ordered style declarations parsed from a `style` attribute.
pub type StyleMap = IndexMap<String, StyleValue>;

/// A node of the markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Raw text content, kept exactly as it appeared in the source.
    Text(String),
    /// Element with attributes and ordered children.
    Element(Element),
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Tag name, e.g. `path`.
    pub tag_name: String,
    /// Attributes in source order.
    pub properties: Properties,
    /// Children in stacking order.
    pub children: Vec<Node>,
}

/// Value of an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Plain attribute value, kept verbatim (entities are not decoded).
    Text(String),
    /// Structured value of a `style` attribute.
    Style(StyleMap),
}

/// Value of a single style declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// String value, rendered quoted.
    Text(String),
    /// Numeric literal, rendered bare.
    Number(String),
}

/// Parsed document: the top-level nodes of an SVG source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Top-level nodes in source order.
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element without attributes or children.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            properties: Properties::new(),
            children: Vec::new(),
        }
    }

    /// Adds a plain attribute, builder style.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties
            .insert(name.into(), PropValue::Text(value.into()));
        self
    }

    /// Appends a child, builder style.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Returns a plain attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self.properties.get(name) {
            Some(PropValue::Text(value)) => Some(value),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl Node {
    /// Returns the element when this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl Document {
    /// Nodes the component body is built from.
    ///
    /// When the first top-level node is an `<svg>` element the generated
    /// template supplies its own outer `<svg>`, so that element's children are
    /// returned instead of the whole document.
    pub fn content(&self) -> &[Node] {
        match self.children.first() {
            Some(Node::Element(root)) if root.tag_name == "svg" => &root.children,
            _ => &self.children,
        }
    }
}
