//! Minimal XML document builder
//!
//! Cross-reference documents are small and fixed in shape, so they are built
//! as a tree of [`XmlElement`]s and rendered with two-space indentation:
//! elements with only text content stay on one line, elements without
//! content render self-closed (`<tocexclude />`).

use html_escape::{encode_double_quoted_attribute, encode_text};

/// XML declaration written at the top of every document
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

const INDENT: &str = "  ";

/// A child of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An element with attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a child element
    pub fn child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Add child elements
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = XmlElement>,
    {
        self.children
            .extend(children.into_iter().map(XmlNode::Element));
        self
    }

    /// Add text content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    /// Element name
    pub fn name(&self) -> &str {
        &self.name
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&encode_double_quoted_attribute(value));
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str(" />\n");
            return;
        }

        let text_only = self
            .children
            .iter()
            .all(|child| matches!(child, XmlNode::Text(_)));

        if text_only {
            out.push('>');
            for child in &self.children {
                if let XmlNode::Text(text) = child {
                    out.push_str(&encode_text(text));
                }
            }
        } else {
            out.push_str(">\n");
            for child in &self.children {
                match child {
                    XmlNode::Element(element) => element.render_into(out, depth + 1),
                    XmlNode::Text(text) => {
                        for _ in 0..=depth {
                            out.push_str(INDENT);
                        }
                        out.push_str(&encode_text(text));
                        out.push('\n');
                    }
                }
            }
            for _ in 0..depth {
                out.push_str(INDENT);
            }
        }

        out.push_str("</");
        out.push_str(&self.name);
        out.push_str(">\n");
    }
}

/// A document with a single root element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    /// Create a document
    pub fn new(root: XmlElement) -> Self {
        Self { root }
    }

    /// Root element
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Render with declaration and indentation
    pub fn to_xml_string(&self) -> String {
        let mut out = String::from(XML_DECLARATION);
        out.push('\n');
        self.root.render_into(&mut out, 0);
        out
    }
}
