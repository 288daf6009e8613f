//! A fixed representation of a tree of nodes.
//!
//! This is a plain value that can be built and stored without any
//! [`XmlData`](crate::XmlData), and rendered to XML text that parses back
//! into the same tree.
//!
//! Example:
//!
//! ```rust
//! use xmlhighlight::fixed::{FixedContent, FixedElement};
//!
//! let element = FixedElement {
//!     name: "foo".to_string(),
//!     attributes: vec![("bar".to_string(), "a < b".to_string())],
//!     children: vec![FixedContent::Text("Example".to_string())],
//! };
//!
//! assert_eq!(element.to_xml_string(), r#"<foo bar="a &lt; b">Example</foo>"#);
//! ```

use crate::entity::{serialize_attribute, serialize_text};

/// A fixed representation of an XML element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedElement {
    /// Name of element
    pub name: String,
    /// Attributes, in order
    pub attributes: Vec<(String, String)>,
    /// Children
    pub children: Vec<FixedContent>,
}

/// A fixed representation of element content
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FixedContent {
    /// A text node
    Text(String),
    /// A comment node
    Comment(String),
    /// A processing instruction node, with target and optional data
    ProcessingInstruction(String, Option<String>),
    /// An element node
    Element(FixedElement),
}

impl FixedElement {
    /// Render the element as XML text.
    pub fn to_xml_string(&self) -> String {
        let mut xml = String::new();
        self.write_xml(&mut xml);
        xml
    }

    fn write_xml(&self, xml: &mut String) {
        xml.push('<');
        xml.push_str(&self.name);
        for (name, value) in &self.attributes {
            xml.push(' ');
            xml.push_str(name);
            xml.push_str("=\"");
            xml.push_str(&serialize_attribute(value.into()));
            xml.push('"');
        }
        if self.children.is_empty() {
            xml.push_str("/>");
            return;
        }
        xml.push('>');
        for child in &self.children {
            child.write_xml(xml);
        }
        xml.push_str("</");
        xml.push_str(&self.name);
        xml.push('>');
    }
}

impl FixedContent {
    fn write_xml(&self, xml: &mut String) {
        match self {
            FixedContent::Text(text) => xml.push_str(&serialize_text(text.into())),
            FixedContent::Comment(comment) => {
                xml.push_str("<!--");
                xml.push_str(comment);
                xml.push_str("-->");
            }
            FixedContent::ProcessingInstruction(target, data) => {
                xml.push_str("<?");
                xml.push_str(target);
                if let Some(data) = data {
                    xml.push(' ');
                    xml.push_str(data);
                }
                xml.push_str("?>");
            }
            FixedContent::Element(element) => element.write_xml(xml),
        }
    }
}
