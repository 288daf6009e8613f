use std::fmt;

/// The type of the XML node.
///
/// Access it using [`Value::value_type`] or
/// [`XmlData::value_type`](crate::XmlData::value_type).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Root that holds the top-level nodes of a parsed document.
    Root,
    /// Element; it has a name and attributes.
    Element,
    /// Text.
    Text,
    /// Processing instruction.
    ProcessingInstruction,
    /// Comment.
    Comment,
}

/// An XML value.
///
/// Access it using [`XmlData::value`](crate::XmlData::value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Root that holds the top-level nodes of a parsed document. A document
    /// may have any number of top-level elements.
    Root,
    /// Element; it has a name and attributes.
    Element(Element),
    /// Text.
    Text(Text),
    /// Processing instruction.
    ProcessingInstruction(ProcessingInstruction),
    /// Comment.
    Comment(Comment),
}

impl Value {
    /// Returns the type of the XML value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Root => ValueType::Root,
            Value::Element(_) => ValueType::Element,
            Value::Text(_) => ValueType::Text,
            Value::Comment(_) => ValueType::Comment,
            Value::ProcessingInstruction(_) => ValueType::ProcessingInstruction,
        }
    }
}

/// An XML name as written in the source: an optional prefix and a local
/// name.
///
/// Prefixes are kept textually; they are not resolved to namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    pub(crate) prefix: String,
    pub(crate) local: String,
}

impl Name {
    pub(crate) fn new(prefix: &str, local: &str) -> Self {
        Name {
            prefix: prefix.to_string(),
            local: local.to_string(),
        }
    }

    /// The prefix, or the empty string if there is none.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The local name.
    pub fn local(&self) -> &str {
        &self.local
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix.is_empty() {
            write!(f, "{}", self.local)
        } else {
            write!(f, "{}:{}", self.prefix, self.local)
        }
    }
}

/// XML attribute: a name and its (entity-decoded) value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub(crate) name: Name,
    pub(crate) value: String,
}

impl Attribute {
    pub(crate) fn new(name: Name, value: String) -> Self {
        Attribute { name, value }
    }

    /// The attribute name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The attribute value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// XML element value.
///
/// Example: `<foo/>` or `<foo bar="baz"/>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) name: Name,
    pub(crate) attributes: Vec<Attribute>,
}

impl Element {
    pub(crate) fn new(name: Name) -> Self {
        Element {
            name,
            attributes: Vec::new(),
        }
    }

    /// The name of the element.
    ///
    /// ```rust
    /// use xmlhighlight::XmlData;
    ///
    /// let mut data = XmlData::new();
    /// let root = data.parse("<x:doc/>")?;
    /// let doc = data.top_elements(root).next().unwrap();
    /// let element = data.element(doc).unwrap();
    /// assert_eq!(element.name().prefix(), "x");
    /// assert_eq!(element.name().local(), "doc");
    /// # Ok::<(), xmlhighlight::Error>(())
    /// ```
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The attributes of the element, in source order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Get an attribute value by its local name.
    ///
    /// ```rust
    /// use xmlhighlight::XmlData;
    ///
    /// let mut data = XmlData::new();
    /// let root = data.parse(r#"<doc a="A" />"#)?;
    /// let doc = data.top_elements(root).next().unwrap();
    /// let element = data.element(doc).unwrap();
    /// assert_eq!(element.get_attribute("a"), Some("A"));
    /// assert_eq!(element.get_attribute("b"), None);
    /// # Ok::<(), xmlhighlight::Error>(())
    /// ```
    pub fn get_attribute(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name.local == local)
            .map(|attribute| attribute.value.as_str())
    }

    pub(crate) fn push_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    pub(crate) fn has_attribute_named(&self, name: &Name) -> bool {
        self.attributes.iter().any(|attribute| &attribute.name == name)
    }

    // the value of xml:space, if declared on this element
    pub(crate) fn xml_space(&self) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name.prefix == "xml" && attribute.name.local == "space")
            .map(|attribute| attribute.value.as_str())
    }
}

/// XML text value.
///
/// Example: `Bar` in `<foo>Bar</foo>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    pub(crate) fn new(text: String) -> Self {
        Text { text }
    }

    /// Get the text value.
    pub fn get(&self) -> &str {
        &self.text
    }
}

/// XML comment.
///
/// Example: `<!-- foo -->`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub(crate) text: String,
}

impl Comment {
    pub(crate) fn new(text: String) -> Self {
        Comment { text }
    }

    /// Get the comment text.
    pub fn get(&self) -> &str {
        &self.text
    }
}

/// XML processing instruction value.
///
/// Example: `<?foo?>` or `<?foo bar?>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingInstruction {
    pub(crate) target: String,
    pub(crate) data: Option<String>,
}

impl ProcessingInstruction {
    pub(crate) fn new(target: String, data: Option<String>) -> Self {
        ProcessingInstruction { target, data }
    }

    /// Get processing instruction target.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Get processing instruction data.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}
