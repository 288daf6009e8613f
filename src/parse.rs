use xmlparser::{ElementEnd, StrSpan, Token, Tokenizer};

use crate::encoding::decode;
use crate::entity::{normalize_attribute_whitespace, parse_entities};
use crate::error::Error;
use crate::unpretty::remove_insignificant_whitespace;
use crate::xmldata::{Node, XmlData};
use crate::xmlvalue::{Attribute, Name};

struct DocumentBuilder<'d> {
    data: &'d mut XmlData,
    root: Node,
    // the node new children are appended to
    current: Node,
    // element whose start tag is being read
    start_tag: Option<Node>,
}

impl<'d> DocumentBuilder<'d> {
    fn new(data: &'d mut XmlData) -> Self {
        let root = data.new_root();
        DocumentBuilder {
            data,
            root,
            current: root,
            start_tag: None,
        }
    }

    fn element(&mut self, prefix: StrSpan, local: StrSpan) {
        let node = self
            .data
            .new_element(Name::new(prefix.as_str(), local.as_str()));
        self.data.append(self.current, node);
        self.start_tag = Some(node);
    }

    fn attribute(
        &mut self,
        prefix: StrSpan,
        local: StrSpan,
        value: StrSpan,
        position: usize,
    ) -> Result<(), Error> {
        let name = Name::new(prefix.as_str(), local.as_str());
        let value = normalize_attribute_whitespace(value.as_str().into());
        let value = parse_entities(value)?.into_owned();
        let element = self
            .start_tag
            .and_then(|node| self.data.element_mut(node));
        // the tokenizer only produces attributes inside a start tag
        if let Some(element) = element {
            if element.has_attribute_named(&name) {
                return Err(Error::DuplicateAttribute {
                    name: name.to_string(),
                    position,
                });
            }
            element.push_attribute(Attribute::new(name, value));
        }
        Ok(())
    }

    fn open_element(&mut self) {
        if let Some(node) = self.start_tag.take() {
            self.current = node;
        }
    }

    fn empty_element(&mut self) {
        self.start_tag = None;
    }

    fn close_element(
        &mut self,
        prefix: StrSpan,
        local: StrSpan,
        position: usize,
    ) -> Result<(), Error> {
        let found = Name::new(prefix.as_str(), local.as_str());
        let parent = self.data.parent(self.current);
        match (self.data.element(self.current), parent) {
            (Some(element), Some(parent)) => {
                if element.name() != &found {
                    return Err(Error::InvalidCloseTag {
                        expected: element.name().to_string(),
                        found: found.to_string(),
                        position,
                    });
                }
                self.current = parent;
                Ok(())
            }
            _ => Err(Error::UnexpectedCloseTag {
                found: found.to_string(),
                position,
            }),
        }
    }

    fn text(&mut self, text: &str) {
        let node = self.data.new_text(text);
        self.data.append(self.current, node);
    }

    fn checked_text(&mut self, text: &str) -> Result<(), Error> {
        if self.current == self.root {
            if text.chars().all(|c| c.is_whitespace()) {
                return Ok(());
            }
            return Err(Error::TextOutsideElement(text.to_string()));
        }
        self.text(text);
        Ok(())
    }

    fn comment(&mut self, text: &str) {
        let node = self.data.new_comment(text);
        self.data.append(self.current, node);
    }

    fn processing_instruction(&mut self, target: &str, data: Option<&str>) {
        let node = self.data.new_processing_instruction(target, data);
        self.data.append(self.current, node);
    }

    fn finish(self) -> Result<Node, Error> {
        if self.current != self.root {
            let name = self
                .data
                .element(self.current)
                .map(|element| element.name().to_string())
                .unwrap_or_default();
            return Err(Error::UnclosedTag(name));
        }
        Ok(self.root)
    }
}

// byte offset where content starts, after an optional byte order mark, XML
// declaration and document type declaration
fn content_start(xml: &str) -> usize {
    let start = xml.len() - xml.trim_start_matches('\u{feff}').len();
    let start = start + declaration_end(&xml[start..]);
    start + doctype_end(&xml[start..])
}

fn declaration_end(xml: &str) -> usize {
    let trimmed = xml.trim_start();
    let offset = xml.len() - trimmed.len();
    if let Some(rest) = trimmed.strip_prefix("<?xml") {
        let is_declaration = rest
            .chars()
            .next()
            .map(|c| c.is_whitespace() || c == '?')
            .unwrap_or(false);
        if is_declaration {
            if let Some(end) = rest.find("?>") {
                return offset + "<?xml".len() + end + "?>".len();
            }
        }
    }
    0
}

// the doctype ends at the first `>` outside quotes and the internal subset
fn doctype_end(xml: &str) -> usize {
    let trimmed = xml.trim_start();
    let offset = xml.len() - trimmed.len();
    if !trimmed.starts_with("<!DOCTYPE") {
        return 0;
    }
    let mut quote = None;
    let mut depth = 0usize;
    for (i, c) in trimmed.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '[') => depth += 1,
            (None, ']') => depth = depth.saturating_sub(1),
            (None, '>') if depth == 0 => return offset + i + 1,
            _ => {}
        }
    }
    // unterminated, leave it to the tokenizer to report
    0
}

/// ## Parsing
impl XmlData {
    /// Parse a string containing XML into a tree.
    ///
    /// The input is a sequence of top-level elements, comments and
    /// processing instructions, optionally preceded by a byte order mark, an
    /// XML declaration and a document type declaration, which are dropped. The returned node is a root that holds the
    /// top-level nodes as its children.
    ///
    /// Whitespace-only text that is not part of mixed content is dropped,
    /// unless it is inside `xml:space="preserve"`.
    ///
    /// ```rust
    /// use xmlhighlight::XmlData;
    ///
    /// let mut data = XmlData::new();
    /// let root = data.parse("<a>\n  <b/>\n</a><c/>")?;
    /// let top = data.top_elements(root).collect::<Vec<_>>();
    /// assert_eq!(top.len(), 2);
    /// assert_eq!(data.children(top[0]).count(), 1);
    /// # Ok::<(), xmlhighlight::Error>(())
    /// ```
    pub fn parse(&mut self, xml: &str) -> Result<Node, Error> {
        let mut builder = DocumentBuilder::new(self);

        for token in Tokenizer::from_fragment(xml, content_start(xml)..xml.len()) {
            match token? {
                Token::ElementStart { prefix, local, .. } => {
                    builder.element(prefix, local);
                }
                Token::Attribute {
                    prefix,
                    local,
                    value,
                    span,
                } => {
                    builder.attribute(prefix, local, value, span.start())?;
                }
                Token::ElementEnd { end, span } => match end {
                    ElementEnd::Open => builder.open_element(),
                    ElementEnd::Empty => builder.empty_element(),
                    ElementEnd::Close(prefix, local) => {
                        builder.close_element(prefix, local, span.start())?
                    }
                },
                Token::Text { text } => {
                    let text = parse_entities(text.as_str().into())?;
                    builder.checked_text(&text)?;
                }
                Token::Cdata { text, .. } => {
                    builder.checked_text(text.as_str())?;
                }
                Token::Comment { text, .. } => {
                    builder.comment(text.as_str());
                }
                Token::ProcessingInstruction {
                    target, content, ..
                } => {
                    builder.processing_instruction(
                        target.as_str(),
                        content.map(|content| content.as_str()),
                    );
                }
                _ => {}
            }
        }

        let root = builder.finish()?;
        remove_insignificant_whitespace(self, root);
        Ok(root)
    }

    /// Parse bytes containing XML into a tree.
    ///
    /// The character encoding is detected from a byte order mark or the
    /// XML declaration, defaulting to UTF-8.
    ///
    /// ```rust
    /// use xmlhighlight::XmlData;
    ///
    /// let mut data = XmlData::new();
    /// let root = data.parse_bytes(b"<?xml version=\"1.0\" encoding=\"iso-8859-1\"?><a b=\"\xe9\"/>")?;
    /// let a = data.top_elements(root).next().unwrap();
    /// assert_eq!(data.element(a).unwrap().get_attribute("b"), Some("é"));
    /// # Ok::<(), xmlhighlight::Error>(())
    /// ```
    pub fn parse_bytes(&mut self, bytes: &[u8]) -> Result<Node, Error> {
        let xml = decode(bytes)?;
        self.parse(&xml)
    }
}
