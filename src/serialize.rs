use crate::highlight::{Fragments, Highlights};
use crate::output::{gen_outputs, XmlSerializer};
use crate::xmldata::{Node, XmlData};

/// ## Serialization
impl XmlData {
    /// Serialize nodes to indented XML, split into fragments according to
    /// `highlights`.
    ///
    /// The nodes are serialized one after the other, each starting on a new
    /// line. Passing a root serializes all its top-level nodes. Indentation
    /// is one tab per level; mixed content is not indented.
    ///
    /// ```rust
    /// use xmlhighlight::{Fragment, Highlights, Mark, XmlData};
    ///
    /// let mut data = XmlData::new();
    /// let root = data.parse(r#"<a b="1"/>"#)?;
    /// let a = data.top_elements(root).next().unwrap();
    /// let mut highlights = Highlights::new();
    /// highlights.mark(Mark::Attribute { element: a, index: 0 });
    ///
    /// let fragments = data.fragments(&[a], &highlights);
    /// assert_eq!(
    ///     fragments.as_slice(),
    ///     &[
    ///         Fragment::Plain(r#"<a b=""#.to_string()),
    ///         Fragment::Highlighted("1".to_string()),
    ///         Fragment::Plain(r#""/>"#.to_string()),
    ///     ]
    /// );
    /// # Ok::<(), xmlhighlight::Error>(())
    /// ```
    pub fn fragments(&self, nodes: &[Node], highlights: &Highlights) -> Fragments {
        let serializer = XmlSerializer::new(self, highlights);
        serializer.serialize_pretty(nodes.iter().flat_map(|node| gen_outputs(self, *node)))
    }

    /// Serialize a node to indented XML without any highlighting.
    ///
    /// ```rust
    /// use xmlhighlight::XmlData;
    ///
    /// let mut data = XmlData::new();
    /// let root = data.parse("<a><b>text</b></a>")?;
    /// assert_eq!(data.to_pretty_string(root), "<a>\n\t<b>text</b>\n</a>");
    /// # Ok::<(), xmlhighlight::Error>(())
    /// ```
    pub fn to_pretty_string(&self, node: Node) -> String {
        self.fragments(&[node], &Highlights::new()).to_plain_string()
    }
}
