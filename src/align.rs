//! Positional alignment of two element trees.
//!
//! Attributes and child elements are compared index by index: the `i`-th
//! item on the left is always compared with the `i`-th item on the right,
//! whatever its name. There is no rename detection and no tolerance for
//! reordering. Surplus items on the longer side have no counterpart and are
//! highlighted entirely.
use log::trace;

use crate::highlight::{Highlights, Mark};
use crate::xmldata::{Node, XmlData};
use crate::xmlvalue::Attribute;

/// Records the differences between two trees as [`Highlights`].
///
/// The trees are only read; all results go into the highlights.
pub struct Aligner<'a> {
    data: &'a XmlData,
    highlights: &'a mut Highlights,
}

impl<'a> Aligner<'a> {
    /// Create an aligner that records into `highlights`.
    pub fn new(data: &'a XmlData, highlights: &'a mut Highlights) -> Self {
        Aligner { data, highlights }
    }

    /// Align two elements and, recursively, their element children.
    ///
    /// Attributes at the same position are highlighted on both sides when
    /// their local names or their values differ. Attributes and child
    /// elements beyond the shorter side are highlighted on the longer side.
    /// Text, comments and processing instructions are not compared.
    ///
    /// ```rust
    /// use xmlhighlight::{Aligner, Highlights, XmlData};
    ///
    /// let mut data = XmlData::new();
    /// let left = data.parse(r#"<a x="1" y="2"/>"#)?;
    /// let right = data.parse(r#"<a x="1" y="3"/>"#)?;
    /// let left = data.top_elements(left).next().unwrap();
    /// let right = data.top_elements(right).next().unwrap();
    ///
    /// let mut highlights = Highlights::new();
    /// Aligner::new(&data, &mut highlights).align(left, right);
    /// assert!(!highlights.is_attribute_highlighted(left, 0));
    /// assert!(highlights.is_attribute_highlighted(left, 1));
    /// assert!(highlights.is_attribute_highlighted(right, 1));
    /// # Ok::<(), xmlhighlight::Error>(())
    /// ```
    pub fn align(&mut self, left: Node, right: Node) {
        self.align_attributes(left, right);
        self.align_children(left, right);
    }

    /// Align two sequences of sibling elements, such as the top-level
    /// elements of two documents.
    pub fn align_sequences(&mut self, left: &[Node], right: &[Node]) {
        for (left, right) in left.iter().zip(right) {
            self.align(*left, *right);
        }
        self.mark_tail(left, right.len());
        self.mark_tail(right, left.len());
    }

    /// Highlight an element and everything in it.
    ///
    /// The element's tag name and all its attributes are highlighted, and
    /// the same happens for every descendant element.
    pub fn mark_all(&mut self, node: Node) {
        let data: &'a XmlData = self.data;
        let Some(element) = data.element(node) else {
            return;
        };
        trace!("mark element {}", element.name());
        self.highlights.mark(Mark::Element(node));
        for index in 0..element.attributes().len() {
            self.mark_attribute(node, index);
        }
        for child in data.element_children(node) {
            self.mark_all(child);
        }
    }

    fn mark_tail(&mut self, nodes: &[Node], start: usize) {
        for node in nodes.iter().skip(start) {
            self.mark_all(*node);
        }
    }

    fn mark_attribute(&mut self, element: Node, index: usize) {
        trace!("mark attribute {} of {:?}", index, element);
        self.highlights.mark(Mark::Attribute { element, index });
    }

    fn attributes(&self, node: Node) -> &'a [Attribute] {
        let data: &'a XmlData = self.data;
        data.element(node)
            .map(|element| element.attributes())
            .unwrap_or(&[])
    }

    fn align_attributes(&mut self, left: Node, right: Node) {
        let left_attributes = self.attributes(left);
        let right_attributes = self.attributes(right);
        for (index, (l, r)) in left_attributes.iter().zip(right_attributes).enumerate() {
            if l.name().local() != r.name().local() || l.value() != r.value() {
                self.mark_attribute(left, index);
                self.mark_attribute(right, index);
            }
        }
        for index in right_attributes.len()..left_attributes.len() {
            self.mark_attribute(left, index);
        }
        for index in left_attributes.len()..right_attributes.len() {
            self.mark_attribute(right, index);
        }
    }

    fn align_children(&mut self, left: Node, right: Node) {
        let data: &'a XmlData = self.data;
        let left_children = data.element_children(left).collect::<Vec<_>>();
        let right_children = data.element_children(right).collect::<Vec<_>>();
        self.align_sequences(&left_children, &right_children);
    }
}
