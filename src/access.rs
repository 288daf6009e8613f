use indextree::NodeEdge as IndexTreeNodeEdge;

use crate::xmldata::{Node, XmlData};
use crate::xmlvalue::ValueType;

/// Node edges.
///
/// Used by [`XmlData::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeEdge {
    /// The start edge of a node. In case of an element
    /// this is the start tag.
    Start(Node),
    /// The end edge of a node. In case of an element
    /// this is the end tag. For any other values, the
    /// end edge occurs immediately after the start
    /// edge.
    End(Node),
}

/// ## Read-only access
impl XmlData {
    /// Get parent node.
    ///
    /// Returns [`None`] if this is the root node.
    ///
    /// ```rust
    /// let mut data = xmlhighlight::XmlData::new();
    /// let root = data.parse("<p>Example</p>").unwrap();
    /// let p = data.first_child(root).unwrap();
    /// let text = data.first_child(p).unwrap();
    /// assert_eq!(data.parent(text), Some(p));
    /// assert_eq!(data.parent(p), Some(root));
    /// assert_eq!(data.parent(root), None);
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Get first child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get last child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Iterator over the child nodes of this node.
    ///
    /// ```rust
    /// let mut data = xmlhighlight::XmlData::new();
    /// let root = data.parse("<p><a/>text<b/></p>").unwrap();
    /// let p = data.first_child(root).unwrap();
    /// assert_eq!(data.children(p).count(), 3);
    /// ```
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Iterator over the child nodes of this node that are elements.
    ///
    /// Text, comments and processing instructions are skipped.
    ///
    /// ```rust
    /// let mut data = xmlhighlight::XmlData::new();
    /// let root = data.parse("<p><a/>text<!--c--><b/></p>").unwrap();
    /// let p = data.first_child(root).unwrap();
    /// assert_eq!(data.element_children(p).count(), 2);
    /// ```
    pub fn element_children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.children(node).filter(|child| self.is_element(*child))
    }

    /// Iterator over the top-level elements of a parsed document.
    ///
    /// A document may hold any number of top-level elements:
    ///
    /// ```rust
    /// let mut data = xmlhighlight::XmlData::new();
    /// let root = data.parse("<a/><!--between--><b/><c/>").unwrap();
    /// assert_eq!(data.top_elements(root).count(), 3);
    /// ```
    pub fn top_elements(&self, root: Node) -> impl Iterator<Item = Node> + '_ {
        debug_assert_eq!(self.value_type(root), ValueType::Root);
        self.element_children(root)
    }

    /// Iterator over the siblings before this node, nearest first, not
    /// including the node itself.
    pub fn preceding_siblings(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get()
            .preceding_siblings(self.arena())
            .skip(1)
            .map(Node::new)
    }

    /// Iterator over the siblings after this node, not including the node
    /// itself.
    pub fn following_siblings(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get()
            .following_siblings(self.arena())
            .skip(1)
            .map(Node::new)
    }

    /// Iterator over ancestor nodes, including this one.
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().ancestors(self.arena()).map(Node::new)
    }

    /// Iterator over this node and its descendants, in document order.
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// Traverse over node edges.
    ///
    /// This can be used to generate a linear representation of the tree,
    /// such as its serialization.
    ///
    /// ```rust
    /// use xmlhighlight::{NodeEdge, XmlData};
    ///
    /// let mut data = XmlData::new();
    /// let root = data.parse("<a><b/></a>").unwrap();
    /// let a = data.first_child(root).unwrap();
    /// let b = data.first_child(a).unwrap();
    /// let edges = data.traverse(a).collect::<Vec<_>>();
    /// assert_eq!(
    ///     edges,
    ///     vec![
    ///         NodeEdge::Start(a),
    ///         NodeEdge::Start(b),
    ///         NodeEdge::End(b),
    ///         NodeEdge::End(a),
    ///     ]
    /// );
    /// ```
    pub fn traverse(&self, node: Node) -> impl Iterator<Item = NodeEdge> + '_ {
        node.get().traverse(self.arena()).map(|edge| match edge {
            IndexTreeNodeEdge::Start(node_id) => NodeEdge::Start(Node::new(node_id)),
            IndexTreeNodeEdge::End(node_id) => NodeEdge::End(Node::new(node_id)),
        })
    }
}
