use indextree::{Arena, NodeId};

use crate::xmlvalue::{Element, Value, ValueType};

pub(crate) type XmlArena = Arena<Value>;

/// A node in the XML tree.
/// This is a lightweight value and can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// `XmlData` holds the XML trees that are parsed into it.
///
/// More than one document can live in the same `XmlData`; a comparison
/// parses both sides into one so that [`Node`] values are unique across
/// them.
pub struct XmlData {
    pub(crate) arena: XmlArena,
}

impl XmlData {
    /// Create a new, empty `XmlData`.
    pub fn new() -> Self {
        XmlData {
            arena: XmlArena::new(),
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &XmlArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut XmlArena {
        &mut self.arena
    }

    /// The value of a node.
    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        self.arena[node.get()].get()
    }

    #[inline]
    pub(crate) fn value_mut(&mut self, node: Node) -> &mut Value {
        self.arena[node.get()].get_mut()
    }

    /// The type of the value of a node.
    #[inline]
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// The element value of a node, or [`None`] if it isn't an element.
    pub fn element(&self, node: Node) -> Option<&Element> {
        match self.value(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    pub(crate) fn element_mut(&mut self, node: Node) -> Option<&mut Element> {
        match self.value_mut(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The text of a node, or [`None`] if it isn't a text node.
    pub fn text_str(&self, node: Node) -> Option<&str> {
        match self.value(node) {
            Value::Text(text) => Some(text.get()),
            _ => None,
        }
    }

    /// Check whether a node is an element.
    #[inline]
    pub fn is_element(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Element
    }
}

impl Default for XmlData {
    fn default() -> Self {
        Self::new()
    }
}
