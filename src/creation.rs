use crate::xmldata::{Node, XmlData};
use crate::xmlvalue::{Comment, Element, Name, ProcessingInstruction, Text, Value};

impl XmlData {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena_mut().new_node(value))
    }

    pub(crate) fn new_root(&mut self) -> Node {
        self.new_node(Value::Root)
    }

    pub(crate) fn new_text(&mut self, text: &str) -> Node {
        self.new_node(Value::Text(Text::new(text.to_string())))
    }

    pub(crate) fn new_element(&mut self, name: Name) -> Node {
        self.new_node(Value::Element(Element::new(name)))
    }

    pub(crate) fn new_comment(&mut self, comment: &str) -> Node {
        self.new_node(Value::Comment(Comment::new(comment.to_string())))
    }

    pub(crate) fn new_processing_instruction(&mut self, target: &str, data: Option<&str>) -> Node {
        self.new_node(Value::ProcessingInstruction(ProcessingInstruction::new(
            target.to_string(),
            data.map(|s| s.to_string()),
        )))
    }

    /// Append a child to the end of the children of the given parent.
    ///
    /// Text appended directly after a text node is merged into that text
    /// node instead, so two text nodes are never adjacent.
    pub(crate) fn append(&mut self, parent: Node, child: Node) {
        if let (Some(last_child), Some(extra)) = (self.last_child(parent), self.text_str(child)) {
            let extra = extra.to_string();
            if let Value::Text(text) = self.value_mut(last_child) {
                text.text.push_str(&extra);
                child.get().remove(self.arena_mut());
                return;
            }
        }
        parent.get().append(child.get(), self.arena_mut());
    }

    /// Remove a node and its descendants from the tree.
    pub(crate) fn remove(&mut self, node: Node) {
        node.get().remove_subtree(self.arena_mut());
    }
}
