use crate::xmldata::{Node, XmlData};

pub(crate) fn remove_insignificant_whitespace(data: &mut XmlData, node: Node) {
    let to_remove = data
        .descendants(node)
        .filter(|descendant| is_insignificant_whitespace(data, *descendant))
        .collect::<Vec<_>>();
    for node in to_remove {
        data.remove(node);
    }
}

fn is_whitespace(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace())
}

fn is_significant_text_node(data: &XmlData, node: Node) -> bool {
    if let Some(text) = data.text_str(node) {
        !is_whitespace(text)
    } else {
        false
    }
}

fn in_preserve_space(data: &XmlData, node: Node) -> bool {
    for ancestor in data.ancestors(node) {
        if let Some(space) = data.element(ancestor).and_then(|element| element.xml_space()) {
            return space == "preserve";
        }
    }
    false
}

fn is_insignificant_whitespace(data: &XmlData, node: Node) -> bool {
    if let Some(text) = data.text_str(node) {
        if !is_whitespace(text) {
            return false;
        }
        if in_preserve_space(data, node) {
            return false;
        }
        // whitespace in mixed content is kept
        !data
            .preceding_siblings(node)
            .chain(data.following_siblings(node))
            .any(|sibling| is_significant_text_node(data, sibling))
    } else {
        false
    }
}
