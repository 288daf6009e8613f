use genawaiter::rc::gen;
use genawaiter::yield_;

use crate::access::NodeEdge;
use crate::xmldata::{Node, XmlData};
use crate::xmlvalue::{Attribute, Element, Value};

/// Output of serialization
///
/// Each item represents a piece of the serialized XML and where it comes
/// from in the tree.
#[derive(Debug, PartialEq)]
pub enum Output<'a> {
    /// Start tag open, i.e `<foo` or `<ns:foo`
    StartTagOpen(&'a Element),
    /// Attribute with its position on the element, i.e. `foo="bar"`
    Attribute(usize, &'a Attribute),
    /// Start tag close, either `>` or `/>`
    StartTagClose,
    /// End tag, i.e. `</foo>` or `</ns:foo>`
    EndTag(&'a Element),
    /// Text, i.e. `foo`
    Text(&'a str),
    /// Comment, i.e. `<!-- foo -->`
    Comment(&'a str),
    /// Processing instruction, i.e. `<?foo bar?>`
    ProcessingInstruction(&'a str, Option<&'a str>),
}

pub(crate) fn gen_outputs(data: &XmlData, node: Node) -> impl Iterator<Item = (Node, Output)> + '_ {
    gen!({
        for edge in data.traverse(node) {
            match edge {
                NodeEdge::Start(current_node) => {
                    for output in gen_edge_start(data, current_node) {
                        yield_!((current_node, output));
                    }
                }
                NodeEdge::End(current_node) => {
                    if let Value::Element(element) = data.value(current_node) {
                        yield_!((current_node, Output::EndTag(element)));
                    }
                }
            }
        }
    })
    .into_iter()
}

fn gen_edge_start(data: &XmlData, node: Node) -> impl Iterator<Item = Output> + '_ {
    gen!({
        match data.value(node) {
            Value::Root => {}
            Value::Element(element) => {
                yield_!(Output::StartTagOpen(element));
                for (index, attribute) in element.attributes().iter().enumerate() {
                    yield_!(Output::Attribute(index, attribute));
                }
                yield_!(Output::StartTagClose);
            }
            Value::Text(text) => {
                yield_!(Output::Text(text.get()));
            }
            Value::Comment(comment) => {
                yield_!(Output::Comment(comment.get()));
            }
            Value::ProcessingInstruction(pi) => {
                yield_!(Output::ProcessingInstruction(pi.target(), pi.data()));
            }
        }
    })
    .into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_outputs() {
        let mut data = XmlData::new();
        let root = data.parse(r#"<doc a="A">Text<!--c--></doc>"#).unwrap();
        let doc = data.first_child(root).unwrap();
        let doc_el = data.element(doc).unwrap();
        let mut iter = gen_outputs(&data, doc).map(|(_, output)| output);

        assert_eq!(iter.next().unwrap(), Output::StartTagOpen(doc_el));
        assert_eq!(
            iter.next().unwrap(),
            Output::Attribute(0, &doc_el.attributes()[0])
        );
        assert_eq!(iter.next().unwrap(), Output::StartTagClose);
        assert_eq!(iter.next().unwrap(), Output::Text("Text"));
        assert_eq!(iter.next().unwrap(), Output::Comment("c"));
        assert_eq!(iter.next().unwrap(), Output::EndTag(doc_el));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_gen_outputs_root() {
        let mut data = XmlData::new();
        let root = data.parse(r#"<a/><?pi?>"#).unwrap();
        let outputs = gen_outputs(&data, root)
            .map(|(_, output)| output)
            .collect::<Vec<_>>();
        assert_eq!(outputs.len(), 4);
        assert_eq!(outputs[3], Output::ProcessingInstruction("pi", None));
    }
}
