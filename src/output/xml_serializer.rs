use crate::entity::{serialize_attribute, serialize_text};
use crate::highlight::{Fragments, Highlights};
use crate::xmldata::{Node, XmlData};

use super::{Output, Pretty};

const INDENTATION: &str = "\t";
const NEWLINE: &str = "\n";

/// Serializes trees to XML text, split into plain and highlighted
/// fragments.
pub(crate) struct XmlSerializer<'a> {
    data: &'a XmlData,
    highlights: &'a Highlights,
}

impl<'a> XmlSerializer<'a> {
    pub(crate) fn new(data: &'a XmlData, highlights: &'a Highlights) -> Self {
        Self { data, highlights }
    }

    pub(crate) fn serialize_pretty(
        &self,
        outputs: impl Iterator<Item = (Node, Output<'a>)>,
    ) -> Fragments {
        let mut fragments = Fragments::new();
        let mut pretty = Pretty::new(self.data);
        for (node, output) in outputs {
            let (indentation, newline) = pretty.prettify(node, &output);
            if indentation > 0 {
                fragments.push_plain(&INDENTATION.repeat(indentation));
            }
            self.render_output(&mut fragments, node, &output);
            if newline {
                fragments.push_plain(NEWLINE);
            }
        }
        fragments.trim_trailing_newline();
        fragments
    }

    pub(crate) fn render_output(&self, fragments: &mut Fragments, node: Node, output: &Output<'a>) {
        use Output::*;
        match output {
            StartTagOpen(element) => {
                fragments.push_plain("<");
                fragments.push(
                    &element.name().to_string(),
                    self.highlights.is_element_highlighted(node),
                );
            }
            Attribute(index, attribute) => {
                fragments.push_plain(&format!(" {}=\"", attribute.name()));
                fragments.push(
                    &serialize_attribute(attribute.value().into()),
                    self.highlights.is_attribute_highlighted(node, *index),
                );
                fragments.push_plain("\"");
            }
            StartTagClose => {
                if self.data.first_child(node).is_none() {
                    fragments.push_plain("/>");
                } else {
                    fragments.push_plain(">");
                }
            }
            EndTag(element) => {
                if self.data.first_child(node).is_some() {
                    fragments.push_plain("</");
                    fragments.push(
                        &element.name().to_string(),
                        self.highlights.is_element_highlighted(node),
                    );
                    fragments.push_plain(">");
                }
            }
            Text(text) => {
                fragments.push_plain(&serialize_text((*text).into()));
            }
            Comment(text) => {
                fragments.push_plain(&format!("<!--{}-->", text));
            }
            ProcessingInstruction(target, data) => {
                if let Some(data) = data {
                    fragments.push_plain(&format!("<?{} {}?>", target, data));
                } else {
                    fragments.push_plain(&format!("<?{}?>", target));
                }
            }
        }
    }
}
