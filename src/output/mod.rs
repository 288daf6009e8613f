//! Serialization of trees to indented XML text and to highlight-annotated
//! HTML.
pub mod html;
mod pretty;
mod serializer;
mod xml_serializer;

pub(crate) use pretty::Pretty;
pub(crate) use serializer::gen_outputs;
pub use serializer::Output;
pub(crate) use xml_serializer::XmlSerializer;
