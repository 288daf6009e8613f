#![forbid(unsafe_code)]

//! Compare two XML documents and render both as indented, HTML-escaped
//! markup with the differences highlighted, ready to be shown side by side.
//!
//! The comparison is positional: attributes and child elements are matched
//! by index, not by name. Attributes that differ are highlighted on both
//! sides; elements that have no counterpart are highlighted entirely.
//!
//! ```rust
//! let result = xmlhighlight::format_pair(
//!     r#"<root attr="1"><x/></root>"#,
//!     r#"<root attr="2"><x/></root>"#,
//! )?;
//! assert_eq!(
//!     result.left(),
//!     "&lt;root attr=&quot;<span style='background-color: #b36b00; color: white'>1</span>&quot;&gt;<br/>\
//!      &nbsp;&nbsp;&nbsp;&nbsp;&lt;x/&gt;<br/>\
//!      &lt;/root&gt;"
//! );
//! # Ok::<(), xmlhighlight::Error>(())
//! ```
//!
//! A single document can be formatted without comparison:
//!
//! ```rust
//! assert_eq!(xmlhighlight::format_single("<a>text</a>"), "&lt;a&gt;text&lt;/a&gt;");
//! assert_eq!(xmlhighlight::format_single(None), "-");
//! // input that isn't XML is returned as-is
//! assert_eq!(xmlhighlight::format_single("<a><b></a>"), "<a><b></a>");
//! ```
//!
//! Use a [`Formatter`] to change the rendering
//! [`Parameters`](output::html::Parameters) or the [`Recovery`] policy.

mod access;
mod align;
mod compare;
mod creation;
mod encoding;
mod entity;
mod error;
pub mod fixed;
mod format;
mod highlight;
pub mod output;
mod parse;
#[cfg(any(test, feature = "proptest"))]
pub mod proptest;
mod serialize;
mod unpretty;
mod xmldata;
mod xmlvalue;

pub use access::NodeEdge;
pub use align::Aligner;
pub use compare::{ComparisonResult, Recovery};
pub use error::Error;
pub use format::Formatter;
pub use highlight::{Fragment, Fragments, Highlights, Mark};
pub use xmldata::{Node, XmlData};
pub use xmlvalue::{
    Attribute, Comment, Element, Name, ProcessingInstruction, Text, Value, ValueType,
};

/// Format a single XML document as indented HTML, using the default
/// [`Parameters`](output::html::Parameters).
///
/// See [`Formatter::format`].
pub fn format_single<'a>(xml: impl Into<Option<&'a str>>) -> String {
    Formatter::default().format(xml)
}

/// Compare two XML documents and format both with differences highlighted,
/// using the default [`Parameters`](output::html::Parameters) and
/// [`Recovery::Strict`].
///
/// See [`Formatter::compare`].
pub fn format_pair<'a>(
    left: impl Into<Option<&'a str>>,
    right: impl Into<Option<&'a str>>,
) -> Result<ComparisonResult, Error> {
    Formatter::default().compare(left, right)
}
