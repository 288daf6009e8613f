use log::debug;

use crate::compare::{compare, ComparisonResult, Recovery};
use crate::encoding::decode;
use crate::error::Error;
use crate::highlight::Highlights;
use crate::output::html::{render, Parameters};
use crate::xmldata::XmlData;

/// Formats XML documents, and pairs of compared documents, as
/// highlight-annotated HTML.
///
/// ```rust
/// use xmlhighlight::Formatter;
/// use xmlhighlight::output::html::Parameters;
///
/// let formatter = Formatter::new(Parameters {
///     placeholder: "(none)".to_string(),
///     ..Default::default()
/// });
/// assert_eq!(formatter.format(None), "(none)");
/// assert_eq!(formatter.format("<a><b/></a>"), "&lt;a&gt;<br/>&nbsp;&nbsp;&nbsp;&nbsp;&lt;b/&gt;<br/>&lt;/a&gt;");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    parameters: Parameters,
    recovery: Recovery,
}

impl Formatter {
    /// Create a formatter with the given rendering parameters.
    pub fn new(parameters: Parameters) -> Self {
        Formatter {
            parameters,
            recovery: Recovery::default(),
        }
    }

    /// Set how [`Formatter::compare`] treats input that fails to parse.
    pub fn with_recovery(mut self, recovery: Recovery) -> Self {
        self.recovery = recovery;
        self
    }

    /// The rendering parameters.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The parse failure policy for comparisons.
    pub fn recovery(&self) -> Recovery {
        self.recovery
    }

    /// Format a single XML document as indented HTML.
    ///
    /// Absent or empty input gives the placeholder. Input that fails to
    /// parse, or that contains only whitespace, is returned unchanged. This
    /// never fails.
    pub fn format<'a>(&self, xml: impl Into<Option<&'a str>>) -> String {
        let xml = match xml.into() {
            Some(xml) if !xml.is_empty() => xml,
            _ => return self.parameters.placeholder.clone(),
        };
        let mut data = XmlData::new();
        match data.parse(xml) {
            Ok(root) => {
                if data.first_child(root).is_none() {
                    return xml.to_string();
                }
                render(&data.fragments(&[root], &Highlights::new()), &self.parameters)
            }
            Err(e) => {
                debug!("formatting falls back to input text: {}", e);
                xml.to_string()
            }
        }
    }

    /// Format a single XML document given as bytes.
    ///
    /// The encoding is detected from a byte order mark or the XML
    /// declaration. Bytes that cannot be decoded are returned as lossy
    /// UTF-8 text.
    pub fn format_bytes(&self, bytes: &[u8]) -> String {
        if bytes.is_empty() {
            return self.parameters.placeholder.clone();
        }
        match decode(bytes) {
            Ok(xml) => self.format(xml.as_ref()),
            Err(e) => {
                debug!("formatting falls back to input bytes: {}", e);
                String::from_utf8_lossy(bytes).into_owned()
            }
        }
    }

    /// Compare two XML documents and format both, with differences
    /// highlighted.
    ///
    /// If either side is absent, empty or only whitespace, no comparison
    /// happens and each side is formatted on its own with
    /// [`Formatter::format`].
    ///
    /// Otherwise the top-level elements of both documents are aligned by
    /// position; see [`Aligner`](crate::Aligner). Only the top-level
    /// elements are part of the output.
    ///
    /// With [`Recovery::Strict`], the default, a side that fails to parse
    /// is an error.
    pub fn compare<'a>(
        &self,
        left: impl Into<Option<&'a str>>,
        right: impl Into<Option<&'a str>>,
    ) -> Result<ComparisonResult, Error> {
        compare(self, left.into(), right.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_placeholder() {
        let formatter = Formatter::default();
        assert_eq!(formatter.format(None), "-");
        assert_eq!(formatter.format(""), "-");
        assert_eq!(formatter.format_bytes(b""), "-");
    }

    #[test]
    fn test_format_malformed_unchanged() {
        let formatter = Formatter::default();
        assert_eq!(formatter.format("<a><b></a>"), "<a><b></a>");
        assert_eq!(formatter.format("not xml & such"), "not xml & such");
    }

    #[test]
    fn test_format_whitespace_unchanged() {
        assert_eq!(Formatter::default().format(" \t\n"), " \t\n");
    }

    #[test]
    fn test_format_bytes() {
        let formatter = Formatter::default();
        assert_eq!(
            formatter.format_bytes(b"<?xml version=\"1.0\" encoding=\"iso-8859-1\"?><a b=\"\xe9\"/>"),
            "&lt;a b=&quot;é&quot;/&gt;"
        );
    }

    #[test]
    fn test_compare_strict_error() {
        let formatter = Formatter::default();
        let err = formatter.compare("<a>", "<a/>").unwrap_err();
        assert!(matches!(err, Error::UnclosedTag(_)));
        let err = formatter.compare("<a/>", "<a></b>").unwrap_err();
        assert!(matches!(err, Error::InvalidCloseTag { .. }));
    }

    #[test]
    fn test_compare_per_side_recovery() {
        let formatter = Formatter::default().with_recovery(Recovery::PerSide);
        let result = formatter.compare("<a>", r#"<a x="1"/>"#).unwrap();
        assert_eq!(result.left(), "<a>");
        assert_eq!(result.right(), "&lt;a x=&quot;1&quot;/&gt;");
    }
}
