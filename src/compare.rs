use log::debug;

use crate::align::Aligner;
use crate::error::Error;
use crate::format::Formatter;
use crate::highlight::Highlights;
use crate::output::html::render;
use crate::xmldata::{Node, XmlData};

/// How a comparison treats input that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Recovery {
    /// A parse failure on either side is returned as an error.
    #[default]
    Strict,
    /// Each side that fails to parse is returned verbatim, like
    /// [`Formatter::format`] does; the other side is formatted without
    /// highlighting.
    PerSide,
}

/// The formatted, highlight-annotated output of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonResult {
    left: String,
    right: String,
}

impl ComparisonResult {
    pub(crate) fn new(left: String, right: String) -> Self {
        ComparisonResult { left, right }
    }

    /// The formatted left document.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// The formatted right document.
    pub fn right(&self) -> &str {
        &self.right
    }

    /// Take the formatted `(left, right)` documents.
    pub fn into_parts(self) -> (String, String) {
        (self.left, self.right)
    }
}

fn is_blank(xml: Option<&str>) -> bool {
    xml.map(|xml| xml.trim().is_empty()).unwrap_or(true)
}

pub(crate) fn compare(
    formatter: &Formatter,
    left: Option<&str>,
    right: Option<&str>,
) -> Result<ComparisonResult, Error> {
    let (left, right) = match (left, right) {
        (Some(left), Some(right)) if !is_blank(Some(left)) && !is_blank(Some(right)) => {
            (left, right)
        }
        _ => {
            return Ok(ComparisonResult::new(
                formatter.format(left),
                formatter.format(right),
            ))
        }
    };

    let mut data = XmlData::new();
    let roots = data
        .parse(left)
        .and_then(|left_root| Ok((left_root, data.parse(right)?)));
    let (left_root, right_root) = match (roots, formatter.recovery()) {
        (Ok(roots), _) => roots,
        (Err(e), Recovery::Strict) => return Err(e),
        (Err(e), Recovery::PerSide) => {
            debug!("comparison falls back to formatting each side: {}", e);
            return Ok(ComparisonResult::new(
                formatter.format(left),
                formatter.format(right),
            ));
        }
    };

    let left_top = data.top_elements(left_root).collect::<Vec<_>>();
    let right_top = data.top_elements(right_root).collect::<Vec<_>>();
    debug!(
        "comparing {} top-level elements with {}",
        left_top.len(),
        right_top.len()
    );

    let mut highlights = Highlights::new();
    Aligner::new(&data, &mut highlights).align_sequences(&left_top, &right_top);
    debug!("{} highlights", highlights.len());

    Ok(ComparisonResult::new(
        render_side(formatter, &data, &left_top, &highlights),
        render_side(formatter, &data, &right_top, &highlights),
    ))
}

fn render_side(
    formatter: &Formatter,
    data: &XmlData,
    top: &[Node],
    highlights: &Highlights,
) -> String {
    if top.is_empty() {
        return formatter.parameters().placeholder.clone();
    }
    render(&data.fragments(top, highlights), formatter.parameters())
}
