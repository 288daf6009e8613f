//! Rendering of serialized XML as HTML for display.
//!
//! The serialized XML is escaped so that it displays as source text, line
//! breaks and indentation are turned into markup, and highlighted fragments
//! are wrapped in a styled `<span>`.
use std::borrow::Cow;

use crate::entity::escape_html;
use crate::highlight::{Fragment, Fragments};

/// Colors used to highlight differences.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HighlightStyle {
    /// CSS background color.
    pub background: String,
    /// CSS text color.
    pub foreground: String,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        HighlightStyle {
            background: "#b36b00".to_string(),
            foreground: "white".to_string(),
        }
    }
}

impl HighlightStyle {
    /// The markup that opens a highlighted span.
    ///
    /// ```rust
    /// use xmlhighlight::output::html::HighlightStyle;
    ///
    /// assert_eq!(
    ///     HighlightStyle::default().open_tag(),
    ///     "<span style='background-color: #b36b00; color: white'>"
    /// );
    /// ```
    pub fn open_tag(&self) -> String {
        format!(
            "<span style='background-color: {}; color: {}'>",
            self.background, self.foreground
        )
    }

    /// The markup that closes a highlighted span.
    pub fn close_tag(&self) -> &'static str {
        "</span>"
    }
}

/// Parameters for HTML rendering.
///
/// The defaults produce the markup host pages expect; change them to adjust
/// the rendering policy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Parameters {
    /// Returned instead of formatted output when there is no input.
    pub placeholder: String,
    /// Markup for a line break.
    pub line_break: String,
    /// Markup for one level of indentation.
    pub indentation: String,
    /// Style of highlighted spans.
    pub highlight: HighlightStyle,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            placeholder: "-".to_string(),
            line_break: "<br/>".to_string(),
            indentation: "&nbsp;".repeat(4),
            highlight: HighlightStyle::default(),
        }
    }
}

fn render_text<'a>(text: &'a str, parameters: &Parameters) -> Cow<'a, str> {
    let escaped = escape_html(text.into());
    if !escaped.contains(|c: char| c == '\n' || c == '\t') {
        return escaped;
    }
    escaped
        .replace('\n', &parameters.line_break)
        .replace('\t', &parameters.indentation)
        .into()
}

/// Render fragments to HTML.
///
/// Every fragment is HTML-escaped before any markup is added, so document
/// content can never be mistaken for highlight markup.
pub(crate) fn render(fragments: &Fragments, parameters: &Parameters) -> String {
    let mut result = String::new();
    let open_tag = parameters.highlight.open_tag();
    for fragment in fragments.as_slice() {
        match fragment {
            Fragment::Plain(text) => {
                result.push_str(&render_text(text, parameters));
            }
            Fragment::Highlighted(text) => {
                result.push_str(&open_tag);
                result.push_str(&render_text(text, parameters));
                result.push_str(parameters.highlight.close_tag());
            }
        }
    }
    result
}
