use rstest::rstest;
use xmlhighlight::output::html::{HighlightStyle, Parameters};
use xmlhighlight::{format_single, Formatter};

const INDENT: &str = "&nbsp;&nbsp;&nbsp;&nbsp;";

#[test]
fn test_placeholder_for_absent_input() {
    assert_eq!(format_single(None), "-");
    assert_eq!(format_single(""), "-");
}

#[rstest]
#[case("<a><b></a>")]
#[case("<a>")]
#[case("</a>")]
#[case("<a b=1/>")]
#[case("<a/>trailing text")]
#[case("<a>&nbsp;</a>")]
#[case("plain text")]
#[case("<a>&#0;</a>")]
#[case("<a b=\"&#x1;\"/>")]
fn test_malformed_returned_unchanged(#[case] xml: &str) {
    assert_eq!(format_single(xml), xml);
}

#[test]
fn test_indentation_and_line_breaks() {
    assert_eq!(
        format_single("<a><b><c/></b></a>"),
        format!(
            "&lt;a&gt;<br/>{i}&lt;b&gt;<br/>{i}{i}&lt;c/&gt;<br/>{i}&lt;/b&gt;<br/>&lt;/a&gt;",
            i = INDENT
        )
    );
}

#[test]
fn test_layout_whitespace_is_replaced() {
    assert_eq!(
        format_single("<a>\n    <b/>\n</a>"),
        format_single("<a><b/></a>")
    );
}

#[test]
fn test_escaped_once_per_level() {
    // the XML escape of & is shown as source text
    assert_eq!(
        format_single(r#"<a b="&amp;">1 &lt; 2</a>"#),
        "&lt;a b=&quot;&amp;amp;&quot;&gt;1 &amp;lt; 2&lt;/a&gt;"
    );
}

#[test]
fn test_no_highlight_without_comparison() {
    assert!(!format_single(r#"<a b="1"><c d="2"/></a>"#).contains("<span"));
}

#[test]
fn test_multiple_top_level_nodes() {
    assert_eq!(
        format_single("<?xml version=\"1.0\"?><!--c--><a/><b/>"),
        "&lt;!--c--&gt;<br/>&lt;a/&gt;<br/>&lt;b/&gt;"
    );
}

#[test]
fn test_deterministic() {
    let xml = r#"<a x="1" y="2"><b>text</b><!--c--><d/></a>"#;
    assert_eq!(format_single(xml), format_single(xml));
}

#[test]
fn test_custom_parameters() {
    let formatter = Formatter::new(Parameters {
        placeholder: "n/a".to_string(),
        line_break: "<br>".to_string(),
        indentation: "  ".to_string(),
        highlight: HighlightStyle::default(),
    });
    assert_eq!(formatter.format(None), "n/a");
    assert_eq!(formatter.format("<a><b/></a>"), "&lt;a&gt;<br>  &lt;b/&gt;<br>&lt;/a&gt;");
}

#[test]
fn test_doctype_is_dropped() {
    assert_eq!(
        format_single("<?xml version=\"1.0\"?>\n<!DOCTYPE a [<!ELEMENT a (b)>]>\n<a><b/></a>"),
        format_single("<a><b/></a>")
    );
}

#[test]
fn test_byte_order_mark_is_skipped() {
    assert_eq!(format_single("\u{feff}<a/>"), "&lt;a/&gt;");
}
