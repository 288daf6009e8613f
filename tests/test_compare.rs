use xmlhighlight::{format_pair, format_single, Error, Formatter, Recovery};

const SPAN: &str = "<span style='background-color: #b36b00; color: white'>";
const INDENT: &str = "&nbsp;&nbsp;&nbsp;&nbsp;";

fn highlighted(text: &str) -> String {
    format!("{}{}</span>", SPAN, text)
}

#[test]
fn test_identical_documents_no_highlight() {
    let xml = r#"<root a="1" b="2"><x c="3">text</x><!--note--><y/></root>"#;
    let result = format_pair(xml, xml).unwrap();
    assert!(!result.left().contains(SPAN));
    assert!(!result.right().contains(SPAN));
    assert_eq!(result.left(), format_single(xml));
    assert_eq!(result.right(), format_single(xml));
}

#[test]
fn test_text_content_not_compared() {
    let result = format_pair("<a>one</a>", "<a>two</a>").unwrap();
    assert!(!result.left().contains(SPAN));
    assert!(!result.right().contains(SPAN));
}

#[test]
fn test_attribute_value_differs() {
    let result =
        format_pair("<root attr='1'><x/></root>", "<root attr='2'><x/></root>").unwrap();
    assert_eq!(
        result.left(),
        format!(
            "&lt;root attr=&quot;{}&quot;&gt;<br/>{}&lt;x/&gt;<br/>&lt;/root&gt;",
            highlighted("1"),
            INDENT
        )
    );
    assert_eq!(
        result.right(),
        format!(
            "&lt;root attr=&quot;{}&quot;&gt;<br/>{}&lt;x/&gt;<br/>&lt;/root&gt;",
            highlighted("2"),
            INDENT
        )
    );
}

#[test]
fn test_exactly_one_span_per_differing_attribute() {
    let result = format_pair(
        r#"<a x="1" y="same"><b z="deep"/></a>"#,
        r#"<a x="1" y="other"><b z="deep"/></a>"#,
    )
    .unwrap();
    assert_eq!(result.left().matches(SPAN).count(), 1);
    assert_eq!(result.right().matches(SPAN).count(), 1);
    assert!(result.left().contains(&highlighted("same")));
    assert!(result.right().contains(&highlighted("other")));
}

#[test]
fn test_attribute_name_differs() {
    let result = format_pair(r#"<a x="1"/>"#, r#"<a y="1"/>"#).unwrap();
    assert_eq!(
        result.left(),
        format!("&lt;a x=&quot;{}&quot;/&gt;", highlighted("1"))
    );
    assert_eq!(
        result.right(),
        format!("&lt;a y=&quot;{}&quot;/&gt;", highlighted("1"))
    );
}

#[test]
fn test_extra_child_element() {
    let result = format_pair("<root><a/><b/></root>", "<root><a/></root>").unwrap();
    assert_eq!(
        result.left(),
        format!(
            "&lt;root&gt;<br/>{i}&lt;a/&gt;<br/>{i}&lt;{}/&gt;<br/>&lt;/root&gt;",
            highlighted("b"),
            i = INDENT
        )
    );
    assert_eq!(
        result.right(),
        format!("&lt;root&gt;<br/>{i}&lt;a/&gt;<br/>&lt;/root&gt;", i = INDENT)
    );
}

#[test]
fn test_extra_top_level_elements() {
    let result = format_pair(r#"<a x="1"/><b y="2"><c z="3"/></b><d/>"#, r#"<a x="1"/>"#).unwrap();
    assert_eq!(
        result.left(),
        format!(
            "&lt;a x=&quot;1&quot;/&gt;<br/>\
             &lt;{b} y=&quot;{two}&quot;&gt;<br/>\
             {i}&lt;{c} z=&quot;{three}&quot;/&gt;<br/>\
             &lt;/{b}&gt;<br/>\
             &lt;{d}/&gt;",
            b = highlighted("b"),
            c = highlighted("c"),
            d = highlighted("d"),
            two = highlighted("2"),
            three = highlighted("3"),
            i = INDENT
        )
    );
    assert_eq!(result.right(), "&lt;a x=&quot;1&quot;/&gt;");
}

#[test]
fn test_extra_attributes_on_right() {
    let result = format_pair("<a/>", r#"<a x="1" y="2"/>"#).unwrap();
    assert_eq!(result.left(), "&lt;a/&gt;");
    assert_eq!(
        result.right(),
        format!(
            "&lt;a x=&quot;{}&quot; y=&quot;{}&quot;/&gt;",
            highlighted("1"),
            highlighted("2")
        )
    );
}

#[test]
fn test_positional_not_by_name() {
    // b and c swapped: compared by position, so both sides differ
    let result = format_pair(
        r#"<r><b k="1"/><c k="2"/></r>"#,
        r#"<r><c k="2"/><b k="1"/></r>"#,
    )
    .unwrap();
    assert_eq!(result.left().matches(SPAN).count(), 2);
    assert_eq!(result.right().matches(SPAN).count(), 2);
}

#[test]
fn test_highlighted_value_is_escaped() {
    let result = format_pair(r#"<a x="&lt;b&gt;"/>"#, r#"<a x="'"/>"#).unwrap();
    assert_eq!(
        result.left(),
        format!("&lt;a x=&quot;{}&quot;/&gt;", highlighted("&amp;lt;b&gt;"))
    );
    assert_eq!(
        result.right(),
        format!("&lt;a x=&quot;{}&quot;/&gt;", highlighted("&#39;"))
    );
}

#[test]
fn test_markup_lookalike_content_is_not_highlighted() {
    let xml = r#"<a x="START_SPAN" y="&lt;span&gt;">END_SPAN</a>"#;
    let result = format_pair(xml, xml).unwrap();
    assert!(!result.left().contains("<span"));
}

#[test]
fn test_doctype_is_dropped() {
    let result = format_pair(
        r#"<?xml version="1.0"?><!DOCTYPE root SYSTEM "root.dtd"><root x="1"/>"#,
        r#"<!DOCTYPE root><root x="2"/>"#,
    )
    .unwrap();
    assert_eq!(
        result.left(),
        format!("&lt;root x=&quot;{}&quot;/&gt;", highlighted("1"))
    );
    assert_eq!(
        result.right(),
        format!("&lt;root x=&quot;{}&quot;/&gt;", highlighted("2"))
    );
}

#[test]
fn test_attribute_line_breaks_are_spaces() {
    let result = format_pair("<a b=\"x\ny\"/>", r#"<a b="x y"/>"#).unwrap();
    assert_eq!(result.left(), "&lt;a b=&quot;x y&quot;/&gt;");
    assert_eq!(result.right(), "&lt;a b=&quot;x y&quot;/&gt;");
}

#[test]
fn test_byte_order_mark_in_text_input() {
    let result = format_pair("\u{feff}<a x=\"1\"/>", r#"<a x="1"/>"#).unwrap();
    assert_eq!(result.left(), "&lt;a x=&quot;1&quot;/&gt;");
    assert!(!result.right().contains(SPAN));
}

#[test]
fn test_empty_side() {
    let result = format_pair("", "<a/>").unwrap();
    assert_eq!(result.left(), "-");
    assert_eq!(result.right(), format_single("<a/>"));

    let result = format_pair(r#"<a x="1"/>"#, None).unwrap();
    assert_eq!(result.left(), format_single(r#"<a x="1"/>"#));
    assert_eq!(result.right(), "-");
}

#[test]
fn test_whitespace_side_not_compared() {
    let result = format_pair("   ", r#"<a x="1"/>"#).unwrap();
    assert!(!result.right().contains(SPAN));
}

#[test]
fn test_malformed_side_is_error() {
    let err = format_pair("<a><b></a>", "<a/>").unwrap_err();
    assert!(matches!(err, Error::InvalidCloseTag { .. }));
}

#[test]
fn test_malformed_side_per_side_recovery() {
    let formatter = Formatter::default().with_recovery(Recovery::PerSide);
    let result = formatter.compare("<a><b></a>", "<a/>").unwrap();
    assert_eq!(result.left(), "<a><b></a>");
    assert_eq!(result.right(), "&lt;a/&gt;");
}

#[test]
fn test_into_parts() {
    let (left, right) = format_pair("<a/>", "<a/>").unwrap().into_parts();
    assert_eq!(left, "&lt;a/&gt;");
    assert_eq!(right, "&lt;a/&gt;");
}
