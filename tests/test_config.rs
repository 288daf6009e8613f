#![cfg(feature = "serde")]

use xmlhighlight::output::html::Parameters;
use xmlhighlight::{Formatter, Recovery};

#[test]
fn test_parameters_partial_config() {
    let parameters: Parameters =
        serde_json::from_str(r#"{"placeholder": "n/a", "highlight": {"background": "yellow"}}"#)
            .unwrap();
    assert_eq!(parameters.placeholder, "n/a");
    assert_eq!(parameters.line_break, "<br/>");
    assert_eq!(parameters.highlight.background, "yellow");
    assert_eq!(parameters.highlight.foreground, "white");

    let formatter = Formatter::new(parameters);
    assert_eq!(formatter.format(None), "n/a");
}

#[test]
fn test_recovery_config() {
    let recovery: Recovery = serde_json::from_str(r#""PerSide""#).unwrap();
    assert_eq!(recovery, Recovery::PerSide);
}

#[test]
fn test_comparison_result_serialized() {
    let result = xmlhighlight::format_pair("<a/>", "<a/>").unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["left"], "&lt;a/&gt;");
    assert_eq!(json["right"], "&lt;a/&gt;");
}
