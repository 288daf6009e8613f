//! Proptest support
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. These strategies generate arbitrary XML elements as
//! [`FixedElement`] values; render them with
//! [`FixedElement::to_xml_string`] to get input for the formatter.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! xmlhighlight = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use ahash::HashSet;
use proptest::prelude::*;

use crate::fixed::{FixedContent, FixedElement};

const ELEMENT_NAMES: &[&str] = &["a", "b", "c", "d", "e"];
const ATTRIBUTE_NAMES: &[&str] = &["q", "r", "s"];
const PI_NAMES: &[&str] = &["pi1", "pi2", "pi3", "pi4", "pi5"];
const XML_STRING: &str = "[\u{000a}\u{0009}\u{0020}-\u{D7FF}\u{E000}-\u{FFFD}]*";
const XML_STRING_WITHOUT_WHITESPACE: &str = "[\u{0021}-\u{D7FF}\u{E000}-\u{FFFD}]*";

fn arb_attribute() -> impl Strategy<Value = (String, String)> {
    (prop::sample::select(ATTRIBUTE_NAMES), XML_STRING_WITHOUT_WHITESPACE)
        .prop_map(|(name, value)| (name.to_string(), value))
}

fn arb_comment() -> impl Strategy<Value = String> {
    XML_STRING.prop_filter("comment", |s| !s.contains('-'))
}

fn arb_processing_instruction() -> impl Strategy<Value = (String, Option<String>)> {
    (
        prop::sample::select(PI_NAMES),
        prop::option::of(
            XML_STRING_WITHOUT_WHITESPACE
                .prop_filter("non-empty string", |s| !s.is_empty() && !s.contains("?>")),
        ),
    )
        .prop_map(|(target, data)| (target.to_string(), data))
}

/// Arbitrary element content, including nested elements.
pub fn arb_fixed_content() -> impl Strategy<Value = FixedContent> {
    let leaf = prop_oneof![
        XML_STRING.prop_map(FixedContent::Text),
        arb_comment().prop_map(FixedContent::Comment),
        arb_processing_instruction()
            .prop_map(|(target, data)| FixedContent::ProcessingInstruction(target, data)),
    ];

    leaf.prop_recursive(
        8,   // levels deep
        256, // maximum size of 256 nodes
        10,  // up to 10 items per collection
        |inner| {
            (
                prop::sample::select(ELEMENT_NAMES),
                prop::collection::vec(inner, 0..10),
                prop::collection::vec(arb_attribute(), 0..4),
            )
                .prop_map(|(name, children, attributes)| {
                    FixedContent::Element(FixedElement {
                        name: name.to_string(),
                        attributes: unduplicate_attributes(attributes.as_slice()),
                        children,
                    })
                })
        },
    )
}

prop_compose! {
    /// An arbitrary element.
    pub fn arb_fixed_element()(name in prop::sample::select(ELEMENT_NAMES),
                               children in prop::collection::vec(arb_fixed_content(), 0..4),
                               attributes in prop::collection::vec(arb_attribute(), 0..4)) -> FixedElement {
        FixedElement {
            name: name.to_string(),
            attributes: unduplicate_attributes(attributes.as_slice()),
            children,
        }
    }
}

fn unduplicate_attributes(attributes: &[(String, String)]) -> Vec<(String, String)> {
    let mut seen = HashSet::default();
    attributes
        .iter()
        .filter(|(name, _)| seen.insert(name.clone()))
        .cloned()
        .collect()
}
