use ahash::AHashSet;

use crate::xmldata::Node;

/// Something in a tree that can be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// An element with no counterpart. Its tag name is highlighted.
    Element(Node),
    /// The attribute at `index` of `element`. Its value is highlighted.
    Attribute {
        /// The element the attribute belongs to.
        element: Node,
        /// Position of the attribute in the element's attribute list.
        index: usize,
    },
}

/// The set of highlighted elements and attributes.
///
/// Highlights are kept next to the tree rather than in it, so the tree
/// itself is never modified by a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    marks: AHashSet<Mark>,
}

impl Highlights {
    /// Create an empty set of highlights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mark. Marking twice has no further effect.
    pub fn mark(&mut self, mark: Mark) {
        self.marks.insert(mark);
    }

    /// Check whether an element's tag name is highlighted.
    pub fn is_element_highlighted(&self, element: Node) -> bool {
        self.marks.contains(&Mark::Element(element))
    }

    /// Check whether an attribute value is highlighted.
    pub fn is_attribute_highlighted(&self, element: Node, index: usize) -> bool {
        self.marks.contains(&Mark::Attribute { element, index })
    }

    /// The number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Check whether nothing is highlighted.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Iterate over all marks, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Mark> + '_ {
        self.marks.iter()
    }
}

/// A piece of serialized output, either plain or highlighted.
///
/// The serializer produces a sequence of fragments; they are only turned
/// into markup when rendered, see [`output::html`](crate::output::html).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Text that is rendered as-is.
    Plain(String),
    /// Text that is rendered inside highlight markup.
    Highlighted(String),
}

impl Fragment {
    /// The text of the fragment, regardless of highlighting.
    pub fn text(&self) -> &str {
        match self {
            Fragment::Plain(text) | Fragment::Highlighted(text) => text,
        }
    }
}

/// A sequence of fragments where adjacent plain text is merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    fragments: Vec<Fragment>,
}

impl Fragments {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_plain(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Fragment::Plain(last)) = self.fragments.last_mut() {
            last.push_str(text);
        } else {
            self.fragments.push(Fragment::Plain(text.to_string()));
        }
    }

    pub(crate) fn push_highlighted(&mut self, text: &str) {
        self.fragments.push(Fragment::Highlighted(text.to_string()));
    }

    pub(crate) fn push(&mut self, text: &str, highlighted: bool) {
        if highlighted {
            self.push_highlighted(text);
        } else {
            self.push_plain(text);
        }
    }

    // removes a single trailing newline, if present
    pub(crate) fn trim_trailing_newline(&mut self) {
        if let Some(Fragment::Plain(last)) = self.fragments.last_mut() {
            if last.ends_with('\n') {
                last.pop();
                if last.is_empty() {
                    self.fragments.pop();
                }
            }
        }
    }

    /// The fragments in order.
    pub fn as_slice(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The concatenated text of all fragments, without any markup.
    pub fn to_plain_string(&self) -> String {
        self.fragments.iter().map(Fragment::text).collect()
    }
}
