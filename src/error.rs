use std::fmt;

use xmlparser::TextPos;

/// Errors that can occur while parsing XML input.
///
/// Formatting a single document never surfaces these; comparing two
/// documents does, see [`Recovery`](crate::Recovery).
#[derive(Debug)]
pub enum Error {
    /// An entity was started with `&` but never closed with `;`.
    UnclosedEntity(String),
    /// An entity is not one of the predefined XML entities or a valid
    /// character reference.
    InvalidEntity(String),
    /// A close tag does not match the element that is open.
    InvalidCloseTag {
        /// The name of the open element.
        expected: String,
        /// The name found in the close tag.
        found: String,
        /// Byte position of the close tag.
        position: usize,
    },
    /// A close tag was found while no element was open.
    UnexpectedCloseTag {
        /// The name found in the close tag.
        found: String,
        /// Byte position of the close tag.
        position: usize,
    },
    /// The input ended while this element was still open.
    UnclosedTag(String),
    /// The same attribute name occurs twice on one element.
    DuplicateAttribute {
        /// The attribute name as written.
        name: String,
        /// Byte position of the duplicate attribute.
        position: usize,
    },
    /// Non-whitespace text was found outside of any element.
    TextOutsideElement(String),
    /// The detected character encoding is not supported.
    UnsupportedEncoding(String),
    /// The byte input could not be decoded without errors.
    InvalidEncoding(String),
    /// Tokenizer error.
    Parser(xmlparser::Error),
}

impl Error {
    /// The position in the input the tokenizer reported, if this is a
    /// tokenizer error.
    pub fn text_pos(&self) -> Option<TextPos> {
        match self {
            Error::Parser(e) => Some(e.pos()),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnclosedEntity(entity) => write!(f, "unclosed entity: &{}", entity),
            Error::InvalidEntity(entity) => write!(f, "invalid entity: &{};", entity),
            Error::InvalidCloseTag {
                expected,
                found,
                position,
            } => write!(
                f,
                "close tag </{}> at {} does not match open element <{}>",
                found, position, expected
            ),
            Error::UnexpectedCloseTag { found, position } => {
                write!(f, "close tag </{}> at {} without open element", found, position)
            }
            Error::UnclosedTag(name) => write!(f, "element <{}> is never closed", name),
            Error::DuplicateAttribute { name, position } => {
                write!(f, "duplicate attribute {} at {}", name, position)
            }
            Error::TextOutsideElement(text) => {
                write!(f, "text outside of element: {:?}", text)
            }
            Error::UnsupportedEncoding(label) => write!(f, "unsupported encoding: {}", label),
            Error::InvalidEncoding(label) => {
                write!(f, "input is not valid in encoding {}", label)
            }
            Error::Parser(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parser(e) => Some(e),
            _ => None,
        }
    }
}

impl From<xmlparser::Error> for Error {
    #[inline]
    fn from(e: xmlparser::Error) -> Self {
        Error::Parser(e)
    }
}
