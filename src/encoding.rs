use std::borrow::Cow;

use encoding_rs::Encoding;
use xhtmlchardet::detect;

use crate::error::Error;

fn encoding_label(data: &[u8]) -> String {
    let mut cursor = std::io::Cursor::new(data);
    let charsets = detect(&mut cursor, None).unwrap_or_default();
    // no encoding detected
    charsets
        .into_iter()
        .next()
        .unwrap_or_else(|| "UTF-8".to_string())
}

pub(crate) fn encoding(data: &[u8]) -> Result<&'static Encoding, Error> {
    let label = encoding_label(data);
    Encoding::for_label(label.as_bytes()).ok_or(Error::UnsupportedEncoding(label))
}

/// Decode XML bytes to text, using the encoding announced by a byte order
/// mark or the XML declaration.
pub(crate) fn decode(data: &[u8]) -> Result<Cow<str>, Error> {
    let encoding = encoding(data)?;
    // a byte order mark takes precedence and is stripped
    let (text, used, had_errors) = encoding.decode(data);
    if had_errors {
        return Err(Error::InvalidEncoding(used.name().to_string()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8() {
        let data = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?><a/>";
        let enc = encoding(data).unwrap();
        assert_eq!(enc.name(), "UTF-8");
    }

    #[test]
    fn test_utf8_without_declaration() {
        let data = b"<a/>";
        let enc = encoding(data).unwrap();
        assert_eq!(enc.name(), "UTF-8");
    }

    #[test]
    fn test_iso8859_1() {
        let data = b"<?xml version=\"1.0\" encoding=\"iso-8859-1\"?><a/>";
        let enc = encoding(data).unwrap();
        // windows-1252 is a superset of 8859-1
        assert_eq!(enc.name(), "windows-1252");
    }

    #[test]
    fn test_decode_latin1() {
        let data = b"<?xml version=\"1.0\" encoding=\"iso-8859-1\"?><a>caf\xe9</a>";
        assert_eq!(
            decode(data).unwrap(),
            "<?xml version=\"1.0\" encoding=\"iso-8859-1\"?><a>café</a>"
        );
    }
}
