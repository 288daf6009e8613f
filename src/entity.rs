use std::borrow::Cow;

use crate::error::Error;

pub(crate) fn parse_entities(content: Cow<str>) -> Result<Cow<str>, Error> {
    if !content.contains('&') {
        return Ok(content);
    }
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c == '&' {
            let mut entity = String::new();
            let mut is_complete = false;
            for c in chars.by_ref() {
                if c == ';' {
                    is_complete = true;
                    break;
                }
                entity.push(c);
            }
            if !is_complete {
                return Err(Error::UnclosedEntity(entity));
            }
            match entity.as_str() {
                "amp" => result.push('&'),
                "apos" => result.push('\''),
                "gt" => result.push('>'),
                "lt" => result.push('<'),
                "quot" => result.push('"'),
                _ => result.push(parse_character_reference(&entity)?),
            }
        } else {
            result.push(c);
        }
    }
    Ok(result.into())
}

fn parse_character_reference(entity: &str) -> Result<char, Error> {
    let code = if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(decimal) = entity.strip_prefix('#') {
        decimal.parse::<u32>().ok()
    } else {
        None
    };
    code.and_then(char::from_u32)
        .filter(|c| is_xml_char(*c))
        .ok_or_else(|| Error::InvalidEntity(entity.to_string()))
}

// the XML `Char` production
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Replace literal line breaks and tabs in a raw attribute value with
/// spaces. A CR LF pair becomes a single space. Character references are
/// not affected, as this runs before [`parse_entities`].
pub(crate) fn normalize_attribute_whitespace(content: Cow<str>) -> Cow<str> {
    if !content.contains(|c: char| matches!(c, '\t' | '\n' | '\r')) {
        return content;
    }
    content
        .replace("\r\n", " ")
        .replace(|c: char| matches!(c, '\t' | '\n' | '\r'), " ")
        .into()
}

fn escape<'a>(content: Cow<'a, str>, replace: impl Fn(char) -> Option<&'static str>) -> Cow<'a, str> {
    if !content.chars().any(|c| replace(c).is_some()) {
        return content;
    }
    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match replace(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    result.into()
}

pub(crate) fn serialize_text(content: Cow<str>) -> Cow<str> {
    escape(content, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    })
}

pub(crate) fn serialize_attribute(content: Cow<str>) -> Cow<str> {
    escape(content, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '"' => Some("&quot;"),
        _ => None,
    })
}

/// Escape text so it can be embedded in HTML as-is.
pub(crate) fn escape_html(content: Cow<str>) -> Cow<str> {
    escape(content, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let text = "A &amp; B";
        assert_eq!(parse_entities(text.into()).unwrap(), "A & B");
    }

    #[test]
    fn test_parse_multiple() {
        let text = "&amp;&apos;&gt;&lt;&quot;";
        assert_eq!(parse_entities(text.into()).unwrap(), "&'><\"");
    }

    #[test]
    fn test_parse_character_references() {
        let text = "&#65;&#x42;&#X43;";
        assert_eq!(parse_entities(text.into()).unwrap(), "ABC");
    }

    #[test]
    fn test_parse_unknown_entity() {
        let err = parse_entities("&unknown;".into());
        if let Err(Error::InvalidEntity(entity)) = err {
            assert_eq!(entity, "unknown");
        } else {
            unreachable!();
        }
    }

    #[test]
    fn test_parse_invalid_character_reference() {
        let err = parse_entities("&#xD800;".into());
        assert!(matches!(err, Err(Error::InvalidEntity(_))));
    }

    #[test]
    fn test_parse_character_reference_outside_xml_chars() {
        for text in ["&#0;", "&#x1;", "&#xFFFE;", "&#xFFFF;"] {
            let err = parse_entities(text.into());
            assert!(matches!(err, Err(Error::InvalidEntity(_))), "{}", text);
        }
        assert_eq!(parse_entities("&#9;&#10;&#13;&#x10FFFF;".into()).unwrap(), "\t\n\r\u{10FFFF}");
    }

    #[test]
    fn test_normalize_attribute_whitespace() {
        assert_eq!(normalize_attribute_whitespace("x\ny\tz".into()), "x y z");
        assert_eq!(normalize_attribute_whitespace("x\r\ny\rz".into()), "x y z");
        let text = "plain &#10;";
        let result = normalize_attribute_whitespace(text.into());
        assert!(std::ptr::eq(text, result.as_ref()));
    }

    #[test]
    fn test_parse_unfinished_entity() {
        let err = parse_entities("&amp".into());
        if let Err(Error::UnclosedEntity(entity)) = err {
            assert_eq!(entity, "amp");
        } else {
            unreachable!();
        }
    }

    #[test]
    fn test_parse_no_entities() {
        let text = "hello";
        let result = parse_entities(text.into()).unwrap();
        // this is the same slice
        assert!(std::ptr::eq(text, result.as_ref()));
    }

    #[test]
    fn test_serialize_text() {
        assert_eq!(serialize_text("A & <B> \"q\"".into()), "A &amp; &lt;B&gt; \"q\"");
    }

    #[test]
    fn test_serialize_attribute() {
        assert_eq!(
            serialize_attribute("A & <B> \"q\"".into()),
            "A &amp; &lt;B> &quot;q&quot;"
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a b=\"c\" d='e'>&amp;</a>".into()),
            "&lt;a b=&quot;c&quot; d=&#39;e&#39;&gt;&amp;amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_no_entities() {
        let text = "hello";
        let result = escape_html(text.into());
        assert!(std::ptr::eq(text, result.as_ref()));
    }
}
