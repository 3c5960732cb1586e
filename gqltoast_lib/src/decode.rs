//! HTML entity decoding for messages that an upstream layer may have escaped.

use std::borrow::Cow;

use quick_xml::escape::{resolve_html5_entity, unescape_with};

/// Longest entity name considered, `&` and `;` excluded.
const MAX_ENTITY_LEN: usize = 32;

/// Turns escaped text back into what the user should read.
pub trait EntityDecoder {
    fn decode<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Resolves HTML5 named entities and numeric character references.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEntityDecoder;

impl EntityDecoder for HtmlEntityDecoder {
    fn decode<'a>(&self, text: &'a str) -> Cow<'a, str> {
        decode_entities(text)
    }
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDecoder;

impl EntityDecoder for PlainDecoder {
    fn decode<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

impl<D: EntityDecoder + ?Sized> EntityDecoder for &D {
    fn decode<'a>(&self, text: &'a str) -> Cow<'a, str> {
        (**self).decode(text)
    }
}

impl<D: EntityDecoder + ?Sized> EntityDecoder for Box<D> {
    fn decode<'a>(&self, text: &'a str) -> Cow<'a, str> {
        (**self).decode(text)
    }
}

/// Decodes every recognizable `&name;`, `&#NN;` and `&#xHH;` reference.
///
/// Anything that does not resolve (unknown names, a bare `&`, invalid code
/// points) is copied through unchanged, so this never fails. Text without
/// an `&` is returned borrowed.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let resolved = entity_len(tail).and_then(|len| {
            unescape_with(&tail[..len], resolve_html5_entity)
                .ok()
                .map(|decoded| (len, decoded))
        });
        match resolved {
            Some((len, decoded)) => {
                out.push_str(&decoded);
                rest = &tail[len..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Byte length of the `&...;` reference that starts `tail`, delimiters
/// included, or `None` if `tail` does not start with one.
fn entity_len(tail: &str) -> Option<usize> {
    let name_len = tail
        .bytes()
        .skip(1)
        .take(MAX_ENTITY_LEN + 1)
        .position(|b| !(b.is_ascii_alphanumeric() || b == b'#'))?;
    (name_len > 0 && tail.as_bytes().get(name_len + 1) == Some(&b';')).then_some(name_len + 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_named_entities() {
        assert_eq!(decode_entities("bad query &amp; stop"), "bad query & stop");
        assert_eq!(decode_entities("&lt;b&gt;bold&lt;/b&gt;"), "<b>bold</b>");
        assert_eq!(decode_entities("&quot;quoted&quot; &apos;x&apos;"), "\"quoted\" 'x'");
    }

    #[test]
    fn decodes_html5_only_entities() {
        assert_eq!(decode_entities("caf&eacute;"), "café");
        assert_eq!(decode_entities("a&nbsp;b"), "a\u{a0}b");
        assert_eq!(decode_entities("&copy; 2024"), "© 2024");
    }

    #[test]
    fn decodes_numeric_references() {
        assert_eq!(decode_entities("it&#39;s"), "it's");
        assert_eq!(decode_entities("&#x26; &#x3C;"), "& <");
    }

    #[test]
    fn plain_text_is_borrowed_and_unchanged() {
        let decoded = decode_entities("plain text");
        assert_eq!(decoded, "plain text");
        assert!(matches!(decoded, Cow::Borrowed(_)));
    }

    #[test]
    fn decoding_plain_output_again_is_stable() {
        let once = decode_entities("bad query &amp; stop").into_owned();
        assert_eq!(decode_entities(&once), once);
    }

    #[test]
    fn unknown_entity_is_kept() {
        assert_eq!(decode_entities("&notanentity; ok"), "&notanentity; ok");
    }

    #[test]
    fn bare_ampersand_is_kept() {
        assert_eq!(decode_entities("Tom & Jerry"), "Tom & Jerry");
        assert_eq!(decode_entities("trailing &"), "trailing &");
        assert_eq!(decode_entities("&;"), "&;");
        assert_eq!(decode_entities("&amp"), "&amp");
    }

    #[test]
    fn invalid_code_point_is_kept() {
        assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
    }

    #[test]
    fn overlong_name_is_kept() {
        let text = format!("&{};", "a".repeat(MAX_ENTITY_LEN + 1));
        assert_eq!(decode_entities(&text), text);
    }

    #[test]
    fn adjacent_references() {
        assert_eq!(decode_entities("&amp;&amp;&lt;"), "&&<");
        assert_eq!(decode_entities("& &amp;"), "& &");
    }

    #[test]
    fn multibyte_text_around_entities() {
        assert_eq!(decode_entities("ошибка &amp; 错误"), "ошибка & 错误");
    }

    #[test]
    fn plain_decoder_is_identity() {
        assert_eq!(PlainDecoder.decode("a &amp; b"), "a &amp; b");
    }

    #[test]
    fn boxed_decoder_forwards() {
        let decoder: Box<dyn EntityDecoder> = Box::new(HtmlEntityDecoder);
        assert_eq!(decoder.decode("1 &lt; 2"), "1 < 2");
    }
}
