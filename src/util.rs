//! Text decoding helpers.

use std::borrow::Cow;

/// How far into a page to look for a `charset=` declaration.
const CHARSET_SCAN_LEN: usize = 1024;

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. If malformed, tries the hint encoding (from `<meta charset="...">`)
/// 3. Falls back to Windows-1252, which never fails
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Extract the declared charset from the start of an HTML page.
///
/// Matches both `<meta charset="...">` and the `content="text/html; charset=..."`
/// form. Only the first kilobyte is inspected.
pub fn extract_meta_charset(bytes: &[u8]) -> Option<&str> {
    let prefix = &bytes[..bytes.len().min(CHARSET_SCAN_LEN)];

    let pos = prefix
        .windows(8)
        .position(|w| w.eq_ignore_ascii_case(b"charset="))?;
    let mut value = &prefix[pos + 8..];

    if let Some(&quote) = value.first()
        && (quote == b'"' || quote == b'\'')
    {
        value = &value[1..];
    }

    let end = value
        .iter()
        .position(|&b| matches!(b, b'"' | b'\'' | b';' | b'>' | b'/') || b.is_ascii_whitespace())
        .unwrap_or(value.len());
    if end == 0 {
        return None;
    }

    std::str::from_utf8(&value[..end]).ok()
}

/// Decode a page read from disk, honouring its declared charset when the
/// bytes are not valid UTF-8.
pub fn decode_page(bytes: &[u8]) -> Cow<'_, str> {
    decode_text(bytes, extract_meta_charset(bytes))
}
