//! Strict byte-to-text decoding.

use milinda_core::TextEncoding;

const UTF8_BOM: char = '\u{feff}';

/// Decode `bytes` under `encoding`.
///
/// Malformed input is never replaced: returns `None` instead. A leading
/// UTF-8 byte order mark is dropped.
#[must_use]
pub fn decode(bytes: &[u8], encoding: TextEncoding) -> Option<String> {
    let codec = match encoding {
        TextEncoding::Utf8 => encoding_rs::UTF_8,
        TextEncoding::Windows1251 => encoding_rs::WINDOWS_1251,
    };

    let text = codec.decode_without_bom_handling_and_without_replacement(bytes)?;

    match encoding {
        TextEncoding::Utf8 => Some(
            text.strip_prefix(UTF8_BOM)
                .map_or_else(|| text.to_string(), str::to_string),
        ),
        TextEncoding::Windows1251 => Some(text.into_owned()),
    }
}
