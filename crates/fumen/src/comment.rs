//! Page comments: 4 characters per 5-digit value, then percent-unescaped.

use crate::error::DecodeError;
use crate::values::Values;

const COMMENT_TABLE: &[u8] =
    b" !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

const COMMENT_BASE: u32 = COMMENT_TABLE.len() as u32 + 1;

/// Read one comment (length prefix + character groups) from the stream.
pub fn read_comment(values: &mut Values) -> Result<String, DecodeError> {
    let len = values.poll(2)? as usize;
    let mut escaped = String::with_capacity(len + 3);
    for _ in 0..(len + 3) / 4 {
        let mut value = values.poll(5)?;
        for _ in 0..4 {
            let index = value % COMMENT_BASE;
            let ch = COMMENT_TABLE
                .get(index as usize)
                .ok_or(DecodeError::InvalidComment(index))?;
            escaped.push(*ch as char);
            value /= COMMENT_BASE;
        }
    }
    escaped.truncate(len);
    Ok(unescape(&escaped))
}

/// Undo JavaScript-style `escape()`: `%XX` and `%uXXXX`.
///
/// Malformed sequences are kept verbatim.
pub fn unescape(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut units: Vec<u16> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if bytes.get(i + 1) == Some(&b'u') {
                if let Some(unit) = hex_at(s, i + 2, 4) {
                    units.push(unit);
                    i += 6;
                    continue;
                }
            } else if let Some(unit) = hex_at(s, i + 1, 2) {
                units.push(unit);
                i += 3;
                continue;
            }
        }
        units.push(bytes[i] as u16);
        i += 1;
    }
    char::decode_utf16(units)
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

fn hex_at(s: &str, start: usize, len: usize) -> Option<u16> {
    let digits = s.get(start..start + len)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}
