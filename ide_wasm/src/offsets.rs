/// JS/editor boundary uses UTF-16 code units (CodeMirror positions).
///
/// Returns `None` past the end of `source` or between the two halves of a surrogate pair.
pub fn utf16_offset_to_byte(source: &str, utf16: usize) -> Option<usize> {
    let mut u16_count = 0usize;
    for (byte_idx, ch) in source.char_indices() {
        if u16_count == utf16 {
            return Some(byte_idx);
        }
        if u16_count > utf16 {
            return None;
        }
        u16_count += ch.len_utf16();
    }

    (u16_count == utf16).then_some(source.len())
}

/// Byte offsets past the end clamp to the UTF-16 length of `source`.
pub fn byte_offset_to_utf16_offset(source: &str, byte: usize) -> u32 {
    let prefix = source.get(..byte).unwrap_or(source);
    prefix.encode_utf16().count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf16_to_byte_on_ascii_and_multibyte() {
        let source = "$é😀x";
        assert_eq!(utf16_offset_to_byte(source, 0), Some(0));
        assert_eq!(utf16_offset_to_byte(source, 1), Some(1));
        assert_eq!(utf16_offset_to_byte(source, 2), Some(3));
        assert_eq!(utf16_offset_to_byte(source, 4), Some(7));
        assert_eq!(utf16_offset_to_byte(source, 5), Some(8));
    }

    #[test]
    fn utf16_to_byte_rejects_split_surrogates_and_overflow() {
        assert_eq!(utf16_offset_to_byte("😀", 1), None);
        assert_eq!(utf16_offset_to_byte("ab", 3), None);
        assert_eq!(utf16_offset_to_byte("", 0), Some(0));
    }

    #[test]
    fn byte_to_utf16() {
        let source = "$é😀x";
        assert_eq!(byte_offset_to_utf16_offset(source, 3), 2);
        assert_eq!(byte_offset_to_utf16_offset(source, 7), 4);
        assert_eq!(byte_offset_to_utf16_offset(source, 100), 5);
    }
}
