use crate::wide::from_wide;

/// Turns the bytes written by a string query into host text. `byte_len` is
/// the size the OS reported; at most one trailing terminator is dropped.
pub(crate) fn project_string(buffer: &[u16], byte_len: u32) -> String {
    let mut len = (byte_len as usize / 2).min(buffer.len());
    if len > 0 && buffer[len - 1] == 0 {
        len -= 1;
    }

    from_wide(&buffer[..len])
}

/// REG_DWORD data is stored little-endian.
pub(crate) fn project_dword(data: [u8; 4]) -> u32 {
    u32::from_le_bytes(data)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn wide(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    #[test]
    fn drops_single_terminator() {
        let mut buffer = wide("C:\\Temp");
        buffer.push(0);
        let byte_len = (buffer.len() * 2) as u32;

        assert_eq!(project_string(&buffer, byte_len), "C:\\Temp");
    }

    #[test]
    fn keeps_data_without_terminator() {
        let buffer = wide("abc");
        assert_eq!(project_string(&buffer, 6), "abc");
    }

    #[test]
    fn only_one_terminator_is_trimmed() {
        let buffer = [b'a' as u16, 0, 0];
        assert_eq!(project_string(&buffer, 6), "a\0");
    }

    #[test]
    fn ignores_buffer_past_reported_size() {
        let mut buffer = [0u16; 512];
        buffer[..2].copy_from_slice(&wide("hi"));
        buffer[2] = 0;
        buffer[3] = b'x' as u16;

        assert_eq!(project_string(&buffer, 6), "hi");
    }

    #[test]
    fn empty_value_projects_to_empty_text() {
        assert_eq!(project_string(&[0u16; 4], 0), "");
        assert_eq!(project_string(&[0u16; 4], 2), "");
    }

    #[test]
    fn odd_byte_count_rounds_down() {
        let buffer = wide("ab");
        assert_eq!(project_string(&buffer, 3), "a");
    }

    #[test]
    fn dword_is_little_endian() {
        assert_eq!(project_dword([42, 0, 0, 0]), 42);
        assert_eq!(project_dword([0xff, 0xff, 0xff, 0xff]), u32::MAX);
        assert_eq!(project_dword([0x78, 0x56, 0x34, 0x12]), 0x1234_5678);
    }
}
