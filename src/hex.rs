const TABLE: &[u8; 16] = b"0123456789abcdef";

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut output = Vec::with_capacity(input.len() * 2);
    for byte in input {
        output.push(TABLE[(byte >> 4) as usize]);
        output.push(TABLE[(byte & 0x0F) as usize]);
    }
    unsafe { String::from_utf8_unchecked(output) }
}

#[cfg(test)]
mod tests {
    #[test]
    fn encode() {
        assert_eq!(super::encode(b"Hello world"), "48656c6c6f20776f726c64");
        assert_eq!(super::encode(b""), "");
        assert_eq!(super::encode([0x00, 0xff]), "00ff");
    }
}
