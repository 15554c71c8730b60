use std::io;
use std::io::Result;

pub fn strip_non_hex(input: &str) -> String {
    input.chars().filter(char::is_ascii_hexdigit).collect()
}

pub fn decode_pairs(hex: &str) -> Result<Vec<u8>> {
    let digits: Vec<char> = hex.chars().collect();
    let mut bytes = Vec::with_capacity(digits.len() / 2);

    // A dangling digit at the end has no partner and is dropped.
    for pair in digits.chunks_exact(2) {
        match (pair[0].to_digit(16), pair[1].to_digit(16)) {
            (Some(hi), Some(lo)) => bytes.push(((hi << 4) | lo) as u8),
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "Invalid hex digit",
                ));
            }
        }
    }

    Ok(bytes)
}

pub fn encode_pairs(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}

pub fn words_be(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect()
}

pub fn bytes_be(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_be_bytes()).collect()
}
