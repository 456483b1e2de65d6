use super::{Alphabet, ALPHABET};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Encodes groups of up to 3 bytes into 2, 3 or 4 symbols (one more
    /// symbol than there are bytes), then pads each group to 4 characters.
    /// Only the final group may hold fewer than 3 bytes, so padding only
    /// ever appears as a suffix of the whole output.
    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut index = 0;
        for group in input.as_ref().chunks(3) {
            let mut accumulator: u32 = 0;
            for slot in 0..3 {
                accumulator <<= 8;
                if let Some(&byte) = group.get(slot) {
                    accumulator |= byte as u32;
                }
            }
            for _ in 0..=group.len() {
                *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.alphabet.encode(((accumulator >> 18) & 0x3F) as usize);
                accumulator = (accumulator << 6) & 0xFF_FFFF;
                index += 1;
            }
            for _ in group.len()..3 {
                *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.alphabet.padding();
                index += 1;
            }
        }
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let mut output = vec![0u8; input.as_ref().len().div_ceil(3) * 4];
        let len = self.encode_into(input, &mut output).unwrap();
        output.truncate(len);
        unsafe { String::from_utf8_unchecked(output) }
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}
