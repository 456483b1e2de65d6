use super::{Alphabet, ALPHABET};
use crate::alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
    MalformedGroupLength { length: usize, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Self::MalformedGroupLength { length, index } => {
                write!(f, "Malformed group of length {} at index {}", length, index)
            }
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Strips trailing padding, then decodes windows of 4 characters (the
    /// last window may hold 2 or 3). Padding anywhere but the trailing
    /// suffix is rejected as an invalid character, and a residual window of
    /// a single character cannot carry a whole byte, so it is malformed.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        let mut end = input.len();
        while end > 0 && self.alphabet.is_padding(input[end - 1]) {
            end -= 1;
        }
        let input = &input[..end];
        let mut output_index = 0;
        let mut index = 0;
        while index < input.len() {
            let window = &input[index..input.len().min(index + 4)];
            let mut indices = [0u32; 4];
            for (offset, &character) in window.iter().enumerate() {
                indices[offset] = self.alphabet.decode(character, index + offset)? as u32;
            }
            let mut emit = |byte: u32| -> Result<(), Error> {
                *output.get_mut(output_index).ok_or(Error::BufferTooSmall)? = byte as u8;
                output_index += 1;
                Ok(())
            };
            match window.len() {
                4 => {
                    let accumulator = indices[0] << 18 | indices[1] << 12 | indices[2] << 6 | indices[3];
                    emit((accumulator >> 16) & 0xFF)?;
                    emit((accumulator >> 8) & 0xFF)?;
                    emit(accumulator & 0xFF)?;
                }
                3 => {
                    let accumulator = indices[0] << 12 | indices[1] << 6 | indices[2];
                    emit((accumulator >> 10) & 0xFF)?;
                    emit((accumulator >> 2) & 0xFF)?;
                }
                2 => {
                    let accumulator = indices[0] << 6 | indices[1];
                    emit((accumulator >> 4) & 0xFF)?;
                }
                length => return Err(Error::MalformedGroupLength { length, index }),
            }
            index += window.len();
        }
        Ok(output_index)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let mut output = vec![0u8; input.as_ref().len().div_ceil(4) * 3];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }

    /// Decodes and interprets the bytes as UTF-8, substituting the
    /// replacement character for malformed subsequences rather than failing.
    pub fn decode_string(&self, input: impl AsRef<[u8]>) -> Result<String, Error> {
        Ok(String::from_utf8_lossy(&self.decode(input)?).into_owned())
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_string(input: impl AsRef<[u8]>) -> Result<String, Error> {
    Decoder::default().decode_string(input)
}
