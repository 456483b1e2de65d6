use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
    PaddingCollision { character: char, index: usize },
    NonAsciiPadding { character: u8 },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Self::PaddingCollision { character, index } => {
                write!(f, "Padding character '{}' also appears in the alphabet at index {}", character, index)
            }
            Self::NonAsciiPadding { character } => write!(f, "Non-ascii padding character {:#02x}", character),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

/// The 64-symbol digit table plus the reserved padding symbol. The padding
/// symbol marks absent output positions at the end of an encoded stream and
/// must not appear in the 64-symbol set.
pub struct Alphabet {
    encode: [u8; 64],
    decode: [Option<u8>; 128],
    padding: u8,
}

impl Alphabet {
    pub const fn new(characters: &[u8; 64], padding: u8) -> Result<Self, Error> {
        if padding >= 128 {
            return Err(Error::NonAsciiPadding { character: padding });
        }

        let mut encode = [0u8; 64];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < encode.len() {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if character == padding {
                return Err(Error::PaddingCollision {
                    character: character as char,
                    index,
                });
            }
            if let Some(v) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: v as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode, padding })
    }

    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    pub fn decode(&self, value: u8, index: usize) -> Result<u8, DecodeError> {
        if value >= 128 {
            return Err(DecodeError::NonAsciiCharacter { index, character: value });
        }
        match self.decode[value as usize] {
            Some(value) => Ok(value),
            None => Err(DecodeError::InvalidCharacter {
                character: value as char,
                index,
            }),
        }
    }

    pub const fn padding(&self) -> u8 {
        self.padding
    }

    pub fn is_padding(&self, value: u8) -> bool {
        value == self.padding
    }

    pub const fn len(&self) -> usize {
        self.encode.len()
    }
}
