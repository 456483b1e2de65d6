pub mod decode;
pub mod encode;

pub use crate::alphabet::Alphabet;

pub const ALPHABET: Alphabet = match Alphabet::new(b"Vg21WQ5KdRt0yNpcr9m4O3PoHaZvsLeCY8FjSwiTkUbuEBIJlAG7fqXM6xDnzh-;", b'_') {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub use decode::{decode, decode_into, decode_string, Decoder};
pub use encode::{encode, encode_into, Encoder};
