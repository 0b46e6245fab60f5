use core::fmt;

use heapless::LinearMap;

use crate::constants::EXTRA_GLYPHS;

const FIRST_CODE: u32 = 0x20; // ' '
const LAST_CODE: u32 = 0x7E; // '~'
const SLOTS: usize = (LAST_CODE - FIRST_CODE + 1) as usize;
const LITERAL_BITS: usize = 16;

/// Errors raised while building a [`CharMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CharMapError {
    /// A mask literal was not exactly sixteen `'0'`/`'1'` characters.
    InvalidLiteral,
    /// No room left for another glyph outside printable ASCII.
    ExtraGlyphsFull(char),
}

impl fmt::Display for CharMapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CharMapError::InvalidLiteral => {
                write!(f, "Segment literal must be 16 binary digits")
            }
            CharMapError::ExtraGlyphsFull(c) => write!(
                f,
                "No room for {:?}, map holds {} glyphs outside printable ASCII",
                c, EXTRA_GLYPHS
            ),
        }
    }
}

/// Parses a 16-digit, MSB-first binary string such as `"0000000011110111"`
/// into a segment mask.
pub const fn decode_mask_literal(literal: &str) -> Result<u16, CharMapError> {
    let bytes = literal.as_bytes();
    if bytes.len() != LITERAL_BITS {
        return Err(CharMapError::InvalidLiteral);
    }

    let mut mask: u16 = 0;
    let mut i = 0;
    while i < LITERAL_BITS {
        mask = match bytes[i] {
            b'0' => mask << 1,
            b'1' => (mask << 1) | 1,
            _ => return Err(CharMapError::InvalidLiteral),
        };
        i += 1;
    }
    Ok(mask)
}

const fn slot(c: char) -> Option<usize> {
    let code = c as u32;
    if code >= FIRST_CODE && code <= LAST_CODE {
        Some((code - FIRST_CODE) as usize)
    } else {
        None
    }
}

/// Immutable character to segment-mask table.
///
/// Printable ASCII lives in a flat array; up to [`EXTRA_GLYPHS`] other
/// characters (`'°'`, control codes, ...) can be added on top. Anything the
/// table does not assign looks up as `0x0000` (blank).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharMap {
    masks: [u16; SLOTS],
    extra: LinearMap<char, u16, EXTRA_GLYPHS>,
}

impl CharMap {
    /// A table with every character blank.
    pub const fn empty() -> Self {
        Self {
            masks: [0; SLOTS],
            extra: LinearMap::new(),
        }
    }

    /// Builds a table from `(char, "0000000000000000")` pairs. Later entries
    /// replace earlier ones for the same character.
    pub fn from_literals(entries: &[(char, &str)]) -> Result<Self, CharMapError> {
        let mut map = Self::empty();
        for &(c, literal) in entries {
            map.set(c, decode_mask_literal(literal)?)?;
        }
        Ok(map)
    }

    pub fn from_masks(entries: &[(char, u16)]) -> Result<Self, CharMapError> {
        let mut map = Self::empty();
        for &(c, mask) in entries {
            map.set(c, mask)?;
        }
        Ok(map)
    }

    /// Returns a copy of this table with `c` drawn as `mask`.
    pub fn with(&self, c: char, mask: u16) -> Result<Self, CharMapError> {
        let mut map = self.clone();
        map.set(c, mask)?;
        Ok(map)
    }

    pub fn lookup(&self, c: char) -> u16 {
        match slot(c) {
            Some(index) => self.masks[index],
            None => self.extra.get(&c).copied().unwrap_or(0),
        }
    }

    fn set(&mut self, c: char, mask: u16) -> Result<(), CharMapError> {
        match slot(c) {
            Some(index) => self.masks[index] = mask,
            None => {
                self.extra
                    .insert(c, mask)
                    .map_err(|_| CharMapError::ExtraGlyphsFull(c))?;
            }
        }
        Ok(())
    }
}

impl Default for CharMap {
    fn default() -> Self {
        DEFAULT_CHAR_MAP.clone()
    }
}

/// Default glyphs for the Adafruit 0.54" quad alphanumeric backpack.
pub static DEFAULT_CHAR_MAP: CharMap = build_default();

const fn build_default() -> CharMap {
    let mut masks = [0; SLOTS];
    let mut i = 0;
    while i < DEFAULT_LITERALS.len() {
        let (c, literal) = DEFAULT_LITERALS[i];
        let index = match slot(c) {
            Some(index) => index,
            None => panic!("default glyph outside printable ASCII"),
        };
        masks[index] = match decode_mask_literal(literal) {
            Ok(mask) => mask,
            Err(_) => panic!("malformed default glyph literal"),
        };
        i += 1;
    }
    CharMap {
        masks,
        extra: LinearMap::new(),
    }
}

/// Source literals of [`DEFAULT_CHAR_MAP`], MSB first.
pub const DEFAULT_LITERALS: &[(char, &str)] = &[
    (' ', "0000000000000000"),
    ('!', "0000000000000110"),
    ('"', "0000001000100000"),
    ('#', "0001001011001110"),
    ('$', "0001001011101101"),
    ('%', "0000110000100100"),
    ('&', "0010001101011101"),
    ('\'', "0000010000000000"),
    ('(', "0010010000000000"),
    (')', "0000100100000000"),
    ('*', "0011111111000000"),
    ('+', "0001001011000000"),
    (',', "0000100000000000"),
    ('-', "0000000011000000"),
    ('.', "0000000000000000"),
    ('/', "0000110000000000"),
    ('0', "0000110000111111"),
    ('1', "0000000000000110"),
    ('2', "0000000011011011"),
    ('3', "0000000010001111"),
    ('4', "0000000011100110"),
    ('5', "0010000001101001"),
    ('6', "0000000011111101"),
    ('7', "0000000000000111"),
    ('8', "0000000011111111"),
    ('9', "0000000011101111"),
    (':', "0001001000000000"),
    (';', "0000101000000000"),
    ('<', "0010010000000000"),
    ('=', "0000000011001000"),
    ('>', "0000100100000000"),
    ('?', "0001000010000011"),
    ('@', "0000001010111011"),
    ('A', "0000000011110111"),
    ('B', "0001001010001111"),
    ('C', "0000000000111001"),
    ('D', "0001001000001111"),
    ('E', "0000000011111001"),
    ('F', "0000000001110001"),
    ('G', "0000000010111101"),
    ('H', "0000000011110110"),
    ('I', "0001001000000000"),
    ('J', "0000000000011110"),
    ('K', "0010010001110000"),
    ('L', "0000000000111000"),
    ('M', "0000010100110110"),
    ('N', "0010000100110110"),
    ('O', "0000000000111111"),
    ('P', "0000000011110011"),
    ('Q', "0010000000111111"),
    ('R', "0010000011110011"),
    ('S', "0000000011101101"),
    ('T', "0001001000000001"),
    ('U', "0000000000111110"),
    ('V', "0000110000110000"),
    ('W', "0010100000110110"),
    ('X', "0010110100000000"),
    ('Y', "0001010100000000"),
    ('Z', "0000110000001001"),
    ('[', "0000000000111001"), // alt: 0010000100000000
    (']', "0000000000001111"),
    ('^', "0000110000000011"),
    ('_', "0000000000001000"),
    ('`', "0000000100000000"),
    ('a', "0001000001011000"),
    ('b', "0010000001111000"),
    ('c', "0000000011011000"),
    ('d', "0000100010001110"),
    ('e', "0000100001011000"),
    ('f', "0000000001110001"),
    ('g', "0000010010001110"),
    ('h', "0001000001110000"),
    ('i', "0001000000000000"),
    ('j', "0000000000001110"),
    ('k', "0011011000000000"),
    ('l', "0000000000110000"),
    ('m', "0001000011010100"),
    ('n', "0001000001010000"),
    ('o', "0000000011011100"),
    ('p', "0000000101110000"),
    ('q', "0000010010000110"),
    ('r', "0000000001010000"),
    ('s', "0010000010001000"),
    ('t', "0000000001111000"),
    ('u', "0000000000011100"),
    ('v', "0010000000000100"),
    ('w', "0010100000010100"),
    ('x', "0010100011000000"),
    ('y', "0010000000001100"),
    ('z', "0000100001001000"),
    ('{', "0000100101001001"),
    ('|', "0001001000000000"),
    ('}', "0010010010001001"),
    ('~', "0000010100100000"),
];
