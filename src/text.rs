use core::fmt;

use heapless::Vec;

use crate::char_map::CharMap;
use crate::constants::{CELL_COUNT, DOT_MASK};

/// Segment masks for the display cells, leftmost first.
pub type Cells = Vec<u16, CELL_COUNT>;

/// Text needs more cells than the display has.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OverlongText {
    /// Cells the input would have needed.
    pub cells: usize,
}

impl fmt::Display for OverlongText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Text needs {} cells, display has {}",
            self.cells, CELL_COUNT
        )
    }
}

/// Encodes `text` into one segment mask per cell.
///
/// A `.` directly after a character lights that character's decimal point
/// instead of taking a cell of its own. A period that is not absorbed this
/// way (leading, or the second of `".."`) is an ordinary character and gets
/// the map's `'.'` glyph in its own cell.
pub fn encode(text: &str, map: &CharMap) -> Result<Cells, OverlongText> {
    let mut cells = Cells::new();
    let mut needed = 0;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let mut mask = map.lookup(c);
        if chars.next_if_eq(&'.').is_some() {
            mask |= DOT_MASK;
        }

        // keep counting past the limit so the error reports the full width
        needed += 1;
        if needed <= CELL_COUNT {
            cells.push(mask).ok();
        }
    }

    if needed > CELL_COUNT {
        return Err(OverlongText { cells: needed });
    }
    Ok(cells)
}
