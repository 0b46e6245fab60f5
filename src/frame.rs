use crate::constants::{command, CELL_COUNT, FRAME_LEN};
use crate::text::OverlongText;

/// Lays out `cells` as a display RAM write: the RAM address byte followed by
/// each cell's mask, little-endian. Slots past `cells.len()` stay blank.
pub fn build(cells: &[u16]) -> Result<[u8; FRAME_LEN], OverlongText> {
    if cells.len() > CELL_COUNT {
        return Err(OverlongText { cells: cells.len() });
    }

    let mut frame = [0; FRAME_LEN];
    frame[0] = command::DISPLAY_RAM;
    for (slot, mask) in frame[1..].chunks_exact_mut(2).zip(cells) {
        slot.copy_from_slice(&mask.to_le_bytes());
    }
    Ok(frame)
}
