//! Mapping between console input slots (1-9) and board positions.

use crate::games::tictactoe::Position;
use serde::{Deserialize, Serialize};

/// Layout of the 9 input slots over the board.
///
/// Each layout is a bijection between slots `1..=9` and the 9 positions.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Keymap {
    /// `1 2 3` on the top row, reading order.
    #[default]
    RowMajor,
    /// `7 8 9` on the top row, like a numeric keypad.
    Numpad,
}

impl Keymap {
    /// Board position for a slot, or `None` outside `1..=9`.
    pub fn to_position(self, slot: u8) -> Option<Position> {
        if !(1..=9).contains(&slot) {
            return None;
        }
        let offset = usize::from(slot - 1);
        let index = match self {
            Keymap::RowMajor => offset,
            Keymap::Numpad => (2 - offset / 3) * 3 + offset % 3,
        };
        Position::from_index(index)
    }

    /// Slot that selects `pos`.
    pub fn slot_of(self, pos: Position) -> u8 {
        let index = pos.to_index();
        let offset = match self {
            Keymap::RowMajor => index,
            Keymap::Numpad => (2 - index / 3) * 3 + index % 3,
        };
        // index < 9, so the offset fits
        offset as u8 + 1
    }
}
