//! Named board positions and their mapping to board indices.

use serde::{Deserialize, Serialize};

/// A square's address on the 3x3 board.
///
/// Discriminants are the row-major indices `0..9`, so index order is also
/// the tie-break order the move selector uses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Position {
    /// Row 0, column 0
    TopLeft = 0,
    /// Row 0, column 1
    TopCenter = 1,
    /// Row 0, column 2
    TopRight = 2,
    /// Row 1, column 0
    MiddleLeft = 3,
    /// Row 1, column 1
    Center = 4,
    /// Row 1, column 2
    MiddleRight = 5,
    /// Row 2, column 0
    BottomLeft = 6,
    /// Row 2, column 1
    BottomCenter = 7,
    /// Row 2, column 2
    BottomRight = 8,
}

impl Position {
    /// Every position in index order.
    pub const ALL: [Position; 9] = {
        use Position::*;
        [
            TopLeft,
            TopCenter,
            TopRight,
            MiddleLeft,
            Center,
            MiddleRight,
            BottomLeft,
            BottomCenter,
            BottomRight,
        ]
    };

    /// Row-major board index.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Position at `index`, or `None` past the last square.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-2) and column (0-2).
    pub fn coordinates(self) -> (usize, usize) {
        (self.to_index() / 3, self.to_index() % 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_roundtrip() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(pos));
            assert_eq!(Position::ALL[index], pos);
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_coordinates() {
        assert_eq!(Position::TopLeft.coordinates(), (0, 0));
        assert_eq!(Position::MiddleRight.coordinates(), (1, 2));
        assert_eq!(Position::BottomCenter.coordinates(), (2, 1));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Position::TopRight.to_string(), "top-right");
        assert_eq!(Position::Center.to_string(), "center");
    }
}
