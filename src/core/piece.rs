//! Sides, ranks and pieces.
//!
//! A piece is a `(Side, Rank)` pair. Ranks carry a power level used by the
//! adjacent-capture rule: General is 6, Soldier is 0.

use serde::{Deserialize, Serialize};

/// One of the two factions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Black,
    Red,
}

impl Side {
    /// Both sides, Black first.
    pub const ALL: [Side; 2] = [Side::Black, Side::Red];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Black => Side::Red,
            Side::Red => Side::Black,
        }
    }

    /// Dense index (Black = 0, Red = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Black => f.write_str("Black"),
            Side::Red => f.write_str("Red"),
        }
    }
}

/// Piece type, strongest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    General,
    Advisor,
    Elephant,
    Horse,
    Chariot,
    Cannon,
    Soldier,
}

impl Rank {
    /// All ranks in descending power.
    pub const ALL: [Rank; 7] = [
        Rank::General,
        Rank::Advisor,
        Rank::Elephant,
        Rank::Horse,
        Rank::Chariot,
        Rank::Cannon,
        Rank::Soldier,
    ];

    /// Power level: General = 6 down to Soldier = 0.
    #[must_use]
    pub const fn power(self) -> u8 {
        match self {
            Rank::General => 6,
            Rank::Advisor => 5,
            Rank::Elephant => 4,
            Rank::Horse => 3,
            Rank::Chariot => 2,
            Rank::Cannon => 1,
            Rank::Soldier => 0,
        }
    }

    /// How many pieces of this rank each side starts with.
    #[must_use]
    pub const fn count_per_side(self) -> usize {
        match self {
            Rank::General => 1,
            Rank::Soldier => 5,
            _ => 2,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rank::General => "General",
            Rank::Advisor => "Advisor",
            Rank::Elephant => "Elephant",
            Rank::Horse => "Horse",
            Rank::Chariot => "Chariot",
            Rank::Cannon => "Cannon",
            Rank::Soldier => "Soldier",
        };
        f.write_str(name)
    }
}

/// A piece: side plus rank. Immutable once dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub rank: Rank,
}

impl Piece {
    /// Create a piece.
    #[must_use]
    pub const fn new(side: Side, rank: Rank) -> Self {
        Self { side, rank }
    }

    /// Shorthand for a Black piece.
    #[must_use]
    pub const fn black(rank: Rank) -> Self {
        Self::new(Side::Black, rank)
    }

    /// Shorthand for a Red piece.
    #[must_use]
    pub const fn red(rank: Rank) -> Self {
        Self::new(Side::Red, rank)
    }

    /// Power level of this piece's rank.
    #[must_use]
    pub const fn power(self) -> u8 {
        self.rank.power()
    }

    #[must_use]
    pub fn is_cannon(self) -> bool {
        self.rank == Rank::Cannon
    }

    /// Traditional glyph for the piece.
    ///
    /// ```
    /// use banqi::core::{Piece, Rank};
    ///
    /// assert_eq!(Piece::black(Rank::General).glyph(), '將');
    /// assert_eq!(Piece::red(Rank::General).glyph(), '帥');
    /// ```
    #[must_use]
    pub const fn glyph(self) -> char {
        match (self.side, self.rank) {
            (Side::Black, Rank::General) => '將',
            (Side::Black, Rank::Advisor) => '士',
            (Side::Black, Rank::Elephant) => '象',
            (Side::Black, Rank::Horse) => '馬',
            (Side::Black, Rank::Chariot) => '車',
            (Side::Black, Rank::Cannon) => '包',
            (Side::Black, Rank::Soldier) => '卒',
            (Side::Red, Rank::General) => '帥',
            (Side::Red, Rank::Advisor) => '仕',
            (Side::Red, Rank::Elephant) => '相',
            (Side::Red, Rank::Horse) => '傌',
            (Side::Red, Rank::Chariot) => '俥',
            (Side::Red, Rank::Cannon) => '砲',
            (Side::Red, Rank::Soldier) => '兵',
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.side, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_descends_with_rank_order() {
        let powers: Vec<_> = Rank::ALL.iter().map(|r| r.power()).collect();
        assert_eq!(powers, vec![6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_sixteen_pieces_per_side() {
        let total: usize = Rank::ALL.iter().map(|r| r.count_per_side()).sum();
        assert_eq!(total, 16);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Black.opponent(), Side::Red);
        assert_eq!(Side::Red.opponent(), Side::Black);
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let mut glyphs: Vec<char> = Side::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Piece::new(s, r).glyph()))
            .collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), 14);
    }

    #[test]
    fn test_display() {
        assert_eq!(Piece::red(Rank::Cannon).to_string(), "Red Cannon");
    }

    #[test]
    fn test_piece_serialization() {
        let piece = Piece::black(Rank::Horse);
        let json = serde_json::to_string(&piece).unwrap();
        let deserialized: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(piece, deserialized);
    }
}
