use super::notation::Notation;
use crate::cards::Rank;
use crate::cards::Suitedness;

/// The conventional 13x13 starting-hand chart.
///
/// Rows and columns run Ace down to Two. Pairs sit on the diagonal,
/// suited hands above it, offsuit hands below it.
pub struct Grid;

impl Grid {
    pub const SIZE: usize = 13;

    /// Hand at a chart cell, if the cell is on the chart.
    pub fn at(row: usize, col: usize) -> Option<Notation> {
        match row < Self::SIZE && col < Self::SIZE {
            true => Some(Self::cell(row, col)),
            false => None,
        }
    }
    /// Chart cell of a hand. Inverse of [`Grid::at`].
    pub fn locate(notation: Notation) -> (usize, usize) {
        let hi = Self::index(notation.high());
        let lo = Self::index(notation.low());
        match notation.suitedness() {
            None => (hi, hi),
            Some(Suitedness::Suited) => (hi, lo),
            Some(Suitedness::Offsuit) => (lo, hi),
        }
    }
    pub fn rows() -> impl Iterator<Item = [Notation; 13]> {
        (0..Self::SIZE).map(|row| std::array::from_fn(|col| Self::cell(row, col)))
    }
    fn cell(row: usize, col: usize) -> Notation {
        let suitedness = match row <= col {
            true => Suitedness::Suited,
            false => Suitedness::Offsuit,
        };
        Notation::new(Self::rank(row), Self::rank(col), suitedness)
    }
    fn rank(index: usize) -> Rank {
        Rank::from((Self::SIZE - 1 - index) as u8)
    }
    fn index(rank: Rank) -> usize {
        Self::SIZE - 1 - u8::from(rank) as usize
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in Self::rows() {
            let line = row
                .iter()
                .map(|notation| format!("{:<4}", notation.to_string()))
                .collect::<String>();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
