//! Trait dimensions — the four independent binary axes of a code.

use serde::{Deserialize, Serialize};

/// Flip cost per dimension in weighted mode, aligned with [`Dimension::ALL`].
pub const DIMENSION_WEIGHTS: [u32; 4] = [2, 3, 3, 1];

/// One axis of a code. The discriminant is the letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    /// E / I
    Energy = 0,
    /// N / S
    Information = 1,
    /// T / F
    Decision = 2,
    /// J / P
    Structure = 3,
}

impl Dimension {
    /// All dimensions in letter-position order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Energy,
        Dimension::Information,
        Dimension::Decision,
        Dimension::Structure,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The two letters allowed at this position.
    pub fn letters(self) -> [char; 2] {
        match self {
            Dimension::Energy => ['E', 'I'],
            Dimension::Information => ['N', 'S'],
            Dimension::Decision => ['T', 'F'],
            Dimension::Structure => ['J', 'P'],
        }
    }

    /// Cost of flipping this dimension under weighted mode.
    pub fn weight(self) -> u32 {
        DIMENSION_WEIGHTS[self.index()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Energy => "Energy",
            Dimension::Information => "Information",
            Dimension::Decision => "Decision",
            Dimension::Structure => "Structure",
        }
    }

    pub fn allows(self, letter: char) -> bool {
        self.letters().contains(&letter)
    }

    /// The other letter of this dimension, or `None` if `letter` is not allowed here.
    pub fn opposite(self, letter: char) -> Option<char> {
        let [a, b] = self.letters();
        if letter == a {
            Some(b)
        } else if letter == b {
            Some(a)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_are_in_letter_order() {
        for (i, dim) in Dimension::ALL.iter().enumerate() {
            assert_eq!(dim.index(), i);
        }
    }

    #[test]
    fn weights_follow_dimension_order() {
        let weights: Vec<u32> = Dimension::ALL.iter().map(|d| d.weight()).collect();
        assert_eq!(weights, vec![2, 3, 3, 1]);
    }

    #[test]
    fn opposite_swaps_within_pair() {
        assert_eq!(Dimension::Energy.opposite('E'), Some('I'));
        assert_eq!(Dimension::Information.opposite('S'), Some('N'));
        assert_eq!(Dimension::Decision.opposite('T'), Some('F'));
        assert_eq!(Dimension::Structure.opposite('P'), Some('J'));
        // Letter belongs to another dimension
        assert_eq!(Dimension::Energy.opposite('N'), None);
    }
}
