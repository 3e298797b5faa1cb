use std::fmt;

/// One of the four sectors of the circular board.
///
/// The discriminants give the cyclic order used for rotation: moving
/// clockwise decreases the index, counter-clockwise increases it (mod 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top = 0,
    Left = 1,
    Bottom = 2,
    Right = 3,
}

impl Direction {
    /// All directions in cyclic order
    pub const ALL: [Direction; 4] = [Direction::Top, Direction::Left, Direction::Bottom, Direction::Right];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction at `index`, wrapping around the board
    pub fn from_index(index: isize) -> Self {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    /// The neighbouring sector in the given sense of rotation
    pub fn step(self, clockwise: bool) -> Self {
        let delta = if clockwise { -1 } else { 1 };
        Self::from_index(self.index() as isize + delta)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Top => "TOP",
            Direction::Left => "LEFT",
            Direction::Bottom => "BOTTOM",
            Direction::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which half of a layer a character belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Lower,
    Upper,
}

impl Case {
    pub fn is_upper(self) -> bool {
        matches!(self, Case::Upper)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Case::Lower => "lower",
            Case::Upper => "upper",
        }
    }
}
