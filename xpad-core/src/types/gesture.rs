use super::direction::Direction;
use super::errors::UnknownToken;
use std::fmt;
use std::str::FromStr;

/// Tokens understood by the keyboard's movement matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementToken {
    NoTouch,
    InsideCircle,
    Top,
    Left,
    Bottom,
    Right,
    LongPress,
    LongPressEnd,
}

impl MovementToken {
    pub fn as_str(self) -> &'static str {
        match self {
            MovementToken::NoTouch => "NO_TOUCH",
            MovementToken::InsideCircle => "INSIDE_CIRCLE",
            MovementToken::Top => "TOP",
            MovementToken::Left => "LEFT",
            MovementToken::Bottom => "BOTTOM",
            MovementToken::Right => "RIGHT",
            MovementToken::LongPress => "LONG_PRESS",
            MovementToken::LongPressEnd => "LONG_PRESS_END",
        }
    }

    /// The board sector this token crosses, if any
    pub fn direction(self) -> Option<Direction> {
        match self {
            MovementToken::Top => Some(Direction::Top),
            MovementToken::Left => Some(Direction::Left),
            MovementToken::Bottom => Some(Direction::Bottom),
            MovementToken::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

impl From<Direction> for MovementToken {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Top => MovementToken::Top,
            Direction::Left => MovementToken::Left,
            Direction::Bottom => MovementToken::Bottom,
            Direction::Right => MovementToken::Right,
        }
    }
}

impl FromStr for MovementToken {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NO_TOUCH" => Ok(MovementToken::NoTouch),
            "INSIDE_CIRCLE" => Ok(MovementToken::InsideCircle),
            "TOP" => Ok(MovementToken::Top),
            "LEFT" => Ok(MovementToken::Left),
            "BOTTOM" => Ok(MovementToken::Bottom),
            "RIGHT" => Ok(MovementToken::Right),
            "LONG_PRESS" => Ok(MovementToken::LongPress),
            "LONG_PRESS_END" => Ok(MovementToken::LongPressEnd),
            other => Err(UnknownToken(other.to_string())),
        }
    }
}

impl fmt::Display for MovementToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete gesture as written to `<movementSequence>`.
///
/// Displays as every token followed by `;`, which is the form the keyboard
/// expects, e.g. `INSIDE_CIRCLE;TOP;RIGHT;INSIDE_CIRCLE;`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MovementSequence {
    tokens: Vec<MovementToken>,
}

impl MovementSequence {
    pub fn new(tokens: Vec<MovementToken>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[MovementToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Only the sector crossings, without circle/touch markers
    pub fn directions(&self) -> Vec<Direction> {
        self.tokens.iter().filter_map(|t| t.direction()).collect()
    }
}

impl FromIterator<MovementToken> for MovementSequence {
    fn from_iter<I: IntoIterator<Item = MovementToken>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for MovementSequence {
    type Err = UnknownToken;

    // Trailing separator is optional
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(MovementToken::from_str)
            .collect()
    }
}

impl fmt::Display for MovementSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{};", token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_display() {
        let seq: MovementSequence = vec![
            MovementToken::InsideCircle,
            MovementToken::Top,
            MovementToken::Right,
            MovementToken::InsideCircle,
        ].into_iter().collect();
        assert_eq!(seq.to_string(), "INSIDE_CIRCLE;TOP;RIGHT;INSIDE_CIRCLE;");
        assert_eq!(seq.directions(), vec![Direction::Top, Direction::Right]);
    }

    #[test]
    fn test_sequence_parse_without_trailing_separator() {
        let seq: MovementSequence = "TOP;INSIDE_CIRCLE;NO_TOUCH".parse().unwrap();
        assert_eq!(seq.tokens(), &[MovementToken::Top, MovementToken::InsideCircle, MovementToken::NoTouch]);
    }

    #[test]
    fn test_unknown_token() {
        let err = "TOP;UPWARDS;".parse::<MovementSequence>().unwrap_err();
        assert_eq!(err.0, "UPWARDS");
    }
}
