use super::direction::Case;
use super::errors::ConfigError;
use super::gesture::MovementToken;
use std::fmt;
use std::str::FromStr;

/// Sectors travelled by one full circle around the board
pub const FULL_CIRCLE: usize = 4;

/// How a layer's gesture is told apart from the base layer's.
///
/// Every strategy capitalizes by travelling one extra full circle; they
/// differ in how deeper layers extend the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayeringStrategy {
    /// Deeper layers go around the board two more circles per layer
    FullCircleToCapitalize,
    /// Each layer appends one back-and-forth wobble after the circle
    EightPen,
    /// Layers above 0 append one run of `layer` sectors in the opposite sense
    SingleDirectionChange,
    /// Each layer prepends one back-and-forth wobble before the circle
    PrefixEightPen,
    /// Each layer prepends a detour from TOP back through the center
    SeperateLetter,
}

impl LayeringStrategy {
    pub const ALL: [LayeringStrategy; 5] = [
        LayeringStrategy::FullCircleToCapitalize,
        LayeringStrategy::EightPen,
        LayeringStrategy::SingleDirectionChange,
        LayeringStrategy::PrefixEightPen,
        LayeringStrategy::SeperateLetter,
    ];

    /// Name as written on the first line of a layout file
    pub fn name(self) -> &'static str {
        match self {
            LayeringStrategy::FullCircleToCapitalize => "full_circle_to_capitalize",
            LayeringStrategy::EightPen => "eight_pen",
            LayeringStrategy::SingleDirectionChange => "single_direction_change",
            LayeringStrategy::PrefixEightPen => "prefix_eight_pen",
            LayeringStrategy::SeperateLetter => "seperate_letter",
        }
    }

    /// Lengths of the consecutive runs around the board. The sense of
    /// rotation flips after every run.
    pub fn run_lengths(self, base_steps: usize, layer: usize, case: Case) -> Vec<usize> {
        let circle = if case.is_upper() { base_steps + FULL_CIRCLE } else { base_steps };

        match self {
            LayeringStrategy::FullCircleToCapitalize => {
                vec![circle + 2 * FULL_CIRCLE * layer]
            }
            LayeringStrategy::EightPen => {
                let mut runs = vec![circle];
                for _ in 0..layer {
                    runs.extend([1, 1]);
                }
                runs
            }
            LayeringStrategy::SingleDirectionChange => {
                let mut runs = vec![circle];
                if layer > 0 {
                    runs.push(layer);
                }
                runs
            }
            LayeringStrategy::PrefixEightPen => {
                let mut runs = Vec::with_capacity(2 * layer + 1);
                for _ in 0..layer {
                    runs.extend([1, 1]);
                }
                runs.push(circle);
                runs
            }
            LayeringStrategy::SeperateLetter => vec![circle],
        }
    }

    /// Tokens emitted between entering the circle and the first sector
    pub fn layer_prefix(self, layer: usize) -> Vec<MovementToken> {
        match self {
            LayeringStrategy::SeperateLetter => {
                let mut prefix = Vec::with_capacity(2 * layer);
                for _ in 0..layer {
                    prefix.push(MovementToken::Top);
                    prefix.push(MovementToken::InsideCircle);
                }
                prefix
            }
            _ => Vec::new(),
        }
    }
}

impl FromStr for LayeringStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| ConfigError::UnknownStrategy(s.to_string()))
    }
}

impl fmt::Display for LayeringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
