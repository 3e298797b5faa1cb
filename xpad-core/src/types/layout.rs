use super::direction::Case;
use super::errors::ConfigError;
use super::strategy::LayeringStrategy;
use unicode_normalization::UnicodeNormalization;

/// Character slots on one layer of the board (8 groups of 4)
pub const SLOT_COUNT: usize = 32;

/// Slots per group; a spacer column follows every group in layout lines
pub const GROUP_SIZE: usize = 4;

/// Character that marks an empty slot
pub const BLANK: char = ' ';

/// One case of one layer: 32 slots, each holding a character or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    slots: Vec<Option<char>>,
}

impl Layout {
    /// Parses a human-readable layout line such as
    /// `"nmpq ecx? rsb! ouvz hlj@ ifw, tyk. adg'"`.
    ///
    /// Every fifth column is a spacer and must be a space. A trailing spacer
    /// after the last group is allowed. `line_number` is only used for
    /// error reporting.
    pub fn parse(line: &str, line_number: usize) -> Result<Self, ConfigError> {
        let chars: Vec<char> = line.nfc().collect();

        let spaced_len = SLOT_COUNT + SLOT_COUNT / GROUP_SIZE - 1;
        if chars.len() != spaced_len && chars.len() != spaced_len + 1 {
            return Err(ConfigError::LayoutLength {
                line: line_number,
                found: chars.len(),
                expected: spaced_len,
            });
        }

        let mut slots = Vec::with_capacity(SLOT_COUNT);
        for (column, &ch) in chars.iter().enumerate() {
            if column % (GROUP_SIZE + 1) == GROUP_SIZE {
                if ch != BLANK {
                    return Err(ConfigError::MisplacedSpacer {
                        line: line_number,
                        column: column + 1,
                        found: ch,
                    });
                }
                continue;
            }
            slots.push(if ch == BLANK { None } else { Some(ch) });
        }

        debug_assert_eq!(slots.len(), SLOT_COUNT);
        Ok(Self { slots })
    }

    /// Builds a layout directly from its 32 slots
    pub fn from_slots(slots: Vec<Option<char>>) -> Result<Self, ConfigError> {
        if slots.len() != SLOT_COUNT {
            return Err(ConfigError::LayoutLength {
                line: 0,
                found: slots.len(),
                expected: SLOT_COUNT,
            });
        }
        Ok(Self { slots })
    }

    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// Slot character, or a space when blank
    pub fn display_char(&self, index: usize) -> char {
        self.slot(index).unwrap_or(BLANK)
    }

    pub fn defined_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Lower and upper case layouts of one layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerLayouts {
    pub lower: Layout,
    pub upper: Layout,
}

impl LayerLayouts {
    pub fn get(&self, case: Case) -> &Layout {
        match case {
            Case::Lower => &self.lower,
            Case::Upper => &self.upper,
        }
    }
}

/// Replacement strings used when `@` sits at the same position in both
/// cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideTriple {
    /// Typed by the lower-case gesture
    pub literal: String,
    /// Typed by the upper-case gesture
    pub case_switched: String,
    /// Typed by either gesture while caps lock is on
    pub double_case: String,
}

impl OverrideTriple {
    pub fn new(literal: impl Into<String>, case_switched: impl Into<String>, double_case: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            case_switched: case_switched.into(),
            double_case: double_case.into(),
        }
    }

    /// Fixed expansion for `!` in both cases
    pub fn exclamation() -> Self {
        Self::new("!", "!!!", "!!!")
    }
}

/// Everything read from a layout file
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub strategy: LayeringStrategy,
    pub overrides: OverrideTriple,
    /// Layer 0 first; never empty
    pub layers: Vec<LayerLayouts>,
}
