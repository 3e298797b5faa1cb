use xpad_core::{
    board_positions, ActionRecord, BoardPosition, Case, ConfigError, LayerLayouts, LayeringStrategy, LayoutConfig,
    OverrideTriple,
};
use log::debug;
use std::collections::HashSet;

/// Compiled actions of one layer, each half in board position order
#[derive(Debug, Clone)]
pub struct LayerActions {
    pub layer: usize,
    pub lower: Vec<ActionRecord>,
    pub upper: Vec<ActionRecord>,
}

#[derive(Debug, Clone)]
pub struct ActionMap {
    pub strategy: LayeringStrategy,
    pub layers: Vec<LayerActions>,
}

impl ActionMap {
    /// Every compiled record in document order
    pub fn records(&self) -> impl Iterator<Item = &ActionRecord> {
        self.layers
            .iter()
            .flat_map(|layer| layer.lower.iter().chain(layer.upper.iter()))
    }

    pub fn len(&self) -> usize {
        self.layers.iter().map(|l| l.lower.len() + l.upper.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Strings typed by the lower and upper gesture of one position, each as
/// (inputString, inputCapsLockString)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    pub lower: (String, String),
    pub upper: (String, String),
}

/// Decides what a position types. Returns `None` when the position is blank
/// in both cases.
pub fn resolve_key(lower: Option<char>, upper: Option<char>, overrides: &OverrideTriple) -> Option<ResolvedKey> {
    // Caps lock on the upper gesture types what the lower gesture types
    let from_triple = |triple: &OverrideTriple| ResolvedKey {
        lower: (triple.literal.clone(), triple.double_case.clone()),
        upper: (triple.case_switched.clone(), triple.literal.clone()),
    };

    match (lower, upper) {
        (None, None) => None,
        (Some('@'), Some('@')) => Some(from_triple(overrides)),
        (Some('!'), Some('!')) => Some(from_triple(&OverrideTriple::exclamation())),
        (lower, upper) => {
            // A case left blank has no case distinction at this position
            let lower = lower.or(upper)?;
            let upper = upper.unwrap_or(lower);
            Some(ResolvedKey {
                lower: (lower.to_string(), upper.to_string()),
                upper: (upper.to_string(), lower.to_string()),
            })
        }
    }
}

pub struct Compiler {
    positions: Vec<BoardPosition>,
}

impl Compiler {
    pub fn new() -> Self {
        Self {
            positions: board_positions(),
        }
    }

    pub fn compile(&self, config: &LayoutConfig) -> Result<ActionMap, ConfigError> {
        let mut layers = Vec::with_capacity(config.layers.len());
        for (index, layer) in config.layers.iter().enumerate() {
            layers.push(self.compile_layer(index, layer, config));
        }

        let action_map = ActionMap {
            strategy: config.strategy,
            layers,
        };
        Self::check_unique_gestures(&action_map)?;

        debug!("Compiled {} actions over {} layers", action_map.len(), action_map.layers.len());
        Ok(action_map)
    }

    fn compile_layer(&self, index: usize, layer: &LayerLayouts, config: &LayoutConfig) -> LayerActions {
        let mut lower_records = Vec::new();
        let mut upper_records = Vec::new();

        for (slot, position) in self.positions.iter().enumerate() {
            let Some(key) = resolve_key(layer.lower.slot(slot), layer.upper.slot(slot), &config.overrides) else {
                continue;
            };

            let (input, caps_lock) = key.lower;
            lower_records.push(ActionRecord::text(
                position.gesture(index, Case::Lower, config.strategy),
                input,
                caps_lock,
            ));

            let (input, caps_lock) = key.upper;
            upper_records.push(ActionRecord::text(
                position.gesture(index, Case::Upper, config.strategy),
                input,
                caps_lock,
            ));
        }

        debug!("Layer {}: {} positions bound", index, lower_records.len());

        LayerActions {
            layer: index,
            lower: lower_records,
            upper: upper_records,
        }
    }

    fn check_unique_gestures(action_map: &ActionMap) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for record in action_map.records() {
            if !seen.insert(&record.movement) {
                return Err(ConfigError::DuplicateGesture(record.movement.to_string()));
            }
        }
        Ok(())
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xpad_core::{Layout, SLOT_COUNT};
    use pretty_assertions::assert_eq;

    fn overrides() -> OverrideTriple {
        OverrideTriple::new("@", "user@x.com", "USER@X.COM")
    }

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_resolve_plain_key() {
        let key = resolve_key(Some('a'), Some('A'), &overrides()).unwrap();
        assert_eq!(key.lower, pair("a", "A"));
        assert_eq!(key.upper, pair("A", "a"));
    }

    #[test]
    fn test_resolve_at_sign_override() {
        let key = resolve_key(Some('@'), Some('@'), &overrides()).unwrap();
        assert_eq!(key.lower, pair("@", "USER@X.COM"));
        assert_eq!(key.upper, pair("user@x.com", "@"));
    }

    #[test]
    fn test_resolve_exclamation_override() {
        let key = resolve_key(Some('!'), Some('!'), &overrides()).unwrap();
        assert_eq!(key.lower, pair("!", "!!!"));
        assert_eq!(key.upper, pair("!!!", "!"));
    }

    #[test]
    fn test_at_sign_in_one_case_only_is_literal() {
        let key = resolve_key(Some('@'), Some('*'), &overrides()).unwrap();
        assert_eq!(key.lower, pair("@", "*"));
        assert_eq!(key.upper, pair("*", "@"));
    }

    #[test]
    fn test_resolve_blank_inherits() {
        let key = resolve_key(None, Some('x'), &overrides()).unwrap();
        assert_eq!(key.lower, pair("x", "x"));
        assert_eq!(key.upper, pair("x", "x"));

        let key = resolve_key(Some('y'), None, &overrides()).unwrap();
        assert_eq!(key.upper, pair("y", "y"));
    }

    #[test]
    fn test_resolve_double_blank_skipped() {
        assert_eq!(resolve_key(None, None, &overrides()), None);
    }

    #[test]
    fn test_compile_skips_blank_positions() {
        let mut lower = vec![None; SLOT_COUNT];
        let mut upper = vec![None; SLOT_COUNT];
        lower[0] = Some('a');
        upper[0] = Some('A');
        upper[5] = Some('x');

        let config = LayoutConfig {
            strategy: LayeringStrategy::FullCircleToCapitalize,
            overrides: overrides(),
            layers: vec![LayerLayouts {
                lower: Layout::from_slots(lower).unwrap(),
                upper: Layout::from_slots(upper).unwrap(),
            }],
        };

        let map = Compiler::new().compile(&config).unwrap();
        assert_eq!(map.len(), 4);

        let layer = &map.layers[0];
        assert_eq!(layer.lower[0].movement.to_string(), "INSIDE_CIRCLE;TOP;RIGHT;INSIDE_CIRCLE;");
        assert_eq!(layer.lower[0].input_string(), Some("a"));
        assert_eq!(layer.lower[0].caps_lock_string(), Some("A"));
        // Slot 5 is RIGHT counter-clockwise, 2 steps
        assert_eq!(layer.lower[1].movement.to_string(), "INSIDE_CIRCLE;RIGHT;TOP;LEFT;INSIDE_CIRCLE;");
        assert_eq!(layer.lower[1].input_string(), Some("x"));
        assert_eq!(layer.upper[1].caps_lock_string(), Some("x"));
    }
}
