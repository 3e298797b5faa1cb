pub mod types;
pub mod error;
pub mod movement;

pub use types::*;

// Re-export commonly used types
pub use types::errors::ConfigError;
pub use types::layout::{Layout, LayerLayouts, LayoutConfig, OverrideTriple, SLOT_COUNT};
pub use error::{Error, Result};
pub use movement::{board_positions, movement_sequence, BoardPosition, Movement};
