pub mod direction;
pub mod gesture;
pub mod strategy;
pub mod layout;
pub mod action;
pub mod errors;

pub use direction::*;
pub use gesture::*;
pub use strategy::*;
pub use layout::*;
pub use action::*;
pub use errors::*;
