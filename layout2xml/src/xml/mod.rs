pub mod compiler;
pub mod writer;

pub use compiler::*;
pub use writer::*;
