use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read layout file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Layout file has {found} lines, expected at least 5 (strategy, 3 override lines, layouts)")]
    TooFewLines { found: usize },

    #[error("Unknown layering strategy: {0:?}")]
    UnknownStrategy(String),

    #[error("Layout at line {line} has {found} characters, expected {expected}")]
    LayoutLength { line: usize, found: usize, expected: usize },

    #[error("Layout at line {line} has {found:?} in spacer column {column}")]
    MisplacedSpacer { line: usize, column: usize, found: char },

    #[error("Layout at line {line} has no upper case line to pair with")]
    UnpairedLayout { line: usize },

    #[error("Output {} is the layout file itself; pass a different output path", path.display())]
    OutputOverwritesInput { path: PathBuf },

    #[error("Gesture {0} is bound to more than one action")]
    DuplicateGesture(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown movement token: {0}")]
pub struct UnknownToken(pub String);
