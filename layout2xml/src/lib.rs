pub mod lexer;
pub mod parser;
pub mod xml;
pub mod reader;
pub mod report;

pub use xpad_core::*;

use log::info;
use std::path::Path;
use std::fs::{self, File};
use std::io::BufWriter;

/// Result of a conversion, kept for reporting
#[derive(Debug)]
pub struct Conversion {
    pub config: LayoutConfig,
    pub action_map: xml::ActionMap,
}

pub fn convert_layout_to_xml(input_path: &Path, output_path: &Path) -> Result<Conversion> {
    if is_same_file(input_path, output_path) {
        return Err(ConfigError::OutputOverwritesInput {
            path: output_path.to_path_buf(),
        }
        .into());
    }

    // Compile layout file
    let config = parser::read_layout_file(input_path)?;
    let action_map = xml::Compiler::new().compile(&config)?;

    // Write output
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    xml::ActionMapWriter::new(writer).write_action_map(&action_map)?;

    info!(
        "Wrote {} actions ({} layers, {}) to {}",
        action_map.len(),
        action_map.layers.len(),
        config.strategy,
        output_path.display()
    );

    Ok(Conversion { config, action_map })
}

pub fn compile_layout_file(input_path: &Path) -> Result<xml::ActionMap> {
    let config = parser::read_layout_file(input_path)?;
    Ok(xml::Compiler::new().compile(&config)?)
}

/// Compiles layout file content without touching the filesystem
pub fn compile_layout(input: &str) -> Result<xml::ActionMap> {
    let config = parser::parse_layout_config(input)?;
    Ok(xml::Compiler::new().compile(&config)?)
}

// Also catches two spellings of one existing file, e.g. `a.xml` and `./a.xml`
fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Default output path: the input with its extension replaced by `.xml`
pub fn default_output_path(input_path: &Path) -> std::path::PathBuf {
    let mut path = input_path.to_path_buf();
    path.set_extension("xml");
    path
}
