use xpad_core::{ConfigError, LayerLayouts, Layout, LayeringStrategy, LayoutConfig, OverrideTriple};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Lines before the first layout line: strategy and three override strings
const HEADER_LINES: usize = 4;

/// Reads the line-oriented layout file format:
///
/// ```text
/// full_circle_to_capitalize
/// @
/// youremailaddress@gmail.com
/// YOUREMAILADDRESS@GMAIL.COM
/// nmpq ecx? rsb! ouvz hlj@ ifw, tyk. adg'
/// NMPQ ECX* RSB! OUVZ HLJ@ IFW_ TYK- ADG"
/// ```
///
/// Layout lines alternate lower/upper, one pair per layer.
pub struct Parser<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lines: Vec<&str> = input.lines().collect();

        // Editors like to leave blank lines at the end of the file
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        Self { lines }
    }

    pub fn parse(&self) -> Result<LayoutConfig, ConfigError> {
        if self.lines.len() < HEADER_LINES + 1 {
            return Err(ConfigError::TooFewLines { found: self.lines.len() });
        }

        let strategy: LayeringStrategy = self.lines[0].trim().parse()?;
        debug!("Layering strategy: {}", strategy);

        let overrides = OverrideTriple::new(self.lines[1], self.lines[2], self.lines[3]);

        let layout_lines = &self.lines[HEADER_LINES..];
        let mut layers = Vec::with_capacity(layout_lines.len() / 2);

        for (pair_index, pair) in layout_lines.chunks(2).enumerate() {
            // 1-based file line of the lower case layout
            let line = HEADER_LINES + 2 * pair_index + 1;

            let [lower, upper] = pair else {
                return Err(ConfigError::UnpairedLayout { line });
            };

            let layer = LayerLayouts {
                lower: Layout::parse(lower, line)?,
                upper: Layout::parse(upper, line + 1)?,
            };

            if layer.lower == layer.upper {
                warn!("Layer {} has identical lower and upper case layouts", pair_index);
            }
            debug!(
                "Layer {}: {} lower, {} upper characters",
                pair_index,
                layer.lower.defined_count(),
                layer.upper.defined_count()
            );

            layers.push(layer);
        }

        Ok(LayoutConfig {
            strategy,
            overrides,
            layers,
        })
    }
}

pub fn parse_layout_config(input: &str) -> Result<LayoutConfig, ConfigError> {
    Parser::new(input).parse()
}

/// Reads and parses a layout file from disk
pub fn read_layout_file(path: &Path) -> Result<LayoutConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // Strip UTF-8 BOM if present
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(&content);

    parse_layout_config(content)
}
