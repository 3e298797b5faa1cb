//! Human readable output: board diagrams and the source snippets the
//! keyboard app needs to display the new layout.

use xpad_core::{Case, LayerLayouts, Layout, GROUP_SIZE};
use std::path::Path;

/// Where the keyboard app keeps the characters it draws on the board
pub const XPAD_VIEW_SOURCE: &str = "8vim/src/main/java/inc/flide/vim8/views/mainKeyboard/XpadView.java";

/// Where the keyboard app loads its action map from
pub const ACTION_MAP_RESOURCE: &str = "8vim/src/main/res/raw/keyboard_actions.xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardStyle {
    #[default]
    Regular,
    Compact,
}

const REGULAR_BOARD: &str = r"
{27} \ {31}                 {3} / {7}
   \                   /
  {26} \ {30}             {2} / {6}
     \               /
    {25} \ {29}         {1} / {5}
       \           /
      {24} \ {28}     {0} / {4}
         \ _____ /
          |{case}|
          |case |
         / ⎺⎺⎺⎺⎺ \
      {20} / {16}     {12} \ {8}
       /           \
    {21} / {17}         {13} \ {9}
     /               \
  {22} / {18}             {14} \ {10}
   /                   \
{23} / {19}                 {15} \ {11}
";

const COMPACT_BOARD: &str = r"
{27}\{31}           {3}/{7}
 {26}\{30}         {2}/{6}
  {25}\{29}       {1}/{5}
   {24}\{28}_____{0}/{4}
     |{case}|
     |case |
   {20}/{16}⎺⎺⎺⎺⎺{12}\{8}
  {21}/{17}       {13}\{9}
 {22}/{18}         {14}\{10}
{23}/{19}           {15}\{11}
";

/// Draws the eight sectors with every slot's character at the end of its
/// gesture.
pub fn render_board(layout: &Layout, case: Case, style: BoardStyle) -> String {
    let template = match style {
        BoardStyle::Regular => REGULAR_BOARD,
        BoardStyle::Compact => COMPACT_BOARD,
    };
    fill_template(template, layout, case)
}

// Replaces `{N}` with slot N and `{case}` with the case name
fn fill_template(template: &str, layout: &Layout, case: Case) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let key = &after[..close];
        if key == "case" {
            out.push_str(case.as_str());
        } else if let Ok(index) = key.parse::<usize>() {
            out.push(layout.display_char(index));
        } else {
            out.push_str(&rest[open..open + close + 2]);
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

/// The layout in the order the keyboard app draws it: groups 2+3, 4+5,
/// 6+7 and 0+1, each pair interleaved slot by slot.
pub fn character_set(layout: &Layout) -> String {
    const GROUP_PAIRS: [(usize, usize); 4] = [(2, 3), (4, 5), (6, 7), (0, 1)];

    let mut set = String::new();
    for (first, second) in GROUP_PAIRS {
        for k in 0..GROUP_SIZE {
            set.push(layout.display_char(first * GROUP_SIZE + k));
            set.push(layout.display_char(second * GROUP_SIZE + k));
        }
    }
    set
}

/// Java declarations for one layer's character sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSetLiterals {
    pub layer: usize,
    pub small: String,
    pub caps: String,
}

impl CharacterSetLiterals {
    pub fn new(layer: usize, layouts: &LayerLayouts) -> Self {
        Self {
            layer,
            small: character_set(layouts.get(Case::Lower)),
            caps: character_set(layouts.get(Case::Upper)),
        }
    }

    pub fn java_lines(&self) -> String {
        let suffix = if self.layer == 0 { String::new() } else { format!("Layer{}", self.layer) };
        format!(
            "String characterSetSmall{suffix} = \"{}\";\nString characterSetCaps{suffix}  = \"{}\";",
            escape_java(&self.small),
            escape_java(&self.caps),
        )
    }
}

fn escape_java(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Instructions for installing the generated files into the app
pub fn usage_notes(literals: &[CharacterSetLiterals], output_path: &Path) -> String {
    let mut notes = String::from("--- Usage Notes ---\n");
    notes.push_str("Edit this file\n");
    notes.push_str(XPAD_VIEW_SOURCE);
    notes.push('\n');
    notes.push_str("Change these variables to this:\n");
    for layer in literals {
        notes.push_str(&layer.java_lines());
        notes.push('\n');
    }
    notes.push('\n');
    notes.push_str("The new keyboard layout has been saved to:\n");
    notes.push_str(&output_path.display().to_string());
    notes.push('\n');
    notes.push_str("Move it to here:\n");
    notes.push_str(ACTION_MAP_RESOURCE);
    notes.push_str("\n\n");
    notes.push_str("Rebuild 8vim and send the apk to your phone.\n");
    notes
}
