use crate::xml::compiler::{ActionMap, LayerActions};
use xpad_core::{ActionInput, ActionRecord};
use std::io::{self, Write};

const PROLOGUE: &str = "<keyboardActionMap>
    <!-- Keywords for defining the movements -->
    <!--{NO_TOUCH, INSIDE_CIRCLE, TOP, LEFT, BOTTOM, RIGHT}-->";

const LOWERCASE_TITLE: &str = "Lowercase";
const CAPITAL_TITLE: &str = "Capital Characters by going all the way around the board";

/// Fixed bindings for keyboard functions, appended after the generated
/// characters. The keyboard matches these byte for byte.
pub const STATIC_BINDINGS: &str = r#"

    <!--Paste Sequence-->
    <keyboardAction>
        <keyboardActionType>INPUT_SPECIAL</keyboardActionType>
        <movementSequence>LEFT;INSIDE_CIRCLE;NO_TOUCH;</movementSequence>
        <inputString>PASTE</inputString>
    </keyboardAction>


    <!--Shift-->
    <keyboardAction>
        <keyboardActionType>INPUT_SPECIAL</keyboardActionType>
        <movementSequence>TOP;NO_TOUCH;</movementSequence>
        <inputString>SHIFT_TOOGLE</inputString>
    </keyboardAction>


    <!-- Switch to Numpad-->
    <keyboardAction>
        <keyboardActionType>INPUT_SPECIAL</keyboardActionType>
        <movementSequence>LEFT;NO_TOUCH;</movementSequence>
        <inputString>SWITCH_TO_NUMBER_PAD</inputString>
    </keyboardAction>


    <!--Selection Mode Sequence-->
    <keyboardAction>
        <keyboardActionType>INPUT_SPECIAL</keyboardActionType>
        <movementSequence>RIGHT;INSIDE_CIRCLE;NO_TOUCH;</movementSequence>
        <inputString>SELECTION_START</inputString>
    </keyboardAction>
    <keyboardAction>
        <keyboardActionType>INPUT_SPECIAL</keyboardActionType>
        <movementSequence>RIGHT;INSIDE_CIRCLE;LONG_PRESS;</movementSequence>
        <inputString>SELECTION_START</inputString>
    </keyboardAction>
    <keyboardAction>
        <keyboardActionType>INPUT_SPECIAL</keyboardActionType>
        <movementSequence>RIGHT;INSIDE_CIRCLE;LONG_PRESS_END;</movementSequence>
        <inputString>SWITCH_TO_SELECTION_KEYBOARD</inputString>
    </keyboardAction>


    <!--Space-->
    <keyboardAction>
        <keyboardActionType>INPUT_KEY</keyboardActionType>
        <movementSequence>INSIDE_CIRCLE;NO_TOUCH;</movementSequence>
        <inputKey>KEYCODE_SPACE</inputKey>
    </keyboardAction>


    <!-- Enter and Delete -->
    <keyboardAction>
        <keyboardActionType>INPUT_KEY</keyboardActionType>
        <movementSequence>BOTTOM;NO_TOUCH;</movementSequence>
        <inputKey>KEYCODE_ENTER</inputKey>
    </keyboardAction>

    <keyboardAction>
        <keyboardActionType>INPUT_KEY</keyboardActionType>
        <movementSequence>BOTTOM;LONG_PRESS;</movementSequence>
        <inputKey>KEYCODE_ENTER</inputKey>
    </keyboardAction>

    <keyboardAction>
        <keyboardActionType>INPUT_KEY</keyboardActionType>
        <movementSequence>RIGHT;NO_TOUCH;</movementSequence>
        <inputKey>KEYCODE_DEL</inputKey>
    </keyboardAction>
    <keyboardAction>
        <keyboardActionType>INPUT_KEY</keyboardActionType>
        <movementSequence>RIGHT;LONG_PRESS;</movementSequence>
        <inputKey>KEYCODE_DEL</inputKey>
    </keyboardAction>


    <!--D_Pad key-->
    <keyboardAction>
        <keyboardActionType>INPUT_KEY</keyboardActionType>
        <movementSequence>NO_TOUCH;INSIDE_CIRCLE;TOP;NO_TOUCH;</movementSequence>
        <inputKey>KEYCODE_DPAD_UP</inputKey>
    </keyboardAction>
    <keyboardAction>
        <keyboardActionType>INPUT_KEY</keyboardActionType>
        <movementSequence>NO_TOUCH;INSIDE_CIRCLE;BOTTOM;NO_TOUCH;</movementSequence>
        <inputKey>KEYCODE_DPAD_DOWN</inputKey>
    </keyboardAction>
    <keyboardAction>
        <keyboardActionType>INPUT_KEY</keyboardActionType>
        <movementSequence>NO_TOUCH;INSIDE_CIRCLE;LEFT;NO_TOUCH;</movementSequence>
        <inputKey>KEYCODE_DPAD_LEFT</inputKey>
    </keyboardAction>
    <keyboardAction>
        <keyboardActionType>INPUT_KEY</keyboardActionType>
        <movementSequence>NO_TOUCH;INSIDE_CIRCLE;RIGHT;NO_TOUCH;</movementSequence>
        <inputKey>KEYCODE_DPAD_RIGHT</inputKey>
    </keyboardAction>


    <!--Long press configuration-->
    <keyboardAction>
        <keyboardActionType>INPUT_KEY</keyboardActionType>
        <movementSequence>NO_TOUCH;INSIDE_CIRCLE;TOP;LONG_PRESS;</movementSequence>
        <inputKey>KEYCODE_DPAD_UP</inputKey>
    </keyboardAction>
    <keyboardAction>
        <keyboardActionType>INPUT_KEY</keyboardActionType>
        <movementSequence>NO_TOUCH;INSIDE_CIRCLE;BOTTOM;LONG_PRESS;</movementSequence>
        <inputKey>KEYCODE_DPAD_DOWN</inputKey>
    </keyboardAction>
    <keyboardAction>
        <keyboardActionType>INPUT_KEY</keyboardActionType>
        <movementSequence>NO_TOUCH;INSIDE_CIRCLE;LEFT;LONG_PRESS;</movementSequence>
        <inputKey>KEYCODE_DPAD_LEFT</inputKey>
    </keyboardAction>
    <keyboardAction>
        <keyboardActionType>INPUT_KEY</keyboardActionType>
        <movementSequence>NO_TOUCH;INSIDE_CIRCLE;RIGHT;LONG_PRESS;</movementSequence>
        <inputKey>KEYCODE_DPAD_RIGHT</inputKey>
    </keyboardAction>


    <!-- Hide keyboard -->
    <keyboardAction>
        <keyboardActionType>INPUT_SPECIAL</keyboardActionType>
        <movementSequence>TOP;INSIDE_CIRCLE;NO_TOUCH</movementSequence>
        <inputString>HIDE_KEYBOARD</inputString>
    </keyboardAction>

</keyboardActionMap>"#;

/// Writes an [`ActionMap`] as a `keyboard_actions.xml` document
pub struct ActionMapWriter<W: Write> {
    writer: W,
}

impl<W: Write> ActionMapWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_action_map(mut self, action_map: &ActionMap) -> io::Result<W> {
        self.writer.write_all(PROLOGUE.as_bytes())?;

        for layer in &action_map.layers {
            self.write_layer(layer)?;
        }

        self.writer.write_all(STATIC_BINDINGS.as_bytes())?;
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_layer(&mut self, layer: &LayerActions) -> io::Result<()> {
        let (lower_title, upper_title) = if layer.layer == 0 {
            (LOWERCASE_TITLE.to_string(), CAPITAL_TITLE.to_string())
        } else {
            (
                format!("Layer {} lowercase", layer.layer),
                format!("Layer {} capital characters", layer.layer),
            )
        };

        self.write_banner(&lower_title)?;
        for record in &layer.lower {
            self.write_record(record)?;
        }

        self.write_banner(&upper_title)?;
        for record in &layer.upper {
            self.write_record(record)?;
        }
        Ok(())
    }

    fn write_banner(&mut self, title: &str) -> io::Result<()> {
        let rule = "~".repeat(title.chars().count());
        write!(
            self.writer,
            "\n\n    <!-- {rule} -->\n    <!-- {title} -->\n    <!-- {rule} -->"
        )
    }

    fn write_record(&mut self, record: &ActionRecord) -> io::Result<()> {
        write!(
            self.writer,
            "\n    <keyboardAction>\n        <keyboardActionType>{}</keyboardActionType>\n        <movementSequence>{}</movementSequence>",
            record.action_type, record.movement
        )?;

        match &record.input {
            ActionInput::Key(key) => {
                write!(self.writer, "\n        <inputKey>{}</inputKey>", escape_text(key))?;
            }
            ActionInput::Text { input_string, caps_lock_string } => {
                write!(self.writer, "\n        <inputString>{}</inputString>", escape_text(input_string))?;
                if let Some(caps) = caps_lock_string {
                    write!(
                        self.writer,
                        "\n        <inputCapsLockString>{}</inputCapsLockString>",
                        escape_text(caps)
                    )?;
                }
            }
        }

        self.writer.write_all(b"\n    </keyboardAction>\n")
    }
}

/// Renders a whole document into a string
pub fn render_action_map(action_map: &ActionMap) -> io::Result<String> {
    let mut buffer = Vec::new();
    ActionMapWriter::new(&mut buffer).write_action_map(action_map)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Escapes the characters that would break element content. Quotes are
/// left alone; the keyboard's own reference file writes them raw.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use xpad_core::{LayeringStrategy, MovementSequence};
    use pretty_assertions::assert_eq;

    fn record(movement: &str, input: &str, caps: &str) -> ActionRecord {
        let movement: MovementSequence = movement.parse().unwrap();
        ActionRecord::text(movement, input, caps)
    }

    #[test]
    fn test_record_layout() {
        let map = ActionMap {
            strategy: LayeringStrategy::FullCircleToCapitalize,
            layers: vec![LayerActions {
                layer: 0,
                lower: vec![record("INSIDE_CIRCLE;TOP;RIGHT;INSIDE_CIRCLE;", "a", "A")],
                upper: vec![],
            }],
        };

        let xml = render_action_map(&map).unwrap();
        let expected_record = "
    <keyboardAction>
        <keyboardActionType>INPUT_TEXT</keyboardActionType>
        <movementSequence>INSIDE_CIRCLE;TOP;RIGHT;INSIDE_CIRCLE;</movementSequence>
        <inputString>a</inputString>
        <inputCapsLockString>A</inputCapsLockString>
    </keyboardAction>
";
        let expected = format!(
            "{}\n\n    <!-- ~~~~~~~~~ -->\n    <!-- Lowercase -->\n    <!-- ~~~~~~~~~ -->{}",
            PROLOGUE, expected_record
        );
        assert!(xml.starts_with(&expected), "unexpected start:\n{}", xml);
        assert!(xml.ends_with("</keyboardActionMap>"));
    }

    #[test]
    fn test_deeper_layer_banner() {
        let map = ActionMap {
            strategy: LayeringStrategy::EightPen,
            layers: vec![
                LayerActions { layer: 0, lower: vec![], upper: vec![] },
                LayerActions { layer: 1, lower: vec![], upper: vec![] },
            ],
        };

        let xml = render_action_map(&map).unwrap();
        assert!(xml.contains("    <!-- ~~~~~~~~~~~~~~~~~ -->\n    <!-- Layer 1 lowercase -->\n"));
        assert!(xml.contains("<!-- Layer 1 capital characters -->"));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a&b<c>"), "a&amp;b&lt;c&gt;");
        assert_eq!(escape_text("\"'"), "\"'");
    }
}
