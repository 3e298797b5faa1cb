//! Reads a generated `keyboard_actions.xml` back into action records.

use crate::lexer::Token;
use logos::{Lexer, Logos};
use xpad_core::{ActionInput, ActionRecord, ActionType, Error, MovementSequence, Result};

#[derive(Debug, Default)]
struct ActionFields {
    action_type: Option<String>,
    movement: Option<String>,
    input_key: Option<String>,
    input_string: Option<String>,
    caps_lock_string: Option<String>,
}

pub struct ActionMapReader<'a> {
    lexer: Lexer<'a, Token>,
    current: Option<Token>,
    /// 1-based line of `current`
    line: usize,
    /// Offset up to which newlines have been counted
    counted_to: usize,
}

impl<'a> ActionMapReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Token::lexer(input),
            current: None,
            line: 1,
            counted_to: 0,
        }
    }

    pub fn parse(mut self) -> Result<Vec<ActionRecord>> {
        self.advance()?;
        self.expect(|t| t.is_open("keyboardActionMap"), "<keyboardActionMap>")?;

        let mut records = Vec::new();
        loop {
            match &self.current {
                Some(token) if token.is_open("keyboardAction") => {
                    records.push(self.parse_action()?);
                }
                Some(token) if token.is_close("keyboardActionMap") => {
                    self.advance()?;
                    break;
                }
                other => return Err(self.error(format!("Expected <keyboardAction>, found {:?}", other))),
            }
        }

        if let Some(token) = &self.current {
            return Err(self.error(format!("Unexpected content after </keyboardActionMap>: {:?}", token)));
        }

        Ok(records)
    }

    fn advance(&mut self) -> Result<()> {
        let next = self.lexer.next();

        if next.is_some() {
            // Covers the previous token and whatever was skipped after it
            let start = self.lexer.span().start;
            self.line += self.lexer.source()[self.counted_to..start].matches('\n').count();
            self.counted_to = start;
        }

        match next {
            Some(Ok(token)) => {
                self.current = Some(token);
                Ok(())
            }
            Some(Err(())) => Err(self.error(format!("Unexpected markup: {:?}", self.lexer.slice()))),
            None => {
                self.current = None;
                Ok(())
            }
        }
    }

    fn error(&self, message: String) -> Error {
        Error::Parse {
            line: self.line,
            message,
        }
    }

    fn expect(&mut self, matches: impl Fn(&Token) -> bool, expected: &str) -> Result<()> {
        match &self.current {
            Some(token) if matches(token) => self.advance(),
            other => Err(self.error(format!("Expected {}, found {:?}", expected, other))),
        }
    }

    fn parse_action(&mut self) -> Result<ActionRecord> {
        let start_line = self.line;
        self.advance()?;

        let mut fields = ActionFields::default();
        loop {
            let name = match &self.current {
                Some(Token::Open(name)) => name.clone(),
                Some(token) if token.is_close("keyboardAction") => {
                    self.advance()?;
                    break;
                }
                other => return Err(self.error(format!("Expected element in <keyboardAction>, found {:?}", other))),
            };

            match name.as_str() {
                "keyboardActionType" => fields.action_type = Some(self.parse_text_element(&name)?),
                "movementSequence" => fields.movement = Some(self.parse_text_element(&name)?),
                "inputKey" => fields.input_key = Some(self.parse_text_element(&name)?),
                "inputString" => fields.input_string = Some(self.parse_text_element(&name)?),
                "inputCapsLockString" => fields.caps_lock_string = Some(self.parse_text_element(&name)?),
                // e.g. <flags>, which the keyboard accepts but this tool never writes
                _ => self.skip_element(&name)?,
            }
        }

        self.build_record(fields, start_line)
    }

    /// `<name>text</name>`, where the text may be empty
    fn parse_text_element(&mut self, name: &str) -> Result<String> {
        self.advance()?;
        let text = match &self.current {
            Some(Token::Text(text)) => {
                let text = text.clone();
                self.advance()?;
                text
            }
            _ => String::new(),
        };
        self.expect(|t| t.is_close(name), &format!("</{}>", name))?;
        Ok(text)
    }

    fn skip_element(&mut self, name: &str) -> Result<()> {
        let mut depth = 0usize;
        loop {
            match self.current.take() {
                Some(Token::Open(_)) => depth += 1,
                Some(Token::Close(_)) => {
                    depth -= 1;
                    if depth == 0 {
                        return self.advance();
                    }
                }
                Some(Token::Text(_)) | Some(Token::Comment) => {}
                None => return Err(self.error(format!("Unterminated <{}>", name))),
            }
            self.advance()?;
        }
    }

    fn build_record(&self, fields: ActionFields, line: usize) -> Result<ActionRecord> {
        let parse_error = |message: String| Error::Parse { line, message };

        let action_type: ActionType = fields
            .action_type
            .ok_or_else(|| parse_error("Missing <keyboardActionType>".to_string()))?
            .parse()
            .map_err(parse_error)?;

        let movement: MovementSequence = fields
            .movement
            .ok_or_else(|| parse_error("Missing <movementSequence>".to_string()))?
            .parse()
            .map_err(|e| parse_error(format!("{}", e)))?;

        let input = match (action_type, fields.input_key, fields.input_string) {
            (ActionType::InputKey, Some(key), _) => ActionInput::Key(key),
            (ActionType::InputKey, None, _) => {
                return Err(parse_error("INPUT_KEY action without <inputKey>".to_string()));
            }
            (_, _, Some(input_string)) => ActionInput::Text {
                input_string,
                caps_lock_string: fields.caps_lock_string,
            },
            (other, _, None) => {
                return Err(parse_error(format!("{} action without <inputString>", other)));
            }
        };

        Ok(ActionRecord {
            action_type,
            movement,
            input,
        })
    }
}

/// Parses a whole `keyboardActionMap` document.
///
/// Element text is trimmed, so a string written with leading or trailing
/// whitespace reads back without it.
pub fn read_action_map(input: &str) -> Result<Vec<ActionRecord>> {
    ActionMapReader::new(input).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use xpad_core::MovementToken;

    #[test]
    fn test_read_mixed_actions() {
        let input = r#"<keyboardActionMap>
    <!-- comment -->
    <keyboardAction>
        <keyboardActionType>INPUT_TEXT</keyboardActionType>
        <movementSequence>INSIDE_CIRCLE;TOP;RIGHT;INSIDE_CIRCLE;</movementSequence>
        <inputString>a</inputString>
        <inputCapsLockString>A</inputCapsLockString>
    </keyboardAction>
    <keyboardAction>
        <keyboardActionType>INPUT_KEY</keyboardActionType>
        <movementSequence>BOTTOM;LONG_PRESS;</movementSequence>
        <flags>
            <flag>1</flag>
        </flags>
        <inputKey>KEYCODE_ENTER</inputKey>
    </keyboardAction>
</keyboardActionMap>"#;

        let records = read_action_map(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].input_string(), Some("a"));
        assert_eq!(records[0].caps_lock_string(), Some("A"));
        assert_eq!(records[1].action_type, ActionType::InputKey);
        assert_eq!(records[1].input, ActionInput::Key("KEYCODE_ENTER".to_string()));
        assert_eq!(records[1].movement.tokens(), &[MovementToken::Bottom, MovementToken::LongPress]);
    }

    #[test]
    fn test_unknown_movement_token() {
        let input = "<keyboardActionMap>\n<keyboardAction>\n<keyboardActionType>INPUT_TEXT</keyboardActionType>\n<movementSequence>UP;</movementSequence>\n<inputString>a</inputString>\n</keyboardAction>\n</keyboardActionMap>";
        match read_action_map(input) {
            Err(Error::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("UP"));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_line_counts_comments_and_text() {
        let input = "<keyboardActionMap>\n<!-- two\nlines -->\n<keyboardAction>\n<inputString";
        match read_action_map(input) {
            Err(Error::Parse { line, message }) => {
                assert_eq!(line, 5);
                assert!(message.contains("Unexpected markup"), "{}", message);
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_action_line_after_multiline_text() {
        let input = "<keyboardActionMap>\n<keyboardAction>\n<keyboardActionType>INPUT_TEXT</keyboardActionType>\n<movementSequence>TOP;\nRIGHT;</movementSequence>\n<inputString>a</inputString>\n</keyboardAction>\n<keyboardAction>\n</keyboardAction>\n</keyboardActionMap>";
        match read_action_map(input) {
            Err(Error::Parse { line, message }) => {
                assert_eq!(line, 8);
                assert!(message.contains("keyboardActionType"), "{}", message);
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_text_whitespace_trimmed() {
        let input = "<keyboardActionMap><keyboardAction><keyboardActionType>INPUT_TEXT</keyboardActionType><movementSequence>TOP;NO_TOUCH;</movementSequence><inputString> me@example.com </inputString></keyboardAction></keyboardActionMap>";
        let records = read_action_map(input).unwrap();
        assert_eq!(records[0].input_string(), Some("me@example.com"));
        assert_eq!(records[0].caps_lock_string(), None);
    }

    #[test]
    fn test_missing_root_close() {
        let input = "<keyboardActionMap>\n<keyboardAction>\n<keyboardActionType>INPUT_SPECIAL</keyboardActionType>\n<movementSequence>TOP;NO_TOUCH;</movementSequence>\n<inputString>SHIFT_TOOGLE</inputString>\n</keyboardAction>\n";
        assert!(matches!(read_action_map(input), Err(Error::Parse { .. })));
    }
}
