use super::gesture::MovementSequence;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// Sends an Android keycode
    InputKey,
    /// Commits literal text
    InputText,
    /// Triggers a keyboard function (paste, shift, ...)
    InputSpecial,
}

impl ActionType {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::InputKey => "INPUT_KEY",
            ActionType::InputText => "INPUT_TEXT",
            ActionType::InputSpecial => "INPUT_SPECIAL",
        }
    }
}

impl FromStr for ActionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INPUT_KEY" => Ok(ActionType::InputKey),
            "INPUT_TEXT" => Ok(ActionType::InputText),
            "INPUT_SPECIAL" => Ok(ActionType::InputSpecial),
            other => Err(format!("Unknown action type: {}", other)),
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionInput {
    /// `<inputKey>`
    Key(String),
    /// `<inputString>` and optional `<inputCapsLockString>`
    Text {
        input_string: String,
        caps_lock_string: Option<String>,
    },
}

/// One `<keyboardAction>` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    pub action_type: ActionType,
    pub movement: MovementSequence,
    pub input: ActionInput,
}

impl ActionRecord {
    /// Text action with both the normal and the caps lock string
    pub fn text(movement: MovementSequence, input_string: impl Into<String>, caps_lock_string: impl Into<String>) -> Self {
        Self {
            action_type: ActionType::InputText,
            movement,
            input: ActionInput::Text {
                input_string: input_string.into(),
                caps_lock_string: Some(caps_lock_string.into()),
            },
        }
    }

    pub fn input_string(&self) -> Option<&str> {
        match &self.input {
            ActionInput::Text { input_string, .. } => Some(input_string),
            ActionInput::Key(_) => None,
        }
    }

    pub fn caps_lock_string(&self) -> Option<&str> {
        match &self.input {
            ActionInput::Text { caps_lock_string, .. } => caps_lock_string.as_deref(),
            ActionInput::Key(_) => None,
        }
    }
}
