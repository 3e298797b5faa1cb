use logos::Logos;

/// Tokens of a `keyboardActionMap` document. The format never uses
/// attributes, so tags are matched as plain names.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Comments and whitespace between tags (skipped)
    #[regex(r"<!--([^-]|-[^-])*-->", logos::skip)]
    #[regex(r"<\?[^?]*\?>", logos::skip)]
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Comment,

    #[regex(r"<[a-zA-Z][a-zA-Z0-9_]*>", |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    Open(String),

    #[regex(r"</[a-zA-Z][a-zA-Z0-9_]*>", |lex| {
        let s = lex.slice();
        s[2..s.len()-1].to_string()
    })]
    Close(String),

    // Element content, with surrounding whitespace trimmed
    #[regex(r"[^<\s][^<]*", |lex| unescape_text(lex.slice().trim_end()))]
    Text(String),
}

impl Token {
    pub fn is_open(&self, name: &str) -> bool {
        matches!(self, Token::Open(n) if n == name)
    }

    pub fn is_close(&self, name: &str) -> bool {
        matches!(self, Token::Close(n) if n == name)
    }
}

/// Reverses the writer's escaping of element content
pub fn unescape_text(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
