use serde::Serialize;

use crate::error::KiwiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Keyword {
    Package,
    Enum,
    Struct,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Integer,
    Identifier,
    Keyword(Keyword),
    Equals,
    Semicolon,
    LeftBrace,
    RightBrace,
    /// `[]`
    Array,
    /// `[deprecated]`
    Deprecated,
    /// Always the last token, with empty text.
    Eof,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind:   TokenKind,
    pub text:   String,
    pub line:   usize,
    pub column: usize,
}

impl Keyword {
    pub fn from_word(word: &str) -> Option<Keyword> {
        match word {
            "package" => Some(Keyword::Package),
            "enum"    => Some(Keyword::Enum),
            "struct"  => Some(Keyword::Struct),
            "message" => Some(Keyword::Message),
            _ => None,
        }
    }
}

impl Token {
    /// Keywords are only special where the grammar asks for one, so they
    /// still count as identifiers everywhere else.
    pub fn is_identifier(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier | TokenKind::Keyword(_))
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

struct Scanner<'a> {
    text:   &'a str,
    pos:    usize,
    line:   usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.text[self.pos..].chars().nth(1)
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn bump_while(&mut self, test: impl Fn(char) -> bool) {
        while self.peek().map_or(false, &test) {
            self.bump();
        }
    }

    fn unexpected(&self) -> KiwiError {
        KiwiError::UnexpectedCharacter {
            found:  self.peek().map(String::from).unwrap_or_default(),
            line:   self.line,
            column: self.column,
        }
    }

    /// Scan the next token, skipping whitespace and comments. Returns
    /// `Ok(None)` at end of input.
    fn next_token(&mut self) -> Result<Option<Token>, KiwiError> {
        loop {
            let c = match self.peek() {
                Some(c) => c,
                None => return Ok(None),
            };

            if c.is_ascii_whitespace() {
                self.bump();
                continue;
            }
            if self.rest().starts_with("//") {
                self.bump_while(|c| c != '\n');
                continue;
            }

            let (start, line, column) = (self.pos, self.line, self.column);
            let kind = if c.is_ascii_digit()
                || (c == '-' && self.peek_second().map_or(false, |c| c.is_ascii_digit()))
            {
                self.bump();
                self.bump_while(|c| c.is_ascii_digit());
                // `12abc` is neither a number nor a name
                if self.peek().map_or(false, is_identifier_char) {
                    return Err(self.unexpected());
                }
                TokenKind::Integer
            } else if let Some(kind) = punctuation(c) {
                self.bump();
                kind
            } else if self.rest().starts_with("[]") {
                self.bump();
                self.bump();
                TokenKind::Array
            } else if self.rest().starts_with("[deprecated]") {
                for _ in 0.."[deprecated]".len() {
                    self.bump();
                }
                TokenKind::Deprecated
            } else if is_identifier_start(c) {
                self.bump_while(is_identifier_char);
                match Keyword::from_word(&self.text[start..self.pos]) {
                    Some(keyword) => TokenKind::Keyword(keyword),
                    None => TokenKind::Identifier,
                }
            } else {
                return Err(self.unexpected());
            };

            return Ok(Some(Token {
                kind,
                text: self.text[start..self.pos].to_owned(),
                line,
                column,
            }));
        }
    }
}

fn punctuation(c: char) -> Option<TokenKind> {
    match c {
        '=' => Some(TokenKind::Equals),
        ';' => Some(TokenKind::Semicolon),
        '{' => Some(TokenKind::LeftBrace),
        '}' => Some(TokenKind::RightBrace),
        _ => None,
    }
}

/// Split schema text into tokens. Comments and whitespace are dropped; any
/// character that cannot start a token is an error. The returned list always
/// ends with an `Eof` token positioned just past the last character.
pub fn tokenize_schema(text: &str) -> Result<Vec<Token>, KiwiError> {
    let mut scanner = Scanner { text, pos: 0, line: 1, column: 1 };
    let mut tokens = Vec::new();

    while let Some(token) = scanner.next_token()? {
        tokens.push(token);
    }

    tokens.push(Token {
        kind:   TokenKind::Eof,
        text:   String::new(),
        line:   scanner.line,
        column: scanner.column,
    });
    Ok(tokens)
}
