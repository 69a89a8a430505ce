//! JSON lexer: text to a finite token sequence.
//!
//! Tokenization is eager and fail-fast: the first malformed token aborts
//! with a [`JsonError::Lex`] carrying the byte offset. String escapes are
//! fully decoded here (including `\uXXXX` surrogate pairs), and numeric
//! literals are validated against the RFC 8259 grammar but kept as raw text
//! so the parser can preserve their exact decimal form.

use crate::error::{JsonError, JsonOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Comma,
    Colon,
    /// String literal with escapes already decoded.
    Str(String),
    /// Numeric literal as validated raw text.
    Num(String),
    True,
    False,
    Null,
    Eof,
}

impl TokenKind {
    /// Short description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::OpenBrace => "'{'".to_string(),
            TokenKind::CloseBrace => "'}'".to_string(),
            TokenKind::OpenBracket => "'['".to_string(),
            TokenKind::CloseBracket => "']'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Colon => "':'".to_string(),
            TokenKind::Str(s) => format!("string \"{s}\""),
            TokenKind::Num(n) => format!("number {n}"),
            TokenKind::True => "'true'".to_string(),
            TokenKind::False => "'false'".to_string(),
            TokenKind::Null => "'null'".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// A token plus the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

/// Tokenizes JSON text. The returned sequence always ends with an `Eof`
/// token.
pub fn tokenize(text: &str) -> JsonOutcome<Vec<Token>> {
    Lexer::new(text).run()
}

struct Lexer<'a> {
    data: &'a [u8],
    x: usize,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            data: text.as_bytes(),
            x: 0,
        }
    }

    fn run(mut self) -> JsonOutcome<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let offset = self.x;
            if self.x >= self.data.len() {
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    offset,
                });
                return Ok(tokens);
            }
            let kind = match self.data[self.x] {
                b'{' => {
                    self.x += 1;
                    TokenKind::OpenBrace
                }
                b'}' => {
                    self.x += 1;
                    TokenKind::CloseBrace
                }
                b'[' => {
                    self.x += 1;
                    TokenKind::OpenBracket
                }
                b']' => {
                    self.x += 1;
                    TokenKind::CloseBracket
                }
                b',' => {
                    self.x += 1;
                    TokenKind::Comma
                }
                b':' => {
                    self.x += 1;
                    TokenKind::Colon
                }
                b'"' => TokenKind::Str(self.read_str()?),
                b't' => self.read_keyword(b"true", TokenKind::True)?,
                b'f' => self.read_keyword(b"false", TokenKind::False)?,
                b'n' => self.read_keyword(b"null", TokenKind::Null)?,
                c if c == b'-' || c.is_ascii_digit() => TokenKind::Num(self.read_num()?),
                c => {
                    return Err(JsonError::lex(
                        self.x,
                        format!("unexpected character '{}'", c as char),
                    ))
                }
            };
            tokens.push(Token { kind, offset });
        }
    }

    fn skip_whitespace(&mut self) {
        while self.x < self.data.len() {
            match self.data[self.x] {
                b' ' | b'\t' | b'\n' | b'\r' => self.x += 1,
                _ => break,
            }
        }
    }

    fn read_keyword(&mut self, word: &[u8], kind: TokenKind) -> JsonOutcome<TokenKind> {
        if self.x + word.len() <= self.data.len() && &self.data[self.x..self.x + word.len()] == word
        {
            self.x += word.len();
            Ok(kind)
        } else {
            Err(JsonError::lex(self.x, "invalid literal"))
        }
    }

    fn read_num(&mut self) -> JsonOutcome<String> {
        let start = self.x;
        let data = self.data;
        let len = data.len();
        let mut x = self.x;

        if data[x] == b'-' {
            x += 1;
        }
        // Integer part: `0` alone or a nonzero digit run. `01` is malformed.
        match data.get(x) {
            Some(b'0') => {
                x += 1;
                if matches!(data.get(x), Some(d) if d.is_ascii_digit()) {
                    return Err(JsonError::lex(start, "leading zero in number"));
                }
            }
            Some(b'1'..=b'9') => {
                while x < len && data[x].is_ascii_digit() {
                    x += 1;
                }
            }
            _ => return Err(JsonError::lex(start, "expected digit in number")),
        }
        if data.get(x) == Some(&b'.') {
            x += 1;
            if !matches!(data.get(x), Some(d) if d.is_ascii_digit()) {
                return Err(JsonError::lex(start, "expected digit after decimal point"));
            }
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        if matches!(data.get(x), Some(b'e') | Some(b'E')) {
            x += 1;
            if matches!(data.get(x), Some(b'+') | Some(b'-')) {
                x += 1;
            }
            if !matches!(data.get(x), Some(d) if d.is_ascii_digit()) {
                return Err(JsonError::lex(start, "expected digit in exponent"));
            }
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        self.x = x;
        // Safe: the scanned range is ASCII.
        Ok(std::str::from_utf8(&data[start..x])
            .expect("number literal is ASCII")
            .to_string())
    }

    fn read_str(&mut self) -> JsonOutcome<String> {
        let data = self.data;
        let start = self.x;
        self.x += 1; // opening quote
        let mut out = String::new();
        loop {
            if self.x >= data.len() {
                return Err(JsonError::lex(start, "unterminated string"));
            }
            match data[self.x] {
                b'"' => {
                    self.x += 1;
                    return Ok(out);
                }
                b'\\' => {
                    self.x += 1;
                    self.read_escape(&mut out)?;
                }
                c if c < 0x20 => {
                    return Err(JsonError::lex(
                        self.x,
                        "unescaped control character in string",
                    ));
                }
                c if c < 0x80 => {
                    out.push(c as char);
                    self.x += 1;
                }
                _ => {
                    // Multi-byte UTF-8 sequence; the input is a &str, so it
                    // is valid. Copy the whole sequence.
                    let seq_len = utf8_len(data[self.x]);
                    out.push_str(
                        std::str::from_utf8(&data[self.x..self.x + seq_len])
                            .expect("input text is valid UTF-8"),
                    );
                    self.x += seq_len;
                }
            }
        }
    }

    fn read_escape(&mut self, out: &mut String) -> JsonOutcome<()> {
        let esc_pos = self.x - 1;
        let Some(&c) = self.data.get(self.x) else {
            return Err(JsonError::lex(esc_pos, "unterminated string"));
        };
        self.x += 1;
        match c {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            b'b' => out.push('\u{0008}'),
            b'f' => out.push('\u{000C}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'u' => {
                let unit = self.read_hex4(esc_pos)?;
                let ch = match unit {
                    0xD800..=0xDBFF => {
                        // High surrogate: a `\uXXXX` low surrogate must follow.
                        if self.data.get(self.x) != Some(&b'\\')
                            || self.data.get(self.x + 1) != Some(&b'u')
                        {
                            return Err(JsonError::lex(esc_pos, "lone surrogate in string"));
                        }
                        self.x += 2;
                        let low = self.read_hex4(esc_pos)?;
                        if !(0xDC00..=0xDFFF).contains(&low) {
                            return Err(JsonError::lex(esc_pos, "invalid surrogate pair"));
                        }
                        let cp =
                            0x10000 + (((unit - 0xD800) as u32) << 10) + (low - 0xDC00) as u32;
                        char::from_u32(cp)
                            .ok_or_else(|| JsonError::lex(esc_pos, "invalid surrogate pair"))?
                    }
                    0xDC00..=0xDFFF => {
                        return Err(JsonError::lex(esc_pos, "lone surrogate in string"))
                    }
                    _ => char::from_u32(unit as u32)
                        .ok_or_else(|| JsonError::lex(esc_pos, "invalid unicode escape"))?,
                };
                out.push(ch);
            }
            _ => {
                return Err(JsonError::lex(
                    esc_pos,
                    format!("invalid escape '\\{}'", c as char),
                ))
            }
        }
        Ok(())
    }

    fn read_hex4(&mut self, esc_pos: usize) -> JsonOutcome<u16> {
        if self.x + 4 > self.data.len() {
            return Err(JsonError::lex(esc_pos, "truncated unicode escape"));
        }
        let hex = std::str::from_utf8(&self.data[self.x..self.x + 4])
            .ok()
            .filter(|s| s.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| JsonError::lex(esc_pos, "invalid unicode escape"))?;
        self.x += 4;
        Ok(u16::from_str_radix(hex, 16).expect("four hex digits"))
    }
}

fn utf8_len(first_byte: u8) -> usize {
    match first_byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}
