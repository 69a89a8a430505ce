//! Recursive-descent JSON parser: tokens to a [`JsonNode`] tree.
//!
//! Nesting depth is bounded by [`ParseOptions::max_depth`] so adversarial
//! input fails with a [`JsonError::Parse`] instead of exhausting the stack.
//! Duplicate object keys are last-write-wins, with the first occurrence
//! keeping its position in the field map.

use crate::error::{JsonError, JsonOutcome};
use crate::lexer::{tokenize, Token, TokenKind};
use crate::node::{JsonNode, JsonNumber, JsonObject};

#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum nesting depth of arrays and objects.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: 512 }
    }
}

/// Parses a token sequence into a tree. The sequence must contain exactly
/// one top-level value; any token after it other than `Eof` is trailing
/// content.
pub fn parse(tokens: &[Token]) -> JsonOutcome<JsonNode> {
    parse_with(tokens, &ParseOptions::default())
}

pub fn parse_with(tokens: &[Token], options: &ParseOptions) -> JsonOutcome<JsonNode> {
    if tokens.is_empty() {
        return Err(JsonError::parse(0, "empty token sequence"));
    }
    let mut parser = Parser {
        tokens,
        x: 0,
        max_depth: options.max_depth,
    };
    let node = parser.parse_value(0)?;
    parser.expect_eof()?;
    Ok(node)
}

/// Tokenizes and parses JSON text in one call.
pub fn parse_text(text: &str) -> JsonOutcome<JsonNode> {
    parse_text_with(text, &ParseOptions::default())
}

pub fn parse_text_with(text: &str, options: &ParseOptions) -> JsonOutcome<JsonNode> {
    parse_with(&tokenize(text)?, options)
}

struct Parser<'a> {
    tokens: &'a [Token],
    x: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> &'a Token {
        // The lexer always terminates the sequence with Eof.
        &self.tokens[self.x.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if self.x < self.tokens.len() {
            self.x += 1;
        }
        token
    }

    fn unexpected(&self, token: &Token, expected: &str) -> JsonError {
        JsonError::parse(
            token.offset,
            format!("expected {expected} but found {}", token.kind.describe()),
        )
    }

    fn parse_value(&mut self, depth: usize) -> JsonOutcome<JsonNode> {
        if depth > self.max_depth {
            let offset = self.peek().offset;
            return Err(JsonError::parse(
                offset,
                format!("nesting deeper than {} levels", self.max_depth),
            ));
        }
        let token = self.advance();
        match &token.kind {
            TokenKind::Null => Ok(JsonNode::Null),
            TokenKind::True => Ok(JsonNode::Bool(true)),
            TokenKind::False => Ok(JsonNode::Bool(false)),
            TokenKind::Num(raw) => Ok(JsonNode::Num(JsonNumber::from_lexed(raw.clone()))),
            TokenKind::Str(s) => Ok(JsonNode::Str(s.clone())),
            TokenKind::OpenBracket => self.parse_array(depth),
            TokenKind::OpenBrace => self.parse_object(depth),
            _ => Err(self.unexpected(token, "a value")),
        }
    }

    fn parse_array(&mut self, depth: usize) -> JsonOutcome<JsonNode> {
        let mut values = Vec::new();
        if self.peek().kind == TokenKind::CloseBracket {
            self.advance();
            return Ok(JsonNode::Array(values));
        }
        loop {
            values.push(self.parse_value(depth + 1)?);
            let token = self.advance();
            match token.kind {
                TokenKind::Comma => {}
                TokenKind::CloseBracket => return Ok(JsonNode::Array(values)),
                _ => return Err(self.unexpected(token, "',' or ']'")),
            }
        }
    }

    fn parse_object(&mut self, depth: usize) -> JsonOutcome<JsonNode> {
        let mut fields = JsonObject::new();
        if self.peek().kind == TokenKind::CloseBrace {
            self.advance();
            return Ok(JsonNode::Object(fields));
        }
        loop {
            let token = self.advance();
            let key = match &token.kind {
                TokenKind::Str(s) => s.clone(),
                _ => return Err(self.unexpected(token, "a string key")),
            };
            let token = self.advance();
            if token.kind != TokenKind::Colon {
                return Err(self.unexpected(token, "':'"));
            }
            let value = self.parse_value(depth + 1)?;
            fields.insert(key, value);
            let token = self.advance();
            match token.kind {
                TokenKind::Comma => {}
                TokenKind::CloseBrace => return Ok(JsonNode::Object(fields)),
                _ => return Err(self.unexpected(token, "',' or '}'")),
            }
        }
    }

    fn expect_eof(&mut self) -> JsonOutcome<()> {
        let token = self.peek();
        if token.kind == TokenKind::Eof {
            Ok(())
        } else {
            Err(JsonError::parse(
                token.offset,
                format!("trailing content: {}", token.kind.describe()),
            ))
        }
    }
}
