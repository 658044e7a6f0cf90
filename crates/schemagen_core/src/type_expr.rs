//! Textual type expressions.
//!
//! ```text
//! type := name ('<' arg (',' arg)* '>')? '?'?
//! arg  := '*' | type
//! ```
//!
//! `Vec<User?>?` is a nullable sequence of nullable `User`s and `Vec<*>` a
//! sequence with an unbounded element type. Names may be qualified (`a::User`).

use crate::registry::ClassRegistry;
use crate::use_site::{TypeArgument, UseSiteType};
use thiserror::Error;

/// An error while parsing a type expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeExprError {
    #[error("unexpected end of type expression")]
    UnexpectedEof,
    #[error("unexpected `{found}` at offset {offset}")]
    Unexpected { found: char, offset: usize },
    #[error("unknown class `{name}` at offset {offset}")]
    UnknownClass { name: String, offset: usize },
}

/// Parses a type expression against the classes in `registry`.
pub fn parse(source: &str, registry: &ClassRegistry) -> Result<UseSiteType, TypeExprError> {
    let mut parser = Parser {
        source,
        pos: 0,
        registry,
    };
    let ty = parser.parse_type()?;
    parser.skip_whitespace();
    match parser.peek() {
        None => Ok(ty),
        Some(found) => Err(TypeExprError::Unexpected {
            found,
            offset: parser.pos,
        }),
    }
}

struct Parser<'a> {
    source: &'a str,
    pos: usize,
    registry: &'a ClassRegistry,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), TypeExprError> {
        if self.eat(expected) {
            return Ok(());
        }
        match self.peek() {
            None => Err(TypeExprError::UnexpectedEof),
            Some(found) => Err(TypeExprError::Unexpected {
                found,
                offset: self.pos,
            }),
        }
    }

    fn parse_name(&mut self) -> Result<(usize, &'a str), TypeExprError> {
        self.skip_whitespace();
        let start = self.pos;
        match self.peek() {
            None => return Err(TypeExprError::UnexpectedEof),
            Some(c) if c.is_alphabetic() || c == '_' => {}
            Some(found) => {
                return Err(TypeExprError::Unexpected {
                    found,
                    offset: start,
                })
            }
        }
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == ':')
        {
            self.bump();
        }
        let source = self.source;
        Ok((start, &source[start..self.pos]))
    }

    fn parse_type(&mut self) -> Result<UseSiteType, TypeExprError> {
        let (offset, name) = self.parse_name()?;
        let class = self
            .registry
            .lookup(name)
            .ok_or_else(|| TypeExprError::UnknownClass {
                name: name.to_string(),
                offset,
            })?;
        let mut ty = UseSiteType::new(class);

        if self.eat('<') {
            loop {
                if self.eat('*') {
                    ty.arguments.push(TypeArgument::Star);
                } else {
                    ty.arguments.push(TypeArgument::Type(self.parse_type()?));
                }
                if !self.eat(',') {
                    break;
                }
            }
            self.expect('>')?;
        }

        if self.eat('?') {
            ty.nullable = true;
        }
        Ok(ty)
    }
}
