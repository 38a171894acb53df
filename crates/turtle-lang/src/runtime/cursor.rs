use crate::error::{Error, Result};
use crate::syntax::token::Token;

/// Read position over an immutable token slice. Each block or procedure body
/// gets its own cursor; nothing else is shared between recursive calls.
#[derive(Debug, Clone)]
pub struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Cursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn peek(&self) -> Option<&'t Token> { self.tokens.get(self.pos) }

    pub fn next(&mut self) -> Option<&'t Token> {
        let tok = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(tok)
    }

    pub fn is_at_end(&self) -> bool { self.pos >= self.tokens.len() }

    pub fn position(&self) -> usize { self.pos }

    /// Consume `[ ... ]` and return the tokens between the outer brackets.
    /// Nested brackets are matched by depth.
    pub fn read_block(&mut self) -> Result<&'t [Token]> {
        if !self.peek().is_some_and(Token::is_open_bracket) {
            return Err(Error::MissingBlock);
        }
        let start = self.pos + 1;
        let mut depth = 0usize;
        for (i, tok) in self.tokens.iter().enumerate().skip(self.pos) {
            if tok.is_open_bracket() {
                depth += 1;
            } else if tok.is_close_bracket() {
                depth -= 1;
                if depth == 0 {
                    self.pos = i + 1;
                    return Ok(&self.tokens[start..i]);
                }
            }
        }
        Err(Error::MissingBlock)
    }
}
