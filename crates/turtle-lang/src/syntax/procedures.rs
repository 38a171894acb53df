//! `TO name :p1 :p2 ... END` extraction.
//!
//! A single pre-pass lifts every definition out of the token stream before
//! execution starts, so calls may precede definitions.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::syntax::token::Token;

#[derive(Debug, Clone, PartialEq)]
pub struct Procedure {
    /// Uppercased.
    pub name: String,
    /// Uppercased, `:` stripped, in declaration order.
    pub params: Vec<String>,
    pub body: Vec<Token>,
}

#[derive(Debug, Clone, Default)]
pub struct ProcedureTable(HashMap<String, Procedure>);

impl ProcedureTable {
    pub fn get(&self, name: &str) -> Option<&Procedure> {
        self.0.get(&name.to_ascii_uppercase())
    }

    pub fn contains(&self, name: &str) -> bool { self.get(name).is_some() }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Later definitions of the same name replace earlier ones.
    fn define(&mut self, proc: Procedure) {
        self.0.insert(proc.name.clone(), proc);
    }
}

/// Split `tokens` into the executable residue and the procedure table.
///
/// `END` closes a definition unconditionally; brackets inside a body are not
/// tracked, and definitions do not nest.
pub fn extract_procedures(tokens: Vec<Token>) -> Result<(Vec<Token>, ProcedureTable)> {
    let mut residual = Vec::with_capacity(tokens.len());
    let mut table = ProcedureTable::default();
    let mut iter = tokens.into_iter().peekable();

    while let Some(tok) = iter.next() {
        if !tok.is("TO") {
            residual.push(tok);
            continue;
        }

        let name = iter.next().ok_or(Error::UnexpectedEndOfInput)?.upper();

        let mut params = Vec::new();
        while let Some(param) = iter.peek().and_then(Token::variable_name) {
            params.push(param);
            iter.next();
        }

        let mut body = Vec::new();
        loop {
            match iter.next() {
                Some(t) if t.is("END") => break,
                Some(t) => body.push(t),
                None => return Err(Error::MissingEnd(name)),
            }
        }

        table.define(Procedure { name, params, body });
    }

    Ok((residual, table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::lexer::tokenize;
    use pretty_assertions::assert_eq;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::text).collect()
    }

    #[test]
    fn lifts_definition_out_of_stream() {
        let (rest, table) = extract_procedures(tokenize(
            "fd 10 to sq :s fd :s rt 90 end sq 50",
        )).unwrap();
        assert_eq!(texts(&rest), vec!["fd", "10", "sq", "50"]);

        let sq = table.get("SQ").unwrap();
        assert_eq!(sq.name, "SQ");
        assert_eq!(sq.params, vec!["S".to_string()]);
        assert_eq!(texts(&sq.body), vec!["fd", ":s", "rt", "90"]);
    }

    #[test]
    fn params_stop_at_first_non_variable() {
        let (_, table) = extract_procedures(tokenize("TO BOX :W :H FD :W :X END")).unwrap();
        let p = table.get("box").unwrap();
        assert_eq!(p.params, vec!["W".to_string(), "H".to_string()]);
        assert_eq!(texts(&p.body), vec!["FD", ":W", ":X"]);
    }

    #[test]
    fn brackets_in_body_are_captured_verbatim() {
        let (_, table) = extract_procedures(tokenize("TO STAR REPEAT 5 [ FD 10 RT 144 ] END")).unwrap();
        assert_eq!(table.get("STAR").unwrap().body.len(), 8);
    }

    #[test]
    fn redefinition_overwrites() {
        let (_, table) = extract_procedures(tokenize("TO A FD 1 END TO a FD 2 END")).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(texts(&table.get("A").unwrap().body), vec!["FD", "2"]);
    }

    #[test]
    fn missing_end() {
        let err = extract_procedures(tokenize("to spin rt 10")).unwrap_err();
        assert_eq!(err, Error::MissingEnd("SPIN".into()));
    }

    #[test]
    fn to_without_name() {
        let err = extract_procedures(tokenize("fd 10 TO")).unwrap_err();
        assert_eq!(err, Error::UnexpectedEndOfInput);
    }

    #[test]
    fn no_definitions() {
        let (rest, table) = extract_procedures(tokenize("fd 10 rt 90")).unwrap();
        assert_eq!(rest.len(), 4);
        assert!(table.is_empty());
    }
}
