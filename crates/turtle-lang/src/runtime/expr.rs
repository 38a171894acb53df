//! Prefix-notation numeric expressions.
//!
//! Every call consumes exactly one fully reduced value: a `:variable`, a
//! literal, a constant, or an operator keyword followed by its operands
//! (each of which may itself be an arbitrarily nested expression).
//! Booleans are 1.0 / 0.0.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{Error, Result};
use crate::runtime::cursor::Cursor;
use crate::runtime::scope::ScopeStack;
use crate::syntax::token::Operator;

/// Tolerance for `EQUAL` / `NOTEQUAL`.
pub const EQUALITY_EPSILON: f64 = 0.0001;

pub struct Evaluator<'a> {
    scopes: &'a ScopeStack,
    rng: &'a mut StdRng,
}

impl<'a> Evaluator<'a> {
    pub fn new(scopes: &'a ScopeStack, rng: &'a mut StdRng) -> Self {
        Self { scopes, rng }
    }

    pub fn read_number(&mut self, cur: &mut Cursor<'_>) -> Result<f64> {
        let tok = cur.next().ok_or(Error::UnexpectedEndOfInput)?;

        if let Some(name) = tok.variable_name() {
            return self.scopes.get(&name).ok_or(Error::UndefinedVariable(name));
        }

        if let Some(op) = Operator::lookup(tok) {
            return self.apply(op, cur);
        }

        if tok.is_bracket() {
            return Err(Error::InvalidExpression(tok.text().to_string()));
        }

        tok.as_number().ok_or_else(|| Error::InvalidNumber(tok.text().to_string()))
    }

    fn apply(&mut self, op: Operator, cur: &mut Cursor<'_>) -> Result<f64> {
        let value = match op {
            Operator::Pi     => std::f64::consts::PI,
            Operator::E      => std::f64::consts::E,
            Operator::Abs    => self.read_number(cur)?.abs(),
            Operator::Neg    => -self.read_number(cur)?,
            Operator::Random => {
                let n = self.read_number(cur)?;
                self.random_below(n)
            }
            Operator::Sum | Operator::Difference | Operator::Product | Operator::Quotient
            | Operator::Remainder | Operator::Min | Operator::Max | Operator::Power
            | Operator::Less | Operator::Greater | Operator::Equal | Operator::NotEqual => {
                let a = self.read_number(cur)?;
                let b = self.read_number(cur)?;
                binary(op, a, b)
            }
        };
        Ok(value)
    }

    /// Uniform in `[0, n)`; 0 when the range is empty or unbounded.
    fn random_below(&mut self, n: f64) -> f64 {
        if n > 0.0 && n.is_finite() { self.rng.gen_range(0.0..n) } else { 0.0 }
    }
}

fn truth(b: bool) -> f64 { if b { 1.0 } else { 0.0 } }

/// Division and remainder by zero yield 0 instead of failing.
fn binary(op: Operator, a: f64, b: f64) -> f64 {
    match op {
        Operator::Sum        => a + b,
        Operator::Difference => a - b,
        Operator::Product    => a * b,
        Operator::Quotient   => if b == 0.0 { 0.0 } else { a / b },
        Operator::Remainder  => if b == 0.0 { 0.0 } else { a % b },
        Operator::Min        => a.min(b),
        Operator::Max        => a.max(b),
        Operator::Power      => a.powf(b),
        Operator::Less       => truth(a < b),
        Operator::Greater    => truth(a > b),
        Operator::Equal      => truth((a - b).abs() < EQUALITY_EPSILON),
        Operator::NotEqual   => truth((a - b).abs() >= EQUALITY_EPSILON),
        Operator::Abs | Operator::Neg | Operator::Random | Operator::Pi | Operator::E => {
            unreachable!("{op:?} is not a binary operator")
        }
    }
}
