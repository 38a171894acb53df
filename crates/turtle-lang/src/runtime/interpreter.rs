//! Statement executor. Walks a token slice command by command, mutating the
//! per-run context (turtles, scopes, segments, bounds). Blocks and procedure
//! bodies are executed by recursing on sub-slices with a fresh cursor.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::trace;

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::runtime::cursor::Cursor;
use crate::runtime::expr::Evaluator;
use crate::runtime::scope::ScopeStack;
use crate::syntax::procedures::ProcedureTable;
use crate::syntax::token::{Command, Token};
use crate::types::draw::{BoundsTracker, Color, Point, Segment};
use crate::types::turtle::TurtleRegistry;
use crate::ExecutionResult;

pub struct Interpreter<'p> {
    procedures: &'p ProcedureTable,
    max_call_depth: usize,
    turtles: TurtleRegistry,
    scopes: ScopeStack,
    segments: Vec<Segment>,
    bounds: BoundsTracker,
    rng: StdRng,
}

impl<'p> Interpreter<'p> {
    pub fn new(procedures: &'p ProcedureTable, config: &RunConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            procedures,
            max_call_depth: config.max_call_depth,
            turtles: TurtleRegistry::new(),
            scopes: ScopeStack::new(),
            segments: Vec::new(),
            bounds: BoundsTracker::new(),
            rng,
        }
    }

    /// Run every statement in `tokens`. `depth` counts active procedure calls.
    pub fn execute(&mut self, tokens: &[Token], depth: usize) -> Result<()> {
        if depth > self.max_call_depth {
            return Err(Error::RecursionLimitReached);
        }
        let mut cur = Cursor::new(tokens);
        while !cur.is_at_end() {
            self.exec_statement(&mut cur, depth)?;
        }
        Ok(())
    }

    /// Package the final state. Consumes the interpreter.
    pub fn finish(mut self) -> ExecutionResult {
        // After a CLEAR, turtles parked at the origin may not have been
        // registered again; keep every final position inside the box.
        if self.bounds.is_initialized() {
            for p in self.turtles.positions() {
                self.bounds.register(p);
            }
        }
        let bounds = self.bounds.rect();
        let (order, initial, current) = self.turtles.into_parts();
        ExecutionResult::new(self.segments, bounds, initial, current, order)
    }

    // ─── Statements ───────────────────────────────────────────────────────────

    fn exec_statement(&mut self, cur: &mut Cursor<'_>, depth: usize) -> Result<()> {
        let tok = cur.next().ok_or(Error::UnexpectedEndOfInput)?;
        if tok.is_bracket() {
            return Err(Error::UnexpectedToken(tok.text().to_string()));
        }
        match Command::lookup(tok) {
            Some(cmd) => self.exec_command(cmd, cur, depth),
            None => self.call_procedure(tok, cur, depth),
        }
    }

    fn exec_command(&mut self, cmd: Command, cur: &mut Cursor<'_>, depth: usize) -> Result<()> {
        match cmd {
            Command::Forward => {
                let d = self.number(cur)?;
                self.advance(d);
            }
            Command::Back => {
                let d = self.number(cur)?;
                self.advance(-d);
            }
            Command::Right => {
                let a = self.number(cur)?;
                self.turtles.active_mut().heading -= a;
            }
            Command::Left => {
                let a = self.number(cur)?;
                self.turtles.active_mut().heading += a;
            }
            Command::PenUp   => self.turtles.active_mut().pen_down = false,
            Command::PenDown => self.turtles.active_mut().pen_down = true,
            Command::Home => {
                let t = self.turtles.active_mut();
                t.position = Point::ORIGIN;
                t.heading = 0.0;
                self.bounds.register(Point::ORIGIN);
            }
            Command::Clear => {
                self.segments.clear();
                self.turtles.reset_poses();
                self.bounds.reset();
            }
            Command::Color => {
                let r = self.number(cur)?;
                let g = self.number(cur)?;
                let b = self.number(cur)?;
                self.turtles.active_mut().pen_color = Color::from_rgb255(r, g, b);
            }
            Command::SetXY => {
                let x = self.number(cur)?;
                let y = self.number(cur)?;
                // Teleport: never draws, even with the pen down.
                let p = Point::new(x, y);
                self.turtles.active_mut().position = p;
                self.bounds.register(p);
            }
            Command::SetHeading => {
                let a = self.number(cur)?;
                self.turtles.active_mut().heading = a;
            }
            Command::Repeat => {
                let count = self.number(cur)?;
                let times = count.round();
                if times < 0.0 {
                    return Err(Error::InvalidRepeatCount(count));
                }
                let block = cur.read_block()?;
                for _ in 0..times as u64 {
                    self.execute(block, depth)?;
                }
            }
            Command::Turtle => {
                let id = identifier(cur, "TURTLE")?;
                if self.turtles.select(&id) {
                    trace!(turtle = %id, "turtle created");
                    self.bounds.register(self.turtles.active().position);
                }
            }
            Command::Make => {
                let name = identifier(cur, "MAKE")?;
                let value = self.number(cur)?;
                self.scopes.assign(&name, value);
            }
            Command::If => {
                let cond = self.number(cur)?;
                let then_block = cur.read_block()?;
                let else_block = match cur.peek() {
                    Some(t) if t.is_open_bracket() => Some(cur.read_block()?),
                    _ => None,
                };
                if cond != 0.0 {
                    self.execute(then_block, depth)?;
                } else if let Some(block) = else_block {
                    self.execute(block, depth)?;
                }
            }
            Command::IfElse => {
                let cond = self.number(cur)?;
                let then_block = cur.read_block()?;
                let else_block = cur.read_block()?;
                self.execute(if cond != 0.0 { then_block } else { else_block }, depth)?;
            }
        }
        Ok(())
    }

    /// Anything that is not a built-in command must name a procedure.
    fn call_procedure(&mut self, tok: &Token, cur: &mut Cursor<'_>, depth: usize) -> Result<()> {
        let procedures = self.procedures;
        let proc = procedures
            .get(tok.text())
            .ok_or_else(|| Error::UnexpectedToken(tok.text().to_string()))?;

        let mut frame = HashMap::with_capacity(proc.params.len());
        for param in &proc.params {
            let value = self.number(cur)?;
            frame.insert(param.clone(), value);
        }

        trace!(procedure = %proc.name, depth = depth + 1, "call");
        self.scopes.push(frame);
        let result = self.execute(&proc.body, depth + 1);
        self.scopes.pop();
        result
    }

    // ─── Helpers ──────────────────────────────────────────────────────────────

    /// Evaluate one operand. Non-finite results (`POWER -1 0.5`, `POWER 10 400`)
    /// are rejected here so they never reach a turtle or the bounds.
    fn number(&mut self, cur: &mut Cursor<'_>) -> Result<f64> {
        let head = cur.peek();
        let value = Evaluator::new(&self.scopes, &mut self.rng).read_number(cur)?;
        match head {
            Some(tok) if !value.is_finite() => Err(Error::InvalidExpression(tok.text().to_string())),
            _ => Ok(value),
        }
    }

    /// Move the active turtle along its heading, drawing if the pen is down.
    /// Both endpoints count toward the bounds, pen up or not.
    fn advance(&mut self, distance: f64) {
        let turtle = self.turtles.active();
        let start = turtle.position;
        let end = turtle.point_ahead(distance);
        if turtle.pen_down {
            self.segments.push(Segment {
                start,
                end,
                heading: turtle.heading,
                color: turtle.pen_color,
                line_width: turtle.line_width,
                turtle: self.turtles.active_id().to_string(),
            });
        }
        self.bounds.register(start);
        self.bounds.register(end);
        self.turtles.active_mut().position = end;
    }
}

/// Name operand of `MAKE`/`TURTLE`.
fn identifier(cur: &mut Cursor<'_>, keyword: &str) -> Result<String> {
    match cur.next() {
        Some(t) if !t.is_bracket() => Ok(t.symbol_name()),
        _ => Err(Error::MissingIdentifier(keyword.to_string())),
    }
}
