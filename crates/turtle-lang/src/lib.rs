pub mod config;
pub mod error;
pub mod runtime;
pub mod syntax;
pub mod types;

pub use config::RunConfig;
pub use error::{Error, Result};
pub use syntax::token::Token;
pub use types::draw::{Color, Point, Rect, Segment};
pub use types::turtle::{TurtleState, MAIN_TURTLE};

use indexmap::IndexMap;
use tracing::debug;

use runtime::interpreter::Interpreter;
use syntax::lexer::tokenize;
use syntax::procedures::extract_procedures;

// ─── Public API types ─────────────────────────────────────────────────────────

/// Everything a renderer needs from one successful run.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    segments: Vec<Segment>,
    bounds: Rect,
    initial_states: IndexMap<String, TurtleState>,
    final_states: IndexMap<String, TurtleState>,
    turtle_order: Vec<String>,
}

impl ExecutionResult {
    pub(crate) fn new(
        segments: Vec<Segment>,
        bounds: Rect,
        initial_states: IndexMap<String, TurtleState>,
        final_states: IndexMap<String, TurtleState>,
        turtle_order: Vec<String>,
    ) -> Self {
        Self { segments, bounds, initial_states, final_states, turtle_order }
    }

    /// Strokes in draw order.
    pub fn segments(&self) -> &[Segment] { &self.segments }

    /// Smallest box around every point visited. Unpadded.
    pub fn bounds(&self) -> Rect { self.bounds }

    /// State each turtle had when it was created or last reset by `CLEAR`.
    pub fn initial_states(&self) -> &IndexMap<String, TurtleState> { &self.initial_states }

    pub fn final_states(&self) -> &IndexMap<String, TurtleState> { &self.final_states }

    pub fn initial_state(&self, id: &str) -> Option<&TurtleState> {
        self.initial_states.get(&id.to_ascii_uppercase())
    }

    pub fn final_state(&self, id: &str) -> Option<&TurtleState> {
        self.final_states.get(&id.to_ascii_uppercase())
    }

    /// Turtle ids in creation order; `MAIN` is always first.
    pub fn turtle_order(&self) -> &[String] { &self.turtle_order }
}

// ─── Public API ───────────────────────────────────────────────────────────────

/// Evaluate a script from scratch with the default configuration.
pub fn run(script: &str) -> Result<ExecutionResult> {
    run_with(script, &RunConfig::default())
}

/// Evaluate a script from scratch. Each call is isolated: no state survives
/// between runs, and a failing run yields only the error.
pub fn run_with(script: &str, config: &RunConfig) -> Result<ExecutionResult> {
    let result = evaluate(script, config);
    match &result {
        Ok(r) => debug!(
            segments = r.segments.len(),
            turtles = r.turtle_order.len(),
            "run finished"
        ),
        Err(e) => debug!(code = e.code(), error = %e, "run failed"),
    }
    result
}

fn evaluate(script: &str, config: &RunConfig) -> Result<ExecutionResult> {
    let tokens = tokenize(script);
    let (main, procedures) = extract_procedures(tokens)?;
    debug!(tokens = main.len(), procedures = procedures.len(), "run started");

    let mut interp = Interpreter::new(&procedures, config);
    interp.execute(&main, 0)?;
    Ok(interp.finish())
}
