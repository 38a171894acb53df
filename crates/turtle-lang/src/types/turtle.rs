use indexmap::IndexMap;

use crate::types::draw::{Color, Point};

/// Id of the turtle every run starts with.
pub const MAIN_TURTLE: &str = "MAIN";

#[derive(Debug, Clone, PartialEq)]
pub struct TurtleState {
    pub position: Point,
    /// Degrees; 0 points up (+y). RIGHT decreases it, LEFT increases it.
    pub heading: f64,
    pub pen_down: bool,
    pub pen_color: Color,
    pub line_width: f64,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            heading: 0.0,
            pen_down: true,
            pen_color: Color::BLUE,
            line_width: 2.0,
        }
    }
}

impl TurtleState {
    /// Point reached by travelling `distance` along the current heading.
    /// Heading 0 is +y, so x follows sin and y follows cos.
    pub fn point_ahead(&self, distance: f64) -> Point {
        let rad = self.heading.to_radians();
        Point::new(
            self.position.x + rad.sin() * distance,
            self.position.y + rad.cos() * distance,
        )
    }

    pub fn reset_pose(&mut self) {
        self.position = Point::ORIGIN;
        self.heading = 0.0;
    }
}

/// All turtles of one run, in creation order, plus the state each had when
/// it was registered (or last reset by `CLEAR`).
#[derive(Debug, Clone)]
pub struct TurtleRegistry {
    current: IndexMap<String, TurtleState>,
    initial: IndexMap<String, TurtleState>,
    active: String,
}

impl TurtleRegistry {
    /// Registry holding only the default `MAIN` turtle, active.
    pub fn new() -> Self {
        let mut registry = Self {
            current: IndexMap::new(),
            initial: IndexMap::new(),
            active: MAIN_TURTLE.to_string(),
        };
        registry.ensure(MAIN_TURTLE);
        registry
    }

    /// Register `id` with default state if unseen. Returns true when created.
    pub fn ensure(&mut self, id: &str) -> bool {
        if self.current.contains_key(id) {
            return false;
        }
        let state = TurtleState::default();
        self.initial.insert(id.to_string(), state.clone());
        self.current.insert(id.to_string(), state);
        true
    }

    /// Make `id` the target of subsequent commands, creating it if needed.
    pub fn select(&mut self, id: &str) -> bool {
        let created = self.ensure(id);
        self.active = id.to_string();
        created
    }

    pub fn active_id(&self) -> &str { &self.active }

    pub fn active(&self) -> &TurtleState {
        &self.current[self.active.as_str()]
    }

    pub fn active_mut(&mut self) -> &mut TurtleState {
        let id = self.active.as_str();
        &mut self.current[id]
    }

    /// Reset every turtle's pose and record the reset state as its initial state.
    pub fn reset_poses(&mut self) {
        for (id, state) in self.current.iter_mut() {
            state.reset_pose();
            self.initial.insert(id.clone(), state.clone());
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.current.values().map(|s| s.position)
    }

    pub fn into_parts(self) -> (Vec<String>, IndexMap<String, TurtleState>, IndexMap<String, TurtleState>) {
        let order = self.current.keys().cloned().collect();
        (order, self.initial, self.current)
    }
}

impl Default for TurtleRegistry {
    fn default() -> Self { Self::new() }
}
