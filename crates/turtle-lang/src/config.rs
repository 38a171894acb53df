/// Knobs for a single run. `RunConfig::default()` gives the standard dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Deepest allowed nesting of procedure calls.
    pub max_call_depth: usize,
    /// Seed for `RANDOM`. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl RunConfig {
    pub const DEFAULT_MAX_CALL_DEPTH: usize = 32;

    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Make `RANDOM` reproducible across runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { max_call_depth: Self::DEFAULT_MAX_CALL_DEPTH, seed: None }
    }
}
