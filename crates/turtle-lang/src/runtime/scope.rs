use std::collections::HashMap;

/// Variable scopes, innermost last. Index 0 is the global scope and is never
/// popped.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    scopes: Vec<HashMap<String, f64>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self { scopes: vec![HashMap::new()] }
    }

    pub fn push(&mut self, frame: HashMap<String, f64>) { self.scopes.push(frame); }
    pub fn pop(&mut self) { if self.scopes.len() > 1 { self.scopes.pop(); } }

    pub fn depth(&self) -> usize { self.scopes.len() }

    /// Innermost binding wins.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.scopes.iter().rev().find_map(|s| s.get(name).copied())
    }

    /// `MAKE` semantics: overwrite the innermost scope that already binds
    /// `name`; otherwise create the binding in the global scope.
    pub fn assign(&mut self, name: &str, value: f64) {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(slot) = scope.get_mut(name) {
                *slot = value;
                return;
            }
        }
        self.scopes[0].insert(name.to_string(), value);
    }
}

impl Default for ScopeStack {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn innermost_binding_shadows() {
        let mut s = ScopeStack::new();
        s.assign("X", 1.0);
        s.push(frame(&[("X", 2.0)]));
        assert_eq!(s.get("X"), Some(2.0));
        s.pop();
        assert_eq!(s.get("X"), Some(1.0));
    }

    #[test]
    fn assign_updates_existing_parameter() {
        let mut s = ScopeStack::new();
        s.assign("X", 1.0);
        s.push(frame(&[("X", 2.0)]));
        s.assign("X", 5.0);
        assert_eq!(s.get("X"), Some(5.0));
        s.pop();
        assert_eq!(s.get("X"), Some(1.0));
    }

    #[test]
    fn new_names_land_in_global_scope() {
        let mut s = ScopeStack::new();
        s.push(frame(&[("N", 3.0)]));
        s.push(frame(&[]));
        s.assign("TOTAL", 9.0);
        s.pop();
        s.pop();
        assert_eq!(s.get("TOTAL"), Some(9.0));
        assert_eq!(s.get("N"), None);
    }

    #[test]
    fn enclosing_parameter_is_written_through() {
        let mut s = ScopeStack::new();
        s.push(frame(&[("N", 3.0)]));
        s.push(frame(&[("M", 1.0)]));
        s.assign("N", 7.0);
        s.pop();
        assert_eq!(s.get("N"), Some(7.0));
        s.pop();
        assert_eq!(s.get("N"), None);
    }

    #[test]
    fn global_scope_is_never_popped() {
        let mut s = ScopeStack::new();
        s.assign("X", 1.0);
        s.pop();
        assert_eq!(s.depth(), 1);
        assert_eq!(s.get("X"), Some(1.0));
    }
}
