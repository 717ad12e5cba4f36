//! The simulation aggregate: grid, rules and metadata

use super::{Grid, RuleSet};
use serde::Serialize;

pub const DEFAULT_VERSION: &str = "1.0";
pub const DEFAULT_UNIVERSE_NAME: &str = "Default";

/// Everything needed to persist and resume a simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationState {
    version: String,
    universe_name: String,
    size: usize,
    iteration_count: u64,
    rules: RuleSet,
    grid: Grid,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            universe_name: DEFAULT_UNIVERSE_NAME.to_string(),
            size: 0,
            iteration_count: 0,
            rules: RuleSet::default(),
            grid: Grid::default(),
        }
    }
}

impl SimulationState {
    /// Create an empty state: size 0, no cells, empty rule sets
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ready-to-run state around an existing grid
    pub fn with_grid(universe_name: impl Into<String>, rules: RuleSet, grid: Grid) -> Self {
        Self {
            universe_name: universe_name.into(),
            size: grid.size(),
            rules,
            grid,
            ..Self::default()
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn universe_name(&self) -> &str {
        &self.universe_name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn iteration_count(&self) -> u64 {
        self.iteration_count
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    pub fn set_universe_name(&mut self, name: impl Into<String>) {
        self.universe_name = name.into();
    }

    /// Set the declared side length. The grid is not reallocated here.
    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }

    pub fn set_iteration_count(&mut self, count: u64) {
        self.iteration_count = count;
    }

    pub fn set_rules(&mut self, rules: RuleSet) {
        self.rules = rules;
    }

    /// Replace the grid wholesale; the declared size follows the new grid
    pub fn set_grid(&mut self, grid: Grid) {
        self.size = grid.size();
        self.grid = grid;
    }

    /// True once the grid matches the declared size and that size is non-zero
    pub fn is_populated(&self) -> bool {
        self.size > 0 && self.grid.size() == self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state() {
        let state = SimulationState::new();
        assert_eq!(state.version(), "1.0");
        assert_eq!(state.universe_name(), "Default");
        assert_eq!(state.size(), 0);
        assert_eq!(state.iteration_count(), 0);
        assert!(state.rules().birth.is_empty());
        assert!(state.rules().survival.is_empty());
        assert_eq!(state.grid().size(), 0);
        assert!(!state.is_populated());
    }

    #[test]
    fn test_set_grid_updates_size() {
        let mut state = SimulationState::new();
        state.set_size(10);
        state.set_grid(Grid::new(4));
        assert_eq!(state.size(), 4);
        assert!(state.is_populated());
    }

    #[test]
    fn test_with_grid() {
        let state = SimulationState::with_grid("Blinker", RuleSet::conway(), Grid::new(5));
        assert_eq!(state.universe_name(), "Blinker");
        assert_eq!(state.size(), 5);
        assert_eq!(state.rules(), &RuleSet::conway());
        assert_eq!(state.version(), DEFAULT_VERSION);
    }
}
