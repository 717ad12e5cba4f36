//! Generation stepping for Life-like automata on a torus

use super::{Grid, RuleSet, SimulationState};
use log::{debug, trace};

/// Simulation engine
pub struct LifeEngine;

impl LifeEngine {
    /// Compute the next generation of `current` under `rules`.
    ///
    /// Every cell reads the same snapshot; the result is a fresh grid.
    pub fn evolve(current: &Grid, rules: &RuleSet) -> Grid {
        let size = current.size();

        let next_cells: Vec<bool> = (0..size)
            .flat_map(|row| {
                (0..size).map(move |col| {
                    let neighbors = current.count_neighbors(row, col);
                    rules.next_state(current.get(row, col), neighbors)
                })
            })
            .collect();

        Grid::from_flat(size, next_cells)
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, rules: &RuleSet, generations: usize) -> Grid {
        for generation in 0..generations {
            grid = Self::evolve(&grid, rules);
            trace!("generation +{}: {} living", generation + 1, grid.living_count());
        }
        grid
    }

    /// Advance the state by a single generation
    pub fn step(state: &mut SimulationState) {
        Self::advance(state, 1);
    }

    /// Advance the state by `generations` using its current rules and bump the iteration counter.
    ///
    /// Zero generations leaves the state untouched.
    pub fn advance(state: &mut SimulationState, generations: usize) {
        if generations == 0 {
            return;
        }

        debug!(
            "advancing '{}' ({}x{}, {}) by {} generation(s)",
            state.universe_name(),
            state.size(),
            state.size(),
            state.rules(),
            generations
        );

        let grid = Self::evolve_generations(state.grid().clone(), state.rules(), generations);
        state.set_grid(grid);
        state.set_iteration_count(state.iteration_count() + generations as u64);
    }
}
