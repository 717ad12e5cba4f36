//! Toroidal Life
//!
//! Life-like cellular automata with configurable birth/survival rules on a
//! wrap-around square grid, plus the `.live` text format used to save and
//! restore simulation states.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod interactive;
pub mod utils;

pub use config::Settings;
pub use error::{LifeError, LifeResult};
pub use game_of_life::{Grid, LifeEngine, RuleSet, SimulationState};

use std::path::Path;

/// Load a state from `input`, advance it `generations` steps and return it
pub fn simulate_file<P: AsRef<Path>>(input: P, generations: usize) -> LifeResult<SimulationState> {
    let mut state = game_of_life::load_state_from_file(input)?;
    LifeEngine::advance(&mut state, generations);
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_simulate_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("row.live");
        std::fs::write(&path, "#Life 1.06\n#N Row\n#Size 3\n#R B3/S23\n1 1 1 2 1 3\n").unwrap();

        let state = simulate_file(&path, 1).unwrap();
        assert_eq!(state.iteration_count(), 1);
        assert_eq!(state.grid().living_count(), 9);

        assert!(matches!(
            simulate_file(temp_dir.path().join("missing.live"), 1),
            Err(LifeError::Unavailable { .. })
        ));
    }
}
