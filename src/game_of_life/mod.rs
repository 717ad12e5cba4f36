//! Life-like cellular automata on a toroidal grid

pub mod engine;
pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;
pub mod state;

pub use engine::LifeEngine;
pub use grid::Grid;
pub use rules::{RuleParseError, RuleSet};
pub use state::SimulationState;
pub use io::{
    create_example_universes, has_live_extension, load_state_from_file, parse_state,
    save_state_to_file, serialize_state,
};
