//! Built-in universes shipped with the binary

use super::io::parse_state;
use super::SimulationState;
use crate::error::LifeResult;

pub const GLIDER: &str = "\
#Life 1.06
#N Glider
#Size 8
#R B3/S23
1 2 2 3
3 1 3 2 3 3
";

pub const BLINKER: &str = "\
#Life 1.06
#N Blinker
#Size 5
#R B3/S23
3 2
3 3
3 4
";

pub const TOAD: &str = "\
#Life 1.06
#N Toad
#Size 6
#R B3/S23
3 3 3 4 3 5
4 2 4 3 4 4
";

pub const BEACON: &str = "\
#Life 1.06
#N Beacon
#Size 6
#R B3/S23
2 2
2 3
3 2
3 3
4 4
4 5
5 4
5 5
";

pub const REPLICATOR: &str = "\
#Life 1.06
#N HighLife Replicator
#Size 16
#R B36/S23
6 8 6 9 6 10
7 7 7 10
8 6 8 10
9 6 9 9
10 6 10 7 10 8
";

/// File stem and contents of every built-in universe
pub const BUILTIN_UNIVERSES: [(&str, &str); 5] = [
    ("glider", GLIDER),
    ("blinker", BLINKER),
    ("toad", TOAD),
    ("beacon", BEACON),
    ("replicator", REPLICATOR),
];

/// Look up a built-in universe by file stem
pub fn builtin(name: &str) -> Option<LifeResult<SimulationState>> {
    BUILTIN_UNIVERSES
        .iter()
        .find(|(stem, _)| *stem == name)
        .map(|(_, text)| parse_state(text))
}

/// The universe loaded when no input file is given
pub fn default_universe() -> LifeResult<SimulationState> {
    parse_state(GLIDER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::RuleSet;

    #[test]
    fn test_builtins_parse() {
        let expected = [
            ("glider", 5),
            ("blinker", 3),
            ("toad", 6),
            ("beacon", 8),
            ("replicator", 12),
        ];
        for (name, living) in expected {
            let state = builtin(name).unwrap().unwrap();
            assert_eq!(state.grid().living_count(), living, "{}", name);
            assert!(state.is_populated());
        }
        assert!(builtin("missing").is_none());
    }

    #[test]
    fn test_default_universe() {
        let state = default_universe().unwrap();
        assert_eq!(state.universe_name(), "Glider");
        assert_eq!(state.rules(), &RuleSet::conway());
        assert_eq!(builtin("replicator").unwrap().unwrap().rules(), &RuleSet::new([3, 6], [2, 3]));
    }
}
