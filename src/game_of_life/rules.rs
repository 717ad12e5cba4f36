//! Birth/survival rule sets for Life-like automata

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a `B.../S...` rule string cannot be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleParseError {
    #[error("expected a 'B' or 'S' marker")]
    MissingMarkers,
}

/// Neighbor counts at which a dead cell is born and a live cell survives.
///
/// Counts are single digits in the file format; the set itself accepts any
/// value and only ever tests membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    pub birth: BTreeSet<u8>,
    pub survival: BTreeSet<u8>,
}

impl RuleSet {
    pub fn new<B, S>(birth: B, survival: S) -> Self
    where
        B: IntoIterator<Item = u8>,
        S: IntoIterator<Item = u8>,
    {
        Self {
            birth: birth.into_iter().collect(),
            survival: survival.into_iter().collect(),
        }
    }

    /// Conway's Game of Life, B3/S23
    pub fn conway() -> Self {
        Self::new([3], [2, 3])
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.survival.contains(&neighbors)
        } else {
            self.birth.contains(&neighbors)
        }
    }
}

fn digits(segment: &str) -> impl Iterator<Item = u8> + '_ {
    segment
        .chars()
        .filter_map(|ch| ch.to_digit(10))
        .map(|d| d as u8)
}

impl FromStr for RuleSet {
    type Err = RuleParseError;

    /// Birth digits run from `B` up to a later `S` (or the end), survival
    /// digits from `S` to the end. Anything that is not a digit is skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b_pos = s.find('B');
        let s_pos = s.find('S');

        if b_pos.is_none() && s_pos.is_none() {
            return Err(RuleParseError::MissingMarkers);
        }

        let birth = match b_pos {
            Some(b) => {
                let end = match s_pos {
                    Some(sp) if sp > b => sp,
                    _ => s.len(),
                };
                digits(&s[b + 1..end]).collect()
            }
            None => BTreeSet::new(),
        };

        let survival = match s_pos {
            Some(sp) => digits(&s[sp + 1..]).collect(),
            None => BTreeSet::new(),
        };

        Ok(Self { birth, survival })
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for count in &self.birth {
            write!(f, "{}", count)?;
        }
        write!(f, "/S")?;
        for count in &self.survival {
            write!(f, "{}", count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[u8]) -> BTreeSet<u8> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_parse_standard() {
        let rules: RuleSet = "B3/S23".parse().unwrap();
        assert_eq!(rules.birth, set(&[3]));
        assert_eq!(rules.survival, set(&[2, 3]));
        assert_eq!(rules, RuleSet::conway());
    }

    #[test]
    fn test_parse_survival_only() {
        let rules: RuleSet = "S23".parse().unwrap();
        assert!(rules.birth.is_empty());
        assert_eq!(rules.survival, set(&[2, 3]));
    }

    #[test]
    fn test_parse_birth_only() {
        let rules: RuleSet = "B36".parse().unwrap();
        assert_eq!(rules.birth, set(&[3, 6]));
        assert!(rules.survival.is_empty());
    }

    #[test]
    fn test_parse_missing_markers() {
        assert_eq!("23/3".parse::<RuleSet>(), Err(RuleParseError::MissingMarkers));
        assert_eq!("".parse::<RuleSet>(), Err(RuleParseError::MissingMarkers));
        // Markers are case-sensitive
        assert_eq!("b3/s23".parse::<RuleSet>(), Err(RuleParseError::MissingMarkers));
    }

    #[test]
    fn test_parse_ignores_separators() {
        let rules: RuleSet = "B 3, 6 / S 2-3".parse().unwrap();
        assert_eq!(rules, RuleSet::new([3, 6], [2, 3]));
    }

    #[test]
    fn test_parse_survival_before_birth() {
        // Survival runs to the end of the string, so it also picks up the birth digits
        let rules: RuleSet = "S23/B3".parse().unwrap();
        assert_eq!(rules.birth, set(&[3]));
        assert_eq!(rules.survival, set(&[2, 3]));

        let rules: RuleSet = "S2/B6".parse().unwrap();
        assert_eq!(rules.birth, set(&[6]));
        assert_eq!(rules.survival, set(&[2, 6]));
    }

    #[test]
    fn test_display_sorted() {
        let rules = RuleSet::new([8, 3, 6, 7], [8, 3, 4, 7, 6]);
        assert_eq!(rules.to_string(), "B3678/S34678");
        assert_eq!(RuleSet::default().to_string(), "B/S");
    }

    #[test]
    fn test_next_state() {
        let rules = RuleSet::conway();
        assert!(rules.next_state(true, 2));
        assert!(rules.next_state(true, 3));
        assert!(rules.next_state(false, 3));
        assert!(!rules.next_state(true, 1));
        assert!(!rules.next_state(true, 4));
        assert!(!rules.next_state(false, 2));
    }
}
