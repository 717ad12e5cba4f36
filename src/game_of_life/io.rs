//! Reading and writing simulation states in the `.live` text format
//!
//! ```text
//! #Life <version>
//! #N <universe name>
//! #Size <side length>
//! #R B<digits>/S<digits>
//! <row> <col> [<row> <col> ...]
//! ```
//!
//! Coordinates are 1-based. Blank lines are ignored.

use super::grid::MAX_GRID_SIZE;
use super::patterns::BUILTIN_UNIVERSES;
use super::{Grid, RuleSet, SimulationState};
use crate::error::{LifeError, LifeResult};
use itertools::Itertools;
use log::{debug, trace, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::num::IntErrorKind;
use std::path::Path;

/// File extension used for saved states
pub const LIVE_EXTENSION: &str = "live";

/// Match a directive tag followed by a single space (or nothing) and return the rest of the line
fn directive<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(tag)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix(' ')
    }
}

/// Line-by-line parser that populates a caller-owned state.
///
/// Fields set by earlier lines stay set when a later line fails.
struct StateParser<'s> {
    state: &'s mut SimulationState,
    size_declared: bool,
}

impl<'s> StateParser<'s> {
    fn new(state: &'s mut SimulationState) -> Self {
        Self {
            state,
            size_declared: false,
        }
    }

    fn feed(&mut self, line_no: usize, line: &str) -> LifeResult<()> {
        if line.trim().is_empty() {
            return Ok(());
        }

        if let Some(version) = directive(line, "#Life") {
            trace!("line {}: version '{}'", line_no, version);
            self.state.set_version(version);
        } else if let Some(name) = directive(line, "#N") {
            trace!("line {}: universe name '{}'", line_no, name);
            self.state.set_universe_name(name);
        } else if let Some(value) = directive(line, "#Size") {
            let size = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&size| size > 0)
                .ok_or_else(|| LifeError::MalformedSize {
                    line: line_no,
                    value: value.to_string(),
                })?;
            if size > MAX_GRID_SIZE {
                return Err(LifeError::SizeTooLarge {
                    line: line_no,
                    size,
                    max: MAX_GRID_SIZE,
                });
            }
            trace!("line {}: size {}", line_no, size);
            self.state.set_size(size);
            self.size_declared = true;
        } else if let Some(value) = directive(line, "#R") {
            let rules = value
                .parse::<RuleSet>()
                .map_err(|source| LifeError::MalformedRules {
                    line: line_no,
                    value: value.to_string(),
                    source,
                })?;
            trace!("line {}: rules {}", line_no, rules);
            self.state.set_rules(rules);
        } else {
            parse_coordinates(line, line_no, self.state)?;
        }

        Ok(())
    }

    fn finish(self) -> LifeResult<()> {
        if !self.size_declared {
            return Err(LifeError::MissingSize);
        }
        ensure_grid_allocated(self.state);
        Ok(())
    }
}

/// Reallocate the grid as an all-dead `size x size` grid if it does not match the declared size
fn ensure_grid_allocated(state: &mut SimulationState) {
    let size = state.size();
    if state.grid().size() != size {
        let discarded = state.grid().living_count();
        if discarded > 0 {
            warn!(
                "#Size changed from {} to {}; discarding {} live cell(s)",
                state.grid().size(),
                size,
                discarded
            );
        }
        state.set_grid(Grid::new(size));
    }
}

/// Integer value of a coordinate token. Digit runs too large for `i64`
/// saturate so they are reported as out of range rather than unrecognized.
fn coordinate_value(token: &str) -> Option<i64> {
    match token.parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Parse one coordinate line: whitespace-separated 1-based `row col` pairs.
///
/// Pairs are consumed until the line ends or a token is not an integer; the
/// rest of the line is ignored. A line whose first token is not an integer is
/// rejected as unrecognized.
pub fn parse_coordinates(line: &str, line_no: usize, state: &mut SimulationState) -> LifeResult<()> {
    let mut values = line
        .split_whitespace()
        .map(coordinate_value)
        .peekable();

    if !matches!(values.peek(), Some(Some(_))) {
        return Err(LifeError::UnrecognizedLine {
            line: line_no,
            content: line.to_string(),
        });
    }

    if state.size() == 0 {
        return Err(LifeError::SizeNotDeclared { line: line_no });
    }

    ensure_grid_allocated(state);
    let size = state.size();

    for (row, col) in values.map_while(|value| value).tuples() {
        let in_range = |v: i64| v >= 1 && v as u64 <= size as u64;
        if !in_range(row) || !in_range(col) {
            return Err(LifeError::CoordinateOutOfRange {
                line: line_no,
                row,
                col,
                size,
            });
        }
        state
            .grid_mut()
            .set(row as usize - 1, col as usize - 1, true)?;
    }

    Ok(())
}

/// Populate `state` from `.live` text
pub fn parse_state_into(content: &str, state: &mut SimulationState) -> LifeResult<()> {
    let mut parser = StateParser::new(state);
    for (idx, line) in content.lines().enumerate() {
        parser.feed(idx + 1, line)?;
    }
    parser.finish()
}

/// Parse `.live` text into a fresh state
pub fn parse_state(content: &str) -> LifeResult<SimulationState> {
    let mut state = SimulationState::new();
    parse_state_into(content, &mut state)?;
    Ok(state)
}

/// Parse a state from any buffered reader
pub fn read_state<R: BufRead>(reader: R) -> LifeResult<SimulationState> {
    let mut state = SimulationState::new();
    let mut parser = StateParser::new(&mut state);
    for (idx, line) in reader.lines().enumerate() {
        parser.feed(idx + 1, &line?)?;
    }
    parser.finish()?;
    Ok(state)
}

/// Load a state from a `.live` file
pub fn load_state_from_file<P: AsRef<Path>>(path: P) -> LifeResult<SimulationState> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LifeError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let state = read_state(BufReader::new(file))?;
    debug!(
        "loaded '{}' from {} ({}x{}, {}, {} living)",
        state.universe_name(),
        path.display(),
        state.size(),
        state.size(),
        state.rules(),
        state.grid().living_count()
    );
    Ok(state)
}

/// Convert a state to `.live` text
pub fn serialize_state(state: &SimulationState) -> String {
    let mut result = String::new();

    result.push_str(&format!("#Life {}\n", state.version()));
    result.push_str(&format!("#N {}\n", state.universe_name()));
    result.push_str(&format!("#Size {}\n", state.size()));
    result.push_str(&format!("#R {}\n", state.rules()));

    for (row, col) in state.grid().living_cells() {
        result.push_str(&format!("{} {}\n", row + 1, col + 1));
    }

    result
}

/// Write a state as `.live` text to any writer
pub fn write_state<W: Write>(state: &SimulationState, writer: &mut W) -> std::io::Result<()> {
    writer.write_all(serialize_state(state).as_bytes())?;
    writer.flush()
}

fn create_file(path: &Path) -> LifeResult<File> {
    let unavailable = |source| LifeError::Unavailable {
        path: path.to_path_buf(),
        source,
    };

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(unavailable)?;
    }

    File::create(path).map_err(unavailable)
}

/// Save a state to a `.live` file
pub fn save_state_to_file<P: AsRef<Path>>(state: &SimulationState, path: P) -> LifeResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(create_file(path)?);
    write_state(state, &mut writer).map_err(|source| LifeError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("saved '{}' to {}", state.universe_name(), path.display());
    Ok(())
}

/// Convert a state to pretty-printed JSON
pub fn state_to_json(state: &SimulationState) -> LifeResult<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Save a state as JSON
pub fn save_state_as_json<P: AsRef<Path>>(state: &SimulationState, path: P) -> LifeResult<()> {
    let path = path.as_ref();
    let json = state_to_json(state)?;
    let mut file = create_file(path)?;
    file.write_all(json.as_bytes())
        .map_err(|source| LifeError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("saved '{}' as JSON to {}", state.universe_name(), path.display());
    Ok(())
}

/// Check if a file name carries the `.live` extension
pub fn has_live_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map_or(false, |ext| ext == LIVE_EXTENSION)
}

/// Write every built-in universe into `output_dir` as `<name>.live`
pub fn create_example_universes<P: AsRef<Path>>(output_dir: P) -> LifeResult<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| LifeError::Unavailable {
        path: dir.to_path_buf(),
        source,
    })?;

    for (stem, content) in BUILTIN_UNIVERSES {
        let path = dir.join(format!("{}.{}", stem, LIVE_EXTENSION));
        std::fs::write(&path, content).map_err(|source| LifeError::Unavailable {
            path: path.clone(),
            source,
        })?;
    }

    Ok(())
}
