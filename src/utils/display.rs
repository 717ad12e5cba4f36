//! Console rendering and output formatting utilities

use crate::config::DisplayConfig;
use crate::game_of_life::{Grid, SimulationState};

/// Renders grids and state summaries for the console
pub struct GridFormatter {
    alive: char,
    dead: char,
    show_coordinates: bool,
}

impl Default for GridFormatter {
    fn default() -> Self {
        Self {
            alive: 'O',
            dead: '.',
            show_coordinates: false,
        }
    }
}

impl GridFormatter {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            alive: config.alive_symbol,
            dead: config.dead_symbol,
            show_coordinates: config.show_coordinates,
        }
    }

    /// Format a grid, one row per line, cells separated by spaces
    pub fn format_grid(&self, grid: &Grid) -> String {
        if self.show_coordinates {
            return self.format_grid_with_coords(grid);
        }

        let mut output = String::new();
        for row in 0..grid.size() {
            for col in 0..grid.size() {
                output.push(if grid.get(row, col) { self.alive } else { self.dead });
                output.push(' ');
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with 1-based row and column numbers, matching the file coordinates
    pub fn format_grid_with_coords(&self, grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..grid.size() {
            output.push_str(&format!("{:2}", (col + 1) % 10));
        }
        output.push('\n');

        for row in 0..grid.size() {
            output.push_str(&format!("{:2} ", row + 1));
            for col in 0..grid.size() {
                output.push(' ');
                output.push(if grid.get(row, col) { self.alive } else { self.dead });
            }
            output.push('\n');
        }

        output
    }

    /// Number of console lines `format_grid` produces for this grid
    pub fn line_count(&self, grid: &Grid) -> usize {
        grid.size() + usize::from(self.show_coordinates)
    }

    /// Summary block for the `info` command
    pub fn format_summary(state: &SimulationState) -> String {
        let grid = state.grid();
        let mut output = String::new();
        output.push_str(&format!("Universe: {}\n", state.universe_name()));
        output.push_str(&format!("Format version: {}\n", state.version()));
        output.push_str(&format!("Size: {}x{}\n", state.size(), state.size()));
        output.push_str(&format!("Rules: {}\n", state.rules()));
        output.push_str(&format!("Generation: {}\n", state.iteration_count()));
        output.push_str(&format!("Living cells: {}\n", grid.living_count()));
        output.push_str(&format!("Density: {:.1}%\n", grid.density() * 100.0));
        output
    }
}

/// ANSI sequence that moves the cursor up one line and erases it, repeated `count` times
pub fn clear_lines(count: usize) -> String {
    "\x1b[F\x1b[K".repeat(count)
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::parse_state;

    fn sample() -> Grid {
        Grid::from_cells(vec![
            vec![true, false, false],
            vec![false, true, false],
            vec![false, false, false],
        ])
        .unwrap()
    }

    #[test]
    fn test_grid_formatting() {
        let formatter = GridFormatter::default();
        assert_eq!(formatter.format_grid(&sample()), "O . . \n. O . \n. . . \n");
        assert_eq!(formatter.line_count(&sample()), 3);
    }

    #[test]
    fn test_grid_with_coords() {
        let config = DisplayConfig {
            alive_symbol: '#',
            dead_symbol: '-',
            show_coordinates: true,
        };
        let formatter = GridFormatter::new(&config);
        let output = formatter.format_grid(&sample());
        assert!(output.starts_with("    1 2 3\n"));
        assert!(output.contains(" 2  - # -\n"));
        assert_eq!(formatter.line_count(&sample()), 4);
    }

    #[test]
    fn test_summary() {
        let state = parse_state("#N Tiny\n#Size 2\n#R B3/S23\n1 1\n").unwrap();
        let summary = GridFormatter::format_summary(&state);
        assert!(summary.contains("Universe: Tiny"));
        assert!(summary.contains("Rules: B3/S23"));
        assert!(summary.contains("Density: 25.0%"));
    }

    #[test]
    fn test_clear_lines() {
        assert_eq!(clear_lines(2), "\x1b[F\x1b[K\x1b[F\x1b[K");
        assert_eq!(clear_lines(0), "");
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
