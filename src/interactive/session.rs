//! Interactive step-by-step session over any line-based input and output

use super::commands::Command;
use crate::game_of_life::{save_state_to_file, LifeEngine, SimulationState};
use crate::utils::{clear_lines, ColorOutput, GridFormatter};
use anyhow::Result;
use log::{debug, warn};
use std::io::{BufRead, Write};

const HELP_TEXT: &str = "\
Game of Life Help
============================

Run a simulation offline:
  toroidal_life run <input.live> -i <steps> -o <output.live>

Or play step by step with `toroidal_life play [input.live]`. Without an
input file the default universe is loaded; `--universe <name>` picks a
built-in one instead.

Commands for step-by-step play:
 - dump <file.live>: save the current universe to a file.
 - tick <n> (or t <n>): advance n generations (default 1).
   An empty line is the same as `tick 1`.
 - exit: leave the game.
 - help: show this message.
";

/// Owns a simulation state and drives it from user commands
pub struct Session<R, W> {
    state: SimulationState,
    formatter: GridFormatter,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(state: SimulationState, formatter: GridFormatter, input: R, output: W) -> Self {
        Self {
            state,
            formatter,
            input,
            output,
        }
    }

    pub fn into_state(self) -> SimulationState {
        self.state
    }

    /// Run until `exit` or end of input
    pub fn run(&mut self) -> Result<()> {
        self.render()?;

        while let Some(line) = self.read_line()? {
            match line.parse::<Command>() {
                Ok(command) => {
                    if !self.execute(command)? {
                        break;
                    }
                }
                Err(e) => {
                    debug!("rejected command '{}': {}", line.trim(), e);
                    self.report_error(&e.to_string())?;
                }
            }
        }

        Ok(())
    }

    /// Execute one command; returns false once the session should end
    pub fn execute(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Tick(generations) => {
                LifeEngine::advance(&mut self.state, generations);
                let lines = self.formatter.line_count(self.state.grid()) + 1;
                write!(self.output, "{}", clear_lines(lines))?;
                self.render()?;
            }
            Command::Dump(path) => match save_state_to_file(&self.state, &path) {
                Ok(()) => {
                    write!(self.output, "The data was saved to: {}. ", path.display())?;
                    self.pause(3)?;
                }
                Err(e) => {
                    warn!("dump to {} failed: {}", path.display(), e);
                    self.report_error(&e.to_string())?;
                }
            },
            Command::Help => {
                writeln!(self.output, "{}", ColorOutput::success(HELP_TEXT))?;
                self.pause(HELP_TEXT.lines().count() + 3)?;
            }
            Command::Exit => {
                writeln!(self.output, "Ending the Game...")?;
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn render(&mut self) -> Result<()> {
        let text = self.formatter.format_grid(self.state.grid());
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn report_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}{}", ColorOutput::error("Error: "), message)?;
        self.pause(3)
    }

    /// Wait for ENTER, then erase `lines` lines of transient output
    fn pause(&mut self, lines: usize) -> Result<()> {
        writeln!(self.output, "Press ENTER to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        write!(self.output, "{}", clear_lines(lines))?;
        Ok(())
    }
}
