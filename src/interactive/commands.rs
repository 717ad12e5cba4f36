//! Line commands accepted by the interactive session

use crate::game_of_life::has_live_extension;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command!")]
    Unknown,

    #[error("dump command requires a filename.")]
    MissingFilename,

    #[error("Invalid file extension: Output file must have .live extension.")]
    InvalidExtension,

    #[error("tick command requires a positive integer for iterations.")]
    InvalidIterations,
}

/// A parsed interactive command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Save the current state to a `.live` file
    Dump(PathBuf),
    /// Advance the given number of generations
    Tick(usize),
    Exit,
    Help,
}

impl Command {
    fn parse_dump(args: &str) -> Result<Self, CommandError> {
        let filename = args
            .split_whitespace()
            .next()
            .ok_or(CommandError::MissingFilename)?;

        if !has_live_extension(filename) {
            return Err(CommandError::InvalidExtension);
        }

        Ok(Command::Dump(PathBuf::from(filename)))
    }

    fn parse_tick(args: &str) -> Result<Self, CommandError> {
        let mut tokens = args.split_whitespace();
        let iterations = match tokens.next() {
            None => 1,
            Some(token) => token
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or(CommandError::InvalidIterations)?,
        };

        if tokens.next().is_some() {
            return Err(CommandError::InvalidIterations);
        }

        Ok(Command::Tick(iterations))
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// An empty line is `tick 1`. `t` is shorthand for `tick`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Command::Tick(1));
        }

        let (name, args) = match input.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args),
            None => (input, ""),
        };

        match name {
            "dump" => Self::parse_dump(args),
            "tick" | "t" => Self::parse_tick(args),
            "exit" if args.trim().is_empty() => Ok(Command::Exit),
            "help" if args.trim().is_empty() => Ok(Command::Help),
            _ => Err(CommandError::Unknown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_ticks_once() {
        assert_eq!("".parse::<Command>(), Ok(Command::Tick(1)));
        assert_eq!("   ".parse::<Command>(), Ok(Command::Tick(1)));
    }

    #[test]
    fn test_tick() {
        assert_eq!("tick".parse::<Command>(), Ok(Command::Tick(1)));
        assert_eq!("t".parse::<Command>(), Ok(Command::Tick(1)));
        assert_eq!("tick 5".parse::<Command>(), Ok(Command::Tick(5)));
        assert_eq!("t 12".parse::<Command>(), Ok(Command::Tick(12)));
        assert_eq!("tick 0".parse::<Command>(), Err(CommandError::InvalidIterations));
        assert_eq!("tick -2".parse::<Command>(), Err(CommandError::InvalidIterations));
        assert_eq!("tick abc".parse::<Command>(), Err(CommandError::InvalidIterations));
        assert_eq!("tick 3 4".parse::<Command>(), Err(CommandError::InvalidIterations));
        assert_eq!("ticks".parse::<Command>(), Err(CommandError::Unknown));
    }

    #[test]
    fn test_dump() {
        assert_eq!("dump out.live".parse::<Command>(), Ok(Command::Dump(PathBuf::from("out.live"))));
        assert_eq!("dump".parse::<Command>(), Err(CommandError::MissingFilename));
        assert_eq!("dump out.txt".parse::<Command>(), Err(CommandError::InvalidExtension));
        assert_eq!("dumpout.live".parse::<Command>(), Err(CommandError::Unknown));
    }

    #[test]
    fn test_exit_and_help() {
        assert_eq!("exit".parse::<Command>(), Ok(Command::Exit));
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
        assert_eq!("exit now".parse::<Command>(), Err(CommandError::Unknown));
        assert_eq!("quit".parse::<Command>(), Err(CommandError::Unknown));
    }
}
