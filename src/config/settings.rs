//! Configuration settings for the simulator

use crate::game_of_life::{has_live_extension, RuleSet};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Generations to run when none are given on the command line
    pub iterations: usize,
    /// Rules applied to built-in universes, in `B.../S...` notation
    pub default_rules: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub alive_symbol: char,
    pub dead_symbol: char,
    pub show_coordinates: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub output_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `.live` text
    Life,
    /// Pretty-printed JSON
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                iterations: 1,
                default_rules: RuleSet::conway().to_string(),
            },
            display: DisplayConfig {
                alive_symbol: 'O',
                dead_symbol: '.',
                show_coordinates: false,
            },
            output: OutputConfig {
                format: OutputFormat::Life,
                output_file: PathBuf::from("out.live"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &PathBuf) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            log::info!("config file {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.iterations == 0 {
            anyhow::bail!("Number of iterations must be positive");
        }

        self.default_rules()?;

        if self.output.format == OutputFormat::Life && !has_live_extension(&self.output.output_file) {
            anyhow::bail!(
                "Output file must have .live extension: {}",
                self.output.output_file.display()
            );
        }

        Ok(())
    }

    /// Parsed form of `simulation.default_rules`
    pub fn default_rules(&self) -> Result<RuleSet> {
        self.simulation
            .default_rules
            .parse()
            .with_context(|| format!("Invalid default rules: {}", self.simulation.default_rules))
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(iterations) = cli_overrides.iterations {
            self.simulation.iterations = iterations;
        }
        if let Some(ref output_file) = cli_overrides.output_file {
            self.output.output_file = output_file.clone();
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub iterations: Option<usize>,
    pub output_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}
