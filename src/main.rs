//! Command-line front end for the toroidal Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use toroidal_life::{
    config::{CliOverrides, OutputFormat, Settings},
    error::parse_iterations,
    game_of_life::{
        create_example_universes, has_live_extension, io::save_state_as_json,
        load_state_from_file, patterns, save_state_to_file, LifeEngine, SimulationState,
    },
    interactive::Session,
    utils::{ColorOutput, GridFormatter},
};

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(about = "Life-like cellular automata on a torus")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Advance a universe offline and save the result
    Run {
        /// Input universe (.live)
        input: PathBuf,

        /// Number of generations (overrides config)
        #[arg(short, long, value_parser = parse_iterations_arg, allow_hyphen_values = true)]
        iterations: Option<usize>,

        /// Output file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,
    },

    /// Play step by step with dump/tick/exit/help commands
    Play {
        /// Input universe (.live); the default universe is used when omitted
        input: Option<PathBuf>,

        /// Built-in universe to play instead of a file (glider, blinker, toad, beacon, replicator)
        #[arg(short, long, conflicts_with = "input")]
        universe: Option<String>,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,
    },

    /// Show statistics for a universe
    Info {
        /// Input universe (.live)
        input: PathBuf,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,
    },

    /// Create a default configuration and example universes
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_iterations_arg(value: &str) -> Result<usize, String> {
    parse_iterations(value).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    simple_logger::init_with_level(level).context("Failed to initialize logger")?;

    match cli.command {
        Commands::Run {
            input,
            iterations,
            output,
            format,
            config,
        } => run_command(input, iterations, output, format, config),
        Commands::Play {
            input,
            universe,
            config,
        } => play_command(input, universe, config),
        Commands::Info { input, config } => info_command(input, config),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_input(path: &Path) -> Result<SimulationState> {
    if !has_live_extension(path) {
        anyhow::bail!(
            "Invalid file extension: Input file must have .live extension: {}",
            path.display()
        );
    }

    load_state_from_file(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn run_command(
    input: PathBuf,
    iterations: Option<usize>,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
    config_path: PathBuf,
) -> Result<()> {
    let mut settings = Settings::load_or_default(&config_path)?;
    settings.merge_with_cli(&CliOverrides {
        iterations,
        output_file: output,
        format,
    });
    settings.validate().context("Configuration validation failed")?;

    let formatter = GridFormatter::new(&settings.display);
    let mut state = load_input(&input)?;
    print!("{}", formatter.format_grid(state.grid()));

    let generations = settings.simulation.iterations;
    LifeEngine::advance(&mut state, generations);

    println!("The field after {} iterations:", generations);
    print!("{}", formatter.format_grid(state.grid()));

    let output_file = &settings.output.output_file;
    let saved = match settings.output.format {
        OutputFormat::Life => save_state_to_file(&state, output_file),
        OutputFormat::Json => save_state_as_json(&state, output_file),
    };
    saved.with_context(|| format!("Failed to save {}", output_file.display()))?;

    println!(
        "{}",
        ColorOutput::success(&format!("Saved to {}", output_file.display()))
    );
    Ok(())
}

fn load_builtin(name: &str) -> Result<SimulationState> {
    match patterns::builtin(name) {
        Some(state) => state.with_context(|| format!("Failed to load built-in universe '{}'", name)),
        None => {
            let known: Vec<&str> = patterns::BUILTIN_UNIVERSES
                .iter()
                .map(|(stem, _)| *stem)
                .collect();
            anyhow::bail!(
                "Unknown universe '{}'. Available: {}",
                name,
                known.join(", ")
            )
        }
    }
}

fn play_command(
    input: Option<PathBuf>,
    universe: Option<String>,
    config_path: PathBuf,
) -> Result<()> {
    let settings = Settings::load_or_default(&config_path)?;
    settings.validate().context("Configuration validation failed")?;

    let state = match (input, universe) {
        (Some(path), _) => load_input(&path)?,
        (None, Some(name)) => load_builtin(&name)?,
        (None, None) => {
            let mut state =
                patterns::default_universe().context("Failed to load the default universe")?;
            state.set_rules(settings.default_rules()?);
            state
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        state,
        GridFormatter::new(&settings.display),
        stdin.lock(),
        stdout.lock(),
    );
    session.run()?;

    let state = session.into_state();
    log::info!(
        "session ended at generation {} with {} living cells",
        state.iteration_count(),
        state.grid().living_count()
    );
    Ok(())
}

fn info_command(input: PathBuf, config_path: PathBuf) -> Result<()> {
    let settings = Settings::load_or_default(&config_path)?;
    let state = load_input(&input)?;

    let formatter = GridFormatter::new(&settings.display);
    println!("{}", formatter.format_grid_with_coords(state.grid()));
    print!("{}", GridFormatter::format_summary(&state));
    io::stdout().flush()?;
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_path = directory.join("config/default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Skipped: {} (already exists)",
                config_path.display()
            ))
        );
    }

    let games_dir = directory.join("games");
    create_example_universes(&games_dir).context("Failed to create example universes")?;
    println!("Created example universes in: {}", games_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!(
        "2. Run: toroidal_life run {} -i 10 -o out.live",
        games_dir.join("glider.live").display()
    );

    Ok(())
}
