use clap::{Parser, Subcommand, ValueEnum};
use gs_core::{Tolerances, max_abs};
use gs_project::{Problem, ProjectError};
use gs_solver::{SolverError, Snapshot, solve_with_progress};
use gs_system::SystemError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gs-cli")]
#[command(about = "Gauss-Seidel CLI - iterative solver for small linear systems", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run Gauss-Seidel sweeps and print every iteration
    Solve {
        /// Problem file (.yaml, .json or plain text); reads stdin when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Number of sweeps (overrides the problem file)
        #[arg(short = 'n', long)]
        iterations: Option<usize>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Parse the equations and show the assembled system
    Check {
        /// Problem file (.yaml, .json or plain text); reads stdin when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    System(#[from] SystemError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            iterations,
            format,
        } => cmd_solve(file.as_deref(), iterations, format),
        Commands::Check { file } => cmd_check(file.as_deref()),
    }
}

fn load_problem(file: Option<&Path>) -> CliResult<Problem> {
    let Some(path) = file else {
        return prompt_problem();
    };
    info!(path = %path.display(), "loading problem");
    Ok(gs_project::load(path)?)
}

fn prompt_problem() -> CliResult<Problem> {
    println!(
        "Enter, one by one, each of the equations of the system of equations \
         you would like to solve. Press return to exit."
    );
    io::stdout().flush()?;

    let equations = gs_project::read_equations(io::stdin().lock())?;
    let problem = Problem::new(equations);
    problem.validate()?;
    Ok(problem)
}

fn cmd_solve(file: Option<&Path>, iterations: Option<usize>, format: OutputFormat) -> CliResult<()> {
    let problem = load_problem(file)?;
    let iterations = iterations.unwrap_or(problem.iterations);
    let system = problem.system()?;

    match format {
        OutputFormat::Text => {
            let last = solve_with_progress(&system, iterations, |snapshot| {
                println!("{snapshot}");
            })?;
            let residuals = system.residuals(last.values())?;
            println!("Max residual: {:e}", max_abs(residuals.as_slice()));
            if system.satisfied_by(last.values(), Tolerances::default())? {
                println!("All equations satisfied within tolerance");
            } else {
                println!("Not yet converged; try more iterations");
            }
        }
        OutputFormat::Json => {
            let mut snapshots: Vec<Snapshot> = Vec::new();
            let result = solve_with_progress(&system, iterations, |s| snapshots.push(s));
            // Sweeps that finished before a failure are still reported
            println!("{}", serde_json::to_string_pretty(&snapshots)?);
            result?;
        }
    }
    Ok(())
}

fn cmd_check(file: Option<&Path>) -> CliResult<()> {
    let problem = load_problem(file)?;
    let system = problem.system()?;

    if let Some(name) = &problem.name {
        println!("Problem: {name}");
    }
    println!("Variables: {}", system.variables().join(", "));
    print!("{system}");
    system.validate()?;
    println!(
        "✓ {} equations for {} variables, {} sweeps",
        system.num_equations(),
        system.num_variables(),
        problem.iterations
    );
    Ok(())
}
