//! gs-project: problem file format and equation input.

pub mod input;
pub mod schema;

pub use input::read_equations;
pub use schema::{DEFAULT_ITERATIONS, Problem};

use std::path::Path;
use tracing::debug;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {what}")]
    Validation { what: String },

    #[error("Unsupported problem file extension: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<Problem> {
    let content = std::fs::read_to_string(path)?;
    let problem: Problem = serde_yaml::from_str(&content)?;
    problem.validate()?;
    debug!(path = %path.display(), equations = problem.equations.len(), "loaded problem");
    Ok(problem)
}

pub fn save_yaml(path: &Path, problem: &Problem) -> ProjectResult<()> {
    problem.validate()?;
    let content = serde_yaml::to_string(problem)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<Problem> {
    let content = std::fs::read_to_string(path)?;
    let problem: Problem = serde_json::from_str(&content)?;
    problem.validate()?;
    debug!(path = %path.display(), equations = problem.equations.len(), "loaded problem");
    Ok(problem)
}

pub fn save_json(path: &Path, problem: &Problem) -> ProjectResult<()> {
    problem.validate()?;
    let content = serde_json::to_string_pretty(problem)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a problem file, picking the format from the extension.
///
/// `.yaml`/`.yml` and `.json` are structured problem files. Anything else is
/// read as plain text with one equation per line.
pub fn load(path: &Path) -> ProjectResult<Problem> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => load_yaml(path),
        Some("json") => load_json(path),
        Some("txt") | None => {
            let file = std::fs::File::open(path)?;
            let equations = read_equations(std::io::BufReader::new(file))?;
            let problem = Problem::new(equations);
            problem.validate()?;
            Ok(problem)
        }
        Some(_) => Err(ProjectError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}
