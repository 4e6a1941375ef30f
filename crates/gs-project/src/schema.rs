//! Problem schema definitions.

use crate::{ProjectError, ProjectResult};
use gs_system::LinearSystem;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ITERATIONS: usize = 10;

fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

/// A system of equations together with the number of sweeps to run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Problem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    pub equations: Vec<String>,
}

impl Problem {
    pub fn new(equations: Vec<String>) -> Self {
        Self {
            name: None,
            iterations: DEFAULT_ITERATIONS,
            equations,
        }
    }

    /// Reject problems with nothing to solve.
    pub fn validate(&self) -> ProjectResult<()> {
        if self.equations.is_empty() {
            return Err(ProjectError::Validation {
                what: "problem has no equations".to_string(),
            });
        }
        if let Some(i) = self.equations.iter().position(|e| e.trim().is_empty()) {
            return Err(ProjectError::Validation {
                what: format!("equation {i} is blank"),
            });
        }
        Ok(())
    }

    /// Parse and assemble the equations.
    pub fn system(&self) -> gs_system::SystemResult<LinearSystem> {
        LinearSystem::assemble(&self.equations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterations_default_when_absent() {
        let yaml = "equations:\n  - 10x + y = 11\n  - 2x + 10y = 12\n";
        let problem: Problem = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(problem.iterations, DEFAULT_ITERATIONS);
        assert_eq!(problem.name, None);
        assert_eq!(problem.system().unwrap().variables(), ["x", "y"]);
    }

    #[test]
    fn empty_problem_rejected() {
        let problem = Problem::new(Vec::new());
        assert!(matches!(
            problem.validate(),
            Err(ProjectError::Validation { .. })
        ));
    }

    #[test]
    fn blank_equation_rejected() {
        let problem = Problem::new(vec!["x = 1".to_string(), "  ".to_string()]);
        let err = problem.validate().unwrap_err();
        assert!(err.to_string().contains("equation 1 is blank"));
    }
}
