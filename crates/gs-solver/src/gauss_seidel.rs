//! In-place Gauss-Seidel sweeps.

use crate::approximation::{Approximation, Snapshot};
use crate::error::{SolverError, SolverResult};
use gs_core::{Real, VarId};
use gs_system::{LinearSystem, SystemResult};
use nalgebra::DVector;
use std::sync::Arc;
use tracing::{debug, trace};

/// Iteration state for one linear system.
///
/// Owns the only writable approximation vector. Equation `i` updates
/// variable `i` of the canonical order.
pub struct GaussSeidel<'a> {
    system: &'a LinearSystem,
    approximation: Approximation,
    sweeps_completed: usize,
}

impl<'a> GaussSeidel<'a> {
    /// Check the system's shape and start from the all-zero approximation.
    pub fn new(system: &'a LinearSystem) -> SolverResult<Self> {
        system.validate()?;
        let variables: Arc<[String]> = system.variables().into();
        Ok(Self {
            system,
            approximation: Approximation::zeros(variables),
            sweeps_completed: 0,
        })
    }

    pub fn system(&self) -> &LinearSystem {
        self.system
    }

    pub fn approximation(&self) -> &Approximation {
        &self.approximation
    }

    pub fn sweeps_completed(&self) -> usize {
        self.sweeps_completed
    }

    /// Recompute the variable at `position` from its equation and store it.
    ///
    /// The other variables contribute with whatever value they hold right
    /// now, including values written earlier in the current sweep. A zero
    /// coefficient on the variable itself leaves the approximation untouched.
    pub fn update(&mut self, position: usize) -> SolverResult<Real> {
        let len = self.system.num_variables();
        if position >= len {
            return Err(SolverError::IndexOob {
                what: "variable position",
                index: position,
                len,
            });
        }

        let var = VarId::from_index(position);
        let diagonal = self.system.coefficient(position, var);
        if diagonal == 0.0 {
            return Err(SolverError::Arithmetic {
                variable: self.system.symbol(var).to_string(),
                equation: position,
                sweep: self.sweeps_completed + 1,
            });
        }

        let others: Real = self
            .system
            .row(position)
            .iter()
            .filter(|(id, _)| *id != var)
            .map(|&(id, c)| c * self.approximation.value(id))
            .sum();
        let next = (self.system.constant(position) - others) / diagonal;

        trace!(variable = self.system.symbol(var), value = next, "update");
        self.approximation.set(var, next);
        Ok(next)
    }

    /// Update every variable once, in canonical order.
    pub fn sweep(&mut self) -> SolverResult<Snapshot> {
        for position in 0..self.system.num_variables() {
            self.update(position)?;
        }
        self.sweeps_completed += 1;
        debug!(
            sweep = self.sweeps_completed,
            "completed: {}", self.approximation
        );
        Ok(Snapshot {
            iteration: self.sweeps_completed,
            approximation: self.approximation.clone(),
        })
    }

    /// `A*x - b` at the current approximation.
    pub fn residuals(&self) -> SystemResult<DVector<Real>> {
        self.system.residuals(self.approximation.values())
    }
}
