//! High-level solver interface.

use crate::approximation::{Approximation, Snapshot};
use crate::error::SolverResult;
use crate::gauss_seidel::GaussSeidel;
use gs_core::max_abs;
use gs_system::LinearSystem;
use tracing::info;

/// Run `iterations` sweeps and collect one snapshot per sweep.
///
/// Fails fast: an error in any sweep discards the snapshots gathered so far.
/// Use [`solve_with_progress`] to keep them.
pub fn solve(system: &LinearSystem, iterations: usize) -> SolverResult<Vec<Snapshot>> {
    let mut snapshots = Vec::new();
    solve_with_progress(system, iterations, |snapshot| snapshots.push(snapshot))?;
    Ok(snapshots)
}

/// Run `iterations` sweeps, handing each snapshot to `on_sweep` as soon as
/// the sweep completes.
///
/// Returns the final approximation. With zero iterations that is the
/// all-zero starting point.
pub fn solve_with_progress<F>(
    system: &LinearSystem,
    iterations: usize,
    mut on_sweep: F,
) -> SolverResult<Approximation>
where
    F: FnMut(Snapshot),
{
    let mut solver = GaussSeidel::new(system)?;
    info!(
        variables = system.num_variables(),
        iterations, "starting Gauss-Seidel"
    );

    for _ in 0..iterations {
        on_sweep(solver.sweep()?);
    }

    let residuals = solver.residuals()?;
    info!(
        sweeps = solver.sweeps_completed(),
        max_residual = max_abs(residuals.as_slice()),
        "finished Gauss-Seidel"
    );
    Ok(solver.approximation().clone())
}

/// Parse, assemble and solve raw equation strings.
pub fn solve_equations<S: AsRef<str>>(
    sources: &[S],
    iterations: usize,
) -> SolverResult<Vec<Snapshot>> {
    let system = LinearSystem::assemble(sources)?;
    solve(&system, iterations)
}
