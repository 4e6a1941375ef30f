//! Gauss-Seidel iteration for small linear systems.
//!
//! The solver owns a single approximation vector, starts it at zero, and
//! sweeps the variables in canonical order. Each update immediately
//! overwrites the variable's estimate, so later updates in the same sweep
//! already see it. There is no convergence test: the caller picks the number
//! of sweeps and receives one [`Snapshot`] per completed sweep.

pub mod approximation;
pub mod error;
pub mod gauss_seidel;
pub mod solve;

pub use approximation::{Approximation, Snapshot};
pub use error::{SolverError, SolverResult};
pub use gauss_seidel::GaussSeidel;
pub use solve::{solve, solve_equations, solve_with_progress};
