//! gs-core: shared foundation for the Gauss-Seidel workspace.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - ids (compact variable IDs used by the system and the solver)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

pub use error::{GsError, GsResult};
pub use ids::*;
pub use numeric::*;
