//! gs-system: equation parsing and linear system assembly.
//!
//! Provides:
//! - A whitespace-token parser turning `10x + y - 3z = 12` into a typed [`Equation`]
//! - [`LinearSystem`] assembly with a canonical, first-appearance variable order
//! - A dense `nalgebra` view of the system and residual evaluation
//!
//! # Example
//!
//! ```
//! use gs_system::LinearSystem;
//!
//! let system = LinearSystem::assemble(&["10x + y = 11", "2x + 10y = 12"]).unwrap();
//! system.validate().unwrap();
//!
//! assert_eq!(system.variables(), ["x", "y"]);
//! assert_eq!(system.num_equations(), 2);
//! ```

pub mod equation;
pub mod error;
pub mod parse;
pub mod system;

pub use equation::{Equation, Term};
pub use error::{ParseError, ParseResult, SystemError, SystemResult};
pub use parse::parse_equation;
pub use system::LinearSystem;
