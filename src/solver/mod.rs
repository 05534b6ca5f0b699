//! Target-directed search over the values a ticket's digits can produce.
//!
//! Short tickets are enumerated exhaustively and memoised per solver; longer
//! tickets are solved backwards from the target through operator inverses,
//! recursing only on the longer half of each split.

mod cache;
mod catalog;
pub mod constants;
mod core;
mod errors;
mod exhaustive;
mod reverse;

pub use self::core::{Solver, SolverConfig};
pub use cache::Solutions;
pub use catalog::Catalog;
pub use errors::SolverError;
