//! Explicit finite-difference kernel for one-dimensional heat conduction.
//!
//! Three layers, each depending on the one before it:
//!
//! 1. [`stencil::step`] — one forward-time centered-space update of a
//!    temperature field.
//! 2. [`trajectory::run`] — repeated application collecting every snapshot.
//! 3. [`HeatSolver`] — validated configuration, derived-quantity
//!    computation, and dispatch. [`simulate_heat`] is the permissive
//!    single-call surface for host bindings.
//!
//! The kernel is single-threaded and synchronous; every call owns all
//! the data it produces and no state survives between calls.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod boundary;
pub mod driver;
pub mod stencil;
pub mod trajectory;

pub use boundary::BoundaryCondition;
pub use driver::{simulate_heat, HeatSolver, HeatSolverBuilder};
