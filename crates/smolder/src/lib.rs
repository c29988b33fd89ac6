//! One-dimensional explicit heat-equation simulation for host callers.
//!
//! Computes the time evolution of a temperature field under the
//! discrete heat equation with a forward-time centered-space scheme,
//! returning every snapshot of the run. This facade re-exports the
//! public API of the workspace crates.
//!
//! # Quick start
//!
//! ```
//! // A three-sample rod, hot in the middle, ends held at zero.
//! let frames = smolder::simulate_heat(&[0.0f32, 100.0, 0.0], 2.0, 1.0, 1.0, 0.5).unwrap();
//! assert_eq!(frames.len(), 3);
//! assert_eq!(frames[1], vec![0.0, 0.0, 0.0]);
//! ```
//!
//! For boundary policies, 64-bit precision, or the opt-in stability
//! check, configure a [`HeatSolver`] through its builder instead:
//!
//! ```
//! use smolder::{BoundaryCondition, HeatSolver};
//!
//! let solver = HeatSolver::builder()
//!     .time(1.0f64)
//!     .dt(0.0078125)
//!     .dx(0.5)
//!     .diffusivity(5.0)
//!     .boundary(BoundaryCondition::Insulated)
//!     .check_stability(true)
//!     .build()
//!     .unwrap();
//! let trajectory = solver.solve(&[0.0, 100.0, 0.0]).unwrap();
//! assert_eq!(trajectory.len(), 129);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub use smolder_core::{Scalar, SolveError, Trajectory};
pub use smolder_solver::{simulate_heat, BoundaryCondition, HeatSolver, HeatSolverBuilder};
