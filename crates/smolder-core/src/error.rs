//! Error types for the smolder solver.
//!
//! All errors are raised synchronously before any frame is computed;
//! a failing call never returns a partial trajectory.

use std::error::Error;
use std::fmt;

/// Errors from the solver entry points.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// A caller-supplied argument failed validation: total duration
    /// shorter than the per-frame increment, an initial field with
    /// fewer than three samples, or a derived frame count that is not
    /// representable as an unsigned integer.
    InvalidArgument {
        /// Human-readable description of the rejected argument.
        reason: String,
    },
    /// The derived diffusion number exceeds the explicit scheme's
    /// stability bound. Only raised when the opt-in stability check is
    /// enabled on the solver configuration.
    UnstableScheme {
        /// The derived diffusion number `a * dt / dx^2`.
        diffusion_number: f64,
        /// The stability bound for the one-dimensional scheme.
        limit: f64,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::UnstableScheme {
                diffusion_number,
                limit,
            } => write!(
                f,
                "diffusion number {diffusion_number} exceeds the stability bound {limit}"
            ),
        }
    }
}

impl Error for SolveError {}
