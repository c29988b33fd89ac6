//! Solver configuration, validation, and dispatch.
//!
//! [`HeatSolver`] is the validated configuration surface, constructed
//! via the builder pattern: [`HeatSolver::builder`]. [`simulate_heat`]
//! is the permissive single-call entry point whose observable behavior
//! matches the host-facing contract exactly.

use smolder_core::{Scalar, SolveError, Trajectory};

use crate::boundary::BoundaryCondition;
use crate::trajectory;

/// Stability bound for the 1D explicit scheme: `a * dt / dx^2 <= 1/2`.
const STABILITY_LIMIT: f64 = 0.5;

/// A configured solver for one-dimensional heat conduction.
///
/// Holds the physical parameters of one run: total duration, time
/// increment, spatial increment, diffusivity, boundary policy, and
/// whether the opt-in stability check runs before dispatch.
///
/// # Construction
///
/// Use the builder pattern:
///
/// ```
/// use smolder_solver::HeatSolver;
///
/// let solver = HeatSolver::builder()
///     .time(2.0f32)
///     .dt(1.0)
///     .dx(1.0)
///     .diffusivity(0.5)
///     .build()
///     .unwrap();
///
/// assert_eq!(solver.diffusion_number(), 0.5);
/// let traj = solver.solve(&[0.0, 100.0, 0.0]).unwrap();
/// assert_eq!(traj.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct HeatSolver<S> {
    time: S,
    dt: S,
    dx: S,
    diffusivity: S,
    boundary: BoundaryCondition<S>,
    check_stability: bool,
}

/// Builder for [`HeatSolver`].
///
/// Required fields: `time`, `dt`, `dx`, and `diffusivity`. The boundary
/// defaults to [`BoundaryCondition::Fixed`] with value zero and the
/// stability check defaults to off.
pub struct HeatSolverBuilder<S> {
    time: Option<S>,
    dt: Option<S>,
    dx: Option<S>,
    diffusivity: Option<S>,
    boundary: BoundaryCondition<S>,
    check_stability: bool,
}

impl<S: Scalar> HeatSolver<S> {
    /// Create a new builder for configuring a `HeatSolver`.
    pub fn builder() -> HeatSolverBuilder<S> {
        HeatSolverBuilder {
            time: None,
            dt: None,
            dx: None,
            diffusivity: None,
            boundary: BoundaryCondition::default(),
            check_stability: false,
        }
    }

    /// The derived dimensionless diffusion number `a * dt / dx^2`.
    pub fn diffusion_number(&self) -> S {
        self.diffusivity * self.dt / (self.dx * self.dx)
    }

    /// The configured boundary policy.
    pub fn boundary(&self) -> BoundaryCondition<S> {
        self.boundary
    }

    /// The number of update steps, `ceil(time / dt)`.
    ///
    /// # Errors
    ///
    /// Fails with [`SolveError::InvalidArgument`] if the quotient is
    /// not representable as `usize` (NaN or negative, e.g. from a
    /// negative `dt` reaching the permissive entry point).
    pub fn frames_count(&self) -> Result<usize, SolveError> {
        let steps = self.time / self.dt;
        steps
            .ceil()
            .to_usize()
            .ok_or_else(|| SolveError::InvalidArgument {
                reason: format!(
                    "frame count ceil({} / {}) is not representable as an unsigned integer",
                    self.time, self.dt
                ),
            })
    }

    /// Validate the initial conditions, derive the diffusion number and
    /// frame count, and run the full trajectory.
    ///
    /// Frame 0 of the result is a copy of `initial`; every later frame
    /// is one update step from its predecessor. On error no partial
    /// trajectory is returned — the call aborts before any computation.
    ///
    /// # Errors
    ///
    /// - [`SolveError::InvalidArgument`] if `time < dt` or `initial`
    ///   has fewer than three samples.
    /// - [`SolveError::UnstableScheme`] if the stability check is
    ///   enabled and the diffusion number is outside `[0, 1/2]`.
    pub fn solve(&self, initial: &[S]) -> Result<Trajectory<S>, SolveError> {
        if self.time < self.dt {
            return Err(SolveError::InvalidArgument {
                reason: format!(
                    "total time {} is shorter than the step increment {}",
                    self.time, self.dt
                ),
            });
        }
        if initial.len() < 3 {
            return Err(SolveError::InvalidArgument {
                reason: format!(
                    "initial conditions need at least 3 samples, got {}",
                    initial.len()
                ),
            });
        }

        let diffusion_number = self.diffusion_number();
        if self.check_stability {
            let k = diffusion_number.to_f64().unwrap_or(f64::NAN);
            if !(k >= 0.0 && k <= STABILITY_LIMIT) {
                return Err(SolveError::UnstableScheme {
                    diffusion_number: k,
                    limit: STABILITY_LIMIT,
                });
            }
        }

        let frames_count = self.frames_count()?;
        trajectory::run(initial, diffusion_number, frames_count, self.boundary)
    }
}

impl<S: Scalar> HeatSolverBuilder<S> {
    /// Set the total simulated duration.
    pub fn time(mut self, time: S) -> Self {
        self.time = Some(time);
        self
    }

    /// Set the time increment per frame.
    pub fn dt(mut self, dt: S) -> Self {
        self.dt = Some(dt);
        self
    }

    /// Set the spatial increment between samples.
    pub fn dx(mut self, dx: S) -> Self {
        self.dx = Some(dx);
        self
    }

    /// Set the physical diffusivity coefficient.
    pub fn diffusivity(mut self, a: S) -> Self {
        self.diffusivity = Some(a);
        self
    }

    /// Set the boundary policy (default: fixed-zero edges).
    pub fn boundary(mut self, boundary: BoundaryCondition<S>) -> Self {
        self.boundary = boundary;
        self
    }

    /// Enable or disable the stability check (default: off).
    ///
    /// When enabled, [`HeatSolver::solve`] rejects configurations whose
    /// diffusion number falls outside `[0, 1/2]` instead of letting the
    /// scheme blow up numerically.
    pub fn check_stability(mut self, check: bool) -> Self {
        self.check_stability = check;
        self
    }

    /// Build the solver, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `time`, `dt`, `dx`, or `diffusivity` is not set
    /// - `time` is not finite or is negative
    /// - `dt` is not finite or is not strictly positive
    /// - `dx` is not finite or is zero
    /// - `diffusivity` is not finite
    pub fn build(self) -> Result<HeatSolver<S>, String> {
        let time = self.time.ok_or_else(|| "time is required".to_string())?;
        let dt = self.dt.ok_or_else(|| "dt is required".to_string())?;
        let dx = self.dx.ok_or_else(|| "dx is required".to_string())?;
        let diffusivity = self
            .diffusivity
            .ok_or_else(|| "diffusivity is required".to_string())?;

        if !time.is_finite() || time < S::zero() {
            return Err(format!("time must be finite and >= 0, got {time}"));
        }
        if !dt.is_finite() || dt <= S::zero() {
            return Err(format!("dt must be finite and > 0, got {dt}"));
        }
        if !dx.is_finite() || dx == S::zero() {
            return Err(format!("dx must be finite and non-zero, got {dx}"));
        }
        if !diffusivity.is_finite() {
            return Err(format!("diffusivity must be finite, got {diffusivity}"));
        }

        Ok(HeatSolver {
            time,
            dt,
            dx,
            diffusivity,
            boundary: self.boundary,
            check_stability: self.check_stability,
        })
    }
}

/// Compute the full trajectory for the given physical parameters.
///
/// The permissive single-call surface used by host bindings. Only two
/// argument checks are performed — `time < dt` and an initial field
/// shorter than three samples — with one safety exception: a frame
/// count that is not representable as an unsigned integer (NaN or
/// negative `time / dt`) also fails instead of casting through
/// undefined behavior. Degenerate spacings (`dx == 0`) and negative
/// coefficients are accepted and propagate as non-finite or growing
/// values through every subsequent frame; stability is the caller's
/// responsibility here. The boundary is held at zero.
///
/// Returns `ceil(time / dt) + 1` frames; frame 0 is a copy of the
/// initial conditions.
///
/// # Errors
///
/// Fails with [`SolveError::InvalidArgument`] when `time < dt` or when
/// `initial_conditions` has fewer than three samples.
///
/// # Examples
///
/// ```
/// use smolder_solver::simulate_heat;
///
/// let frames = simulate_heat(&[0.0f32, 100.0, 0.0], 2.0, 1.0, 1.0, 0.5).unwrap();
/// assert_eq!(frames.len(), 3);
/// assert_eq!(frames[0], vec![0.0, 100.0, 0.0]);
/// assert_eq!(frames[1], vec![0.0, 0.0, 0.0]);
/// ```
pub fn simulate_heat<S: Scalar>(
    initial_conditions: &[S],
    time: S,
    dt: S,
    dx: S,
    a: S,
) -> Result<Vec<Vec<S>>, SolveError> {
    let solver = HeatSolver {
        time,
        dt,
        dx,
        diffusivity: a,
        boundary: BoundaryCondition::default(),
        check_stability: false,
    };
    solver.solve(initial_conditions).map(Trajectory::into_frames)
}
