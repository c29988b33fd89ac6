//! Python wrappers for the configurable solver.
//!
//! `Solver` stores the validated kernel configuration; `solve()` runs
//! entirely in Rust and hands the frames back as one numpy allocation.

use numpy::PyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use smolder_solver::{BoundaryCondition, HeatSolver};

use crate::error::to_py_err;

/// Boundary policy applied to the two edge samples.
#[pyclass(eq, eq_int, from_py_object)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Boundary {
    /// Edges pinned to a fixed value each step (zero unless overridden).
    Fixed = 0,
    /// Zero-flux ends: no heat crosses the rod boundary.
    Insulated = 1,
    /// The rod closes into a ring.
    Periodic = 2,
}

/// A configured 1D heat-conduction solver.
///
/// Validates the physical parameters at construction time and keeps
/// them immutable afterwards; each `solve()` call is independent.
///
/// Args:
///     time: Total simulated duration (finite, >= 0).
///     dt: Time increment per frame (finite, > 0).
///     dx: Spatial increment between samples (finite, non-zero).
///     a: Physical diffusivity coefficient (finite).
///     boundary: Edge policy. Default Boundary.Fixed.
///     fixed_value: Edge value for Boundary.Fixed. Default 0.0.
///     check_stability: Reject configurations whose diffusion number
///         a * dt / dx**2 exceeds 1/2. Default False.
#[pyclass(name = "Solver")]
pub(crate) struct Solver {
    inner: HeatSolver<f32>,
}

#[pymethods]
impl Solver {
    /// Create a new solver, validating all configuration.
    #[new]
    #[pyo3(signature = (time, dt, dx, a, boundary=Boundary::Fixed, fixed_value=0.0, check_stability=false))]
    fn new(
        time: f32,
        dt: f32,
        dx: f32,
        a: f32,
        boundary: Boundary,
        fixed_value: f32,
        check_stability: bool,
    ) -> PyResult<Self> {
        let boundary = match boundary {
            Boundary::Fixed => BoundaryCondition::Fixed(fixed_value),
            Boundary::Insulated => BoundaryCondition::Insulated,
            Boundary::Periodic => BoundaryCondition::Periodic,
        };
        let inner = HeatSolver::builder()
            .time(time)
            .dt(dt)
            .dx(dx)
            .diffusivity(a)
            .boundary(boundary)
            .check_stability(check_stability)
            .build()
            .map_err(PyValueError::new_err)?;
        Ok(Solver { inner })
    }

    /// The derived dimensionless diffusion number `a * dt / dx**2`.
    #[getter]
    fn diffusion_number(&self) -> f32 {
        self.inner.diffusion_number()
    }

    /// The number of update steps, `ceil(time / dt)`.
    #[getter]
    fn frames_count(&self) -> PyResult<usize> {
        self.inner.frames_count().map_err(to_py_err)
    }

    /// Run the simulation from the given initial samples.
    ///
    /// Args:
    ///     initial_conditions: Temperature samples (at least 3).
    ///
    /// Returns:
    ///     A float32 array of shape (frames, samples); row 0 is the
    ///     initial state.
    ///
    /// Raises:
    ///     ValueError: On argument validation or stability rejection.
    fn solve<'py>(
        &self,
        py: Python<'py>,
        initial_conditions: Vec<f32>,
    ) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let trajectory = self.inner.solve(&initial_conditions).map_err(to_py_err)?;
        PyArray2::from_vec2(py, trajectory.frames())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }
}
