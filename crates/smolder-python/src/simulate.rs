//! The module-level `simulate_heat` entry point.

use numpy::PyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::to_py_err;

/// Simulate 1D heat conduction and return every frame.
///
/// The rod ends are held at zero and no stability check runs; numerically
/// unstable parameter combinations are accepted and blow up in the output
/// rather than failing. Use the `Solver` class for boundary policies and
/// the opt-in stability check.
///
/// Args:
///     initial_conditions: Temperature samples on the uniform grid
///         (at least 3).
///     time: Total simulated duration.
///     dt: Time increment per frame.
///     dx: Spatial increment between samples.
///     a: Physical diffusivity coefficient.
///
/// Returns:
///     A float32 array of shape (frames, samples); row 0 is the initial
///     state and the row count is ceil(time / dt) + 1.
///
/// Raises:
///     ValueError: If `time < dt` or fewer than 3 samples are supplied.
#[pyfunction]
#[pyo3(signature = (initial_conditions, time, dt, dx, a))]
pub(crate) fn simulate_heat<'py>(
    py: Python<'py>,
    initial_conditions: Vec<f32>,
    time: f32,
    dt: f32,
    dx: f32,
    a: f32,
) -> PyResult<Bound<'py, PyArray2<f32>>> {
    let frames = smolder_solver::simulate_heat(&initial_conditions, time, dt, dx, a)
        .map_err(to_py_err)?;
    PyArray2::from_vec2(py, &frames).map_err(|e| PyValueError::new_err(e.to_string()))
}
