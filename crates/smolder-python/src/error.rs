//! SolveError -> Python exception mapping with recovery hints.

use pyo3::exceptions::PyValueError;
use pyo3::PyErr;
use smolder_core::SolveError;

/// Convert a kernel error into a typed Python exception.
///
/// Both kinds are the caller's to fix, so both map to `ValueError`:
/// argument validation directly, the stability rejection with a hint
/// naming the parameters that control the diffusion number.
pub(crate) fn to_py_err(err: SolveError) -> PyErr {
    PyValueError::new_err(error_message(&err))
}

/// Build the exception text for a kernel error.
fn error_message(err: &SolveError) -> String {
    match err {
        SolveError::InvalidArgument { .. } => err.to_string(),
        SolveError::UnstableScheme { limit, .. } => format!(
            "{err}\n  Hint: reduce dt, increase dx, or lower the diffusivity \
             so that a * dt / dx**2 <= {limit}; or construct the Solver with \
             check_stability=False to run anyway."
        ),
    }
}
