//! Python bindings for the smolder heat-equation solver.
//!
//! The native extension is named `_smolder` and exposes the simulation
//! entry point plus a configurable `Solver` class.
//! Temperature frames cross the boundary as numpy float32 arrays;
//! kernel validation failures surface as `ValueError`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![allow(unsafe_code)]

use pyo3::prelude::*;

mod error;
mod simulate;
mod solver;

/// The native `_smolder` extension module.
#[pymodule]
fn _smolder(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<solver::Boundary>()?;
    m.add_class::<solver::Solver>()?;
    m.add_function(wrap_pyfunction!(simulate::simulate_heat, m)?)?;
    Ok(())
}
