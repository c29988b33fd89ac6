//! Multi-frame trajectory runner.

use smolder_core::{Scalar, SolveError, Trajectory};

use crate::boundary::BoundaryCondition;
use crate::stencil;

/// Run `frames_count` update steps from `initial`, collecting every
/// snapshot.
///
/// The returned trajectory holds `frames_count + 1` frames: index 0 is
/// a copy of `initial`, and frame `k` is one step evolved from frame
/// `k - 1`. The final slot is computed like every other frame, so each
/// returned snapshot is a real field state.
///
/// Frames strictly depend on their predecessor; the runner is
/// sequential by contract.
///
/// # Errors
///
/// Propagates [`SolveError::InvalidArgument`] from the step operator
/// when the field is shorter than two samples.
pub fn run<S: Scalar>(
    initial: &[S],
    diffusion_number: S,
    frames_count: usize,
    boundary: BoundaryCondition<S>,
) -> Result<Trajectory<S>, SolveError> {
    let mut frames = Vec::with_capacity(frames_count + 1);
    frames.push(initial.to_vec());
    for k in 0..frames_count {
        let next = stencil::step(&frames[k], diffusion_number, boundary)?;
        frames.push(next);
    }
    Ok(Trajectory::from_frames(frames))
}
