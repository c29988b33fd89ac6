//! Boundary-condition policy for the two edge samples.

use smolder_core::Scalar;

/// How the two edge samples of the field are treated by each update step.
///
/// The interior stencil never writes indices `0` and `N - 1`; the
/// boundary policy does. [`BoundaryCondition::Fixed`] with value zero is
/// the default and pins both rod ends at zero by construction — the edge
/// values of the previous frame are never copied forward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryCondition<S> {
    /// Dirichlet: both edges set to the given value after every step.
    Fixed(S),
    /// Neumann with zero flux: the missing neighbour beyond each edge
    /// takes the edge's own value, so no heat crosses the rod ends and
    /// the discrete total is conserved exactly.
    Insulated,
    /// Periodic: the line closes into a ring and each edge takes the
    /// opposite edge as its missing neighbour.
    Periodic,
}

impl<S: Scalar> Default for BoundaryCondition<S> {
    fn default() -> Self {
        Self::Fixed(S::zero())
    }
}
