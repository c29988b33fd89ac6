//! Single-step forward-time centered-space update.

use smolder_core::{Scalar, SolveError};

use crate::boundary::BoundaryCondition;

/// Apply one explicit time update to a temperature field.
///
/// Returns a freshly allocated field of the same length; the input is
/// never mutated and the output shares no storage with it. For every
/// interior index `i`:
///
/// ```text
/// new[i] = old[i] + k * (old[i+1] + old[i-1] - 2 * old[i])
/// ```
///
/// where `k` is the dimensionless diffusion number. The two edge samples
/// are written by the boundary policy, not the stencil. Deterministic:
/// identical inputs produce identical outputs.
///
/// # Errors
///
/// Fails with [`SolveError::InvalidArgument`] if the field has fewer
/// than two samples — there is no edge pair to apply a boundary to.
///
/// # Examples
///
/// ```
/// use smolder_solver::{stencil, BoundaryCondition};
///
/// let next = stencil::step(&[0.0f32, 100.0, 0.0], 0.5, BoundaryCondition::Fixed(0.0)).unwrap();
/// assert_eq!(next, vec![0.0, 0.0, 0.0]);
/// ```
pub fn step<S: Scalar>(
    temperature: &[S],
    diffusion_number: S,
    boundary: BoundaryCondition<S>,
) -> Result<Vec<S>, SolveError> {
    let n = temperature.len();
    if n < 2 {
        return Err(SolveError::InvalidArgument {
            reason: format!("field needs at least 2 samples to carry an edge pair, got {n}"),
        });
    }

    let mut next = vec![S::zero(); n];
    for i in 1..n - 1 {
        let lap = temperature[i + 1] + temperature[i - 1] - S::two() * temperature[i];
        next[i] = temperature[i] + diffusion_number * lap;
    }

    match boundary {
        BoundaryCondition::Fixed(value) => {
            next[0] = value;
            next[n - 1] = value;
        }
        BoundaryCondition::Insulated => {
            // Zero-flux ghost: old[-1] == old[0] and old[n] == old[n-1],
            // which keeps the discrete total exactly constant.
            next[0] = temperature[0] + diffusion_number * (temperature[1] - temperature[0]);
            next[n - 1] = temperature[n - 1]
                + diffusion_number * (temperature[n - 2] - temperature[n - 1]);
        }
        BoundaryCondition::Periodic => {
            let lap_first = temperature[1] + temperature[n - 1] - S::two() * temperature[0];
            next[0] = temperature[0] + diffusion_number * lap_first;
            let lap_last = temperature[0] + temperature[n - 2] - S::two() * temperature[n - 1];
            next[n - 1] = temperature[n - 1] + diffusion_number * lap_last;
        }
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Contract tests ──────────────────────────────────────────

    #[test]
    fn rejects_fields_shorter_than_two() {
        for field in [&[][..], &[1.0f32][..]] {
            let result = step(field, 0.5, BoundaryCondition::Fixed(0.0));
            assert!(matches!(
                result,
                Err(SolveError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn output_length_matches_input() {
        let field = vec![1.0f64; 7];
        let next = step(&field, 0.1, BoundaryCondition::Fixed(0.0)).unwrap();
        assert_eq!(next.len(), 7);
    }

    #[test]
    fn two_sample_field_is_all_boundary() {
        let next = step(&[30.0f32, 70.0], 0.25, BoundaryCondition::Fixed(5.0)).unwrap();
        assert_eq!(next, vec![5.0, 5.0]);
    }

    #[test]
    fn worked_interior_example() {
        // 100 + 0.5 * (0 + 0 - 200) = 0
        let next = step(&[0.0f32, 100.0, 0.0], 0.5, BoundaryCondition::Fixed(0.0)).unwrap();
        assert_eq!(next, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn input_is_left_untouched() {
        let field = vec![1.0f32, 2.0, 3.0, 4.0];
        let before = field.clone();
        let _ = step(&field, 0.3, BoundaryCondition::Fixed(0.0)).unwrap();
        assert_eq!(field, before);
    }

    // ── Boundary policy tests ───────────────────────────────────

    #[test]
    fn fixed_edges_ignore_previous_edge_values() {
        // Hot edges in the input; the policy pins them, it does not copy.
        let next = step(&[99.0f64, 10.0, 10.0, 99.0], 0.0, BoundaryCondition::Fixed(0.0)).unwrap();
        assert_eq!(next[0], 0.0);
        assert_eq!(next[3], 0.0);
    }

    #[test]
    fn fixed_nonzero_value_pins_both_edges() {
        let next = step(&[0.0f32, 50.0, 0.0], 0.1, BoundaryCondition::Fixed(20.0)).unwrap();
        assert_eq!(next[0], 20.0);
        assert_eq!(next[2], 20.0);
    }

    #[test]
    fn insulated_rod_conserves_total_heat() {
        let field = vec![100.0f64, 0.0, 0.0, 0.0, 0.0];
        let total: f64 = field.iter().sum();
        let next = step(&field, 0.25, BoundaryCondition::Insulated).unwrap();
        let total_after: f64 = next.iter().sum();
        assert!(
            (total - total_after).abs() < 1e-9,
            "insulated: total heat changed from {total} to {total_after}"
        );
    }

    #[test]
    fn periodic_ring_conserves_total_heat() {
        let field = vec![100.0f64, 0.0, 25.0, 0.0, 50.0];
        let total: f64 = field.iter().sum();
        let next = step(&field, 0.25, BoundaryCondition::Periodic).unwrap();
        let total_after: f64 = next.iter().sum();
        assert!(
            (total - total_after).abs() < 1e-9,
            "periodic: total heat changed from {total} to {total_after}"
        );
    }

    #[test]
    fn periodic_edges_see_each_other() {
        // All heat at index 0; with wrap the last sample warms too.
        let next = step(&[100.0f64, 0.0, 0.0, 0.0], 0.25, BoundaryCondition::Periodic).unwrap();
        assert!(next[3] > 0.0, "wrap neighbour should warm: {}", next[3]);
        assert!(next[1] > 0.0, "direct neighbour should warm: {}", next[1]);
        assert_eq!(next[2], 0.0);
    }

    // ── Physics tests ───────────────────────────────────────────

    #[test]
    fn uniform_interior_stays_uniform() {
        let field = vec![10.0f64; 9];
        let next = step(&field, 0.4, BoundaryCondition::Insulated).unwrap();
        for &v in &next {
            assert!(
                (v - 10.0).abs() < 1e-12,
                "uniform field should stay uniform, got {v}"
            );
        }
    }

    #[test]
    fn hot_center_spreads_to_neighbours() {
        let mut field = vec![0.0f64; 7];
        field[3] = 100.0;
        let next = step(&field, 0.2, BoundaryCondition::Fixed(0.0)).unwrap();
        assert!(next[3] < 100.0, "center should cool: {}", next[3]);
        assert!(next[2] > 0.0, "left neighbour should warm: {}", next[2]);
        assert!(next[4] > 0.0, "right neighbour should warm: {}", next[4]);
        assert_eq!(next[1], 0.0);
        assert_eq!(next[5], 0.0);
    }

    #[test]
    fn f32_and_f64_agree_on_exact_inputs() {
        // Powers of two and a dyadic coefficient: both widths are exact.
        let f32_next = step(&[0.0f32, 64.0, 16.0, 0.0], 0.25, BoundaryCondition::Fixed(0.0)).unwrap();
        let f64_next = step(&[0.0f64, 64.0, 16.0, 0.0], 0.25, BoundaryCondition::Fixed(0.0)).unwrap();
        for (a, b) in f32_next.iter().zip(&f64_next) {
            assert_eq!(f64::from(*a), *b);
        }
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_field() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-100.0f64..100.0, 3..64)
    }

    proptest! {
        #[test]
        fn interior_recurrence_holds(field in arb_field(), k in 0.0f64..0.6) {
            let next = step(&field, k, BoundaryCondition::Fixed(0.0)).unwrap();
            let n = field.len();
            for i in 1..n - 1 {
                let expected = field[i] + k * (field[i + 1] + field[i - 1] - 2.0 * field[i]);
                prop_assert!(
                    (next[i] - expected).abs() <= 1e-9 * expected.abs().max(1.0),
                    "index {i}: got {}, expected {expected}", next[i],
                );
            }
        }

        #[test]
        fn fixed_edges_always_pinned(field in arb_field(), k in 0.0f64..0.6, v in -50.0f64..50.0) {
            let next = step(&field, k, BoundaryCondition::Fixed(v)).unwrap();
            prop_assert_eq!(next[0], v);
            prop_assert_eq!(next[field.len() - 1], v);
        }

        #[test]
        fn zero_coefficient_keeps_interior(field in arb_field()) {
            let next = step(&field, 0.0, BoundaryCondition::Fixed(0.0)).unwrap();
            for i in 1..field.len() - 1 {
                prop_assert_eq!(next[i], field[i]);
            }
        }
    }
}
