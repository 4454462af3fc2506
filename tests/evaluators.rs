use deltabrot::math::{
    DirectEvaluator, DualOrbitEvaluator, EvaluatorKind, Evaluators, PerturbationEvaluator,
    Reference, SeriesEvaluator,
};
use deltabrot::util::ComplexFixed;

fn evaluators(escape_radius_sqr: f64, maximum_iteration: usize) -> Evaluators {
    Evaluators {
        direct: DirectEvaluator::new(escape_radius_sqr, maximum_iteration),
        perturbation: PerturbationEvaluator::new(escape_radius_sqr, maximum_iteration),
        series: SeriesEvaluator::new(escape_radius_sqr, maximum_iteration),
        dual_orbit: DualOrbitEvaluator::new(escape_radius_sqr, maximum_iteration),
    }
}

const ALL_KINDS: [EvaluatorKind; 4] = [
    EvaluatorKind::Direct,
    EvaluatorKind::DeltaOrbit,
    EvaluatorKind::SeriesCorrection,
    EvaluatorKind::DualOrbit,
];

#[test]
fn interior_reference_with_zero_offset_is_inside_everywhere() {
    let evaluators = evaluators(4.0, 2000);
    let zero = ComplexFixed::new(0.0, 0.0);

    for &kind in &ALL_KINDS {
        assert_eq!(evaluators.evaluate(kind, zero, zero, None), None);
    }
}

#[test]
fn far_outside_point_escapes_quickly_everywhere() {
    // |p| > 2 guarantees divergence within the first couple of steps, and
    // with the offset carrying the whole point every formulation collapses
    // to the direct recurrence and reports the same index.
    let evaluators = evaluators(4.0, 2000);
    let zero = ComplexFixed::new(0.0, 0.0);

    for &(re, im) in &[(2.5, 0.0), (0.0, 3.0), (-2.2, 2.2)] {
        let p = ComplexFixed::new(re, im);
        let expected = evaluators.evaluate(EvaluatorKind::Direct, zero, p, None);
        let expected = expected.expect("point outside the set must escape");

        assert!(expected.iteration <= 2);

        for &kind in &ALL_KINDS {
            let escape = evaluators
                .evaluate(kind, zero, p, None)
                .expect("point outside the set must escape");
            assert_eq!(escape.iteration, expected.iteration);
        }
    }
}

#[test]
fn perturbation_evaluators_agree_with_the_direct_ground_truth() {
    // Interior reference, offsets large enough to leave the set. Escapes
    // here are fast, so double precision rounding cannot move the index by
    // more than a count in any of the formulations.
    let evaluators = evaluators(4.0, 2000);
    let centre = ComplexFixed::new(-0.2, 0.2);

    for &(re, im) in &[(1.0, 0.0), (0.7, -0.3), (0.8, -0.2), (0.6, 0.8)] {
        let dc = ComplexFixed::new(re, im);
        let truth = evaluators
            .direct
            .evaluate(centre + dc)
            .expect("offset point must escape");

        for &kind in &[
            EvaluatorKind::DeltaOrbit,
            EvaluatorKind::SeriesCorrection,
            EvaluatorKind::DualOrbit,
        ] {
            let escape = evaluators
                .evaluate(kind, centre, dc, None)
                .expect("offset point must escape");
            let difference = (escape.iteration as i64 - truth.iteration as i64).abs();

            assert!(
                difference <= 1,
                "{:?} reported {} against {}",
                kind,
                escape.iteration,
                truth.iteration
            );
        }
    }
}

#[test]
fn small_offsets_agree_with_the_direct_ground_truth() {
    // Reference magnitude ~1 on the cardioid cusp, offsets orders of
    // magnitude smaller, thresholds equalized. The delta and dual orbits
    // track the exact deviation recurrence and must stay within a couple
    // of counts of the direct index. The series form folds higher powers
    // of the offset into its correction term, so it gets a looser bound
    // that scales with the escape time.
    let evaluators = evaluators(4.0, 6000);
    let centre = ComplexFixed::new(0.25, 0.0);

    for &offset in &[1e-4, 1e-5, 1e-6] {
        let dc = ComplexFixed::new(offset, 0.0);
        let truth = evaluators
            .direct
            .evaluate(centre + dc)
            .expect("offset point must escape within the cap");

        let series_tolerance = truth.iteration as i64 / 100 + 8;

        for &(kind, tolerance) in &[
            (EvaluatorKind::DeltaOrbit, 2),
            (EvaluatorKind::DualOrbit, 2),
            (EvaluatorKind::SeriesCorrection, series_tolerance),
        ] {
            let escape = evaluators
                .evaluate(kind, centre, dc, None)
                .expect("offset point must escape within the cap");
            let difference = (escape.iteration as i64 - truth.iteration as i64).abs();

            assert!(
                difference <= tolerance,
                "{:?} reported {} against {} at offset {:e}",
                kind,
                escape.iteration,
                truth.iteration,
                offset
            );
        }
    }
}

#[test]
fn tiny_offsets_from_an_interior_reference_stay_inside() {
    // Offset magnitude several orders below the reference magnitude: the
    // perturbed point is still interior and every evaluator must agree on
    // the sentinel.
    let evaluators = evaluators(4.0, 2000);
    let centre = ComplexFixed::new(-0.2, 0.2);

    for &(re, im) in &[(1e-6, 0.0), (0.0, -1e-6), (1e-7, 1e-7)] {
        let dc = ComplexFixed::new(re, im);

        for &kind in &ALL_KINDS {
            assert_eq!(evaluators.evaluate(kind, centre, dc, None), None);
        }
    }
}

#[test]
fn delta_orbit_uses_the_precomputed_reference_transparently() {
    let evaluators = evaluators(4.0, 2000);
    let centre = ComplexFixed::new(-0.2, 0.2);

    let mut reference = Reference::new(centre, 2000);
    assert!(reference.run());

    for &(re, im) in &[(1.0, 0.0), (1e-6, 0.0), (0.45, 0.0)] {
        let dc = ComplexFixed::new(re, im);

        assert_eq!(
            evaluators.evaluate(EvaluatorKind::DeltaOrbit, centre, dc, Some(&reference)),
            evaluators.evaluate(EvaluatorKind::DeltaOrbit, centre, dc, None)
        );
    }
}

#[test]
fn evaluation_is_idempotent() {
    let evaluators = evaluators(4.0, 2000);
    let centre = ComplexFixed::new(-0.2, 0.2);
    let dc = ComplexFixed::new(0.45, 0.0);

    for &kind in &ALL_KINDS {
        assert_eq!(
            evaluators.evaluate(kind, centre, dc, None),
            evaluators.evaluate(kind, centre, dc, None)
        );
    }
}
