mod direct;
mod dual_orbit;
mod perturbation;
mod reference;
mod series;
pub mod smooth;

pub use direct::DirectEvaluator;
pub use dual_orbit::DualOrbitEvaluator;
pub use perturbation::PerturbationEvaluator;
pub use reference::Reference;
pub use series::SeriesEvaluator;

use crate::util::ComplexFixed;

/// Raw escape record: the zero-based iteration index at which the escape
/// test first triggered, and the squared magnitude at that moment. The
/// magnitude is kept so the smoothing step does not have to re-iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawEscape {
    pub iteration: usize,
    pub norm_sqr: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluatorKind {
    Direct,
    DeltaOrbit,
    SeriesCorrection,
    DualOrbit,
}

impl EvaluatorKind {
    pub fn from_name(name: &str) -> Option<EvaluatorKind> {
        match name {
            "direct" => Some(EvaluatorKind::Direct),
            "delta" => Some(EvaluatorKind::DeltaOrbit),
            "series" => Some(EvaluatorKind::SeriesCorrection),
            "dual" => Some(EvaluatorKind::DualOrbit),
            _ => None,
        }
    }
}

/// The four configured evaluators behind a single per-pixel call. Each is a
/// pure function of (reference point, offset); the optional precomputed
/// reference orbit only changes performance, never the result.
pub struct Evaluators {
    pub direct: DirectEvaluator,
    pub perturbation: PerturbationEvaluator,
    pub series: SeriesEvaluator,
    pub dual_orbit: DualOrbitEvaluator,
}

impl Evaluators {
    pub fn evaluate(
        &self,
        kind: EvaluatorKind,
        c: ComplexFixed<f64>,
        dc: ComplexFixed<f64>,
        reference: Option<&Reference>,
    ) -> Option<RawEscape> {
        match kind {
            EvaluatorKind::Direct => self.direct.evaluate(c + dc),
            EvaluatorKind::DeltaOrbit => match reference {
                Some(reference) => self.perturbation.evaluate_with_reference(reference, dc),
                None => self.perturbation.evaluate(c, dc),
            },
            EvaluatorKind::SeriesCorrection => self.series.evaluate(c, dc),
            EvaluatorKind::DualOrbit => self.dual_orbit.evaluate(dc, c),
        }
    }
}
