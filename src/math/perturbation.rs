use crate::math::{RawEscape, Reference};
use crate::util::{square, ComplexFixed};

/// Delta-orbit perturbation. The pixel orbit W_n is never formed; only its
/// deviation dz_n = W_n - Z_n from the reference orbit is iterated:
///
///   dz_{n+1} = (2 Z_n + dz_n) dz_n + dc
///    Z_{n+1} = Z_n^2 + C
///
/// The escape test uses |dz|^2 only, not |Z + dz|^2. The reference point is
/// chosen to stay bounded, so Z alone can never trigger a false escape, and
/// testing the deviation directly avoids forming the sum Z + dz whose
/// precision would be swamped by Z.
pub struct PerturbationEvaluator {
    pub escape_radius_sqr: f64,
    pub maximum_iteration: usize,
}

impl PerturbationEvaluator {
    pub fn new(escape_radius_sqr: f64, maximum_iteration: usize) -> Self {
        PerturbationEvaluator {
            escape_radius_sqr,
            maximum_iteration,
        }
    }

    /// Inline form: the reference value is recomputed each step.
    pub fn evaluate(&self, c: ComplexFixed<f64>, dc: ComplexFixed<f64>) -> Option<RawEscape> {
        let mut z = ComplexFixed::new(0.0, 0.0);
        let mut dz = ComplexFixed::new(0.0, 0.0);

        for iteration in 0..self.maximum_iteration {
            dz = (2.0 * z + dz) * dz + dc;
            z = square(z) + c;

            let norm_sqr = dz.norm_sqr();

            if norm_sqr > self.escape_radius_sqr {
                return Some(RawEscape {
                    iteration,
                    norm_sqr,
                });
            }
        }

        None
    }

    /// Precomputed form: indexes a once-per-frame reference orbit instead of
    /// advancing the reference inline. Observably identical to `evaluate`
    /// for a reference that ran to the same cap.
    pub fn evaluate_with_reference(
        &self,
        reference: &Reference,
        dc: ComplexFixed<f64>,
    ) -> Option<RawEscape> {
        let mut dz = ComplexFixed::new(0.0, 0.0);
        let maximum_iteration = self.maximum_iteration.min(reference.current_iteration);

        for iteration in 0..maximum_iteration {
            dz = (2.0 * reference.z_reference[iteration] + dz) * dz + dc;

            let norm_sqr = dz.norm_sqr();

            if norm_sqr > self.escape_radius_sqr {
                return Some(RawEscape {
                    iteration,
                    norm_sqr,
                });
            }
        }

        None
    }
}
