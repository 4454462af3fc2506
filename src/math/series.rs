use crate::math::RawEscape;
use crate::util::{square, ComplexFixed};

/// Series-correction perturbation. The true orbit of a + c is approximated
/// as a degree one polynomial in the offset,
///
///   W_n ~ z0_n + z1_n c,
///
/// where z0 is the base orbit of `a` and z1 a running correction term:
///
///   z1_{n+1} = 2 z0_n z1_n + 1 + c z1_n^2
///   z0_{n+1} = z0_n^2 + a
///
/// Higher powers of c are folded back into z1 rather than kept exact, so
/// this diverges from the true orbit sooner than the delta-orbit form at
/// large offsets. That is an accepted accuracy/cost trade-off. The escape
/// test runs on the trial value formed after the update, which makes the
/// reported index collapse exactly to the direct evaluator's at c = 0.
pub struct SeriesEvaluator {
    pub escape_radius_sqr: f64,
    pub maximum_iteration: usize,
}

impl SeriesEvaluator {
    pub fn new(escape_radius_sqr: f64, maximum_iteration: usize) -> Self {
        SeriesEvaluator {
            escape_radius_sqr,
            maximum_iteration,
        }
    }

    pub fn evaluate(&self, a: ComplexFixed<f64>, c: ComplexFixed<f64>) -> Option<RawEscape> {
        let mut z0 = ComplexFixed::new(0.0, 0.0);
        let mut z1 = ComplexFixed::new(0.0, 0.0);

        for iteration in 0..self.maximum_iteration {
            // z1 is advanced with the pre-update z0
            let z1_next = 2.0 * z0 * z1 + 1.0 + c * square(z1);
            z0 = square(z0) + a;
            z1 = z1_next;

            let t = z0 + z1 * c;
            let norm_sqr = t.norm_sqr();

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
