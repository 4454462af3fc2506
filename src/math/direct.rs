use crate::math::RawEscape;
use crate::util::{square, ComplexFixed};

/// Classic escape-time iteration at one fixed precision. This is both a
/// standalone renderer and the ground truth the perturbation evaluators are
/// validated against. The escape radius is squared 2 by default; squared
/// sqrt(10) is the other threshold the comparison views have used.
pub struct DirectEvaluator {
    pub escape_radius_sqr: f64,
    pub maximum_iteration: usize,
}

impl DirectEvaluator {
    pub fn new(escape_radius_sqr: f64, maximum_iteration: usize) -> Self {
        DirectEvaluator {
            escape_radius_sqr,
            maximum_iteration,
        }
    }

    pub fn evaluate(&self, p: ComplexFixed<f64>) -> Option<RawEscape> {
        let mut z = ComplexFixed::new(0.0, 0.0);

        for iteration in 0..self.maximum_iteration {
            z = square(z) + p;
            let norm_sqr = z.norm_sqr();

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
