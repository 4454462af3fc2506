use crate::util::{square, ComplexFixed};

/// Precomputed reference orbit. The delta-orbit update of the reference
/// value depends only on the reference point, so it is identical across all
/// pixels of a frame and can be hoisted into this once-per-frame sequence.
/// `z_reference[i]` holds Z_i with Z_0 = 0; access is by iteration index.
pub struct Reference {
    pub c: ComplexFixed<f64>,
    pub current_iteration: usize,
    pub maximum_iteration: usize,
    pub z_reference: Vec<ComplexFixed<f64>>,
}

impl Reference {
    pub fn new(c: ComplexFixed<f64>, maximum_iteration: usize) -> Reference {
        Reference {
            c,
            current_iteration: 0,
            maximum_iteration,
            z_reference: vec![ComplexFixed::new(0.0, 0.0)],
        }
    }

    /// Extends the orbit to the iteration cap. The reference point is
    /// expected to stay bounded; if its orbit diverges anyway the run stops
    /// early and returns false, and evaluations against this reference are
    /// clamped to the iterations that were actually produced.
    pub fn run(&mut self) -> bool {
        // Loop until the reference point escapes or the specified maximum is reached
        while self.current_iteration < self.maximum_iteration {
            let z = square(self.z_reference[self.current_iteration]) + self.c;
            self.z_reference.push(z);
            self.current_iteration += 1;

            if z.norm_sqr() >= 1e16 {
                break;
            }
        }

        self.current_iteration == self.maximum_iteration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_reference_runs_to_cap() {
        let mut reference = Reference::new(ComplexFixed::new(-1.0, 0.0), 500);

        assert!(reference.run());
        assert_eq!(reference.current_iteration, 500);
        assert_eq!(reference.z_reference.len(), 501);

        // c = -1 is the period two orbit 0, -1, 0, -1, ...
        assert_eq!(reference.z_reference[2], ComplexFixed::new(0.0, 0.0));
        assert_eq!(reference.z_reference[3], ComplexFixed::new(-1.0, 0.0));
    }

    #[test]
    fn escaping_reference_stops_early() {
        let mut reference = Reference::new(ComplexFixed::new(2.0, 0.0), 500);

        assert!(!reference.run());
        assert!(reference.current_iteration < 500);
    }
}
