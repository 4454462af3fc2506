pub mod image;

pub type ComplexFixed<T> = num_complex::Complex<T>;

// Squaring is done directly rather than through the generic multiply to save an operation
#[inline]
pub fn square(z: ComplexFixed<f64>) -> ComplexFixed<f64> {
    ComplexFixed::new(z.re * z.re - z.im * z.im, 2.0 * z.re * z.im)
}

#[derive(Clone)]
pub struct PixelData {
    pub image_x: usize,
    pub image_y: usize,
    pub iteration: usize,
    pub smooth: f32,
    pub escaped: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_matches_multiply() {
        let z = ComplexFixed::new(1.5, -2.25);
        assert_eq!(square(z), z * z);
    }
}
