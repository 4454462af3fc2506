use crate::math::RawEscape;

/// Empirical offset that lines the smoothed value up with the discrete
/// count at the escape boundary.
pub const SMOOTH_OFFSET: f64 = 4.0;

/// Converts a raw escape into a continuous iteration count by logarithmic
/// interpolation on the squared magnitude at escape. Only meaningful when
/// escape actually occurred; the inside sentinel must bypass this step.
pub fn smooth_iteration(escape: RawEscape) -> f64 {
    escape.iteration as f64 - escape.norm_sqr.log2().log2() + SMOOTH_OFFSET
}
