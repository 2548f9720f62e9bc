//! Normal-stress field over the cross-section height

use crate::math::{self, Mat, Vec as DVec};
use crate::results::StressField;

const PA_TO_MPA: f64 = 1e-6;
const M_TO_MM: f64 = 1e3;

/// Map the moment field onto a symmetric height grid: σ(x, y) = y·M(x)/I.
///
/// Heights are reported in mm, stresses in MPa. A zero-size section or
/// zero inertia is a valid transient editing state, not an error: it
/// yields a single all-zero row instead of dividing by zero.
pub fn stress_field(
    moment: &DVec,
    section_height: f64,
    inertia: f64,
    samples: usize,
) -> StressField {
    if section_height <= 0.0 || inertia <= 0.0 {
        return StressField {
            y_mm: DVec::zeros(1),
            sigma: Mat::zeros(1, moment.len()),
        };
    }

    let y = math::linspace(-section_height / 2.0, section_height / 2.0, samples);
    let sigma = Mat::from_fn(samples, moment.len(), |row, col| {
        y[row] * moment[col] / inertia * PA_TO_MPA
    });
    StressField {
        y_mm: y * M_TO_MM,
        sigma,
    }
}
