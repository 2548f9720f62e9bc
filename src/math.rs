//! Mathematical utilities for beam response integration

use nalgebra::{DMatrix, DVector};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// `count` equally spaced samples on [start, end] inclusive.
///
/// The last sample is pinned to `end` so closed intervals survive
/// floating-point rounding.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec {
    if count < 2 {
        return Vec::from_element(count, start);
    }
    let step = (end - start) / (count - 1) as f64;
    let mut samples = Vec::from_fn(count, |i, _| start + step * i as f64);
    samples[count - 1] = end;
    samples
}

/// Cumulative trapezoidal integral of `values` sampled at stations `x`.
///
/// The integrand is assumed piecewise linear between samples; the first
/// entry is always zero.
pub fn cumulative_trapezoid(values: &Vec, x: &Vec) -> Vec {
    let n = x.len();
    let mut integral = Vec::zeros(n);
    for i in 1..n {
        let dx = x[i] - x[i - 1];
        integral[i] = integral[i - 1] + 0.5 * (values[i - 1] + values[i]) * dx;
    }
    integral
}

/// Trapezoidal integral of `values` over the full span of `x`.
pub fn trapezoid(values: &Vec, x: &Vec) -> f64 {
    let mut total = 0.0;
    for i in 1..x.len() {
        total += 0.5 * (values[i - 1] + values[i]) * (x[i] - x[i - 1]);
    }
    total
}
