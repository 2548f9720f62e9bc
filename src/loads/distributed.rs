//! Distributed load contributions along the beam axis

use serde::{Deserialize, Serialize};

use crate::math::Vec as DVec;
use crate::mesh::Mesh;

/// Uniform distributed load over a sub-span of the beam
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UniformLoad {
    /// Disabled loads contribute nothing
    pub enabled: bool,
    /// Intensity in N/m
    pub magnitude: f64,
    /// Loaded interval as fractions of the beam length
    pub span: (f64, f64),
}

impl UniformLoad {
    /// Create an enabled uniform load over a sub-span
    pub fn new(magnitude: f64, span: (f64, f64)) -> Self {
        Self {
            enabled: true,
            magnitude,
            span,
        }
    }

    /// Uniform load over the whole beam
    pub fn full_span(magnitude: f64) -> Self {
        Self::new(magnitude, (0.0, 1.0))
    }

    /// Placeholder that contributes nothing
    pub fn none() -> Self {
        Self {
            enabled: false,
            magnitude: 0.0,
            span: (0.0, 1.0),
        }
    }

    /// Sample the load intensity at every mesh station, N/m.
    ///
    /// The span is order-normalized; stations on the closed interval carry
    /// the full magnitude. Disabled or zero loads yield an all-zero profile.
    pub fn profile(&self, mesh: &Mesh) -> DVec {
        let x = mesh.positions();
        let mut profile = DVec::zeros(x.len());
        if !self.enabled || self.magnitude == 0.0 {
            return profile;
        }
        let length = mesh.span();
        let start = self.span.0.min(self.span.1) * length;
        let end = self.span.0.max(self.span.1) * length;
        for i in 0..x.len() {
            if x[i] >= start && x[i] <= end {
                profile[i] = self.magnitude;
            }
        }
        profile
    }
}

/// Editor row describing one segment of distributed load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadSegment {
    /// Row identifier shown in the editor
    pub id: String,
    /// Intensity in kN/m
    pub magnitude: f64,
    /// Segment start as a fraction of the beam length
    pub start: f64,
    /// Segment end as a fraction of the beam length
    pub end: f64,
    /// Disabled rows are ignored by the assembler
    pub enabled: bool,
}

impl LoadSegment {
    /// Create an enabled segment row
    pub fn new(id: &str, magnitude: f64, start: f64, end: f64) -> Self {
        Self {
            id: id.to_string(),
            magnitude,
            start,
            end,
            enabled: true,
        }
    }

    /// Mark the row disabled
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Sum the enabled segment rows into a single intensity profile, kN/m → N/m.
///
/// Segment bounds are clamped to the beam and order-normalized; overlapping
/// segments accumulate additively.
pub fn segmented_profile(mesh: &Mesh, segments: &[LoadSegment]) -> DVec {
    let x = mesh.positions();
    let length = mesh.span();
    let mut profile = DVec::zeros(x.len());
    for segment in segments {
        if !segment.enabled {
            continue;
        }
        let mut start = segment.start.clamp(0.0, 1.0) * length;
        let mut end = segment.end.clamp(0.0, 1.0) * length;
        if end < start {
            std::mem::swap(&mut start, &mut end);
        }
        let magnitude = segment.magnitude * 1e3;
        for i in 0..x.len() {
            if x[i] >= start && x[i] <= end {
                profile[i] += magnitude;
            }
        }
    }
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::discretize;

    #[test]
    fn test_uniform_disabled_is_zero() {
        let mesh = discretize(8.0, 9).unwrap();
        let profile = UniformLoad::full_span(40e3).profile(&mesh);
        assert!(profile.iter().all(|&q| q == 40e3));

        let mut load = UniformLoad::full_span(40e3);
        load.enabled = false;
        assert!(load.profile(&mesh).iter().all(|&q| q == 0.0));
    }

    #[test]
    fn test_uniform_sub_span_mask() {
        let mesh = discretize(8.0, 9).unwrap();
        // Loaded on [2 m, 6 m]
        let profile = UniformLoad::new(10e3, (0.25, 0.75)).profile(&mesh);
        let x = mesh.positions();
        for i in 0..9 {
            let expected = if x[i] >= 2.0 && x[i] <= 6.0 { 10e3 } else { 0.0 };
            assert_eq!(profile[i], expected);
        }
    }

    #[test]
    fn test_uniform_span_order_normalized() {
        let mesh = discretize(8.0, 9).unwrap();
        let forward = UniformLoad::new(10e3, (0.25, 0.75)).profile(&mesh);
        let reversed = UniformLoad::new(10e3, (0.75, 0.25)).profile(&mesh);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_segments_accumulate() {
        let mesh = discretize(10.0, 11).unwrap();
        let segments = vec![
            LoadSegment::new("S1", 20.0, 0.0, 1.0),
            LoadSegment::new("S2", 5.0, 0.5, 1.0),
        ];
        let profile = segmented_profile(&mesh, &segments);
        // First half only S1, second half S1 + S2 (kN/m → N/m)
        assert_eq!(profile[0], 20e3);
        assert_eq!(profile[10], 25e3);
    }

    #[test]
    fn test_segment_bounds_clamped_and_swapped() {
        let mesh = discretize(4.0, 5).unwrap();
        let segments = vec![LoadSegment::new("S1", 8.0, 1.7, -0.3)];
        let profile = segmented_profile(&mesh, &segments);
        // Clamps to the full span regardless of ordering
        assert!(profile.iter().all(|&q| q == 8e3));
    }

    #[test]
    fn test_disabled_segment_ignored() {
        let mesh = discretize(4.0, 5).unwrap();
        let segments = vec![LoadSegment::new("S1", 8.0, 0.0, 1.0).disabled()];
        let profile = segmented_profile(&mesh, &segments);
        assert!(profile.iter().all(|&q| q == 0.0));
    }
}
