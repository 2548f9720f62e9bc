//! Longitudinal sample grid along the beam axis

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};
use crate::math::{self, Vec as DVec};

/// Ordered sample grid spanning [0, L] inclusive.
///
/// Stations are strictly increasing, with the first pinned to 0 and the
/// last to the beam length. Built once per solve and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    positions: DVec,
}

impl Mesh {
    /// Number of sample stations
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Station positions in m
    pub fn positions(&self) -> &DVec {
        &self.positions
    }

    /// Position of station `i` in m
    pub fn station(&self, i: usize) -> f64 {
        self.positions[i]
    }

    /// Beam length covered by the grid
    pub fn span(&self) -> f64 {
        self.positions[self.positions.len() - 1]
    }
}

/// Build `nodes` equally spaced stations from 0 to `length` inclusive.
///
/// The surrounding UI clamps its sliders to valid ranges, so out-of-range
/// arguments are caller errors and fail fast.
pub fn discretize(length: f64, nodes: usize) -> BeamResult<Mesh> {
    if length <= 0.0 || !length.is_finite() {
        return Err(BeamError::InvalidLength(length));
    }
    if nodes < 2 {
        return Err(BeamError::InvalidMeshDensity(nodes));
    }
    Ok(Mesh {
        positions: math::linspace(0.0, length, nodes),
    })
}
