//! Result types for a beam response solve

use serde::{Deserialize, Serialize};

use crate::loads::PointLoad;
use crate::math::{Mat, Vec as DVec};
use crate::mesh::Mesh;

/// Internal shear and bending moment per mesh station
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternalForceField {
    /// Shear force V(x) in N
    pub shear: DVec,
    /// Bending moment M(x) in N·m
    pub moment: DVec,
}

/// Curvature, rotation and lateral deflection per mesh station
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeflectionField {
    /// Curvature M/(E·I) in 1/m
    pub curvature: DVec,
    /// Rotation θ(x) in rad
    pub rotation: DVec,
    /// Lateral deflection w(x) in m, including the shear part under Timoshenko
    pub deflection: DVec,
    /// Shear strain γ(x); all-zero under Euler-Bernoulli
    pub shear_strain: DVec,
}

/// Normal stress over the beam length and cross-section height
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressField {
    /// Height samples measured from the section centroid, in mm
    pub y_mm: DVec,
    /// Normal stress in MPa; rows follow `y_mm`, columns follow the mesh
    pub sigma: Mat,
}

impl StressField {
    /// Largest stress magnitude anywhere in the field, MPa
    pub fn max_abs(&self) -> f64 {
        self.sigma.iter().fold(0.0, |acc: f64, &s| acc.max(s.abs()))
    }
}

/// Headline values of a solve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseSummary {
    /// Deflection extreme (signed, largest magnitude) in m
    pub max_deflection: f64,
    /// Largest shear magnitude in N
    pub max_shear: f64,
    /// Largest moment magnitude in N·m
    pub max_moment: f64,
    /// Largest stress magnitude in MPa
    pub max_stress: f64,
    /// `max_stress` relative to the yield strength, when one is set
    pub utilization: Option<f64>,
    /// Number of mesh stations
    pub num_nodes: usize,
}

/// Response sampled at a single station
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProbeSample {
    /// Station index into the mesh
    pub index: usize,
    /// Station position in m
    pub position: f64,
    /// Deflection in mm
    pub deflection_mm: f64,
    /// Normal stress at the top fiber in MPa
    pub sigma_top: f64,
    /// Normal stress at the bottom fiber in MPa
    pub sigma_bottom: f64,
}

/// Complete output of one beam solve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamResults {
    /// Sample grid the response is evaluated on
    pub mesh: Mesh,
    /// Assembled distributed load in N/m
    pub q_profile: DVec,
    /// Ingested point loads (N, m), load scale applied
    pub point_loads: Vec<PointLoad>,
    /// Shear and moment fields
    pub forces: InternalForceField,
    /// Curvature, rotation, deflection and shear strain
    pub deflection: DeflectionField,
    /// Normal-stress field
    pub stress: StressField,
    /// Headline values
    pub summary: ResponseSummary,
}

impl BeamResults {
    /// Sample the response at a fractional position along the beam.
    ///
    /// The ratio is clamped to [0, 1] and snapped to the station at or
    /// below it, the way an interactive probe slider behaves.
    pub fn probe(&self, ratio: f64) -> ProbeSample {
        let n = self.mesh.len();
        let ratio = ratio.clamp(0.0, 1.0);
        let index = ((ratio * (n - 1) as f64) as usize).min(n - 1);
        let rows = self.stress.sigma.nrows();
        ProbeSample {
            index,
            position: self.mesh.station(index),
            deflection_mm: self.deflection.deflection[index] * 1e3,
            sigma_top: self.stress.sigma[(rows - 1, index)],
            sigma_bottom: self.stress.sigma[(0, index)],
        }
    }
}
