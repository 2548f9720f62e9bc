//! Beam model - input snapshot and solve orchestration

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::{self, AnalysisOptions};
use crate::elements::{Material, Section};
use crate::error::{BeamError, BeamResult};
use crate::loads::{self, LoadSegment, PointLoadRow, UniformLoad};
use crate::math::Vec as DVec;
use crate::mesh;
use crate::results::{BeamResults, DeflectionField, InternalForceField, ResponseSummary, StressField};

/// Input snapshot for a single beam response solve.
///
/// Every solve recomputes the full response from the current inputs;
/// nothing is cached or mutated between solves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamModel {
    /// Beam length in m
    pub length: f64,
    /// Number of mesh stations
    pub mesh_nodes: usize,
    /// Material properties
    pub material: Material,
    /// Cross-section properties
    pub section: Section,
    /// Base uniform distributed load
    pub uniform: UniformLoad,
    /// Additional distributed load segment rows
    pub segments: Vec<LoadSegment>,
    /// Point load editor rows
    pub point_loads: Vec<PointLoadRow>,
    /// Solve options
    pub options: AnalysisOptions,
}

impl BeamModel {
    /// Create a model with no loads and default options
    pub fn new(length: f64, mesh_nodes: usize, material: Material, section: Section) -> Self {
        Self {
            length,
            mesh_nodes,
            material,
            section,
            uniform: UniformLoad::none(),
            segments: Vec::new(),
            point_loads: Vec::new(),
            options: AnalysisOptions::default(),
        }
    }

    /// Set the base uniform load
    pub fn with_uniform(mut self, uniform: UniformLoad) -> Self {
        self.uniform = uniform;
        self
    }

    /// Set the solve options
    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    /// Append a distributed load segment row
    pub fn add_segment(&mut self, segment: LoadSegment) {
        self.segments.push(segment);
    }

    /// Append a point load row
    pub fn add_point_load(&mut self, row: PointLoadRow) {
        self.point_loads.push(row);
    }

    fn validate(&self) -> BeamResult<()> {
        if self.length <= 0.0 || !self.length.is_finite() {
            return Err(BeamError::InvalidLength(self.length));
        }
        if self.mesh_nodes < 2 {
            return Err(BeamError::InvalidMeshDensity(self.mesh_nodes));
        }
        Ok(())
    }

    /// Recompute the full beam response from the current inputs.
    ///
    /// Fails fast on invalid geometry or mesh density before producing any
    /// output; empty load tables simply mean an unloaded beam.
    pub fn solve(&self) -> BeamResult<BeamResults> {
        self.validate()?;

        let mesh = mesh::discretize(self.length, self.mesh_nodes)?;
        debug!(
            "discretized beam: L = {} m, {} stations",
            self.length,
            mesh.len()
        );

        let scale = self.options.load_scale;
        let q_profile =
            (self.uniform.profile(&mesh) + loads::segmented_profile(&mesh, &self.segments)) * scale;
        let point_loads: Vec<_> = loads::point_loads_from_rows(&self.point_loads, self.length)
            .into_iter()
            .map(|p| p.scaled(scale))
            .collect();
        debug!(
            "assembled loads: {} point loads, load scale {}",
            point_loads.len(),
            scale
        );

        let forces = analysis::shear_moment(&mesh, &q_profile, &point_loads);
        let deflection = analysis::integrate_deflection(
            &mesh,
            &forces,
            &self.material,
            &self.section,
            &self.options,
        );
        let stress = analysis::stress_field(
            &forces.moment,
            self.section.height,
            self.section.inertia,
            self.options.stress_samples,
        );

        let summary = summarize(&forces, &deflection, &stress, &self.material, mesh.len());
        debug!(
            "solve complete: |V|max = {:.1} N, |M|max = {:.1} N·m, |σ|max = {:.2} MPa",
            summary.max_shear, summary.max_moment, summary.max_stress
        );

        Ok(BeamResults {
            mesh,
            q_profile,
            point_loads,
            forces,
            deflection,
            stress,
            summary,
        })
    }
}

fn summarize(
    forces: &InternalForceField,
    deflection: &DeflectionField,
    stress: &StressField,
    material: &Material,
    num_nodes: usize,
) -> ResponseSummary {
    let max_stress = stress.max_abs();
    let utilization = material
        .fy
        .filter(|&fy| fy > 0.0)
        .map(|fy| max_stress * 1e6 / fy);
    ResponseSummary {
        max_deflection: signed_extreme(&deflection.deflection),
        max_shear: forces.shear.iter().fold(0.0, |acc: f64, &v| acc.max(v.abs())),
        max_moment: forces.moment.iter().fold(0.0, |acc: f64, &m| acc.max(m.abs())),
        max_stress,
        utilization,
        num_nodes,
    }
}

/// Value with the largest magnitude, sign preserved
fn signed_extreme(values: &DVec) -> f64 {
    values
        .iter()
        .fold(0.0, |acc, &v| if v.abs() > acc.abs() { v } else { acc })
}
