//! Analysis configuration and response integration

mod deflection;
mod internal_forces;
mod stress;

pub use deflection::integrate_deflection;
pub use internal_forces::shear_moment;
pub use stress::stress_field;

use serde::{Deserialize, Serialize};

/// Beam theory used for the deflection integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeamTheory {
    /// Bending deformation only
    EulerBernoulli,
    /// Bending plus shear deformation
    Timoshenko,
}

impl BeamTheory {
    /// Shear-correction factor used when the caller does not override it
    pub fn default_shear_correction(self) -> f64 {
        match self {
            BeamTheory::EulerBernoulli => 1.0,
            BeamTheory::Timoshenko => 1.2,
        }
    }
}

impl Default for BeamTheory {
    fn default() -> Self {
        Self::EulerBernoulli
    }
}

/// Options for a beam response solve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Beam theory for the deflection integration
    pub theory: BeamTheory,
    /// Shear-correction factor κ applied to the Timoshenko shear term
    pub shear_correction: f64,
    /// Global factor applied to every load before integration
    pub load_scale: f64,
    /// Number of height samples in the stress field
    pub stress_samples: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            theory: BeamTheory::EulerBernoulli,
            shear_correction: 1.0,
            load_scale: 1.0,
            stress_samples: 120,
        }
    }
}

impl AnalysisOptions {
    /// Options for an Euler-Bernoulli solve
    pub fn euler_bernoulli() -> Self {
        Self::default()
    }

    /// Options for a Timoshenko solve with the default correction factor
    pub fn timoshenko() -> Self {
        Self {
            theory: BeamTheory::Timoshenko,
            shear_correction: BeamTheory::Timoshenko.default_shear_correction(),
            ..Self::default()
        }
    }

    /// Set the theory; the shear correction resets to the theory default
    pub fn with_theory(mut self, theory: BeamTheory) -> Self {
        self.theory = theory;
        self.shear_correction = theory.default_shear_correction();
        self
    }

    /// Override the shear-correction factor
    pub fn with_shear_correction(mut self, kappa: f64) -> Self {
        self.shear_correction = kappa;
        self
    }

    /// Set the global load-scale factor
    pub fn with_load_scale(mut self, scale: f64) -> Self {
        self.load_scale = scale;
        self
    }

    /// Set the number of height samples in the stress field
    pub fn with_stress_samples(mut self, samples: usize) -> Self {
        self.stress_samples = samples;
        self
    }
}
