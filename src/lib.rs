//! Beam Solver - static response of a straight elastic beam
//!
//! This library computes the full structural response of a statically
//! determinate beam under combined distributed and point transverse
//! loads:
//! - Internal shear force and bending moment distributions
//! - Rotation and lateral deflection under Euler-Bernoulli or
//!   Timoshenko theory
//! - The normal-stress field over the beam length and cross-section
//!   height
//!
//! Every solve recomputes all arrays from the current input snapshot;
//! the pipeline is pure, single-threaded and deterministic.
//!
//! ## Example
//! ```rust
//! use beam_solver::prelude::*;
//!
//! let section = Section::wide_flange(400.0, 200.0, 18.0, 12.0).unwrap();
//! let mut model = BeamModel::new(8.0, 600, Material::steel(), section);
//!
//! // 40 kN/m over the whole span plus a 120 kN load at 0.65 L
//! model.uniform = UniformLoad::full_span(40_000.0);
//! model.add_point_load(PointLoadRow::new("P1", 120.0, 0.65));
//!
//! let results = model.solve().unwrap();
//! assert_eq!(results.forces.shear.len(), 600);
//! assert!(results.summary.max_stress > 0.0);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod mesh;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{AnalysisOptions, BeamTheory};
    pub use crate::elements::{Material, Section, SectionShape};
    pub use crate::error::{BeamError, BeamResult};
    pub use crate::loads::{LoadSegment, PointLoad, PointLoadRow, UniformLoad};
    pub use crate::mesh::{discretize, Mesh};
    pub use crate::model::BeamModel;
    pub use crate::results::{
        BeamResults, DeflectionField, InternalForceField, ProbeSample, ResponseSummary,
        StressField,
    };
}
