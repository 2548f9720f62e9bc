//! Material properties

use serde::{Deserialize, Serialize};

/// Material properties for beam response analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Name of the material
    pub name: String,
    /// Modulus of elasticity (Young's modulus) in Pa
    pub e: f64,
    /// Shear modulus in Pa
    pub g: f64,
    /// Density in kg/m³
    pub rho: f64,
    /// Yield strength (optional) in Pa
    pub fy: Option<f64>,
}

impl Material {
    /// Create a new material with given properties
    pub fn new(name: &str, e: f64, g: f64, rho: f64) -> Self {
        Self {
            name: name.to_string(),
            e,
            g,
            rho,
            fy: None,
        }
    }

    /// Set the yield strength
    pub fn with_yield_strength(mut self, fy: f64) -> Self {
        self.fy = Some(fy);
        self
    }

    /// Create an isotropic material from E and nu
    /// G is calculated as E / (2 * (1 + nu))
    pub fn isotropic(name: &str, e: f64, nu: f64, rho: f64) -> Self {
        let g = e / (2.0 * (1.0 + nu));
        Self::new(name, e, g, rho)
    }

    /// Create a standard structural steel material
    pub fn steel() -> Self {
        Self {
            name: "Steel".to_string(),
            e: 205e9,        // 205 GPa
            g: 79e9,         // 79 GPa
            rho: 7850.0,     // kg/m³
            fy: Some(345e6), // 345 MPa
        }
    }

    /// Create an aluminum material (6061-T6)
    pub fn aluminum() -> Self {
        Self {
            name: "Aluminum".to_string(),
            e: 68.9e9,       // 68.9 GPa
            g: 26e9,         // 26 GPa
            rho: 2700.0,     // kg/m³
            fy: Some(276e6), // 276 MPa
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::steel()
    }
}
