//! Cross-section shapes and properties

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};

const MM_TO_M: f64 = 1.0 / 1000.0;

/// Cross-section shape with its raw dimensions in mm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SectionShape {
    /// I-shaped section (doubly symmetric)
    WideFlange {
        /// Total depth in mm
        depth: f64,
        /// Flange width in mm
        flange_width: f64,
        /// Flange thickness in mm
        flange_thickness: f64,
        /// Web thickness in mm
        web_thickness: f64,
    },
    /// Solid rectangular bar
    Rectangular {
        /// Width in mm
        width: f64,
        /// Depth in mm
        depth: f64,
    },
    /// Square hollow tube
    SquareTube {
        /// Outer width in mm
        outer_width: f64,
        /// Wall thickness in mm
        wall_thickness: f64,
    },
    /// Solid circular bar
    Circular {
        /// Diameter in mm
        diameter: f64,
    },
}

/// Cross-section properties derived from a shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Shape and raw dimensions (mm) the properties were derived from
    pub shape: SectionShape,
    /// Cross-sectional area in m²
    pub a: f64,
    /// Second moment of area in m⁴
    pub inertia: f64,
    /// Representative height in m
    pub height: f64,
}

impl Section {
    /// Derive section properties from a shape.
    ///
    /// Dimensions are validated here; a section that cannot physically
    /// exist is a construction-time error, not a solver concern.
    pub fn build(shape: SectionShape) -> BeamResult<Self> {
        match shape {
            SectionShape::WideFlange {
                depth,
                flange_width,
                flange_thickness,
                web_thickness,
            } => {
                require_positive("depth", depth)?;
                require_positive("flange width", flange_width)?;
                require_positive("flange thickness", flange_thickness)?;
                require_positive("web thickness", web_thickness)?;
                if depth <= 2.0 * flange_thickness {
                    return Err(BeamError::InvalidSection(format!(
                        "flanges ({flange_thickness} mm each) leave no web in a {depth} mm deep section"
                    )));
                }
                if flange_width <= web_thickness {
                    return Err(BeamError::InvalidSection(format!(
                        "web thickness {web_thickness} mm exceeds flange width {flange_width} mm"
                    )));
                }
                let h = depth * MM_TO_M;
                let bf = flange_width * MM_TO_M;
                let tf = flange_thickness * MM_TO_M;
                let tw = web_thickness * MM_TO_M;
                let hw = h - 2.0 * tf;
                let a = 2.0 * bf * tf + hw * tw;
                let inertia = (bf * h.powi(3) - (bf - tw) * hw.powi(3)) / 12.0;
                Ok(Self {
                    shape,
                    a,
                    inertia,
                    height: h,
                })
            }
            SectionShape::Rectangular { width, depth } => {
                require_positive("width", width)?;
                require_positive("depth", depth)?;
                let b = width * MM_TO_M;
                let h = depth * MM_TO_M;
                Ok(Self {
                    shape,
                    a: b * h,
                    inertia: b * h.powi(3) / 12.0,
                    height: h,
                })
            }
            SectionShape::SquareTube {
                outer_width,
                wall_thickness,
            } => {
                require_positive("outer width", outer_width)?;
                require_positive("wall thickness", wall_thickness)?;
                if outer_width <= 2.0 * wall_thickness {
                    return Err(BeamError::InvalidSection(format!(
                        "walls ({wall_thickness} mm each) leave no opening in a {outer_width} mm wide tube"
                    )));
                }
                let b = outer_width * MM_TO_M;
                let t = wall_thickness * MM_TO_M;
                let bi = b - 2.0 * t;
                Ok(Self {
                    shape,
                    a: b.powi(2) - bi.powi(2),
                    inertia: (b.powi(4) - bi.powi(4)) / 12.0,
                    height: b,
                })
            }
            SectionShape::Circular { diameter } => {
                require_positive("diameter", diameter)?;
                let d = diameter * MM_TO_M;
                Ok(Self {
                    shape,
                    a: std::f64::consts::PI * d.powi(2) / 4.0,
                    inertia: std::f64::consts::PI * d.powi(4) / 64.0,
                    height: d,
                })
            }
        }
    }

    /// Create a wide flange (I-beam) section, dimensions in mm
    pub fn wide_flange(
        depth: f64,
        flange_width: f64,
        flange_thickness: f64,
        web_thickness: f64,
    ) -> BeamResult<Self> {
        Self::build(SectionShape::WideFlange {
            depth,
            flange_width,
            flange_thickness,
            web_thickness,
        })
    }

    /// Create a rectangular section, dimensions in mm
    pub fn rectangular(width: f64, depth: f64) -> BeamResult<Self> {
        Self::build(SectionShape::Rectangular { width, depth })
    }

    /// Create a square hollow tube section, dimensions in mm
    pub fn square_tube(outer_width: f64, wall_thickness: f64) -> BeamResult<Self> {
        Self::build(SectionShape::SquareTube {
            outer_width,
            wall_thickness,
        })
    }

    /// Create a circular section, diameter in mm
    pub fn circular(diameter: f64) -> BeamResult<Self> {
        Self::build(SectionShape::Circular { diameter })
    }

    /// Elastic section modulus I / (h/2) in m³
    pub fn section_modulus(&self) -> f64 {
        self.inertia / (self.height / 2.0)
    }

    /// Radius of gyration in m
    pub fn radius_of_gyration(&self) -> f64 {
        (self.inertia / self.a).sqrt()
    }
}

fn require_positive(what: &str, value: f64) -> BeamResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BeamError::InvalidSection(format!(
            "{what} must be positive, got {value} mm"
        )))
    }
}
