//! Rotation and deflection by double integration of the moment field

use crate::analysis::{AnalysisOptions, BeamTheory};
use crate::elements::{Material, Section};
use crate::math::{self, Vec as DVec};
use crate::mesh::Mesh;
use crate::results::{DeflectionField, InternalForceField};

/// Integrate curvature twice for rotation and deflection, with the
/// near-end reference θ(0) = 0, w(0) = 0.
///
/// Under Timoshenko theory the shear strain γ = κ·V/(G·A) is integrated
/// with the same boundary condition and added to the bending deflection;
/// the theory selector changes nothing else.
pub fn integrate_deflection(
    mesh: &Mesh,
    forces: &InternalForceField,
    material: &Material,
    section: &Section,
    options: &AnalysisOptions,
) -> DeflectionField {
    let x = mesh.positions();
    let n = x.len();

    let flexural_rigidity = material.e * section.inertia;
    let curvature = DVec::from_fn(n, |i, _| forces.moment[i] / flexural_rigidity);
    let rotation = math::cumulative_trapezoid(&curvature, x);
    let bending = math::cumulative_trapezoid(&rotation, x);

    match options.theory {
        BeamTheory::EulerBernoulli => DeflectionField {
            curvature,
            rotation,
            deflection: bending,
            shear_strain: DVec::zeros(n),
        },
        BeamTheory::Timoshenko => {
            let shear_rigidity = material.g * section.a;
            let shear_strain = DVec::from_fn(n, |i, _| {
                options.shear_correction * forces.shear[i] / shear_rigidity
            });
            let shear_deflection = math::cumulative_trapezoid(&shear_strain, x);
            DeflectionField {
                curvature,
                rotation,
                deflection: bending + shear_deflection,
                shear_strain,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::shear_moment;
    use crate::mesh::discretize;
    use approx::assert_relative_eq;

    fn steel_rect() -> (Material, Section) {
        (
            Material::steel(),
            Section::rectangular(120.0, 400.0).unwrap(),
        )
    }

    #[test]
    fn test_zero_moment_gives_zero_deflection() {
        let mesh = discretize(8.0, 101).unwrap();
        let forces = shear_moment(&mesh, &DVec::zeros(101), &[]);
        let (material, section) = steel_rect();
        let field = integrate_deflection(
            &mesh,
            &forces,
            &material,
            &section,
            &AnalysisOptions::default(),
        );
        assert!(field.curvature.iter().all(|&k| k == 0.0));
        assert!(field.rotation.iter().all(|&t| t == 0.0));
        assert!(field.deflection.iter().all(|&w| w == 0.0));
        assert!(field.shear_strain.iter().all(|&g| g == 0.0));
    }

    #[test]
    fn test_uniform_load_tip_deflection() {
        // Clamped-at-origin reference: w(L) = q L⁴ / (8 E I)
        let (length, q0) = (8.0, 40e3);
        let mesh = discretize(length, 801).unwrap();
        let q = DVec::from_element(801, q0);
        let forces = shear_moment(&mesh, &q, &[]);
        let (material, section) = steel_rect();
        let field = integrate_deflection(
            &mesh,
            &forces,
            &material,
            &section,
            &AnalysisOptions::default(),
        );

        let expected = q0 * length.powi(4) / (8.0 * material.e * section.inertia);
        assert_relative_eq!(field.deflection[800], expected, max_relative = 1e-4);
        // Tip rotation: θ(L) = q L³ / (6 E I)
        let expected_rotation = q0 * length.powi(3) / (6.0 * material.e * section.inertia);
        assert_relative_eq!(field.rotation[800], expected_rotation, max_relative = 1e-4);
    }

    #[test]
    fn test_point_load_tip_deflection() {
        // P at x = a on a station: w(L) = P a² (3L − a) / (6 E I)
        let (length, p, a) = (8.0, 120e3, 4.0);
        let mesh = discretize(length, 1601).unwrap();
        let forces = shear_moment(
            &mesh,
            &DVec::zeros(1601),
            &[crate::loads::PointLoad::new(p, a, "P1")],
        );
        let (material, section) = steel_rect();
        let field = integrate_deflection(
            &mesh,
            &forces,
            &material,
            &section,
            &AnalysisOptions::default(),
        );

        let expected = p * a * a * (3.0 * length - a) / (6.0 * material.e * section.inertia);
        assert_relative_eq!(field.deflection[1600], expected, max_relative = 1e-3);
    }

    #[test]
    fn test_timoshenko_adds_shear_deflection() {
        // Uniform load: w_shear(L) = κ q L² / (2 G A)
        let (length, q0) = (8.0, 40e3);
        let mesh = discretize(length, 801).unwrap();
        let q = DVec::from_element(801, q0);
        let forces = shear_moment(&mesh, &q, &[]);
        let (material, section) = steel_rect();

        let bending = integrate_deflection(
            &mesh,
            &forces,
            &material,
            &section,
            &AnalysisOptions::euler_bernoulli(),
        );
        let total = integrate_deflection(
            &mesh,
            &forces,
            &material,
            &section,
            &AnalysisOptions::timoshenko(),
        );

        let kappa = 1.2;
        let expected_shear = kappa * q0 * length.powi(2) / (2.0 * material.g * section.a);
        let shear_part = total.deflection[800] - bending.deflection[800];
        assert_relative_eq!(shear_part, expected_shear, max_relative = 1e-9);
        assert!(total.shear_strain[0] > 0.0);
    }

    #[test]
    fn test_zero_correction_matches_euler_bernoulli() {
        // κ = 0 removes the shear term entirely
        let mesh = discretize(8.0, 401).unwrap();
        let q = DVec::from_element(401, 25e3);
        let forces = shear_moment(&mesh, &q, &[]);
        let (material, section) = steel_rect();

        let eb = integrate_deflection(
            &mesh,
            &forces,
            &material,
            &section,
            &AnalysisOptions::euler_bernoulli(),
        );
        let timo = integrate_deflection(
            &mesh,
            &forces,
            &material,
            &section,
            &AnalysisOptions::timoshenko().with_shear_correction(0.0),
        );

        for i in 0..401 {
            assert_eq!(eb.deflection[i], timo.deflection[i]);
        }
    }
}
