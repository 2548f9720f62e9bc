//! Internal shear and bending moment from the assembled loads
//!
//! The beam is statically determinate: the whole load set is balanced by a
//! single resultant reaction, and the internal fields follow from
//! integrating the load profile from the near end toward the far end.

use crate::loads::PointLoad;
use crate::math::{self, Vec as DVec};
use crate::mesh::Mesh;
use crate::results::InternalForceField;

/// Integrate the internal shear force and bending moment at every station.
///
/// The distributed load is taken piecewise linear between stations. A point
/// load sitting exactly on a station is counted at that station, so the
/// shear jumps by the load magnitude moving left to right across it.
pub fn shear_moment(
    mesh: &Mesh,
    q_profile: &DVec,
    point_loads: &[PointLoad],
) -> InternalForceField {
    let x = mesh.positions();
    let n = x.len();

    let dist_integral = math::cumulative_trapezoid(q_profile, x);
    let point_total: f64 = point_loads.iter().map(|p| p.magnitude).sum();
    let reaction = dist_integral[n - 1] + point_total;

    let mut point_cumulative = DVec::zeros(n);
    for load in point_loads {
        for i in 0..n {
            if x[i] >= load.position {
                point_cumulative[i] += load.magnitude;
            }
        }
    }

    let shear = DVec::from_fn(n, |i, _| reaction - dist_integral[i] - point_cumulative[i]);

    // Moment of the whole load set about the near end
    let weighted = DVec::from_fn(n, |i, _| q_profile[i] * x[i]);
    let moment_root = math::trapezoid(&weighted, x)
        + point_loads
            .iter()
            .map(|p| p.magnitude * p.position)
            .sum::<f64>();

    let shear_integral = math::cumulative_trapezoid(&shear, x);
    let moment = DVec::from_fn(n, |i, _| moment_root - shear_integral[i]);

    InternalForceField { shear, moment }
}
