//! Load definitions and profile assembly

mod distributed;
mod point_load;

pub use distributed::{segmented_profile, LoadSegment, UniformLoad};
pub use point_load::{point_loads_from_rows, PointLoad, PointLoadRow};

/// Seed rows for a segment load editor: one 20 kN/m segment over the
/// whole beam. Plain default data, not shared state.
pub fn default_segment_rows() -> Vec<LoadSegment> {
    vec![LoadSegment::new("S1", 20.0, 0.0, 1.0)]
}

/// Seed rows for a point load editor: one 120 kN load at 0.65 L.
pub fn default_point_load_rows() -> Vec<PointLoadRow> {
    vec![PointLoadRow::new("P1", 120.0, 0.65)]
}
