//! Concentrated loads and their editor rows

use serde::{Deserialize, Serialize};

/// Editor row describing a concentrated load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointLoadRow {
    /// Row identifier shown in the editor
    pub id: String,
    /// Load magnitude in kN
    pub magnitude: f64,
    /// Position along the beam as a fraction of its length
    pub position: f64,
    /// Disabled rows are ignored by the assembler
    pub enabled: bool,
}

impl PointLoadRow {
    /// Create an enabled row
    pub fn new(id: &str, magnitude: f64, position: f64) -> Self {
        Self {
            id: id.to_string(),
            magnitude,
            position,
            enabled: true,
        }
    }

    /// Mark the row disabled
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// A concentrated load ready for the solver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointLoad {
    /// Load magnitude in N
    pub magnitude: f64,
    /// Distance from the near end in m
    pub position: f64,
    /// Label carried over from the editor row
    pub label: String,
}

impl PointLoad {
    /// Create a new point load
    pub fn new(magnitude: f64, position: f64, label: &str) -> Self {
        Self {
            magnitude,
            position,
            label: label.to_string(),
        }
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            magnitude: self.magnitude * factor,
            position: self.position,
            label: self.label.clone(),
        }
    }
}

/// Convert editor rows into solver loads, kN → N.
///
/// Disabled rows and rows with zero magnitude are dropped. Positions are
/// clamped to [0, 1] before scaling by the beam length. Row order is kept
/// and labels are not deduplicated.
pub fn point_loads_from_rows(rows: &[PointLoadRow], length: f64) -> Vec<PointLoad> {
    let mut loads = Vec::with_capacity(rows.len());
    for row in rows {
        if !row.enabled {
            continue;
        }
        let magnitude = row.magnitude * 1e3;
        if magnitude == 0.0 {
            continue;
        }
        let position = row.position.clamp(0.0, 1.0) * length;
        loads.push(PointLoad::new(magnitude, position, &row.id));
    }
    loads
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_convert_to_newtons_and_meters() {
        let rows = vec![PointLoadRow::new("P1", 120.0, 0.65)];
        let loads = point_loads_from_rows(&rows, 8.0);
        assert_eq!(loads.len(), 1);
        assert_eq!(loads[0].magnitude, 120_000.0);
        assert!((loads[0].position - 5.2).abs() < 1e-12);
        assert_eq!(loads[0].label, "P1");
    }

    #[test]
    fn test_disabled_and_zero_rows_dropped() {
        let rows = vec![
            PointLoadRow::new("P1", 100.0, 0.5).disabled(),
            PointLoadRow::new("P2", 0.0, 0.5),
            PointLoadRow::new("P3", 50.0, 0.25),
        ];
        let loads = point_loads_from_rows(&rows, 4.0);
        assert_eq!(loads.len(), 1);
        assert_eq!(loads[0].label, "P3");
    }

    #[test]
    fn test_positions_clamped_to_span() {
        let rows = vec![
            PointLoadRow::new("P1", 10.0, -0.5),
            PointLoadRow::new("P2", 10.0, 1.5),
        ];
        let loads = point_loads_from_rows(&rows, 6.0);
        assert_eq!(loads[0].position, 0.0);
        assert_eq!(loads[1].position, 6.0);
    }

    #[test]
    fn test_row_order_preserved() {
        let rows = vec![
            PointLoadRow::new("B", 10.0, 0.9),
            PointLoadRow::new("A", 10.0, 0.1),
        ];
        let loads = point_loads_from_rows(&rows, 1.0);
        assert_eq!(loads[0].label, "B");
        assert_eq!(loads[1].label, "A");
    }

    #[test]
    fn test_scaled_keeps_position() {
        let load = PointLoad::new(1000.0, 2.0, "P");
        let scaled = load.scaled(1.5);
        assert_eq!(scaled.magnitude, 1500.0);
        assert_eq!(scaled.position, 2.0);
    }
}
