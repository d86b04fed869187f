//! Billing Grid
//!
//! Price tables are indexed by a discrete (width, depth) lattice. A
//! [`BillingAxis`] maps a freely chosen dimension onto that lattice, and a
//! [`PriceGrid`] resolves a price either at the snapped node or by bilinear
//! interpolation between the surrounding nodes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// How a dimension pair is resolved against a price grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridPolicy {
    /// Round each dimension up to its billing step, clamp, and read that node.
    #[default]
    Snap,
    /// Interpolate between the four nodes around the clamped, unrounded dimensions.
    Bilinear,
}

impl GridPolicy {
    pub const ALL: [GridPolicy; 2] = [GridPolicy::Snap, GridPolicy::Bilinear];

    pub fn display_name(&self) -> &'static str {
        match self {
            GridPolicy::Snap => "Billing grid (rounded up)",
            GridPolicy::Bilinear => "Bilinear interpolation",
        }
    }
}

/// Rounding rule for one billing dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillingAxis {
    /// Dimensions are rounded up to a multiple of this (mm)
    pub step_mm: f64,
    pub min_mm: f64,
    pub max_mm: f64,
}

impl BillingAxis {
    pub const fn new(step_mm: f64, min_mm: f64, max_mm: f64) -> Self {
        BillingAxis { step_mm, min_mm, max_mm }
    }

    /// Clamp without rounding
    pub fn clamp(&self, value_mm: f64) -> f64 {
        value_mm.clamp(self.min_mm, self.max_mm)
    }

    /// Round up to the next step, then clamp into range
    pub fn bucket(&self, value_mm: f64) -> u32 {
        let rounded = (value_mm / self.step_mm).ceil() * self.step_mm;
        self.clamp(rounded) as u32
    }
}

/// A (width, depth) price table.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceGrid {
    /// Item name used in error messages
    pub name: &'static str,
    pub width_axis: BillingAxis,
    pub depth_axis: BillingAxis,
    widths: Vec<u32>,
    depths: Vec<u32>,
    cells: BTreeMap<(u32, u32), f64>,
}

impl PriceGrid {
    /// Build a grid from rows of prices, one row per width.
    pub fn from_rows<const D: usize>(
        name: &'static str,
        width_axis: BillingAxis,
        depth_axis: BillingAxis,
        widths: &[u32],
        depths: &[u32; D],
        rows: &[[f64; D]],
    ) -> Self {
        let cells = widths
            .iter()
            .zip(rows)
            .flat_map(|(&w, row)| depths.iter().zip(row).map(move |(&d, &price)| ((w, d), price)))
            .collect();

        let mut widths = widths.to_vec();
        let mut depths = depths.to_vec();
        widths.sort_unstable();
        depths.sort_unstable();

        PriceGrid {
            name,
            width_axis,
            depth_axis,
            widths,
            depths,
            cells,
        }
    }

    /// Price at an exact grid node.
    pub fn get(&self, width_mm: u32, depth_mm: u32) -> CalcResult<f64> {
        self.cells.get(&(width_mm, depth_mm)).copied().ok_or_else(|| {
            CalcError::price_unavailable(
                self.name,
                format!("no price for {} x {} mm", width_mm, depth_mm),
            )
        })
    }

    /// Billing node for a dimension pair
    pub fn bucket(&self, width_mm: f64, depth_mm: f64) -> (u32, u32) {
        (self.width_axis.bucket(width_mm), self.depth_axis.bucket(depth_mm))
    }

    /// Price at the snapped billing node
    pub fn snap(&self, width_mm: f64, depth_mm: f64) -> CalcResult<f64> {
        let (w, d) = self.bucket(width_mm, depth_mm);
        self.get(w, d)
    }

    /// Bilinear interpolation over the nodes surrounding the clamped dimensions
    pub fn bilinear(&self, width_mm: f64, depth_mm: f64) -> CalcResult<f64> {
        let w = self.width_axis.clamp(width_mm);
        let d = self.depth_axis.clamp(depth_mm);

        let (w0, w1, tw) = bracket(&self.widths, w).ok_or_else(|| self.out_of_range(width_mm, depth_mm))?;
        let (d0, d1, td) = bracket(&self.depths, d).ok_or_else(|| self.out_of_range(width_mm, depth_mm))?;

        let p00 = self.get(w0, d0)?;
        let p01 = self.get(w0, d1)?;
        let p10 = self.get(w1, d0)?;
        let p11 = self.get(w1, d1)?;

        let near = p00 + (p01 - p00) * td;
        let far = p10 + (p11 - p10) * td;
        Ok(near + (far - near) * tw)
    }

    pub fn price(&self, width_mm: f64, depth_mm: f64, policy: GridPolicy) -> CalcResult<f64> {
        match policy {
            GridPolicy::Snap => self.snap(width_mm, depth_mm),
            GridPolicy::Bilinear => self.bilinear(width_mm, depth_mm),
        }
    }

    fn out_of_range(&self, width_mm: f64, depth_mm: f64) -> CalcError {
        CalcError::price_unavailable(
            self.name,
            format!("{} x {} mm is outside the price grid", width_mm, depth_mm),
        )
    }
}

/// Nearest nodes at or below and at or above `value`, with the fraction between them.
fn bracket(nodes: &[u32], value: f64) -> Option<(u32, u32, f64)> {
    let lower = *nodes.iter().rev().find(|&&n| f64::from(n) <= value)?;
    let upper = *nodes.iter().find(|&&n| f64::from(n) >= value)?;
    let t = if upper == lower {
        0.0
    } else {
        (value - f64::from(lower)) / f64::from(upper - lower)
    };
    Some((lower, upper, t))
}

const MICROS_PER_CENT: f64 = 1e6;

/// Round half away from zero to whole cents.
///
/// The amount is first settled to a millionth of a cent, so a decimal
/// midpoint such as 1.005 that is stored just below .5 still rounds up.
pub fn round_cents(amount: f64) -> f64 {
    let cents = (amount * 100.0 * MICROS_PER_CENT).round() / MICROS_PER_CENT;
    cents.round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const WIDTH: BillingAxis = BillingAxis::new(1000.0, 3000.0, 6000.0);
    const DEPTH: BillingAxis = BillingAxis::new(500.0, 2000.0, 5000.0);

    fn sample_grid() -> PriceGrid {
        PriceGrid::from_rows(
            "sample",
            BillingAxis::new(1000.0, 3000.0, 4000.0),
            BillingAxis::new(500.0, 2000.0, 2500.0),
            &[3000, 4000],
            &[2000, 2500],
            &[[100.0, 200.0], [300.0, 400.0]],
        )
    }

    #[test]
    fn test_width_bucket() {
        assert_eq!(WIDTH.bucket(1000.0), 3000);
        assert_eq!(WIDTH.bucket(3000.0), 3000);
        assert_eq!(WIDTH.bucket(3001.0), 4000);
        assert_eq!(WIDTH.bucket(5060.0), 6000);
        assert_eq!(WIDTH.bucket(7060.0), 6000);
    }

    #[test]
    fn test_depth_bucket() {
        assert_eq!(DEPTH.bucket(1000.0), 2000);
        assert_eq!(DEPTH.bucket(2250.0), 2500);
        assert_eq!(DEPTH.bucket(3000.0), 3000);
        assert_eq!(DEPTH.bucket(3450.0), 3500);
    }

    #[test]
    fn test_snap_lookup() {
        let grid = sample_grid();
        assert_eq!(grid.snap(3000.0, 2000.0).unwrap(), 100.0);
        assert_eq!(grid.snap(3200.0, 2100.0).unwrap(), 400.0);
    }

    #[test]
    fn test_bilinear_at_nodes_matches_snap() {
        let grid = sample_grid();
        for (w, d) in [(3000.0, 2000.0), (3000.0, 2500.0), (4000.0, 2000.0), (4000.0, 2500.0)] {
            assert_relative_eq!(grid.bilinear(w, d).unwrap(), grid.snap(w, d).unwrap());
        }
    }

    #[test]
    fn test_bilinear_midpoint() {
        let grid = sample_grid();
        assert_relative_eq!(grid.bilinear(3500.0, 2250.0).unwrap(), 250.0);
        assert_relative_eq!(grid.bilinear(3500.0, 2000.0).unwrap(), 200.0);
        // Clamped below the first node
        assert_relative_eq!(grid.bilinear(1000.0, 1000.0).unwrap(), 100.0);
    }

    #[test]
    fn test_missing_node_is_an_error() {
        let grid = PriceGrid::from_rows(
            "sparse",
            BillingAxis::new(1000.0, 3000.0, 5000.0),
            BillingAxis::new(500.0, 2000.0, 2000.0),
            &[3000, 5000],
            &[2000],
            &[[100.0], [300.0]],
        );
        let err = grid.snap(4000.0, 2000.0).unwrap_err();
        assert_eq!(err.error_code(), "PRICE_UNAVAILABLE");
        assert_relative_eq!(grid.bilinear(4000.0, 2000.0).unwrap(), 200.0);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(1204.76), 1204.76);
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(-0.125), -0.13);
        assert_eq!(round_cents(99.994), 99.99);
    }

    #[test]
    fn test_round_cents_decimal_midpoints() {
        assert_eq!(round_cents(1.005), 1.01);
        assert_eq!(round_cents(0.285), 0.29);
        assert_eq!(round_cents(-1.005), -1.01);
        assert_eq!(round_cents(1107.975), 1107.98);
        assert_eq!(round_cents((1011.19 + 1204.76) / 2.0), 1107.98);
        // Already rounded amounts are fixed points
        for amount in [0.01, 1.01, 297.0, 1107.98, 1534.76, 12345.67] {
            assert_eq!(round_cents(amount), amount);
        }
    }
}
