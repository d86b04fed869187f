//! # Configuration Model
//!
//! The immutable parameter record a customer edits. A new [`Configuration`]
//! is produced for every edit; both engines read it and never mutate it.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "frame_color": "RAL7024st",
//!   "width_mm": 5000.0,
//!   "depth_mm": 3000.0,
//!   "gutter_height_mm": 2200.0,
//!   "mount_type": "wall",
//!   "post_length": 2500,
//!   "post_mounting": "alu-l",
//!   "roof_slope": 8,
//!   "delivery_option": "without-mounting-set",
//!   "roof_covering": "polycarbonat-clear",
//!   "side_panel_left": "none",
//!   "side_panel_right": "none"
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use patio_core::configuration::{Configuration, MountType, SidePanelOption};
//!
//! let config = Configuration::default()
//!     .with_size(4200.0, 3000.0)
//!     .with_mount_type(MountType::Freestanding)
//!     .with_side_panels(SidePanelOption::Wedge, SidePanelOption::None);
//!
//! assert!(config.validate().is_ok());
//! ```

pub mod options;

pub use options::{
    CoveringFamily, DeliveryOption, FrameColor, MountType, PostLength, PostMounting, RoofCovering, RoofSlope,
    SidePanelOption,
};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Degrees, Millimeters, Radians};

/// Smallest orderable width (mm)
pub const MIN_WIDTH_MM: f64 = 1000.0;
/// Largest orderable width (mm)
pub const MAX_WIDTH_MM: f64 = 7060.0;
/// Smallest orderable depth (mm); the upper bound depends on the covering
pub const MIN_DEPTH_MM: f64 = 1000.0;
/// Lowest clear passage height on the gutter side (mm)
pub const MIN_GUTTER_HEIGHT_MM: f64 = 2000.0;
/// Highest clear passage height on the gutter side (mm)
pub const MAX_GUTTER_HEIGHT_MM: f64 = 3000.0;
/// Recommended clear passage height on the gutter side (mm)
pub const RECOMMENDED_GUTTER_HEIGHT_MM: f64 = 2200.0;

/// Complete patio roof configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Frame finish (cosmetic only)
    pub frame_color: FrameColor,

    /// Order width in millimetres
    pub width_mm: f64,

    /// Order depth (projection from the wall) in millimetres
    pub depth_mm: f64,

    /// Clear passage height on the gutter (back) side in millimetres
    pub gutter_height_mm: f64,

    /// Wall mounted or freestanding
    pub mount_type: MountType,

    /// Gutter-side post stock length (price only)
    pub post_length: PostLength,

    /// Post fixing hardware (price only)
    pub post_mounting: PostMounting,

    /// Roof pitch
    pub roof_slope: RoofSlope,

    /// Delivery option (price only)
    pub delivery_option: DeliveryOption,

    /// Roof infill
    pub roof_covering: RoofCovering,

    /// Left side infill (seen from inside)
    pub side_panel_left: SidePanelOption,

    /// Right side infill (seen from inside)
    pub side_panel_right: SidePanelOption,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            frame_color: FrameColor::MediumGrey,
            width_mm: 5000.0,
            depth_mm: 3000.0,
            gutter_height_mm: RECOMMENDED_GUTTER_HEIGHT_MM,
            mount_type: MountType::Wall,
            post_length: PostLength::Mm2500,
            post_mounting: PostMounting::AluL,
            roof_slope: RoofSlope::Deg8,
            delivery_option: DeliveryOption::WithoutMountingSet,
            roof_covering: RoofCovering::PolycarbonateClear,
            side_panel_left: SidePanelOption::None,
            side_panel_right: SidePanelOption::None,
        }
    }
}

impl Configuration {
    /// Validate every dimension against its orderable range.
    ///
    /// Option fields are closed enums and need no further checks.
    pub fn validate(&self) -> CalcResult<()> {
        check_range("width_mm", self.width_mm, MIN_WIDTH_MM, MAX_WIDTH_MM)?;

        let max_depth = self.max_depth_mm();
        if self.depth_mm.is_finite() && self.depth_mm > max_depth {
            return Err(CalcError::invalid_input(
                "depth_mm",
                self.depth_mm.to_string(),
                format!(
                    "Depth exceeds {} mm, the maximum for {}",
                    max_depth,
                    self.roof_covering.display_name()
                ),
            ));
        }
        check_range("depth_mm", self.depth_mm, MIN_DEPTH_MM, max_depth)?;

        check_range(
            "gutter_height_mm",
            self.gutter_height_mm,
            MIN_GUTTER_HEIGHT_MM,
            MAX_GUTTER_HEIGHT_MM,
        )?;
        Ok(())
    }

    /// Maximum orderable depth for the selected covering
    pub fn max_depth_mm(&self) -> f64 {
        self.roof_covering.max_depth_mm()
    }

    pub fn width(&self) -> Millimeters {
        Millimeters(self.width_mm)
    }

    pub fn depth(&self) -> Millimeters {
        Millimeters(self.depth_mm)
    }

    pub fn gutter_height(&self) -> Millimeters {
        Millimeters(self.gutter_height_mm)
    }

    /// Roof slope as an angle
    pub fn slope(&self) -> Radians {
        Degrees(f64::from(self.roof_slope.degrees())).into()
    }

    /// Return a copy with new order dimensions
    pub fn with_size(mut self, width_mm: f64, depth_mm: f64) -> Self {
        self.width_mm = width_mm;
        self.depth_mm = depth_mm;
        self
    }

    /// Return a copy with a new gutter-side passage height
    pub fn with_gutter_height(mut self, gutter_height_mm: f64) -> Self {
        self.gutter_height_mm = gutter_height_mm;
        self
    }

    pub fn with_mount_type(mut self, mount_type: MountType) -> Self {
        self.mount_type = mount_type;
        self
    }

    pub fn with_roof_slope(mut self, roof_slope: RoofSlope) -> Self {
        self.roof_slope = roof_slope;
        self
    }

    pub fn with_roof_covering(mut self, roof_covering: RoofCovering) -> Self {
        self.roof_covering = roof_covering;
        self
    }

    pub fn with_side_panels(mut self, left: SidePanelOption, right: SidePanelOption) -> Self {
        self.side_panel_left = left;
        self.side_panel_right = right;
        self
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    if value < min || value > max {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("Value must be between {} and {} mm", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Configuration::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width_mm, 5000.0);
        assert_eq!(config.depth_mm, 3000.0);
        assert_eq!(config.roof_slope, RoofSlope::Deg8);
    }

    #[test]
    fn test_width_bounds() {
        assert!(Configuration::default().with_size(1000.0, 3000.0).validate().is_ok());
        assert!(Configuration::default().with_size(7060.0, 3000.0).validate().is_ok());

        let err = Configuration::default().with_size(7061.0, 3000.0).validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "width_mm"));
    }

    #[test]
    fn test_depth_limit_depends_on_covering() {
        let poly = Configuration::default().with_size(5000.0, 3500.0);
        assert!(poly.validate().is_ok());

        let glass = poly.clone().with_roof_covering(RoofCovering::VsgClear);
        let err = glass.validate().unwrap_err();
        match err {
            CalcError::InvalidInput { field, reason, .. } => {
                assert_eq!(field, "depth_mm");
                assert!(reason.contains("3000"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_gutter_height_bounds() {
        assert!(Configuration::default().with_gutter_height(1999.0).validate().is_err());
        assert!(Configuration::default().with_gutter_height(3000.0).validate().is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Configuration::default().with_size(f64::NAN, 3000.0).validate().is_err());
        assert!(Configuration::default().with_size(5000.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_json_roundtrip_uses_catalog_codes() {
        let config = Configuration::default().with_side_panels(SidePanelOption::Wedge, SidePanelOption::FullWall);
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"RAL7024st\""));
        assert!(json.contains("\"wedge-clear\""));
        assert!(json.contains("\"wall-clear\""));
        assert!(json.contains("\"roof_slope\": 8"));

        let roundtrip: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(config, roundtrip);
    }

    #[test]
    fn test_unknown_covering_fails_loudly() {
        let json = serde_json::to_string(&Configuration::default())
            .unwrap()
            .replace("polycarbonat-clear", "polycarbonat-smoked");
        assert!(serde_json::from_str::<Configuration>(&json).is_err());
    }
}
