//! Accessory Catalog
//!
//! Optional add-ons priced independently of the roof itself. None of these
//! are part of [`PriceBreakdown::total_price`](super::PriceBreakdown).
//!
//! ## Example
//!
//! ```rust
//! use patio_core::configuration::Configuration;
//! use patio_core::pricing::catalog::{accessory_price, Accessory};
//!
//! let config = Configuration::default();
//! let glazing = accessory_price(Accessory::FrontGlazing, &config).unwrap();
//! assert_eq!(glazing, 1599.0);
//! ```

use serde::{Deserialize, Serialize};

use super::grid::round_cents;
use super::tables::{
    FRONT_GLAZING_AXIS, FRONT_GLAZING_PRICES, LIGHTING_MAX_METERS, LIGHTING_MIN_METERS, LIGHTING_PRICE_PER_METER,
    ROOF_AWNING_ZIP_PRICES, VERTICAL_AWNING_MIN_HEIGHT_MM, VERTICAL_AWNING_PRICE_MAX, VERTICAL_AWNING_PRICE_MIN,
    VERTICAL_AWNING_WIDTH_MAX_MM, VERTICAL_AWNING_WIDTH_MIN_MM,
};
use crate::configuration::Configuration;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Meters, Millimeters};

/// Add-ons available for a patio roof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accessory {
    /// On-roof or under-roof awning with ZIP side guides
    RoofAwningZip,
    /// Vertical awning across the open front
    VerticalAwningFront,
    /// Aluminium front wall with clear laminated glass
    FrontGlazing,
    /// LED strip along the gutter
    Lighting,
}

impl Accessory {
    pub const ALL: [Accessory; 4] = [
        Accessory::RoofAwningZip,
        Accessory::VerticalAwningFront,
        Accessory::FrontGlazing,
        Accessory::Lighting,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Accessory::RoofAwningZip => "Roof awning ZIP",
            Accessory::VerticalAwningFront => "Vertical front awning",
            Accessory::FrontGlazing => "Front glazing",
            Accessory::Lighting => "LED lighting",
        }
    }
}

/// Price of one accessory for a configuration, rounded to cents.
pub fn accessory_price(accessory: Accessory, config: &Configuration) -> CalcResult<f64> {
    let price = match accessory {
        Accessory::RoofAwningZip => roof_awning_zip_price(config.width_mm, config.depth_mm)?,
        Accessory::VerticalAwningFront => vertical_awning_front_price(config.width_mm, config.gutter_height_mm)?,
        Accessory::FrontGlazing => front_glazing_price(config.width_mm)?,
        Accessory::Lighting => lighting_price(config.width_mm),
    };
    Ok(round_cents(price))
}

/// ZIP awning, looked up on its own half-metre grid.
pub fn roof_awning_zip_price(width_mm: f64, depth_mm: f64) -> CalcResult<f64> {
    ROOF_AWNING_ZIP_PRICES.snap(width_mm, depth_mm)
}

/// Vertical front awning, linear in width between the reference sizes.
pub fn vertical_awning_front_price(width_mm: f64, gutter_height_mm: f64) -> CalcResult<f64> {
    if gutter_height_mm < VERTICAL_AWNING_MIN_HEIGHT_MM {
        return Err(CalcError::price_unavailable(
            Accessory::VerticalAwningFront.display_name(),
            format!(
                "gutter height {} mm is below the {} mm minimum",
                gutter_height_mm, VERTICAL_AWNING_MIN_HEIGHT_MM
            ),
        ));
    }

    let w = width_mm.clamp(VERTICAL_AWNING_WIDTH_MIN_MM, VERTICAL_AWNING_WIDTH_MAX_MM);
    let ratio = (w - VERTICAL_AWNING_WIDTH_MIN_MM) / (VERTICAL_AWNING_WIDTH_MAX_MM - VERTICAL_AWNING_WIDTH_MIN_MM);
    Ok(VERTICAL_AWNING_PRICE_MIN + (VERTICAL_AWNING_PRICE_MAX - VERTICAL_AWNING_PRICE_MIN) * ratio)
}

/// Front glazing, priced per started metre of width.
pub fn front_glazing_price(width_mm: f64) -> CalcResult<f64> {
    let bucket = FRONT_GLAZING_AXIS.bucket(width_mm);
    FRONT_GLAZING_PRICES
        .iter()
        .find(|(w, _)| *w == bucket)
        .map(|&(_, price)| price)
        .ok_or_else(|| {
            CalcError::price_unavailable(
                Accessory::FrontGlazing.display_name(),
                format!("no price for a width of {} mm", bucket),
            )
        })
}

/// LED lighting per running metre, between 3 and 7 metres.
pub fn lighting_price(width_mm: f64) -> f64 {
    let meters = Meters::from(Millimeters(width_mm))
        .value()
        .clamp(LIGHTING_MIN_METERS, LIGHTING_MAX_METERS);
    meters * LIGHTING_PRICE_PER_METER
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_roof_awning_rounds_to_half_metres() {
        assert_eq!(roof_awning_zip_price(3000.0, 2500.0).unwrap(), 1602.0);
        assert_eq!(roof_awning_zip_price(3100.0, 2600.0).unwrap(), 1790.0);
        assert_eq!(roof_awning_zip_price(7060.0, 1000.0).unwrap(), 2229.0);
    }

    #[test]
    fn test_vertical_awning_interpolates() {
        assert_relative_eq!(vertical_awning_front_price(3000.0, 2200.0).unwrap(), 1124.29);
        assert_relative_eq!(vertical_awning_front_price(5000.0, 2200.0).unwrap(), 1297.14, epsilon = 1e-9);
        assert_relative_eq!(
            vertical_awning_front_price(4000.0, 2200.0).unwrap(),
            (1124.29 + 1297.14) / 2.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(vertical_awning_front_price(7000.0, 2200.0).unwrap(), 1297.14, epsilon = 1e-9);
    }

    #[test]
    fn test_vertical_awning_needs_clearance() {
        let err = vertical_awning_front_price(4000.0, 1700.0).unwrap_err();
        assert_eq!(err.error_code(), "PRICE_UNAVAILABLE");
    }

    #[test]
    fn test_front_glazing_steps() {
        assert_eq!(front_glazing_price(500.0).unwrap(), 577.0);
        assert_eq!(front_glazing_price(4060.0).unwrap(), 1599.0);
        assert_eq!(front_glazing_price(7060.0).unwrap(), 1965.0);
    }

    #[test]
    fn test_lighting_clamped() {
        assert_relative_eq!(lighting_price(1000.0), 105.0);
        assert_relative_eq!(lighting_price(5000.0), 175.0, epsilon = 1e-9);
        assert_relative_eq!(lighting_price(7060.0), 245.0);
    }

    #[test]
    fn test_accessory_price_rounds() {
        let config = Configuration::default().with_size(4321.0, 3000.0);
        let price = accessory_price(Accessory::VerticalAwningFront, &config).unwrap();
        assert_eq!(price, round_cents(price));
        assert!(price > 1124.29 && price < 1297.14);
    }
}
