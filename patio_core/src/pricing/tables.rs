//! Price Tables
//!
//! Static reference prices in euros, excluding VAT. The grids are built once
//! on first use and are read-only for the lifetime of the process.

use once_cell::sync::Lazy;

use super::grid::{BillingAxis, PriceGrid};

// ============================================================================
// Roof Grids (base frame, polycarbonate, infrared surcharge)
// ============================================================================

/// Width billing: whole metres, rounded up, 3000-6000 mm
pub const ROOF_WIDTH_AXIS: BillingAxis = BillingAxis::new(1000.0, 3000.0, 6000.0);
/// Depth billing: half metres, rounded up, 2000-5000 mm
pub const ROOF_DEPTH_AXIS: BillingAxis = BillingAxis::new(500.0, 2000.0, 5000.0);

/// Widths without a custom-size surcharge (also the grid rows)
pub const STANDARD_WIDTHS_MM: [u32; 4] = [3000, 4000, 5000, 6000];
/// Depths without a custom-size surcharge (also the grid columns)
pub const STANDARD_DEPTHS_MM: [u32; 7] = [2000, 2500, 3000, 3500, 4000, 4500, 5000];

/// Frame without covering
const BASE_PRICE_ROWS: [[f64; 7]; 4] = [
    [682.05, 782.05, 882.05, 982.05, 1082.05, 1182.05, 1437.04],
    [811.19, 911.19, 1011.19, 1111.19, 1211.19, 1311.19, 1852.67],
    [1004.76, 1104.76, 1204.76, 1304.76, 1404.76, 1504.76, 2203.86],
    [1133.89, 1233.89, 1333.89, 1433.89, 1533.89, 1633.89, 2555.06],
];

/// 16 mm polycarbonate, clear or opal (980 mm sheets)
const POLYCARBONATE_ROWS: [[f64; 7]; 4] = [
    [132.0, 165.0, 198.0, 231.0, 264.0, 297.0, 330.0],
    [176.0, 220.0, 264.0, 308.0, 352.0, 396.0, 440.0],
    [220.0, 275.0, 330.0, 385.0, 440.0, 495.0, 550.0],
    [264.0, 330.0, 396.0, 462.0, 528.0, 594.0, 660.0],
];

/// Infrared heat-block surcharge for reflex pearl sheets
const INFRARED_SURCHARGE_ROWS: [[f64; 7]; 4] = [
    [42.0, 52.5, 63.0, 73.5, 84.0, 94.5, 105.0],
    [56.0, 70.0, 84.0, 98.0, 112.0, 126.0, 140.0],
    [70.0, 87.5, 105.0, 122.5, 140.0, 157.5, 175.0],
    [84.0, 105.0, 126.0, 147.0, 168.0, 189.0, 210.0],
];

fn roof_grid(name: &'static str, rows: &[[f64; 7]]) -> PriceGrid {
    PriceGrid::from_rows(
        name,
        ROOF_WIDTH_AXIS,
        ROOF_DEPTH_AXIS,
        &STANDARD_WIDTHS_MM,
        &STANDARD_DEPTHS_MM,
        rows,
    )
}

pub static BASE_PRICES: Lazy<PriceGrid> = Lazy::new(|| roof_grid("base frame", &BASE_PRICE_ROWS));

pub static POLYCARBONATE_PRICES: Lazy<PriceGrid> =
    Lazy::new(|| roof_grid("polycarbonate covering", &POLYCARBONATE_ROWS));

pub static INFRARED_SURCHARGES: Lazy<PriceGrid> =
    Lazy::new(|| roof_grid("infrared surcharge", &INFRARED_SURCHARGE_ROWS));

// ============================================================================
// Flat Prices
// ============================================================================

/// VSG 44.2 clear, 8 fields
pub const VSG_CLEAR_8_FIELDS: f64 = 1488.0;
/// VSG 44.2 matt, 8 fields
pub const VSG_MATT_8_FIELDS: f64 = 2117.0;

pub const FREESTANDING: f64 = 981.0;

pub const POST_LENGTH_3000: f64 = 90.0;
pub const POST_LENGTH_3500: f64 = 180.0;

pub const POST_MOUNTING_ALU_U_3: f64 = 66.0;
pub const POST_MOUNTING_ALU_U_6: f64 = 132.0;
pub const POST_MOUNTING_STEEL_3: f64 = 285.0;
pub const POST_MOUNTING_STEEL_6: f64 = 570.0;

/// DIY mounting set
pub const MOUNTING_SET: f64 = 105.0;

/// Side wedge with 44.2 clear glass (1 field)
pub const SIDE_PANEL_WEDGE: f64 = 1010.0;
/// Side wall with 44.2 clear glass (3 fields)
pub const SIDE_PANEL_FULL_WALL: f64 = 2542.0;

/// Cutting to a non-standard width or depth, charged once
pub const CUSTOM_SIZE: f64 = 100.0;

// ============================================================================
// Accessory Tables
// ============================================================================

/// Awning width billing: half metres, 3000-6000 mm
pub const AWNING_WIDTH_AXIS: BillingAxis = BillingAxis::new(500.0, 3000.0, 6000.0);
/// Awning depth billing: half metres, 2500-5000 mm
pub const AWNING_DEPTH_AXIS: BillingAxis = BillingAxis::new(500.0, 2500.0, 5000.0);

const AWNING_WIDTHS_MM: [u32; 7] = [3000, 3500, 4000, 4500, 5000, 5500, 6000];
const AWNING_DEPTHS_MM: [u32; 6] = [2500, 3000, 3500, 4000, 4500, 5000];

/// On-roof / under-roof ZIP awning
const ROOF_AWNING_ZIP_ROWS: [[f64; 6]; 7] = [
    [1602.0, 1673.0, 1746.0, 1834.0, 1908.0, 1979.0],
    [1710.0, 1790.0, 1873.0, 1970.0, 2053.0, 2133.0],
    [1810.0, 1900.0, 1991.0, 2097.0, 2189.0, 2278.0],
    [1902.0, 2000.0, 2101.0, 2216.0, 2317.0, 2416.0],
    [2002.0, 2110.0, 2220.0, 2344.0, 2454.0, 2595.0],
    [2112.0, 2229.0, 2348.0, 2481.0, 2600.0, 2717.0],
    [2229.0, 2355.0, 2483.0, 2626.0, 2754.0, 2879.0],
];

pub static ROOF_AWNING_ZIP_PRICES: Lazy<PriceGrid> = Lazy::new(|| {
    PriceGrid::from_rows(
        "roof awning ZIP",
        AWNING_WIDTH_AXIS,
        AWNING_DEPTH_AXIS,
        &AWNING_WIDTHS_MM,
        &AWNING_DEPTHS_MM,
        &ROOF_AWNING_ZIP_ROWS,
    )
});

/// Vertical front awning reference row (2500 mm drop)
pub const VERTICAL_AWNING_WIDTH_MIN_MM: f64 = 3000.0;
pub const VERTICAL_AWNING_WIDTH_MAX_MM: f64 = 5000.0;
pub const VERTICAL_AWNING_PRICE_MIN: f64 = 1124.29;
pub const VERTICAL_AWNING_PRICE_MAX: f64 = 1297.14;
/// Below this gutter height a vertical awning cannot be fitted
pub const VERTICAL_AWNING_MIN_HEIGHT_MM: f64 = 1800.0;

/// Front glazing billing: whole metres, 1000-7000 mm
pub const FRONT_GLAZING_AXIS: BillingAxis = BillingAxis::new(1000.0, 1000.0, 7000.0);

/// Aluminium front wall, 44.2 VSG clear, 2200/2400 mm high
pub const FRONT_GLAZING_PRICES: [(u32, f64); 7] = [
    (1000, 577.0),
    (2000, 820.0),
    (3000, 1076.0),
    (4000, 1332.0),
    (5000, 1599.0),
    (6000, 1745.0),
    (7000, 1965.0),
];

/// LED lighting per running metre of gutter
pub const LIGHTING_PRICE_PER_METER: f64 = 35.0;
pub const LIGHTING_MIN_METERS: f64 = 3.0;
pub const LIGHTING_MAX_METERS: f64 = 7.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roof_grids_are_complete() {
        for grid in [&*BASE_PRICES, &*POLYCARBONATE_PRICES, &*INFRARED_SURCHARGES] {
            for w in STANDARD_WIDTHS_MM {
                for d in STANDARD_DEPTHS_MM {
                    assert!(grid.get(w, d).is_ok(), "{} missing {}x{}", grid.name, w, d);
                }
            }
        }
    }

    #[test]
    fn test_known_nodes() {
        assert_eq!(BASE_PRICES.get(5000, 3000).unwrap(), 1204.76);
        assert_eq!(BASE_PRICES.get(3000, 5000).unwrap(), 1437.04);
        assert_eq!(POLYCARBONATE_PRICES.get(6000, 2500).unwrap(), 330.0);
        assert_eq!(INFRARED_SURCHARGES.get(5000, 4500).unwrap(), 157.5);
        assert_eq!(ROOF_AWNING_ZIP_PRICES.get(5500, 4000).unwrap(), 2481.0);
    }
}
