//! # Pricing Engine
//!
//! Maps a [`Configuration`] onto an itemized [`PriceBreakdown`] in euros.
//!
//! ## Method
//!
//! ```text
//!   base       = grid(width, depth)                       (frame without covering)
//!   covering   = grid(width, depth) | flat price          (per roof covering)
//!   surcharges = freestanding + post length + mounting + mounting set
//!              + side panels (per side) + custom size (once)
//!   total      = round_cents(sum of line items)
//! ```
//!
//! Grids are read according to a [`GridPolicy`]: snapped to the billing node
//! (the default) or bilinearly interpolated. The policy applies to every grid
//! lookup of one calculation and is recorded in the breakdown.
//!
//! ## Example
//!
//! ```rust
//! use patio_core::configuration::Configuration;
//! use patio_core::pricing::compute_price;
//!
//! let price = compute_price(&Configuration::default()).unwrap();
//! assert_eq!(price.base_price, 1204.76);
//! assert_eq!(price.custom_size_price, 0.0);
//! ```

pub mod catalog;
pub mod grid;
pub mod tables;

use serde::{Deserialize, Serialize};

use crate::configuration::{
    Configuration, DeliveryOption, MountType, PostLength, PostMounting, RoofCovering, SidePanelOption,
};
use crate::errors::CalcResult;

pub use grid::{round_cents, GridPolicy};

/// Itemized price of one configuration.
///
/// Every line item is rounded to cents; `total_price` is the rounded sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Frame without covering
    pub base_price: f64,
    pub roof_covering_price: f64,
    pub freestanding_price: f64,
    pub post_length_price: f64,
    pub post_mounting_price: f64,
    pub mounting_set_price: f64,
    pub side_panel_left_price: f64,
    pub side_panel_right_price: f64,
    /// Cutting surcharge for non-standard dimensions
    pub custom_size_price: f64,
    pub total_price: f64,
    /// How the grids were read
    pub grid_policy: GridPolicy,
}

impl PriceBreakdown {
    /// Label/amount pairs in display order
    pub fn line_items(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Base price", self.base_price),
            ("Roof covering", self.roof_covering_price),
            ("Freestanding", self.freestanding_price),
            ("Post length", self.post_length_price),
            ("Post mounting", self.post_mounting_price),
            ("Mounting set", self.mounting_set_price),
            ("Side panel left", self.side_panel_left_price),
            ("Side panel right", self.side_panel_right_price),
            ("Custom size", self.custom_size_price),
        ]
    }

    /// Unrounded sum of all line items
    pub fn items_sum(&self) -> f64 {
        self.line_items().iter().map(|(_, amount)| amount).sum()
    }
}

/// Price a configuration on the billing grid.
pub fn compute_price(config: &Configuration) -> CalcResult<PriceBreakdown> {
    compute_price_with(config, GridPolicy::default())
}

/// Price a configuration with an explicit grid policy.
///
/// # Errors
///
/// Returns [`CalcError::PriceUnavailable`](crate::errors::CalcError::PriceUnavailable)
/// if a grid has no entry for the requested node.
pub fn compute_price_with(config: &Configuration, policy: GridPolicy) -> CalcResult<PriceBreakdown> {
    let (w, d) = (config.width_mm, config.depth_mm);

    let mut breakdown = PriceBreakdown {
        base_price: round_cents(tables::BASE_PRICES.price(w, d, policy)?),
        roof_covering_price: round_cents(roof_covering_price(config.roof_covering, w, d, policy)?),
        freestanding_price: freestanding_price(config.mount_type),
        post_length_price: post_length_price(config.post_length),
        post_mounting_price: post_mounting_price(config.post_mounting),
        mounting_set_price: mounting_set_price(config.delivery_option),
        side_panel_left_price: side_panel_price(config.side_panel_left),
        side_panel_right_price: side_panel_price(config.side_panel_right),
        custom_size_price: if is_standard_size(w, d) { 0.0 } else { tables::CUSTOM_SIZE },
        total_price: 0.0,
        grid_policy: policy,
    };
    breakdown.total_price = round_cents(breakdown.items_sum());

    tracing::debug!(
        width_mm = w,
        depth_mm = d,
        policy = ?policy,
        total = breakdown.total_price,
        "computed price breakdown"
    );

    Ok(breakdown)
}

fn roof_covering_price(covering: RoofCovering, width_mm: f64, depth_mm: f64, policy: GridPolicy) -> CalcResult<f64> {
    match covering {
        RoofCovering::PolycarbonateOpal | RoofCovering::PolycarbonateClear => {
            tables::POLYCARBONATE_PRICES.price(width_mm, depth_mm, policy)
        }
        RoofCovering::PolycarbonateReflexPearl => Ok(tables::POLYCARBONATE_PRICES.price(width_mm, depth_mm, policy)?
            + tables::INFRARED_SURCHARGES.price(width_mm, depth_mm, policy)?),
        RoofCovering::VsgClear => Ok(tables::VSG_CLEAR_8_FIELDS),
        RoofCovering::VsgMatt => Ok(tables::VSG_MATT_8_FIELDS),
    }
}

fn freestanding_price(mount_type: MountType) -> f64 {
    match mount_type {
        MountType::Wall => 0.0,
        MountType::Freestanding => tables::FREESTANDING,
    }
}

fn post_length_price(post_length: PostLength) -> f64 {
    match post_length {
        PostLength::Mm2500 => 0.0,
        PostLength::Mm3000 => tables::POST_LENGTH_3000,
        PostLength::Mm3500 => tables::POST_LENGTH_3500,
    }
}

fn post_mounting_price(mounting: PostMounting) -> f64 {
    match mounting {
        PostMounting::AluL => 0.0,
        PostMounting::AluU3 => tables::POST_MOUNTING_ALU_U_3,
        PostMounting::AluU6 => tables::POST_MOUNTING_ALU_U_6,
        PostMounting::Steel3 => tables::POST_MOUNTING_STEEL_3,
        PostMounting::Steel6 => tables::POST_MOUNTING_STEEL_6,
    }
}

fn mounting_set_price(delivery: DeliveryOption) -> f64 {
    match delivery {
        DeliveryOption::WithoutMountingSet => 0.0,
        DeliveryOption::WithMountingSet => tables::MOUNTING_SET,
    }
}

fn side_panel_price(option: SidePanelOption) -> f64 {
    match option {
        SidePanelOption::None => 0.0,
        SidePanelOption::Wedge => tables::SIDE_PANEL_WEDGE,
        SidePanelOption::FullWall => tables::SIDE_PANEL_FULL_WALL,
    }
}

/// Whether both dimensions sit exactly on a standard size.
pub fn is_standard_size(width_mm: f64, depth_mm: f64) -> bool {
    let on = |sizes: &[u32], value: f64| sizes.iter().any(|&s| f64::from(s) == value);
    on(&tables::STANDARD_WIDTHS_MM, width_mm) && on(&tables::STANDARD_DEPTHS_MM, depth_mm)
}
