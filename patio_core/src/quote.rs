//! # Quote Records
//!
//! A [`Quote`] bundles a validated configuration with both engine outputs
//! and identifying metadata. Quotes serialize to `.pcq` files as
//! human-readable JSON; reading and writing files is left to the caller.
//!
//! ## Structure
//!
//! ```text
//! Quote
//! ├── meta: QuoteMetadata (schema version, id, timestamp)
//! ├── configuration: Configuration
//! ├── layout: StructureLayout
//! └── price: PriceBreakdown
//! ```
//!
//! ## Example
//!
//! ```rust
//! use patio_core::configuration::Configuration;
//! use patio_core::quote::Quote;
//!
//! let quote = Quote::build(Configuration::default()).unwrap();
//! assert_eq!(quote.price.total_price, 1534.76);
//!
//! let json = serde_json::to_string_pretty(&quote).unwrap();
//! assert!(json.contains("\"schema_version\""));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::configuration::Configuration;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{compute_layout, StructureLayout};
use crate::pricing::{compute_price_with, GridPolicy, PriceBreakdown};

/// Current schema version for .pcq files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Identifying header of a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteMetadata {
    /// Schema version (for migration compatibility)
    pub schema_version: String,

    pub id: Uuid,

    /// When the quote was computed
    pub created: DateTime<Utc>,
}

/// A configuration together with its layout and price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub meta: QuoteMetadata,
    pub configuration: Configuration,
    pub layout: StructureLayout,
    pub price: PriceBreakdown,
}

impl Quote {
    /// Validate `configuration` and run both engines on the billing grid.
    pub fn build(configuration: Configuration) -> CalcResult<Quote> {
        Quote::build_with(configuration, GridPolicy::default())
    }

    /// Validate `configuration` and run both engines with `policy`.
    ///
    /// # Errors
    ///
    /// - [`CalcError::InvalidInput`] if a dimension is out of range
    /// - [`CalcError::PriceUnavailable`] if a price grid has no entry
    pub fn build_with(configuration: Configuration, policy: GridPolicy) -> CalcResult<Quote> {
        configuration.validate()?;

        let layout = compute_layout(&configuration);
        let price = compute_price_with(&configuration, policy)?;

        let meta = QuoteMetadata {
            schema_version: SCHEMA_VERSION.to_string(),
            id: Uuid::new_v4(),
            created: Utc::now(),
        };
        tracing::info!(id = %meta.id, total = price.total_price, "built quote");

        Ok(Quote {
            meta,
            configuration,
            layout,
            price,
        })
    }

    /// Check that the quote was written by a compatible schema.
    pub fn check_version(&self) -> CalcResult<()> {
        if is_compatible_version(&self.meta.schema_version) {
            Ok(())
        } else {
            Err(CalcError::VersionMismatch {
                file_version: self.meta.schema_version.clone(),
                expected_version: SCHEMA_VERSION.to_string(),
            })
        }
    }

    /// Recompute layout and price from the stored configuration.
    ///
    /// Returns a [`CalcError::Internal`] error if either stored result
    /// disagrees with a fresh computation.
    pub fn verify(&self) -> CalcResult<()> {
        let layout = compute_layout(&self.configuration);
        let price = compute_price_with(&self.configuration, self.price.grid_policy)?;

        if layout != self.layout {
            return Err(CalcError::Internal {
                message: format!("stored layout of quote {} is stale", self.meta.id),
            });
        }
        if price != self.price {
            return Err(CalcError::Internal {
                message: format!("stored price of quote {} is stale", self.meta.id),
            });
        }
        Ok(())
    }
}

/// Whether a stored schema version can be read by this build.
///
/// The major version must match. While the major version is 0, files from a
/// newer minor version are rejected as well.
pub fn is_compatible_version(file_version: &str) -> bool {
    let parse = |v: &str| v.split('.').map(|p| p.parse::<u32>().ok()).collect::<Option<Vec<_>>>();
    let (Some(file), Some(current)) = (parse(file_version), parse(SCHEMA_VERSION)) else {
        return false;
    };
    match (file.as_slice(), current.as_slice()) {
        ([file_major, ..], [0, ..]) if *file_major != 0 => false,
        ([0, file_minor, ..], [0, current_minor, ..]) => file_minor <= current_minor,
        ([file_major, ..], [current_major, ..]) => file_major == current_major,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::{MountType, RoofCovering, RoofSlope, SidePanelOption};

    #[test]
    fn test_quote_creation() {
        let quote = Quote::build(Configuration::default()).unwrap();
        assert_eq!(quote.meta.schema_version, SCHEMA_VERSION);
        assert_eq!(quote.price.base_price, 1204.76);
        assert_eq!(quote.layout.rafters.len(), 9);
        assert!(quote.verify().is_ok());
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        let config = Configuration::default()
            .with_roof_covering(RoofCovering::VsgMatt)
            .with_size(5000.0, 3500.0);
        let err = Quote::build(config).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_quote_serialization() {
        let config = Configuration::default().with_side_panels(SidePanelOption::Wedge, SidePanelOption::None);
        let quote = Quote::build_with(config, GridPolicy::Bilinear).unwrap();
        let json = serde_json::to_string_pretty(&quote).unwrap();

        assert!(json.contains("\"bilinear\""));
        assert!(json.contains("\"wedge-clear\""));

        // Roundtrip
        let roundtrip: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.id, quote.meta.id);
        assert_eq!(roundtrip.price, quote.price);
        assert!(roundtrip.verify().is_ok());
    }

    #[test]
    fn test_reloaded_quotes_stay_current() {
        // Off-grid sizes give layouts whose floats have long decimal expansions
        let widths = [1000.0, 1130.0, 2345.5, 3999.0, 5000.0, 7060.0];
        let depths = [1000.0, 1070.0, 2250.0, 2750.0, 3333.0];
        let gutters = [2000.0, 2222.0, 3000.0];

        for policy in GridPolicy::ALL {
            for slope in RoofSlope::ALL {
                for mount in MountType::ALL {
                    for &w in &widths {
                        for &d in &depths {
                            for &g in &gutters {
                                let config = Configuration::default()
                                    .with_mount_type(mount)
                                    .with_roof_slope(slope)
                                    .with_size(w, d)
                                    .with_gutter_height(g)
                                    .with_side_panels(SidePanelOption::Wedge, SidePanelOption::FullWall);
                                let quote = Quote::build_with(config, policy).unwrap();

                                let json = serde_json::to_string(&quote).unwrap();
                                let back: Quote = serde_json::from_str(&json).unwrap();
                                assert_eq!(back, quote, "{w} x {d} at {g}, {slope}, {mount}");
                                assert!(back.verify().is_ok(), "{w} x {d} at {g}, {slope}, {mount}");
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_version_check() {
        let mut quote = Quote::build(Configuration::default()).unwrap();
        assert!(quote.check_version().is_ok());

        quote.meta.schema_version = "9.9.9".to_string();
        let err = quote.check_version().unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");
    }

    #[test]
    fn test_version_compatibility() {
        assert!(is_compatible_version(SCHEMA_VERSION));
        assert!(is_compatible_version("0.1.5"));
        assert!(is_compatible_version("0.0.9"));

        // Different major
        assert!(!is_compatible_version("1.0.0"));
        // Newer minor while unstable
        assert!(!is_compatible_version("0.2.0"));
        assert!(!is_compatible_version("one.two"));
        assert!(!is_compatible_version(""));
    }

    #[test]
    fn test_tampered_price_detected() {
        let mut quote = Quote::build(Configuration::default()).unwrap();
        quote.price.total_price -= 100.0;
        assert!(quote.verify().is_err());
    }
}
