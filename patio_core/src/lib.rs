//! # patio_core - Patio Roof Configurator Engines
//!
//! `patio_core` turns a customer's patio roof configuration into a 3D
//! structural layout and an itemized price. All inputs and outputs are
//! JSON-serializable so the engines can sit behind a renderer, a form UI or
//! an API without glue code.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from an immutable [`Configuration`] to a result
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No I/O**: File handling belongs to the front end
//!
//! ## Quick Start
//!
//! ```rust
//! use patio_core::{compute_layout, compute_price, Configuration};
//!
//! let config = Configuration::default().with_size(4000.0, 2500.0);
//! config.validate().unwrap();
//!
//! let layout = compute_layout(&config);
//! let price = compute_price(&config).unwrap();
//!
//! assert!(layout.front_height > layout.back_height);
//! assert_eq!(price.base_price, 911.19);
//! assert_eq!(price.total_price, 1131.19);
//! ```
//!
//! ## Modules
//!
//! - [`configuration`] - Configuration record, option catalog and validation
//! - [`geometry`] - Geometry engine (posts, beams, rafters, roof and side panels)
//! - [`pricing`] - Pricing engine, price grids and accessory catalog
//! - [`quote`] - Serializable quote combining both engine outputs
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod configuration;
pub mod errors;
pub mod geometry;
pub mod pricing;
pub mod quote;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use configuration::Configuration;
pub use errors::{CalcError, CalcResult};
pub use geometry::{compute_layout, compute_layout_anchored, Anchor, StructureLayout};
pub use pricing::{compute_price, compute_price_with, GridPolicy, PriceBreakdown};
pub use quote::{Quote, QuoteMetadata};
