//! # Unit Types
//!
//! Type-safe wrappers for the lengths and angles used by the engines. They
//! stay lightweight (plain f64 newtypes) and serialize as bare numbers.
//!
//! ## Units
//!
//! - Order dimensions are entered in millimetres ([`Millimeters`]).
//! - Layout output is expressed in scene units, which are metres ([`Meters`]).
//! - Roof slopes are given in degrees ([`Degrees`]) and used as [`Radians`].
//!
//! The only millimetre-to-scene conversion lives in the `From<Millimeters>`
//! impl for [`Meters`], using [`MM_TO_SCENE`].
//!
//! ## Example
//!
//! ```rust
//! use patio_core::units::{Degrees, Meters, Millimeters, Radians};
//!
//! let depth: Meters = Millimeters(3000.0).into();
//! assert_eq!(depth.0, 3.0);
//!
//! let slope: Radians = Degrees(180.0).into();
//! assert!((slope.0 - std::f64::consts::PI).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Scene units per millimetre. The layout is expressed in metres.
pub const MM_TO_SCENE: f64 = 0.001;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres (scene units)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 * MM_TO_SCENE)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 / MM_TO_SCENE)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

impl Radians {
    /// Tangent of the angle (rise per unit of horizontal run)
    pub fn tan(self) -> f64 {
        self.0.tan()
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Degrees);
impl_arithmetic!(Radians);
