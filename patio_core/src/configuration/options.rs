//! Configuration Options
//!
//! Closed option sets for every enumerated configuration field. Each option
//! serializes with the catalog code used by the shop front end, and parsing
//! an unknown code is an error rather than a fallback to some default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Frame Colour
// ============================================================================

/// Powder-coated frame finish (fine structure RAL colours)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FrameColor {
    /// RAL 7016 anthracite grey (best seller)
    #[serde(rename = "RAL7016st")]
    Anthracite,
    /// RAL 9007 grey aluminium
    #[serde(rename = "RAL9007st")]
    GreyAluminium,
    /// RAL 9005 jet black
    #[serde(rename = "RAL9005st")]
    Black,
    /// RAL 9010 pure white
    #[serde(rename = "RAL9010st")]
    PureWhite,
    /// RAL 7035 silver grey
    #[serde(rename = "RAL7035st")]
    SilverGrey,
    /// RAL 7024 medium grey
    #[default]
    #[serde(rename = "RAL7024st")]
    MediumGrey,
}

impl FrameColor {
    /// All finishes for UI selection
    pub const ALL: [FrameColor; 6] = [
        FrameColor::Anthracite,
        FrameColor::GreyAluminium,
        FrameColor::Black,
        FrameColor::PureWhite,
        FrameColor::SilverGrey,
        FrameColor::MediumGrey,
    ];

    /// Catalog code (e.g., "RAL7016st")
    pub fn code(&self) -> &'static str {
        match self {
            FrameColor::Anthracite => "RAL7016st",
            FrameColor::GreyAluminium => "RAL9007st",
            FrameColor::Black => "RAL9005st",
            FrameColor::PureWhite => "RAL9010st",
            FrameColor::SilverGrey => "RAL7035st",
            FrameColor::MediumGrey => "RAL7024st",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FrameColor::Anthracite => "RAL 7016 Anthracite Grey",
            FrameColor::GreyAluminium => "RAL 9007 Grey Aluminium",
            FrameColor::Black => "RAL 9005 Black",
            FrameColor::PureWhite => "RAL 9010 Pure White",
            FrameColor::SilverGrey => "RAL 7035 Silver Grey",
            FrameColor::MediumGrey => "RAL 7024 Medium Grey",
        }
    }

    /// Render colour hint for the frame members
    pub fn hex(&self) -> &'static str {
        match self {
            FrameColor::Anthracite => "#383e42",
            FrameColor::GreyAluminium => "#8f8f8f",
            FrameColor::Black => "#0a0a0a",
            FrameColor::PureWhite => "#f8f8f8",
            FrameColor::SilverGrey => "#c0c0c0",
            FrameColor::MediumGrey => "#545454",
        }
    }
}

impl FromStr for FrameColor {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let normalized = s.to_uppercase().replace([' ', '-', '_'], "");
        let normalized = normalized.trim_end_matches("ST");
        match normalized {
            "RAL7016" => Ok(FrameColor::Anthracite),
            "RAL9007" => Ok(FrameColor::GreyAluminium),
            "RAL9005" => Ok(FrameColor::Black),
            "RAL9010" => Ok(FrameColor::PureWhite),
            "RAL7035" => Ok(FrameColor::SilverGrey),
            "RAL7024" => Ok(FrameColor::MediumGrey),
            _ => Err(CalcError::unknown_option("frame_color", s)),
        }
    }
}

// ============================================================================
// Mount Type
// ============================================================================

/// How the back (gutter) edge is carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MountType {
    /// Back edge fixed to a house facade
    #[default]
    Wall,
    /// Back edge carried by its own row of posts
    Freestanding,
}

impl MountType {
    pub const ALL: [MountType; 2] = [MountType::Wall, MountType::Freestanding];

    pub fn code(&self) -> &'static str {
        match self {
            MountType::Wall => "wall",
            MountType::Freestanding => "freestanding",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MountType::Wall => "Wall mounted",
            MountType::Freestanding => "Freestanding",
        }
    }
}

impl FromStr for MountType {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "wall" | "wall-mount" => Ok(MountType::Wall),
            "freestanding" | "free-standing" => Ok(MountType::Freestanding),
            _ => Err(CalcError::unknown_option("mount_type", s)),
        }
    }
}

// ============================================================================
// Post Length
// ============================================================================

/// Stock length of the gutter-side posts (111x111 mm profile)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PostLength {
    /// 2500 mm (included)
    #[default]
    Mm2500,
    /// 3000 mm
    Mm3000,
    /// 3500 mm
    Mm3500,
}

impl PostLength {
    pub const ALL: [PostLength; 3] = [PostLength::Mm2500, PostLength::Mm3000, PostLength::Mm3500];

    /// Post length in millimetres
    pub fn millimeters(&self) -> u32 {
        match self {
            PostLength::Mm2500 => 2500,
            PostLength::Mm3000 => 3000,
            PostLength::Mm3500 => 3500,
        }
    }

    /// Catalog code, the length as a decimal string
    pub fn code(&self) -> &'static str {
        match self {
            PostLength::Mm2500 => "2500",
            PostLength::Mm3000 => "3000",
            PostLength::Mm3500 => "3500",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PostLength::Mm2500 => "2500 mm",
            PostLength::Mm3000 => "3000 mm",
            PostLength::Mm3500 => "3500 mm",
        }
    }
}

impl TryFrom<u32> for PostLength {
    type Error = CalcError;

    fn try_from(mm: u32) -> CalcResult<Self> {
        match mm {
            2500 => Ok(PostLength::Mm2500),
            3000 => Ok(PostLength::Mm3000),
            3500 => Ok(PostLength::Mm3500),
            _ => Err(CalcError::unknown_option("post_length", mm.to_string())),
        }
    }
}

impl FromStr for PostLength {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let mm = s.trim().trim_end_matches("mm").trim_end();
        let mm: u32 = mm.parse().map_err(|_| CalcError::unknown_option("post_length", s))?;
        PostLength::try_from(mm)
    }
}

impl From<PostLength> for u32 {
    fn from(length: PostLength) -> Self {
        length.millimeters()
    }
}

// ============================================================================
// Post Mounting
// ============================================================================

/// Hardware used to fix the posts to the ground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PostMounting {
    /// Aluminium L profile (included)
    #[default]
    #[serde(rename = "alu-l")]
    AluL,
    /// Aluminium U profile, set of 3
    #[serde(rename = "alu-u-3")]
    AluU3,
    /// Aluminium U profile, set of 6
    #[serde(rename = "alu-u-6")]
    AluU6,
    /// Galvanized steel post base, set of 3
    #[serde(rename = "steel-3")]
    Steel3,
    /// Galvanized steel post base, set of 6
    #[serde(rename = "steel-6")]
    Steel6,
}

impl PostMounting {
    pub const ALL: [PostMounting; 5] = [
        PostMounting::AluL,
        PostMounting::AluU3,
        PostMounting::AluU6,
        PostMounting::Steel3,
        PostMounting::Steel6,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PostMounting::AluL => "alu-l",
            PostMounting::AluU3 => "alu-u-3",
            PostMounting::AluU6 => "alu-u-6",
            PostMounting::Steel3 => "steel-3",
            PostMounting::Steel6 => "steel-6",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PostMounting::AluL => "Aluminium L profile",
            PostMounting::AluU3 => "Aluminium U profile (set of 3)",
            PostMounting::AluU6 => "Aluminium U profile (set of 6)",
            PostMounting::Steel3 => "Galvanized steel post base (set of 3)",
            PostMounting::Steel6 => "Galvanized steel post base (set of 6)",
        }
    }
}

impl FromStr for PostMounting {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        PostMounting::ALL
            .into_iter()
            .find(|m| m.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::unknown_option("post_mounting", s))
    }
}

// ============================================================================
// Roof Slope
// ============================================================================

/// Roof pitch in whole degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RoofSlope {
    Deg5,
    Deg6,
    Deg7,
    /// Recommended for polycarbonate coverings
    #[default]
    Deg8,
    Deg9,
    Deg10,
}

impl RoofSlope {
    pub const ALL: [RoofSlope; 6] = [
        RoofSlope::Deg5,
        RoofSlope::Deg6,
        RoofSlope::Deg7,
        RoofSlope::Deg8,
        RoofSlope::Deg9,
        RoofSlope::Deg10,
    ];

    /// Slope in whole degrees
    pub fn degrees(&self) -> u32 {
        match self {
            RoofSlope::Deg5 => 5,
            RoofSlope::Deg6 => 6,
            RoofSlope::Deg7 => 7,
            RoofSlope::Deg8 => 8,
            RoofSlope::Deg9 => 9,
            RoofSlope::Deg10 => 10,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RoofSlope::Deg5 => "5",
            RoofSlope::Deg6 => "6",
            RoofSlope::Deg7 => "7",
            RoofSlope::Deg8 => "8",
            RoofSlope::Deg9 => "9",
            RoofSlope::Deg10 => "10",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RoofSlope::Deg5 => "5 degrees",
            RoofSlope::Deg6 => "6 degrees",
            RoofSlope::Deg7 => "7 degrees",
            RoofSlope::Deg8 => "8 degrees (recommended)",
            RoofSlope::Deg9 => "9 degrees",
            RoofSlope::Deg10 => "10 degrees",
        }
    }

    /// Fall in millimetres per metre of run
    pub fn fall_per_meter_mm(&self) -> f64 {
        1000.0 * f64::from(self.degrees()).to_radians().tan()
    }
}

impl TryFrom<u32> for RoofSlope {
    type Error = CalcError;

    fn try_from(degrees: u32) -> CalcResult<Self> {
        RoofSlope::ALL
            .into_iter()
            .find(|s| s.degrees() == degrees)
            .ok_or_else(|| CalcError::unknown_option("roof_slope", degrees.to_string()))
    }
}

impl FromStr for RoofSlope {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let degrees = s.trim().trim_end_matches('°');
        let degrees: u32 = degrees.parse().map_err(|_| CalcError::unknown_option("roof_slope", s))?;
        RoofSlope::try_from(degrees)
    }
}

impl From<RoofSlope> for u32 {
    fn from(slope: RoofSlope) -> Self {
        slope.degrees()
    }
}

// ============================================================================
// Delivery Option
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryOption {
    /// Kit delivered with the DIY mounting set
    WithMountingSet,
    /// Kit only
    #[default]
    WithoutMountingSet,
}

impl DeliveryOption {
    pub const ALL: [DeliveryOption; 2] = [DeliveryOption::WithMountingSet, DeliveryOption::WithoutMountingSet];

    pub fn code(&self) -> &'static str {
        match self {
            DeliveryOption::WithMountingSet => "with-mounting-set",
            DeliveryOption::WithoutMountingSet => "without-mounting-set",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryOption::WithMountingSet => "Kit with mounting set",
            DeliveryOption::WithoutMountingSet => "Kit without mounting set",
        }
    }
}

impl FromStr for DeliveryOption {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        DeliveryOption::ALL
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::unknown_option("delivery_option", s))
    }
}

// ============================================================================
// Roof Covering
// ============================================================================

/// Covering family, which also governs the maximum depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoveringFamily {
    /// 16 mm multiwall polycarbonate sheets
    Polycarbonate,
    /// VSG 44.2 laminated safety glass
    Glass,
}

impl CoveringFamily {
    /// Maximum order depth in millimetres for this family
    pub fn max_depth_mm(&self) -> f64 {
        match self {
            CoveringFamily::Polycarbonate => 3500.0,
            CoveringFamily::Glass => 3000.0,
        }
    }
}

/// Roof infill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoofCovering {
    /// 16 mm polycarbonate, opal (milky)
    #[serde(rename = "polycarbonat-opal")]
    PolycarbonateOpal,
    /// 16 mm polycarbonate, clear
    #[default]
    #[serde(rename = "polycarbonat-clear")]
    PolycarbonateClear,
    /// 16 mm polycarbonate, reflex pearl heat block
    #[serde(rename = "polycarbonat-reflex-pearl")]
    PolycarbonateReflexPearl,
    /// VSG 44.2 clear, 8 fields
    #[serde(rename = "vsg-clear")]
    VsgClear,
    /// VSG 44.2 matt, 8 fields
    #[serde(rename = "vsg-matt")]
    VsgMatt,
}

impl RoofCovering {
    pub const ALL: [RoofCovering; 5] = [
        RoofCovering::PolycarbonateOpal,
        RoofCovering::PolycarbonateClear,
        RoofCovering::PolycarbonateReflexPearl,
        RoofCovering::VsgClear,
        RoofCovering::VsgMatt,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            RoofCovering::PolycarbonateOpal => "polycarbonat-opal",
            RoofCovering::PolycarbonateClear => "polycarbonat-clear",
            RoofCovering::PolycarbonateReflexPearl => "polycarbonat-reflex-pearl",
            RoofCovering::VsgClear => "vsg-clear",
            RoofCovering::VsgMatt => "vsg-matt",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RoofCovering::PolycarbonateOpal => "16 mm polycarbonate OPAL",
            RoofCovering::PolycarbonateClear => "16 mm polycarbonate CLEAR",
            RoofCovering::PolycarbonateReflexPearl => "16 mm polycarbonate REFLEX PEARL",
            RoofCovering::VsgClear => "VSG 44.2 CLEAR (8 fields)",
            RoofCovering::VsgMatt => "VSG 44.2 MATT (8 fields)",
        }
    }

    pub fn family(&self) -> CoveringFamily {
        match self {
            RoofCovering::PolycarbonateOpal
            | RoofCovering::PolycarbonateClear
            | RoofCovering::PolycarbonateReflexPearl => CoveringFamily::Polycarbonate,
            RoofCovering::VsgClear | RoofCovering::VsgMatt => CoveringFamily::Glass,
        }
    }

    /// Maximum order depth in millimetres with this covering
    pub fn max_depth_mm(&self) -> f64 {
        self.family().max_depth_mm()
    }
}

impl FromStr for RoofCovering {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        RoofCovering::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::unknown_option("roof_covering", s))
    }
}

// ============================================================================
// Side Panels
// ============================================================================

/// Glazed infill on one side of the structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SidePanelOption {
    #[default]
    #[serde(rename = "none")]
    None,
    /// Triangular wedge filling the slope gap (44.2 clear glass, 1 field)
    #[serde(rename = "wedge-clear", alias = "wedge")]
    Wedge,
    /// Full side wall from ground to roof (44.2 clear glass, 3 fields)
    #[serde(rename = "wall-clear", alias = "full-wall")]
    FullWall,
}

impl SidePanelOption {
    pub const ALL: [SidePanelOption; 3] = [SidePanelOption::None, SidePanelOption::Wedge, SidePanelOption::FullWall];

    pub fn code(&self) -> &'static str {
        match self {
            SidePanelOption::None => "none",
            SidePanelOption::Wedge => "wedge-clear",
            SidePanelOption::FullWall => "wall-clear",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SidePanelOption::None => "No side panel",
            SidePanelOption::Wedge => "Side wedge, clear glass",
            SidePanelOption::FullWall => "Side wall, clear glass",
        }
    }
}

impl FromStr for SidePanelOption {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(SidePanelOption::None),
            "wedge" | "wedge-clear" => Ok(SidePanelOption::Wedge),
            "full-wall" | "wall" | "wall-clear" => Ok(SidePanelOption::FullWall),
            _ => Err(CalcError::unknown_option("side_panel", s)),
        }
    }
}

macro_rules! impl_display {
    ($($type:ty),* $(,)?) => {
        $(
            impl fmt::Display for $type {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.display_name())
                }
            }
        )*
    };
}

impl_display!(
    FrameColor,
    MountType,
    PostLength,
    PostMounting,
    DeliveryOption,
    RoofCovering,
    SidePanelOption,
);

impl fmt::Display for RoofSlope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
