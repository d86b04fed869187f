//! # Geometry Engine
//!
//! Derives a complete [`StructureLayout`] from a [`Configuration`]: support
//! posts, main beams, rafters, the roof plane and optional side panels.
//!
//! ## Coordinate Convention
//!
//! - Scene units are metres; millimetre inputs go through [`crate::units`].
//! - y points up from the ground, +z points towards the open (high) front,
//!   the structure extends towards -x from its right edge.
//! - The right edge is pinned at [`Anchor::right_edge_x`]. Resizing the width
//!   only moves the left edge. The default anchor puts it at the scene offset
//!   [`constants::DEFAULT_RIGHT_EDGE_X`] (x = 5); `Anchor::right_edge(0.0)`
//!   gives the structure's local frame. With [`Anchor::back_edge_z`] set, the back
//!   edge is pinned as well and the depth grows towards +z; otherwise the
//!   depth is centred on z = 0.
//!
//! ## Heights
//!
//! ```text
//!   front_height = gutter_height + depth * tan(slope)     (open, high edge)
//!   back_height  = gutter_height                          (gutter, low edge)
//!   seat         = edge height + SEAT_FACTOR * POST_SIZE  (rafter resting surface)
//! ```
//!
//! Each support row carries a beam whose top surface is that row's seat, and
//! the posts of the row reach exactly up to it. The front row is seated at
//! the low (back edge) seat and the back row at the high (front edge) seat.
//!
//! ## Example
//!
//! ```rust
//! use patio_core::configuration::Configuration;
//! use patio_core::geometry::compute_layout;
//!
//! let layout = compute_layout(&Configuration::default());
//!
//! assert!(layout.front_height > layout.back_height);
//! assert_eq!(layout.post_supports.len(), 4);
//! assert_eq!(layout.rafters.len(), 9); // 5000 mm / 600 mm = 8 bays
//! ```

pub mod constants;
mod frame;
mod panels;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::configuration::{Configuration, MountType, SidePanelOption};
use crate::units::Meters;
use constants::{DEFAULT_RIGHT_EDGE_X, POST_SIZE, SEAT_FACTOR, WALL_SETBACK};

pub use frame::rafter_count;

/// The pinned edge(s) of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// x-coordinate of the right edge
    pub right_edge_x: f64,

    /// z-coordinate of the back edge, if it is pinned too
    pub back_edge_z: Option<f64>,
}

impl Default for Anchor {
    fn default() -> Self {
        Anchor {
            right_edge_x: DEFAULT_RIGHT_EDGE_X,
            back_edge_z: None,
        }
    }
}

impl Anchor {
    /// Pin only the right edge
    pub fn right_edge(x: f64) -> Self {
        Anchor {
            right_edge_x: x,
            back_edge_z: None,
        }
    }

    /// Additionally pin the back edge
    pub fn with_back_edge(mut self, z: f64) -> Self {
        self.back_edge_z = Some(z);
        self
    }
}

/// Which row of supports an element belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportRow {
    /// Open front edge
    Front,
    /// Gutter edge (posts or facade)
    Back,
}

/// Left or right side, seen from inside the structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// How a support point reaches the ground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupportKind {
    /// Standing post
    Post,
    /// Bracket fixed to the facade; the wall carries the load
    WallAnchor,
}

/// One of the four support points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSupport {
    pub row: SupportRow,
    pub side: Side,
    pub kind: SupportKind,
    /// Centre of the member
    pub position: Point3<f64>,
    /// Height from the ground to the top of the member
    pub height: f64,
    /// Square cross-section
    pub size: f64,
}

/// Main beam running along the width on top of a support row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    pub row: SupportRow,
    /// Centre of the beam
    pub position: Point3<f64>,
    /// Extent along x
    pub length: f64,
    /// Square cross-section
    pub thickness: f64,
    /// Height of the top surface
    pub top: f64,
}

/// Sloped member from the back seat to the front seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rafter {
    pub index: usize,
    /// Lateral position
    pub x: f64,
    pub midpoint: Point3<f64>,
    pub length: f64,
    /// Pitch about the x axis in radians
    pub angle: f64,
    pub width: f64,
    pub height: f64,
}

/// Surface appearance hint for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialHint {
    /// Hex colour, e.g. "#e8f4f8"
    pub color: String,
    pub opacity: f64,
    pub metalness: f64,
}

/// Roof infill plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofPanel {
    pub position: Point3<f64>,
    /// Rotation about the x axis in radians (plane normal starts along +z)
    pub rotation_x: f64,
    pub width: f64,
    pub depth: f64,
    pub material: MaterialHint,
}

/// Shape of a side panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SidePanelShape {
    /// Triangle filling the gap between the back height and the roof edge
    Wedge,
    /// Trapezoid from the ground up to both roof edge heights
    FullWall,
}

/// Vertical frame member at one end of a side panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameMember {
    pub row: SupportRow,
    /// Centre of the member
    pub position: Point3<f64>,
    pub height: f64,
    pub size: f64,
}

/// Glazed side infill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidePanel {
    pub side: Side,
    pub shape: SidePanelShape,
    /// Centre of the outline's bounding box
    pub position: Point3<f64>,
    /// Vertical extent of the glazing
    pub height: f64,
    /// Horizontal extent along z
    pub depth: f64,
    pub thickness: f64,
    /// Polygon in the panel plane, counter-clockwise seen from outside the right side
    pub outline: Vec<Point3<f64>>,
    pub material: MaterialHint,
    pub frame_members: [FrameMember; 2],
}

/// Complete derived layout of one configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureLayout {
    pub anchor: Anchor,
    /// Height of the open front edge
    pub front_height: f64,
    /// Height of the gutter edge
    pub back_height: f64,
    /// Front-left, front-right, back-left, back-right
    pub post_supports: Vec<PostSupport>,
    /// Front beam, back beam
    pub beams: Vec<Beam>,
    /// Left to right
    pub rafters: Vec<Rafter>,
    pub roof_panel: RoofPanel,
    /// Left panel first when both are present
    pub side_panels: Vec<SidePanel>,
    /// Hex colour of the frame finish
    pub frame_color: String,
}

impl StructureLayout {
    pub fn beam(&self, row: SupportRow) -> Option<&Beam> {
        self.beams.iter().find(|b| b.row == row)
    }

    pub fn side_panel(&self, side: Side) -> Option<&SidePanel> {
        self.side_panels.iter().find(|p| p.side == side)
    }

    /// Height difference between the two roof edges
    pub fn height_difference(&self) -> f64 {
        self.front_height - self.back_height
    }
}

/// Scalar outline of the structure every element is placed against.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Envelope {
    pub width: f64,
    pub depth: f64,
    pub right_x: f64,
    pub left_x: f64,
    /// z of the open front edge
    pub front_z: f64,
    /// z of the roof's back edge
    pub back_edge_z: f64,
    /// z of the back support row (the facade line for wall mounts)
    pub back_line_z: f64,
    pub front_height: f64,
    pub back_height: f64,
    pub mount_type: MountType,
}

impl Envelope {
    pub fn new(config: &Configuration, anchor: Anchor) -> Self {
        let width = Meters::from(config.width()).value();
        let depth = Meters::from(config.depth()).value();
        let gutter = Meters::from(config.gutter_height()).value();

        let height_difference = depth * config.slope().tan();

        let (back_edge_z, front_z) = match anchor.back_edge_z {
            Some(z) => (z, z + depth),
            None => (-depth / 2.0, depth / 2.0),
        };
        let back_line_z = match config.mount_type {
            MountType::Freestanding => back_edge_z,
            MountType::Wall => back_edge_z - WALL_SETBACK,
        };

        Envelope {
            width,
            depth,
            right_x: anchor.right_edge_x,
            left_x: anchor.right_edge_x - width,
            front_z,
            back_edge_z,
            back_line_z,
            front_height: gutter + height_difference,
            back_height: gutter,
            mount_type: config.mount_type,
        }
    }

    pub fn center_x(&self) -> f64 {
        self.right_x - self.width / 2.0
    }

    /// Rafter resting surface at the front edge
    pub fn front_seat(&self) -> f64 {
        self.front_height + POST_SIZE * SEAT_FACTOR
    }

    /// Rafter resting surface at the back edge
    pub fn back_seat(&self) -> f64 {
        self.back_height + POST_SIZE * SEAT_FACTOR
    }

    /// Top surface of a support row's beam.
    ///
    /// The front row is seated at the low seat and the back row at the high
    /// seat, so posts, beam and rafter ends meet without gaps.
    pub fn row_seat(&self, row: SupportRow) -> f64 {
        match row {
            SupportRow::Front => self.back_seat(),
            SupportRow::Back => self.front_seat(),
        }
    }

    pub fn row_z(&self, row: SupportRow) -> f64 {
        match row {
            SupportRow::Front => self.front_z,
            SupportRow::Back => self.back_line_z,
        }
    }

    /// Horizontal distance the rafters span
    pub fn run(&self) -> f64 {
        self.front_z - self.back_line_z
    }

    pub fn rise(&self) -> f64 {
        self.front_height - self.back_height
    }
}

/// Compute the layout with the default anchor (right edge pinned at x = 5).
pub fn compute_layout(config: &Configuration) -> StructureLayout {
    compute_layout_anchored(config, Anchor::default())
}

/// Compute the layout pinned to `anchor`.
///
/// Assumes `config` passed [`Configuration::validate`]; out-of-range input is
/// a caller bug and yields a geometrically meaningless (but finite) layout.
pub fn compute_layout_anchored(config: &Configuration, anchor: Anchor) -> StructureLayout {
    let env = Envelope::new(config, anchor);

    let side_panels = [
        (Side::Left, config.side_panel_left),
        (Side::Right, config.side_panel_right),
    ]
    .into_iter()
    .filter_map(|(side, option)| match option {
        SidePanelOption::None => None,
        SidePanelOption::Wedge => Some(panels::side_panel(&env, side, SidePanelShape::Wedge)),
        SidePanelOption::FullWall => Some(panels::side_panel(&env, side, SidePanelShape::FullWall)),
    })
    .collect();

    let layout = StructureLayout {
        anchor,
        front_height: env.front_height,
        back_height: env.back_height,
        post_supports: frame::post_supports(&env),
        beams: frame::beams(&env),
        rafters: frame::rafters(&env, config.width_mm),
        roof_panel: panels::roof_panel(&env, config.roof_covering),
        side_panels,
        frame_color: config.frame_color.hex().to_string(),
    };

    tracing::debug!(
        width_mm = config.width_mm,
        depth_mm = config.depth_mm,
        front_height = layout.front_height,
        back_height = layout.back_height,
        rafters = layout.rafters.len(),
        side_panels = layout.side_panels.len(),
        "computed structure layout"
    );

    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::{RoofCovering, RoofSlope};
    use approx::assert_relative_eq;

    #[test]
    fn test_heights_default() {
        let layout = compute_layout(&Configuration::default());
        // 2.2 m gutter + 3.0 m * tan(8 deg)
        assert_relative_eq!(layout.back_height, 2.2, epsilon = 1e-12);
        assert_relative_eq!(layout.front_height, 2.2 + 3.0 * 8.0_f64.to_radians().tan(), epsilon = 1e-12);
        assert!((layout.height_difference() - 0.4216).abs() < 1e-3);
    }

    #[test]
    fn test_front_always_higher() {
        for slope in RoofSlope::ALL {
            for mount in MountType::ALL {
                let config = Configuration::default()
                    .with_roof_slope(slope)
                    .with_mount_type(mount)
                    .with_size(1000.0, 1000.0)
                    .with_gutter_height(2000.0);
                let layout = compute_layout(&config);
                assert!(layout.front_height > layout.back_height, "{slope} {mount:?}");
            }
        }
    }

    #[test]
    fn test_right_edge_stays_pinned() {
        for width in [1000.0, 3000.0, 5000.0, 7060.0] {
            let layout = compute_layout(&Configuration::default().with_size(width, 3000.0));
            let right_posts: Vec<_> = layout.post_supports.iter().filter(|p| p.side == Side::Right).collect();
            assert_eq!(right_posts.len(), 2);
            for post in right_posts {
                assert_relative_eq!(post.position.x, DEFAULT_RIGHT_EDGE_X, epsilon = 1e-12);
            }
            let last = layout.rafters.last().unwrap();
            assert_relative_eq!(last.x, DEFAULT_RIGHT_EDGE_X, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_local_frame_anchor() {
        for width in [1000.0, 4000.0, 7060.0] {
            let config = Configuration::default().with_size(width, 3000.0);
            let local = compute_layout_anchored(&config, Anchor::right_edge(0.0));
            let scene = compute_layout(&config);

            for post in &local.post_supports {
                let expected = match post.side {
                    Side::Right => 0.0,
                    Side::Left => -width / 1000.0,
                };
                assert_relative_eq!(post.position.x, expected, epsilon = 1e-12);
            }
            // The default layout is the local one shifted by the scene offset
            for (a, b) in local.post_supports.iter().zip(&scene.post_supports) {
                assert_relative_eq!(b.position.x - a.position.x, DEFAULT_RIGHT_EDGE_X, epsilon = 1e-12);
                assert_relative_eq!(b.position.z, a.position.z, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_back_edge_pin() {
        let anchor = Anchor::right_edge(0.0).with_back_edge(-1.0);
        let config = Configuration::default().with_mount_type(MountType::Freestanding);
        for depth in [1500.0, 2500.0, 3500.0] {
            let layout = compute_layout_anchored(&config.clone().with_size(4000.0, depth), anchor);
            let back = layout.beam(SupportRow::Back).unwrap();
            let front = layout.beam(SupportRow::Front).unwrap();
            assert_relative_eq!(back.position.z, -1.0, epsilon = 1e-12);
            assert_relative_eq!(front.position.z, -1.0 + depth / 1000.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_default_anchor_centres_depth() {
        let config = Configuration::default().with_mount_type(MountType::Freestanding);
        let layout = compute_layout(&config);
        let front = layout.beam(SupportRow::Front).unwrap();
        let back = layout.beam(SupportRow::Back).unwrap();
        assert_relative_eq!(front.position.z, 1.5, epsilon = 1e-12);
        assert_relative_eq!(back.position.z, -1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_frame_color_has_no_geometric_effect() {
        use crate::configuration::FrameColor;

        let a = Configuration::default();
        let mut b = a.clone();
        b.frame_color = FrameColor::Black;

        let la = compute_layout(&a);
        let lb = compute_layout(&b);
        assert_eq!(la.rafters, lb.rafters);
        assert_eq!(la.post_supports, lb.post_supports);
        assert_ne!(la.frame_color, lb.frame_color);
    }

    #[test]
    fn test_covering_changes_only_material() {
        let a = compute_layout(&Configuration::default());
        let b = compute_layout(&Configuration::default().with_roof_covering(RoofCovering::VsgMatt));
        assert_eq!(a.roof_panel.position, b.roof_panel.position);
        assert_eq!(a.roof_panel.rotation_x, b.roof_panel.rotation_x);
        assert_ne!(a.roof_panel.material, b.roof_panel.material);
    }

    #[test]
    fn test_layout_serializes_points_as_arrays() {
        let layout = compute_layout(&Configuration::default());
        let json = serde_json::to_value(&layout).unwrap();
        let position = &json["roof_panel"]["position"];
        assert!(position.is_array());
        assert_eq!(position.as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_idempotent() {
        let config = Configuration::default().with_side_panels(SidePanelOption::Wedge, SidePanelOption::FullWall);
        assert_eq!(compute_layout(&config), compute_layout(&config));
    }
}
