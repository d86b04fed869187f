//! Layout Constants
//!
//! Dimensions shared between the frame, roof and side-panel calculations.
//! All lengths are in scene units (metres).

/// Right edge x-coordinate the layout is pinned to unless told otherwise.
///
/// This is a scene offset, not the structure's own origin. In the
/// structure's local frame the right edge sits at x = 0 and the left edge at
/// x = -width; the viewer scene places that frame 5 m along +x. Use
/// [`Anchor::right_edge(0.0)`](super::Anchor::right_edge) for local
/// coordinates.
pub const DEFAULT_RIGHT_EDGE_X: f64 = 5.0;

/// Square post cross-section. Most other member sizes derive from it.
pub const POST_SIZE: f64 = 0.10;

/// Rafters rest this many post sizes above an edge height.
///
/// The resulting "seat" is the top surface of the beam under that edge.
pub const SEAT_FACTOR: f64 = 0.6;

/// Main beam cross-section in post sizes (square).
pub const BEAM_SIZE_FACTOR: f64 = 1.2;

/// Rafter cross-section in post sizes.
pub const RAFTER_WIDTH_FACTOR: f64 = 0.7;
pub const RAFTER_HEIGHT_FACTOR: f64 = 0.9;

/// Roof plane sits this many post sizes above the mean edge height.
pub const ROOF_LIFT_FACTOR: f64 = 1.2;

/// Roof plane overhang on the horizontal run.
pub const ROOF_OVERLAP_FACTOR: f64 = 1.05;

/// Distance from the back edge to the facade for wall-mounted roofs (150 mm).
pub const WALL_SETBACK: f64 = 0.15;

/// Target rafter spacing in millimetres.
pub const RAFTER_SPACING_MM: f64 = 600.0;

/// A roof never has fewer rafter bays than this.
pub const MIN_RAFTER_BAYS: usize = 5;

/// Gap between a side panel and the outer frame edge (50 mm).
pub const SIDE_PANEL_OFFSET: f64 = 0.05;

/// Glass side panel thickness including its frame (100 mm).
pub const SIDE_PANEL_THICKNESS: f64 = 0.10;

/// Side panel frame members are inset this fraction of the edge height
/// difference from their own edge towards the opposite edge.
pub const FRAME_MEMBER_FRACTION: f64 = 0.3;
