//! Roof plane and glazed side panels.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Point3;

use super::constants::{
    FRAME_MEMBER_FRACTION, POST_SIZE, ROOF_LIFT_FACTOR, ROOF_OVERLAP_FACTOR, SIDE_PANEL_OFFSET, SIDE_PANEL_THICKNESS,
};
use super::{Envelope, FrameMember, MaterialHint, RoofPanel, Side, SidePanel, SidePanelShape, SupportRow};
use crate::configuration::RoofCovering;

/// Appearance of each roof covering
fn covering_material(covering: RoofCovering) -> MaterialHint {
    let (color, opacity, metalness) = match covering {
        RoofCovering::PolycarbonateOpal => ("#f0f0f0", 0.5, 0.1),
        RoofCovering::PolycarbonateClear => ("#e8f4f8", 0.15, 0.3),
        RoofCovering::PolycarbonateReflexPearl => ("#ffd700", 0.3, 0.1),
        RoofCovering::VsgClear => ("#e8f4f8", 0.1, 0.3),
        RoofCovering::VsgMatt => ("#d0d0d0", 0.4, 0.3),
    };
    MaterialHint {
        color: color.to_string(),
        opacity,
        metalness,
    }
}

fn side_glass_material() -> MaterialHint {
    MaterialHint {
        color: "#e8f4f8".to_string(),
        opacity: 0.15,
        metalness: 0.3,
    }
}

pub(crate) fn roof_panel(env: &Envelope, covering: RoofCovering) -> RoofPanel {
    let run = env.run();
    RoofPanel {
        position: Point3::new(
            env.center_x(),
            (env.front_height + env.back_height) / 2.0 + POST_SIZE * ROOF_LIFT_FACTOR,
            (env.front_z + env.back_line_z) / 2.0,
        ),
        rotation_x: env.rise().atan2(run) - FRAC_PI_2,
        width: env.width + POST_SIZE * 2.0,
        depth: run * ROOF_OVERLAP_FACTOR,
        material: covering_material(covering),
    }
}

pub(crate) fn side_panel(env: &Envelope, side: Side, shape: SidePanelShape) -> SidePanel {
    let x = match side {
        Side::Left => env.left_x - SIDE_PANEL_OFFSET,
        Side::Right => env.right_x + SIDE_PANEL_OFFSET,
    };
    let (back_z, front_z) = (env.back_edge_z, env.front_z);
    let (low, high) = (env.back_height, env.front_height);

    let outline = match shape {
        SidePanelShape::Wedge => vec![
            Point3::new(x, low, back_z),
            Point3::new(x, low, front_z),
            Point3::new(x, high, front_z),
        ],
        SidePanelShape::FullWall => vec![
            Point3::new(x, 0.0, back_z),
            Point3::new(x, 0.0, front_z),
            Point3::new(x, high, front_z),
            Point3::new(x, low, back_z),
        ],
    };

    let bottom = outline.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let top = outline.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    SidePanel {
        side,
        shape,
        position: Point3::new(x, (bottom + top) / 2.0, (back_z + front_z) / 2.0),
        height: top - bottom,
        depth: env.depth,
        thickness: SIDE_PANEL_THICKNESS,
        outline,
        material: side_glass_material(),
        frame_members: frame_members(env, x),
    }
}

/// Uprights at the front and back ends of a side panel.
fn frame_members(env: &Envelope, x: f64) -> [FrameMember; 2] {
    let inset = FRAME_MEMBER_FRACTION * env.rise();
    let member = |row: SupportRow, z: f64, height: f64| FrameMember {
        row,
        position: Point3::new(x, height / 2.0, z),
        height,
        size: POST_SIZE,
    };

    [
        member(SupportRow::Front, env.front_z, env.front_height - inset),
        member(SupportRow::Back, env.back_edge_z, env.back_height + inset),
    ]
}
