//! Support posts, main beams and rafters.

use nalgebra::Point3;

use super::constants::{
    BEAM_SIZE_FACTOR, MIN_RAFTER_BAYS, POST_SIZE, RAFTER_HEIGHT_FACTOR, RAFTER_SPACING_MM, RAFTER_WIDTH_FACTOR,
};
use super::{Beam, Envelope, PostSupport, Rafter, Side, SupportKind, SupportRow};
use crate::configuration::MountType;

/// Number of rafter bays for a width: one per 600 mm, at least five.
///
/// The layout carries one more rafter than bays.
pub fn rafter_count(width_mm: f64) -> usize {
    let bays = (width_mm / RAFTER_SPACING_MM).floor();
    if bays.is_finite() && bays > MIN_RAFTER_BAYS as f64 {
        bays as usize
    } else {
        MIN_RAFTER_BAYS
    }
}

pub(crate) fn post_supports(env: &Envelope) -> Vec<PostSupport> {
    let back_kind = match env.mount_type {
        MountType::Freestanding => SupportKind::Post,
        MountType::Wall => SupportKind::WallAnchor,
    };

    [
        (SupportRow::Front, Side::Left, SupportKind::Post),
        (SupportRow::Front, Side::Right, SupportKind::Post),
        (SupportRow::Back, Side::Left, back_kind),
        (SupportRow::Back, Side::Right, back_kind),
    ]
    .into_iter()
    .map(|(row, side, kind)| {
        let height = env.row_seat(row);
        let x = match side {
            Side::Left => env.left_x,
            Side::Right => env.right_x,
        };
        PostSupport {
            row,
            side,
            kind,
            position: Point3::new(x, height / 2.0, env.row_z(row)),
            height,
            size: POST_SIZE,
        }
    })
    .collect()
}

pub(crate) fn beams(env: &Envelope) -> Vec<Beam> {
    let thickness = POST_SIZE * BEAM_SIZE_FACTOR;

    [SupportRow::Front, SupportRow::Back]
        .into_iter()
        .map(|row| {
            let top = env.row_seat(row);
            Beam {
                row,
                position: Point3::new(env.center_x(), top - thickness / 2.0, env.row_z(row)),
                length: env.width + POST_SIZE,
                thickness,
                top,
            }
        })
        .collect()
}

pub(crate) fn rafters(env: &Envelope, width_mm: f64) -> Vec<Rafter> {
    let bays = rafter_count(width_mm);
    let spacing = env.width / bays as f64;

    let front_y = env.front_seat();
    let back_y = env.back_seat();
    let run = env.run();
    let rise = front_y - back_y;
    let length = run.hypot(rise);
    let angle = rise.atan2(run);
    let mid_y = (front_y + back_y) / 2.0;
    let mid_z = (env.front_z + env.back_line_z) / 2.0;

    (0..=bays)
        .map(|index| {
            let x = env.left_x + index as f64 * spacing;
            Rafter {
                index,
                x,
                midpoint: Point3::new(x, mid_y, mid_z),
                length,
                angle,
                width: POST_SIZE * RAFTER_WIDTH_FACTOR,
                height: POST_SIZE * RAFTER_HEIGHT_FACTOR,
            }
        })
        .collect()
}
