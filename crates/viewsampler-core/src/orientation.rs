//! Look-at orientation for cameras and lights.
//!
//! Observers follow the usual camera convention: the local `-Z` axis is the
//! viewing direction and the local `+Y` axis is up. Scenes are Z-up, so the
//! up axis is aligned with world `+Z` as closely as the viewing direction
//! allows.

use glam::{Mat3, Quat, Vec3};

use crate::{Error, Result};

/// World up reference for Z-up scenes.
pub const WORLD_UP: Vec3 = Vec3::Z;

/// Directions shorter than this are treated as zero.
const MIN_DIRECTION_LENGTH: f32 = 1e-12;

/// Returns the rotation that points an observer at `position` toward `target`.
///
/// The observer's forward axis (`rotation * -Z`) ends up parallel to
/// `target - position` and its up axis (`rotation * Y`) lies in the plane
/// spanned by the forward axis and `world_up`. When the direction is parallel
/// to `world_up`, world `+Y` is used as the secondary reference instead.
///
/// # Errors
/// Returns [`Error::DegenerateDirection`] if `position` and `target` coincide.
pub fn look_at(position: Vec3, target: Vec3, world_up: Vec3) -> Result<Quat> {
    let direction = target - position;
    let length = direction.length();
    if !length.is_finite() || length <= MIN_DIRECTION_LENGTH {
        return Err(Error::DegenerateDirection { position, target });
    }
    let forward = direction / length;

    let mut right = forward.cross(world_up);
    if right.length_squared() < 1e-12 {
        let fallback = if forward.cross(Vec3::Y).length_squared() < 1e-12 {
            Vec3::X
        } else {
            Vec3::Y
        };
        right = forward.cross(fallback);
    }
    let right = right.normalize();
    let up = right.cross(forward);

    let basis = Mat3::from_cols(right, up, -forward);
    Ok(Quat::from_mat3(&basis).normalize())
}

/// Forward (viewing) axis of an observer with the given rotation.
#[must_use]
pub fn forward_axis(rotation: Quat) -> Vec3 {
    rotation * Vec3::NEG_Z
}

/// Up axis of an observer with the given rotation.
#[must_use]
pub fn up_axis(rotation: Quat) -> Vec3 {
    rotation * Vec3::Y
}
