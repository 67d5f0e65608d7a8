//! Closed-form point transformations.
//!
//! Small helpers for rotating, reflecting and transforming point buffers.
//! Everything here is plain 3x3/4x4 arithmetic on `glam` types.

use glam::{Mat3, Mat4, Vec3};

use crate::error::{GridvizError, Result};

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Rotates points in place about a coordinate axis by an angle in degrees.
pub fn axis_rotation(points: &mut [Vec3], angle_deg: f32, axis: Axis) {
    let angle = angle_deg.to_radians();
    let (sin, cos) = angle.sin_cos();
    for p in points {
        match axis {
            Axis::X => {
                let y = p.y * cos - p.z * sin;
                let z = p.y * sin + p.z * cos;
                p.y = y;
                p.z = z;
            }
            Axis::Y => {
                let x = p.x * cos + p.z * sin;
                let z = -p.x * sin + p.z * cos;
                p.x = x;
                p.z = z;
            }
            Axis::Z => {
                let x = p.x * cos - p.y * sin;
                let y = p.x * sin + p.y * cos;
                p.x = x;
                p.y = y;
            }
        }
    }
}

/// Returns a 4x4 matrix for rotation about an arbitrary axis by an angle in
/// degrees, optionally about a given center point.
///
/// The axis does not need to be normalized; a zero-length axis is an error.
pub fn axis_angle_rotation(axis: Vec3, angle_deg: f32, point: Option<Vec3>) -> Result<Mat4> {
    let angle = angle_deg.to_radians();
    let wrapped = angle.rem_euclid(std::f32::consts::TAU);
    if wrapped < 1e-6 || std::f32::consts::TAU - wrapped < 1e-6 {
        return Ok(Mat4::IDENTITY);
    }
    let length = axis.length();
    if length < f32::EPSILON {
        return Err(GridvizError::ZeroAxis);
    }
    let rotation = Mat3::from_axis_angle(axis / length, angle);
    let mut matrix = Mat4::from_mat3(rotation);
    if let Some(center) = point {
        // R @ p + (center - R @ center) rotates p about the center.
        matrix.w_axis = (center - rotation * center).extend(1.0);
    }
    Ok(matrix)
}

/// Returns a 4x4 matrix for reflection across a plane with the given normal,
/// optionally through a given plane point.
pub fn reflection(normal: Vec3, point: Option<Vec3>) -> Result<Mat4> {
    let length = normal.length();
    if length < f32::EPSILON {
        return Err(GridvizError::ZeroNormal);
    }
    let n = normal / length;
    // Householder: I - 2 n n^T
    let projection = Mat3::from_cols(n * n.x, n * n.y, n * n.z);
    let mirror = Mat3::IDENTITY - projection * 2.0;
    let mut matrix = Mat4::from_mat3(mirror);
    if let Some(center) = point {
        matrix.w_axis = (center - mirror * center).extend(1.0);
    }
    Ok(matrix)
}

/// Applies a 4x4 homogeneous transformation to points in place.
///
/// The matrix is normalized by its homogeneous scale entry first.
pub fn apply_transformation_to_points(matrix: Mat4, points: &mut [Vec3]) {
    let w = matrix.w_axis.w;
    let m = if w == 1.0 { matrix } else { matrix * (1.0 / w) };
    for p in points {
        *p = (m * p.extend(1.0)).truncate();
    }
}
