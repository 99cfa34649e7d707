//! Small geometric queries over planes.
//!
//! Planes are [`Vec4`]s: `(x, y, z)` is the normal and `w` the signed
//! distance term, so a point `p` lies on the plane when
//! `dot3(normal, p) + w == 0`.

use crate::vec::Vec4;

/// Intersects the line `point + t * dir` with a plane.
///
/// `t = -(dot3(plane, point) + plane.w) / dot3(plane, dir)`
///
/// When `dir` is parallel to the plane the denominator is zero and the
/// result is Inf/NaN-filled; callers must rule that configuration out if
/// they need a finite point.
pub fn line_plane_intersection(point: &Vec4, dir: &Vec4, plane: &Vec4) -> Vec4 {
    let t = -(plane.dot3(point) + plane.w) / plane.dot3(dir);
    *point + *dir * t
}

/// Signed distance of `point` from the plane through `center` with the given
/// `normal`: zero on the plane, positive on the side the normal points to.
pub fn point_plane_distance(normal: &Vec4, center: &Vec4, point: &Vec4) -> f32 {
    let d = (-*normal).dot3(center);
    normal.dot3(point) + d
}
