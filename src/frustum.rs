//! View-frustum planes derived from perspective FOV parameters.
//!
//! The frustum lives in view space, apex at the origin, looking down +z.
//! Each plane is a [`Vec4`] with `(x, y, z)` the normal and `w` the signed
//! distance term (`dot3(normal, p) + w == 0` on the plane); all six normals
//! point into the volume.

use crate::geom::line_plane_intersection;
use crate::quat::Quat;
use crate::vec::Vec4;

/// The six bounding half-space planes of a camera view volume.
///
/// Produced fresh per camera configuration by [`Frustum::from_fov`]; matches
/// the parameters of
/// [`Mat4::perspective_fov`](crate::mat::Mat4::perspective_fov).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frustum {
    pub near_z: Vec4,
    pub far_z: Vec4,
    pub left: Vec4,
    pub right: Vec4,
    pub bottom: Vec4,
    pub top: Vec4,
}

/// The eight corner points of a frustum, ordered top-left, top-right,
/// bottom-right, bottom-left on each of the near and far planes. Ready for
/// line-list debug rendering.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrustumCorners {
    pub near: [Vec4; 4],
    pub far: [Vec4; 4],
}

impl Frustum {
    /// Builds the frustum for a vertical field of view, aspect ratio
    /// (width / height), and near/far distances. All angles in radians.
    ///
    /// The near and far planes are axis-aligned at their fixed offsets. The
    /// four side planes come from rotating the canonical x and y planes (and
    /// their negations) about the up/right axes by the half-FOV angles; the
    /// horizontal half-FOV is recovered from the view extents as
    /// `atan(aspect * tan(fov_y / 2))`, not by scaling the angle itself.
    pub fn from_fov(fov_angle_y: f32, aspect_ratio: f32, near_z: f32, far_z: f32) -> Self {
        let x_plane = Vec4::new(1.0, 0.0, 0.0, 0.0);
        let y_plane = Vec4::new(0.0, 1.0, 0.0, 0.0);
        let up = Vec4::new(0.0, 1.0, 0.0, 0.0);
        let right = Vec4::new(1.0, 0.0, 0.0, 0.0);

        let half_fov_y = 0.5 * fov_angle_y;
        let half_fov_x = (aspect_ratio * half_fov_y.tan()).atan();

        Frustum {
            near_z: Vec4::new(0.0, 0.0, 1.0, -near_z),
            far_z: Vec4::new(0.0, 0.0, -1.0, far_z),
            left: x_plane.rotate(&Quat::rotation_axis(&up, -half_fov_x)),
            right: (-x_plane).rotate(&Quat::rotation_axis(&up, half_fov_x)),
            bottom: y_plane.rotate(&Quat::rotation_axis(&right, half_fov_y)),
            top: (-y_plane).rotate(&Quat::rotation_axis(&right, -half_fov_y)),
        }
    }

    /// The six planes in near, far, left, right, bottom, top order.
    pub fn planes(&self) -> [Vec4; 6] {
        [
            self.near_z,
            self.far_z,
            self.left,
            self.right,
            self.bottom,
            self.top,
        ]
    }

    /// Recovers the eight corner points of the frustum.
    ///
    /// Adjacent side planes intersect in an edge through the apex; the edge
    /// direction is the cross product of their normals. Casting those four
    /// edges from the origin against the near and far planes yields the
    /// corners.
    pub fn corners(&self) -> FrustumCorners {
        let origin = Vec4::new(0.0, 0.0, 0.0, 0.0);

        let top_left = self.top.cross(&self.left);
        let top_right = self.right.cross(&self.top);
        let bottom_right = self.bottom.cross(&self.right);
        let bottom_left = self.left.cross(&self.bottom);

        let edges = [top_left, top_right, bottom_right, bottom_left];

        FrustumCorners {
            near: edges.map(|dir| line_plane_intersection(&origin, &dir, &self.near_z)),
            far: edges.map(|dir| line_plane_intersection(&origin, &dir, &self.far_z)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::line_plane_intersection;
    use std::f32::consts::FRAC_PI_2;

    fn on_plane(plane: &Vec4, point: &Vec4) -> bool {
        (plane.dot3(point) + plane.w).abs() < 1e-4
    }

    #[test]
    fn square_frustum_planes() {
        // 90-degree vertical FOV at aspect 1: every side plane tilts 45
        // degrees toward the z axis.
        let f = Frustum::from_fov(FRAC_PI_2, 1.0, 1.0, 10.0);
        assert_eq!(f.planes().len(), 6);

        assert_eq!(f.near_z, Vec4::new(0.0, 0.0, 1.0, -1.0));
        assert_eq!(f.far_z, Vec4::new(0.0, 0.0, -1.0, 10.0));

        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert!((f.left.x - h).abs() < 1e-5 && (f.left.z - h).abs() < 1e-5);
        assert!((f.right.x + h).abs() < 1e-5 && (f.right.z - h).abs() < 1e-5);
        assert!((f.bottom.y - h).abs() < 1e-5 && (f.bottom.z - h).abs() < 1e-5);
        assert!((f.top.y + h).abs() < 1e-5 && (f.top.z - h).abs() < 1e-5);
    }

    #[test]
    fn far_plane_intersection_along_z_axis() {
        let f = Frustum::from_fov(FRAC_PI_2, 1.0, 1.0, 10.0);
        let hit = line_plane_intersection(
            &Vec4::new(0.0, 0.0, 0.0, 0.0),
            &Vec4::new(0.0, 0.0, 1.0, 0.0),
            &f.far_z,
        );
        assert!((hit.z - 10.0).abs() < 1e-4);
    }

    #[test]
    fn normals_point_into_the_volume() {
        let f = Frustum::from_fov(1.0, 16.0 / 9.0, 0.5, 100.0);
        let inside = Vec4::new(0.0, 0.0, 50.0, 1.0);
        for plane in f.planes() {
            assert!(plane.dot3(&inside) + plane.w > 0.0);
        }
    }

    #[test]
    fn square_frustum_corners() {
        let f = Frustum::from_fov(FRAC_PI_2, 1.0, 1.0, 10.0);
        let c = f.corners();

        // Near corners at z = 1 sit at x, y = +/-1; far corners scale by 10.
        let expect_near = [
            (-1.0, 1.0),
            (1.0, 1.0),
            (1.0, -1.0),
            (-1.0, -1.0),
        ];
        for (corner, (x, y)) in c.near.iter().zip(expect_near) {
            assert!((corner.x - x).abs() < 1e-4, "{corner:?}");
            assert!((corner.y - y).abs() < 1e-4, "{corner:?}");
            assert!((corner.z - 1.0).abs() < 1e-4, "{corner:?}");
        }
        for (corner, (x, y)) in c.far.iter().zip(expect_near) {
            assert!((corner.x - 10.0 * x).abs() < 1e-3, "{corner:?}");
            assert!((corner.y - 10.0 * y).abs() < 1e-3, "{corner:?}");
            assert!((corner.z - 10.0).abs() < 1e-3, "{corner:?}");
        }
    }

    #[test]
    fn corners_lie_on_their_planes() {
        let f = Frustum::from_fov(1.2, 16.0 / 9.0, 0.25, 60.0);
        let c = f.corners();

        for corner in c.near {
            assert!(on_plane(&f.near_z, &corner));
        }
        for corner in c.far {
            assert!(on_plane(&f.far_z, &corner));
        }
        // The top-left corners also sit on the top and left side planes.
        assert!(on_plane(&f.top, &c.near[0]));
        assert!(on_plane(&f.left, &c.near[0]));
        assert!(on_plane(&f.top, &c.far[0]));
        assert!(on_plane(&f.left, &c.far[0]));
    }
}
