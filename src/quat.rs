//! Quaternion algebra for 3D rotation.
//!
//! [`Quat`] shares the four-float layout of [`Vec4`]: `x`, `y`, `z` is the
//! vector part and `w` the scalar part. Rotation consumers
//! ([`Vec4::rotate`], [`crate::mat::Mat4::rotation_quat`]) require a unit
//! quaternion; that invariant is the caller's responsibility and is never
//! enforced here — a non-unit quaternion silently produces a non-rigid
//! transform.

use std::ops::{Add, Div, Mul, Neg};

use crate::vec::Vec4;

/// A quaternion `x*i + y*j + z*k + w`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Quat { x, y, z, w }
    }

    /// The identity rotation `(0, 0, 0, 1)`.
    pub fn identity() -> Self {
        Quat::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Four-component dot product; `dot(q, q)` is the squared magnitude.
    pub fn dot(&self, other: &Self) -> f32 {
        Vec4::from(*self).dot(&Vec4::from(*other))
    }

    pub fn normalized(&self) -> Self {
        Vec4::from(*self).normalized().into()
    }

    /// `(-x, -y, -z, w)`. For a unit quaternion this is also the inverse.
    pub fn conjugate(&self) -> Self {
        Quat::new(-self.x, -self.y, -self.z, self.w)
    }

    /// `conjugate(q) / |q|^2`, so that `q * inverse(q) == identity` for any
    /// nonzero quaternion, unit or not.
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.dot(self)
    }

    /// Rotation about an arbitrary axis: `(sin(angle/2) * axis,
    /// cos(angle/2))`.
    ///
    /// * `axis` - rotation axis, already normalized by the caller
    /// * `angle` - angle in radians
    pub fn rotation_axis(axis: &Vec4, angle: f32) -> Self {
        let (s, c) = (0.5 * angle).sin_cos();
        Quat::new(s * axis.x, s * axis.y, s * axis.z, c)
    }

    /// Euler angles rotation, consistent with
    /// [`crate::mat::Mat4::rotation_roll_pitch_yaw`]: converting the result
    /// with [`crate::mat::Mat4::rotation_quat`] reproduces that matrix.
    ///
    /// * `pitch` - rotation about the x axis, radians
    /// * `yaw` - rotation about the y axis, radians
    /// * `roll` - rotation about the z axis, radians
    pub fn rotation_roll_pitch_yaw(pitch: f32, yaw: f32, roll: f32) -> Self {
        let half = Vec4::new(pitch, yaw, roll, 0.0) * 0.5;
        let c = Vec4::new(half.x.cos(), half.y.cos(), half.z.cos(), 0.0);
        let s = Vec4::new(half.x.sin(), half.y.sin(), half.z.sin(), 0.0);

        Quat::new(
            c.y * s.x * c.z + s.y * c.x * s.z,
            s.y * c.x * c.z - c.y * s.x * s.z,
            c.y * c.x * s.z - s.y * s.x * c.z,
            c.y * c.x * c.z + s.y * s.x * s.z,
        )
    }

    /// Linear interpolation `(1 - t) * q1 + t * q2`.
    ///
    /// Only defined for `t` in `[0, 1]`; checked in debug builds.
    pub fn lerp(q1: &Self, q2: &Self, t: f32) -> Self {
        debug_assert!((0.0..=1.0).contains(&t), "lerp parameter {t} out of range");

        *q1 * (1.0 - t) + *q2 * t
    }

    /// Spherical linear interpolation along the shortest great-circle arc.
    ///
    /// If `dot(q1, q2) < 0` the interpolation would take the long way around
    /// the sphere, so `q2` is negated. When the quaternions are nearly
    /// parallel the sine denominator approaches zero and the result falls
    /// back to [`Quat::lerp`].
    pub fn slerp(q1: &Self, q2: &Self, t: f32) -> Self {
        let mut dot = q1.dot(q2); // = cos(angle)
        let epsilon = 1.0 - 0.00001;

        let mut q2_ = *q2;
        if dot < 0.0 {
            q2_ = -*q2;
            dot = -dot;
        }

        if dot > epsilon {
            return Quat::lerp(q1, q2, t);
        }

        let angle = dot.acos();
        (*q1 * (angle * (1.0 - t)).sin() + q2_ * (angle * t).sin()) / angle.sin()
    }
}

impl From<Vec4> for Quat {
    fn from(v: Vec4) -> Self {
        Quat::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Quat> for Vec4 {
    fn from(q: Quat) -> Self {
        Vec4::new(q.x, q.y, q.z, q.w)
    }
}

impl Mul for Quat {
    type Output = Self;

    /// Hamilton product, via the compact identity for `q0 = (s0 + v0)` and
    /// `q1 = (s1 + v1)`:
    ///
    /// `q0 * q1 = s0*s1 - dot(v0, v1) + s0*v1 + s1*v0 + cross(v0, v1)`
    fn mul(self, other: Self) -> Self {
        let v0 = Vec4::new(self.x, self.y, self.z, 0.0);
        let v1 = Vec4::new(other.x, other.y, other.z, 0.0);

        let s = self.w * other.w - v0.dot3(&v1);
        let v = v1 * self.w + v0 * other.w + v0.cross(&v1);
        Quat::new(v.x, v.y, v.z, s)
    }
}

impl Add for Quat {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Quat::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl Neg for Quat {
    type Output = Self;

    fn neg(self) -> Self {
        Quat::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f32> for Quat {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        Quat::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Mul<Quat> for f32 {
    type Output = Quat;

    fn mul(self, q: Quat) -> Quat {
        q * self
    }
}

impl Div<f32> for Quat {
    type Output = Self;

    fn div(self, s: f32) -> Self {
        Quat::new(self.x / s, self.y / s, self.z / s, self.w / s)
    }
}
