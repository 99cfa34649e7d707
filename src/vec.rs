//! Homogeneous-coordinate vector operations.
//!
//! A single [`Vec4`] type serves as 2D/3D/4D vector, point, and plane. The
//! `w` component is the homogeneous coordinate: `0.0` marks a direction,
//! `1.0` marks a point. Operations that only make sense for fewer components
//! come in suffixed variants (`dot3`, `magnitude2`, ...) that read only the
//! leading components.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::mat::Mat4;
use crate::quat::Quat;

/*
Requirements for Memory Compatibility with WGPU:
   1. Standard layout (like C structs).
   2. Alignment that matches WGSL expectations.
   3. Sized correctly for GPU buffers.
   4. Can be safely cast to [f32; N] or bytes.
*/

/// A four-component float vector in homogeneous coordinates.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Vec4 { x, y, z, w }
    }

    /// Euclidean norm over all four components.
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Euclidean norm over x, y, z.
    pub fn magnitude3(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean norm over x, y.
    pub fn magnitude2(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// `v / |v|` over all four components.
    ///
    /// A zero-length input divides by zero and yields NaN components; callers
    /// are responsible for not normalizing the zero vector.
    pub fn normalized(&self) -> Self {
        *self / self.magnitude()
    }

    /// `v / |v|` over x, y, z. The input's `w` is carried through unchanged.
    pub fn normalized3(&self) -> Self {
        let t = *self / self.magnitude3();
        Vec4::new(t.x, t.y, t.z, self.w)
    }

    /// `v / |v|` over x, y. The input's `z` and `w` are carried through
    /// unchanged.
    pub fn normalized2(&self) -> Self {
        let t = *self / self.magnitude2();
        Vec4::new(t.x, t.y, self.z, self.w)
    }

    /// Four-component dot product: `||v0|| * ||v1|| * cos(a)` for 4D vectors.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Dot product over x, y, z.
    pub fn dot3(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Dot product over x, y.
    pub fn dot2(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Right-handed 3D cross product.
    ///
    /// Pseudodeterminant
    /// ```text
    /// | i     j      k    |
    /// | v0.x  v0.y   v0.z |
    /// | v1.x  v1.y   v1.z |
    /// ```
    /// `||result|| = ||v0|| * ||v1|| * sin(a)`. The result's `w` is always 0.
    pub fn cross(&self, other: &Self) -> Self {
        Vec4::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
            0.0,
        )
    }

    /// Projection of `self` onto `other`: `((v0 . v1) / ||v1||^2) * v1`.
    pub fn project_onto(&self, other: &Self) -> Self {
        let mag_sqrd = other.dot3(other);
        *other * (self.dot3(other) / mag_sqrd)
    }

    /// Applies a matrix with the row-vector convention: `result = v * M`,
    /// component `i` being `dot(v, column i)`.
    pub fn transform(&self, m: &Mat4) -> Self {
        let mut out = Vec4::new(0.0, 0.0, 0.0, 1.0);
        for i in 0..4 {
            out[i] = self.dot(&m.column(i));
        }
        out
    }

    /// Three-component matrix application. The untouched `w` keeps the
    /// homogeneous-point default of 1.
    pub fn transform3(&self, m: &Mat4) -> Self {
        let mut out = Vec4::new(0.0, 0.0, 0.0, 1.0);
        for i in 0..3 {
            out[i] = self.dot3(&m.column(i));
        }
        out
    }

    /// Two-component matrix application. The untouched `z` stays 0 and `w`
    /// keeps the homogeneous-point default of 1.
    pub fn transform2(&self, m: &Mat4) -> Self {
        let mut out = Vec4::new(0.0, 0.0, 0.0, 1.0);
        for i in 0..2 {
            out[i] = self.dot2(&m.column(i));
        }
        out
    }

    /// Rotates the vector by a unit quaternion: `q * v * conjugate(q)`.
    ///
    /// The vector is used directly as a quaternion, so its `w` rides through
    /// the Hamilton products; with the usual direction contract (`w == 0`)
    /// that is a pure quaternion. `q` must be unit length or the result is a
    /// non-rigid transform.
    pub fn rotate(&self, q: &Quat) -> Self {
        (*q * Quat::from(*self) * q.conjugate()).into()
    }

    /// Linear interpolation `(1 - t) * v0 + t * v1`. The result's `w` is
    /// forced to 0, treating it as a direction regardless of the inputs.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let mut res = *self * (1.0 - t) + *other * t;
        res.w = 0.0;
        res
    }

    pub fn as_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(v: [f32; 4]) -> Self {
        Vec4::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(v: Vec4) -> Self {
        v.as_array()
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("vector component index {i} out of range"),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("vector component index {i} out of range"),
        }
    }
}

impl Add for Vec4 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vec4::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl Sub for Vec4 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vec4::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl Neg for Vec4 {
    type Output = Self;

    fn neg(self) -> Self {
        Vec4::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        Vec4::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Mul<Vec4> for f32 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Vec4 {
        v * self
    }
}

impl Div<f32> for Vec4 {
    type Output = Self;

    fn div(self, s: f32) -> Self {
        Vec4::new(self.x / s, self.y / s, self.z / s, self.w / s)
    }
}

impl AddAssign for Vec4 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Vec4 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl MulAssign<f32> for Vec4 {
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

impl DivAssign<f32> for Vec4 {
    fn div_assign(&mut self, s: f32) {
        *self = *self / s;
    }
}
