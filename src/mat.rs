//! 4x4 matrix operations.
//!
//! [`Mat4`] is row-major and applied with the row-vector convention
//! (`result = v * M`), so translation lives in the last row and transforms
//! compose left to right: `Scale * Rotation * Translation` applies the scale
//! first. Rotation-only matrices are orthogonal (`M * transpose(M) == I`,
//! `det == 1`).
//!
//! The determinant/cofactor/inverse engine is size-parameterized: it treats
//! the leading `n x n` block (`n` in 1..=4) of the matrix as the operand,
//! which lets the same code invert 2x2, 3x3, and full 4x4 matrices.

use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::quat::Quat;
use crate::vec::Vec4;

/// A 4x4 float matrix, addressed row-then-column.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4(pub [[f32; 4]; 4]);

impl Mat4 {
    pub const fn new(rows: [[f32; 4]; 4]) -> Self {
        Mat4(rows)
    }

    pub fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Mat4([r0.as_array(), r1.as_array(), r2.as_array(), r3.as_array()])
    }

    pub fn identity() -> Self {
        Mat4([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from(self.0[i])
    }

    pub fn column(&self, j: usize) -> Vec4 {
        Vec4::new(self.0[0][j], self.0[1][j], self.0[2][j], self.0[3][j])
    }

    /// Rebuilds the matrix from its four column vectors used as rows.
    pub fn transpose(&self) -> Self {
        Mat4::from_rows(
            self.column(0),
            self.column(1),
            self.column(2),
            self.column(3),
        )
    }

    /// Deletes one row and one column from the leading `n x n` block and
    /// packs the remainder into the top-left `(n-1) x (n-1)` block.
    /// Entries outside that block are zero.
    pub fn submatrix(&self, row: usize, col: usize, n: usize) -> Self {
        let mut out = [[0.0f32; 4]; 4];

        let mut r = 0;
        for i in 0..n {
            if i == row {
                continue;
            }
            let mut c = 0;
            for j in 0..n {
                if j == col {
                    continue;
                }
                out[r][c] = self.0[i][j];
                c += 1;
            }
            r += 1;
        }

        Mat4(out)
    }

    /// Determinant of the leading `n x n` block, `n` in 1..=4.
    ///
    /// Base cases are `n == 1` (the single entry) and `n == 2` (`ad - bc`);
    /// larger sizes use Laplace cofactor expansion along the first row with
    /// the sign alternating starting at +1.
    pub fn determinant(&self, n: usize) -> f32 {
        assert!((1..=4).contains(&n), "matrix size {n} not supported");

        if n == 1 {
            return self.0[0][0];
        }
        if n == 2 {
            return self.0[0][0] * self.0[1][1] - self.0[0][1] * self.0[1][0];
        }

        let mut sign = 1.0;
        let mut res = 0.0;
        for i in 0..n {
            res += sign * self.0[0][i] * self.submatrix(0, i, n).determinant(n - 1);
            sign = -sign;
        }

        res
    }

    /// Cofactor of entry (i, j) in the leading `n x n` block:
    /// `(-1)^(i+j) * determinant` of the minor deleting row `i` and column
    /// `j`. Defined for `n` in 2..=4.
    pub fn cofactor(&self, n: usize, i: usize, j: usize) -> f32 {
        assert!((2..=4).contains(&n), "matrix size {n} not supported");

        let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.submatrix(i, j, n).determinant(n - 1)
    }

    /// The cofactor applied to every entry of the leading `n x n` block.
    pub fn cofactor_matrix(&self, n: usize) -> Self {
        assert!((2..=4).contains(&n), "matrix size {n} not supported");

        let mut out = [[0.0f32; 4]; 4];
        for i in 0..n {
            for j in 0..n {
                out[i][j] = self.cofactor(n, i, j);
            }
        }

        Mat4(out)
    }

    /// Inverse of the leading `n x n` block, `n` in 2..=4:
    /// `transpose(cofactor_matrix) / determinant` (the adjugate formula).
    ///
    /// The determinant is recovered as `dotN(row 0, adjugate column 0)` —
    /// the cofactor-expansion identity — so the already-computed cofactors
    /// are reused instead of running the expansion a second time.
    ///
    /// The matrix must be invertible. A singular input divides by a zero
    /// determinant and yields a NaN-filled result rather than an error.
    pub fn inverse(&self, n: usize) -> Self {
        assert!((2..=4).contains(&n), "matrix size {n} not supported");

        let adj = self.cofactor_matrix(n).transpose();
        let det = match n {
            4 => self.row(0).dot(&adj.column(0)),
            3 => self.row(0).dot3(&adj.column(0)),
            _ => self.row(0).dot2(&adj.column(0)),
        };

        adj * (1.0 / det)
    }

    // ------------------------------------------------------------------
    // Transform builders

    /// Identity with the diagonal's first three entries replaced by
    /// `v.x`, `v.y`, `v.z`.
    pub fn scale(v: &Vec4) -> Self {
        let mut res = Mat4::identity();
        for i in 0..3 {
            res.0[i][i] = v[i];
        }
        res
    }

    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Mat4::scale(&Vec4::new(x, y, z, 0.0))
    }

    /// Identity with the translation in row 3 (row-vector convention).
    pub fn translate(v: &Vec4) -> Self {
        let mut res = Mat4::identity();
        for i in 0..3 {
            res.0[3][i] = v[i];
        }
        res
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::translate(&Vec4::new(x, y, z, 0.0))
    }

    /// Right-handed rotation about the x axis, angle in radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Right-handed rotation about the y axis, angle in radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Right-handed rotation about the z axis, angle in radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Combined Euler rotation, closed form for
    /// `rotation_z(roll) * rotation_x(pitch) * rotation_y(yaw)` in exactly
    /// that composition order.
    ///
    /// * `pitch` - rotation about the x axis, radians
    /// * `yaw` - rotation about the y axis, radians
    /// * `roll` - rotation about the z axis, radians
    pub fn rotation_roll_pitch_yaw(pitch: f32, yaw: f32, roll: f32) -> Self {
        let c = Vec4::new(pitch.cos(), yaw.cos(), roll.cos(), 0.0);
        let s = Vec4::new(pitch.sin(), yaw.sin(), roll.sin(), 0.0);

        Mat4([
            [
                c.z * c.y + s.z * s.x * s.y,
                s.z * c.x,
                s.z * s.x * c.y - c.z * s.y,
                0.0,
            ],
            [
                c.z * s.x * s.y - s.z * c.y,
                c.z * c.x,
                s.z * s.y + c.z * s.x * c.y,
                0.0,
            ],
            [c.x * s.y, -s.x, c.x * c.y, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about an arbitrary axis via Rodrigues' rotation formula:
    ///
    /// `P_rot = P*cos(angle) + cross(axis, P)*sin(angle)
    ///        + axis*dot(axis, P)*(1 - cos(angle))`
    ///
    /// expressed per-entry. The axis is normalized internally.
    pub fn rotation_axis(angle: f32, axis: &Vec4) -> Self {
        let a = axis.normalized3();
        let (s, c) = angle.sin_cos();
        let t = a * (1.0 - c);

        Mat4([
            [c + t.x * a.x, t.x * a.y + s * a.z, t.x * a.z - s * a.y, 0.0],
            [t.x * a.y - s * a.z, c + t.y * a.y, t.y * a.z + s * a.x, 0.0],
            [t.x * a.z + s * a.y, t.y * a.z - s * a.x, c + t.z * a.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Matrix representation of a unit quaternion rotation.
    ///
    /// `q` must be unit length; a non-unit quaternion produces a non-rigid
    /// transform.
    pub fn rotation_quat(q: &Quat) -> Self {
        let t = *q * 2.0;
        Mat4([
            [
                1.0 - t.y * q.y - t.z * q.z,
                t.x * q.y + t.w * q.z,
                t.x * q.z - t.w * q.y,
                0.0,
            ],
            [
                t.x * q.y - t.w * q.z,
                1.0 - t.x * q.x - t.z * q.z,
                t.y * q.z + t.w * q.x,
                0.0,
            ],
            [
                t.x * q.z + t.w * q.y,
                t.y * q.z - t.w * q.x,
                1.0 - t.x * q.x - t.y * q.y,
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    // ------------------------------------------------------------------
    // Projection builders
    //
    // All of these map view-space x and y to clip [-1, 1] and z to [0, 1].
    // The perspective variants set w' = z as the perspective-divide carrier.

    pub fn orthographic(view_width: f32, view_height: f32, near_z: f32, far_z: f32) -> Self {
        Mat4([
            [2.0 / view_width, 0.0, 0.0, 0.0],
            [0.0, 2.0 / view_height, 0.0, 0.0],
            [0.0, 0.0, 1.0 / (far_z - near_z), 0.0],
            [0.0, 0.0, -near_z / (far_z - near_z), 1.0],
        ])
    }

    pub fn orthographic_off_center(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near_z: f32,
        far_z: f32,
    ) -> Self {
        Mat4([
            [2.0 / (right - left), 0.0, 0.0, 0.0],
            [0.0, 2.0 / (top - bottom), 0.0, 0.0],
            [0.0, 0.0, 1.0 / (far_z - near_z), 0.0],
            [
                -(right + left) / (right - left),
                -(top + bottom) / (top - bottom),
                -near_z / (far_z - near_z),
                1.0,
            ],
        ])
    }

    pub fn perspective(view_width: f32, view_height: f32, near_z: f32, far_z: f32) -> Self {
        Mat4([
            [2.0 * near_z / view_width, 0.0, 0.0, 0.0],
            [0.0, 2.0 * near_z / view_height, 0.0, 0.0],
            [0.0, 0.0, far_z / (far_z - near_z), 1.0],
            [0.0, 0.0, -near_z * far_z / (far_z - near_z), 0.0],
        ])
    }

    pub fn perspective_off_center(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near_z: f32,
        far_z: f32,
    ) -> Self {
        Mat4([
            [2.0 * near_z / (right - left), 0.0, 0.0, 0.0],
            [0.0, 2.0 * near_z / (top - bottom), 0.0, 0.0],
            [
                -(right + left) / (right - left),
                -(top + bottom) / (top - bottom),
                far_z / (far_z - near_z),
                1.0,
            ],
            [0.0, 0.0, -near_z * far_z / (far_z - near_z), 0.0],
        ])
    }

    /// Perspective projection from a vertical field of view and an aspect
    /// ratio (width / height):
    ///
    /// `view_height / 2 = near_z * tan(fov_y / 2)`
    /// `view_width  / 2 = near_z * aspect * tan(fov_y / 2)`
    pub fn perspective_fov(fov_angle_y: f32, aspect_ratio: f32, near_z: f32, far_z: f32) -> Self {
        let t = (fov_angle_y / 2.0).tan();
        Mat4([
            [1.0 / (aspect_ratio * t), 0.0, 0.0, 0.0],
            [0.0, 1.0 / t, 0.0, 0.0],
            [0.0, 0.0, far_z / (far_z - near_z), 1.0],
            [0.0, 0.0, -near_z * far_z / (far_z - near_z), 0.0],
        ])
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];

    fn index(&self, i: usize) -> &[f32; 4] {
        &self.0[i]
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, i: usize) -> &mut [f32; 4] {
        &mut self.0[i]
    }
}

impl Add for Mat4 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut out = self.0;
        for (row, other_row) in out.iter_mut().zip(other.0.iter()) {
            for (cell, other_cell) in row.iter_mut().zip(other_row.iter()) {
                *cell += other_cell;
            }
        }
        Mat4(out)
    }
}

impl Sub for Mat4 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut out = self.0;
        for (row, other_row) in out.iter_mut().zip(other.0.iter()) {
            for (cell, other_cell) in row.iter_mut().zip(other_row.iter()) {
                *cell -= other_cell;
            }
        }
        Mat4(out)
    }
}

impl Neg for Mat4 {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        let mut out = self.0;
        for row in out.iter_mut() {
            for cell in row.iter_mut() {
                *cell *= s;
            }
        }
        Mat4(out)
    }
}

impl Mul<Mat4> for f32 {
    type Output = Mat4;

    fn mul(self, m: Mat4) -> Mat4 {
        m * self
    }
}

impl Mul for Mat4 {
    type Output = Self;

    /// Matrix product. With the row-vector convention,
    /// `v * (a * b) == (v * a) * b`, so transforms compose left to right.
    fn mul(self, other: Self) -> Self {
        let mut out = [[0.0f32; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.0[i][k] * other.0[k][j]).sum();
            }
        }
        Mat4(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f32::consts::FRAC_PI_2;

    fn assert_mat_close(a: &Mat4, b: &Mat4, tol: f32) {
        for i in 0..4 {
            for j in 0..4 {
                assert!(
                    (a.0[i][j] - b.0[i][j]).abs() < tol,
                    "entry ({i}, {j}): {} vs {}",
                    a.0[i][j],
                    b.0[i][j]
                );
            }
        }
    }

    #[test]
    fn identity_determinant_is_one_for_all_sizes() {
        let m = Mat4::identity();
        for n in 1..=4 {
            assert_eq!(m.determinant(n), 1.0);
        }
    }

    #[test]
    fn determinant_2x2_base_case() {
        let m = Mat4::new([
            [1.0, 2.0, 0.0, 0.0],
            [3.0, 4.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
        ]);
        assert_eq!(m.determinant(2), -2.0);
    }

    #[test]
    fn determinant_of_rotation_is_one() {
        let m = Mat4::rotation_roll_pitch_yaw(0.3, -1.2, 2.1);
        assert!((m.determinant(4) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn determinant_of_product_is_product_of_determinants() {
        let a = Mat4::scaling(2.0, 3.0, 4.0);
        let b = Mat4::rotation_y(0.7);
        let d = (a * b).determinant(4);
        assert!((d - a.determinant(4) * b.determinant(4)).abs() < 1e-3);
    }

    #[test]
    #[should_panic(expected = "not supported")]
    fn determinant_rejects_size_zero() {
        Mat4::identity().determinant(0);
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = Mat4::new([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let t = m.transpose();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(t.0[i][j], m.0[j][i]);
            }
        }
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn submatrix_deletes_row_and_column() {
        let m = Mat4::new([
            [1.0, 2.0, 3.0, 0.0],
            [4.0, 5.0, 6.0, 0.0],
            [7.0, 8.0, 9.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
        ]);
        let s = m.submatrix(0, 1, 3);
        assert_eq!(s.0[0][0], 4.0);
        assert_eq!(s.0[0][1], 6.0);
        assert_eq!(s.0[1][0], 7.0);
        assert_eq!(s.0[1][1], 9.0);
    }

    #[test]
    fn inverse_times_original_is_identity() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..50 {
            let m = Mat4::scaling(
                rng.gen_range(0.7..1.5),
                rng.gen_range(0.7..1.5),
                rng.gen_range(0.7..1.5),
            ) * Mat4::rotation_roll_pitch_yaw(
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
            ) * Mat4::translation(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            );

            assert_mat_close(&(m.inverse(4) * m), &Mat4::identity(), 1e-4);
        }
    }

    #[test]
    fn inverse_2x2_block() {
        // [[1, 2], [3, 4]]^-1 == [[-2, 1], [1.5, -0.5]]
        let m = Mat4::new([
            [1.0, 2.0, 0.0, 0.0],
            [3.0, 4.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
        ]);
        let inv = m.inverse(2);
        assert!((inv.0[0][0] + 2.0).abs() < 1e-6);
        assert!((inv.0[0][1] - 1.0).abs() < 1e-6);
        assert!((inv.0[1][0] - 1.5).abs() < 1e-6);
        assert!((inv.0[1][1] + 0.5).abs() < 1e-6);
    }

    #[test]
    fn singular_inverse_yields_nan() {
        let m = Mat4::new([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 6.0, 8.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ]);
        assert_eq!(m.determinant(4), 0.0);
        assert!(m.inverse(4).0[0][0].is_nan() || m.inverse(4).0[0][0].is_infinite());
    }

    #[test]
    fn rotation_matrices_are_orthogonal() {
        let m = Mat4::rotation_axis(1.3, &Vec4::new(1.0, 2.0, -0.5, 0.0));
        assert_mat_close(&(m * m.transpose()), &Mat4::identity(), 1e-5);
    }

    #[test]
    fn euler_matrix_matches_composed_elementary_rotations() {
        let (pitch, yaw, roll) = (0.4, -1.1, 2.3);
        let composed = Mat4::rotation_z(roll) * Mat4::rotation_x(pitch) * Mat4::rotation_y(yaw);
        let closed = Mat4::rotation_roll_pitch_yaw(pitch, yaw, roll);
        assert_mat_close(&closed, &composed, 1e-5);
    }

    #[test]
    fn rotation_axis_matches_quaternion_rotation() {
        let mut rng = StdRng::seed_from_u64(41);
        for _ in 0..100 {
            let axis = Vec4::new(
                rng.gen_range(-1.0..1.0f32),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                0.0,
            );
            if axis.magnitude3() < 1e-3 {
                continue;
            }
            let angle = rng.gen_range(-3.0..3.0);
            let v = Vec4::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                0.0,
            );

            let by_matrix = v.transform3(&Mat4::rotation_axis(angle, &axis));
            let q = Quat::rotation_axis(&axis.normalized3(), angle);
            let by_quat = v.rotate(&q);

            assert!((by_matrix.x - by_quat.x).abs() < 1e-4);
            assert!((by_matrix.y - by_quat.y).abs() < 1e-4);
            assert!((by_matrix.z - by_quat.z).abs() < 1e-4);
        }
    }

    #[test]
    fn rotation_quat_matches_axis_matrix() {
        let axis = Vec4::new(0.0, 1.0, 0.0, 0.0);
        let by_axis = Mat4::rotation_axis(FRAC_PI_2, &axis);
        let by_quat = Mat4::rotation_quat(&Quat::rotation_axis(&axis, FRAC_PI_2));
        assert_mat_close(&by_axis, &by_quat, 1e-6);
    }

    #[test]
    fn quarter_turn_about_y_sends_x_to_negative_z() {
        let m = Mat4::rotation_axis(FRAC_PI_2, &Vec4::new(0.0, 1.0, 0.0, 0.0));
        let v = Vec4::new(1.0, 0.0, 0.0, 0.0).transform3(&m);
        assert!((v.x - 0.0).abs() < 1e-6);
        assert!((v.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthographic_maps_view_volume_to_clip_space() {
        let m = Mat4::orthographic(20.0, 10.0, 1.0, 11.0);

        let corner = Vec4::new(10.0, 5.0, 11.0, 1.0).transform(&m);
        assert!((corner.x - 1.0).abs() < 1e-6);
        assert!((corner.y - 1.0).abs() < 1e-6);
        assert!((corner.z - 1.0).abs() < 1e-6);

        let near_center = Vec4::new(0.0, 0.0, 1.0, 1.0).transform(&m);
        assert!(near_center.z.abs() < 1e-6);
    }

    #[test]
    fn orthographic_off_center_matches_centered_form() {
        let centered = Mat4::orthographic(20.0, 10.0, 1.0, 11.0);
        let off = Mat4::orthographic_off_center(-10.0, 10.0, -5.0, 5.0, 1.0, 11.0);
        assert_mat_close(&centered, &off, 1e-6);
    }

    #[test]
    fn perspective_fov_depth_range() {
        let m = Mat4::perspective_fov(FRAC_PI_2, 16.0 / 9.0, 1.0, 100.0);

        // After the perspective divide, near maps to 0 and far maps to 1.
        let near = Vec4::new(0.0, 0.0, 1.0, 1.0).transform(&m);
        assert!((near.z / near.w).abs() < 1e-6);
        let far = Vec4::new(0.0, 0.0, 100.0, 1.0).transform(&m);
        assert!((far.z / far.w - 1.0).abs() < 1e-6);

        // w' carries the view-space z.
        assert!((near.w - 1.0).abs() < 1e-6);
        assert!((far.w - 100.0).abs() < 1e-6);
    }

    #[test]
    fn perspective_fov_matches_explicit_extent_form() {
        let (fov_y, aspect, near, far) = (FRAC_PI_2, 16.0 / 9.0f32, 0.5, 50.0);
        let height = 2.0 * near * (fov_y / 2.0).tan();
        let width = aspect * height;
        assert_mat_close(
            &Mat4::perspective_fov(fov_y, aspect, near, far),
            &Mat4::perspective(width, height, near, far),
            1e-5,
        );
    }

    #[test]
    fn view_matrix_round_trip() {
        // A camera view matrix is the inverse of rotation * translation;
        // applying both should land back on the original point.
        let world = Mat4::rotation_roll_pitch_yaw(0.2, 1.0, -0.4) * Mat4::translation(3.0, -2.0, 7.0);
        let view = world.inverse(4);
        let p = Vec4::new(4.0, 5.0, 6.0, 1.0);
        let round_trip = p.transform(&world).transform(&view);
        assert!((round_trip.x - p.x).abs() < 1e-4);
        assert!((round_trip.y - p.y).abs() < 1e-4);
        assert!((round_trip.z - p.z).abs() < 1e-4);
    }
}
