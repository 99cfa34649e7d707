//! Homogeneous-coordinate math for a 3D renderer.
//!
//! This crate supplies the vector, matrix, and quaternion algebra a renderer
//! needs to build view and projection matrices and to extract view-frustum
//! planes: a single 4-float [`Vec4`] serving as vector, point, and plane, a
//! row-major [`Mat4`] applied with the row-vector convention
//! (`result = v * M`, translation in the last row), [`Quat`] rotations, and
//! [`Frustum`] plane extraction from field-of-view parameters.
//!
//! All types are plain `Copy` value types with `bytemuck::Pod` layouts, so
//! matrices and vectors can be cast directly into GPU uniform buffers.
//! Every operation is a stateless pure function: no allocation, no shared
//! state, safe to call from any thread.
//!
//! # Module Organization
//!
//! - [`vec`] - 2/3/4-component operations on the homogeneous [`Vec4`]
//! - [`mat`] - [`Mat4`] algebra, the size-parameterized
//!   determinant/cofactor/inverse engine, transform and projection builders
//! - [`quat`] - Hamilton algebra, axis/Euler construction, lerp/slerp
//! - [`frustum`] - view-volume planes and corner recovery
//! - [`geom`] - line/plane intersection and point/plane distance
//! - Angle-unit helpers at root level
//!
//! # Conventions
//!
//! Every function takes radians. User-facing degrees are converted exactly
//! once, by the caller, with [`deg_to_rad`] at the boundary; nothing inside
//! the library converts units. Contract violations (normalizing a zero
//! vector, inverting a singular matrix, intersecting a line parallel to a
//! plane) are not signaled — they propagate IEEE-754 NaN/Inf, so validate
//! inputs first if NaN downstream is unacceptable.

pub mod frustum;
pub mod geom;
pub mod mat;
pub mod quat;
pub mod vec;

pub use frustum::{Frustum, FrustumCorners};
pub use mat::Mat4;
pub use quat::Quat;
pub use vec::Vec4;

/// Converts degrees to radians.
///
/// # Example
/// ```
/// use orrery::deg_to_rad;
///
/// assert!((deg_to_rad(180.0) - std::f32::consts::PI).abs() < 1e-6);
/// ```
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

/// Converts radians to degrees.
///
/// # Example
/// ```
/// use orrery::rad_to_deg;
///
/// assert!((rad_to_deg(std::f32::consts::PI) - 180.0).abs() < 1e-4);
/// ```
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * (180.0 / std::f32::consts::PI)
}
