//! Small numeric toolkit shared by the grid field and the profile buffer.
//!
//! Vectors come from `glam`; this module adds the pieces glam does not
//! provide: interpolation combinators over integer-indexed samplers, cyclic
//! index wrapping, and the midpoint quadrature used for spectral integrals.

mod interpolation;
mod quadrature;

pub use glam::{DVec4, Vec2, Vec3, Vec4};
pub use interpolation::{bilinear, linear, Lerp};
pub use quadrature::{integrate_with_step, midpoint_nodes};

/// Wrap an integer index into `[0, n)`, including negative indices.
///
/// `n` must be positive.
#[inline]
pub fn pos_modulo(i: i64, n: usize) -> usize {
    i.rem_euclid(n as i64) as usize
}
