/// Reflection across an infinite plane given by a point and a unit normal.

use glam::Vec3;

/// Reflect a point across the plane through `p0` with unit normal `n`.
///
/// `p - 2 * dot(n, p - p0) * n`
#[inline]
pub fn reflect_point(p: Vec3, p0: Vec3, n: Vec3) -> Vec3 {
    p - 2.0 * n.dot(p - p0) * n
}

/// Reflect a direction across a plane with unit normal `n`.
///
/// `v - 2 * dot(n, v) * n`. Translation-free, so only the normal matters.
#[inline]
pub fn reflect_vector(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * n.dot(v) * n
}

#[cfg(test)]
#[path = "reflect_tests.rs"]
mod tests;
