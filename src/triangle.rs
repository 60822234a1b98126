//! Uniform sampling of triangles

use crate::{utils::debug_assert_canonical, Float, Vector2, Vector3};

/// Maps a canonical sample in `[0, 1)^2` to a point on the surface of a triangle with the uniform
/// density `1 / area`. See [`sample_triangle_uniform_pdf`].
///
/// The point is returned as barycentric coordinates `(b0, b1, b2)` with `b0 + b1 + b2 = 1`, so it
/// works for triangles of any size and orientation. The point itself is
/// `b0 * v0 + b1 * v1 + b2 * v2` for the vertices `v0`, `v1` and `v2`.
#[must_use]
pub fn sample_triangle_uniform<T: Float, V: Vector2<Scalar = T>>(s: V) -> T::Vec3 {
    let (s0, s1) = (s.x(), s.y());
    debug_assert_canonical!(s0, s1);

    let sqrt_s0 = s0.sqrt();
    let b = T::Vec3::new(T::ONE - sqrt_s0, (T::ONE - s1) * sqrt_s0, s1 * sqrt_s0);

    debug_assert!(
        (b.x() + b.y() + b.z() - T::ONE).abs() <= T::from_usize(8) * T::EPSILON,
        "barycentric coordinates {b:?} do not sum to 1"
    );
    b
}

/// The density of [`sample_triangle_uniform`] with respect to area, for a triangle with the given
/// `area`
#[must_use]
pub fn sample_triangle_uniform_pdf<T: Float>(area: T) -> T {
    T::ONE / area
}
