//! Uniform sampling of directions over the whole unit sphere

use crate::{utils::debug_assert_canonical, Float, Vector2, Vector3};

/// Maps a canonical sample in `[0, 1)^2` to a direction over the unit sphere with the uniform
/// density `1 / (4 pi)`. See [`sample_sphere_uniform_pdf`].
///
/// `s.x` selects the azimuth in the xz-plane, `s.y` the height along the y-axis.
#[must_use]
pub fn sample_sphere_uniform<T: Float, V: Vector2<Scalar = T>>(s: V) -> T::Vec3 {
    let (s0, s1) = (s.x(), s.y());
    debug_assert_canonical!(s0, s1);

    let u = T::TWO_PI * s0;
    let v = T::TWO * (s1 * (T::ONE - s1)).sqrt();
    let (sin_u, cos_u) = u.sin_cos();

    #[allow(clippy::suboptimal_flops)]
    let d = T::Vec3::new(cos_u * v, T::ONE - T::TWO * s1, sin_u * v);

    debug_assert!(d.is_normalized(), "{d:?} is not normalized");
    d
}

/// The density of [`sample_sphere_uniform`] with respect to solid angle
#[must_use]
pub fn sample_sphere_uniform_pdf<T: Float>() -> T {
    T::ONE / (T::TWO * T::TWO_PI)
}
