//! Sampling of directions over the upper unit hemisphere
//!
//! The pole of the hemisphere is the positive y-axis, the azimuth is measured in the xz-plane.
//! All densities are with respect to solid angle and `theta` denotes the angle to the pole,
//! therefore `cos_theta` is simply the y-component of a sampled direction.

use crate::{utils::debug_assert_canonical, Float, Vector2, Vector3};

/// Maps a canonical sample in `[0, 1)^2` to a direction over the hemisphere with the uniform
/// density `1 / (2 pi)`. See [`sample_hemisphere_uniform_pdf`].
#[must_use]
pub fn sample_hemisphere_uniform<T: Float, V: Vector2<Scalar = T>>(s: V) -> T::Vec3 {
    let (s0, s1) = (s.x(), s.y());
    debug_assert_canonical!(s0, s1);

    // flipped, so that s1 = 0 maps to the pole instead of the horizon
    let s1 = T::ONE - s1;
    let u = T::TWO_PI * s0;
    let v = (T::ONE - s1.sq()).sqrt();
    let (sin_u, cos_u) = u.sin_cos();

    let d = T::Vec3::new(cos_u * v, s1, sin_u * v);

    debug_assert!(d.is_normalized(), "{d:?} is not normalized");
    d
}

/// The density of [`sample_hemisphere_uniform`]
#[must_use]
pub fn sample_hemisphere_uniform_pdf<T: Float>() -> T {
    T::ONE / T::TWO_PI
}

/// Maps a canonical sample in `[0, 1)^2` to a direction over the hemisphere with the cosine
/// weighted density `cos(theta) / pi`. See [`sample_hemisphere_cosine_pdf`].
///
/// This is the distribution to importance sample diffuse reflection with. The direction is
/// obtained by lifting a uniformly distributed point on the unit disk onto the hemisphere.
#[must_use]
pub fn sample_hemisphere_cosine<T: Float, V: Vector2<Scalar = T>>(s: V) -> T::Vec3 {
    let (s0, s1) = (s.x(), s.y());
    debug_assert_canonical!(s0, s1);

    let u = T::TWO_PI * s0;
    let v = s1.sqrt();
    let (sin_u, cos_u) = u.sin_cos();

    let d = T::Vec3::new(cos_u * v, (T::ONE - s1).sqrt(), sin_u * v);

    debug_assert!(d.is_normalized(), "{d:?} is not normalized");
    d
}

/// The density of [`sample_hemisphere_cosine`] for a direction with the given `cos_theta`
#[must_use]
pub fn sample_hemisphere_cosine_pdf<T: Float>(cos_theta: T) -> T {
    if cos_theta > T::ZERO {
        cos_theta * T::FRAC_1_PI
    } else {
        T::ZERO
    }
}

/// Maps a canonical sample in `[0, 1)^2` to a direction over the hemisphere with the density of
/// a cosine lobe `(n + 1) / (2 pi) * cos(theta)^n`. See [`sample_hemisphere_cosine_power_pdf`].
///
/// # Arguments
/// * `s` - canonical sample
/// * `n` - exponent of the lobe, must not be negative. `0` yields the uniform hemisphere, large
///     exponents concentrate the lobe around the pole.
#[must_use]
pub fn sample_hemisphere_cosine_power<T: Float, V: Vector2<Scalar = T>>(s: V, n: T) -> T::Vec3 {
    let (s0, s1) = (s.x(), s.y());
    debug_assert_canonical!(s0, s1);
    debug_assert!(n >= T::ZERO, "cosine lobe exponent must not be negative, got {n:?}");

    let s1 = T::ONE - s1;
    let u = T::TWO_PI * s0;
    let v = T::ONE / (n + T::ONE);
    // sin(theta) from cos(theta)^2 = s1^(2v)
    let w = (T::ONE - s1.powf(T::TWO * v)).sqrt();
    let (sin_u, cos_u) = u.sin_cos();

    let d = T::Vec3::new(cos_u * w, s1.powf(v), sin_u * w);

    debug_assert!(d.is_normalized(), "{d:?} is not normalized");
    d
}

/// The density of [`sample_hemisphere_cosine_power`] with exponent `n` for a direction with the
/// given `cos_theta`
#[must_use]
pub fn sample_hemisphere_cosine_power_pdf<T: Float>(cos_theta: T, n: T) -> T {
    if cos_theta > T::ZERO {
        (n + T::ONE) / T::TWO_PI * cos_theta.powf(n)
    } else {
        T::ZERO
    }
}
