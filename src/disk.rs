//! Sampling of the unit circle and the unit disk
//!
//! Two disk warps are provided. [`sample_disk_uniform`] is the concentric mapping by Shirley and
//! Chiu. It maps concentric squares to concentric circles and therefore keeps the relative
//! positions of stratified or low discrepancy samples intact. [`sample_disk_uniform_alt`] is a
//! plain polar mapping. It is about twice as fast but strongly distorts the area around the
//! center of the disk, which is fine for purely random or even QMC sampling.
//!
//! # References
//! * Peter Shirley and Kenneth Chiu. A low distortion map between disk and square. *Journal of
//!     Graphics Tools, 2(3):45–52,* 1997.

use crate::{utils::debug_assert_canonical, Float, Vector2};

/// Maps a canonical sample in `[0, 1)` to a point on the unit circle with the uniform density
/// `1 / (2 pi)`. See [`sample_circle_uniform_pdf`].
#[must_use]
pub fn sample_circle_uniform<T: Float>(s: T) -> T::Vec2 {
    debug_assert_canonical!(s);

    let phi = s * T::TWO_PI;
    let (sin_phi, cos_phi) = phi.sin_cos();
    T::Vec2::new(cos_phi, sin_phi)
}

/// The density of [`sample_circle_uniform`] with respect to arc length
#[must_use]
pub fn sample_circle_uniform_pdf<T: Float>() -> T {
    T::ONE / T::TWO_PI
}

/// Maps a canonical sample in `[0, 1)^2` to a point on the unit disk with the uniform density
/// `1 / pi` using the concentric mapping. See [`sample_disk_uniform_pdf`].
#[must_use]
pub fn sample_disk_uniform<T: Float, V: Vector2<Scalar = T>>(s: V) -> T::Vec2 {
    let (s0, s1) = (s.x(), s.y());
    debug_assert_canonical!(s0, s1);

    let a = T::TWO * s0 - T::ONE;
    let b = T::TWO * s1 - T::ONE;

    // the wedges left/right and above/below the diagonals are mapped separately. On the
    // diagonals |a| = |b| both branches produce the same angle.
    let (r, phi) = if a * a > b * b {
        (a, T::FRAC_PI_4 * (b / a))
    } else if b == T::ZERO {
        // a = b = 0, the center of the square. The unguarded formula yields a / b = NaN here and
        // returns (NaN, NaN), keep this branch when porting the mapping bit for bit
        (T::ZERO, T::ZERO)
    } else {
        (b, T::FRAC_PI_2 - T::FRAC_PI_4 * (a / b))
    };

    let (sin_phi, cos_phi) = phi.sin_cos();
    T::Vec2::new(r * cos_phi, r * sin_phi)
}

/// Maps a canonical sample in `[0, 1)^2` to a point on the unit disk with the uniform density
/// `1 / pi` using a polar mapping. See [`sample_disk_uniform_pdf`].
///
/// Cheaper than [`sample_disk_uniform`], but samples that are close in the square are not
/// necessarily close on the disk, especially near its center.
#[must_use]
pub fn sample_disk_uniform_alt<T: Float, V: Vector2<Scalar = T>>(s: V) -> T::Vec2 {
    let (s0, s1) = (s.x(), s.y());
    debug_assert_canonical!(s0, s1);

    let r = (T::ONE - s1).sqrt();
    let phi = s0 * T::TWO_PI;
    let (sin_phi, cos_phi) = phi.sin_cos();
    T::Vec2::new(r * cos_phi, r * sin_phi)
}

/// The density of [`sample_disk_uniform`] and [`sample_disk_uniform_alt`] with respect to area
#[must_use]
pub fn sample_disk_uniform_pdf<T: Float>() -> T {
    T::FRAC_1_PI
}
