pub trait ApproxEqual: Copy {
    fn equals_approx(self, other: Self, eps: Self, eps_rel: Self) -> bool;
    fn equals_approx_abs(self, other: Self, eps: Self) -> bool;
    fn equals_approx_rel(self, other: Self, eps: Self) -> bool;
}

macro_rules! assert_eq_approx {
    ($lhs:expr, $rhs:expr, $eps_abs:expr, $eps_rel:expr) => {
        assert!(
            $crate::test_utils::ApproxEqual::equals_approx($lhs, $rhs, $eps_abs, $eps_rel),
            r#"assert_eq_abs failed:
    {}: {:?}
    {}: {:?}
    {} (maximum absolute error): {:?}
    {} (maximum relative error): {:?}"#,
            stringify!($lhs),
            $lhs,
            stringify!($rhs),
            $rhs,
            stringify!($eps_abs),
            $eps_abs,
            stringify!($eps_rel),
            $eps_rel,
        );
    };

    ($lhs:expr, $rhs:expr, $eps_abs: expr, $eps_rel:expr, $($arg:tt)+) => {
        assert!($crate::test_utils::ApproxEqual::equals_approx($lhs, $rhs, $eps_abs, $eps_rel), $($arg)*);
    }
}

macro_rules! assert_eq_approx_abs {
    ($lhs:expr, $rhs:expr, $eps_abs:expr) => {
        assert!(
            $crate::test_utils::ApproxEqual::equals_approx_abs($lhs, $rhs, $eps_abs),
            r#"assert_eq_abs failed:
    {}: {:?}
    {}: {:?}
    {} (maximum absolute error): {:?}"#,
            stringify!($lhs),
            $lhs,
            stringify!($rhs),
            $rhs,
            stringify!($eps_abs),
            $eps_abs,
        )
    };

    ($lhs:expr, $rhs:expr, $eps_abs:expr, $($arg:tt)+) => {
        assert!($crate::test_utils::ApproxEqual::equals_approx_abs($lhs, $rhs, $eps_abs),
        $($arg)*);
    };
}

macro_rules! assert_in_range {
    ($value:expr, $lower:expr, $upper:expr) => {
        assert!(
            $lower <= $value && $value <= $upper,
            r#"assert_in_range failed:
    {} (value): {:?}
    {} (lower bound): {:?}
    {} (upper bound): {:?}"#,
            stringify!($value),
            $value,
            stringify!($lower),
            $lower,
            stringify!($upper),
            $upper
        )
    };
}

macro_rules! impl_approx_equal_scalar {
    ($scalar:ty) => {
        impl ApproxEqual for $scalar {
            fn equals_approx(self, other: Self, eps: Self, eps_rel: Self) -> bool {
                #[allow(clippy::float_cmp)]
                if self == other || (self - other).abs() <= eps {
                    true
                } else {
                    let diff = (self - other).abs();
                    let max = self.abs().max(other.abs());
                    diff <= max * eps_rel
                }
            }

            fn equals_approx_abs(self, other: Self, eps: Self) -> bool {
                #[allow(clippy::float_cmp)]
                if self == other {
                    true
                } else {
                    (self - other).abs() <= eps
                }
            }

            fn equals_approx_rel(self, other: Self, eps: Self) -> bool {
                #[allow(clippy::float_cmp)]
                if self == other {
                    return true;
                }
                let diff = (self - other).abs();
                let max = self.abs().max(other.abs());
                diff <= max * eps
            }
        }
    };
}

macro_rules! impl_approx_equal_vector {
    ($vector:ty, $($c:ident),+) => {
        impl ApproxEqual for $vector {
            fn equals_approx_rel(self, other: Self, eps: Self) -> bool {
                true $(&& ApproxEqual::equals_approx_rel(self.$c, other.$c, eps.$c))+
            }
            fn equals_approx_abs(self, other: Self, eps: Self) -> bool {
                true $(&& ApproxEqual::equals_approx_abs(self.$c, other.$c, eps.$c))+
            }
            fn equals_approx(self, other: Self, eps_abs: Self, eps_rel: Self) -> bool {
                true $(&& ApproxEqual::equals_approx(self.$c, other.$c, eps_abs.$c, eps_rel.$c))+
            }
        }
    };
}

impl_approx_equal_scalar!(f64);
impl_approx_equal_scalar!(f32);
impl_approx_equal_vector!(Vec3d, x, y, z);
impl_approx_equal_vector!(Vec2d, x, y);
impl_approx_equal_vector!(Vec3f, x, y, z);
impl_approx_equal_vector!(Vec2f, x, y);

pub(crate) use assert_eq_approx;
pub(crate) use assert_eq_approx_abs;
pub(crate) use assert_in_range;

use crate::{Vec2d, Vec2f, Vec3d, Vec3f};

pub trait SamplerExt {
    fn vec2d(&mut self) -> Vec2d;
    fn vec3d(&mut self) -> Vec3d;
    fn vec2f(&mut self) -> Vec2f;
}

impl SamplerExt for fastrand::Rng {
    fn vec2d(&mut self) -> Vec2d {
        Vec2d::new(self.f64(), self.f64())
    }

    fn vec3d(&mut self) -> Vec3d {
        Vec3d::new(self.f64(), self.f64(), self.f64())
    }

    fn vec2f(&mut self) -> Vec2f {
        Vec2f::new(self.f32(), self.f32())
    }
}

/** canonical samples at and right next to the boundaries of [0, 1) */
pub fn edge_samples_f64() -> [f64; 7] {
    let below_one = 1.0 - f64::EPSILON / 2.0;
    [0.0, f64::MIN_POSITIVE, 1e-9, 0.25, 0.5, 1.0 - 1e-9, below_one]
}

/** canonical samples at and right next to the boundaries of [0, 1) */
pub fn edge_samples_f32() -> [f32; 7] {
    let below_one = 1.0 - f32::EPSILON / 2.0;
    [0.0, f32::MIN_POSITIVE, 1e-6, 0.25, 0.5, 1.0 - 1e-6, below_one]
}

/** every combination of edge samples plus a batch of random ones */
pub fn test_samples_f64(seed: u64) -> Vec<Vec2d> {
    let mut rd = fastrand::Rng::with_seed(seed);
    let edges = edge_samples_f64();
    let mut samples: Vec<Vec2d> = edges
        .iter()
        .flat_map(|&u| edges.iter().map(move |&v| Vec2d::new(u, v)))
        .collect();
    samples.extend((0..100_000).map(|_| rd.vec2d()));
    samples
}

/** every combination of edge samples plus a batch of random ones */
pub fn test_samples_f32(seed: u64) -> Vec<Vec2f> {
    let mut rd = fastrand::Rng::with_seed(seed);
    let edges = edge_samples_f32();
    let mut samples: Vec<Vec2f> = edges
        .iter()
        .flat_map(|&u| edges.iter().map(move |&v| Vec2f::new(u, v)))
        .collect();
    samples.extend((0..100_000).map(|_| rd.vec2f()));
    samples
}

pub fn test_unit_norm_f64<W: Fn(Vec2d) -> Vec3d>(warp: W) {
    for s in test_samples_f64(0x0dd) {
        let d = warp(s);
        assert_eq_approx_abs!(
            d.length(),
            1.0,
            1e-6,
            r#"
    direction must have unit length.
    s: {s:?},
    d: {d:?},
    length: {}"#,
            d.length()
        );
    }
}

pub fn test_unit_norm_f32<W: Fn(Vec2f) -> Vec3f>(warp: W) {
    for s in test_samples_f32(0x0dd) {
        let d = warp(s);
        assert_eq_approx_abs!(
            d.length(),
            1.0,
            1e-5,
            r#"
    direction must have unit length.
    s: {s:?},
    d: {d:?},
    length: {}"#,
            d.length()
        );
    }
}

/** index of the bin `value` in [0, 1] falls into, out of `bins` equally sized bins */
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn bin_index(value: f64, bins: usize) -> usize {
    ((value * bins as f64) as usize).min(bins - 1)
}

/** azimuth of (x, z) as a fraction of a full turn, in [0, 1) */
pub fn azimuth_fraction(x: f64, z: f64) -> f64 {
    let phi = z.atan2(x) / std::f64::consts::TAU;
    if phi < 0.0 {
        phi + 1.0
    } else {
        phi
    }
}

/** the probabilities of the bins [edges_i, edges_{i+1}) under the given cdf */
pub fn bin_probabilities<F: Fn(f64) -> f64>(bins: usize, cdf: F) -> Vec<f64> {
    (0..bins)
        .map(|i| {
            let lo = i as f64 / bins as f64;
            let hi = (i + 1) as f64 / bins as f64;
            cdf(hi) - cdf(lo)
        })
        .collect()
}

/// Checks that the relative frequency of every bin matches the `expected` probability.
/// Each bin count is binomially distributed, therefore the allowed deviation is derived from its
/// standard error.
#[allow(clippy::cast_precision_loss)]
pub fn test_histogram<I: IntoIterator<Item = usize>>(bin_indices: I, expected: &[f64]) {
    assert_eq_approx_abs!(expected.iter().sum::<f64>(), 1.0, 1e-9);

    let mut counts = vec![0_usize; expected.len()];
    let mut num_samples = 0_usize;
    for i in bin_indices {
        counts[i] += 1;
        num_samples += 1;
    }
    assert!(num_samples > 0);

    for (i, (&count, &p)) in counts.iter().zip(expected).enumerate() {
        let frequency = count as f64 / num_samples as f64;
        let standard_error = (p * (1.0 - p) / num_samples as f64).sqrt();
        let confidence = (4.5 * standard_error).max(1e-6);
        assert_eq_approx_abs!(
            frequency,
            p,
            confidence,
            r#"
    bin {i} deviates from the expected density.
    frequency: {frequency},
    expected: {p},
    standard_error: {standard_error},
    num_samples: {num_samples}"#
        );
    }
}
