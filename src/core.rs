use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// used for sample points and directions in double precision
pub type Vec3d = glam::f64::DVec3;
/// used for sample points in double precision
pub type Vec2d = glam::f64::DVec2;

/// used for sample points and directions in single precision
pub type Vec3f = glam::f32::Vec3;
/// used for sample points in single precision
pub type Vec2f = glam::f32::Vec2;

/// Floating point scalar the warps are generic over. Implemented for [f32] and [f64], each
/// paired with the matching [glam] vector types.
///
/// All warps are written once against this trait and monomorphized per precision. The formulas
/// are identical, only the precision of the literals differs.
pub trait Float:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The 2d vector type with this scalar, e.g. [`Vec2d`] for [f64]
    type Vec2: Vector2<Scalar = Self> + Add<Output = Self::Vec2> + Mul<Self, Output = Self::Vec2>;
    /// The 3d vector type with this scalar, e.g. [`Vec3d`] for [f64]
    type Vec3: Vector3<Scalar = Self>;

    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const PI: Self;
    const TWO_PI: Self;
    const FRAC_PI_2: Self;
    const FRAC_PI_4: Self;
    const FRAC_1_PI: Self;
    const EPSILON: Self;

    #[must_use]
    fn abs(self) -> Self;
    #[must_use]
    fn sqrt(self) -> Self;
    #[must_use]
    fn powf(self, n: Self) -> Self;
    /// Returns `(sin, cos)`
    #[must_use]
    fn sin_cos(self) -> (Self, Self);
    #[must_use]
    fn from_usize(n: usize) -> Self;
    /// Truncates towards zero. Negative values and NaN saturate to `0`.
    #[must_use]
    fn to_usize(self) -> usize;

    #[must_use]
    fn sq(self) -> Self {
        self * self
    }
}

/// Generic access to the [glam] 2d vectors
pub trait Vector2: Copy + Debug + PartialEq {
    type Scalar: Float;

    #[must_use]
    fn new(x: Self::Scalar, y: Self::Scalar) -> Self;
    #[must_use]
    fn x(self) -> Self::Scalar;
    #[must_use]
    fn y(self) -> Self::Scalar;
}

/// Generic access to the [glam] 3d vectors
pub trait Vector3: Copy + Debug + PartialEq {
    type Scalar: Float;

    #[must_use]
    fn new(x: Self::Scalar, y: Self::Scalar, z: Self::Scalar) -> Self;
    #[must_use]
    fn x(self) -> Self::Scalar;
    #[must_use]
    fn y(self) -> Self::Scalar;
    #[must_use]
    fn z(self) -> Self::Scalar;
    /// Unit length check with the tolerance [glam] uses for this precision
    #[must_use]
    fn is_normalized(self) -> bool;
}

macro_rules! impl_float {
    ($scalar:ident, $vec2:ty, $vec3:ty) => {
        impl Float for $scalar {
            type Vec2 = $vec2;
            type Vec3 = $vec3;

            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const PI: Self = std::$scalar::consts::PI;
            const TWO_PI: Self = std::$scalar::consts::TAU;
            const FRAC_PI_2: Self = std::$scalar::consts::FRAC_PI_2;
            const FRAC_PI_4: Self = std::$scalar::consts::FRAC_PI_4;
            const FRAC_1_PI: Self = std::$scalar::consts::FRAC_1_PI;
            const EPSILON: Self = $scalar::EPSILON;

            fn abs(self) -> Self {
                $scalar::abs(self)
            }

            fn sqrt(self) -> Self {
                $scalar::sqrt(self)
            }

            fn powf(self, n: Self) -> Self {
                $scalar::powf(self, n)
            }

            fn sin_cos(self) -> (Self, Self) {
                $scalar::sin_cos(self)
            }

            #[allow(clippy::cast_precision_loss)]
            fn from_usize(n: usize) -> Self {
                n as Self
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn to_usize(self) -> usize {
                self as usize
            }
        }

        impl Vector2 for $vec2 {
            type Scalar = $scalar;

            fn new(x: $scalar, y: $scalar) -> Self {
                Self { x, y }
            }
            fn x(self) -> $scalar {
                self.x
            }
            fn y(self) -> $scalar {
                self.y
            }
        }

        impl Vector3 for $vec3 {
            type Scalar = $scalar;

            fn new(x: $scalar, y: $scalar, z: $scalar) -> Self {
                Self { x, y, z }
            }
            fn x(self) -> $scalar {
                self.x
            }
            fn y(self) -> $scalar {
                self.y
            }
            fn z(self) -> $scalar {
                self.z
            }
            fn is_normalized(self) -> bool {
                <$vec3>::is_normalized(self)
            }
        }
    };
}

impl_float!(f32, Vec2f, Vec3f);
impl_float!(f64, Vec2d, Vec3d);

