use crate::Float;

/// `true` if `s` lies in the half open unit interval `[0, 1)`
#[must_use]
pub fn is_canonical<T: Float>(s: T) -> bool {
    s >= T::ZERO && s < T::ONE
}

/// Checks that every given scalar is a canonical sample. Only active in debug builds.
macro_rules! debug_assert_canonical {
    ($($s:expr),+ $(,)?) => {
        $(
            debug_assert!(
                $crate::utils::is_canonical($s),
                "canonical sample {} must be in [0, 1), got {:?}",
                stringify!($s),
                $s
            );
        )+
    };
}

pub(crate) use debug_assert_canonical;
