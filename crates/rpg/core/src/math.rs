//! Scalar clamp helpers.
//!
//! Generic over [`PartialOrd`] so the same helpers serve integer counters and
//! floating-point vector components.

/// Constrains `v` to the closed interval `[lo, hi]`.
///
/// Evaluated as `clamp_max(clamp_min(v, lo), hi)`. Callers must pass
/// `lo <= hi`; with an inverted range the result is `hi`.
///
/// ```
/// # use rpg_core::math::clamp;
/// assert_eq!(clamp(10, -4, 4), 4);
/// assert_eq!(clamp(-10, -4, 4), -4);
/// assert_eq!(clamp(2, -4, 4), 2);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    clamp_max(clamp_min(v, lo), hi)
}

/// Raises `v` to `lo` if it is below it.
#[inline]
pub fn clamp_min<T: PartialOrd>(v: T, lo: T) -> T {
    if v < lo { lo } else { v }
}

/// Lowers `v` to `hi` if it is above it.
#[inline]
pub fn clamp_max<T: PartialOrd>(v: T, hi: T) -> T {
    if v > hi { hi } else { v }
}

/// Inclusive range test.
#[inline]
pub fn is_clamped<T: PartialOrd>(v: T, lo: T, hi: T) -> bool {
    lo <= v && v <= hi
}
