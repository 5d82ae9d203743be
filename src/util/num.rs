/// Value produced by x86 `cvttsd2si` when a float does not fit an `i32`.
///
/// NaN and out-of-range quotients truncate to this "integer indefinite"
/// value instead of saturating.
pub const INTEGER_INDEFINITE: i32 = i32::MIN;

/// Truncates `value` toward zero through a 32-bit signed integer and widens
/// the result back to `f64`.
///
/// This mirrors an unchecked `(double)(int)quotient` cast: NaN and quotients
/// outside the `i32` range become [`INTEGER_INDEFINITE`]. Large quotients are
/// therefore not preserved.
///
/// ## Example
/// ```
/// use quill::util::num::truncate_through_i32;
///
/// assert_eq!(truncate_through_i32(7.9), 7.0);
/// assert_eq!(truncate_through_i32(-7.9), -7.0);
/// assert_eq!(truncate_through_i32(3.0e10), f64::from(i32::MIN));
/// assert_eq!(truncate_through_i32(f64::NAN), f64::from(i32::MIN));
/// ```
#[must_use]
pub fn truncate_through_i32(value: f64) -> f64 {
    f64::from(f64_to_i32_checked(value.trunc()).unwrap_or(INTEGER_INDEFINITE))
}

/// Converts an integral `f64` to `i32` when it lies within range.
///
/// ## Returns
/// - `Some(i32)`: If `value` is finite and within `i32` bounds.
/// - `None`: Otherwise. Fractional parts are discarded by the `as` cast, so
///   callers round or truncate first.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i32_checked(value: f64) -> Option<i32> {
    if value.is_nan() || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    Some(value as i32)
}

/// Converts an integral `f64` to `i64` when it lies within range.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_checked(value: f64) -> Option<i64> {
    // 2^63 is exactly representable; i64::MAX is not.
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    if value.is_nan() || value < -UPPER || value >= UPPER {
        return None;
    }
    Some(value as i64)
}

/// Rounds `value` to the nearest integer, ties to even, and narrows it to
/// `i32`.
///
/// ## Example
/// ```
/// use quill::util::num::round_to_i32;
///
/// assert_eq!(round_to_i32(2.5), Some(2));
/// assert_eq!(round_to_i32(3.5), Some(4));
/// assert_eq!(round_to_i32(1.0e12), None);
/// ```
#[must_use]
pub fn round_to_i32(value: f64) -> Option<i32> {
    f64_to_i32_checked(value.round_ties_even())
}

/// Rounds `value` to the nearest integer, ties to even, and narrows it to
/// `i64`.
#[must_use]
pub fn round_to_i64(value: f64) -> Option<i64> {
    f64_to_i64_checked(value.round_ties_even())
}

/// Turns a signed repetition count into a `usize`; counts of zero or less
/// repeat nothing.
///
/// ## Example
/// ```
/// use quill::util::num::repeat_count;
///
/// assert_eq!(repeat_count(3), 3);
/// assert_eq!(repeat_count(-2), 0);
/// ```
#[must_use]
pub fn repeat_count(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}

/// Longest string, in bytes, that string repetition may produce.
pub const MAX_REPEAT_LENGTH: usize = i32::MAX as usize;

/// Byte length of `len`-byte text repeated `count` times, or `None` when it
/// exceeds [`MAX_REPEAT_LENGTH`].
///
/// ## Example
/// ```
/// use quill::util::num::repeated_length;
///
/// assert_eq!(repeated_length(2, 3), Some(6));
/// assert_eq!(repeated_length(0, usize::MAX), Some(0));
/// assert_eq!(repeated_length(2, usize::MAX), None);
/// ```
#[must_use]
pub fn repeated_length(len: usize, count: usize) -> Option<usize> {
    len.checked_mul(count).filter(|total| *total <= MAX_REPEAT_LENGTH)
}
