//! Numeric conversion helpers used across the kernel.
//!
//! These utilities guard conversions between floating-point and integer
//! domains. They rely on debug assertions to flag unexpected overflows while
//! keeping the call-sites ergonomic.

/// Size of the noise lattice along each axis.
pub const LATTICE_SIZE: i64 = 256;

/// Convert a finite `f64` into `f32`, asserting that it fits the target type.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Callers assert that the value fits within f32 bounds."
)]
#[must_use]
pub fn expect_f32(value: f64) -> f32 {
    debug_assert!(value.is_finite(), "expected finite f64 for f32 conversion");
    debug_assert!(
        value.abs() <= f64::from(f32::MAX),
        "f64 value {value} exceeds the f32 range"
    );
    value as f32
}

/// Floor `value` and wrap it onto the noise lattice, yielding `0..=255`.
///
/// Negative cells wrap the same way a two's complement mask would, so `-1`
/// maps to `255`. Non-finite input lands on cell zero.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The floored value is clamped to i64 and reduced into 0..256."
)]
#[must_use]
pub fn lattice_cell(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    // i64 bounds are not exactly representable; the saturating cast handles the edges.
    let floored = value.floor() as i64;
    floored.rem_euclid(LATTICE_SIZE) as usize
}

/// Map an identity hash onto a time offset in `(-10, 10)` with a 0.01 step.
///
/// The remainder keeps the sign of the hash so negative hashes yield
/// negative offsets.
#[must_use]
pub fn hash_time_offset(hash: i32) -> f64 {
    f64::from(hash % 1000) / 100.0
}

/// Widen a lattice index read from the permutation table into `usize`.
#[must_use]
pub fn table_index(value: u8) -> usize {
    usize::from(value)
}
