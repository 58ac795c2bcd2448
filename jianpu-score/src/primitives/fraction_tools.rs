//! Tools for moving between floats and fractions as musical lengths.

use fraction::Fraction;

/// Quantize a float to the closest fraction with the given denominator.
///
/// Returns `None` for non-finite input or zero limit.
///
/// # Example
/// ```
/// # use fraction::Fraction;
/// # use jianpu_score::primitives::limit_denominator;
/// assert_eq!(
///     limit_denominator(0.125, 128),
///     Some(Fraction::new(1u64, 8u64))
/// );
/// assert_eq!(
///     limit_denominator(1.0 / 129.0, 128),
///     Some(Fraction::new(1u64, 128u64))
/// );
/// assert_eq!(limit_denominator(f64::NAN, 128), None);
/// ```
pub fn limit_denominator(value: f64, limit: u64) -> Option<Fraction> {
    if !value.is_finite() || limit == 0 {
        return None;
    }
    let scaled = (value.abs() * limit as f64).round() as u64;
    let frac = Fraction::new(scaled, limit);
    match value.is_sign_negative() && scaled != 0 {
        true => Some(-frac),
        false => Some(frac),
    }
}

/// Lossy conversion for the wire format.
pub fn fraction_to_f64(frac: Fraction) -> Option<f64> {
    let value = *frac.numer()? as f64 / *frac.denom()? as f64;
    match frac.is_sign_negative() {
        true => Some(-value),
        false => Some(value),
    }
}

/// `numerator / denominator`, rounded to the nearest integer with halves
/// going up.
pub fn round_half_up(numerator: u64, denominator: u64) -> Option<u64> {
    if denominator == 0 {
        return None;
    }
    Some((2 * numerator + denominator) / (2 * denominator))
}
