/// Renders an operand value the way the calculator reports results.
///
/// Integral values keep a trailing `.0`, so `7` renders as `"7.0"`;
/// fractional values render in their shortest exact decimal form. Very large
/// magnitudes fall back to exponent notation, and non-finite values render
/// as `inf`, `-inf` or `NaN`.
///
/// # Example
/// ```
/// use postfixa::util::num::format_value;
///
/// assert_eq!(format_value(7.0), "7.0");
/// assert_eq!(format_value(-2.5), "-2.5");
/// assert_eq!(format_value(0.0), "0.0");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    // The `Debug` form of `f64` is the shortest representation that round
    // trips and keeps the trailing `.0` on integral values.
    format!("{value:?}")
}
