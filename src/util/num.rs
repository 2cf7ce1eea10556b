/// Formats a number the way the interpreter displays it.
///
/// Uses the shortest decimal text that round-trips to the same `f64`, with a
/// trailing `.0` removed so integral values print without a fractional part.
/// Exponent notation is never produced, which keeps the output valid source
/// text for finite values.
///
/// ## Example
/// ```
/// use treelox::util::num::format_number;
///
/// assert_eq!(format_number(6.0), "6");
/// assert_eq!(format_number(6.5), "6.5");
/// assert_eq!(format_number(-0.25), "-0.25");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    let text = value.to_string();

    match text.strip_suffix(".0") {
        Some(integral) => integral.to_string(),
        None => text,
    }
}
