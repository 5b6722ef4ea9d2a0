/// Render a number the way result panels show it.
///
/// Integral values drop the fractional part, negative zero prints as `0` and
/// non-finite values use the `Infinity` / `NaN` spelling.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }
    // f64 Display never emits exponents and prints integral values without ".0"
    value.to_string()
}

/// Join numbers with ", " for single-line display
pub fn join_numbers(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn join_integers(values: &[u64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse an operand typed by the user.
///
/// Text that is not a number yields NaN so the evaluator can reject it with
/// its own message instead of the parser's.
pub fn parse_operand(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
