//! Plain number handling for form input and labels.

/// Coerce raw form input into a number the arithmetic can use.
///
/// Reads the longest numeric prefix (`"12.5kg"` → `12.5`), ignoring leading
/// whitespace. Input without a numeric prefix, and any input that reads as
/// NaN or zero, yields `0.0`.
pub fn coerce_number(input: &str) -> f64 {
    let value = numeric_prefix(input.trim_start())
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(0.0);
    if value.is_nan() || value == 0.0 { 0.0 } else { value }
}

/// Longest prefix of `s` that forms a decimal literal (or `Infinity`).
fn numeric_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(&s[..end + "Infinity".len()]);
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

/// Render a plain number for labels such as `Tax (7.5%)` or a quantity column.
///
/// Integral values print without a fraction (`15`), negative zero prints as
/// `0`, infinities as `Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_field_coerces_to_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("-"), 0.0);
        assert_eq!(coerce_number("."), 0.0);
    }

    #[test]
    fn numeric_prefix_is_read() {
        assert_eq!(coerce_number("15"), 15.0);
        assert_eq!(coerce_number("  7.5"), 7.5);
        assert_eq!(coerce_number("12.5kg"), 12.5);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("5."), 5.0);
        assert_eq!(coerce_number("-3"), -3.0);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number("2e"), 2.0);
        assert_eq!(coerce_number("1,000"), 1.0);
    }

    #[test]
    fn negative_zero_and_infinity() {
        assert!(coerce_number("-0").is_sign_positive());
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn plain_number_labels() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(7.5), "7.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
    }
}
