use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Plain decimal or exponent notation, optional sign
    static ref NUMERIC_RE: Regex =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap();
}

// Coerce user input to a number: blank input is zero, anything that is not a
// decimal number is NaN
pub fn coerce_amount(input: &str) -> f64 {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return 0.0;
    }

    if !NUMERIC_RE.is_match(trimmed) {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

// Input that is present and parses as a number (zero and negatives included)
pub fn is_numeric_amount(input: &str) -> bool {
    !input.trim().is_empty() && !coerce_amount(input).is_nan()
}

// Input that a swap accepts
pub fn is_positive_amount(input: &str) -> bool {
    is_numeric_amount(input) && coerce_amount(input) > 0.0
}

// Fixed-point rendering; non-finite values are spelled out instead of Rust's "inf".
// Large magnitudes stay in positional notation, with no switch to exponent form.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{:.*}", decimals, value)
    }
}

// Input that is only an amount, e.g. "1.5" typed without a command
pub fn looks_like_amount(input: &str) -> bool {
    NUMERIC_RE.is_match(input.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_amount() {
        assert_eq!(coerce_amount(""), 0.0);
        assert_eq!(coerce_amount("  "), 0.0);
        assert_eq!(coerce_amount("10"), 10.0);
        assert_eq!(coerce_amount(" 2.5 "), 2.5);
        assert_eq!(coerce_amount(".5"), 0.5);
        assert_eq!(coerce_amount("5."), 5.0);
        assert_eq!(coerce_amount("1e3"), 1000.0);
        assert_eq!(coerce_amount("-4"), -4.0);
        assert!(coerce_amount("abc").is_nan());
        assert!(coerce_amount("12abc").is_nan());
        assert!(coerce_amount("inf").is_nan());
        assert!(coerce_amount("NaN").is_nan());
    }

    #[test]
    fn test_amount_predicates() {
        assert!(is_numeric_amount("0"));
        assert!(!is_numeric_amount(""));
        assert!(!is_numeric_amount("abc"));

        assert!(is_positive_amount("10"));
        assert!(is_positive_amount("0.0001"));
        assert!(!is_positive_amount("0"));
        assert!(!is_positive_amount("-1"));
        assert!(!is_positive_amount(""));
        assert!(!is_positive_amount("abc"));
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(200000.0, 6), "200000.000000");
        assert_eq!(format_fixed(0.1234567, 6), "0.123457");
        assert_eq!(format_fixed(f64::NAN, 6), "NaN");
        assert_eq!(format_fixed(f64::INFINITY, 6), "Infinity");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 6), "-Infinity");
    }

    #[test]
    fn test_large_values_and_spelled_out_infinity() {
        assert_eq!(format_fixed(1e21, 2), "1000000000000000000000.00");
        assert!(coerce_amount("Infinity").is_nan());
        assert!(!is_numeric_amount("-Infinity"));
    }

    #[test]
    fn test_looks_like_amount() {
        assert!(looks_like_amount("12.5"));
        assert!(!looks_like_amount("swap"));
        assert!(!looks_like_amount("from ETH"));
    }
}
