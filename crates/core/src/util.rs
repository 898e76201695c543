/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took, and evaluates to the value of the
/// expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Format a number for an SVG attribute. This is the same shortest
/// round-trip representation as `Display`, except:
///
/// - Negative zero comes out as `0`
/// - Very small and very large magnitudes use exponent notation (`1e-15`,
///   `1e+21`) rather than dozens of zeroes, matching how browsers stringify
///   numbers
pub fn format_number(value: f64) -> String {
    // Adding positive zero turns -0 into +0 and leaves everything else alone
    let value = value + 0.0;
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{value:e}");
        // Rust leaves off the + on positive exponents
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-10.0), "-10");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(8.5), "8.5");
        assert_eq!(format_number(1.2246467991473533e-15), "1.2246467991473533e-15");
        assert_eq!(format_number(-2.5e-7), "-2.5e-7");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_timed() {
        let value = timed!("Adding", 1 + 1);
        assert_eq!(value, 2);
    }
}
