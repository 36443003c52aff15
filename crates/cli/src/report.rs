//! Result formatting.

use std::fmt;

/// Displays a value in C-style scientific notation.
///
/// Six fractional digits and a signed exponent of at least two digits, e.g.
/// `1.920100e-02`. Non-finite values display as `inf`, `-inf` or `nan`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scientific(pub f64);

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
        }

        let formatted = format!("{value:.6e}");
        let Some((mantissa, exponent)) = formatted.split_once('e') else {
            return f.write_str(&formatted);
        };
        let Ok(exponent) = exponent.parse::<i32>() else {
            return f.write_str(&formatted);
        };

        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}
