use std::fmt;

pub const TOTAL_PREFIX: &str = "Total Pagar: ";
pub const PROCESSING_PREFIX: &str = "Processando: ";

/// Plain notation covers magnitudes in `[PLAIN_MIN, PLAIN_MAX)`.
const PLAIN_MIN: f64 = 1e-3;
const PLAIN_MAX: f64 = 1e7;

/// Smallest positive subnormal; the JVM renders it with two digits.
const MIN_SUBNORMAL: f64 = f64::from_bits(1);

/// A final value rendered in the classic JVM decimal text form.
///
/// Integral values keep a trailing `.0` (`100.0`), magnitudes outside
/// `[1e-3, 1e7)` switch to `E` notation (`1.0E7`), and non-finite values print
/// as `NaN`, `Infinity` and `-Infinity`. Digits are the shortest round-trip
/// representation, except the smallest subnormal which prints as `4.9E-324`.
/// No rounding is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinalValue(pub f64);

impl fmt::Display for FinalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }

        let magnitude = value.abs();
        if magnitude == MIN_SUBNORMAL {
            let sign = if value.is_sign_negative() { "-" } else { "" };
            return write!(f, "{sign}4.9E-324");
        }

        if magnitude == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
            let digits = value.to_string();
            if digits.contains('.') {
                f.write_str(&digits)
            } else {
                write!(f, "{digits}.0")
            }
        } else {
            let scientific = format!("{value:e}");
            let (mantissa, exponent) = scientific
                .split_once('e')
                .unwrap_or((scientific.as_str(), "0"));
            if mantissa.contains('.') {
                write!(f, "{mantissa}E{exponent}")
            } else {
                write!(f, "{mantissa}.0E{exponent}")
            }
        }
    }
}
