use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::ParseDecimalError;

/// An exact decimal number.
///
/// The value is `unscaled / 10^scale` and is always stored normalized: the
/// scale is the smallest one that represents the value exactly, so equal
/// values share a single representation and the derived equality is exact.
/// Non-finite values are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    unscaled: BigInt,
    scale: u32,
}

impl Decimal {
    /// Creates the decimal `unscaled / 10^scale`.
    pub fn new(unscaled: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            unscaled: unscaled.into(),
            scale,
        }
        .normalize()
    }

    fn normalize(mut self) -> Self {
        let ten = BigInt::from(10);
        while self.scale > 0 && (&self.unscaled % &ten).is_zero() {
            self.unscaled /= &ten;
            self.scale -= 1;
        }
        self
    }

    /// The number of fractional digits.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Whether the value is a whole number.
    pub fn is_integral(&self) -> bool {
        self.scale == 0
    }

    /// The unscaled value once brought to `scale` fractional digits.
    ///
    /// `scale` must be at least the decimal's own scale.
    pub fn rescaled(&self, scale: u32) -> BigInt {
        &self.unscaled * BigInt::from(10).pow(scale - self.scale)
    }

    /// The exact value as an integer numerator over a power-of-ten scale.
    pub fn as_scaled_int(&self) -> (BigInt, u32) {
        (self.unscaled.clone(), self.scale)
    }

    /// The value as an `i64` when it is a representable whole number.
    pub fn to_i64(&self) -> Option<i64> {
        if self.scale != 0 {
            return None;
        }
        self.unscaled.to_i64()
    }

    /// Whether `self` is an exact integer multiple of `step`.
    pub fn is_multiple_of(&self, step: &Decimal) -> bool {
        let scale = self.scale.max(step.scale);
        (self.rescaled(scale) % step.rescaled(scale)).is_zero()
    }

    /// The exact quotient `self / divisor` when it is an integer.
    pub fn exact_quotient(&self, divisor: &Decimal) -> Option<BigInt> {
        let scale = self.scale.max(divisor.scale);
        let (quotient, remainder) = self.rescaled(scale).div_rem(&divisor.rescaled(scale));
        remainder.is_zero().then_some(quotient)
    }

    /// The remainder of `self / divisor`, truncated towards zero.
    pub fn rem(&self, divisor: &Decimal) -> Decimal {
        let scale = self.scale.max(divisor.scale);
        Decimal::new(self.rescaled(scale) % divisor.rescaled(scale), scale)
    }

    /// `self * factor`.
    pub fn times(&self, factor: usize) -> Decimal {
        Decimal::new(&self.unscaled * BigInt::from(factor), self.scale)
    }

    /// Rounds to `places` fractional digits, half to even.
    ///
    /// This matches the default IEEE-754 rounding so that rendered numbers
    /// are reproducible across platforms.
    pub fn quantize(&self, places: u32) -> Decimal {
        if self.scale <= places {
            return self.clone();
        }
        let divisor = BigInt::from(10).pow(self.scale - places);
        let (quotient, remainder) = self.unscaled.div_rem(&divisor);
        let towards = if self.unscaled.is_negative() {
            BigInt::from(-1)
        } else {
            BigInt::from(1)
        };
        let doubled: BigInt = remainder.abs() * 2;
        let rounded = match doubled.cmp(&divisor) {
            Ordering::Less => quotient,
            Ordering::Greater => quotient + towards,
            Ordering::Equal => {
                if quotient.is_even() {
                    quotient
                } else {
                    quotient + towards
                }
            }
        };
        Decimal::new(rounded, places)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal::new(value, 0)
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.rescaled(scale).cmp(&other.rescaled(scale))
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, other: Decimal) -> Decimal {
        let scale = self.scale.max(other.scale);
        Decimal::new(self.rescaled(scale) + other.rescaled(scale), scale)
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    fn sub(self, other: Decimal) -> Decimal {
        let scale = self.scale.max(other.scale);
        Decimal::new(self.rescaled(scale) - other.rescaled(scale), scale)
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal {
            unscaled: -self.unscaled,
            scale: self.scale,
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.unscaled);
        }
        let divisor = BigInt::from(10).pow(self.scale);
        let (int_part, frac_part) = self.unscaled.abs().div_rem(&divisor);
        let sign = if self.unscaled.is_negative() { "-" } else { "" };
        let frac = frac_part.to_string();
        write!(
            f,
            "{sign}{int_part}.{frac:0>width$}",
            width = self.scale as usize
        )
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let error = || ParseDecimalError(text.to_owned());
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (int_digits, frac_digits) = match body.split_once('.') {
            Some((int_digits, frac_digits)) => (int_digits, frac_digits),
            None => (body, ""),
        };
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_digits) || (body.contains('.') && !all_digits(frac_digits)) {
            return Err(error());
        }
        let mut unscaled: BigInt = format!("{int_digits}{frac_digits}")
            .parse()
            .map_err(|_| error())?;
        if negative {
            unscaled = -unscaled;
        }
        Ok(Decimal::new(unscaled, frac_digits.len() as u32))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    #[test]
    fn normalizes_trailing_zeros() {
        assert_eq!(dec("1.50"), dec("1.5"));
        assert_eq!(dec("1.0"), dec("1"));
        assert_eq!(dec("1.0").scale(), 0);
        assert_eq!(dec("-0.10"), dec("-0.1"));
    }

    #[test]
    fn displays_without_exponent() {
        assert_eq!(dec("1001.25").to_string(), "1001.25");
        assert_eq!(dec("-0.05").to_string(), "-0.05");
        assert_eq!(dec("10").to_string(), "10");
        assert_eq!(dec("0.001").to_string(), "0.001");
    }

    #[test]
    fn compares_across_scales() {
        assert!(dec("0.1") < dec("0.25"));
        assert!(dec("-1.5") < dec("-1.25"));
        assert_eq!(dec("2").cmp(&dec("2.0")), std::cmp::Ordering::Equal);
    }

    #[test]
    fn arithmetic_is_exact() {
        assert_eq!(dec("0.1") + dec("0.2"), dec("0.3"));
        assert_eq!(dec("1") - dec("0.9"), dec("0.1"));
        assert_eq!(-dec("0.5"), dec("-0.5"));
    }

    #[test]
    fn multiples_are_decided_exactly() {
        assert!(dec("0.3").is_multiple_of(&dec("0.1")));
        assert!(!dec("0.35").is_multiple_of(&dec("0.1")));
        assert_eq!(dec("0.6").exact_quotient(&dec("0.1")), Some(6.into()));
        assert_eq!(dec("0.65").exact_quotient(&dec("0.1")), None);
    }

    #[test]
    fn quantizes_half_to_even() {
        assert_eq!(dec("0.125").quantize(2), dec("0.12"));
        assert_eq!(dec("0.135").quantize(2), dec("0.14"));
        assert_eq!(dec("0.1251").quantize(2), dec("0.13"));
        assert_eq!(dec("-0.125").quantize(2), dec("-0.12"));
        assert_eq!(dec("1.5").quantize(0), dec("2"));
        assert_eq!(dec("2.5").quantize(0), dec("2"));
        assert_eq!(dec("1.25").quantize(4), dec("1.25"));
    }

    #[test]
    fn rejects_malformed_literals() {
        for text in ["", ".", "1.", ".5", "--1", "1.2.3", "1e3", "NaN"] {
            assert!(text.parse::<Decimal>().is_err(), "accepted '{text}'");
        }
    }
}
