use crate::constants::FLOAT_PRECISION;

/// A JSON number carried in two representations derived from one literal.
///
/// Integral literals store the same magnitude in both fields. Fractional
/// literals keep the truncated value in `int`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    pub int: i64,
    pub float: f64,
}

impl Number {
    pub fn from_i64(value: i64) -> Self {
        Self {
            int: value,
            float: value as f64,
        }
    }

    pub fn from_f64(value: f64) -> Self {
        Self {
            int: value as i64,
            float: value,
        }
    }

    /// True when the float field holds exactly the integer field.
    pub fn is_integral(&self) -> bool {
        self.float == self.int as f64
    }
}

/// Appends one decimal digit, or `None` if the result would exceed `i64::MAX`.
#[inline]
pub fn push_int_digit(value: i64, digit: u8) -> Option<i64> {
    let digit = i64::from(digit);
    if value > (i64::MAX - digit) / 10 {
        return None;
    }
    Some(value * 10 + digit)
}

/// Accumulates integer-part and fraction digits the way the parser reads
/// them: one digit at a time, the fraction weighted by successive tenths.
#[derive(Debug, Clone, Copy)]
pub struct FloatAccumulator {
    value: f64,
    weight: f64,
}

impl FloatAccumulator {
    pub fn new() -> Self {
        Self {
            value: 0.0,
            weight: 1.0,
        }
    }

    #[inline]
    pub fn push_int_digit(&mut self, digit: u8) {
        self.value = self.value * 10.0 + f64::from(digit);
    }

    #[inline]
    pub fn push_fraction_digit(&mut self, digit: u8) {
        self.weight /= 10.0;
        self.value += self.weight * f64::from(digit);
    }

    pub fn finish(self) -> f64 {
        self.value
    }
}

impl Default for FloatAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders integral numbers with `itoa` and everything else in fixed point.
pub fn format_number(number: &Number) -> String {
    if number.is_integral() {
        let mut buffer = itoa::Buffer::new();
        return buffer.format(number.int).to_string();
    }
    format!("{:.*}", FLOAT_PRECISION, number.float)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 7, Some(7))]
    #[case(12, 3, Some(123))]
    #[case(922_337_203_685_477_580, 7, Some(i64::MAX))]
    #[case(922_337_203_685_477_580, 8, None)]
    #[case(i64::MAX, 0, None)]
    fn test_push_int_digit(#[case] value: i64, #[case] digit: u8, #[case] expected: Option<i64>) {
        assert_eq!(push_int_digit(value, digit), expected);
    }

    #[rstest]
    fn test_float_accumulator_matches_literal() {
        let mut acc = FloatAccumulator::new();
        for digit in [9, 7] {
            acc.push_int_digit(digit);
        }
        for digit in [2, 4] {
            acc.push_fraction_digit(digit);
        }
        let value = acc.finish();
        assert!((value - 97.24).abs() < 1e-12);
        assert_eq!(Number::from_f64(value).int, 97);
    }

    #[rstest]
    #[case(Number::from_i64(42), "42")]
    #[case(Number::from_i64(0), "0")]
    #[case(Number::from_f64(1.5), "1.500000")]
    #[case(Number::from_f64(3.0), "3")]
    #[case(Number::from_i64(i64::MAX), "9223372036854775807")]
    fn test_format_number(#[case] number: Number, #[case] expected: &str) {
        assert_eq!(format_number(&number), expected);
    }
}
