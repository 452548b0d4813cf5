use bigdecimal::{BigDecimal, ToPrimitive, Zero};

/// Percentage of `part` relative to `whole`, rounded to the nearest whole
/// point (half away from zero). Returns `None` when `whole` is zero, so
/// callers never divide by zero.
pub fn rounded_percentage(part: &BigDecimal, whole: &BigDecimal) -> Option<i64> {
    if whole.is_zero() {
        return None;
    }
    let pct = (part.to_f64()? / whole.to_f64()?) * 100.0;
    if !pct.is_finite() {
        return None;
    }
    Some(pct.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn whole_percentages() {
        assert_eq!(rounded_percentage(&dec("10"), &dec("100")), Some(10));
        assert_eq!(rounded_percentage(&dec("20"), &dec("100")), Some(20));
        assert_eq!(rounded_percentage(&dec("-5"), &dec("100")), Some(-5));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(rounded_percentage(&dec("12.5"), &dec("1000")), Some(1));
        assert_eq!(rounded_percentage(&dec("15"), &dec("1000")), Some(2));
        assert_eq!(rounded_percentage(&dec("-15"), &dec("1000")), Some(-2));
        assert_eq!(rounded_percentage(&dec("14.9"), &dec("1000")), Some(1));
    }

    #[test]
    fn zero_denominator_is_none() {
        assert_eq!(rounded_percentage(&dec("5"), &dec("0")), None);
        assert_eq!(rounded_percentage(&dec("0"), &dec("0")), None);
    }
}
