/// Evaluate a polynomial with Horner's method.
///
/// `coefficients` are ordered lowest power first, so `[c0, c1, c2]`
/// evaluates `c0 + c1 x + c2 x²`. An empty slice evaluates to zero.
#[inline]
pub fn horner(coefficients: &[f64], x: f64) -> f64 {
    match coefficients.split_last() {
        Some((&highest, rest)) => rest.iter().rev().fold(highest, |acc, &c| acc * x + c),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horner_matches_power_sum() {
        let c = [-3.3467, -0.1989, -0.1020, 0.0349];
        let x = 3.7_f64;
        let naive = c[0] + c[1] * x + c[2] * x.powi(2) + c[3] * x.powi(3);
        assert!((horner(&c, x) - naive).abs() < 1e-12);
    }

    #[test]
    fn test_horner_edge_cases() {
        assert_eq!(horner(&[], 2.0), 0.0);
        assert_eq!(horner(&[5.0], 100.0), 5.0);
        assert!(horner(&[1.0, 1.0], f64::NAN).is_nan());
    }

    #[test]
    fn test_horner_infinite_argument() {
        assert_eq!(horner(&[5.0], f64::INFINITY), 5.0);
        let c = [-3.3467, -0.1989, -0.1020, 0.0349];
        assert_eq!(horner(&c, f64::INFINITY), f64::INFINITY);
    }
}
