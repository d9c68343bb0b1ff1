/// Returns the sum of `a` and `b`.
pub fn sum(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns the difference of `a` and `b`, i.e. `a - b`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIRS: &[(f64, f64)] = &[
        (1.0, 2.0),
        (0.0, 0.0),
        (-0.0, 0.0),
        (0.1, 0.2),
        (-3.5, 7.25),
        (1e300, 1e300),
        (f64::MAX, -f64::MAX),
        (f64::MIN_POSITIVE, 1.0),
    ];

    #[test]
    fn test_literals() {
        assert_eq!(sum(1.0, 2.0), 3.0);
        assert_eq!(subtract(1.0, 2.0), -1.0);
    }

    #[test]
    fn test_matches_operators() {
        for &(a, b) in PAIRS {
            assert_eq!(sum(a, b).to_bits(), (a + b).to_bits(), "{a} + {b}");
            assert_eq!(subtract(a, b).to_bits(), (a - b).to_bits(), "{a} - {b}");
        }
    }

    #[test]
    fn test_sum_commutative() {
        for &(a, b) in PAIRS {
            assert_eq!(sum(a, b), sum(b, a), "{a}, {b}");
        }
    }

    #[test]
    fn test_subtract_antisymmetric() {
        for &(a, b) in PAIRS {
            assert_eq!(subtract(a, b), -subtract(b, a), "{a}, {b}");
        }
    }

    #[test]
    fn test_overflow_is_ieee() {
        // no panics, just infinities
        assert_eq!(sum(f64::MAX, f64::MAX), f64::INFINITY);
        assert_eq!(subtract(-f64::MAX, f64::MAX), f64::NEG_INFINITY);
        assert!(sum(f64::INFINITY, f64::NEG_INFINITY).is_nan());
    }
}
