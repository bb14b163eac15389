//! Property-based tests for fraction arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Fraction, FractionError};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn fraction() -> impl Strategy<Value = Fraction> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    fn non_zero_fraction() -> impl Strategy<Value = Fraction> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    fn gcd(a: i64, b: i64) -> i64 {
        if b == 0 { a.abs() } else { gcd(b, a % b) }
    }

    proptest! {
        // Normal form

        #[test]
        fn construction_is_reduced(n in small_int(), d in non_zero_int()) {
            let f = Fraction::new(n, d).unwrap();
            prop_assert!(f.denominator() > 0);
            prop_assert_eq!(gcd(f.numerator(), f.denominator()), 1);
        }

        #[test]
        fn construction_preserves_value(n in small_int(), d in non_zero_int()) {
            let f = Fraction::new(n, d).unwrap();
            prop_assert_eq!(f.numerator() * d, n * f.denominator());
        }

        #[test]
        fn arithmetic_results_are_reduced(a in fraction(), b in fraction()) {
            for r in [a + b, a - b, a * b] {
                prop_assert!(r.denominator() > 0);
                prop_assert_eq!(gcd(r.numerator(), r.denominator()), 1);
            }
        }

        #[test]
        fn setters_keep_normal_form(f in fraction(), n in small_int(), d in non_zero_int()) {
            let mut g = f;
            g.set_numerator(n);
            g.set_denominator(d).unwrap();
            prop_assert!(g.denominator() > 0);
            prop_assert_eq!(gcd(g.numerator(), g.denominator()), 1);
        }

        // Field axioms

        #[test]
        fn add_commutative(a in fraction(), b in fraction()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn mul_commutative(a in fraction(), b in fraction()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn distributive(a in fraction(), b in fraction(), c in fraction()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn additive_inverse(a in fraction()) {
            prop_assert!((a + -a).is_zero());
            prop_assert_eq!(a - a, Fraction::zero());
        }

        #[test]
        fn multiplicative_inverse(a in non_zero_fraction()) {
            let product = a * a.checked_recip().unwrap();
            prop_assert!(product.is_one());
        }

        #[test]
        fn division_undoes_multiplication(a in fraction(), b in non_zero_fraction()) {
            prop_assert_eq!(a.checked_div(b).unwrap() * b, a);
        }

        #[test]
        fn division_by_zero_fails(a in fraction(), d in non_zero_int()) {
            let zero = Fraction::new(0, d).unwrap();
            prop_assert_eq!(a.checked_div(zero), Err(FractionError::DivisionByZero));
        }

        // Order agrees with the float approximation for small operands

        #[test]
        fn order_matches_f64(a in fraction(), b in fraction()) {
            if a < b {
                prop_assert!(a.to_f64() < b.to_f64());
            }
        }

        // Text

        #[test]
        fn format_parse_round_trip(a in fraction()) {
            prop_assert_eq!(a.to_string().parse::<Fraction>().unwrap(), a);
        }

        #[test]
        fn parse_reduces(n in small_int(), d in non_zero_int()) {
            let parsed: Fraction = format!("{n}/{d}").parse().unwrap();
            prop_assert_eq!(parsed, Fraction::new(n, d).unwrap());
        }
    }
}
