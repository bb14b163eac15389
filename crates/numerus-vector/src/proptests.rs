//! Property-based tests for vector arithmetic and text form.

#[cfg(test)]
mod tests {
    use proptest::collection::vec;
    use proptest::prelude::*;

    use crate::{Vector, VectorError};

    // Small integers keep every sum and product exact in f64
    fn small_component() -> impl Strategy<Value = f64> {
        (-1000i32..1000i32).prop_map(f64::from)
    }

    fn same_dimension_pair() -> impl Strategy<Value = (Vector, Vector)> {
        (1usize..16).prop_flat_map(|n| {
            (
                vec(small_component(), n).prop_map(Vector::new),
                vec(small_component(), n).prop_map(Vector::new),
            )
        })
    }

    proptest! {
        #[test]
        fn add_commutative((a, b) in same_dimension_pair()) {
            prop_assert_eq!(a.checked_add(&b).unwrap(), b.checked_add(&a).unwrap());
        }

        #[test]
        fn sub_undoes_add((a, b) in same_dimension_pair()) {
            let sum = a.checked_add(&b).unwrap();
            prop_assert_eq!(sum.checked_sub(&b).unwrap(), a);
        }

        #[test]
        fn scale_distributes((a, b) in same_dimension_pair(), k in -10i32..10i32) {
            let k = f64::from(k);
            let lhs = a.checked_add(&b).unwrap() * k;
            let rhs = (&a * k).checked_add(&(&b * k)).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn dot_commutative((a, b) in same_dimension_pair()) {
            prop_assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
        }

        #[test]
        fn dot_with_self_is_sum_of_squares(a in vec(small_component(), 0..16).prop_map(Vector::new)) {
            let expected: f64 = a.iter().map(|c| c * c).sum();
            prop_assert_eq!(a.dot(&a).unwrap(), expected);
        }

        #[test]
        fn mismatched_dimensions_fail(
            a in vec(small_component(), 0..8),
            b in vec(small_component(), 8..16)
        ) {
            let (a, b) = (Vector::new(a), Vector::new(b));
            let expected = VectorError::DimensionMismatch { left: a.dimension(), right: b.dimension() };
            prop_assert_eq!(a.checked_add(&b), Err(expected.clone()));
            prop_assert_eq!(a.dot(&b), Err(expected));
        }

        #[test]
        fn format_parse_round_trip(v in vec(-1.0e12f64..1.0e12f64, 1..16).prop_map(Vector::new)) {
            prop_assert_eq!(v.to_string().parse::<Vector>().unwrap(), v);
        }

        #[test]
        fn brackets_are_optional(v in vec(small_component(), 1..16).prop_map(Vector::new)) {
            let text = v.to_string();
            let bare = &text[1..text.len() - 1];
            prop_assert_eq!(bare.parse::<Vector>().unwrap(), v);
        }
    }
}
