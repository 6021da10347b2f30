use proptest::prelude::*;

use numseq::{ArithmeticSequence, Decimal};

fn brute_force_disjoint(a: &ArithmeticSequence<i64>, b: &ArithmeticSequence<i64>) -> bool {
    a.iter().all(|value| !b.contains(&value))
}

proptest! {
    #[test]
    fn quick_disjoint_agrees_with_brute_force(
        start_a in -50i64..50, end_a in -50i64..50, step_a in 1i64..7,
        start_b in -50i64..50, end_b in -50i64..50, step_b in 1i64..7,
    ) {
        let a = ArithmeticSequence::new(start_a, end_a, step_a).unwrap();
        let b = ArithmeticSequence::new(start_b, end_b, step_b).unwrap();
        prop_assert_eq!(a.is_disjoint(&b), brute_force_disjoint(&a, &b));
    }

    #[test]
    fn decimal_disjoint_agrees_with_brute_force(
        start_a in -200i64..200, span_a in 0i64..100, step_a in 1i64..9, scale_a in 0u32..3,
        start_b in -200i64..200, span_b in 0i64..100, step_b in 1i64..9, scale_b in 0u32..3,
    ) {
        let a = ArithmeticSequence::new(
            Decimal::new(start_a, scale_a),
            Decimal::new(start_a + span_a, scale_a),
            Decimal::new(step_a, scale_a),
        )
        .unwrap();
        let b = ArithmeticSequence::new(
            Decimal::new(start_b, scale_b),
            Decimal::new(start_b + span_b, scale_b),
            Decimal::new(step_b, scale_b),
        )
        .unwrap();
        let brute = a.iter().all(|value| !b.contains(&value));
        prop_assert_eq!(a.is_disjoint(&b), brute);
    }

    #[test]
    fn len_agrees_with_iteration(
        start in -100i64..100, end in -100i64..100, step in -9i64..9,
    ) {
        prop_assume!(step != 0);
        let sequence = ArithmeticSequence::new(start, end, step).unwrap();
        prop_assert_eq!(sequence.len(), sequence.iter().count());
    }

    #[test]
    fn round_trips_through_display(
        numbers in proptest::collection::btree_set(-500i64..500, 1..20),
    ) {
        let sequence = numseq::FileNumSequence::from_unordered(numbers);
        let reparsed = match sequence.to_string().parse().unwrap() {
            numseq::FileNums::Int(nums) => nums,
            numseq::FileNums::Decimal(_) => panic!("integer input must stay integral"),
        };
        prop_assert_eq!(sequence, reparsed);
    }
}
