//! Integration tests for the partial-application adaptor.
//!
//! Each call either completes the wrapped function's parameter list and
//! invokes it, or returns a new adaptor holding the arguments so far.

#![cfg(feature = "partial")]

// =============================================================================
// 2-argument function tests
// =============================================================================

mod two_argument_functions {
    use fnpack::partial::partial;
    use rstest::rstest;

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    fn divide(numerator: f64, denominator: f64) -> f64 {
        numerator / denominator
    }

    #[test]
    fn test_partial_one_argument_at_a_time() {
        assert_eq!(partial(add).call((1,)).call((2,)), 3);
    }

    #[test]
    fn test_partial_all_arguments_at_once() {
        assert_eq!(partial(add).call((1, 2)), 3);
    }

    #[test]
    fn test_partial_empty_call_curries() {
        assert_eq!(partial(add).call(()).call((1,)).call((2,)), 3);
        assert_eq!(partial(add).call(()).call(()).call((1, 2)), 3);
    }

    #[rstest]
    #[case(10.0, 2.0, 5.0)]
    #[case(7.0, 2.0, 3.5)]
    fn test_partial_divide_numerator_fixed(
        #[case] numerator: f64,
        #[case] denominator: f64,
        #[case] expected: f64,
    ) {
        let divide_numerator = partial(divide).call((numerator,));
        let quotient = divide_numerator.call((denominator,));
        assert!((quotient - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_can_be_called_multiple_times() {
        let add_five = partial(add).call((5,));
        for index in 0..100 {
            assert_eq!(add_five.call((index,)), 5 + index);
        }
    }
}

// =============================================================================
// 3-argument function tests
// =============================================================================

mod three_argument_functions {
    use fnpack::partial::partial;

    fn add_three(first: i32, second: i32, third: i32) -> i32 {
        first + second + third
    }

    fn format_greeting(greeting: &str, name: &str, punctuation: &str) -> String {
        format!("{greeting}, {name}{punctuation}")
    }

    #[test]
    fn test_partial_every_split() {
        let adaptor = partial(add_three);
        assert_eq!(adaptor.call((1,)).call((2,)).call((3,)), 6);
        assert_eq!(adaptor.call((1, 2)).call((3,)), 6);
        assert_eq!(adaptor.call((1,)).call((2, 3)), 6);
        assert_eq!(adaptor.call((1, 2, 3)), 6);
    }

    #[test]
    fn test_partial_branches_are_independent() {
        let hello = partial(format_greeting).call(("Hello",));
        let hello_world = hello.call(("World",));
        let hello_rust = hello.call(("Rust",));

        assert_eq!(hello_world.call(("!",)), "Hello, World!");
        assert_eq!(hello_rust.call(("?",)), "Hello, Rust?");
        assert_eq!(hello_world.call((".",)), "Hello, World.");
    }

    #[test]
    fn test_partial_counts() {
        let adaptor = partial(add_three).call((1,));
        assert_eq!(adaptor.captured(), 1);
        assert_eq!(adaptor.remaining(), 2);
        assert_eq!(adaptor.pack().len(), 1);
    }
}

// =============================================================================
// Ownership tests
// =============================================================================

mod ownership {
    use fnpack::partial::partial;

    #[derive(Debug, PartialEq, Eq)]
    struct Token(u32);

    fn merge(first: Token, second: Token) -> u32 {
        first.0 * 10 + second.0
    }

    #[test]
    fn test_call_once_accepts_move_only_arguments() {
        let pending = partial(merge).call_once((Token(4),));
        assert_eq!(pending.call_once((Token(2),)), 42);
    }

    #[test]
    fn test_call_once_accepts_move_only_closure() {
        let suffix = String::from("!");
        let shout = move |text: String| text.to_uppercase() + &suffix;
        assert_eq!(partial(shout).call_once((String::from("hey"),)), "HEY!");
    }

    #[test]
    fn test_captured_arguments_are_cloned_per_call() {
        let sum_with = |items: Vec<i32>, extra: i32| items.iter().sum::<i32>() + extra;
        let prefix = partial(sum_with).call((vec![1, 2, 3],));
        assert_eq!(prefix.call((1,)), 7);
        assert_eq!(prefix.call((2,)), 8);
        assert_eq!(prefix.pack().slots().head, vec![1, 2, 3]);
    }

    #[test]
    fn test_borrowed_arguments_complete_call() {
        let mut log = Vec::new();
        let record = |log: &mut Vec<String>, entry: &str| log.push(entry.to_owned());
        partial(record).call((&mut log, "first"));
        assert_eq!(log, ["first"]);
    }
}

// =============================================================================
// Integration with packs and errors
// =============================================================================

mod integration {
    use fnpack::pack;
    use fnpack::pack::{Decay, HNil, Pack};
    use fnpack::partial::{partial, partial_with};

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    fn checked_divide(numerator: i32, denominator: i32) -> Result<i32, String> {
        if denominator == 0 {
            Err(String::from("division by zero"))
        } else {
            Ok(numerator / denominator)
        }
    }

    #[test]
    fn test_partial_with_starting_pack() {
        let add_ten = partial_with(add, pack!(10));
        assert_eq!(add_ten.call((5,)), 15);
    }

    #[test]
    fn test_partial_applied_from_pack() {
        let add_one = partial(add).call((1,));
        assert_eq!(pack!(2).apply_with(&add_one), 3);
        assert_eq!(pack!().apply_with(&add_one).call((2,)), 3);
    }

    #[test]
    fn test_partial_over_partial() {
        let inner = partial(add);
        let outer = partial_with::<_, (i32, i32), HNil>(inner, Pack::<Decay, HNil>::empty());
        assert_eq!(outer.remaining(), 2);
        assert_eq!(outer.call((1,)).call((2,)), 3);
    }

    #[test]
    fn test_errors_from_function_propagate() {
        let divide_ten = partial(checked_divide).call((10,));
        assert_eq!(divide_ten.call((2,)), Ok(5));
        assert_eq!(divide_ten.call((0,)), Err(String::from("division by zero")));
    }

    #[test]
    #[should_panic(expected = "negative input")]
    fn test_panics_from_function_propagate() {
        let checked = partial(|value: i32, _: i32| {
            assert!(value >= 0, "negative input");
            value
        });
        checked.call((-1,)).call((0,));
    }

    #[test]
    fn test_clone_and_debug() {
        let adaptor = partial(add).call((3,));
        let copy = adaptor.clone();
        assert_eq!(copy.call((4,)), adaptor.call((4,)));
        assert!(format!("{adaptor:?}").contains("Pack<decay>(3)"));
    }
}
