//! Property-based tests for the name holder
//!
//! These tests use proptest to check the record's contract across arbitrary
//! text values, including empty and non-ASCII strings.

use nameholder_core::{construct, Module, NameHolderModule};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), ".*", "[a-zA-Z ]{0,32}"]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn set_then_get_returns_value(value in name_strategy()) {
        let mut holder = construct();
        holder.set_name(value.clone());
        prop_assert_eq!(holder.get_name(), value.as_str());
    }

    #[test]
    fn repeated_reads_are_stable(value in name_strategy(), reads in 1usize..8) {
        let mut holder = construct();
        holder.set_name(value.clone());
        for _ in 0..reads {
            prop_assert_eq!(holder.get_name(), value.as_str());
        }
    }

    #[test]
    fn instances_are_isolated(value in name_strategy()) {
        let mut first = construct();
        let second = construct();
        first.set_name(value);
        prop_assert_eq!(second.get_name(), "king");
    }

    #[test]
    fn last_write_wins(values in proptest::collection::vec(name_strategy(), 1..10)) {
        let mut holder = NameHolderModule::instantiate();
        for value in &values {
            holder.set_name(value.as_str());
        }
        prop_assert_eq!(holder.get_name(), values.last().unwrap().as_str());
    }
}
