use proptest::collection::{btree_map, vec};
use proptest::prelude::*;

use sav_model::{Category, CategoryValue, DictionaryMap, Scalar, SubValue, VarValue};
use sav_report::render_dictionary;

fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        "[a-z]{0,8}".prop_map(Scalar::Text),
        any::<i64>().prop_map(Scalar::Int),
        (-1.0e6..1.0e6f64).prop_map(Scalar::Number),
    ]
}

fn var_value_strategy() -> impl Strategy<Value = VarValue> {
    prop_oneof![
        scalar_strategy().prop_map(VarValue::Scalar),
        vec("[a-z]{1,6}", 0..4).prop_map(VarValue::List),
    ]
}

fn sub_value_strategy() -> impl Strategy<Value = SubValue> {
    prop_oneof![
        scalar_strategy().prop_map(SubValue::Scalar),
        vec(scalar_strategy(), 0..4).prop_map(SubValue::List),
    ]
}

fn category_value_strategy() -> impl Strategy<Value = CategoryValue> {
    prop_oneof![
        "[a-z]{0,10}".prop_map(CategoryValue::Scalar),
        vec("[a-z]{1,8}", 0..5).prop_map(CategoryValue::List),
        btree_map("[a-z]{1,8}", var_value_strategy(), 0..5).prop_map(CategoryValue::VarMap),
        btree_map(
            "[a-z]{1,8}",
            btree_map("[a-z]{1,6}", sub_value_strategy(), 0..4),
            0..4
        )
        .prop_map(CategoryValue::NestedMap),
    ]
}

fn dictionary_strategy() -> impl Strategy<Value = DictionaryMap> {
    vec(category_value_strategy(), Category::ALL.len())
        .prop_map(|values| Category::ALL.into_iter().zip(values).collect())
}

proptest! {
    #[test]
    fn render_is_deterministic(dictionary in dictionary_strategy()) {
        let first = render_dictionary(&dictionary).to_text();
        let second = render_dictionary(&dictionary).to_text();
        prop_assert_eq!(first, second);
    }

    // Generated names are [a-z], so only header lines carry the marker.
    #[test]
    fn headers_are_sorted_unique_and_complete(dictionary in dictionary_strategy()) {
        let report = render_dictionary(&dictionary);
        let headers: Vec<String> = report
            .lines()
            .iter()
            .filter(|line| line.starts_with('#'))
            .cloned()
            .collect();
        let expected: Vec<String> = Category::ALL
            .iter()
            .map(|c| format!("#{}", c.name().to_uppercase()))
            .collect();
        prop_assert_eq!(headers, expected);
    }

    #[test]
    fn nested_sub_keys_appear_sorted_per_variable(dictionary in dictionary_strategy()) {
        let report = render_dictionary(&dictionary);
        let mut current: Option<(String, String)> = None;
        for line in report.lines() {
            if line.starts_with('#') {
                current = None;
                continue;
            }
            let Some((var_name, rest)) = line.split_once(": ") else {
                current = None;
                continue;
            };
            let Some((sub_key, _)) = rest.split_once(" -- ") else {
                continue;
            };
            if let Some((prev_var, prev_key)) = &current
                && prev_var == var_name
            {
                prop_assert!(prev_key.as_str() <= sub_key);
            }
            current = Some((var_name.to_string(), sub_key.to_string()));
        }
    }
}
