use msgpack_materialize::{
    materialize_with, MaterializeOptions, Materializer, NativeValue, RawMode, Value,
};
use num_bigint::BigInt;
use proptest::prelude::*;

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<i128>().prop_map(|n| Value::Int(BigInt::from(n))),
        any::<f64>().prop_map(Value::Float),
        proptest::collection::vec(any::<u8>(), 0..12).prop_map(Value::Raw),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            proptest::collection::vec((inner.clone(), inner), 0..6).prop_map(Value::Map),
        ]
    })
}

fn options_strategy() -> impl Strategy<Value = MaterializeOptions> {
    (
        any::<bool>(),
        prop_oneof![Just(RawMode::Text), Just(RawMode::Binary)],
    )
        .prop_map(|(symbolize_keys, raw)| MaterializeOptions { symbolize_keys, raw })
}

proptest! {
    #[test]
    fn deep_walker_equals_recursive_walker(
        value in value_strategy(),
        options in options_strategy(),
    ) {
        let m = Materializer::with_options(options);
        prop_assert_eq!(m.materialize(&value).unwrap(), m.materialize_deep(&value).unwrap());
    }

    #[test]
    fn integer_width_fallback_is_lossless(n in any::<i128>()) {
        let big = BigInt::from(n);
        let out = materialize_with(&Value::Int(big.clone()), MaterializeOptions::default()).unwrap();
        match &out {
            NativeValue::Int(narrow) => {
                // Narrow representation only when it fits, and equal in value.
                prop_assert!(i64::try_from(n).is_ok());
                prop_assert_eq!(BigInt::from(*narrow), big.clone());
            }
            NativeValue::BigInt(wide) => {
                prop_assert!(i64::try_from(n).is_err());
                prop_assert_eq!(wide, &big);
            }
            other => prop_assert!(false, "unexpected variant {:?}", other),
        }
        // Both representations compare equal for the same abstract integer.
        prop_assert_eq!(out, NativeValue::BigInt(big));
    }

    #[test]
    fn arrays_preserve_length_and_order(
        items in proptest::collection::vec(any::<i64>(), 0..32),
    ) {
        let value = Value::Array(items.iter().map(|&n| Value::from(n)).collect());
        let out = materialize_with(&value, MaterializeOptions::default()).unwrap();
        let arr = out.as_array().unwrap();
        prop_assert_eq!(arr.len(), items.len());
        for (i, &n) in items.iter().enumerate() {
            prop_assert_eq!(&arr[i], &NativeValue::Int(n));
        }
    }

    #[test]
    fn map_entry_count_matches_distinct_keys(
        keys in proptest::collection::hash_set("[a-z]{1,6}", 0..12),
    ) {
        let pairs: Vec<(Value, Value)> = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (Value::from(k.as_str()), Value::from(i as i64)))
            .collect();
        let out = materialize_with(&Value::Map(pairs), MaterializeOptions::default()).unwrap();
        prop_assert_eq!(out.as_map().unwrap().len(), keys.len());
    }
}
