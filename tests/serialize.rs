//! JSON rendering: the exact output grammar, nesting, and soft failures.

use std::collections::BTreeMap;

use record_reflect::access::{get_value, get_value_map, has_field, set_value};
use record_reflect::derive::Record;
use record_reflect::impl_reflect_opaque;
use record_reflect::serde::{serialize_json, serialize_json_with_precision, SerializeDriver};
use record_reflect::Value;

#[derive(Record)]
struct Player {
    max_health: i32,
    damage: f32,
    #[record(ignore)]
    cur_health: i32,
}

#[test]
fn a_player_record_end_to_end() {
    let mut player = Player {
        max_health: 100,
        damage: 10.0,
        cur_health: 50,
    };

    assert!(!has_field(&player, "cur_health"));
    assert!(has_field(&player, "max_health"));

    assert!(set_value(&mut player, "max_health", 120));
    assert_eq!(get_value::<i32>(&player, "max_health").unwrap(), 120);

    let values: BTreeMap<String, Value> = get_value_map(&player);
    assert_eq!(values.len(), 2);
    assert_eq!(values["max_health"], Value::Int(120));
    assert_eq!(values["damage"], Value::Float(10.0));

    assert_eq!(
        serialize_json(&player).unwrap(),
        "{\"max_health\": 120, \"damage\": 10.00}",
    );
}

#[test]
fn primitives_render_directly() {
    assert_eq!(serialize_json(&10.5_f64).unwrap(), "10.50");
    assert_eq!(serialize_json(&10.5_f32).unwrap(), "10.50");
    assert_eq!(serialize_json(&10_i32).unwrap(), "10");
    assert_eq!(serialize_json(&true).unwrap(), "true");
    assert_eq!(serialize_json(&"hello").unwrap(), "\"hello\"");
    assert_eq!(
        serialize_json(&String::from("hello")).unwrap(),
        "\"hello\"",
    );
}

#[test]
fn strings_are_json_escaped() {
    assert_eq!(
        serialize_json(&String::from("he\"llo\n")).unwrap(),
        "\"he\\\"llo\\n\"",
    );
}

#[test]
fn nested_records_recurse() {
    #[derive(Record)]
    struct Nested {
        a: i32,
    }

    #[derive(Record)]
    struct Data {
        int_val: i32,
        nested: Nested,
    }

    let data = Data {
        int_val: 10,
        nested: Nested { a: 20 },
    };

    assert_eq!(serialize_json(&Nested { a: 10 }).unwrap(), "{\"a\": 10}");
    assert_eq!(
        serialize_json(&data).unwrap(),
        "{\"int_val\": 10, \"nested\": {\"a\": 20}}",
    );
}

#[test]
fn precision_is_configurable_at_compile_time() {
    assert_eq!(serialize_json_with_precision::<4>(&10.5_f64).unwrap(), "10.5000");
    assert_eq!(serialize_json_with_precision::<0>(&10.5_f64).unwrap(), "10");
}

#[derive(Clone)]
struct Handle {
    #[allow(dead_code)]
    id: u64,
}

impl_reflect_opaque!(Handle);

#[test]
fn unsupported_values_vanish_silently() {
    #[derive(Record)]
    struct Entity {
        hp: i32,
        handle: Handle,
        label: String,
    }

    let entity = Entity {
        hp: 5,
        handle: Handle { id: 7 },
        label: "door".to_string(),
    };

    // The opaque field contributes no key; its neighbors are unaffected.
    assert_eq!(
        serialize_json(&entity).unwrap(),
        "{\"hp\": 5, \"label\": \"door\"}",
    );

    // A record of nothing but opaque fields is an empty object.
    #[derive(Record)]
    struct OnlyOpaque {
        handle: Handle,
    }
    let only = OnlyOpaque {
        handle: Handle { id: 1 },
    };
    assert_eq!(serialize_json(&only).unwrap(), "{}");

    // An unsupported root is "not serialized", never an error.
    assert_eq!(serialize_json(&Handle { id: 1 }), None);
}

#[test]
fn the_driver_also_feeds_standard_serializers() {
    #[derive(Record)]
    struct Pair {
        a: i32,
        b: bool,
    }

    let pair = Pair { a: 1, b: true };
    let standard = serde_json::to_string(&SerializeDriver::new(&pair)).unwrap();

    assert_eq!(standard, "{\"a\":1,\"b\":true}");
}
