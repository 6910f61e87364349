//! Map projections, visitors and dynamic records.

use std::collections::{BTreeMap, HashMap};
use std::ops::ControlFlow;

use record_reflect::access::{
    get_field_map, get_value_map, get_value, set_value, visit_fields, visit_values,
};
use record_reflect::derive::Record;
use record_reflect::ops::{DynamicRecord, Record};
use record_reflect::{Reflect, Value};

#[derive(Record)]
struct Creature {
    age: i32,
    name: String,
    max_health: f32,
    #[record(ignore)]
    cur_health: f32,
}

fn creature() -> Creature {
    Creature {
        age: 21,
        name: "Aubrey".to_string(),
        max_health: 100.0,
        cur_health: 50.0,
    }
}

// -----------------------------------------------------------------------------
// Map projection

#[test]
fn value_map_contains_exactly_the_named_fields() {
    let creature = creature();
    let values: BTreeMap<String, Value> = get_value_map(&creature);

    assert_eq!(values.len(), 3);
    assert_eq!(values["age"], Value::Int(21));
    assert_eq!(values["name"], Value::from("Aubrey"));
    assert_eq!(values["max_health"], Value::Float(100.0));
    assert!(!values.contains_key("cur_health"));
}

#[test]
fn value_map_works_with_any_keyed_map() {
    let creature = creature();
    let values: HashMap<String, Value> = get_value_map(&creature);

    assert_eq!(values.len(), 3);
    assert_eq!(values["age"], Value::Int(21));
}

#[test]
fn the_map_is_an_independent_snapshot() {
    let mut creature = creature();
    let values: BTreeMap<String, Value> = get_value_map(&creature);

    set_value(&mut creature, "age", 99);

    // The record moved on, the snapshot did not.
    assert_eq!(values["age"], Value::Int(21));
    assert_eq!(creature.age, 99);
}

#[test]
fn field_map_preserves_concrete_types() {
    let creature = creature();
    let fields: BTreeMap<String, Box<dyn Reflect>> = get_field_map(&creature);

    assert_eq!(fields.len(), 3);
    assert_eq!(fields["age"].downcast_ref::<i32>(), Some(&21));
    assert_eq!(
        fields["name"].downcast_ref::<String>().map(String::as_str),
        Some("Aubrey"),
    );
    assert_eq!(fields["max_health"].downcast_ref::<f32>(), Some(&100.0));
}

// -----------------------------------------------------------------------------
// Visitors

#[test]
fn visit_fields_runs_in_declaration_order() {
    let creature = creature();

    let mut seen = Vec::new();
    visit_fields(&creature, |field| {
        seen.push(field.name().to_string());
    });

    assert_eq!(seen, ["age", "name", "max_health"]);
}

#[test]
fn visit_fields_stops_on_true() {
    let creature = creature();

    let mut seen = Vec::new();
    visit_fields(&creature, |field| {
        seen.push(field.name().to_string());
        field.value().is::<String>()
    });

    // `name` matched, `max_health` was never visited.
    assert_eq!(seen, ["age", "name"]);
}

#[test]
fn visit_fields_supports_control_flow() {
    let creature = creature();

    let mut visited = 0;
    visit_fields(&creature, |_| {
        visited += 1;
        ControlFlow::Break(())
    });

    assert_eq!(visited, 1);
}

#[test]
fn visit_values_passes_only_the_value() {
    let creature = creature();

    let mut ints = Vec::new();
    visit_values(&creature, |value| {
        if let Some(v) = value.downcast_ref::<i32>() {
            ints.push(*v);
        }
    });

    assert_eq!(ints, [21]);
}

// -----------------------------------------------------------------------------
// Dynamic records

#[test]
fn a_dynamic_record_is_a_record() {
    let mut dynamic = DynamicRecord::new();
    dynamic.insert("hp", 35_i32);
    dynamic.insert("label", "boss".to_string());

    assert_eq!(get_value::<i32>(&dynamic, "hp").unwrap(), 35);
    assert!(set_value(&mut dynamic, "hp", 40));
    assert_eq!(get_value::<i32>(&dynamic, "hp").unwrap(), 40);

    let values: BTreeMap<String, Value> = get_value_map(&dynamic);
    assert_eq!(values.len(), 2);
    assert_eq!(values["label"], Value::from("boss"));
}

#[test]
fn snapshots_compare_field_wise() {
    let creature = creature();
    let a = creature.to_dynamic_record();
    let b = creature.to_dynamic_record();

    assert_eq!(a.reflect_partial_eq(&b), Some(true));
    assert_eq!(a.represented_info().map(|info| info.type_name()), Some("Creature"));

    let mut c = creature.to_dynamic_record();
    set_value(&mut c, "age", 1);
    assert_eq!(a.reflect_partial_eq(&c), Some(false));
}
