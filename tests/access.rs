//! Name-addressed reads and writes against a derived record.

use record_reflect::access::{
    get_field_with_name, get_field_with_name_mut, get_value, get_value_strict, has_field,
    set_value, try_get_field_with_name, try_get_value,
};
use record_reflect::derive::Record;
use record_reflect::ops::AccessError;
use record_reflect::{FromReflect, Value};

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

#[test]
fn get_value_right_after_construction() {
    let creature = creature();

    assert_eq!(get_value::<i32>(&creature, "age").unwrap(), 21);
    assert_eq!(get_value::<String>(&creature, "name").unwrap(), "Aubrey");
    assert_eq!(get_value::<f32>(&creature, "max_health").unwrap(), 100.0);
}

#[test]
fn missing_names_raise_field_not_found() {
    let creature = creature();

    assert_eq!(
        get_value::<i32>(&creature, "meow"),
        Err(AccessError::FieldNotFound {
            name: "meow".into(),
        }),
    );
    assert!(matches!(
        get_field_with_name::<i32>(&creature, "meow"),
        Err(AccessError::FieldNotFound { .. }),
    ));
}

#[test]
fn ignored_members_are_invisible() {
    let creature = creature();

    assert!(!has_field(&creature, "cur_health"));
    assert!(has_field(&creature, "max_health"));
    assert_eq!(try_get_value::<f32>(&creature, "cur_health"), None);
}

#[test]
fn convertible_mode_widens() {
    let creature = creature();

    // Numeric conversion in both directions.
    assert_eq!(get_value::<f64>(&creature, "age").unwrap(), 21.0);
    assert_eq!(get_value::<i64>(&creature, "max_health").unwrap(), 100);

    // Widening into the open dynamic union.
    assert_eq!(get_value::<Value>(&creature, "age").unwrap(), Value::Int(21));
    assert_eq!(
        get_value::<Value>(&creature, "name").unwrap(),
        Value::from("Aubrey"),
    );

    // Widening into an optional.
    assert_eq!(get_value::<Option<i32>>(&creature, "age").unwrap(), Some(21));
}

#[test]
fn convertible_mode_still_fails_on_unrelated_types() {
    let creature = creature();

    // The name matches, so this must be a type mismatch, not a fallthrough.
    assert!(matches!(
        get_value::<String>(&creature, "age"),
        Err(AccessError::TypeMismatch { .. }),
    ));
}

#[test]
fn strict_mode_requires_the_exact_type() {
    let creature = creature();

    assert_eq!(get_value_strict::<i32>(&creature, "age").unwrap(), 21);

    // Implicitly compatible, still a mismatch.
    assert!(matches!(
        get_value_strict::<f32>(&creature, "age"),
        Err(AccessError::TypeMismatch { .. }),
    ));
    assert!(matches!(
        get_value_strict::<String>(&creature, "age"),
        Err(AccessError::TypeMismatch { .. }),
    ));
    assert!(matches!(
        get_value_strict::<i32>(&creature, "meow"),
        Err(AccessError::FieldNotFound { .. }),
    ));
}

#[test]
fn try_get_value_is_absent_exactly_when_the_raising_form_raises() {
    let creature = creature();

    assert_eq!(try_get_value::<i32>(&creature, "age"), Some(21));
    assert_eq!(try_get_value::<i32>(&creature, "meow"), None);
    // Both failure kinds collapse into the same absent result.
    assert_eq!(try_get_value::<String>(&creature, "age"), None);
}

#[test]
fn field_references_alias_the_live_field() {
    let mut creature = creature();

    assert_eq!(
        get_field_with_name::<i32>(&creature, "age").unwrap(),
        &21
    );

    *get_field_with_name_mut::<i32>(&mut creature, "age").unwrap() = 23;
    assert_eq!(creature.age, 23);

    assert!(try_get_field_with_name::<i32>(&creature, "meow").is_none());
    // Exact type only, even for references.
    assert!(try_get_field_with_name::<f64>(&creature, "max_health").is_none());
}

#[test]
fn set_value_reports_name_existence() {
    let mut creature = creature();

    assert!(set_value(&mut creature, "age", 22));
    assert_eq!(creature.age, 22);

    assert!(!set_value(&mut creature, "meow", 1));
    // The hidden member is not addressable.
    assert!(!set_value(&mut creature, "cur_health", 1.0_f32));
    assert_eq!(creature.cur_health, 50.0);
}

#[test]
fn set_value_converts_silently() {
    let mut creature = creature();

    // Int into a float field.
    assert!(set_value(&mut creature, "max_health", 120));
    assert_eq!(creature.max_health, 120.0);

    // Float into an int field, precision loss is silent.
    assert!(set_value(&mut creature, "age", 64.9_f64));
    assert_eq!(creature.age, 64);

    // Strings assign by value.
    assert!(set_value(&mut creature, "name", "Bob"));
    assert_eq!(creature.name, "Bob");
}

#[test]
fn records_rebuild_through_from_reflect() {
    let creature = creature();
    let snapshot = record_reflect::ops::Record::to_dynamic_record(&creature);

    let rebuilt = Creature::from_reflect(&snapshot).unwrap();
    assert_eq!(rebuilt.age, 21);
    assert_eq!(rebuilt.name, "Aubrey");
    // Hidden members come back default-constructed.
    assert_eq!(rebuilt.cur_health, 0.0);
}
