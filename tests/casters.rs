//! Bulk assignment through the caster policies.

use std::collections::HashMap;

use record_reflect::access::{set_values, set_values_with, Caster};
use record_reflect::derive::Record;
use record_reflect::ops::CastError;
use record_reflect::{Reflect, Value, ValueKind};

#[derive(Record)]
struct Creature {
    age: i32,
    name: String,
    max_health: f32,
}

fn creature() -> Creature {
    Creature {
        age: 21,
        name: "Aubrey".to_string(),
        max_health: 100.0,
    }
}

#[test]
fn value_sources_extract_through_the_active_tag() {
    let mut creature = creature();

    let updated = set_values(
        &mut creature,
        [
            ("age", Value::Int(95)),
            ("name", Value::from("Bob")),
            ("max_health", Value::Float(200.0)),
        ],
    )
    .unwrap();

    assert_eq!(updated, 3);
    assert_eq!(creature.age, 95);
    assert_eq!(creature.name, "Bob");
    assert_eq!(creature.max_health, 200.0);
}

#[test]
fn unmatched_keys_are_ignored_and_unmentioned_fields_untouched() {
    let mut creature = creature();

    let mut mapping = HashMap::new();
    mapping.insert("age", Value::Int(40));
    mapping.insert("meow", Value::Int(1));

    let updated = set_values(&mut creature, mapping).unwrap();

    assert_eq!(updated, 1);
    assert_eq!(creature.age, 40);
    assert_eq!(creature.name, "Aubrey");
    assert_eq!(creature.max_health, 100.0);
}

#[test]
fn a_wrong_tag_propagates_the_casters_error() {
    let mut creature = creature();

    // A float field does not extract from an `Int` tag under the
    // tag-checked policy.
    let result = set_values(&mut creature, [("max_health", Value::Int(5))]);

    assert_eq!(
        result,
        Err(CastError::WrongKind {
            expected: ValueKind::Float,
            found: ValueKind::Int,
        }),
    );
    assert_eq!(creature.max_health, 100.0);
}

#[test]
fn plain_scalar_sources_convert_numerically() {
    let mut creature = creature();

    // `i32` values flow into both the int and the float field.
    let updated = set_values(&mut creature, [("age", 30), ("max_health", 250)]).unwrap();

    assert_eq!(updated, 2);
    assert_eq!(creature.age, 30);
    assert_eq!(creature.max_health, 250.0);
}

#[test]
fn boxed_sources_require_the_exact_payload_type() {
    let mut creature = creature();

    let updated = set_values(
        &mut creature,
        [("age", Box::new(50_i32) as Box<dyn Reflect>)],
    )
    .unwrap();
    assert_eq!(updated, 1);
    assert_eq!(creature.age, 50);

    // The payload's real type differs: the extraction fails.
    let result = set_values(
        &mut creature,
        [("age", Box::new(1.5_f64) as Box<dyn Reflect>)],
    );
    assert_eq!(
        result,
        Err(CastError::WrongType {
            expected: "i32",
            found: "f64",
        }),
    );
    assert_eq!(creature.age, 50);
}

#[test]
fn a_custom_caster_overrides_the_builtin_policies() {
    #[derive(Default)]
    struct ParseCaster;

    impl Caster<&str> for ParseCaster {
        fn cast(&self, source: &str, target: &mut dyn Reflect) -> Result<(), CastError> {
            let parsed: f64 = source
                .parse()
                .map_err(|_| CastError::Unsupported { type_name: "str" })?;
            let value = Value::Float(parsed).coerced_to(target.reflect_ref().kind());
            target.try_apply(&value)
        }
    }

    let mut creature = creature();

    let updated = set_values_with::<ParseCaster, _, _, _>(
        &mut creature,
        [("age", "64"), ("max_health", "12.5")],
    )
    .unwrap();

    assert_eq!(updated, 2);
    assert_eq!(creature.age, 64);
    assert_eq!(creature.max_health, 12.5);

    let result =
        set_values_with::<ParseCaster, _, _, _>(&mut creature, [("age", "not a number")]);
    assert_eq!(result, Err(CastError::Unsupported { type_name: "str" }));
}

#[test]
fn nested_record_values_apply_field_wise() {
    #[derive(Record)]
    struct Outer {
        inner: Inner,
        tag: i32,
    }

    #[derive(Record)]
    struct Inner {
        a: i32,
    }

    let mut outer = Outer {
        inner: Inner { a: 1 },
        tag: 0,
    };

    let mut replacement = record_reflect::ops::DynamicRecord::new();
    replacement.insert("a", 9_i32);

    let updated = set_values(&mut outer, [("inner", replacement)]).unwrap();

    assert_eq!(updated, 1);
    assert_eq!(outer.inner.a, 9);
    assert_eq!(outer.tag, 0);
}
