use alloc::boxed::Box;
use alloc::string::{String, ToString};

use crate::ops::Record;
use crate::{Reflect, Value};

// -----------------------------------------------------------------------------
// Map projection

/// Snapshots the record into a name → value map.
///
/// The map contains exactly the record's named fields (ignored members are
/// excluded) and is an independent snapshot: mutating it does not mutate the
/// record, and vice versa. Any map supporting keyed insertion works through
/// `FromIterator`.
///
/// # Examples
///
/// ```
/// use record_reflect::access::get_value_map;
/// use record_reflect::derive::Record;
/// use record_reflect::Value;
/// use std::collections::BTreeMap;
///
/// #[derive(Record)]
/// struct Player {
///     max_health: i32,
///     damage: f32,
///     #[record(ignore)]
///     cur_health: i32,
/// }
///
/// let player = Player { max_health: 120, damage: 10.0, cur_health: 50 };
/// let values: BTreeMap<String, Value> = get_value_map(&player);
///
/// assert_eq!(values.len(), 2);
/// assert_eq!(values["max_health"], Value::Int(120));
/// assert_eq!(values["damage"], Value::Float(10.0));
/// ```
pub fn get_value_map<M>(record: &dyn Record) -> M
where
    M: FromIterator<(String, Value)>,
{
    (0..record.field_len())
        .filter_map(|index| {
            let name = record.name_at(index)?;
            let value = record.field_at(index)?;
            Some((name.to_string(), value.to_value()))
        })
        .collect()
}

/// Snapshots the record into a name → field map.
///
/// Identical to [`get_value_map`] but stores boxed field clones instead of
/// dynamic values, preserving each field's concrete type.
///
/// # Examples
///
/// ```
/// use record_reflect::access::get_field_map;
/// use record_reflect::derive::Record;
/// use record_reflect::Reflect;
/// use std::collections::BTreeMap;
///
/// #[derive(Record)]
/// struct Player {
///     max_health: i32,
/// }
///
/// let player = Player { max_health: 120 };
/// let fields: BTreeMap<String, Box<dyn Reflect>> = get_field_map(&player);
///
/// assert_eq!(fields["max_health"].downcast_ref::<i32>(), Some(&120));
/// ```
pub fn get_field_map<M>(record: &dyn Record) -> M
where
    M: FromIterator<(String, Box<dyn Reflect>)>,
{
    (0..record.field_len())
        .filter_map(|index| {
            let name = record.name_at(index)?;
            let value = record.field_at(index)?;
            Some((name.to_string(), value.clone_value()))
        })
        .collect()
}
