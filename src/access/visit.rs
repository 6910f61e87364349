use core::ops::ControlFlow;

use crate::ops::Record;
use crate::{Reflect, Value};

// -----------------------------------------------------------------------------
// FieldRef

/// The (name, value) view of one named field, as handed to
/// [`visit_fields`] callbacks.
pub struct FieldRef<'a> {
    name: &'a str,
    value: &'a dyn Reflect,
}

impl<'a> FieldRef<'a> {
    /// Returns the field's name.
    #[inline]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the field's value.
    #[inline]
    pub const fn value(&self) -> &'a dyn Reflect {
        self.value
    }

    /// Returns an owned dynamic snapshot of the field's value.
    #[inline]
    pub fn to_value(&self) -> Value {
        self.value.to_value()
    }
}

// -----------------------------------------------------------------------------
// VisitFlow

/// Controls traversal from a visitor callback's return value.
///
/// A `bool` result stops on `true`; a [`ControlFlow`] result stops on
/// `Break`; a `()` result never stops.
pub trait VisitFlow {
    /// Whether traversal should stop after this callback.
    fn should_stop(&self) -> bool;
}

impl VisitFlow for () {
    #[inline]
    fn should_stop(&self) -> bool {
        false
    }
}

impl VisitFlow for bool {
    #[inline]
    fn should_stop(&self) -> bool {
        *self
    }
}

impl VisitFlow for ControlFlow<()> {
    #[inline]
    fn should_stop(&self) -> bool {
        self.is_break()
    }
}

// -----------------------------------------------------------------------------
// Visitors

/// Invokes `visit` once per named field, in declaration order.
///
/// Ignored members are never passed to the callback. When the callback
/// returns `true` (or `ControlFlow::Break`), traversal stops immediately and
/// the remaining fields are not visited; a `()`-returning callback always
/// visits every field.
///
/// # Examples
///
/// ```
/// use record_reflect::access::visit_fields;
/// use record_reflect::derive::Record;
///
/// #[derive(Record)]
/// struct Player {
///     max_health: i32,
///     damage: f32,
/// }
///
/// let player = Player { max_health: 100, damage: 10.0 };
///
/// let mut names = Vec::new();
/// visit_fields(&player, |field| names.push(field.name().to_string()));
/// assert_eq!(names, ["max_health", "damage"]);
///
/// // Early exit: stop at the first `i32` field.
/// let mut visited = 0;
/// visit_fields(&player, |field| {
///     visited += 1;
///     field.value().is::<i32>()
/// });
/// assert_eq!(visited, 1);
/// ```
pub fn visit_fields<O, F>(record: &dyn Record, mut visit: F)
where
    O: VisitFlow,
    F: FnMut(FieldRef<'_>) -> O,
{
    for index in 0..record.field_len() {
        let (Some(name), Some(value)) = (record.name_at(index), record.field_at(index)) else {
            continue;
        };
        if visit(FieldRef { name, value }).should_stop() {
            break;
        }
    }
}

/// Invokes `visit` once per named field value, in declaration order.
///
/// Identical to [`visit_fields`] but passes only the value, not the name.
pub fn visit_values<O, F>(record: &dyn Record, mut visit: F)
where
    O: VisitFlow,
    F: FnMut(&dyn Reflect) -> O,
{
    for index in 0..record.field_len() {
        let Some(value) = record.field_at(index) else {
            continue;
        };
        if visit(value).should_stop() {
            break;
        }
    }
}
