use std::fmt;

use crate::interpreter::value::core::Value;

/// A host object exposed to scripts.
///
/// Objects are opaque to the evaluator: they only have a type name and,
/// optionally, the sequence capability. An object that returns `Some` from
/// [`ScriptObject::as_sequence`] takes part in `<<` and `>>` like a list; the
/// operators copy the returned items into a fresh list and never touch the
/// object itself.
///
/// # Example
/// ```
/// use quill::interpreter::value::{core::Value, object::ScriptObject};
///
/// #[derive(Debug)]
/// struct Weekdays;
///
/// impl ScriptObject for Weekdays {
///     fn type_name(&self) -> &str {
///         "weekdays"
///     }
///
///     fn as_sequence(&self) -> Option<Vec<Value>> {
///         Some(vec![Value::from("mon"), Value::from("tue")])
///     }
/// }
///
/// let days = Value::object(Weekdays);
/// assert_eq!(days.sequence().map(|items| items.len()), Some(2));
/// ```
pub trait ScriptObject: fmt::Debug {
    /// Name used in diagnostics and when the object is stringified.
    fn type_name(&self) -> &str;

    /// Snapshot of the object's items when it behaves as an ordered sequence.
    fn as_sequence(&self) -> Option<Vec<Value>> {
        None
    }
}

/// A member of a host enumeration, backed by a 32-bit integer.
///
/// Enum values promote like `int` in arithmetic and comparisons and render
/// as their member name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumValue {
    /// Name of the enumeration type.
    pub type_name: String,
    /// Name of the member.
    pub name:      String,
    /// Backing integer.
    pub value:     i32,
}

impl EnumValue {
    /// Creates an enum member.
    #[must_use]
    pub fn new(type_name: impl Into<String>, name: impl Into<String>, value: i32) -> Self {
        Self { type_name: type_name.into(),
               name: name.into(),
               value }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
