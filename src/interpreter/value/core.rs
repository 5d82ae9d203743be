use std::{
    cell::RefCell,
    fmt::{self, Write as _},
    rc::Rc,
};

use chrono::{NaiveDateTime, TimeDelta};

use crate::interpreter::value::{
    object::{EnumValue, ScriptObject},
    range::RangeValue,
};

/// Date format used when a date is stringified and no other format has been
/// configured.
pub const DEFAULT_DATE_FORMAT: &str = "%d %b %Y";

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce. Values are
/// transient results; lists are the only mutable containers, and the
/// evaluator never mutates a list it received as an operand.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value.
    Null,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A 32-bit signed integer.
    Int(i32),
    /// A 64-bit signed integer.
    Long(i64),
    /// A single precision floating-point number.
    Float(f32),
    /// A double precision floating-point number.
    Double(f64),
    /// A text value.
    String(String),
    /// A calendar date and time of day.
    Date(NaiveDateTime),
    /// A signed time span.
    Duration(TimeDelta),
    /// A mutable, shared list of values.
    List(Rc<RefCell<Vec<Self>>>),
    /// A lazy integer range.
    Range(RangeValue),
    /// A member of a host enumeration.
    Enum(EnumValue),
    /// An opaque host object.
    Object(Rc<dyn ScriptObject>),
}

/// The kind tag of a [`Value`].
///
/// Kinds drive the promotion ladder and appear in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Null`]
    Null,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Int`]
    Int,
    /// [`Value::Long`]
    Long,
    /// [`Value::Float`]
    Float,
    /// [`Value::Double`]
    Double,
    /// [`Value::String`]
    String,
    /// [`Value::Date`]
    Date,
    /// [`Value::Duration`]
    Duration,
    /// [`Value::List`]
    List,
    /// [`Value::Range`]
    Range,
    /// [`Value::Enum`]
    Enum,
    /// [`Value::Object`]
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Date => "date",
            Self::Duration => "timespan",
            Self::List => "list",
            Self::Range => "range",
            Self::Enum => "enum",
            Self::Object => "object",
        };
        write!(f, "{name}")
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Self::Date(v)
    }
}

impl From<TimeDelta> for Value {
    fn from(v: TimeDelta) -> Self {
        Self::Duration(v)
    }
}

impl From<RangeValue> for Value {
    fn from(v: RangeValue) -> Self {
        Self::Range(v)
    }
}

impl From<EnumValue> for Value {
    fn from(v: EnumValue) -> Self {
        Self::Enum(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::list(v)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Duration(a), Self::Duration(b)) => a == b,
            (Self::List(a), Self::List(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Self::Range(a), Self::Range(b)) => a == b,
            (Self::Enum(a), Self::Enum(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            _ => false,
        }
    }
}

impl Value {
    /// Wraps `items` in a fresh list.
    #[must_use]
    pub fn list(items: Vec<Self>) -> Self {
        Self::List(Rc::new(RefCell::new(items)))
    }

    /// Wraps a host object.
    #[must_use]
    pub fn object(object: impl ScriptObject + 'static) -> Self {
        Self::Object(Rc::new(object))
    }

    /// Returns the kind tag of the value.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Int(1).kind(), ValueKind::Int);
    /// assert_eq!(Value::from("a").kind(), ValueKind::String);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Long(_) => ValueKind::Long,
            Self::Float(_) => ValueKind::Float,
            Self::Double(_) => ValueKind::Double,
            Self::String(_) => ValueKind::String,
            Self::Date(_) => ValueKind::Date,
            Self::Duration(_) => ValueKind::Duration,
            Self::List(_) => ValueKind::List,
            Self::Range(_) => ValueKind::Range,
            Self::Enum(_) => ValueKind::Enum,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` if the value is [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Value::String`].
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Queries the sequence capability.
    ///
    /// Lists and host objects that expose a sequence return a copy of their
    /// items; every other value returns `None`. The copy is independent of
    /// the original container.
    #[must_use]
    pub fn sequence(&self) -> Option<Vec<Self>> {
        match self {
            Self::List(items) => Some(items.borrow().clone()),
            Self::Object(object) => object.as_sequence(),
            _ => None,
        }
    }

    /// Writes the stringified form of the value, formatting dates with
    /// `date_format`.
    ///
    /// Null renders as the empty string, numbers in their shortest
    /// round-trip form, durations as `[-][d.]hh:mm:ss[.fffffff]`, lists and
    /// ranges as `[a, b]`, enums by member name and objects by type name.
    /// A date format chrono cannot apply falls back to
    /// [`DEFAULT_DATE_FORMAT`].
    pub fn write_with(&self, out: &mut impl fmt::Write, date_format: &str) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(out, "{b}"),
            Self::Int(n) => write!(out, "{n}"),
            Self::Long(n) => write!(out, "{n}"),
            Self::Float(x) => write!(out, "{x}"),
            Self::Double(x) => write!(out, "{x}"),
            Self::String(s) => out.write_str(s),
            Self::Date(date) => {
                let mut text = String::new();
                if fmt::write(&mut text, format_args!("{}", date.format(date_format))).is_err() {
                    text.clear();
                    write!(text, "{}", date.format(DEFAULT_DATE_FORMAT))?;
                }
                out.write_str(&text)
            },
            Self::Duration(span) => write_duration(out, *span),
            Self::List(items) => {
                out.write_char('[')?;
                for (index, item) in items.borrow().iter().enumerate() {
                    if index > 0 {
                        out.write_str(", ")?;
                    }
                    item.write_with(out, date_format)?;
                }
                out.write_char(']')
            },
            Self::Range(range) => write!(out, "{range}"),
            Self::Enum(member) => write!(out, "{member}"),
            Self::Object(object) => out.write_str(object.type_name()),
        }
    }

    /// Stringifies the value with the given date format.
    #[must_use]
    pub fn render(&self, date_format: &str) -> String {
        let mut text = String::new();
        // String writes cannot fail and the date branch recovers on its own.
        let _ = self.write_with(&mut text, date_format);
        text
    }
}

/// Number of list items shown by [`Value::describe`].
const DESCRIBED_ITEMS: usize = 8;

impl Value {
    /// Renders the value for diagnostics.
    ///
    /// Unlike [`Value::render`], ranges are shown by their bounds and long
    /// lists are cut short, so the text stays small however large the
    /// value is.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::{core::Value, range::RangeValue};
    ///
    /// assert_eq!(Value::from(RangeValue::exclusive(0, 2_000_000_000)).describe(),
    ///            "0..<2000000000");
    ///
    /// let list = Value::list((0..20).map(Value::Int).collect());
    /// assert_eq!(list.describe(), "[0, 1, 2, 3, 4, 5, 6, 7, ...]");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Range(range) => {
                let op = if range.is_inclusive() { ".." } else { "..<" };
                format!("{}{op}{}", range.start(), range.end())
            },
            Self::List(items) => {
                let items = items.borrow();
                let mut parts: Vec<String> =
                    items.iter().take(DESCRIBED_ITEMS).map(Self::describe).collect();
                if items.len() > DESCRIBED_ITEMS {
                    parts.push("...".to_string());
                }
                format!("[{}]", parts.join(", "))
            },
            _ => self.to_string(),
        }
    }
}

/// Writes a time span as `[-][d.]hh:mm:ss[.fffffff]` with 100ns ticks.
fn write_duration(out: &mut impl fmt::Write, span: TimeDelta) -> fmt::Result {
    if span < TimeDelta::zero() {
        out.write_char('-')?;
    }
    let span = span.abs();
    let total_seconds = span.num_seconds();
    let days = total_seconds / 86_400;
    let hours = (total_seconds / 3_600) % 24;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;
    let ticks = span.subsec_nanos() / 100;

    if days > 0 {
        write!(out, "{days}.")?;
    }
    write!(out, "{hours:02}:{minutes:02}:{seconds:02}")?;
    if ticks > 0 {
        write!(out, ".{ticks:07}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, DEFAULT_DATE_FORMAT)
    }
}
