/// The `Value` enum and its kind tags.
///
/// Defines the closed set of runtime values the evaluator works with, the
/// [`core::ValueKind`] tag used for promotion and error reporting, and the
/// stringification rule used when values are rendered.
pub mod core;
/// Typed coercion between value kinds.
///
/// Implements the conversions the promotion ladder asks for when it brings
/// two operands to a common numeric type.
pub mod convert;
/// Opaque host objects and enum values.
///
/// Host applications expose their own data through [`object::ScriptObject`].
/// An object may advertise the sequence capability, which lets it take part
/// in the list shift operators.
pub mod object;
/// Lazy integer ranges.
///
/// Defines [`range::RangeValue`], the restartable sequence produced by the
/// `..` and `..<` operators.
pub mod range;
