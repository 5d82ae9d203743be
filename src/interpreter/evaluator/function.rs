use chrono::{NaiveDate, TimeDelta};

use crate::{
    ast::Span,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Value, ValueKind},
    },
};

/// Signature shared by all builtins.
pub type Builtin = fn(&[Value], Span) -> EvalResult<Value>;

/// Looks up a builtin function by name.
///
/// # Example
/// ```
/// use quill::{
///     ast::Span,
///     interpreter::{evaluator::function::builtin, value::core::Value},
/// };
///
/// let days = builtin("days").unwrap();
/// assert_eq!(days(&[Value::Int(2)], Span::default()).unwrap().to_string(),
///            "2.00:00:00");
/// assert!(builtin("nope").is_none());
/// ```
#[must_use]
pub fn builtin(name: &str) -> Option<Builtin> {
    let function: Builtin = match name {
        "date" => date,
        "days" => |args, span| span_of("days", args, span, TimeDelta::try_days),
        "hours" => |args, span| span_of("hours", args, span, TimeDelta::try_hours),
        "minutes" => |args, span| span_of("minutes", args, span, TimeDelta::try_minutes),
        "seconds" => |args, span| span_of("seconds", args, span, TimeDelta::try_seconds),
        _ => return None,
    };
    Some(function)
}

/// Checks that `args` holds between `min` and `max` arguments.
///
/// # Errors
/// Returns `ArgumentCountMismatch` naming the accepted counts.
pub fn check_arity(name: &str, args: &[Value], min: usize, max: usize, span: Span) -> EvalResult<()> {
    if (min..=max).contains(&args.len()) {
        return Ok(());
    }
    let expected = if min == max { min.to_string() } else { format!("{min} to {max}") };
    Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                              expected,
                                              found: args.len(),
                                              span })
}

fn int_argument(value: &Value, span: Span) -> EvalResult<i32> {
    match value.convert_to(ValueKind::Int, span)? {
        Value::Int(n) => Ok(n),
        other => Err(other.conversion_failure(ValueKind::Int, span)),
    }
}

fn component(name: &str, value: i32, span: Span) -> EvalResult<u32> {
    u32::try_from(value).map_err(|_| RuntimeError::InvalidArgument { details: format!("{name} must not be negative, found {value}"),
                                                                     span })
}

/// `date(year, month, day[, hour, minute, second])`
fn date(args: &[Value], span: Span) -> EvalResult<Value> {
    check_arity("date", args, 3, 6, span)?;

    let mut parts = [0; 6];
    for (slot, arg) in parts.iter_mut().zip(args) {
        *slot = int_argument(arg, span)?;
    }
    let [year, month, day, hour, minute, second] = parts;

    let invalid = || RuntimeError::InvalidArgument { details: format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02} is not a valid date"),
                                                     span };

    NaiveDate::from_ymd_opt(year,
                            component("month", month, span)?,
                            component("day", day, span)?)
    .and_then(|date| {
        date.and_hms_opt(component("hour", hour, span).ok()?,
                         component("minute", minute, span).ok()?,
                         component("second", second, span).ok()?)
    })
    .map(Value::Date)
    .ok_or_else(invalid)
}

/// Shared body of `days`, `hours`, `minutes` and `seconds`.
fn span_of(name: &str,
           args: &[Value],
           span: Span,
           make: fn(i64) -> Option<TimeDelta>)
           -> EvalResult<Value> {
    check_arity(name, args, 1, 1, span)?;

    let count = match args[0].convert_to(ValueKind::Long, span)? {
        Value::Long(n) => n,
        other => return Err(other.conversion_failure(ValueKind::Long, span)),
    };

    make(count).map(Value::Duration)
               .ok_or_else(|| RuntimeError::InvalidArgument { details: format!("{name}({count}) is out of range"),
                                                              span })
}
