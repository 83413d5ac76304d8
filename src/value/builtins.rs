//! Built-in methods resolved when a value has no own property of that name.
//!
//! Each built-in is a plain `fn(receiver, arguments)`; [`lookup`] wraps it in
//! a named [`Function`] so it behaves like any other method value.

use std::rc::Rc;

use super::{Function, Key, Value, format_number};
use crate::evaluate::{EvaluationError, Result};

type Builtin = fn(&Value, &[Value]) -> Result<Value>;

pub(super) fn lookup(value: &Value, key: &Key) -> Option<Value> {
    let Key::Name(name) = key else {
        return None;
    };
    let builtin = match value {
        Value::Undefined | Value::Null => return None,
        Value::String(_) => string_method(name),
        Value::Number(_) => number_method(name),
        Value::Array(_) => array_method(name),
        Value::Object(_) => object_method(name),
        Value::Bool(_) | Value::Function(_) => None,
    }
    .or_else(|| common_method(name))?;
    Some(Value::Function(
        Function::method(builtin).named(Rc::clone(name)),
    ))
}

fn common_method(name: &str) -> Option<Builtin> {
    let method: Builtin = match name {
        "toString" => to_string,
        _ => return None,
    };
    Some(method)
}

fn string_method(name: &str) -> Option<Builtin> {
    let method: Builtin = match name {
        "concat" => string_concat,
        "substr" => string_substr,
        "substring" => string_substring,
        "slice" => string_slice,
        "charAt" => string_char_at,
        "indexOf" => string_index_of,
        "includes" => string_includes,
        "startsWith" => string_starts_with,
        "endsWith" => string_ends_with,
        "toUpperCase" => string_to_upper_case,
        "toLowerCase" => string_to_lower_case,
        "trim" => string_trim,
        "split" => string_split,
        "repeat" => string_repeat,
        _ => return None,
    };
    Some(method)
}

fn number_method(name: &str) -> Option<Builtin> {
    let method: Builtin = match name {
        "toFixed" => number_to_fixed,
        _ => return None,
    };
    Some(method)
}

fn array_method(name: &str) -> Option<Builtin> {
    let method: Builtin = match name {
        "concat" => array_concat,
        "join" => array_join,
        "slice" => array_slice,
        "indexOf" => array_index_of,
        "includes" => array_includes,
        "map" => array_map,
        "filter" => array_filter,
        "reduce" => array_reduce,
        "reverse" => array_reverse,
        _ => return None,
    };
    Some(method)
}

fn object_method(name: &str) -> Option<Builtin> {
    let method: Builtin = match name {
        "hasOwnProperty" => object_has_own_property,
        _ => return None,
    };
    Some(method)
}

// =============================================================================
// Argument helpers
// =============================================================================

fn argument(arguments: &[Value], position: usize) -> Value {
    arguments.get(position).cloned().unwrap_or_default()
}

fn integer(value: &Value) -> f64 {
    let number = value.to_number();
    if number.is_nan() { 0.0 } else { number.trunc() }
}

/// Resolves a possibly negative position against `length`; `undefined`
/// selects `default`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn relative_index(value: &Value, length: usize, default: usize) -> usize {
    if value.is_undefined() {
        return default;
    }
    let position = integer(value);
    let length = length as f64;
    if position < 0.0 {
        (length + position).max(0.0) as usize
    } else {
        position.min(length) as usize
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn clamped_index(value: &Value, length: usize, default: usize) -> usize {
    if value.is_undefined() {
        return default;
    }
    integer(value).clamp(0.0, length as f64) as usize
}

fn characters(receiver: &Value) -> Vec<char> {
    receiver.to_display_string().chars().collect()
}

fn text(characters: &[char]) -> Value {
    Value::from(characters.iter().collect::<String>())
}

fn elements(receiver: &Value, method: &str) -> Result<Rc<[Value]>> {
    match receiver {
        Value::Array(elements) => Ok(Rc::clone(elements)),
        other => Err(EvaluationError::thrown(format!(
            "Array.prototype.{method} called on {}",
            other.kind()
        ))),
    }
}

fn callback(arguments: &[Value]) -> Result<Function> {
    match arguments.first() {
        Some(Value::Function(function)) => Ok(function.clone()),
        other => Err(EvaluationError::thrown(format!(
            "{} is not a function",
            other.cloned().unwrap_or_default().render()
        ))),
    }
}

fn position_value(position: Option<usize>) -> Value {
    position.map_or(Value::from(-1), Value::from)
}

// =============================================================================
// Common
// =============================================================================

fn to_string(receiver: &Value, _arguments: &[Value]) -> Result<Value> {
    Ok(Value::from(receiver.to_display_string()))
}

// =============================================================================
// Strings
// =============================================================================

fn string_concat(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let mut result = receiver.to_display_string();
    for argument in arguments {
        result.push_str(&argument.to_display_string());
    }
    Ok(Value::from(result))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn string_substr(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let characters = characters(receiver);
    let start = relative_index(&argument(arguments, 0), characters.len(), 0);
    let available = characters.len() - start;
    let length = argument(arguments, 1);
    let count = if length.is_undefined() {
        available
    } else {
        integer(&length).clamp(0.0, available as f64) as usize
    };
    Ok(text(&characters[start..start + count]))
}

fn string_substring(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let characters = characters(receiver);
    let length = characters.len();
    let start = clamped_index(&argument(arguments, 0), length, 0);
    let end = clamped_index(&argument(arguments, 1), length, length);
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    Ok(text(&characters[start..end]))
}

fn string_slice(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let characters = characters(receiver);
    let length = characters.len();
    let start = relative_index(&argument(arguments, 0), length, 0);
    let end = relative_index(&argument(arguments, 1), length, length);
    if start >= end {
        return Ok(Value::from(""));
    }
    Ok(text(&characters[start..end]))
}

fn string_char_at(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let characters = characters(receiver);
    let position = integer(&argument(arguments, 0));
    if position < 0.0 {
        return Ok(Value::from(""));
    }
    let index = clamped_index(&Value::from(position), characters.len(), 0);
    Ok(characters
        .get(index)
        .map_or_else(|| Value::from(""), |character| Value::from(*character)))
}

fn string_index_of(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let characters = characters(receiver);
    let search: Vec<char> = argument(arguments, 0)
        .to_display_string()
        .chars()
        .collect();
    let from = clamped_index(&argument(arguments, 1), characters.len(), 0);
    if search.len() > characters.len() {
        return Ok(position_value(None));
    }
    let found = (from..=characters.len() - search.len())
        .find(|&start| characters[start..start + search.len()] == search[..]);
    Ok(position_value(found))
}

fn string_includes(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let search = argument(arguments, 0).to_display_string();
    Ok(Value::from(
        receiver.to_display_string().contains(search.as_str()),
    ))
}

fn string_starts_with(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let search = argument(arguments, 0).to_display_string();
    Ok(Value::from(
        receiver.to_display_string().starts_with(search.as_str()),
    ))
}

fn string_ends_with(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let search = argument(arguments, 0).to_display_string();
    Ok(Value::from(
        receiver.to_display_string().ends_with(search.as_str()),
    ))
}

fn string_to_upper_case(receiver: &Value, _arguments: &[Value]) -> Result<Value> {
    Ok(Value::from(receiver.to_display_string().to_uppercase()))
}

fn string_to_lower_case(receiver: &Value, _arguments: &[Value]) -> Result<Value> {
    Ok(Value::from(receiver.to_display_string().to_lowercase()))
}

fn string_trim(receiver: &Value, _arguments: &[Value]) -> Result<Value> {
    Ok(Value::from(receiver.to_display_string().trim()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn string_split(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let source = receiver.to_display_string();
    let limit = match argument(arguments, 1) {
        Value::Undefined => usize::MAX,
        other => integer(&other).max(0.0) as usize,
    };
    let separator = argument(arguments, 0);
    let parts: Vec<Value> = if separator.is_undefined() {
        vec![Value::from(source)]
    } else {
        let separator = separator.to_display_string();
        if separator.is_empty() {
            source.chars().map(Value::from).collect()
        } else {
            source.split(separator.as_str()).map(Value::from).collect()
        }
    };
    Ok(parts.into_iter().take(limit).collect())
}

/// Longest string, in bytes, a built-in may produce.
const MAX_STRING_LENGTH: usize = (1 << 29) - 24;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn string_repeat(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let count = integer(&argument(arguments, 0));
    if count < 0.0 || count.is_infinite() {
        return Err(EvaluationError::thrown(format!(
            "Invalid count value: {}",
            format_number(count)
        )));
    }
    let source = receiver.to_display_string();
    let count = count as usize;
    match source.len().checked_mul(count) {
        Some(length) if length <= MAX_STRING_LENGTH => Ok(Value::from(source.repeat(count))),
        _ => Err(EvaluationError::thrown("Invalid string length")),
    }
}

// =============================================================================
// Numbers
// =============================================================================

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn number_to_fixed(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let digits = integer(&argument(arguments, 0));
    if !(0.0..=100.0).contains(&digits) {
        return Err(EvaluationError::thrown(
            "toFixed() digits argument must be between 0 and 100",
        ));
    }
    let number = receiver.to_number();
    if !number.is_finite() || number.abs() >= 1e21 {
        return Ok(Value::from(format_number(number)));
    }
    Ok(Value::from(format!("{number:.*}", digits as usize)))
}

// =============================================================================
// Arrays
// =============================================================================

fn array_concat(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let mut result = elements(receiver, "concat")?.to_vec();
    for argument in arguments {
        match argument {
            Value::Array(more) => result.extend(more.iter().cloned()),
            other => result.push(other.clone()),
        }
    }
    Ok(Value::from(result))
}

fn array_join(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let separator = match argument(arguments, 0) {
        Value::Undefined => ",".to_string(),
        other => other.to_display_string(),
    };
    let joined = elements(receiver, "join")?
        .iter()
        .map(|element| match element {
            Value::Undefined | Value::Null => String::new(),
            other => other.to_display_string(),
        })
        .collect::<Vec<_>>()
        .join(&separator);
    Ok(Value::from(joined))
}

fn array_slice(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let elements = elements(receiver, "slice")?;
    let length = elements.len();
    let start = relative_index(&argument(arguments, 0), length, 0);
    let end = relative_index(&argument(arguments, 1), length, length);
    if start >= end {
        return Ok(Value::array(Vec::<Value>::new()));
    }
    Ok(Value::from(elements[start..end].to_vec()))
}

fn array_index_of(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let search = argument(arguments, 0);
    let found = elements(receiver, "indexOf")?
        .iter()
        .position(|element| *element == search);
    Ok(position_value(found))
}

fn array_includes(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let search = argument(arguments, 0);
    let search_is_nan = search.as_number().is_some_and(f64::is_nan);
    let found = elements(receiver, "includes")?.iter().any(|element| {
        *element == search || (search_is_nan && element.as_number().is_some_and(f64::is_nan))
    });
    Ok(Value::from(found))
}

fn array_map(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let function = callback(arguments)?;
    elements(receiver, "map")?
        .iter()
        .enumerate()
        .map(|(index, element)| {
            function.call(
                &Value::Undefined,
                &[element.clone(), Value::from(index), receiver.clone()],
            )
        })
        .collect::<Result<Vec<_>>>()
        .map(Value::from)
}

fn array_filter(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let function = callback(arguments)?;
    let mut kept = Vec::new();
    for (index, element) in elements(receiver, "filter")?.iter().enumerate() {
        let verdict = function.call(
            &Value::Undefined,
            &[element.clone(), Value::from(index), receiver.clone()],
        )?;
        if verdict.truthy() {
            kept.push(element.clone());
        }
    }
    Ok(Value::from(kept))
}

fn array_reduce(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let function = callback(arguments)?;
    let elements = elements(receiver, "reduce")?;
    let (mut accumulator, start) = match arguments.get(1) {
        Some(initial) => (initial.clone(), 0),
        None => match elements.first() {
            Some(first) => (first.clone(), 1),
            None => {
                return Err(EvaluationError::thrown(
                    "Reduce of empty array with no initial value",
                ));
            }
        },
    };
    for (index, element) in elements.iter().enumerate().skip(start) {
        accumulator = function.call(
            &Value::Undefined,
            &[
                accumulator,
                element.clone(),
                Value::from(index),
                receiver.clone(),
            ],
        )?;
    }
    Ok(accumulator)
}

fn array_reverse(receiver: &Value, _arguments: &[Value]) -> Result<Value> {
    Ok(elements(receiver, "reverse")?
        .iter()
        .rev()
        .cloned()
        .collect())
}

// =============================================================================
// Objects
// =============================================================================

fn object_has_own_property(receiver: &Value, arguments: &[Value]) -> Result<Value> {
    let name = argument(arguments, 0).to_display_string();
    Ok(Value::from(
        receiver
            .as_object()
            .is_some_and(|object| object.contains(&name)),
    ))
}
