//! Field deserializers for submissions.
//!
//! A submission field with the wrong JSON type deserializes to `None`, so the
//! `required` rule reports it on that field alongside every other violation
//! instead of rejecting the whole body.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Any `T`; a value of the wrong type becomes `None`.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// An `i32`, also accepting integral floats such as `2.0`.
pub fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_integer(&value))
}

/// A list of `i32`. One non-integral element makes the whole list `None`.
pub fn lenient_integers<'de, D>(deserializer: D) -> Result<Option<Vec<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().map(as_integer).collect(),
        _ => None,
    })
}

fn as_integer(value: &Value) -> Option<i32> {
    let Value::Number(number) = value else {
        return None;
    };

    if let Some(int) = number.as_i64() {
        return i32::try_from(int).ok();
    }

    number
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= f64::from(i32::MIN) && *f <= f64::from(i32::MAX))
        .map(|f| f as i32)
}
