use std::num::IntErrorKind;

use serde::de::Error;
use serde::{Deserialize, Deserializer};

// form-backed clients send numeric fields as strings, JSON clients as numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// Accepts `3`, `"3"`, `null` or an empty string (treated as absent).
pub fn deserialize_optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    to_i32(Option::<IntOrString>::deserialize(deserializer)?)
}

/// Like [`deserialize_optional_i32`], but a JSON number `0` is falsy and reads as
/// absent. The string `"0"` is kept.
pub fn deserialize_truthy_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        Some(IntOrString::Int(0)) => Ok(None),
        other => to_i32(other),
    }
}

fn to_i32<E: Error>(raw: Option<IntOrString>) -> Result<Option<i32>, E> {
    match raw {
        None => Ok(None),
        Some(IntOrString::Int(value)) => i32::try_from(value)
            .map(Some)
            .map_err(|_| E::custom(format!("{value} is out of range for i32"))),
        Some(IntOrString::Str(value)) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i32>()
                .map(Some)
                .map_err(|_| E::custom(format!("Wrong value {value}, can not parse to i32")))
        }
    }
}

/// Lenient `?page=` parsing: anything that is not an integer means the first page.
/// Integers too large for `i64` saturate, so they still land past the last page.
pub fn page_or_first(raw: Option<&str>) -> i64 {
    let Some(value) = raw else {
        return 1;
    };
    match value.trim().parse::<i64>() {
        Ok(page) => page,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 1,
        },
    }
}
