//! Lenient numeric decoding for provider payloads.
//!
//! The sales API serializes decimal columns as text (`"1234.50"`) and
//! aggregates as plain JSON numbers, sometimes both in the same response.
//! These helpers accept either form. `null` decodes as zero, matching the
//! provider's own "fill missing with 0" convention.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            NumberOrText::Number(n) => Ok(n),
            NumberOrText::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(0.0);
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| E::custom(format!("invalid numeric value: {:?}", s)))
            }
        }
    }
}

fn to_f64<E: de::Error>(value: Option<NumberOrText>) -> Result<f64, E> {
    match value {
        Some(v) => v.into_f64(),
        None => Ok(0.0),
    }
}

/// Decode a number or numeric string as `f64`.
pub fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    to_f64(Option::<NumberOrText>::deserialize(deserializer)?)
}

/// Decode a non-negative count given as number or string.
pub fn u64_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = to_f64::<D::Error>(Option::<NumberOrText>::deserialize(deserializer)?)?;
    if !value.is_finite() || value < 0.0 {
        return Err(de::Error::custom(format!("invalid count: {}", value)));
    }
    Ok(value.round() as u64)
}

/// Decode a sequence of numbers/numeric strings; `null` becomes an empty list.
pub fn vec_f64_lenient<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Option<NumberOrText>>>::deserialize(deserializer)?;
    raw.unwrap_or_default().into_iter().map(to_f64).collect()
}
