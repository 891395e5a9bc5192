use serde::{Deserialize, Deserializer};

/// Deserializes an i64 that some API deployments send as a JSON string.
///
/// Pagination counters (`total`, `total_pages`) have been observed both as
/// numbers and as quoted numbers depending on the backend; an empty string is
/// treated as zero.
pub fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrString {
        Num(i64),
        Str(String),
    }

    match NumOrString::deserialize(deserializer)? {
        NumOrString::Num(n) => Ok(n),
        NumOrString::Str(s) if s.is_empty() => Ok(0),
        NumOrString::Str(s) => s.parse::<i64>().map_err(serde::de::Error::custom),
    }
}
