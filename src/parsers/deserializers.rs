use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, mapping `null` to an empty string.
///
/// The countries API returns `null` for fields such as `currency` or `capital` on
/// territories that have none. Matching treats those exactly like `""`.
pub fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
