use serde::{Deserialize, Deserializer};

// The upstream sends `null` for values that are not known yet (scores of a
// scheduled game, the college of an undrafted player). Pair with
// `#[serde(default)]` so a missing key behaves the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
