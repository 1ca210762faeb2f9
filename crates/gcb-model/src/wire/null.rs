//! Declared fields: `null` on the wire means unset.
//!
//! Pair with `default` so an absent member and a `null` member decode the
//! same way: `#[serde(default, deserialize_with = "wire::null::deserialize")]`.
//! `Option` fields get this from serde already.

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
