//! Player records served by the listing endpoint.

use serde::{Deserialize, Deserializer};

/// A single player as listed by `/api/players`.
///
/// Every field tolerates `null` or absence; the admin list still shows a
/// row for a half-filled record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Player {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skill_rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_captain: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub access_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
