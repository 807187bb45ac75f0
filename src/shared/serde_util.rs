//! Custom serde helpers for Facturama wire formats.

use serde::{Deserialize, Deserializer};

/// Deserializes JSON `null` as `T::default()`.
///
/// Facturama sends `null` for empty strings and lists on read models.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
