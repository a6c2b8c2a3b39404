pub use contact::*;
pub use post::*;
pub use project::*;
pub use resource_kind::*;
pub use theme::*;

mod contact;
mod post;
mod project;
mod resource_kind;
mod theme;

use serde::{Deserialize, Deserializer};

/// The content API sends `null` for fields it never filled in.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
