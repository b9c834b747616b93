//! Serde glue for values written in the mini-language.
//!
//! Use with `#[serde(with = "codec")]` on any field whose type implements
//! [`Codec`].

use serde::{Deserialize, Deserializer, Serializer, de};

use scribbler_parser::Codec;

pub(super) fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Codec,
    S: Serializer,
{
    serializer.serialize_str(&value.encode())
}

pub(super) fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Codec,
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    T::parse(&raw).map_err(de::Error::custom)
}
