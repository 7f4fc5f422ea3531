//! Traits, types, and functions helping with implementing serialization.
#![cfg(feature = "serde")]

use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;
use serde::de;

//------------ deserialize_native_or_str -------------------------------------

/// Deserializes a value either from its text or its integer form.
///
/// Human readable formats may provide either a string, which is handed to
/// the `FromStr` impl of `T`, or an integer, which is converted via the
/// native integer type `N`. Compact formats always provide the integer.
pub fn deserialize_native_or_str<'de, D, T, N>(
    deserializer: D,
) -> Result<T, D::Error>
where
    D: de::Deserializer<'de>,
    N: de::Deserialize<'de> + TryFrom<u64>,
    T: From<N> + FromStr,
    T::Err: fmt::Display,
{
    if deserializer.is_human_readable() {
        deserializer.deserialize_any(NativeOrStrVisitor::<T, N>(PhantomData))
    } else {
        N::deserialize(deserializer).map(T::from)
    }
}

struct NativeOrStrVisitor<T, N>(PhantomData<(T, N)>);

impl<'de, T, N> de::Visitor<'de> for NativeOrStrVisitor<T, N>
where
    N: TryFrom<u64>,
    T: From<N> + FromStr,
    T::Err: fmt::Display,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer or a string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        T::from_str(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match N::try_from(v) {
            Ok(value) => Ok(T::from(value)),
            Err(_) => {
                Err(E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }
        }
    }
}

//------------ deserialize_from_str ------------------------------------------

/// Deserializes a value from its text representation.
pub fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: de::Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    deserializer.deserialize_str(FromStrVisitor::<T>(PhantomData))
}

struct FromStrVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for FromStrVisitor<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        T::from_str(v).map_err(E::custom)
    }
}
