use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Raised when a runtime value is not a string of the form `"<minutes> mins"`.
///
/// The underlying integer-parse failure is deliberately not carried; clients
/// only ever see this one condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid runtime format")]
pub struct InvalidRuntimeFormat;

/// Movie runtime in whole minutes.
///
/// Serializes as the JSON string `"<minutes> mins"` rather than a bare
/// number, and only accepts that exact shape back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Runtime(i32);

impl Runtime {
    pub fn new(minutes: i32) -> Self {
        Runtime(minutes)
    }

    pub fn minutes(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mins", self.0)
    }
}

impl From<i32> for Runtime {
    fn from(minutes: i32) -> Self {
        Runtime(minutes)
    }
}

impl FromStr for Runtime {
    type Err = InvalidRuntimeFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exactly two parts separated by a single ASCII space, suffix "mins".
        let mut parts = s.split(' ');
        let minutes = parts.next().ok_or(InvalidRuntimeFormat)?;
        if parts.next() != Some("mins") || parts.next().is_some() {
            return Err(InvalidRuntimeFormat);
        }
        let minutes = minutes.parse::<i32>().map_err(|_| InvalidRuntimeFormat)?;
        Ok(Runtime(minutes))
    }
}

impl Serialize for Runtime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Runtime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RuntimeVisitor;

        impl Visitor<'_> for RuntimeVisitor {
            type Value = Runtime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string of the form \"<minutes> mins\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<Runtime, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }

            // Bare numbers are rejected with the same opaque condition as
            // malformed strings.
            fn visit_i64<E>(self, _value: i64) -> Result<Runtime, E>
            where
                E: de::Error,
            {
                Err(de::Error::custom(InvalidRuntimeFormat))
            }

            fn visit_u64<E>(self, _value: u64) -> Result<Runtime, E>
            where
                E: de::Error,
            {
                Err(de::Error::custom(InvalidRuntimeFormat))
            }

            fn visit_f64<E>(self, _value: f64) -> Result<Runtime, E>
            where
                E: de::Error,
            {
                Err(de::Error::custom(InvalidRuntimeFormat))
            }
        }

        deserializer.deserialize_str(RuntimeVisitor)
    }
}
