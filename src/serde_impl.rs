//! Serde support: decimal strings for human-readable formats, the 16
//! little-endian bytes for binary ones.

use core::fmt;
use core::str::FromStr;

use serde::de::{Error, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Int128, UInt128};

macro_rules! impl_serde {
    ($t:ty, $visitor:ident, $expecting:literal) => {
        impl Serialize for $t {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                if serializer.is_human_readable() {
                    serializer.collect_str(self)
                } else {
                    serializer.serialize_bytes(&self.to_le_bytes())
                }
            }
        }

        struct $visitor;

        impl<'de> Visitor<'de> for $visitor {
            type Value = $t;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($expecting)
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                <$t>::from_str(v).map_err(Error::custom)
            }

            fn visit_bytes<E: Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                let bytes: [u8; 16] =
                    v.try_into().map_err(|_| Error::invalid_length(v.len(), &self))?;
                Ok(<$t>::from_le_bytes(bytes))
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                if deserializer.is_human_readable() {
                    deserializer.deserialize_str($visitor)
                } else {
                    deserializer.deserialize_bytes($visitor)
                }
            }
        }
    };
}

impl_serde!(UInt128, UInt128Visitor, "a decimal string or 16 little-endian bytes");
impl_serde!(Int128, Int128Visitor, "a decimal string or 16 little-endian bytes");
