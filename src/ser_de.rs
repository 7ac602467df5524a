use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::{Error as _, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeStruct;

use crate::Mapping;


impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Mapping", 2)?;
        state.serialize_field("original", &self.original)?;
        state.serialize_field("replacement", &self.replacement)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MappingVisitor;
        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = Mapping;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a map with an original and a replacement name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut original: Option<String> = None;
                let mut replacement: Option<String> = None;
                while let Some(key) = map.next_key::<String>()? {
                    // the aliases match the field names found in existing mapping files
                    match key.as_str() {
                        "original"|"old"|"from" => {
                            if original.is_some() {
                                return Err(A::Error::duplicate_field("original"));
                            }
                            original = Some(map.next_value()?);
                        },
                        "replacement"|"new"|"_new"|"to" => {
                            if replacement.is_some() {
                                return Err(A::Error::duplicate_field("replacement"));
                            }
                            replacement = Some(map.next_value()?);
                        },
                        _ => {
                            let IgnoredAny = map.next_value()?;
                        },
                    }
                }
                let original = original
                    .ok_or_else(|| A::Error::missing_field("original"))?;
                let replacement = replacement
                    .ok_or_else(|| A::Error::missing_field("replacement"))?;
                Ok(Mapping {
                    original,
                    replacement,
                })
            }
        }
        deserializer.deserialize_map(MappingVisitor)
    }
}
