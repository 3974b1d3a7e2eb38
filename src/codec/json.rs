//! JSON codec.
//!
//! The field map is written as one flat object in key order; decoding keeps
//! unknown members as custom fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CodecError;
use crate::types::{Fields, Problem};

impl Problem {
    /// Encodes the fields as JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Returns the JSON encoding as a string.
    ///
    /// Every field value is plain JSON, so encoding cannot fail in practice;
    /// should it ever, the result is an empty string.
    #[must_use]
    pub fn json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decodes a problem from JSON.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl Serialize for Problem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Problem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Fields::deserialize(deserializer)?;
        Ok(Self { fields, cause: None })
    }
}
