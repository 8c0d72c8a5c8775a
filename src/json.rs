//! # JSON Module
//!
//! serde hooks for [`Optional`] and byte-level helpers over `serde_json`.
//!
//! A present value encodes exactly as the value itself; an absent one encodes
//! as `null`. Decoding `null` yields [`Optional::Absent`], and a field left out
//! of an enclosing serde-derived struct also comes back absent, because serde
//! routes missing fields through the option path.
//!
//! ```
//! use optional::Optional;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     a: Optional<String>,
//!     b: Optional<i64>,
//! }
//!
//! let r: Record = serde_json::from_str(r#"{"a":"hello"}"#).unwrap();
//! assert_eq!(r.a, Optional::new("hello".to_string()));
//! assert!(!r.b.is_present());
//! assert_eq!(serde_json::to_string(&r).unwrap(), r#"{"a":"hello","b":null}"#);
//! ```

use crate::error::{OptionalError, Result};
use crate::optional::Optional;
use serde::de::DeserializeOwned;
use serde::ser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Optional::Present(v) => serializer.serialize_some(v),
            Optional::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}

impl<T: Serialize> Optional<T> {
    /// Encodes the container as JSON bytes.
    ///
    /// A present value whose encoding is `null` (a non-finite float, `()`,
    /// a nested `None`) is rejected, since it would decode back as absent.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let bytes = serde_json::to_vec(self).map_err(OptionalError::Encode)?;
        if self.is_present() && bytes == b"null" {
            return Err(OptionalError::Encode(ser::Error::custom(
                "present value encodes as null",
            )));
        }
        Ok(bytes)
    }

    pub fn to_json_string(&self) -> Result<String> {
        let bytes = self.to_json()?;
        // serde_json only ever emits UTF-8
        String::from_utf8(bytes).map_err(|e| OptionalError::Encode(ser::Error::custom(e)))
    }
}

impl<T: DeserializeOwned> Optional<T> {
    /// Decodes JSON bytes into a container.
    ///
    /// `null` decodes to absent. Input that is not a valid `T` is an error;
    /// nothing is bound in that case.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(OptionalError::Decode)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(OptionalError::Decode)
    }
}
