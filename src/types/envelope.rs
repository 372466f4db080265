//! Wire envelope for traced errors.
//!
//! Only the public face of an error is serialized: code, message, reason and
//! details. Call sites and causes stay in-process.
//!
//! ```
//! use error_trace::{Code, TracedError};
//!
//! let err = TracedError::new(Code::FORBIDDEN).with_detail("role", "viewer");
//! let json = serde_json::to_string(&err).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"code":"forbidden","message":"forbidden error","reason":"forbidden","details":{"role":"viewer"}}"#
//! );
//!
//! let missing: Option<TracedError> = None;
//! assert_eq!(serde_json::to_string(&missing).unwrap(), "null");
//! ```

use crate::types::alloc_type::{Details, String};
use crate::types::{Code, TracedError};
use core::panic::Location;
use serde::{Deserialize, Serialize, Serializer};

/// Serialized form of a [`TracedError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: Code,
    pub message: String,
    pub reason: String,
    #[serde(default)]
    pub details: Details,
}

impl Envelope {
    /// Rebuilds a traced error from a received envelope, attributed to the caller.
    #[track_caller]
    pub fn into_traced(self) -> TracedError {
        let mut err =
            TracedError::create(self.code, self.message, None, Location::caller());
        err.reason = self.reason;
        err.details = self.details;
        err
    }
}

impl From<&TracedError> for Envelope {
    fn from(err: &TracedError) -> Self {
        Self {
            code: err.code.clone(),
            message: err.message.clone(),
            reason: err.reason.clone(),
            details: err.details.clone(),
        }
    }
}

impl TracedError {
    /// Snapshot of the serializable fields.
    pub fn envelope(&self) -> Envelope {
        Envelope::from(self)
    }
}

impl Serialize for TracedError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.envelope().serialize(serializer)
    }
}
