//! Classification to HTTP status mapping.
//!
//! ```
//! use error_trace::{status, Code, TracedError};
//!
//! assert_eq!(status::http_status(&Code::NOT_FOUND), Some(404));
//! assert_eq!(status::http_status(&Code::new("quota")), None);
//! assert_eq!(status::http_status_or_default(&Code::new("quota")), 500);
//! assert_eq!(TracedError::new(Code::TIMEOUT).http_status(), 408);
//! ```

use crate::types::{Code, TracedError};

/// Status used for codes outside the built-in vocabulary.
pub const DEFAULT_STATUS: u16 = 500;

/// Status code for a built-in classification.
pub fn http_status(code: &Code) -> Option<u16> {
    let status = match code.as_str() {
        "conflict" | "expired" => 400,
        "unauthorized" => 401,
        "forbidden" => 403,
        "not-found" => 404,
        "invalid" => 406,
        "timeout" => 408,
        "unprocessable" => 422,
        "internal" | "temporary" => 500,
        "not-implemented" => 501,
        _ => return None,
    };
    Some(status)
}

/// Like [`http_status`], falling back to [`DEFAULT_STATUS`].
#[inline]
pub fn http_status_or_default(code: &Code) -> u16 {
    http_status(code).unwrap_or(DEFAULT_STATUS)
}

impl TracedError {
    /// Status code for this error's classification.
    #[inline]
    pub fn http_status(&self) -> u16 {
        http_status_or_default(&self.code)
    }
}
