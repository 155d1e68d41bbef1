//! Error model for failing response records
//!
//! A response can carry one status per requested hostname. Every failing
//! record becomes an [`UpdateError`] that remembers its position, and all of
//! them are returned together as one [`ResponseErrors`].

use super::code::ResponseCode;
use std::fmt;
use std::ops::Deref;
use std::time::Duration;

/// A failing status code and its position in a multi-record response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateError {
    request: usize,
    code: ResponseCode,
    detail: String,
}

impl UpdateError {
    pub(crate) fn new(request: usize, code: ResponseCode, detail: impl Into<String>) -> Self {
        Self {
            request,
            code,
            detail: detail.into(),
        }
    }

    /// Zero-based index of the record this error was read from
    pub fn request(&self) -> usize {
        self.request
    }

    /// The failing status code
    pub fn code(&self) -> &ResponseCode {
        &self.code
    }

    /// Free text the server sent after the code (may be empty)
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Whether repeating the same request may succeed
    ///
    /// True for `servererror`, `911` and `dnserr`. Every other code needs a
    /// change of credentials or configuration before retrying makes sense.
    pub fn is_temporary(&self) -> bool {
        self.code.is_temporary()
    }

    /// Pause requested by the server before retrying, if any
    pub fn suggested_delay(&self) -> Option<Duration> {
        self.code.suggested_delay()
    }
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code.as_str(), self.detail.as_str()) {
            ("", _) => f.write_str("unknown error"),
            (code, "") => f.write_str(code),
            (code, detail) => write!(f, "{}: {}", code, detail),
        }
    }
}

impl std::error::Error for UpdateError {}

/// All failing records from a single response, in record order
///
/// Never empty: a response without failures yields no `ResponseErrors` at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseErrors(Vec<UpdateError>);

impl ResponseErrors {
    pub(crate) fn from_errors(errors: Vec<UpdateError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// The errors that may succeed on retry
    pub fn temporary(&self) -> impl Iterator<Item = &UpdateError> {
        self.0.iter().filter(|e| e.is_temporary())
    }

    /// Whether every failure is retryable
    pub fn all_temporary(&self) -> bool {
        self.0.iter().all(UpdateError::is_temporary)
    }

    /// Longest pause requested by any failing record
    pub fn suggested_delay(&self) -> Option<Duration> {
        self.0.iter().filter_map(UpdateError::suggested_delay).max()
    }

    /// Consume into the underlying list
    pub fn into_vec(self) -> Vec<UpdateError> {
        self.0
    }
}

impl Deref for ResponseErrors {
    type Target = [UpdateError];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for ResponseErrors {
    type Item = UpdateError;
    type IntoIter = std::vec::IntoIter<UpdateError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResponseErrors {
    type Item = &'a UpdateError;
    type IntoIter = std::slice::Iter<'a, UpdateError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ResponseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dynu: response returned {} error(s):", self.0.len())?;
        for error in &self.0 {
            write!(f, "\n\t* [{}] {}", error.request, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ResponseErrors {}
