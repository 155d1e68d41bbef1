// # Response Codec
//
// Parses the body returned by `/nic/update` into ordered status records.
//
// ## Wire Format
//
// ```text
// <code>[ <detail>]\n\r<code>[ <detail>]...
// ```
//
// Records are separated by line-feed followed by carriage-return. This is the
// reverse of the usual CRLF and is kept as-is for compatibility with the
// server. Parsing never fails on content: an unrecognized or empty code is
// represented as [`ResponseCode::Other`] and classified as an error later.

mod code;
mod errors;

pub use code::{MAINTENANCE_PAUSE, ResponseCode};
pub use errors::{ResponseErrors, UpdateError};

use crate::error::{Error, Result};
use std::io::Read;

/// Separator between records of a multi-record response
pub const RECORD_SEPARATOR: &str = "\n\r";

/// One line of server output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The status code
    pub code: ResponseCode,
    /// Text following the code, empty if absent
    pub detail: String,
}

impl Record {
    // Only a space delimits the code; tabs, `\r` and `\n` remain part of it.
    fn parse(line: &str) -> Self {
        match line.split_once(' ') {
            Some((code, rest)) => Self {
                code: ResponseCode::parse(code),
                detail: rest.trim_start_matches(' ').to_string(),
            },
            None => Self {
                code: ResponseCode::parse(line),
                detail: String::new(),
            },
        }
    }
}

/// Parsed update response, one record per request in the batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    records: Vec<Record>,
}

impl Response {
    /// Parse a response body
    ///
    /// A single trailing separator does not produce an extra record, so
    /// `"good\n\r"` holds one record. An empty body yields exactly one record
    /// with an empty code.
    pub fn parse(body: &str) -> Self {
        let mut lines: Vec<&str> = body.split(RECORD_SEPARATOR).collect();
        if lines.len() > 1 && lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        Self {
            records: lines.into_iter().map(Record::parse).collect(),
        }
    }

    /// Parse a raw body, failing only if it is not valid UTF-8
    pub fn from_bytes(body: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(body)
            .map_err(|e| Error::decode(format!("Response body is not UTF-8: {}", e)))?;
        Ok(Self::parse(text))
    }

    /// Read a body to the end and parse it
    pub fn read<R: Read>(mut reader: R) -> Result<Self> {
        let mut body = Vec::new();
        reader.read_to_end(&mut body)?;
        Self::from_bytes(&body)
    }

    /// Records in server order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Status codes in server order
    pub fn codes(&self) -> impl Iterator<Item = &ResponseCode> {
        self.records.iter().map(|r| &r.code)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the response holds no records
    ///
    /// Parsed responses always hold at least one record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether every record is `good` or `nochg`
    pub fn is_success(&self) -> bool {
        self.codes().all(|code| !code.is_error())
    }

    /// Collect the failing records, or `None` if every record succeeded
    pub fn to_error(&self) -> Option<ResponseErrors> {
        let errors = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.code.is_error())
            .map(|(idx, record)| UpdateError::new(idx, record.code.clone(), record.detail.clone()))
            .collect();

        ResponseErrors::from_errors(errors)
    }

    /// Same as [`Response::to_error`], shaped as a `Result`
    pub fn into_result(self) -> std::result::Result<(), ResponseErrors> {
        match self.to_error() {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }
}
