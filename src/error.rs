//! Error types for schema, record, and codec operations.

use thiserror::Error;

/// Errors surfaced by record decoding, encoding, and field access.
///
/// All errors are synchronous and reported at the call site; there is no
/// internal retry or recovery. Callers iterating a whole file decide
/// whether to abort the pass or skip the offending line.
#[derive(Debug, Error)]
pub enum FlatFileError {
    /// A line's length does not match the schema's total width.
    ///
    /// Covers both short and long lines; both the observed and expected
    /// widths are reported so the caller can tell which.
    #[error("record length {found} does not match schema width {expected}")]
    RecordLength { found: usize, expected: usize },

    /// Access or mutation of a field name the schema does not declare
    /// (or declares only as padding).
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// A formatted field value is wider than its declared column.
    ///
    /// Truncating would silently corrupt column alignment, so encoding
    /// rejects the value instead.
    #[error("value for field '{field}' is {len} chars, wider than its column ({width})")]
    FieldOverflow {
        field: String,
        width: usize,
        len: usize,
    },

    /// I/O failure while reading from a line source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
