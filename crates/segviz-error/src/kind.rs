//! Error kinds for segviz operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors to help callers write clear handling logic.
/// The CLI matches on ErrorKind to decide whether a failure is confined to a
/// single application record or poisons the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid argument passed to a function or on the command line
    InvalidArgument,

    // =========================================================================
    // Input data errors
    // =========================================================================
    /// Invalid configuration contents (not valid JSON, wrong top-level shape)
    ConfigInvalid,

    /// An application record failed to deserialize (missing `id`, `name`,
    /// `proto`, or a malformed value)
    DeserializeFailed,

    /// Protocol reference table could not be read
    ProtocolTableInvalid,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this error kind is retryable by default
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::IoFailed)
    }
}
