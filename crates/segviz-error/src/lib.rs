//! # segviz-error
//!
//! Unified error handling for segviz.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., DeserializeFailed, ConfigInvalid)
//! - **ErrorStatus**: Decide how to handle it (Permanent, Temporary, Persistent)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use segviz_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::DeserializeFailed, "missing field `id`")
//!         .with_operation("config::read_applications")
//!         .with_context("path", "apps.json"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, segviz_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using segviz Error
pub type Result<T> = std::result::Result<T, Error>;
