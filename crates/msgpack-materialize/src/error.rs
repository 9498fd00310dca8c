//! Materialization error type.

use thiserror::Error;

/// The single way materialization can fail: the decoded tree contains a
/// value outside the materializable set.
///
/// In practice that means an extension — the decoder understood the bytes,
/// but there is no native mapping for an application-defined type at this
/// layer. The error carries the extension's type tag. Retrying cannot
/// succeed and no partial graph is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaterializeError {
    #[error("unsupported value: extension type {0}")]
    UnsupportedValue(i8),
}
