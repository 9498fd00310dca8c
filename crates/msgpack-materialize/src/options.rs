//! Conversion options for materialization.

/// How `Raw` bytes materialize.
///
/// The wire format does not distinguish binary blobs from text, so the
/// choice is the caller's. The default is `Text`, matching the historical
/// behavior of treating every raw value as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawMode {
    /// Decode raw bytes as UTF-8 text (lossily — invalid sequences become
    /// replacement characters).
    #[default]
    Text,
    /// Keep raw bytes as a byte buffer.
    Binary,
}

/// Options for one materialization pass.
///
/// Immutable; every nested value observes the same options as the top
/// level. `Default` gives all-defaults, so `Materializer::new()` behaves
/// like passing no options at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaterializeOptions {
    /// When true, map keys that materialize as text become [`Symbol`]s
    /// instead of plain strings.
    ///
    /// [`Symbol`]: crate::Symbol
    pub symbolize_keys: bool,
    /// Binary-vs-text policy for `Raw` values.
    pub raw: RawMode,
}
