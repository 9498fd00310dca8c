//! Materialize decoded MessagePack value trees into native Rust values.
//!
//! The byte-level decoder is an external collaborator (see [`Unpacker`]);
//! this crate owns everything after it: type-directed dispatch from the
//! generic [`Value`] tree to the native [`NativeValue`] graph, the
//! narrow-first integer width fallback, key policies for maps, and the
//! binary-vs-text policy for raw bytes.

mod convert;
mod error;
mod extension;
mod materialize;
mod native;
mod options;
mod symbol;
mod unpack;
mod value;

pub use convert::{json_to_value, native_to_json};
pub use error::MaterializeError;
pub use extension::Extension;
pub use materialize::{materialize, materialize_with, Materializer};
pub use native::{NativeMap, NativeValue};
pub use options::{MaterializeOptions, RawMode};
pub use symbol::Symbol;
pub use unpack::{unpack, UnpackError, Unpacker};
pub use value::Value;
