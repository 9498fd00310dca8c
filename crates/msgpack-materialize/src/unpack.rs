//! The external-decoder seam: decode bytes to a [`Value`], then materialize.

use thiserror::Error;

use crate::{MaterializeError, MaterializeOptions, Materializer, NativeValue, Value};

/// The contract an external byte-level MessagePack decoder fulfills.
///
/// This crate does not implement the wire grammar; it consumes any decoder
/// that can turn a byte buffer into one decoded [`Value`] tree.
pub trait Unpacker {
    type Error;

    fn decode(&mut self, bytes: &[u8]) -> Result<Value, Self::Error>;
}

/// Error from [`unpack`]: either the decoder failed on the bytes, or the
/// decoded tree could not be materialized.
#[derive(Debug, Error)]
pub enum UnpackError<E> {
    #[error("decode error: {0}")]
    Decode(E),
    #[error(transparent)]
    Materialize(#[from] MaterializeError),
}

/// Decode one value from `bytes` and materialize it in a single step.
pub fn unpack<U: Unpacker>(
    unpacker: &mut U,
    bytes: &[u8],
    options: MaterializeOptions,
) -> Result<NativeValue, UnpackError<U::Error>> {
    let value = unpacker.decode(bytes).map_err(UnpackError::Decode)?;
    Ok(Materializer::with_options(options).materialize(&value)?)
}
