//! The materializer — converts decoded [`Value`] trees into native values.

use num_traits::ToPrimitive;

use crate::{
    MaterializeError, MaterializeOptions, NativeMap, NativeValue, RawMode, Symbol, Value,
};

/// Converts decoded value trees into [`NativeValue`] graphs under a fixed
/// set of [`MaterializeOptions`].
///
/// Stateless across calls: the only thing a `Materializer` holds is its
/// options, so one instance may serve any number of trees, concurrently if
/// desired.
pub struct Materializer {
    pub options: MaterializeOptions,
}

impl Default for Materializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Materializer {
    /// A materializer with all-default options.
    pub fn new() -> Self {
        Self::with_options(MaterializeOptions::default())
    }

    pub fn with_options(options: MaterializeOptions) -> Self {
        Self { options }
    }

    /// Convert a decoded value tree into a native value graph.
    ///
    /// Total over every materializable variant; fails only on an extension
    /// value, in which case no partial graph is returned. Recursion depth
    /// follows the input tree's depth — for adversarially deep input use
    /// [`materialize_deep`](Self::materialize_deep).
    pub fn materialize(&self, value: &Value) -> Result<NativeValue, MaterializeError> {
        match value {
            Value::Array(xs) => {
                let mut out = Vec::with_capacity(xs.len());
                for x in xs {
                    out.push(self.materialize(x)?);
                }
                Ok(NativeValue::Array(out))
            }
            Value::Map(pairs) => {
                let mut out = NativeMap::with_capacity(pairs.len());
                for (k, v) in pairs {
                    let key = self.intern_key(self.materialize(k)?);
                    let val = self.materialize(v)?;
                    // Map-insert semantics: a later duplicate key keeps the
                    // first occurrence's position and takes the new value.
                    out.insert(key, val);
                }
                Ok(NativeValue::Map(out))
            }
            other => self.scalar(other),
        }
    }

    /// Same contract and results as [`materialize`](Self::materialize),
    /// driven by an explicit work stack instead of the call stack, so
    /// memory use is bounded by allocation rather than thread stack size.
    pub fn materialize_deep<'a>(
        &self,
        value: &'a Value,
    ) -> Result<NativeValue, MaterializeError> {
        let mut frames: Vec<Frame<'a>> = Vec::new();
        let mut current = value;
        'walk: loop {
            // Descend to the next leaf, pushing container frames on the way.
            let mut produced = loop {
                match current {
                    Value::Array(xs) => match xs.first() {
                        Some(first) => {
                            frames.push(Frame::Array {
                                items: xs,
                                next: 1,
                                out: Vec::with_capacity(xs.len()),
                            });
                            current = first;
                        }
                        None => break NativeValue::Array(Vec::new()),
                    },
                    Value::Map(pairs) => match pairs.first() {
                        Some((k, _)) => {
                            frames.push(Frame::Map {
                                pairs,
                                next: 0,
                                key: None,
                                out: NativeMap::with_capacity(pairs.len()),
                            });
                            current = k;
                        }
                        None => break NativeValue::Map(NativeMap::new()),
                    },
                    other => break self.scalar(other)?,
                }
            };
            // Fold the produced value into parent frames until one of them
            // needs another descent.
            loop {
                let Some(frame) = frames.last_mut() else {
                    return Ok(produced);
                };
                match frame {
                    Frame::Array { items, next, out } => {
                        out.push(produced);
                        if *next < items.len() {
                            let items: &'a [Value] = *items;
                            current = &items[*next];
                            *next += 1;
                            continue 'walk;
                        }
                        let Some(Frame::Array { out, .. }) = frames.pop() else {
                            unreachable!()
                        };
                        produced = NativeValue::Array(out);
                    }
                    Frame::Map {
                        pairs,
                        next,
                        key,
                        out,
                    } => match key.take() {
                        None => {
                            *key = Some(self.intern_key(produced));
                            let pairs: &'a [(Value, Value)] = *pairs;
                            current = &pairs[*next].1;
                            continue 'walk;
                        }
                        Some(k) => {
                            out.insert(k, produced);
                            *next += 1;
                            if *next < pairs.len() {
                                let pairs: &'a [(Value, Value)] = *pairs;
                                current = &pairs[*next].0;
                                continue 'walk;
                            }
                            let Some(Frame::Map { out, .. }) = frames.pop() else {
                                unreachable!()
                            };
                            produced = NativeValue::Map(out);
                        }
                    },
                }
            }
        }
    }

    fn scalar(&self, value: &Value) -> Result<NativeValue, MaterializeError> {
        match value {
            Value::Nil => Ok(NativeValue::Nil),
            Value::Bool(b) => Ok(NativeValue::Bool(*b)),
            // Narrow path first; promotion never changes the abstract value.
            Value::Int(n) => Ok(match n.to_i64() {
                Some(narrow) => NativeValue::Int(narrow),
                None => NativeValue::BigInt(n.clone()),
            }),
            Value::Float(f) => Ok(NativeValue::Float(*f)),
            Value::Raw(bytes) => Ok(match self.options.raw {
                RawMode::Text => NativeValue::Str(String::from_utf8_lossy(bytes).into_owned()),
                RawMode::Binary => NativeValue::Bytes(bytes.to_vec()),
            }),
            Value::Ext(ext) => Err(MaterializeError::UnsupportedValue(ext.tag)),
            // Containers are handled by the walkers.
            Value::Array(_) | Value::Map(_) => unreachable!(),
        }
    }

    fn intern_key(&self, key: NativeValue) -> NativeValue {
        if self.options.symbolize_keys {
            if let NativeValue::Str(s) = key {
                return NativeValue::Symbol(Symbol::from(s));
            }
        }
        key
    }
}

enum Frame<'a> {
    Array {
        items: &'a [Value],
        next: usize,
        out: Vec<NativeValue>,
    },
    Map {
        pairs: &'a [(Value, Value)],
        next: usize,
        key: Option<NativeValue>,
        out: NativeMap,
    },
}

/// Materialize one value tree with default options.
pub fn materialize(value: &Value) -> Result<NativeValue, MaterializeError> {
    Materializer::new().materialize(value)
}

/// Materialize one value tree with the given options.
pub fn materialize_with(
    value: &Value,
    options: MaterializeOptions,
) -> Result<NativeValue, MaterializeError> {
    Materializer::with_options(options).materialize(value)
}
