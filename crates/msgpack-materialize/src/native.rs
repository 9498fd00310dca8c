//! [`NativeValue`] — the materialized, host-side object graph.

use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::Symbol;

/// Insertion-ordered associative container used for materialized maps.
pub type NativeMap = IndexMap<NativeValue, NativeValue>;

/// A native value produced by materialization, one node per decoded node.
///
/// Integers come in two representations of the same abstract value: `Int`
/// for anything that fits a machine word and `BigInt` for the rest. The two
/// compare (and hash) equal for the same abstract integer, so narrowing is
/// an optimization and never an observable change.
///
/// `NativeValue` is `Eq + Hash` so any materialized value can key a map.
/// Floats compare and hash by bit pattern; maps hash by length only, which
/// stays consistent with their order-insensitive equality.
#[derive(Debug, Clone)]
pub enum NativeValue {
    Nil,
    Bool(bool),
    Int(i64),
    BigInt(BigInt),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Symbol(Symbol),
    Array(Vec<NativeValue>),
    Map(NativeMap),
}

impl NativeValue {
    pub fn is_nil(&self) -> bool {
        matches!(self, NativeValue::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            NativeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Narrow integer accessor. Also answers for a `BigInt` that happens to
    /// fit, so callers need not care which representation they got.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NativeValue::Int(n) => Some(*n),
            NativeValue::BigInt(n) => n.to_i64(),
            _ => None,
        }
    }

    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            NativeValue::BigInt(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NativeValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            NativeValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            NativeValue::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[NativeValue]> {
        match self {
            NativeValue::Array(xs) => Some(xs),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&NativeMap> {
        match self {
            NativeValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Map lookup; `None` for non-map values and missing keys.
    pub fn get(&self, key: &NativeValue) -> Option<&NativeValue> {
        self.as_map().and_then(|m| m.get(key))
    }
}

impl PartialEq for NativeValue {
    fn eq(&self, other: &Self) -> bool {
        use NativeValue::*;
        match (self, other) {
            (Nil, Nil) => true,
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (BigInt(a), BigInt(b)) => a == b,
            (Int(a), BigInt(b)) | (BigInt(b), Int(a)) => b.to_i64() == Some(*a),
            // Bit-pattern comparison keeps Eq reflexive for NaN and Hash
            // consistent for float keys.
            (Float(a), Float(b)) => a.to_bits() == b.to_bits(),
            (Str(a), Str(b)) => a == b,
            (Bytes(a), Bytes(b)) => a == b,
            (Symbol(a), Symbol(b)) => a == b,
            (Array(a), Array(b)) => a == b,
            (Map(a), Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for NativeValue {}

impl Hash for NativeValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use NativeValue::*;
        match self {
            Nil => state.write_u8(0),
            Bool(b) => {
                state.write_u8(1);
                b.hash(state);
            }
            // Both integer widths share a discriminant; an in-range BigInt
            // hashes as its i64 so cross-width equals hash equal.
            Int(n) => {
                state.write_u8(2);
                n.hash(state);
            }
            BigInt(n) => {
                state.write_u8(2);
                match n.to_i64() {
                    Some(narrow) => narrow.hash(state),
                    None => n.hash(state),
                }
            }
            Float(f) => {
                state.write_u8(3);
                f.to_bits().hash(state);
            }
            Str(s) => {
                state.write_u8(4);
                s.hash(state);
            }
            Bytes(b) => {
                state.write_u8(5);
                b.hash(state);
            }
            Symbol(s) => {
                state.write_u8(6);
                s.hash(state);
            }
            Array(xs) => {
                state.write_u8(7);
                xs.hash(state);
            }
            // Length only: map equality is order-insensitive, so hashing
            // entries in iteration order would split equal maps.
            Map(m) => {
                state.write_u8(8);
                state.write_usize(m.len());
            }
        }
    }
}

impl From<bool> for NativeValue {
    fn from(b: bool) -> Self {
        NativeValue::Bool(b)
    }
}

impl From<i64> for NativeValue {
    fn from(n: i64) -> Self {
        NativeValue::Int(n)
    }
}

impl From<&str> for NativeValue {
    fn from(s: &str) -> Self {
        NativeValue::Str(s.to_owned())
    }
}

impl From<Symbol> for NativeValue {
    fn from(s: Symbol) -> Self {
        NativeValue::Symbol(s)
    }
}
