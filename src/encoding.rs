//! Canonical encoding of the values fed to the hash oracles.
//!
//! Every challenge hashes a structured value such as `[L, Y, M, z1, z2]`. [`Value`] is the closed
//! set of things that can appear in such a structure and an [`Encoding`] turns it into bytes.
//!
//! [`Concatenated`] reproduces the classic layout: fixed-width scalars and points, raw text, and
//! sequences glued together with no separators or lengths. Because nothing is framed, two
//! differently shaped values can encode to the same bytes (`[Text("ab"), Text("c")]` and
//! `Text("abc")` collide). Inside an LSAG the shape of every hashed value is fixed and only the
//! message has variable length, but any new use of the encoder must keep that in mind.
//! [`Framed`] tags every value and length-prefixes text and sequences, which makes the encoding
//! injective at the cost of compatibility with concatenated signatures.

use crate::curve::Curve;
use crate::prelude::*;
use core::fmt::Debug;

/// A value that can be encoded and hashed.
#[derive(Clone, Copy, Debug)]
pub enum Value<'a, C: Curve> {
    /// An integer modulo the group order.
    Scalar(C::Scalar),
    /// UTF-8 text, or any other opaque byte string.
    Text(&'a [u8]),
    /// A group element.
    Point(C::Point),
    /// An ordered sequence of values.
    Sequence(&'a [Value<'a, C>]),
}

impl<'a, C: Curve> Value<'a, C> {
    /// Wraps a string slice as [`Value::Text`].
    pub fn text(s: &'a str) -> Self {
        Value::Text(s.as_bytes())
    }

    /// Maps every key of a ring to [`Value::Point`], ready to be wrapped in a
    /// [`Value::Sequence`].
    pub fn points(ring: &[C::Point]) -> Vec<Value<'a, C>> {
        ring.iter().map(|p| Value::Point(*p)).collect()
    }
}

/// Strategy for turning a [`Value`] into bytes.
pub trait Encoding: Copy + Clone + Debug + Default + Eq + PartialEq + 'static {
    /// Appends the encoding of `value` to `out`.
    fn encode_into<C: Curve>(value: &Value<'_, C>, out: &mut Vec<u8>);

    /// Encodes `value` into a fresh buffer.
    fn encode<C: Curve>(value: &Value<'_, C>) -> Vec<u8> {
        let mut out = Vec::new();
        Self::encode_into(value, &mut out);
        out
    }
}

/// Plain concatenation, compatible with the classic LSAG transcript.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Concatenated;

impl Encoding for Concatenated {
    fn encode_into<C: Curve>(value: &Value<'_, C>, out: &mut Vec<u8>) {
        match value {
            Value::Scalar(s) => out.extend_from_slice(&C::scalar_to_bytes(s)),
            Value::Text(t) => out.extend_from_slice(t),
            Value::Point(p) => C::encode_point(p, out),
            Value::Sequence(items) => {
                for item in items.iter() {
                    Self::encode_into(item, out);
                }
            }
        }
    }
}

/// Type-tagged, length-prefixed encoding.
///
/// Layout: one tag byte per value, then
/// - scalar: 32 bytes big-endian
/// - text: 8-byte big-endian length, raw bytes
/// - point: the curve's fixed-width point encoding
/// - sequence: 8-byte big-endian element count, each element's framed encoding
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Framed;

impl Framed {
    const SCALAR: u8 = 0x01;
    const TEXT: u8 = 0x02;
    const POINT: u8 = 0x03;
    const SEQUENCE: u8 = 0x04;
}

impl Encoding for Framed {
    fn encode_into<C: Curve>(value: &Value<'_, C>, out: &mut Vec<u8>) {
        match value {
            Value::Scalar(s) => {
                out.push(Self::SCALAR);
                out.extend_from_slice(&C::scalar_to_bytes(s));
            }
            Value::Text(t) => {
                out.push(Self::TEXT);
                out.extend_from_slice(&(t.len() as u64).to_be_bytes());
                out.extend_from_slice(t);
            }
            Value::Point(p) => {
                out.push(Self::POINT);
                C::encode_point(p, out);
            }
            Value::Sequence(items) => {
                out.push(Self::SEQUENCE);
                out.extend_from_slice(&(items.len() as u64).to_be_bytes());
                for item in items.iter() {
                    Self::encode_into(item, out);
                }
            }
        }
    }
}
