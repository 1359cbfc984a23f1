//! The hash oracles `H1` (values to scalars) and `H2` (values to points).

use crate::curve::{Curve, SCALAR_BYTES};
use crate::encoding::{Encoding, Value};
use crate::error::Error;
use digest::{Digest, Output};

/// Smallest digest accepted by the oracles, in bytes.
pub const MIN_DIGEST_BYTES: usize = SCALAR_BYTES;

/// Rejects digests with fewer than 256 bits of output.
pub fn check_digest<Hash: Digest>() -> Result<(), Error> {
    let size = <Hash as Digest>::output_size();
    if size < MIN_DIGEST_BYTES {
        return Err(Error::DigestTooShort(size, MIN_DIGEST_BYTES));
    }
    Ok(())
}

/// The raw digest of the encoded `value`.
///
/// Read as a big-endian integer this is the unreduced `H1` output, which can exceed the group
/// order.
pub fn h1_digest<C: Curve, E: Encoding, Hash: Digest>(value: &Value<'_, C>) -> Output<Hash> {
    Hash::digest(E::encode(value))
}

/// `H1`: the digest of the encoded `value` as a big-endian integer, reduced modulo the group
/// order.
pub fn h1<C: Curve, E: Encoding, Hash: Digest>(value: &Value<'_, C>) -> C::Scalar {
    C::scalar_from_bytes_mod_order(&h1_digest::<C, E, Hash>(value))
}

/// `H2`: `G * H1(value)`.
///
/// This is not a uniform hash to curve: the discrete log of the result with respect to `G` is
/// public. The scheme only relies on it being deterministic and bound to the hashed value.
pub fn h2<C: Curve, E: Encoding, Hash: Digest>(value: &Value<'_, C>) -> C::Point {
    C::mul_base(&h1::<C, E, Hash>(value))
}
