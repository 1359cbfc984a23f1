use crate::curve::Curve;
use crate::encoding::{Concatenated, Encoding, Value};
use crate::error::Error;
use crate::oracle::{check_digest, h1, h2};
use crate::prelude::*;
use crate::traits::{KeyImageGen, Link, Sign, Verify};
use core::marker::PhantomData;
use digest::Digest;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Linkable Spontaneous Anonymous Group (LSAG) signatures
///
/// A signature proves that the owner of one of the keys in a ring signed the message, without
/// revealing which. The key image `Y = H2(L) * k` only depends on the signing key and the ring
/// `L`, so two signatures by the same key over the same ring carry the same key image.
///
/// `C` is the group and `E` the encoding used to build challenges. A signature only verifies
/// with the curve, encoding and digest it was made with.
///
/// Please read tests at the bottom of the source code for this module for examples on how to use
/// it
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "C::Scalar: Serialize, C::Point: Serialize",
        deserialize = "C::Scalar: Deserialize<'de>, C::Point: Deserialize<'de>"
    ))
)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LSAG<C: Curve, E: Encoding = Concatenated> {
    /// The challenge `c0` at ring position 0
    pub challenge: C::Scalar,
    /// One response per ring member. All but one are random.
    pub responses: Vec<C::Scalar>,
    /// The linkage tag `Y`
    pub key_image: C::Point,
    #[cfg_attr(feature = "serde", serde(skip))]
    encoding: PhantomData<E>,
}

impl<C: Curve, E: Encoding> LSAG<C, E> {
    /// Assembles a signature from its parts, e.g. after deserializing them.
    pub fn from_parts(
        challenge: C::Scalar,
        responses: Vec<C::Scalar>,
        key_image: C::Point,
    ) -> Self {
        LSAG {
            challenge,
            responses,
            key_image,
            encoding: PhantomData,
        }
    }

    /// Number of ring members this signature was made over.
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// True for a signature carrying no responses, which no ring can verify.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

/// `H = H2(L)`, the point every key image and second commitment is taken against.
fn ring_base<C: Curve, E: Encoding, Hash: Digest>(ring: &Value<'_, C>) -> C::Point {
    h2::<C, E, Hash>(ring)
}

/// `H1([L, Y, M, z1, z2])`
fn challenge<C: Curve, E: Encoding, Hash: Digest>(
    ring: &Value<'_, C>,
    key_image: C::Point,
    message: &[u8],
    z1: C::Point,
    z2: C::Point,
) -> C::Scalar {
    let transcript = [
        *ring,
        Value::Point(key_image),
        Value::Text(message),
        Value::Point(z1),
        Value::Point(z2),
    ];
    h1::<C, E, Hash>(&Value::Sequence(&transcript))
}

impl<C: Curve, E: Encoding> KeyImageGen<C::Scalar, [C::Point], C::Point> for LSAG<C, E> {
    /// The key image `Y = H2(L) * k` a signature by `k` over `ring` will carry
    fn generate_key_image<Hash: Digest>(
        k: &C::Scalar,
        ring: &[C::Point],
    ) -> Result<C::Point, Error> {
        if ring.is_empty() {
            return Err(Error::EmptyRing);
        }
        check_digest::<Hash>()?;

        let points = Value::<C>::points(ring);
        Ok(ring_base::<C, E, Hash>(&Value::Sequence(&points)) * *k)
    }
}

impl<C: Curve, E: Encoding> Sign<C::Scalar, [C::Point]> for LSAG<C, E> {
    /// To sign you need `k` your private key, and `ring` which is the public keys of everyone
    /// including you, at `secret_index`. You are signing the `message`.
    ///
    /// `k` is not checked against `ring[secret_index]`; a wrong key produces a signature that
    /// does not verify.
    ///
    /// `csprng` must be a cryptographically secure generator. The scheme is a chain of Schnorr
    /// proofs: signing two messages with the same nonce reveals `k` from the two responses.
    fn sign<Hash: Digest, CSPRNG: CryptoRng + RngCore + ?Sized>(
        k: &C::Scalar,
        ring: &[C::Point],
        secret_index: usize,
        message: &[u8],
        csprng: &mut CSPRNG,
    ) -> Result<LSAG<C, E>, Error> {
        let n = ring.len();
        if n == 0 {
            return Err(Error::EmptyRing);
        }
        if secret_index >= n {
            return Err(Error::IndexOutOfBounds(secret_index, n));
        }
        check_digest::<Hash>()?;
        log::debug!("signing over a {} ring of {} keys", C::NAME, n);

        let points = Value::<C>::points(ring);
        let l = Value::Sequence(&points);
        let h = ring_base::<C, E, Hash>(&l);
        let key_image = h * *k;

        let zero = C::Scalar::from(0u64);
        let mut cs: Vec<C::Scalar> = vec![zero; n];
        let mut rs: Vec<C::Scalar> = vec![zero; n];

        // Decoy responses first, the nonce last
        for (i, r) in rs.iter_mut().enumerate() {
            if i != secret_index {
                *r = C::random_scalar(csprng)?;
            }
        }
        let mut u = C::random_scalar(csprng)?;
        cs[(secret_index + 1) % n] =
            challenge::<C, E, Hash>(&l, key_image, message, C::mul_base(&u), h * u);

        // Every position after ours, wrapping around, stopping short of ours
        for i in ((secret_index + 1)..(secret_index + n)).map(|i| i % n) {
            let z1 = C::mul_base(&rs[i]) + ring[i] * cs[i];
            let z2 = h * rs[i] + key_image * cs[i];
            cs[(i + 1) % n] = challenge::<C, E, Hash>(&l, key_image, message, z1, z2);
        }

        rs[secret_index] = u - (*k * cs[secret_index]);
        u.zeroize();

        Ok(LSAG::from_parts(cs[0], rs, key_image))
    }
}

impl<C: Curve, E: Encoding> Verify<[C::Point]> for LSAG<C, E> {
    /// To verify a signature you need the `ring` it was made over and the `message`.
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not verify. Errors are only
    /// returned for an empty ring or a response count that does not match it.
    fn verify<Hash: Digest>(&self, ring: &[C::Point], message: &[u8]) -> Result<bool, Error> {
        let n = ring.len();
        if n == 0 {
            return Err(Error::EmptyRing);
        }
        if self.responses.len() != n {
            return Err(Error::LengthMismatch(self.responses.len(), n));
        }
        check_digest::<Hash>()?;
        log::debug!("verifying over a {} ring of {} keys", C::NAME, n);

        let points = Value::<C>::points(ring);
        let l = Value::Sequence(&points);
        let h = ring_base::<C, E, Hash>(&l);

        let reconstructed_c = ring
            .iter()
            .zip(self.responses.iter())
            .fold(self.challenge, |c, (y, s)| {
                let z1 = C::mul_base(s) + *y * c;
                let z2 = h * *s + self.key_image * c;
                challenge::<C, E, Hash>(&l, self.key_image, message, z1, z2)
            });

        let valid = reconstructed_c == self.challenge;
        log::trace!("ring closed: {}", valid);
        Ok(valid)
    }
}

impl<C: Curve, E: Encoding> Link for LSAG<C, E> {
    /// This is for linking two signatures and checking if they are signed by the same person.
    /// Key images are bound to the ring, so this is only meaningful for signatures over the same
    /// ring.
    fn link(&self, other: &LSAG<C, E>) -> bool {
        self.key_image == other.key_image
    }
}

/// Signs `message` with `k`, the private key of `ring[secret_index]`.
///
/// Shorthand for [`Sign::sign`] on [`LSAG`].
pub fn sign<C, E, Hash, CSPRNG>(
    k: &C::Scalar,
    secret_index: usize,
    message: &[u8],
    ring: &[C::Point],
    csprng: &mut CSPRNG,
) -> Result<LSAG<C, E>, Error>
where
    C: Curve,
    E: Encoding,
    Hash: Digest,
    CSPRNG: CryptoRng + RngCore + ?Sized,
{
    LSAG::<C, E>::sign::<Hash, CSPRNG>(k, ring, secret_index, message, csprng)
}

/// Verifies that `signature` over `message` was made by the owner of one of the keys in `ring`.
///
/// Shorthand for [`Verify::verify`] on [`LSAG`].
pub fn verify<C, E, Hash>(
    message: &[u8],
    ring: &[C::Point],
    signature: &LSAG<C, E>,
) -> Result<bool, Error>
where
    C: Curve,
    E: Encoding,
    Hash: Digest,
{
    signature.verify::<Hash>(ring, message)
}
