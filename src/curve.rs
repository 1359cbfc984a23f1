//! Elliptic-curve group providers.
//!
//! The signature scheme only needs a prime-order group with a fixed generator, point addition,
//! scalar multiplication and exact point equality. [`Curve`] captures exactly that, plus the
//! fixed-width encodings the canonical encoder hashes.

use crate::error::Error;
use crate::prelude::*;
use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};
use curve25519_dalek::constants;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Width in bytes of an encoded scalar or coordinate.
pub const SCALAR_BYTES: usize = 32;

/// A prime-order group together with its scalar field.
pub trait Curve: Copy + Clone + Debug + Default + Eq + PartialEq + 'static {
    /// Integers modulo the group order.
    type Scalar: Copy
        + Debug
        + Eq
        + From<u64>
        + Zeroize
        + Add<Output = Self::Scalar>
        + Sub<Output = Self::Scalar>
        + Mul<Output = Self::Scalar>;

    /// Group elements.
    type Point: Copy
        + Debug
        + Eq
        + Add<Output = Self::Point>
        + Mul<Self::Scalar, Output = Self::Point>;

    /// Human readable name of the group.
    const NAME: &'static str;

    /// The fixed base generator `G`.
    fn generator() -> Self::Point;

    /// 32-byte big-endian encoding of a scalar.
    fn scalar_to_bytes(s: &Self::Scalar) -> [u8; SCALAR_BYTES];

    /// Appends the fixed-width encoding of `p` to `out`.
    fn encode_point(p: &Self::Point, out: &mut Vec<u8>);

    /// `G * s`
    fn mul_base(s: &Self::Scalar) -> Self::Point {
        Self::generator() * *s
    }

    /// Interprets `bytes` as a big-endian integer and reduces it modulo the group order.
    ///
    /// Backends override this with their native wide reduction. The default accepts any digest
    /// width.
    fn scalar_from_bytes_mod_order(bytes: &[u8]) -> Self::Scalar {
        reduce_be_bytes(bytes)
    }

    /// A uniformly random scalar in `[0, order)`.
    ///
    /// 64 random bytes are reduced modulo the order, so the bias is negligible for 256-bit
    /// groups. Fails rather than falling back to a weaker source if `csprng` errors.
    fn random_scalar<CSPRNG: CryptoRng + RngCore + ?Sized>(
        csprng: &mut CSPRNG,
    ) -> Result<Self::Scalar, Error> {
        let mut wide = [0u8; 64];
        csprng
            .try_fill_bytes(&mut wide)
            .map_err(|_| Error::InsufficientRandomness)?;
        let s = Self::scalar_from_bytes_mod_order(&wide);
        wide.zeroize();
        Ok(s)
    }
}

/// Horner evaluation of a big-endian integer of any length in the scalar field.
pub(crate) fn reduce_be_bytes<S>(bytes: &[u8]) -> S
where
    S: Copy + From<u64> + Add<Output = S> + Mul<Output = S>,
{
    let half = S::from(1u64 << 32);
    let radix = half * half;
    let head = bytes.len() % 8;

    let mut acc = S::from(0u64);
    for b in &bytes[..head] {
        acc = acc * S::from(256u64) + S::from(u64::from(*b));
    }
    for chunk in bytes[head..].chunks_exact(8) {
        let mut limb = [0u8; 8];
        limb.copy_from_slice(chunk);
        acc = acc * radix + S::from(u64::from_be_bytes(limb));
    }
    acc
}

/// Left-pads a big-endian integer of at most 64 bytes to exactly 64 bytes.
fn widen(bytes: &[u8]) -> Option<[u8; 64]> {
    let mut wide = [0u8; 64];
    let offset = 64usize.checked_sub(bytes.len())?;
    wide[offset..].copy_from_slice(bytes);
    Some(wide)
}

/// The [Ristretto](https://ristretto.group) prime-order group over Curve25519.
///
/// Ristretto does not expose affine coordinates, so points are encoded as their canonical
/// 32-byte compressed form.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Ristretto;

impl Curve for Ristretto {
    type Scalar = Scalar;
    type Point = RistrettoPoint;

    const NAME: &'static str = "ristretto255";

    fn generator() -> RistrettoPoint {
        constants::RISTRETTO_BASEPOINT_POINT
    }

    fn scalar_to_bytes(s: &Scalar) -> [u8; SCALAR_BYTES] {
        // dalek scalars are little-endian
        let mut bytes = s.to_bytes();
        bytes.reverse();
        bytes
    }

    fn encode_point(p: &RistrettoPoint, out: &mut Vec<u8>) {
        out.extend_from_slice(p.compress().as_bytes());
    }

    fn mul_base(s: &Scalar) -> RistrettoPoint {
        RistrettoPoint::mul_base(s)
    }

    fn scalar_from_bytes_mod_order(bytes: &[u8]) -> Scalar {
        match widen(bytes) {
            Some(mut wide) => {
                wide.reverse();
                let s = Scalar::from_bytes_mod_order_wide(&wide);
                wide.zeroize();
                s
            }
            None => reduce_be_bytes(bytes),
        }
    }
}

#[cfg(feature = "secp256k1")]
pub use self::secp256k1::Secp256k1;

#[cfg(feature = "secp256k1")]
mod secp256k1 {
    use super::{reduce_be_bytes, widen, Curve, SCALAR_BYTES};
    use crate::prelude::*;
    use k256::elliptic_curve::bigint::U512;
    use k256::elliptic_curve::generic_array::GenericArray;
    use k256::elliptic_curve::ops::Reduce;
    use k256::elliptic_curve::sec1::ToEncodedPoint;
    use k256::{ProjectivePoint, Scalar};
    use zeroize::Zeroize;

    /// The secp256k1 curve.
    ///
    /// Points are encoded as `x || y`, each coordinate 32 bytes big-endian. The point at
    /// infinity has no affine coordinates and encodes as 64 zero bytes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Secp256k1;

    impl Curve for Secp256k1 {
        type Scalar = Scalar;
        type Point = ProjectivePoint;

        const NAME: &'static str = "secp256k1";

        fn generator() -> ProjectivePoint {
            ProjectivePoint::GENERATOR
        }

        fn scalar_to_bytes(s: &Scalar) -> [u8; SCALAR_BYTES] {
            let mut bytes = [0u8; SCALAR_BYTES];
            bytes.copy_from_slice(&s.to_bytes());
            bytes
        }

        fn encode_point(p: &ProjectivePoint, out: &mut Vec<u8>) {
            let encoded = p.to_affine().to_encoded_point(false);
            match (encoded.x(), encoded.y()) {
                (Some(x), Some(y)) => {
                    out.extend_from_slice(x);
                    out.extend_from_slice(y);
                }
                _ => out.extend_from_slice(&[0u8; 2 * SCALAR_BYTES]),
            }
        }

        fn scalar_from_bytes_mod_order(bytes: &[u8]) -> Scalar {
            match widen(bytes) {
                Some(mut wide) => {
                    let s = <Scalar as Reduce<U512>>::reduce_bytes(&GenericArray::clone_from_slice(
                        &wide,
                    ));
                    wide.zeroize();
                    s
                }
                None => reduce_be_bytes(bytes),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand_chacha::ChaChaRng;
    use rand_core::{Error as RngError, SeedableRng};

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0)
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), RngError> {
            Err(RngError::from(core::num::NonZeroU32::new(RngError::CUSTOM_START).unwrap()))
        }
    }

    impl CryptoRng for BrokenRng {}

    #[test]
    fn ristretto_reduction_matches_dalek() {
        let mut rng = ChaChaRng::seed_from_u64(0xDEADBEEF);
        let mut wide = [0u8; 64];
        rng.fill_bytes(&mut wide);

        let mut le = wide;
        le.reverse();
        assert_eq!(
            Ristretto::scalar_from_bytes_mod_order(&wide),
            Scalar::from_bytes_mod_order_wide(&le)
        );
    }

    #[test]
    fn native_and_generic_reduction_agree() {
        let mut rng = ChaChaRng::seed_from_u64(0xC0FFEE);
        for len in [0, 1, 31, 32, 33, 64, 65, 96] {
            let mut bytes = vec![0u8; len];
            rng.fill_bytes(&mut bytes);
            assert_eq!(
                Ristretto::scalar_from_bytes_mod_order(&bytes),
                reduce_be_bytes::<Scalar>(&bytes)
            );
        }
    }

    #[test]
    fn short_and_odd_lengths_reduce() {
        assert_eq!(Ristretto::scalar_from_bytes_mod_order(&[]), Scalar::ZERO);
        assert_eq!(
            Ristretto::scalar_from_bytes_mod_order(&[0x01, 0x00, 0x00]),
            Scalar::from(65536u64)
        );
        assert_eq!(
            Ristretto::scalar_from_bytes_mod_order(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 5]),
            Scalar::from(5u64)
        );
    }

    #[test]
    fn scalar_bytes_are_big_endian() {
        let bytes = Ristretto::scalar_to_bytes(&Scalar::from(0x0102u64));
        assert_eq!(bytes[30..], [0x01, 0x02]);
        assert!(bytes[..30].iter().all(|b| *b == 0));
        assert_eq!(Ristretto::scalar_from_bytes_mod_order(&bytes), Scalar::from(0x0102u64));
    }

    #[test]
    fn failing_rng_is_reported() {
        assert_eq!(
            Ristretto::random_scalar(&mut BrokenRng),
            Err(Error::InsufficientRandomness)
        );
    }

    #[test]
    fn ristretto_points_encode_compressed() {
        let mut out = Vec::new();
        Ristretto::encode_point(&Ristretto::generator(), &mut out);
        assert_eq!(out, constants::RISTRETTO_BASEPOINT_COMPRESSED.as_bytes().to_vec());
    }

    #[cfg(feature = "secp256k1")]
    #[test]
    fn secp256k1_points_encode_as_coordinates() {
        use k256::{ProjectivePoint, Scalar};

        let mut out = Vec::new();
        Secp256k1::encode_point(&Secp256k1::generator(), &mut out);
        assert_eq!(out.len(), 64);
        // x coordinate of the secp256k1 generator
        assert_eq!(out[..4], [0x79, 0xbe, 0x66, 0x7e]);

        let mut identity = Vec::new();
        Secp256k1::encode_point(&ProjectivePoint::IDENTITY, &mut identity);
        assert_eq!(identity, vec![0u8; 64]);

        let bytes = Secp256k1::scalar_to_bytes(&Scalar::from(7u64));
        assert_eq!(bytes[31], 7);
        assert_eq!(Secp256k1::scalar_from_bytes_mod_order(&bytes), Scalar::from(7u64));
    }

    #[cfg(feature = "secp256k1")]
    #[test]
    fn secp256k1_digests_past_the_order_wrap() {
        use k256::elliptic_curve::bigint::U256;
        use k256::elliptic_curve::ops::Reduce;
        use k256::{FieldBytes, Scalar};

        // n, the order of secp256k1
        let order: [u8; 32] = [
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c,
            0xd0, 0x36, 0x41, 0x41,
        ];
        let mut order_plus_one = order;
        order_plus_one[31] += 1;
        let all_ones = [0xffu8; 32];

        assert_eq!(Secp256k1::scalar_from_bytes_mod_order(&order), Scalar::ZERO);
        assert_eq!(Secp256k1::scalar_from_bytes_mod_order(&order_plus_one), Scalar::ONE);

        let reduced = <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(all_ones));
        assert_eq!(Secp256k1::scalar_from_bytes_mod_order(&all_ones), reduced);
        assert_eq!(reduce_be_bytes::<Scalar>(&all_ones), reduced);

        let mut rng = ChaChaRng::seed_from_u64(0xC0FFEE);
        for len in [1, 32, 64, 80] {
            let mut bytes = vec![0u8; len];
            rng.fill_bytes(&mut bytes);
            assert_eq!(
                Secp256k1::scalar_from_bytes_mod_order(&bytes),
                reduce_be_bytes::<Scalar>(&bytes)
            );
        }
    }
}
