#![cfg(feature = "no_std")]

extern crate alloc;

use alloc::vec::Vec;
use lsag::{Concatenated, Ristretto, Sign, Verify, LSAG};

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use rand_chacha::ChaChaRng;
use rand_core::SeedableRng;
use sha2::Sha512;

#[test]
fn test_lsag_no_std() {
    let mut csprng = ChaChaRng::seed_from_u64(0xDEADBEEF);
    let secret_index = 1;
    let ks: Vec<Scalar> = (0..2).map(|_| Scalar::random(&mut csprng)).collect();
    let ring: Vec<RistrettoPoint> = ks.iter().map(RistrettoPoint::mul_base).collect();
    let message: Vec<u8> = b"This is the message".iter().cloned().collect();

    let signature = LSAG::<Ristretto, Concatenated>::sign::<Sha512, _>(
        &ks[secret_index],
        &ring,
        secret_index,
        &message,
        &mut csprng,
    )
    .unwrap();
    let result = signature.verify::<Sha512>(&ring, &message).unwrap();
    assert!(result);
}
