use crate::error::Error;
use digest::Digest;
use rand_core::{CryptoRng, RngCore};

pub trait Sign<PrivateKey, Ring: ?Sized>: Sized {
    fn sign<Hash: Digest, CSPRNG: CryptoRng + RngCore + ?Sized>(
        k: &PrivateKey,
        ring: &Ring,
        secret_index: usize,
        message: &[u8],
        csprng: &mut CSPRNG,
    ) -> Result<Self, Error>;
}

pub trait Verify<Ring: ?Sized> {
    fn verify<Hash: Digest>(&self, ring: &Ring, message: &[u8]) -> Result<bool, Error>;
}

pub trait Link {
    fn link(&self, other: &Self) -> bool;
}

pub trait KeyImageGen<PrivateKey, Ring: ?Sized, KeyImage> {
    fn generate_key_image<Hash: Digest>(k: &PrivateKey, ring: &Ring) -> Result<KeyImage, Error>;
}
