//! # LSAG
//! A library that implements Linkable Spontaneous Anonymous Group (LSAG)
//! [ring signatures](https://en.wikipedia.org/wiki/Ring_signature).
//!
//! A member of an ordered set of public keys (the *ring*) signs a message. Anyone holding the ring
//! can check that one of its keys signed, but not which one. Every signature also carries a *key
//! image* `Y`, a deterministic function of the signing key and the ring only, so two signatures by
//! the same key over the same ring are linkable without revealing who made them.
//!
//! Everything a signature depends on is a type parameter of the call, never global state:
//!
//!  - the group, any [`Curve`]: [`Ristretto`] (curve25519-dalek) or, with the `secp256k1`
//!    feature, `Secp256k1` (k256)
//!  - the [`Encoding`] used to serialize challenge inputs: [`Concatenated`] (the classic,
//!    unframed layout, the default) or [`Framed`]
//!  - the hash, any [`digest::Digest`] with at least 256 bits of output
//!
//! ```rust
//! use curve25519_dalek::ristretto::RistrettoPoint;
//! use curve25519_dalek::scalar::Scalar;
//! use lsag::{Link, Ristretto, Sign, Verify, LSAG};
//! use rand::rngs::OsRng;
//! use sha2::Sha512;
//!
//! let mut csprng = OsRng;
//! let ks: Vec<Scalar> = (0..4).map(|_| Scalar::random(&mut csprng)).collect();
//! let ring: Vec<RistrettoPoint> = ks.iter().map(RistrettoPoint::mul_base).collect();
//!
//! let signature =
//!     LSAG::<Ristretto>::sign::<Sha512, _>(&ks[2], &ring, 2, b"a message", &mut csprng).unwrap();
//! assert!(signature.verify::<Sha512>(&ring, b"a message").unwrap());
//! assert!(!signature.verify::<Sha512>(&ring, b"another message").unwrap());
//!
//! let again =
//!     LSAG::<Ristretto>::sign::<Sha512, _>(&ks[2], &ring, 2, b"another message", &mut csprng)
//!         .unwrap();
//! assert!(signature.link(&again));
//! ```
//!
//! This library is `#![no_std]` by default so it is possible to compile this library for embedded
//! devices and WebAssembly.

#![no_std]
#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod curve;
pub mod encoding;
pub mod error;
pub mod lsag;
pub mod oracle;
mod prelude;
pub mod traits;

#[cfg(feature = "secp256k1")]
pub use crate::curve::Secp256k1;
pub use crate::curve::{Curve, Ristretto};
pub use crate::encoding::{Concatenated, Encoding, Framed, Value};
pub use crate::error::Error;
pub use crate::lsag::{sign, verify, LSAG};
pub use crate::traits::{KeyImageGen, Link, Sign, Verify};
