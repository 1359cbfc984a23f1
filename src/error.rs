//! Errors which can occur when signing or verifying an LSAG

use displaydoc::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An error which can occur when signing or verifying an LSAG.
///
/// These only describe structurally malformed input. A well-formed signature that does not
/// verify is reported as `Ok(false)`, never as an error.
#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Error {
    /// The key ring is empty
    EmptyRing,

    /// Signer index `{0}` is out of bounds for a ring of `{1}` keys
    IndexOutOfBounds(usize, usize),

    /// Incorrect number of responses, provided `{0}`, required `{1}`
    LengthMismatch(usize, usize),

    /// Digest output of `{0}` bytes is shorter than the required `{1}` bytes
    DigestTooShort(usize, usize),

    /// The random number generator failed to produce a secret value
    InsufficientRandomness,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
