//! Keccak hash variants and the incremental [`HashContext`].

use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

use anyhow::Result;

use crate::{
    core::{
        prp::keccak::KeccakF1600,
        sponge::{Padding, Sponge},
    },
    Error::{InvalidVariant, LengthMismatch, UseAfterFinalize},
};

mod hasher;
pub use hasher::{Keccak256, Sha3_256};


/// Digest size of the 256-bit variants in bytes.
pub const HASH_SIZE: usize = 32;

/// Rate of the 256-bit variants in bytes, `(1600 - 2 * 256) / 8`.
pub const RATE: usize = 136;

/// Sponge parameters of a hash variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Params {
    pub rate_bytes: usize,
    pub output_bytes: usize,
    pub padding: Padding,
}

/// Supported hash variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Keccak-256 with the original Keccak padding (Ethereum's `keccak256`).
    Keccak256,
    /// FIPS-202 SHA3-256.
    Sha3_256,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Keccak256, Variant::Sha3_256];

    pub fn params(self) -> Params {
        match self {
            Variant::Keccak256 => Params {
                rate_bytes: RATE,
                output_bytes: HASH_SIZE,
                padding: Padding::Keccak,
            },
            Variant::Sha3_256 => Params {
                rate_bytes: RATE,
                output_bytes: HASH_SIZE,
                padding: Padding::Sha3,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Keccak256 => "keccak256",
            Variant::Sha3_256 => "sha3-256",
        }
    }

    /// Resolve a variant by name, case-insensitive.
    pub fn from_name(name: &str) -> Result<Self> {
        match NAMES.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some((_, variant)) => Ok(*variant),
            None => err!(InvalidVariant(String::from(name))),
        }
    }
}

/// Accepted spellings of each variant.
const NAMES: [(&str, Variant); 8] = [
    ("keccak", Variant::Keccak256),
    ("keccak256", Variant::Keccak256),
    ("keccak-256", Variant::Keccak256),
    ("keccak_256", Variant::Keccak256),
    ("sha3", Variant::Sha3_256),
    ("sha3256", Variant::Sha3_256),
    ("sha3-256", Variant::Sha3_256),
    ("sha3_256", Variant::Sha3_256),
];

impl FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One incremental hash computation.
///
/// `HashContext` owns only fixed-size arrays, so [`HashContext::copy`] is a plain value copy and the two contexts
/// never share state afterwards. [`HashContext::digest`] does not consume or modify the context: it can be called
/// any number of times, interleaved with further updates.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct HashContext {
    variant: Variant,
    sponge: Sponge<KeccakF1600>,
    finalized: bool,
}

impl HashContext {
    /// Create a context with zero state.
    pub fn new(variant: Variant) -> Self {
        let params = variant.params();
        Self {
            variant,
            sponge: Sponge::init(params.rate_bytes, params.padding),
            finalized: false,
        }
    }

    /// Create a context for a named variant, eg. `"keccak256"`.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(Variant::from_name(name)?))
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn rate_bytes(&self) -> usize {
        self.sponge.rate()
    }

    pub fn output_bytes(&self) -> usize {
        self.variant.params().output_bytes
    }

    /// Number of bytes waiting for a full block.
    pub fn buffered_len(&self) -> usize {
        self.sponge.buffered().len()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Feed more input. Empty input is a no-op.
    pub fn update<T>(&mut self, data: T) -> Result<()>
    where
        T: AsRef<[u8]>,
    {
        try_or!(!self.finalized, UseAfterFinalize)?;
        self.sponge.absorb(data);
        Ok(())
    }

    /// Independent copy of the current progress.
    pub fn copy(&self) -> Self {
        *self
    }

    /// Digest of the input so far.
    pub fn digest(&self) -> Vec<u8> {
        self.sponge.squeeze_n(self.output_bytes())
    }

    /// Write the digest into `out`, which must be exactly `output_bytes` long.
    pub fn digest_into(&self, out: &mut [u8]) -> Result<()> {
        try_or!(
            out.len() == self.output_bytes(),
            LengthMismatch(self.output_bytes(), out.len())
        )?;
        self.sponge.squeeze_into(out);
        Ok(())
    }

    /// Lowercase hex encoded digest.
    pub fn hexdigest(&self) -> String {
        hex::encode(self.digest())
    }

    /// Produce the digest and lock the context.
    ///
    /// Any later `update` or `finalize` fails with `UseAfterFinalize`; `digest` keeps returning the same value.
    /// Copies taken before finalizing are unaffected.
    pub fn finalize(&mut self) -> Result<Vec<u8>> {
        try_or!(!self.finalized, UseAfterFinalize)?;
        self.finalized = true;
        Ok(self.digest())
    }

    /// Start over with zero state, clearing the finalized flag.
    pub fn reset(&mut self) {
        self.sponge.reset();
        self.finalized = false;
    }
}

impl fmt::Debug for HashContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", self.variant, self.sponge)?;
        if self.finalized {
            f.write_str("!")?;
        }
        Ok(())
    }
}

/// Hash data with the given variant.
pub fn hash<T>(variant: Variant, data: T) -> Vec<u8>
where
    T: AsRef<[u8]>,
{
    let params = variant.params();
    let mut s = Sponge::<KeccakF1600>::init(params.rate_bytes, params.padding);
    s.absorb(data);
    s.squeeze_n(params.output_bytes)
}

/// Ethereum-style Keccak-256 of `data`.
pub fn keccak256<T>(data: T) -> [u8; HASH_SIZE]
where
    T: AsRef<[u8]>,
{
    let mut s = Sponge::<KeccakF1600>::init(RATE, Padding::Keccak);
    s.absorb(data);
    s.squeeze()
}

/// FIPS-202 SHA3-256 of `data`.
pub fn sha3_256<T>(data: T) -> [u8; HASH_SIZE]
where
    T: AsRef<[u8]>,
{
    let mut s = Sponge::<KeccakF1600>::init(RATE, Padding::Sha3);
    s.absorb(data);
    s.squeeze()
}
