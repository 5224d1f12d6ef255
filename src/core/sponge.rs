use alloc::vec::Vec;
use core::{
    cmp::min,
    fmt,
    hash::{Hash, Hasher},
};

use anyhow::Result;

use super::prp::PRP;
use crate::Error::InvalidRate;

/// Largest supported rate in bytes, the whole `Keccak-f[1600]` state.
pub(crate) const MAX_RATE: usize = 200;

/// Last bit of `pad10*1`, set in the final byte of the padded block.
const PAD_END: u8 = 0x80;

/// Domain separation used by the multi-rate padding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Padding {
    /// Original Keccak submission padding, as used by Ethereum's keccak256.
    Keccak,
    /// FIPS-202 SHA-3 padding, two domain bits `01` before `pad10*1`.
    Sha3,
}

impl Padding {
    /// First padding byte, appended right after the message.
    pub fn domain_byte(self) -> u8 {
        match self {
            Padding::Keccak => 0x01,
            Padding::Sha3 => 0x06,
        }
    }
}

/// Sponge over a PRP with a buffered outer state.
///
/// Input is collected into `buf` and only xored into the state once a full rate-sized block is available,
/// so the permutation runs exactly once per absorbed block. Being a plain value, copying a sponge forks it.
#[derive(Clone, Copy)]
pub struct Sponge<F> {
    /// Sponge transform together with its internal state.
    s: F,

    /// Pending input, only `buf[..pos]` is meaningful.
    buf: [u8; MAX_RATE],

    /// Number of pending bytes, always less than `rate` between calls.
    pos: usize,

    /// Size of a data block in bytes.
    rate: usize,

    padding: Padding,
}

impl<F> Sponge<F>
where
    F: PRP + Default,
{
    /// Create a sponge with zero state, rejecting rates the state can't accommodate.
    pub fn try_init(rate: usize, padding: Padding) -> Result<Self> {
        try_or!(
            rate != 0 && rate % 8 == 0 && rate <= min(MAX_RATE, F::STATE_SIZE),
            InvalidRate(rate)
        )?;
        Ok(Self::init(rate, padding))
    }

    /// Create a sponge with zero state. `rate` comes from the variant table.
    pub(crate) fn init(rate: usize, padding: Padding) -> Self {
        debug_assert!(rate != 0 && rate <= min(MAX_RATE, F::STATE_SIZE));
        Self {
            s: F::default(),
            buf: [0; MAX_RATE],
            pos: 0,
            rate,
            padding,
        }
    }

    /// Forget all absorbed input.
    pub fn reset(&mut self) {
        *self = Self::init(self.rate, self.padding);
    }
}

impl<F: PRP> Sponge<F> {
    pub fn rate(&self) -> usize {
        self.rate
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Input accepted but not yet absorbed into the state.
    pub fn buffered(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Xor the full pending block into the state, transform and clear the block.
    fn commit(&mut self) {
        self.s.xor_bytes(0, &self.buf[..self.rate]);
        self.s.transform();
        for b in &mut self.buf[..self.rate] {
            *b = 0;
        }
        self.pos = 0;
    }

    /// Absorb a slice into Sponge object.
    pub fn absorb<T>(&mut self, xr: T)
    where
        T: AsRef<[u8]>,
    {
        let mut x = xr.as_ref();
        while !x.is_empty() {
            if self.pos == 0 && x.len() >= self.rate {
                // Whole block available, skip the buffer.
                self.s.xor_bytes(0, &x[..self.rate]);
                self.s.transform();
                x = &x[self.rate..];
                continue;
            }
            let n = min(self.rate - self.pos, x.len());
            self.buf[self.pos..self.pos + n].copy_from_slice(&x[..n]);
            x = &x[n..];
            self.pos += n;
            if self.pos == self.rate {
                self.commit();
            }
        }
    }

    /// Apply `pad10*1` with the domain byte and absorb the final block.
    ///
    /// Since `pos < rate` the padding always fits in the current block; with `rate - 1` pending bytes the domain
    /// byte and the end bit share the last byte.
    fn pad(&mut self) {
        for b in &mut self.buf[self.pos..self.rate] {
            *b = 0;
        }
        self.buf[self.pos] ^= self.padding.domain_byte();
        self.buf[self.rate - 1] ^= PAD_END;
        self.commit();
    }

    /// Squeeze bytes from the outer state, transforming between rate-sized output blocks.
    /// Must only be called on a padded sponge; `pos` tracks the squeeze offset from then on.
    fn squeeze_mut(&mut self, mut y: &mut [u8]) {
        while !y.is_empty() {
            if self.pos == self.rate {
                self.s.transform();
                self.pos = 0;
            }
            let n = min(self.rate - self.pos, y.len());
            self.s.extract_bytes(self.pos, &mut y[..n]);
            self.pos += n;
            y = &mut y[n..];
        }
    }
}

impl<F> Sponge<F>
where
    F: PRP + Clone,
{
    /// Fork Sponge object into a new one.
    /// Essentially this just creates a clone of self.
    pub fn fork(&self) -> Self {
        self.clone()
    }

    /// Pad and squeeze `out.len()` bytes from a fork, leaving `self` untouched.
    pub fn squeeze_into(&self, out: &mut [u8]) {
        let mut s = self.fork();
        s.pad();
        s.squeeze_mut(out);
    }

    /// Squeeze output, length inferred from output type.
    pub fn squeeze<R>(&self) -> R
    where
        R: AsMut<[u8]> + Default,
    {
        let mut output = R::default();
        self.squeeze_into(output.as_mut());
        output
    }

    /// Squeeze vector, length is known at runtime.
    pub fn squeeze_n(&self, n: usize) -> Vec<u8> {
        let mut v = vec![0; n];
        self.squeeze_into(&mut v);
        v
    }
}

// Only pending input takes part, bytes past `pos` are not observable.
impl<F: PartialEq> PartialEq for Sponge<F> {
    fn eq(&self, other: &Self) -> bool {
        self.s == other.s
            && self.rate == other.rate
            && self.padding == other.padding
            && self.buf[..self.pos] == other.buf[..other.pos]
    }
}

impl<F: Eq> Eq for Sponge<F> {}

impl<F: Hash> Hash for Sponge<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.s.hash(state);
        self.buf[..self.pos].hash(state);
        self.rate.hash(state);
        self.padding.hash(state);
    }
}

impl<F> fmt::Debug for Sponge<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}|{}:{:?}]",
            hex::encode(&self.buf[..self.pos]),
            self.rate,
            self.padding
        )
    }
}
