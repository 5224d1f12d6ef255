pub(crate) mod keccak;

/// Pseudo-random permutation.
///
/// Actually, it may be non-bijective as the inverse transform is not used in sponge construction.
#[allow(clippy::upper_case_acronyms)]
pub trait PRP {
    /// Size of the full state in bytes.
    /// Rate and capacity are chosen by the sponge and must add up to this size.
    const STATE_SIZE: usize;

    /// Transform full state.
    fn transform(&mut self);

    /// Xor `data` into the state starting at byte `offset`.
    fn xor_bytes(&mut self, offset: usize, data: &[u8]);

    /// Copy state bytes starting at `offset` into `out`.
    fn extract_bytes(&self, offset: usize, out: &mut [u8]);
}
