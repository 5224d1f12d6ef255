use super::PRP;

/// Number of rounds of the full `Keccak-f[1600]` permutation.
pub const ROUNDS: usize = 24;

/// Iota round constants.
const RC: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rho rotation offsets, in the order lanes are visited by the pi walk.
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Pi lane walk starting from lane (1, 0).
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

fn round(a: &mut [u64; 25], rc: u64) {
    // θ
    let mut c = [0u64; 5];
    for (x, cx) in c.iter_mut().enumerate() {
        *cx = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in (0..25).step_by(5) {
            a[y + x] ^= d;
        }
    }

    // ρ and π
    let mut last = a[1];
    for (&j, &r) in PI.iter().zip(RHO.iter()) {
        let t = a[j];
        a[j] = last.rotate_left(r);
        last = t;
    }

    // χ
    for y in (0..25).step_by(5) {
        let row = [a[y], a[y + 1], a[y + 2], a[y + 3], a[y + 4]];
        for x in 0..5 {
            a[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }

    // ι
    a[0] ^= rc;
}

/// `Keccak-p[1600, rounds]`: the last `rounds` rounds of `Keccak-f[1600]`.
/// More than 24 rounds are clamped to 24.
pub fn keccak_p1600(state: &mut [u64; 25], rounds: usize) {
    let rounds = core::cmp::min(rounds, ROUNDS);
    for &rc in &RC[ROUNDS - rounds..] {
        round(state, rc);
    }
}

/// `Keccak-f[1600]` permutation, lanes indexed as `x + 5 * y`.
pub fn keccak_f1600(state: &mut [u64; 25]) {
    keccak_p1600(state, ROUNDS)
}

/// A psuedo-random permutation implementing `Keccak-F[1600]`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeccakF1600 {
    /// Inner state for transformation
    state: [u64; 25],
}

impl KeccakF1600 {
    pub fn from_lanes(state: [u64; 25]) -> Self {
        Self { state }
    }

    pub fn lanes(&self) -> &[u64; 25] {
        &self.state
    }

    /// Use `Keccak-F[1600]` sponge function on inner state
    fn permutation(&mut self) {
        keccak_f1600(&mut self.state);
    }
}

impl PRP for KeccakF1600 {
    const STATE_SIZE: usize = 200; // 1600 / 8

    fn transform(&mut self) {
        self.permutation();
    }

    // Bytes map onto lanes little-endian, independent of host byte order.
    fn xor_bytes(&mut self, offset: usize, data: &[u8]) {
        for (i, b) in data.iter().enumerate() {
            let pos = offset + i;
            self.state[pos / 8] ^= u64::from(*b) << (8 * (pos % 8));
        }
    }

    fn extract_bytes(&self, offset: usize, out: &mut [u8]) {
        for (i, o) in out.iter_mut().enumerate() {
            let pos = offset + i;
            *o = (self.state[pos / 8] >> (8 * (pos % 8))) as u8;
        }
    }
}
