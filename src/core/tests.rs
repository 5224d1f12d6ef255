use alloc::vec::Vec;
use core::hash::{Hash, Hasher};

use super::{
    prp::{
        keccak::{keccak_f1600, keccak_p1600, KeccakF1600},
        PRP,
    },
    sponge::{Padding, Sponge},
};
use crate::Error;

/// Deterministic filler so tests don't depend on an rng.
fn pattern(n: usize, seed: u8) -> Vec<u8> {
    (0..n).map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed)).collect()
}

fn lanes(seed: u64) -> [u64; 25] {
    let mut x = seed | 1;
    let mut state = [0u64; 25];
    for lane in state.iter_mut() {
        // xorshift64
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        *lane = x;
    }
    state
}

#[test]
fn permutation_of_zero_state() {
    let mut state = [0u64; 25];
    keccak_f1600(&mut state);
    assert_eq!(state[0], 0xF125_8F79_40E1_DDE7);
    assert_eq!(state[1], 0x84D5_CCF9_33C0_478A);
    assert_eq!(state[2], 0xD598_261E_A65A_A9EE);

    keccak_f1600(&mut state);
    let mut expected = [0u64; 25];
    keccak::f1600(&mut expected);
    keccak::f1600(&mut expected);
    assert_eq!(state, expected);
}

#[test]
fn permutation_matches_reference() {
    for seed in 1..64 {
        let mut state = lanes(seed);
        let mut expected = state;
        keccak_f1600(&mut state);
        keccak::f1600(&mut expected);
        assert_eq!(state, expected, "seed {}", seed);
    }
}

#[test]
fn reduced_rounds() {
    let input = lanes(7);

    let mut none = input;
    keccak_p1600(&mut none, 0);
    assert_eq!(none, input);

    let mut full = input;
    keccak_p1600(&mut full, 24);
    let mut clamped = input;
    keccak_p1600(&mut clamped, 100);
    let mut f = input;
    keccak_f1600(&mut f);
    assert_eq!(full, f);
    assert_eq!(clamped, f);

    let mut twelve = input;
    keccak_p1600(&mut twelve, 12);
    assert_ne!(twelve, input);
    assert_ne!(twelve, f);
}

#[test]
fn lanes_are_little_endian() {
    let mut s = KeccakF1600::default();
    s.xor_bytes(0, &[0x01, 0x02]);
    s.xor_bytes(8, &[0xff]);
    s.xor_bytes(199, &[0x80]);
    assert_eq!(s.lanes()[0], 0x0201);
    assert_eq!(s.lanes()[1], 0xff);
    assert_eq!(s.lanes()[24], 0x8000_0000_0000_0000);

    let mut out = [0u8; 3];
    s.extract_bytes(0, &mut out);
    assert_eq!(out, [0x01, 0x02, 0x00]);
    s.extract_bytes(198, &mut out[..2]);
    assert_eq!(out[..2], [0x00, 0x80]);

    s.xor_bytes(0, &[0x01, 0x02]);
    assert_eq!(s.lanes()[0], 0);
}

#[test]
fn transform_is_the_permutation() {
    let input = lanes(3);
    let mut s = KeccakF1600::from_lanes(input);
    s.transform();
    let mut expected = input;
    keccak::f1600(&mut expected);
    assert_eq!(s.lanes(), &expected);
}

#[test]
fn rejects_bad_rates() {
    for &rate in &[0, 7, 135, 201, 208] {
        let e = Sponge::<KeccakF1600>::try_init(rate, Padding::Keccak).unwrap_err();
        assert_eq!(e.downcast_ref::<Error>(), Some(&Error::InvalidRate(rate)));
    }
    for &rate in &[8, 72, 136, 168, 200] {
        let s = Sponge::<KeccakF1600>::try_init(rate, Padding::Sha3).unwrap();
        assert_eq!(s.rate(), rate);
        assert_eq!(s.padding(), Padding::Sha3);
    }
}

#[test]
fn empty_digests() {
    let s = Sponge::<KeccakF1600>::try_init(136, Padding::Keccak).unwrap();
    assert_eq!(
        hex::encode(s.squeeze_n(32)),
        "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
    );
    let s = Sponge::<KeccakF1600>::try_init(136, Padding::Sha3).unwrap();
    assert_eq!(
        hex::encode(s.squeeze_n(32)),
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
    );
}

#[test]
fn squeeze_beyond_rate() {
    let s = Sponge::<KeccakF1600>::try_init(136, Padding::Keccak).unwrap();
    let long = s.squeeze_n(200);
    assert_eq!(
        hex::encode(&long),
        concat!(
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
            "3dbb9a2cd87ca974b9a2b0ec61119bcb5cedf9c0c411221f6141a25f17c60d82",
            "d24680abbcbfba815b762b24b751d5b1e85325ba5e6df23c10725bfe986ace3b",
            "a2d24535a79f7dbabb153bb0d33c0dfa09cec712ebd7fe3b49a9194e859c82eb",
            "ff11a645651a5d1b62cfbfbcbedce0ae3d5034fcf1f100895701f98c258fb14f",
            "7e3feb567b14ddcdc44f4e10791dee192c5b61ea11e7ab6d6dd8611252517ca0",
            "d3542cad5f00f212"
        )
    );
    // Output is a prefix-stable stream.
    assert_eq!(s.squeeze_n(137), long[..137]);
}

fn split_absorb_n(n: usize) {
    let rate = 136;
    let x = pattern(n, n as u8);

    let mut whole = Sponge::<KeccakF1600>::try_init(rate, Padding::Keccak).unwrap();
    whole.absorb(&x);
    let expected: [u8; 32] = whole.squeeze();
    assert_eq!(whole.buffered().len(), n % rate, "{}: pending bytes", n);

    for cut in &[0, 1, n / 3, n / 2, rate - 1, rate, rate + 1] {
        let cut = core::cmp::min(*cut, n);
        let mut s = Sponge::<KeccakF1600>::try_init(rate, Padding::Keccak).unwrap();
        s.absorb(&x[..cut]);
        assert!(s.buffered().len() < rate);
        s.absorb(&x[cut..]);
        assert!(s.squeeze::<[u8; 32]>() == expected, "{}: split at {}", n, cut);
    }

    let mut bytewise = Sponge::<KeccakF1600>::try_init(rate, Padding::Keccak).unwrap();
    for b in &x {
        bytewise.absorb(core::slice::from_ref(b));
        assert!(bytewise.buffered().len() < rate);
    }
    assert!(bytewise.squeeze::<[u8; 32]>() == expected, "{}: bytewise", n);
}

#[test]
fn absorb_with_size_boundary_cases() {
    let rate = 136;
    for i in 0..40 {
        split_absorb_n(i);
    }
    split_absorb_n(rate / 2 - 1);
    split_absorb_n(rate / 2);
    split_absorb_n(rate / 2 + 1);
    split_absorb_n(rate - 1);
    split_absorb_n(rate);
    split_absorb_n(rate + 1);
    split_absorb_n(rate * 2 - 1);
    split_absorb_n(rate * 2);
    split_absorb_n(rate * 2 + 1);
    split_absorb_n(rate * 5);
}

#[test]
fn squeeze_leaves_sponge_untouched() {
    let mut s = Sponge::<KeccakF1600>::try_init(136, Padding::Keccak).unwrap();
    s.absorb(pattern(150, 9));
    let before = s;
    let d1: [u8; 32] = s.squeeze();
    let d2: [u8; 32] = s.squeeze();
    assert!(d1 == d2);
    assert!(s == before);
    assert_eq!(s.buffered(), &pattern(150, 9)[136..]);
}

#[test]
fn forks_are_independent() {
    let mut s = Sponge::<KeccakF1600>::try_init(136, Padding::Keccak).unwrap();
    s.absorb(b"common prefix");
    let mut fork = s.fork();
    s.absorb(b"left");
    fork.absorb(b"right");
    assert_ne!(s.squeeze_n(32), fork.squeeze_n(32));

    let mut left = Sponge::<KeccakF1600>::try_init(136, Padding::Keccak).unwrap();
    left.absorb(b"common prefixleft");
    assert_eq!(s.squeeze_n(32), left.squeeze_n(32));
}

#[test]
fn reset_restarts() {
    let fresh = Sponge::<KeccakF1600>::try_init(136, Padding::Sha3).unwrap();
    let mut s = fresh;
    s.absorb(pattern(300, 1));
    s.reset();
    assert!(s == fresh);
    assert_eq!(s.padding(), Padding::Sha3);
}

#[test]
fn debug_shows_pending_input() {
    let mut s = Sponge::<KeccakF1600>::try_init(136, Padding::Keccak).unwrap();
    s.absorb([0xabu8, 0xcd]);
    assert_eq!(format!("{:?}", s), "[abcd|136:Keccak]");
}

/// Records everything written to it, so equal `Hash` impls yield equal byte streams.
#[derive(Default)]
struct Recorder(Vec<u8>);

impl Hasher for Recorder {
    fn finish(&self) -> u64 {
        self.0.len() as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        self.0.extend_from_slice(bytes);
    }
}

fn recorded<T: Hash>(x: &T) -> Vec<u8> {
    let mut h = Recorder::default();
    x.hash(&mut h);
    h.0
}

#[test]
fn split_absorb_compares_equal() {
    let d = [0x42u8; 136];
    let mut a = Sponge::<KeccakF1600>::try_init(136, Padding::Keccak).unwrap();
    let mut b = a;
    a.absorb(&d[..100]);
    a.absorb(&d[100..]);
    b.absorb(&d[..]);
    assert!(a.buffered().is_empty());
    assert!(a == b);
    assert_eq!(recorded(&a), recorded(&b));

    let x = pattern(500, 3);
    for &(cut, len) in &[(1, 137), (100, 300), (135, 140), (136, 273), (271, 500)] {
        let mut a = Sponge::<KeccakF1600>::try_init(136, Padding::Sha3).unwrap();
        let mut b = a;
        a.absorb(&x[..cut]);
        a.absorb(&x[cut..len]);
        b.absorb(&x[..len]);
        assert!(a == b, "split at {} of {}", cut, len);
        assert_eq!(recorded(&a), recorded(&b), "split at {} of {}", cut, len);
    }
}

#[test]
fn committed_block_is_cleared() {
    // A full block through the buffer, then a short tail, must look like the same input absorbed at once.
    let mut buffered = Sponge::<KeccakF1600>::try_init(136, Padding::Keccak).unwrap();
    buffered.absorb([0xffu8; 10]);
    buffered.absorb([0xffu8; 126]);
    buffered.absorb([0x01u8]);

    let mut direct = Sponge::<KeccakF1600>::try_init(136, Padding::Keccak).unwrap();
    direct.absorb([0xffu8; 136]);
    direct.absorb([0x01u8]);

    assert_eq!(buffered.buffered(), &[0x01u8][..]);
    assert!(buffered == direct);
    assert_eq!(recorded(&buffered), recorded(&direct));
    assert_eq!(format!("{:?}", buffered), "[01|136:Keccak]");

    let mut different = Sponge::<KeccakF1600>::try_init(136, Padding::Keccak).unwrap();
    different.absorb([0xffu8; 136]);
    different.absorb([0x02u8]);
    assert!(buffered != different);
}
