use core::fmt;

use digest::{BlockInput, FixedOutputDirty, Reset, Update};
use generic_array::{
    typenum::{U136, U32},
    GenericArray,
};

use super::{Variant, RATE};
use crate::core::{
    prp::keccak::KeccakF1600,
    sponge::{Padding, Sponge},
};

/// Typed hasher for one fixed variant, usable wherever a RustCrypto `Digest` is expected.
macro_rules! impl_hasher {
    ($name:ident, $variant:expr, $padding:expr, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            sponge: Sponge<KeccakF1600>,
        }

        impl $name {
            pub const VARIANT: Variant = $variant;
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    sponge: Sponge::init(RATE, $padding),
                }
            }
        }

        impl BlockInput for $name {
            type BlockSize = U136;
        }

        impl Update for $name {
            fn update(&mut self, data: impl AsRef<[u8]>) {
                self.sponge.absorb(data);
            }
        }

        impl FixedOutputDirty for $name {
            type OutputSize = U32;

            fn finalize_into_dirty(&mut self, out: &mut GenericArray<u8, Self::OutputSize>) {
                self.sponge.squeeze_into(out.as_mut_slice());
            }
        }

        impl Reset for $name {
            fn reset(&mut self) {
                self.sponge.reset();
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{:?}", Self::VARIANT, self.sponge)
            }
        }
    };
}

impl_hasher!(
    Keccak256,
    Variant::Keccak256,
    Padding::Keccak,
    "Keccak-256 with the original Keccak padding."
);
impl_hasher!(Sha3_256, Variant::Sha3_256, Padding::Sha3, "FIPS-202 SHA3-256.");
