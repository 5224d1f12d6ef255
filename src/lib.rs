#![no_std]

//! Incremental Keccak hashing built on a forkable Keccak-f[1600] sponge.
//!
//! A [`HashContext`] is a plain value: copying it forks the computation, and
//! both branches can be updated and digested independently.
//!
//! ```
//! use keccak_spongos::{HashContext, Variant};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut ctx = HashContext::new(Variant::Keccak256);
//! ctx.update(b"Hallo-1")?;
//! let mut fork = ctx.copy();
//! ctx.update(b"hallo-2")?;
//! fork.update(b"hallo-3")?;
//! assert_ne!(ctx.digest(), fork.digest());
//! # Ok(())
//! # }
//! ```

// Buffers, hex strings and error messages need heap allocation
#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(feature = "err-location-log"))]
pub const LOCATION_LOG: bool = false;

#[cfg(feature = "err-location-log")]
pub const LOCATION_LOG: bool = true;

pub use anyhow::Result;

#[macro_use]
mod error;
pub use error::Error;

mod core;
pub mod hash;

pub use crate::{
    core::{
        prp::{
            keccak::{keccak_f1600, keccak_p1600, KeccakF1600},
            PRP,
        },
        sponge::{Padding, Sponge},
    },
    hash::{hash, keccak256, sha3_256, HashContext, Keccak256, Params, Sha3_256, Variant},
};
