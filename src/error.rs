use alloc::string::String;

use anyhow::{bail, ensure, Result};
use displaydoc::Display;

#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unknown hash variant '{0}'
    InvalidVariant(String),
    /// Hash context has already been finalized
    UseAfterFinalize,
    /// Size of vec/array does not match (expected: {0}, found: {1})
    LengthMismatch(usize, usize),
    /// Sponge rate must be a non-zero multiple of 8 not above 200 bytes (found: {0})
    InvalidRate(usize),
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Check `$cond`, failing with `$err` otherwise. Logs the call site when `err-location-log` is enabled.
macro_rules! try_or {
    ($cond:expr, $err:expr) => {{
        let cond = $cond;
        if $crate::LOCATION_LOG && !cond {
            $crate::error::location_log(file!(), line!());
        }
        $crate::error::try_or(cond, $err)
    }};
}

/// Fail with `$err`. Logs the call site when `err-location-log` is enabled.
macro_rules! err {
    ($err:expr) => {{
        if $crate::LOCATION_LOG {
            $crate::error::location_log(file!(), line!());
        }
        $crate::error::err($err)
    }};
}

pub(crate) fn try_or(cond: bool, err: Error) -> Result<()> {
    ensure!(cond, err);
    Ok(())
}

pub(crate) fn err<T>(err: Error) -> Result<T> {
    bail!(err)
}

#[cfg(feature = "std")]
pub(crate) fn location_log(file: &str, line: u32) {
    std::eprintln!("\n!!! Error occurred @ {}, {}", file, line);
}

#[cfg(not(feature = "std"))]
pub(crate) fn location_log(_file: &str, _line: u32) {}
