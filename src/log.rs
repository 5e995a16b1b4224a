//! Logging macros that forward to `defmt` when the `defmt` feature is enabled
//! on a bare-metal target, and expand to nothing otherwise.
#![allow(unused_macros)]

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "defmt", target_os = "none"))]
        defmt::debug!($($arg)*);
    };
}

macro_rules! warning {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "defmt", target_os = "none"))]
        defmt::warn!($($arg)*);
    };
}

pub(crate) use {debug, warning};
