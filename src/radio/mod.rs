//! A module to encapsulate all things related to radio operation.
pub mod prelude;

mod nrf24;
pub use nrf24::{commands, mnemonics, registers, Nrf24Error, Nrf24l01};

mod config;
pub use config::RadioConfig;

/// A function invoked by
/// [`EsbRadio::poll_listener()`](fn@crate::radio::prelude::EsbRadio::poll_listener)
/// with each received payload.
pub type DataReceivedHandler = fn(&[u8]);
