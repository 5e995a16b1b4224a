#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`Nrf24l01::new()`](fn@crate::radio::Nrf24l01::new)
//! - [`Nrf24l01::init()`](radio/struct.Nrf24l01.html#method.init)
//! - [`Nrf24l01::configure()`](radio/struct.Nrf24l01.html#method.configure)
//! - [`Nrf24l01::rx_power_up()`](radio/struct.Nrf24l01.html#method.rx_power_up)
//! - [`Nrf24l01::tx_power_up()`](radio/struct.Nrf24l01.html#method.tx_power_up)
//! - [`Nrf24l01::power_down()`](radio/struct.Nrf24l01.html#method.power_down)
//! - [`Nrf24l01::send()`](radio/struct.Nrf24l01.html#method.send)
//! - [`Nrf24l01::data_ready()`](radio/struct.Nrf24l01.html#method.data_ready)
//! - [`Nrf24l01::get_data()`](radio/struct.Nrf24l01.html#method.get_data)
//! - [`Nrf24l01::poll_listener()`](radio/struct.Nrf24l01.html#method.poll_listener)
//! - [`Nrf24l01::set_data_received_handler()`](radio/struct.Nrf24l01.html#method.set_data_received_handler)
//!
//! ## Configuration API
//!
//! - [`Nrf24l01::with_config()`](radio/struct.Nrf24l01.html#method.with_config)
//! - [`Nrf24l01::set_channel()`](radio/struct.Nrf24l01.html#method.set_channel)
//! - [`Nrf24l01::set_pa_level()`](radio/struct.Nrf24l01.html#method.set_pa_level)
//! - [`Nrf24l01::set_data_rate()`](radio/struct.Nrf24l01.html#method.set_data_rate)
//! - [`Nrf24l01::set_crc_length()`](radio/struct.Nrf24l01.html#method.set_crc_length)
//! - [`Nrf24l01::set_payload_length()`](radio/struct.Nrf24l01.html#method.set_payload_length)
//! - [`Nrf24l01::set_source_address()`](radio/struct.Nrf24l01.html#method.set_source_address)
//! - [`Nrf24l01::set_destination_address()`](radio/struct.Nrf24l01.html#method.set_destination_address)
//! - [`Nrf24l01::set_broadcast_address()`](radio/struct.Nrf24l01.html#method.set_broadcast_address)
//!
//! ## Beaconing API
//!
//! - [`Nrf24l01::set_beaconing_mode()`](fn@crate::radio::Nrf24l01::set_beaconing_mode)
//! - [`Nrf24l01::set_transceiver_mode()`](fn@crate::radio::Nrf24l01::set_transceiver_mode)
//! - [`Nrf24l01::send_beaconing_msg()`](fn@crate::radio::Nrf24l01::send_beaconing_msg)
//! - [`ble::data_manipulation`](mod@crate::ble::data_manipulation)
//!
//! ## Register API
//!
//! - [`Nrf24l01::get_register()`](fn@crate::radio::Nrf24l01::get_register)
//! - [`Nrf24l01::set_register()`](fn@crate::radio::Nrf24l01::set_register)
//! - [`Nrf24l01::read_register()`](fn@crate::radio::Nrf24l01::read_register)
//! - [`Nrf24l01::write_register()`](fn@crate::radio::Nrf24l01::write_register)
//! - [`Nrf24l01::send_command()`](fn@crate::radio::Nrf24l01::send_command)
#![no_std]

mod log;
mod types;
pub use types::{Address, CrcLength, DataRate, FifoState, Mode, PaLevel, RadioState, StatusFlags};
pub mod ble;
pub mod radio;
