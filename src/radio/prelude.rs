//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use nrf24l01::radio::prelude::*;
//! ```

use crate::types::{Address, CrcLength, DataRate, FifoState, PaLevel, StatusFlags};

use super::{DataReceivedHandler, RadioConfig};

/// A trait to represent manipulation of the pipe addresses
/// for an ESB capable transceiver.
///
/// The nRF24L01 driver uses three addresses:
///
/// | address | register | purpose |
/// |---------|----------|---------|
/// | source (local) | RX_ADDR_P0 | receive payloads addressed to this node |
/// | broadcast | RX_ADDR_P1 | receive payloads addressed to all nodes |
/// | destination | TX_ADDR | transmit payloads |
pub trait EsbPipe {
    type PipeErrorType;

    /// Set the local address used to receive data (on pipe 0).
    ///
    /// If the radio is actively receiving, the CE pin is deactivated while
    /// the address is written, then reactivated.
    fn set_source_address(&mut self, address: &Address) -> Result<(), Self::PipeErrorType>;

    /// Get the local address from the radio's RX_ADDR_P0 register.
    fn get_source_address(&mut self) -> Result<Address, Self::PipeErrorType>;

    /// Set the address used to transmit data.
    fn set_destination_address(&mut self, address: &Address) -> Result<(), Self::PipeErrorType>;

    /// Get the destination address from the radio's TX_ADDR register.
    fn get_destination_address(&mut self) -> Result<Address, Self::PipeErrorType>;

    /// Set the broadcast address used to receive data (on pipe 1).
    ///
    /// If the radio is actively receiving, the CE pin is deactivated while
    /// the address is written, then reactivated.
    fn set_broadcast_address(&mut self, address: &Address) -> Result<(), Self::PipeErrorType>;

    /// Get the broadcast address from the radio's RX_ADDR_P1 register.
    fn get_broadcast_address(&mut self) -> Result<Address, Self::PipeErrorType>;
}

/// A trait to represent manipulation of a channel (aka frequency)
/// for an ESB capable transceiver.
pub trait EsbChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// These channels translate to the RF frequency as an offset of MHz from 2400 MHz.
    /// The default channel is 76 (2400 + 76 = 2.476 GHz).
    /// Values above 125 are clamped to 125.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of [`StatusFlags`]
/// for an ESB capable transceiver.
pub trait EsbStatus {
    type StatusErrorType;

    /// Get the [`StatusFlags`] state that was cached from the latest SPI transaction.
    fn get_status_flags(&self) -> StatusFlags;

    /// Clear the radio's IRQ status flags
    ///
    /// This needs to be done after the event has been handled.
    ///
    /// Set any member of [`StatusFlags`] to `true` to clear the corresponding
    /// interrupt event. Setting any member of [`StatusFlags`] to `false` will leave
    /// the corresponding status flag untouched.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;

    /// Refresh the internal cache of status byte
    /// (which is also saved from every SPI transaction).
    ///
    /// Use [`EsbStatus::get_status_flags()`] to get the updated status flags.
    fn update(&mut self) -> Result<(), Self::StatusErrorType>;

    /// A convenience to [`EsbStatus::update()`] and then
    /// [`EsbStatus::get_status_flags()`].
    fn get_status(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        self.update()?;
        Ok(self.get_status_flags())
    }
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for an ESB capable transceiver.
pub trait EsbFifo {
    type FifoErrorType;

    /// Flush the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    ///
    /// This function is automatically called after a blocking
    /// [`EsbRadio::send()`] finishes.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Get the state of the specified FIFO.
    ///
    /// - Pass `true` to `about_tx` parameter to get the state of the TX FIFO.
    /// - Pass `false` to `about_tx` parameter to get the state of the RX FIFO.
    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType>;

    /// Is the radio's RX FIFO empty?
    ///
    /// This reads the RX_EMPTY flag of the FIFO_STATUS register.
    fn rx_fifo_empty(&mut self) -> Result<bool, Self::FifoErrorType>;
}

/// A trait to represent manipulation of static payload lengths
/// for an ESB capable transceiver.
pub trait EsbPayloadLength {
    type PayloadLengthErrorType;

    /// Set the radio's static payload length (for pipes 0 and 1).
    ///
    /// Lengths outside the range [1, 32] are rejected before any SPI transaction.
    fn set_payload_length(&mut self, length: u8) -> Result<(), Self::PayloadLengthErrorType>;

    /// Get the currently configured static payload length.
    fn get_payload_length(&self) -> u8;
}

/// A trait to represent manipulation of the power amplitude level
/// for an ESB capable transceiver.
pub trait EsbPaLevel {
    type PaLevelErrorType;

    /// Get the currently configured Power Amplitude Level (PA Level)
    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType>;

    /// Set the radio's Power Amplitude Level (PA Level)
    ///
    /// Other bits in the RF_SETUP register are left untouched.
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType>;
}

/// A trait to represent manipulation of the state of power
/// for an ESB capable transceiver.
pub trait EsbPower {
    type PowerErrorType;

    /// Power down the radio.
    ///
    /// <div class="warning">
    ///
    /// The nRF24L01 cannot receive nor transmit data when powered down.
    ///
    /// </div>
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Power up the radio as a primary receiver and activate the CE pin.
    ///
    /// If the radio was powered down, this waits 5 milliseconds before
    /// activating the CE pin.
    fn rx_power_up(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Power up the radio as a primary transmitter (CE pin stays inactive).
    ///
    /// If the radio was powered down, this waits 5 milliseconds.
    fn tx_power_up(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Get the current (cached) state of the radio's power.
    ///
    /// Returns `true` if powered up or `false` if powered down.
    fn is_powered(&self) -> bool;

    /// Is the radio configured as a primary receiver?
    fn is_rx(&self) -> bool;
}

/// A trait to represent manipulation of Cyclical Redundancy Checksums
/// for an ESB capable transceiver.
pub trait EsbCrcLength {
    type CrcLengthErrorType;

    /// Get the currently configured CRC (Cyclical Redundancy Checksum) length
    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType>;

    /// Set the radio's CRC (Cyclical Redundancy Checksum) length
    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType>;
}

/// A trait to represent manipulation of the Data Rate
/// for an ESB capable transceiver.
pub trait EsbDataRate {
    type DataRateErrorType;

    /// Get the currently configured Data Rate
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;

    /// Set the radio's Data Rate
    ///
    /// Other bits in the RF_SETUP register are left untouched.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;
}

/// A trait to represent debug output
/// for an ESB capable transceiver.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Print details about radio's current configuration.
    ///
    /// This should only be used for debugging development.
    /// Using this in production should be limited due to a significant increase in
    /// compile size.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}

pub trait EsbInit {
    type ConfigErrorType;

    /// Initialize the radio's hardware.
    ///
    /// This is similar to [`EsbInit::configure()`], but this function also
    ///
    /// - waits 5 milliseconds for radio to finish powering up
    /// - checks if the radio responds correctly over the SPI bus
    ///
    /// This function should only be called once after instantiating the radio object.
    fn init(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Write the driver's current settings to every configuration register.
    ///
    /// The radio is left powered up in standby (as a primary transmitter)
    /// with auto-ack, auto-retries and dynamic payloads disabled.
    fn configure(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Reconfigure the radio using the given `config` object.
    ///
    /// See [`RadioConfig`] for more detail.
    /// This function is a convenience where calling multiple configuration functions may
    /// be cumbersome.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to represent manipulation of an ESB capable transceiver.
///
/// Although the name is rather generic, this trait describes the
/// behavior of a radio's rudimentary modes (RX and TX).
pub trait EsbRadio {
    type RadioErrorType;

    /// Blocking function to transmit a given payload.
    ///
    /// This transmits a payload (given by `buf`) and returns a bool describing if
    /// the transmission was successful or not.
    ///
    /// A `buf` shorter than the static payload length is padded with zeros.
    /// A `buf` longer than the static payload length is rejected before
    /// any SPI transaction takes place.
    fn send(&mut self, buf: &[u8]) -> Result<bool, Self::RadioErrorType>;

    /// Same as [`EsbRadio::send()`] using the driver's staging `tx_buffer`.
    fn send_tx_buffer(&mut self) -> Result<bool, Self::RadioErrorType>;

    /// Non-blocking function to start transmitting a payload.
    ///
    /// Unlike [`EsbRadio::send()`], this function does not wait for the radio to complete
    /// the transmission. Use [`EsbRadio::data_sending()`] to poll for completion.
    fn write(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Is a payload started with [`EsbRadio::write()`] still being transmitted?
    ///
    /// Once the radio reports the transmission finished, the CE pin is deactivated
    /// and this returns `false`.
    fn data_sending(&mut self) -> Result<bool, Self::RadioErrorType>;

    /// Is there a payload available in the radio's RX FIFO?
    fn data_ready(&mut self) -> Result<bool, Self::RadioErrorType>;

    /// Read a payload (of the static payload length) from the radio's RX FIFO into `buf`.
    ///
    /// Returns the number of bytes stored in `buf`.
    fn get_data(&mut self, buf: &mut [u8]) -> Result<u8, Self::RadioErrorType>;

    /// If a payload is available, read it and pass it to the handler registered with
    /// [`EsbRadio::set_data_received_handler()`].
    ///
    /// Returns `true` if a payload was dispatched.
    fn poll_listener(&mut self) -> Result<bool, Self::RadioErrorType>;

    /// Register (or remove with [`None`]) the function that
    /// [`EsbRadio::poll_listener()`] calls for every received payload.
    fn set_data_received_handler(&mut self, handler: Option<DataReceivedHandler>);
}
