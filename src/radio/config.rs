use crate::{Address, CrcLength, DataRate, PaLevel};

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use nrf24l01::radio::RadioConfig;
///
/// let mut config = RadioConfig::default();
/// config = config.with_channel(42);
/// assert_eq!(config.channel(), 42);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RadioConfig {
    channel: u8,
    pa_level: PaLevel,
    data_rate: DataRate,
    crc_length: CrcLength,
    payload_length: u8,
    source_address: Address,
    destination_address: Address,
    broadcast_address: Address,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `76` |
    /// | [`RadioConfig::pa_level()`] | [`PaLevel::Max`] |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps1`] |
    /// | [`RadioConfig::crc_length()`] | [`CrcLength::Bit8`] |
    /// | [`RadioConfig::payload_length()`] | `32` |
    /// | [`RadioConfig::source_address()`] | `[0xE7; 5]` |
    /// | [`RadioConfig::destination_address()`] | `[0xE7; 5]` |
    /// | [`RadioConfig::broadcast_address()`] | `[0xC2; 5]` |
    fn default() -> Self {
        Self {
            channel: 76,
            pa_level: PaLevel::Max,
            data_rate: DataRate::Mbps1,
            crc_length: CrcLength::Bit8,
            payload_length: 32,
            source_address: [0xE7; 5],
            destination_address: [0xE7; 5],
            broadcast_address: [0xC2; 5],
        }
    }
}

impl RadioConfig {
    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the channel (over the air frequency).
    ///
    /// This value is clamped to range [0, 125].
    /// The radio's frequency can be determined by the following equation:
    /// ```text
    /// frequency (in MHz) = channel + 2400
    /// ```
    pub fn with_channel(self, value: u8) -> Self {
        Self {
            channel: value.min(125),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_pa_level()`].
    pub const fn pa_level(&self) -> PaLevel {
        self.pa_level
    }

    /// The Power Amplitude (PA) level.
    ///
    /// See [`EsbPaLevel::set_pa_level()`](fn@crate::radio::prelude::EsbPaLevel::set_pa_level).
    pub fn with_pa_level(self, level: PaLevel) -> Self {
        Self {
            pa_level: level,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.data_rate
    }

    /// Set the Data Rate (over the air speed).
    ///
    /// See [`EsbDataRate::set_data_rate()`](fn@crate::radio::prelude::EsbDataRate::set_data_rate).
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self { data_rate, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_crc_length()`].
    pub const fn crc_length(&self) -> CrcLength {
        self.crc_length
    }

    /// The Cyclical Redundancy Checksum (CRC) length.
    ///
    /// See [`EsbCrcLength::set_crc_length()`](fn@crate::radio::prelude::EsbCrcLength::set_crc_length).
    pub fn with_crc_length(self, length: CrcLength) -> Self {
        Self {
            crc_length: length,
            ..self
        }
    }

    /// Return the value set by [`RadioConfig::with_payload_length()`].
    pub const fn payload_length(&self) -> u8 {
        self.payload_length
    }

    /// The payload length for statically sized payloads.
    ///
    /// This value is clamped to range [1, 32].
    pub fn with_payload_length(self, value: u8) -> Self {
        Self {
            payload_length: value.clamp(1, 32),
            ..self
        }
    }

    /// Return the value set by [`RadioConfig::with_source_address()`].
    pub const fn source_address(&self) -> Address {
        self.source_address
    }

    /// Set the local address used to receive data on pipe 0.
    pub fn with_source_address(self, address: &Address) -> Self {
        Self {
            source_address: *address,
            ..self
        }
    }

    /// Return the value set by [`RadioConfig::with_destination_address()`].
    pub const fn destination_address(&self) -> Address {
        self.destination_address
    }

    /// Set the address used to transmit data.
    pub fn with_destination_address(self, address: &Address) -> Self {
        Self {
            destination_address: *address,
            ..self
        }
    }

    /// Return the value set by [`RadioConfig::with_broadcast_address()`].
    pub const fn broadcast_address(&self) -> Address {
        self.broadcast_address
    }

    /// Set the address used to receive data on pipe 1.
    pub fn with_broadcast_address(self, address: &Address) -> Self {
        Self {
            broadcast_address: *address,
            ..self
        }
    }
}
