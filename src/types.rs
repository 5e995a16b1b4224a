//! This module defines the enumerations and bit fields shared by the radio and
//! the beaconing codec.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// A 5 byte pipe address.
///
/// The same type is used for the local (pipe 0), destination (TX) and
/// broadcast (pipe 1) addresses.
pub type Address = [u8; 5];

/// Power Amplifier level. The units dBm (decibel-milliwatts or dB<sub>mW</sub>)
/// represents a logarithmic signal loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaLevel {
    /// -18 dBm
    Min,
    /// -12 dBm
    Low,
    /// -6 dBm
    High,
    /// 0 dBm
    Max,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for PaLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PaLevel::Min => defmt::write!(fmt, "-18 dBm"),
            PaLevel::Low => defmt::write!(fmt, "-12 dBm"),
            PaLevel::High => defmt::write!(fmt, "-6 dBm"),
            PaLevel::Max => defmt::write!(fmt, "0 dBm"),
        }
    }
}

impl PaLevel {
    /// The RF_SETUP bits that hold the PA level.
    pub(crate) const MASK: u8 = 6;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            PaLevel::Min => 0,
            PaLevel::Low => 2,
            PaLevel::High => 4,
            PaLevel::Max => 6,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 => PaLevel::Min,
            2 => PaLevel::Low,
            4 => PaLevel::High,
            _ => PaLevel::Max,
        }
    }

    /// The output power in dBm.
    pub const fn dbm(self) -> i8 {
        match self {
            PaLevel::Min => -18,
            PaLevel::Low => -12,
            PaLevel::High => -6,
            PaLevel::Max => 0,
        }
    }
}

impl Display for PaLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{} dBm", self.dbm())
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataRate {
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
    /// represents 250 Kbps
    Kbps250,
}

impl DataRate {
    /// The RF_SETUP bits (RF_DR_LOW and RF_DR_HIGH) that hold the data rate.
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
            DataRate::Kbps250 => 0x20,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0x8 => DataRate::Mbps2,
            0x20 => DataRate::Kbps250,
            _ => DataRate::Mbps1,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

/// The length of a CRC checksum that is used (if any).
///
/// The beaconing mode disables the radio's CRC because BLE packets carry
/// their own 24 bit checksum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrcLength {
    /// represents no CRC checksum is used
    Disabled,
    /// represents CRC 8 bit checksum is used
    Bit8,
    /// represents CRC 16 bit checksum is used
    Bit16,
}

impl CrcLength {
    /// The CONFIG bits (EN_CRC and CRCO) that hold the CRC length.
    pub(crate) const MASK: u8 = 0b1100;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            CrcLength::Disabled => 0,
            CrcLength::Bit8 => 8,
            CrcLength::Bit16 => 12,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            8 => CrcLength::Bit8,
            12 => CrcLength::Bit16,
            _ => CrcLength::Disabled,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for CrcLength {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CrcLength::Disabled => defmt::write!(fmt, "disabled"),
            CrcLength::Bit8 => defmt::write!(fmt, "8 bit"),
            CrcLength::Bit16 => defmt::write!(fmt, "16 bit"),
        }
    }
}

impl Display for CrcLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CrcLength::Disabled => write!(f, "disabled"),
            CrcLength::Bit8 => write!(f, "8 bit"),
            CrcLength::Bit16 => write!(f, "16 bit"),
        }
    }
}

/// The possible states of a FIFO.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FifoState {
    /// Represent the state of a FIFO when it is full.
    Full,
    /// Represent the state of a FIFO when it is empty.
    Empty,
    /// Represent the state of a FIFO when it is not full but not empty either.
    Occupied,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for FifoState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FifoState::Empty => defmt::write!(fmt, "Empty"),
            FifoState::Full => defmt::write!(fmt, "Full"),
            FifoState::Occupied => defmt::write!(fmt, "Occupied"),
        }
    }
}

impl Display for FifoState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FifoState::Empty => write!(f, "Empty"),
            FifoState::Full => write!(f, "Full"),
            FifoState::Occupied => write!(f, "Occupied"),
        }
    }
}

/// Which send path the driver uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Payloads are transmitted as given (padded to the configured payload length).
    Transceiver,
    /// Payloads are encoded as BLE advertisements before transmission.
    Beacon,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for Mode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Mode::Transceiver => defmt::write!(fmt, "Transceiver"),
            Mode::Beacon => defmt::write!(fmt, "Beacon"),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Mode::Transceiver => write!(f, "Transceiver"),
            Mode::Beacon => write!(f, "Beacon"),
        }
    }
}

/// The driver's view of the radio's operating state.
///
/// ```text
/// Uninitialized -> Configured -> {Idle, Receiving, Transmitting} -> PoweredDown
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadioState {
    /// Nothing has been written to the radio yet.
    Uninitialized,
    /// All registers are written and the radio is powered up in standby.
    Configured,
    /// Standby after a completed transmission.
    Idle,
    /// Primary RX with the CE pin active.
    Receiving,
    /// Primary TX, either primed or actively transmitting.
    Transmitting,
    /// The PWR_UP bit is cleared.
    PoweredDown,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for RadioState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            RadioState::Uninitialized => defmt::write!(fmt, "Uninitialized"),
            RadioState::Configured => defmt::write!(fmt, "Configured"),
            RadioState::Idle => defmt::write!(fmt, "Idle"),
            RadioState::Receiving => defmt::write!(fmt, "Receiving"),
            RadioState::Transmitting => defmt::write!(fmt, "Transmitting"),
            RadioState::PoweredDown => defmt::write!(fmt, "PoweredDown"),
        }
    }
}

impl Display for RadioState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RadioState::Uninitialized => write!(f, "Uninitialized"),
            RadioState::Configured => write!(f, "Configured"),
            RadioState::Idle => write!(f, "Idle"),
            RadioState::Receiving => write!(f, "Receiving"),
            RadioState::Transmitting => write!(f, "Transmitting"),
            RadioState::PoweredDown => write!(f, "PoweredDown"),
        }
    }
}

/// A struct used to describe the radio's STATUS byte.
///
/// The STATUS byte is returned by the radio at the start of every SPI transaction,
/// so the driver always holds the value from the latest transaction.
///
/// ```
/// use nrf24l01::StatusFlags;
///
/// let flags = StatusFlags::default() // all flags are false
///     .with_rx_dr(true); // assert only `rx_dr` flag
/// assert!(flags.rx_dr());
/// ```
/// Use [`StatusFlags::default`] to instantiate all flags set to false.
/// Use [`StatusFlags::new`] to instantiate all IRQ flags set to true.
#[bitfield(u8, new = false, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// A flag to describe if RX Data Ready to read.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// A flag to describe if the maximum number of retransmits was reached.
    #[bits(1, access = RO)]
    pub max_rt: bool,

    /// The pipe number of the payload available for reading from the RX FIFO.
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// A flag to describe if the TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags. Useful for STATUS and CONFIG registers.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    /// A mask of the flags that end a transmission.
    pub(crate) const TX_DONE_MASK: u8 = 0x30;

    /// A convenience constructor similar to [`StatusFlags::default`] except
    /// all IRQ flags are set to `true`.
    pub fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }

    /// Did the latest transmission end, either successfully or not?
    pub const fn tx_done(&self) -> bool {
        self.into_bits() & Self::TX_DONE_MASK != 0
    }

    /// A flag to describe if RX Data Ready to read.
    pub fn with_rx_dr(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::RX_DR_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::RX_DR_OFFSET))
    }

    /// A flag to describe if TX Data Sent.
    pub fn with_tx_ds(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::TX_DS_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::TX_DS_OFFSET))
    }

    /// A flag to describe if the maximum number of retransmits was reached.
    pub fn with_max_rt(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::MAX_RT_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::MAX_RT_OFFSET))
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

#[cfg(test)]
mod test {
    use super::{CrcLength, DataRate, FifoState, Mode, PaLevel, RadioState, StatusFlags};
    extern crate std;
    use std::{format, string::String};

    fn display_crc(param: CrcLength, expected: String) -> bool {
        format!("{param}") == expected
    }

    #[test]
    fn crc_display() {
        assert!(display_crc(CrcLength::Bit8, String::from("8 bit")));
        assert!(display_crc(CrcLength::Bit16, String::from("16 bit")));
        assert!(display_crc(CrcLength::Disabled, String::from("disabled")));
    }

    #[test]
    fn crc_bits() {
        for crc in [CrcLength::Disabled, CrcLength::Bit8, CrcLength::Bit16] {
            assert_eq!(CrcLength::from_bits(crc.into_bits()), crc);
        }
        // EN_CRC cleared means no CRC regardless of CRCO
        assert_eq!(CrcLength::from_bits(4), CrcLength::Disabled);
    }

    #[test]
    fn fifo_state_display() {
        assert_eq!(format!("{}", FifoState::Empty), "Empty");
        assert_eq!(format!("{}", FifoState::Full), "Full");
        assert_eq!(format!("{}", FifoState::Occupied), "Occupied");
    }

    #[test]
    fn data_rate_display() {
        assert_eq!(format!("{}", DataRate::Mbps1), "1 Mbps");
        assert_eq!(format!("{}", DataRate::Mbps2), "2 Mbps");
        assert_eq!(format!("{}", DataRate::Kbps250), "250 Kbps");
    }

    #[test]
    fn data_rate_bits() {
        assert_eq!(DataRate::Kbps250.into_bits(), 1 << 5);
        assert_eq!(DataRate::Mbps2.into_bits(), 1 << 3);
        // unrelated bits are ignored
        assert_eq!(DataRate::from_bits(0x27), DataRate::Kbps250);
    }

    #[test]
    fn pa_level_display() {
        assert_eq!(format!("{}", PaLevel::Min), "-18 dBm");
        assert_eq!(format!("{}", PaLevel::Low), "-12 dBm");
        assert_eq!(format!("{}", PaLevel::High), "-6 dBm");
        assert_eq!(format!("{}", PaLevel::Max), "0 dBm");
    }

    #[test]
    fn pa_level_bits() {
        for level in [PaLevel::Min, PaLevel::Low, PaLevel::High, PaLevel::Max] {
            assert_eq!(PaLevel::from_bits(level.into_bits() | 0x29), level);
        }
    }

    #[test]
    fn mode_and_state_display() {
        assert_eq!(format!("{}", Mode::Beacon), "Beacon");
        assert_eq!(format!("{}", RadioState::PoweredDown), "PoweredDown");
    }

    #[test]
    fn display_flags() {
        assert_eq!(
            format!("{}", StatusFlags::default()),
            String::from("StatusFlags rx_dr: false, tx_ds: false, max_rt: false")
        );
    }

    fn set_flags(rx_dr: bool, tx_ds: bool, max_rt: bool) {
        let flags = StatusFlags::default()
            .with_rx_dr(rx_dr)
            .with_tx_ds(tx_ds)
            .with_max_rt(max_rt);
        assert_eq!(flags.rx_dr(), rx_dr);
        assert_eq!(flags.tx_ds(), tx_ds);
        assert_eq!(flags.max_rt(), max_rt);
        assert_eq!(flags.tx_done(), tx_ds || max_rt);
    }

    #[test]
    fn flags_0x50() {
        set_flags(true, false, true);
    }

    #[test]
    fn flags_0x20() {
        set_flags(false, true, false);
    }

    #[test]
    fn status_byte_fields() {
        let flags = StatusFlags::from_bits(0x0E);
        assert_eq!(flags.rx_pipe(), 7);
        assert!(!flags.tx_full());
        assert!(StatusFlags::from_bits(1).tx_full());
    }
}
