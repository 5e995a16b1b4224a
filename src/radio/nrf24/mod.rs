use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
mod beacon;
pub(crate) mod bit_fields;
mod channel;
mod init;
use bit_fields::Config;
mod constants;
mod crc_length;
mod data_rate;
mod fifo;
mod pa_level;
mod payload_length;
mod pipe;
mod power;
mod radio;
pub use constants::{commands, mnemonics, registers};
mod details;
mod status;
use super::DataReceivedHandler;
use crate::{
    types::{Address, CrcLength, DataRate, Mode, PaLevel, RadioState},
    StatusFlags,
};

/// An collection of error types to describe hardware malfunctions and misuse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    Gpo(DO),
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO)
    BinaryCorruption,
    /// A buffer or value was outside the range the radio can handle.
    ///
    /// This is always detected before any SPI transaction takes place.
    InvalidArgument,
    /// The radio did not report a TX_DS or MAX_RT event within
    /// [`Nrf24l01::tx_timeout`] status polls.
    ///
    /// The payload is left in the TX FIFO.
    TxTimeout,
    /// The operation is not available in the current [`Mode`].
    WrongMode,
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// Additionally, there are some functions implemented that are specific to the nRF24L01,
/// namely the raw register access and the BLE beaconing mode.
pub struct Nrf24l01<SPI, DO, DELAY> {
    /// The maximum number of STATUS polls (spaced 10 microseconds apart)
    /// that [`EsbRadio::send()`](fn@crate::radio::prelude::EsbRadio::send)
    /// waits for a transmission to finish.
    ///
    /// Exhausting this bound results in [`Nrf24Error::TxTimeout`].
    pub tx_timeout: u16,
    /// The MAC address advertised in beaconing mode.
    pub mac_address: [u8; 6],
    /// Holds the latest payload dispatched by
    /// [`EsbRadio::poll_listener()`](fn@crate::radio::prelude::EsbRadio::poll_listener).
    pub rx_buffer: [u8; 32],
    /// A staging buffer sent by
    /// [`EsbRadio::send_tx_buffer()`](fn@crate::radio::prelude::EsbRadio::send_tx_buffer).
    pub tx_buffer: [u8; 32],
    _spi: SPI,
    _ce_pin: DO,
    _delay_impl: DELAY,
    _buf: [u8; 33],
    _ble_buf: [u8; 32],
    _status: StatusFlags,
    _config_reg: Config,
    _channel: u8,
    _pa_level: PaLevel,
    _data_rate: DataRate,
    _crc_length: CrcLength,
    _payload_length: u8,
    _local_address: Address,
    _destination_address: Address,
    _broadcast_address: Address,
    _mode: Mode,
    _state: RadioState,
    _tx_pending: bool,
    _handler: Option<DataReceivedHandler>,
}

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Instantiate a [`Nrf24l01`] object for use on the specified
    /// `spi` bus with the given `ce_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter).
    /// Every SPI transaction asserts CSN on entry and releases it on exit.
    ///
    /// Nothing is written to the radio until
    /// [`init()`](fn@crate::radio::prelude::EsbInit::init) or
    /// [`configure()`](fn@crate::radio::prelude::EsbInit::configure) is called.
    pub fn new(ce_pin: DO, spi: SPI, delay_impl: DELAY) -> Nrf24l01<SPI, DO, DELAY> {
        Nrf24l01 {
            tx_timeout: 1000,
            mac_address: crate::ble::DEFAULT_MAC,
            rx_buffer: [0u8; 32],
            tx_buffer: [0u8; 32],
            _spi: spi,
            _ce_pin: ce_pin,
            _delay_impl: delay_impl,
            _buf: [0u8; 33],
            _ble_buf: [0u8; 32],
            _status: StatusFlags::from_bits(0),
            // 8 bit CRC, enable all IRQ, and power down as TX
            _config_reg: Config::default(),
            _channel: 76,
            _pa_level: PaLevel::Max,
            _data_rate: DataRate::Mbps1,
            _crc_length: CrcLength::Bit8,
            _payload_length: 32,
            _local_address: [0xE7; 5],
            _destination_address: [0xE7; 5],
            _broadcast_address: [0xC2; 5],
            _mode: Mode::Transceiver,
            _state: RadioState::Uninitialized,
            _tx_pending: false,
            _handler: None,
        }
    }

    /// Release the SPI device, the CE pin and the delay provider.
    pub fn free(self) -> (SPI, DO, DELAY) {
        (self._spi, self._ce_pin, self._delay_impl)
    }

    /// The operating mode that decides how
    /// [`EsbRadio::send()`](fn@crate::radio::prelude::EsbRadio::send) frames data.
    pub fn mode(&self) -> Mode {
        self._mode
    }

    /// The driver's view of the radio's operating state.
    pub fn state(&self) -> RadioState {
        self._state
    }

    fn spi_transfer(&mut self, len: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._spi
            .transfer_in_place(&mut self._buf[..len as usize])
            .map_err(Nrf24Error::Spi)?;
        self._status = StatusFlags::from_bits(self._buf[0]);
        Ok(())
    }

    /// This is also used to write SPI commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, commands::NOP)?;
    /// // STATUS register is now stored in self._status
    /// ```
    fn spi_read(&mut self, len: u8, command: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = command;
        self._buf[1..=len as usize].fill(0);
        self.spi_transfer(len + 1)
    }

    fn spi_write_buf(
        &mut self,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let buf_len = buf.len();
        if buf_len > 32 {
            return Err(Nrf24Error::InvalidArgument);
        }
        self._buf[0] = command;
        self._buf[1..(buf_len + 1)].copy_from_slice(buf);
        self.spi_transfer(buf_len as u8 + 1)
    }

    /// Read a single byte from the given register.
    ///
    /// Only the 5 LSBits of `reg` are used.
    pub fn get_register(&mut self, reg: u8) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(1, commands::R_REGISTER | (reg & commands::REGISTER_MASK))?;
        Ok(self._buf[1])
    }

    /// Write a single byte to the given register.
    ///
    /// Only the 5 LSBits of `reg` are used.
    pub fn set_register(
        &mut self,
        reg: u8,
        value: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = commands::W_REGISTER | (reg & commands::REGISTER_MASK);
        self._buf[1] = value;
        self.spi_transfer(2)
    }

    /// Read `buf.len()` bytes from the given register into `buf`.
    ///
    /// Returns [`Nrf24Error::InvalidArgument`] if `buf` is longer than 32 bytes.
    pub fn read_register(
        &mut self,
        reg: u8,
        buf: &mut [u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = buf.len();
        if len > 32 {
            return Err(Nrf24Error::InvalidArgument);
        }
        self.spi_read(
            len as u8,
            commands::R_REGISTER | (reg & commands::REGISTER_MASK),
        )?;
        buf.copy_from_slice(&self._buf[1..=len]);
        Ok(())
    }

    /// Write all of `buf` to the given register.
    ///
    /// Returns [`Nrf24Error::InvalidArgument`] if `buf` is longer than 32 bytes.
    pub fn write_register(
        &mut self,
        reg: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_write_buf(commands::W_REGISTER | (reg & commands::REGISTER_MASK), buf)
    }

    /// Send a one byte SPI command (like [`commands::FLUSH_TX`] or [`commands::NOP`]).
    ///
    /// The STATUS byte clocked out by the radio is cached as usual.
    pub fn send_command(&mut self, command: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(0, command)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers, Nrf24Error};
    use crate::{spi_test_expects, test::mk_radio, Mode, RadioState};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    fn single_byte_registers() {
        let spi_expectations = spi_test_expects![
            // register index is masked to 5 bits
            (vec![registers::RF_CH, 0u8], vec![0xEu8, 0x4Cu8]),
            (
                vec![registers::RF_CH | commands::W_REGISTER, 0x4Du8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_register(registers::RF_CH | 0xE0).unwrap(), 0x4C);
        radio.set_register(registers::RF_CH | 0x40, 0x4D).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn multi_byte_registers() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::TX_ADDR | commands::W_REGISTER, 1u8, 2, 3, 4, 5],
                vec![0xEu8, 0, 0, 0, 0, 0],
            ),
            (
                vec![registers::TX_ADDR, 0u8, 0, 0, 0, 0],
                vec![0xEu8, 1, 2, 3, 4, 5],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio
            .write_register(registers::TX_ADDR, &[1, 2, 3, 4, 5])
            .unwrap();
        let mut address = [0u8; 5];
        radio
            .read_register(registers::TX_ADDR, &mut address)
            .unwrap();
        assert_eq!(address, [1, 2, 3, 4, 5]);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn oversized_register_buffers() {
        // no SPI transactions expected
        let mocks = mk_radio(&[], &[]);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let mut buf = [0u8; 33];
        assert_eq!(
            radio.read_register(registers::TX_ADDR, &mut buf),
            Err(Nrf24Error::InvalidArgument)
        );
        assert_eq!(
            radio.write_register(registers::TX_ADDR, &buf),
            Err(Nrf24Error::InvalidArgument)
        );
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn commands_cache_status() {
        let spi_expectations = spi_test_expects![
            (vec![commands::REUSE_TX_PL], vec![0x2Eu8]),
            (vec![commands::NOP], vec![0x4Eu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.send_command(commands::REUSE_TX_PL).unwrap();
        assert!(radio._status.tx_ds());
        radio.send_command(commands::NOP).unwrap();
        assert!(radio._status.rx_dr());
        assert!(!radio._status.tx_ds());
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn fresh_handle() {
        let mocks = mk_radio(&[], &[]);
        let radio = mocks.0;
        assert_eq!(radio.state(), RadioState::Uninitialized);
        assert_eq!(radio.mode(), Mode::Transceiver);
        assert_eq!(radio.tx_timeout, 1000);
        // the released objects share expectations with the mocks
        let (mut spi, mut ce_pin, _delay) = radio.free();
        spi.done();
        ce_pin.done();
    }
}
