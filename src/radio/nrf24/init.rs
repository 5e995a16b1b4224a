use super::{mnemonics, registers, Config, Nrf24Error, Nrf24l01};
use crate::{
    log,
    radio::{
        prelude::{EsbFifo, EsbInit, EsbPower, EsbStatus},
        RadioConfig,
    },
    Mode, RadioState, StatusFlags,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbInit for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// Initialize the radio's hardware using the [`SpiDevice`] and [`OutputPin`] given
    /// to [`Nrf24l01::new()`].
    fn init(&mut self) -> Result<(), Self::ConfigErrorType> {
        // Must allow the radio time to settle else configuration bits will not necessarily stick.
        // Technically we require 4.5ms + 14us as a worst case. We'll just call it 5ms.
        self._delay_impl.delay_ns(5000000);

        self.power_down()?;
        let config = self.get_register(registers::CONFIG)?;
        if config != self._config_reg.into_bits() {
            log::warning!(
                "CONFIG register read back as {=u8:#X}, expected {=u8:#X}",
                config,
                self._config_reg.into_bits()
            );
            return Err(Nrf24Error::BinaryCorruption);
        }
        self.configure()
    }

    fn configure(&mut self) -> Result<(), Self::ConfigErrorType> {
        self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self._tx_pending = false;

        // keep the radio powered down while every other register is rewritten
        self._config_reg = Config::default().with_crc_length(self._crc_length);
        self.set_register(registers::CONFIG, self._config_reg.into_bits())?;

        // no auto-ack, no auto-retries
        self.set_register(registers::EN_AA, 0)?;
        self.set_register(registers::SETUP_RETR, 0)?;
        // pipe 0 (source address) and pipe 1 (broadcast address)
        self.set_register(registers::EN_RXADDR, 3)?;
        // 5 byte addresses
        self.set_register(registers::SETUP_AW, 3)?;

        self.set_register(registers::RF_CH, self._channel)?;
        self.set_register(
            registers::RF_SETUP,
            self._data_rate.into_bits() | self._pa_level.into_bits() | mnemonics::LNA_HCURR,
        )?;

        self.set_register(registers::RX_PW_P0, self._payload_length)?;
        self.set_register(registers::RX_PW_P1, self._payload_length)?;

        let address = self._local_address;
        self.write_register(registers::RX_ADDR_P0, &address)?;
        let address = self._broadcast_address;
        self.write_register(registers::RX_ADDR_P1, &address)?;
        let address = self._destination_address;
        self.write_register(registers::TX_ADDR, &address)?;

        // static payloads only
        self.set_register(registers::DYNPD, 0)?;
        self.set_register(registers::FEATURE, 0)?;

        self.clear_status_flags(StatusFlags::new())?;
        self.flush_rx()?;
        self.flush_tx()?;

        // Set CONFIG register:
        //      Set CRC length
        //      Power up
        //      Enable PTX
        // Do not write CE high so radio will remain in standby-I mode.
        self._config_reg = self._config_reg.with_power(true);
        self.set_register(registers::CONFIG, self._config_reg.into_bits())?;
        // Tpd2stby
        self._delay_impl.delay_us(5000);

        self._mode = Mode::Transceiver;
        self._state = RadioState::Configured;
        log::debug!("radio configured on channel {=u8}", self._channel);
        Ok(())
    }

    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        self._channel = config.channel();
        self._pa_level = config.pa_level();
        self._data_rate = config.data_rate();
        self._crc_length = config.crc_length();
        self._payload_length = config.payload_length();
        self._local_address = config.source_address();
        self._destination_address = config.destination_address();
        self._broadcast_address = config.broadcast_address();
        self.configure()
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
pub(super) mod test {
    extern crate std;
    use super::{registers, EsbInit};
    use crate::{
        radio::{commands, RadioConfig},
        spi_test_expects,
        test::mk_radio,
        CrcLength, DataRate, Mode, PaLevel, RadioState,
    };
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::{vec, vec::Vec};

    /// The SPI transactions expected from `configure()` using the given settings.
    pub fn configure_expects(
        config: &RadioConfig,
        config_reg: u8,
    ) -> Vec<SpiTransaction<u8>> {
        let mut expectations = spi_test_expects![
            // CONFIG written while powered down
            (
                vec![registers::CONFIG | commands::W_REGISTER, config_reg],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::EN_AA | commands::W_REGISTER, 0u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::SETUP_RETR | commands::W_REGISTER, 0u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::EN_RXADDR | commands::W_REGISTER, 3u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::SETUP_AW | commands::W_REGISTER, 3u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::RF_CH | commands::W_REGISTER, config.channel()],
                vec![0xEu8, 0u8],
            ),
            // write data rate && PA level register
            (
                vec![
                    registers::RF_SETUP | commands::W_REGISTER,
                    config.data_rate().into_bits() | config.pa_level().into_bits() | 1
                ],
                vec![0xEu8, 0u8],
            ),
            (
                vec![
                    registers::RX_PW_P0 | commands::W_REGISTER,
                    config.payload_length()
                ],
                vec![0xEu8, 0u8],
            ),
            (
                vec![
                    registers::RX_PW_P1 | commands::W_REGISTER,
                    config.payload_length()
                ],
                vec![0xEu8, 0u8],
            ),
        ]
        .to_vec();
        for (reg, address) in [
            (registers::RX_ADDR_P0, config.source_address()),
            (registers::RX_ADDR_P1, config.broadcast_address()),
            (registers::TX_ADDR, config.destination_address()),
        ] {
            let mut expected = vec![reg | commands::W_REGISTER];
            expected.extend_from_slice(&address);
            expectations.extend(spi_test_expects![(expected, vec![0xEu8; 6]),]);
        }
        expectations.extend(spi_test_expects![
            (
                vec![registers::DYNPD | commands::W_REGISTER, 0u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::FEATURE | commands::W_REGISTER, 0u8],
                vec![0xEu8, 0u8],
            ),
            // clear_status_flags()
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x70u8],
                vec![0xEu8, 0u8],
            ),
            // flush_rx()
            (vec![commands::FLUSH_RX], vec![0xEu8]),
            // flush_tx()
            (vec![commands::FLUSH_TX], vec![0xEu8]),
            // power up as TX
            (
                vec![registers::CONFIG | commands::W_REGISTER, config_reg | 2],
                vec![0xEu8, 0u8],
            ),
        ]);
        expectations
    }

    pub fn init_parametrized(corrupted_binary: bool) {
        let mut ce_expectations = [PinTransaction::set(PinState::Low)].to_vec();
        let mut spi_expectations = spi_test_expects![
            // power_down()
            (
                vec![registers::CONFIG | commands::W_REGISTER, 8u8],
                vec![0xEu8, 0u8],
            ),
        ]
        .to_vec();

        // read back CONFIG register to verify SPI lines are working
        if corrupted_binary {
            spi_expectations.extend(spi_test_expects![(
                vec![registers::CONFIG, 0u8],
                vec![0xFF, 0xFF]
            ),]);
            // !!! expectations stop here if emulating corrupted_binary
        } else {
            spi_expectations.extend(spi_test_expects![(
                vec![registers::CONFIG, 0u8],
                vec![0xEu8, 8u8]
            ),]);
            ce_expectations.push(PinTransaction::set(PinState::Low));
            spi_expectations.extend(configure_expects(&RadioConfig::default(), 8));
        }

        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let result = radio.init();
        if corrupted_binary {
            assert_eq!(result, Err(super::Nrf24Error::BinaryCorruption));
            assert_eq!(radio.state(), RadioState::PoweredDown);
        } else {
            assert!(result.is_ok());
            assert_eq!(radio.state(), RadioState::Configured);
            assert_eq!(radio.mode(), Mode::Transceiver);
        }
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn init_bin_corrupt() {
        init_parametrized(true);
    }

    #[test]
    fn init_ok() {
        init_parametrized(false);
    }

    #[test]
    fn custom_config() {
        let config = RadioConfig::default()
            .with_channel(42)
            .with_pa_level(PaLevel::Low)
            .with_data_rate(DataRate::Kbps250)
            .with_crc_length(CrcLength::Bit16)
            .with_payload_length(8)
            .with_source_address(b"1Node")
            .with_destination_address(b"2Node")
            .with_broadcast_address(b"*Node");
        let ce_expectations = [PinTransaction::set(PinState::Low)];
        // 16 bit CRC
        let spi_expectations = configure_expects(&config, 0xC);
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.with_config(&config).unwrap();
        assert_eq!(radio._payload_length, 8);
        assert!(radio._config_reg.power());
        assert!(!radio._config_reg.is_rx());
        spi.done();
        ce_pin.done();
    }
}
