use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::{
    radio::{
        prelude::{EsbPower, EsbStatus},
        Nrf24Error, Nrf24l01,
    },
    RadioState, StatusFlags,
};

use super::{mnemonics, registers};

impl<SPI, DO, DELAY> EsbPower for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PowerErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// In power standby mode (when not receiving nor transmitting), a non-PA/LNA radio
    /// will consume about 26uA (.026mA).
    /// In full power down mode (a sleep state), the radio will consume approximately
    /// 900nA (.0009mA).
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?; // Guarantee CE is low on powerDown
        self._tx_pending = false;
        self._config_reg = self._config_reg.with_power(false);
        self.set_register(registers::CONFIG, self._config_reg.into_bits())?;
        self._state = RadioState::PoweredDown;
        Ok(())
    }

    fn rx_power_up(&mut self) -> Result<(), Self::PowerErrorType> {
        self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self._tx_pending = false;
        let was_powered = self._config_reg.power();
        self._config_reg = self._config_reg.with_power(true).as_rx();
        self.set_register(registers::CONFIG, self._config_reg.into_bits())?;

        // For nRF24L01+ to go from power down mode to TX or RX mode it must first pass through stand-by mode.
        // There must be a delay of Tpd2standby (see Table 16.) after the nRF24L01+ leaves power down mode before
        // the CE is set high. Tpd2standby can be up to 5ms per the 1.0 datasheet
        if !was_powered {
            self._delay_impl.delay_us(5000);
        }
        self.clear_status_flags(StatusFlags::from_bits(
            mnemonics::MASK_TX_DS | mnemonics::MASK_MAX_RT,
        ))?;
        self._ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._state = RadioState::Receiving;
        Ok(())
    }

    fn tx_power_up(&mut self) -> Result<(), Self::PowerErrorType> {
        self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        let was_powered = self._config_reg.power();
        self._config_reg = self._config_reg.with_power(true).as_tx();
        self.set_register(registers::CONFIG, self._config_reg.into_bits())?;
        if !was_powered {
            self._delay_impl.delay_us(5000);
        }
        self._state = RadioState::Transmitting;
        Ok(())
    }

    /// Is the radio powered up?
    fn is_powered(&self) -> bool {
        self._config_reg.power()
    }

    fn is_rx(&self) -> bool {
        self._config_reg.is_rx()
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{mnemonics, registers, EsbPower};
    use crate::{radio::commands, spi_test_expects, test::mk_radio, RadioState};
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec;

    #[test]
    pub fn rx_power_up() {
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            // assert PWR_UP and PRIM_RX flags
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xBu8],
                vec![0xEu8, 0u8],
            ),
            // clear the tx_df and tx_ds events
            (
                vec![
                    registers::STATUS | commands::W_REGISTER,
                    mnemonics::MASK_MAX_RT | mnemonics::MASK_TX_DS,
                ],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.rx_power_up().unwrap();
        assert!(radio.is_powered());
        assert!(radio.is_rx());
        assert_eq!(radio.state(), RadioState::Receiving);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn tx_power_up() {
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ];
        let spi_expectations = spi_test_expects![
            // rx_power_up()
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xBu8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![
                    registers::STATUS | commands::W_REGISTER,
                    mnemonics::MASK_MAX_RT | mnemonics::MASK_TX_DS,
                ],
                vec![0xEu8, 0u8],
            ),
            // clear PRIM_RX flag, stay powered
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xAu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.rx_power_up().unwrap();
        radio.tx_power_up().unwrap();
        assert!(radio.is_powered());
        assert!(!radio.is_rx());
        assert_eq!(radio.state(), RadioState::Transmitting);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn power_down() {
        let ce_expectations = [PinTransaction::set(PinState::Low)];
        let spi_expectations = spi_test_expects![
            // clear PWR_UP flag
            (
                vec![registers::CONFIG | commands::W_REGISTER, 8u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.power_down().unwrap();
        assert!(!radio.is_powered());
        assert_eq!(radio.state(), RadioState::PoweredDown);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn power_getter() {
        let mocks = mk_radio(&[], &[]);
        let (radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        // without calling `Nrf24l01::init()`, the lib _assumes_ the radio is powered down.
        assert!(!radio.is_powered());
        assert!(!radio.is_rx());
        spi.done();
        ce_pin.done();
    }
}
