use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{registers, Config};
use crate::radio::{prelude::EsbCrcLength, Nrf24Error, Nrf24l01};
use crate::{CrcLength, Mode};

impl<SPI, DO, DELAY> EsbCrcLength for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type CrcLengthErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType> {
        let config = self.get_register(registers::CONFIG)?;
        // CRCO set without EN_CRC
        if config & CrcLength::MASK == 4 {
            return Err(Nrf24Error::BinaryCorruption);
        }
        self._config_reg = Config::from_bits(config);
        Ok(self._config_reg.crc_length())
    }

    /// In [`Mode::Beacon`], the radio's CRC stays disabled and `crc_length` is only
    /// remembered for [`Nrf24l01::set_transceiver_mode()`].
    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType> {
        if self._mode == Mode::Beacon {
            self._crc_length = crc_length;
            return Ok(());
        }
        let config = self.get_register(registers::CONFIG)?;
        self._config_reg = Config::from_bits(config).with_crc_length(crc_length);
        self.set_register(registers::CONFIG, self._config_reg.into_bits())?;
        self._crc_length = crc_length;
        Ok(())
    }
}
